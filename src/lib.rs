//! Interaction layer for the Flow Local landing page: the intro reveal,
//! scroll-driven section effects, demo widgets, the FAQ accordion, cookie
//! consent and the privacy and booking dialogs.
//!
//! [`Page::init`] wires everything against the live document. The pure state
//! machines ([`accordion`], [`consent::gate`], [`modal::ModalSet`],
//! [`scroll::trigger`] and the [`anim`] engine) hold no DOM references and are
//! tested natively.

pub mod accordion;
pub mod anim;
pub mod buttons;
pub mod config;
pub mod consent;
pub mod dom;
pub mod effects;
pub mod error;
pub mod intro;
pub mod modal;
pub mod motion;
pub mod page;
pub mod panels;
pub mod performance;
pub mod scroll;

pub use config::PageConfig;
pub use error::{PageError, Result};
pub use motion::MotionPreference;
pub use page::{Env, Page};
