//! Tweening engine: easing curves, keyframed tweens, timelines, and the
//! frame-driven players that apply them to elements.

pub mod easing;
pub mod playhead;
pub mod player;
pub mod timeline;
pub mod tween;

pub use easing::Easing;
pub use playhead::{PlayDirection, Playhead};
pub use player::{Animation, ReversibleAnimation};
pub use timeline::{Offset, Timeline};
pub use tween::{Frame, Property, Repeat, Track, Tween};
