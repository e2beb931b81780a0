pub mod controller;
pub mod trigger;

pub use controller::ScrollController;
pub use trigger::{
    Layout, Region, ScrollTrigger, ToggleAction, ToggleActions, TriggerEvent, TriggerPosition,
};
