//! Cookie consent: the persisted choice, the banner, and the third-party
//! tracking it unlocks.

pub mod banner;
pub mod gate;
pub mod storage;
pub mod tracking;

pub use banner::ConsentBanner;
pub use gate::{ConsentChoice, ConsentGate, ConsentState, ConsentStore, GateAction};
pub use storage::LocalStorageStore;
