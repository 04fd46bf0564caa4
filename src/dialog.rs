//! USSD dialog state machine
//!
//! Pure transitions in the Elm style: a session snapshot plus a step derived
//! from the accumulated input produce a new snapshot and the screen to show.
//! All I/O lives in [`crate::controller`].

mod screen;
pub mod state;
pub mod step;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use screen::Screen;
pub use state::{DialogState, Session};
pub use step::Step;
pub use transition::{transition, DialogError};
