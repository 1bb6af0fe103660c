//! Quiz round state machine
//!
//! Elm-style: `transition` applies an event to the round and returns effects;
//! the runtime performs them.

mod command;
mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::{Event, Mention};
pub use state::{MessageId, Round};
pub use transition::transition;
