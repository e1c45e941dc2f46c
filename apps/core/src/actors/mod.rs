//! Actor layer around the bot core.
//!
//! - `supervisor`: single-writer actor owning the bot and delivering replies
//! - `sweeper`: periodic bulk session clearing
//! - `traits`: the `Transport` seam
//! - `messages`: mailbox messages and actor/delivery errors

pub mod messages;
pub mod supervisor;
pub mod sweeper;
pub mod traits;
