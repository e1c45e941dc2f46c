//! MediBot core: rule-based symptom responder.
//!
//! The transport hands in an [`IncomingMessage`](models::IncomingMessage);
//! the bot updates the sender's session, classifies the text and returns one
//! reply. See [`bot::MediBot`] for the synchronous pipeline and
//! [`actors::supervisor::SupervisorHandle`] for the actor that delivers
//! replies through a [`Transport`](actors::traits::Transport).

pub mod actors;
pub mod bot;
pub mod brain;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod session;
pub mod telemetry;

#[cfg(test)]
mod tests;
