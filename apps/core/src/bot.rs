//! Message pipeline: session update, classification, reply.

use tracing::{debug, info};

use crate::brain::{normalize, Classification, IntentClassifier, Responder};
use crate::models::IncomingMessage;
use crate::session::{SessionStore, UserSession};

/// The bot core. Owns the session store; single writer.
pub struct MediBot {
    sessions: SessionStore,
    classifier: IntentClassifier,
    responder: Responder,
    fallback_name: String,
}

impl MediBot {
    pub fn new(responder: Responder, fallback_name: impl Into<String>) -> Self {
        Self {
            sessions: SessionStore::new(),
            classifier: IntentClassifier::new(),
            responder,
            fallback_name: fallback_name.into(),
        }
    }

    /// Handles one inbound message.
    ///
    /// Returns `None` for group chats, which are ignored without touching
    /// any session. Every other message yields exactly one reply.
    pub fn on_message(&mut self, message: &IncomingMessage) -> Option<String> {
        if message.is_group_chat {
            debug!(user_id = %message.user_id, "Ignoring group message");
            return None;
        }

        let classification = self.classifier.classify(&message.text);
        let normalized = normalize(&message.text);

        self.sessions.touch(
            &message.user_id,
            &normalized,
            classification.symptom_key(),
        );
        if classification == Classification::Emotional {
            self.sessions.mark_distressed(&message.user_id);
        }

        let session = self.sessions.get(&message.user_id)?;
        debug!(
            user_id = %message.user_id,
            %classification,
            repeat_count = session.repeat_count,
            "Message classified"
        );

        let name = message.name_or(&self.fallback_name);
        Some(self.responder.respond(&classification, session, name))
    }

    /// Transport lost its connection; forget everyone.
    pub fn on_disconnected(&mut self) -> usize {
        let dropped = self.sessions.clear_all();
        info!(dropped, "Transport disconnected, sessions cleared");
        dropped
    }

    /// Periodic bulk sweep.
    pub fn clear_sessions(&mut self) -> usize {
        let dropped = self.sessions.clear_all();
        info!(dropped, "Cleaning up old user sessions");
        dropped
    }

    pub fn session(&self, user_id: &str) -> Option<&UserSession> {
        self.sessions.get(user_id)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn sessions_snapshot(&self) -> Vec<UserSession> {
        self.sessions.snapshot()
    }
}

impl Default for MediBot {
    fn default() -> Self {
        Self::new(Responder::new(), "there")
    }
}
