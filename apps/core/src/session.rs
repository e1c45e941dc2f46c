use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coarse position in the conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Idle,
    DiscussingSymptoms,
}

/// Last observed emotional state of the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    #[default]
    Neutral,
    /// A distress phrase was seen since the session was created.
    Distressed,
}

/// Per-user conversation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Transport-level user identifier.
    pub user_id: String,
    /// Normalized text of the previous message.
    pub last_message: String,
    pub message_count: u64,
    /// Number of consecutive repeats of `last_message`.
    pub repeat_count: u32,
    /// Symptom keys in the order they were mentioned.
    pub symptom_history: Vec<String>,
    pub conversation_state: ConversationState,
    pub emotional_state: EmotionalState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSession {
    /// Creates an empty session for `user_id`.
    pub fn new(user_id: &str) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.to_string(),
            last_message: String::new(),
            message_count: 0,
            repeat_count: 0,
            symptom_history: Vec::new(),
            conversation_state: ConversationState::Idle,
            emotional_state: EmotionalState::Neutral,
            created_at: now,
            updated_at: now,
        }
    }
}

/// In-memory session store keyed by user id.
///
/// Holds at most one session per user. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, UserSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one message from `user_id`, creating the session on first sight.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Transport-level identifier of the sender.
    /// * `normalized_text` - Trimmed, lowercased message text.
    /// * `symptom` - Symptom key detected in this message, if any.
    ///
    /// # Returns
    ///
    /// The updated session. Later calls observe the same record.
    pub fn touch(
        &mut self,
        user_id: &str,
        normalized_text: &str,
        symptom: Option<&str>,
    ) -> &UserSession {
        let session = self
            .sessions
            .entry(user_id.to_string())
            .or_insert_with(|| UserSession::new(user_id));

        session.message_count += 1;

        // A fresh session has no previous message, so an empty first text is not a repeat.
        if session.message_count > 1 && session.last_message == normalized_text {
            session.repeat_count += 1;
        } else {
            session.repeat_count = 0;
        }

        session.last_message = normalized_text.to_string();

        if let Some(key) = symptom {
            session.symptom_history.push(key.to_string());
            session.conversation_state = ConversationState::DiscussingSymptoms;
        }

        session.updated_at = Utc::now();
        session
    }

    /// Flags the user's session as distressed. No-op for unknown users.
    pub fn mark_distressed(&mut self, user_id: &str) {
        if let Some(session) = self.sessions.get_mut(user_id) {
            session.emotional_state = EmotionalState::Distressed;
        }
    }

    pub fn get(&self, user_id: &str) -> Option<&UserSession> {
        self.sessions.get(user_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drops every session and returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let dropped = self.sessions.len();
        self.sessions.clear();
        dropped
    }

    /// Copies all sessions, sorted by user id.
    pub fn snapshot(&self) -> Vec<UserSession> {
        let mut sessions: Vec<UserSession> = self.sessions.values().cloned().collect();
        sessions.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_creates_session() {
        let mut store = SessionStore::new();
        let session = store.touch("u1", "hi", None);

        assert_eq!(session.message_count, 1);
        assert_eq!(session.repeat_count, 0);
        assert_eq!(session.conversation_state, ConversationState::Idle);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_repeat_counter_sequence() {
        let mut store = SessionStore::new();
        store.touch("u1", "hi", None);
        assert_eq!(store.touch("u1", "hi", None).repeat_count, 1);
        assert_eq!(store.touch("u1", "hi", None).repeat_count, 2);
        assert_eq!(store.touch("u1", "hello", None).repeat_count, 0);
    }

    #[test]
    fn test_empty_first_message_is_not_a_repeat() {
        let mut store = SessionStore::new();
        assert_eq!(store.touch("u1", "", None).repeat_count, 0);
        assert_eq!(store.touch("u1", "", None).repeat_count, 1);
    }

    #[test]
    fn test_clear_all() {
        let mut store = SessionStore::new();
        store.touch("a", "x", None);
        store.touch("b", "y", None);

        assert_eq!(store.clear_all(), 2);
        assert!(store.is_empty());
        assert!(store.get("a").is_none());
    }
}
