use serde::{Deserialize, Serialize};

/// A message delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Opaque sender identifier (e.g. a phone-number JID).
    pub user_id: String,
    /// Contact display name, when the transport could resolve one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Raw message body.
    pub text: String,
    /// Group chats are ignored by the bot.
    #[serde(default)]
    pub is_group_chat: bool,
}

impl IncomingMessage {
    /// Direct message without a resolved display name.
    pub fn direct(user_id: &str, text: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: None,
            text: text.to_string(),
            is_group_chat: false,
        }
    }

    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    pub fn in_group(mut self) -> Self {
        self.is_group_chat = true;
        self
    }

    /// Display name to greet the user with, or `fallback` when none is known.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
    }
}

/// A reply handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub user_id: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fallback() {
        let msg = IncomingMessage::direct("u", "hi");
        assert_eq!(msg.name_or("there"), "there");

        let msg = msg.with_display_name("  ");
        assert_eq!(msg.name_or("there"), "there");

        let msg = IncomingMessage::direct("u", "hi").with_display_name("Sam");
        assert_eq!(msg.name_or("there"), "Sam");
    }

    #[test]
    fn test_deserialize_defaults() {
        let msg: IncomingMessage =
            serde_json::from_str(r#"{"user_id":"u1","text":"ping"}"#).unwrap();
        assert_eq!(msg, IncomingMessage::direct("u1", "ping"));
    }
}
