//! Session Tests
//!
//! Session tracking as seen through the bot pipeline.

use super::FixedPicker;
use crate::bot::MediBot;
use crate::brain::Responder;
use crate::models::IncomingMessage;
use crate::session::{ConversationState, EmotionalState, SessionStore};

fn bot() -> MediBot {
    MediBot::new(Responder::with_picker(Box::new(FixedPicker(0))), "there")
}

#[test]
fn test_repeat_count_follows_property() {
    let mut store = SessionStore::new();

    store.touch("U", "hi", None);
    assert_eq!(store.touch("U", "hi", None).repeat_count, 1);
    assert_eq!(store.touch("U", "hi", None).repeat_count, 2);
    assert_eq!(store.touch("U", "hello", None).repeat_count, 0);
    assert_eq!(store.get("U").unwrap().message_count, 4);
}

#[test]
fn test_repeat_detection_is_case_and_space_insensitive() {
    let mut bot = bot();

    bot.on_message(&IncomingMessage::direct("U", "Hello"));
    bot.on_message(&IncomingMessage::direct("U", "  hello "));

    let session = bot.session("U").unwrap();
    assert_eq!(session.repeat_count, 1);
    assert_eq!(session.last_message, "hello");
}

#[test]
fn test_sessions_are_independent() {
    let mut bot = bot();

    bot.on_message(&IncomingMessage::direct("A", "ping"));
    bot.on_message(&IncomingMessage::direct("B", "ping"));

    assert_eq!(bot.session_count(), 2);
    assert_eq!(bot.session("A").unwrap().repeat_count, 0);
    assert_eq!(bot.session("B").unwrap().repeat_count, 0);
}

#[test]
fn test_symptom_history_and_state() {
    let mut bot = bot();

    bot.on_message(&IncomingMessage::direct("U", "hi"));
    assert_eq!(
        bot.session("U").unwrap().conversation_state,
        ConversationState::Idle
    );

    bot.on_message(&IncomingMessage::direct("U", "I have a fever"));
    bot.on_message(&IncomingMessage::direct("U", "and now a cough"));

    let session = bot.session("U").unwrap();
    assert_eq!(session.symptom_history, vec!["fever", "cough"]);
    assert_eq!(
        session.conversation_state,
        ConversationState::DiscussingSymptoms
    );
}

#[test]
fn test_distress_marks_session() {
    let mut bot = bot();

    bot.on_message(&IncomingMessage::direct("U", "I feel hopeless"));
    assert_eq!(
        bot.session("U").unwrap().emotional_state,
        EmotionalState::Distressed
    );
}

#[test]
fn test_group_messages_create_no_session() {
    let mut bot = bot();

    let reply = bot.on_message(&IncomingMessage::direct("G", "hi").in_group());
    assert!(reply.is_none());
    assert_eq!(bot.session_count(), 0);
}

#[test]
fn test_disconnect_and_sweep_clear_everything() {
    let mut bot = bot();

    bot.on_message(&IncomingMessage::direct("A", "hi"));
    bot.on_message(&IncomingMessage::direct("B", "hi"));
    assert_eq!(bot.on_disconnected(), 2);
    assert_eq!(bot.session_count(), 0);

    bot.on_message(&IncomingMessage::direct("A", "hi"));
    assert_eq!(bot.clear_sessions(), 1);

    // A cleared user starts over: the same text is no longer a repeat.
    bot.on_message(&IncomingMessage::direct("A", "hi"));
    assert_eq!(bot.session("A").unwrap().repeat_count, 0);
    assert_eq!(bot.session("A").unwrap().message_count, 1);
}

#[test]
fn test_snapshot_is_sorted_and_serializable() {
    let mut bot = bot();

    bot.on_message(&IncomingMessage::direct("zed", "hi"));
    bot.on_message(&IncomingMessage::direct("amy", "cough"));

    let snapshot = bot.sessions_snapshot();
    let ids: Vec<&str> = snapshot.iter().map(|s| s.user_id.as_str()).collect();
    assert_eq!(ids, vec!["amy", "zed"]);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json[0]["conversation_state"], "discussing_symptoms");
    assert_eq!(json[1]["emotional_state"], "neutral");
}
