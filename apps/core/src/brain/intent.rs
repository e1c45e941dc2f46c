//! Message classification using static phrase tables.
//!
//! Priority is fixed: emotional distress, then exact commands, then symptom
//! variations. No scoring, no ML model - plain substring and equality checks.

use std::fmt;

use super::lexicon::{EmotionalLexicon, SymptomEntry, EMOTIONAL, SYMPTOMS};

/// Recognised bot command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// hi, hello, hey
    Greeting,
    /// help, commands
    Help,
    Time,
    Joke,
    About,
    Ping,
    /// Any message containing "thank"
    Thanks,
    /// bye, goodbye
    Goodbye,
}

impl Command {
    /// Returns a human-readable label for the command
    pub fn label(&self) -> &'static str {
        match self {
            Command::Greeting => "greeting",
            Command::Help => "help",
            Command::Time => "time",
            Command::Joke => "joke",
            Command::About => "about",
            Command::Ping => "ping",
            Command::Thanks => "thanks",
            Command::Goodbye => "goodbye",
        }
    }
}

/// Outcome of classifying one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Contains a distress phrase. Overrides everything else.
    Emotional,
    Command(Command),
    /// First matching symptom in lexicon declaration order
    Symptom(&'static str),
    Unrecognized,
}

impl Classification {
    /// Symptom key, if this is a symptom classification.
    pub fn symptom_key(&self) -> Option<&'static str> {
        match self {
            Classification::Symptom(key) => Some(*key),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Emotional => write!(f, "emotional"),
            Classification::Command(command) => write!(f, "command:{}", command.label()),
            Classification::Symptom(key) => write!(f, "symptom:{}", key),
            Classification::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Lowercases and trims a raw message. This is the form stored in sessions
/// and compared against command keywords.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Intent classifier over the static lexicon
pub struct IntentClassifier {
    symptoms: &'static [SymptomEntry],
    emotional: EmotionalLexicon,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier over the built-in lexicon
    pub fn new() -> Self {
        Self {
            symptoms: SYMPTOMS,
            emotional: EMOTIONAL,
        }
    }

    /// Classify a raw message
    pub fn classify(&self, text: &str) -> Classification {
        let normalized = normalize(text);

        if normalized.is_empty() {
            return Classification::Unrecognized;
        }

        if self.is_distress(&normalized) {
            return Classification::Emotional;
        }

        if let Some(command) = match_command(&normalized) {
            return Classification::Command(command);
        }

        if let Some(entry) = self.find_symptom(&normalized) {
            return Classification::Symptom(entry.key);
        }

        Classification::Unrecognized
    }

    /// True when the lowercased text contains any distress phrase
    pub fn is_distress(&self, lowered: &str) -> bool {
        self.emotional
            .phrases
            .iter()
            .any(|phrase| lowered.contains(phrase))
    }

    /// First symptom whose variation occurs in the lowercased text.
    ///
    /// Entries are scanned in declaration order, then variations in order;
    /// the first hit wins even if a later variation would be a longer match.
    pub fn find_symptom(&self, lowered: &str) -> Option<&'static SymptomEntry> {
        self.symptoms.iter().find(|entry| {
            entry
                .variations
                .iter()
                .any(|variation| lowered.contains(variation))
        })
    }
}

fn match_command(normalized: &str) -> Option<Command> {
    let command = match normalized {
        "hi" | "hello" | "hey" => Command::Greeting,
        "help" | "commands" => Command::Help,
        "time" => Command::Time,
        "joke" => Command::Joke,
        "about" => Command::About,
        "ping" => Command::Ping,
        text if text.contains("thank") => Command::Thanks,
        "bye" | "goodbye" => Command::Goodbye,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_detection() {
        let classifier = IntentClassifier::new();

        for text in ["hi", "Hello", "  HEY  "] {
            assert_eq!(
                classifier.classify(text),
                Classification::Command(Command::Greeting),
                "Expected Greeting for '{}'",
                text
            );
        }
    }

    #[test]
    fn test_greeting_requires_exact_match() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("hi there"), Classification::Unrecognized);
    }

    #[test]
    fn test_thanks_is_substring() {
        let classifier = IntentClassifier::new();

        assert_eq!(
            classifier.classify("Thanks a lot!"),
            Classification::Command(Command::Thanks)
        );
    }

    #[test]
    fn test_distress_beats_symptom() {
        let classifier = IntentClassifier::new();

        assert_eq!(
            classifier.classify("I have a headache and I feel hopeless"),
            Classification::Emotional
        );
    }

    #[test]
    fn test_unknown_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify(""), Classification::Unrecognized);
        assert_eq!(classifier.classify("   "), Classification::Unrecognized);
        assert_eq!(classifier.classify("what's the weather"), Classification::Unrecognized);
    }

    #[test]
    fn test_display() {
        assert_eq!(Classification::Symptom("cough").to_string(), "symptom:cough");
        assert_eq!(
            Classification::Command(Command::Ping).to_string(),
            "command:ping"
        );
    }
}
