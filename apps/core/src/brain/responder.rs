//! Reply selection and formatting.
//!
//! Turns a [`Classification`] plus the caller's session into reply text.
//! Variant selection goes through a [`Picker`] so tests can pin it.

use chrono::{DateTime, Local};
use rand::Rng;

use super::intent::{Classification, Command};
use super::lexicon::{self, SymptomEntry, EMOTIONAL};
use crate::session::UserSession;

/// Chooses one of `len` equivalent variants.
pub trait Picker: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Source of the current local time for the `time` command.
pub type Clock = fn() -> DateTime<Local>;

fn system_clock() -> DateTime<Local> {
    Local::now()
}

/// Builds reply text from a classification and session state.
pub struct Responder {
    picker: Box<dyn Picker>,
    clock: Clock,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Responder with random variant selection and the system clock
    pub fn new() -> Self {
        Self::with_picker(Box::new(RandomPicker))
    }

    pub fn with_picker(picker: Box<dyn Picker>) -> Self {
        Self {
            picker,
            clock: system_clock,
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Produces the reply for one message.
    ///
    /// Emotional replies bypass repeat handling entirely. Otherwise a repeat
    /// notice wins over the normal dispatch.
    pub fn respond(
        &self,
        classification: &Classification,
        session: &UserSession,
        display_name: &str,
    ) -> String {
        if *classification == Classification::Emotional {
            return self.emotional_reply();
        }

        match session.repeat_count {
            0 => {}
            1 => return lexicon::ALREADY_RESPONDED.to_string(),
            _ => return lexicon::REPEATED_MESSAGE.to_string(),
        }

        match classification {
            Classification::Command(command) => self.command_reply(*command, display_name),
            Classification::Symptom(key) => match lexicon::symptom(key) {
                Some(entry) => self.symptom_reply(entry),
                None => self.choose(lexicon::NOT_UNDERSTOOD).to_string(),
            },
            Classification::Unrecognized | Classification::Emotional => {
                self.choose(lexicon::NOT_UNDERSTOOD).to_string()
            }
        }
    }

    fn emotional_reply(&self) -> String {
        format!(
            "{}\n\n{}\n{}\n{}\n\n{}",
            self.choose(EMOTIONAL.responses),
            lexicon::RESOURCES_INTRO,
            EMOTIONAL.resources[0],
            EMOTIONAL.resources[1],
            lexicon::EMOTIONAL_CLOSING
        )
    }

    fn command_reply(&self, command: Command, display_name: &str) -> String {
        match command {
            Command::Greeting => {
                self.choose(lexicon::GREETINGS)
                    .replace(lexicon::NAME_PLACEHOLDER, display_name)
            }
            Command::Help => lexicon::HELP_TEXT.to_string(),
            Command::Time => {
                let now = (self.clock)();
                format!(
                    "🕐 It's currently {} on {}",
                    now.format("%-I:%M:%S %p"),
                    now.format("%-m/%-d/%Y")
                )
            }
            Command::Joke => self.choose(lexicon::JOKES).to_string(),
            Command::About => lexicon::ABOUT_TEXT.to_string(),
            Command::Ping => lexicon::PING_TEXT.to_string(),
            Command::Thanks => self.choose(lexicon::THANKS).to_string(),
            Command::Goodbye => self.choose(lexicon::GOODBYES).to_string(),
        }
    }

    fn symptom_reply(&self, entry: &SymptomEntry) -> String {
        let mut reply = format!(
            "I understand you're concerned about {}. {}\n\n",
            entry.label, entry.info
        );

        if entry.urgent {
            reply.push_str(lexicon::URGENT_WARNING);
            reply.push_str("\n\n");
        }

        if !entry.questions.is_empty() {
            reply.push_str(lexicon::FOLLOW_UP_PREFIX);
            reply.push(' ');
            reply.push_str(self.choose(entry.questions));
        }

        reply.push_str("\n\n");
        reply.push_str(lexicon::DISCLAIMER);
        reply
    }

    fn choose<'a>(&self, variants: &'a [&'a str]) -> &'a str {
        if variants.is_empty() {
            return "";
        }
        let index = self.picker.pick(variants.len()).min(variants.len() - 1);
        variants[index]
    }
}
