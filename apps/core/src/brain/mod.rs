//! # Brain Module
//!
//! Rule-based analysis for MediBot. No model, no network: every reply is
//! picked from static tables.
//!
//! ## Components
//! - `lexicon`: symptom table, distress phrases and canned replies
//! - `intent`: message classification (emotional > command > symptom)
//! - `responder`: reply selection and formatting

pub mod intent;
pub mod lexicon;
pub mod responder;

pub use intent::{normalize, Classification, Command, IntentClassifier};
pub use lexicon::{EmotionalLexicon, SymptomEntry};
pub use responder::{Clock, Picker, RandomPicker, Responder};
