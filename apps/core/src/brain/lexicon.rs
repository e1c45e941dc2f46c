//! Static lexicon for the responder.
//!
//! Symptom table, emotional-distress lexicon and every canned reply the bot
//! can send. Everything here is `'static` and immutable; declaration order
//! of [`SYMPTOMS`] is also the match order used by the classifier.

/// A recognised symptom and everything needed to answer about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomEntry {
    /// Stable identifier recorded in session history (e.g. `chestpain`).
    pub key: &'static str,
    /// Human-readable name used in replies (e.g. `chest pain`).
    pub label: &'static str,
    /// One-sentence description of what the symptom may indicate.
    pub info: &'static str,
    /// Follow-up questions, one of which is asked per reply.
    pub questions: &'static [&'static str],
    /// Lowercase substrings (including common misspellings) that select this entry.
    pub variations: &'static [&'static str],
    /// Urgent symptoms get an additional urgent-care advisory.
    pub urgent: bool,
}

pub const SYMPTOMS: &[SymptomEntry] = &[
    SymptomEntry {
        key: "fever",
        label: "fever",
        info: "Fever can be a sign of infection, inflammation, or other medical conditions.",
        questions: &[
            "How high is your temperature?",
            "How long have you had this fever?",
            "Do you have any other symptoms along with the fever?",
        ],
        variations: &["fever", "feverish", "hot", "burning up", "temperature", "fvr", "feverr"],
        urgent: false,
    },
    SymptomEntry {
        key: "cough",
        label: "cough",
        info: "Coughing may indicate respiratory infections, allergies, or asthma.",
        questions: &[
            "Is your cough dry or productive?",
            "How long have you had this cough?",
            "Does anything seem to make it better or worse?",
        ],
        variations: &["cough", "coughing", "coughh", "coff", "koff", "cuf", "coug"],
        urgent: false,
    },
    SymptomEntry {
        key: "headache",
        label: "headache",
        info: "Headaches can be caused by tension, migraines, dehydration, or more serious conditions.",
        questions: &[
            "Where exactly is your headache located?",
            "How would you describe the pain?",
            "How long have you been experiencing these headaches?",
        ],
        variations: &["headache", "head ache", "hedache", "hedake", "migraine", "head pain", "headhurts"],
        urgent: false,
    },
    SymptomEntry {
        key: "dizzy",
        label: "dizziness",
        info: "Dizziness might be related to inner ear problems, low blood pressure, or neurological issues.",
        questions: &[
            "Does the dizziness come with spinning sensations?",
            "How often do you feel dizzy?",
            "Does it happen when you stand up quickly?",
        ],
        variations: &["dizzy", "dizziness", "dizzyness", "dizzy spell", "lightheaded", "dizy", "dizzie"],
        urgent: false,
    },
    SymptomEntry {
        key: "nausea",
        label: "nausea",
        info: "Nausea can be a symptom of gastrointestinal issues, pregnancy, or infections.",
        questions: &[
            "Have you vomited?",
            "How long have you been feeling nauseous?",
            "Does anything seem to trigger the nausea?",
        ],
        variations: &["nausea", "nauseous", "nausia", "nauseated", "sick to stomach", "feeling sick", "nautious"],
        urgent: false,
    },
    SymptomEntry {
        key: "fatigue",
        label: "fatigue",
        info: "Fatigue may indicate anemia, sleep disorders, thyroid problems, or chronic fatigue syndrome.",
        questions: &[
            "How long have you been feeling unusually tired?",
            "Is your fatigue constant or does it come and go?",
            "Do you have trouble sleeping?",
        ],
        variations: &["fatigue", "tired", "exhausted", "weak", "low energy", "fatigued", "fatique", "fatige"],
        urgent: false,
    },
    SymptomEntry {
        key: "chestpain",
        label: "chest pain",
        info: "Chest pain requires immediate medical attention as it could indicate heart problems.",
        questions: &[
            "Please describe the chest pain in more detail.",
            "Does the pain radiate to other areas?",
            "Are you having any trouble breathing?",
        ],
        variations: &["chest pain", "chest hurt", "chest discomfort", "heart pain", "chestpang", "chestpane"],
        urgent: true,
    },
    SymptomEntry {
        key: "shortness",
        label: "shortness of breath",
        info: "Shortness of breath can be a sign of asthma, heart conditions, or anxiety.",
        questions: &[
            "When did you first notice this shortness of breath?",
            "Does it occur at rest or only with activity?",
            "Do you have any history of respiratory issues?",
        ],
        variations: &[
            "shortness of breath",
            "breathless",
            "can't breathe",
            "difficulty breathing",
            "short breath",
            "breathing problem",
        ],
        urgent: false,
    },
    SymptomEntry {
        key: "sorethroat",
        label: "sore throat",
        info: "Sore throat is commonly caused by viral or bacterial infections.",
        questions: &[
            "How long has your throat been sore?",
            "Do you have difficulty swallowing?",
            "Do you have swollen glands in your neck?",
        ],
        variations: &["sore throat", "throat pain", "throat hurt", "scratchy throat", "sorethrote", "throatsore"],
        urgent: false,
    },
    SymptomEntry {
        key: "cold",
        label: "cold",
        info: "Colds may be caused by viruses or weather changes. It's not safe to ignore persistent symptoms.",
        questions: &[
            "How long have you had these cold symptoms?",
            "Do you have a fever along with your cold?",
            "Are you experiencing any sinus pressure?",
        ],
        variations: &["cold", "common cold", "cold symptoms", "have a cold", "kold", "colde"],
        urgent: false,
    },
];

/// Looks up a symptom entry by key.
pub fn symptom(key: &str) -> Option<&'static SymptomEntry> {
    SYMPTOMS.iter().find(|entry| entry.key == key)
}

/// Trigger phrases, empathetic replies and crisis resources.
#[derive(Debug, Clone, Copy)]
pub struct EmotionalLexicon {
    pub phrases: &'static [&'static str],
    pub responses: &'static [&'static str],
    pub resources: &'static [&'static str],
}

pub const EMOTIONAL: EmotionalLexicon = EmotionalLexicon {
    phrases: &[
        "i want to die",
        "i'm going to die",
        "i cant do this anymore",
        "i give up",
        "i hate my life",
        "end it all",
        "kill myself",
        "suicide",
        "no will to live",
        "nothing matters",
        "so depressed",
        "extremely sad",
        "can't go on",
        "hopeless",
    ],
    responses: &[
        "I'm really concerned about what you're saying. Your life is precious, and there are people who want to help you. Please reach out to a mental health professional or crisis helpline immediately.",
        "It sounds like you're going through an incredibly difficult time. Please know that you don't have to face this alone. There are people who care and want to help. Can you reach out to someone you trust?",
        "I hear the pain in your words, and I want you to know that your feelings are valid. But please know that these intense feelings can pass with proper support. Would you consider contacting a helpline?",
        "I'm really worried about you. When we feel this overwhelmed, it's important to talk to someone who can help. There are professionals available right now who want to support you.",
        "Thank you for sharing this with me. It takes courage to express these feelings. Please know that there is hope and help available. Would you like me to provide some resources?",
    ],
    resources: &[
        "National Suicide Prevention Lifeline: 1-800-273-8255",
        "Crisis Text Line: Text HOME to 741741",
        "International Association for Suicide Prevention: https://www.iasp.info/resources/Crisis_Centres/",
        "Emergency services: 911 or your local emergency number",
    ],
};

pub const RESOURCES_INTRO: &str = "Here are some resources that might help:";
pub const EMOTIONAL_CLOSING: &str =
    "Please reach out to someone. You don't have to go through this alone.";

/// Token replaced by the user's display name in templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

pub const GREETINGS: &[&str] = &[
    "Hello {name}! 👋 I'm here to help with any health questions you might have. How are you feeling today?",
    "Hi {name}! 😊 I'm your medical information assistant. What can I help you with today?",
    "Hey {name}! 👋 Ready to talk about your health concerns? How can I assist you?",
    "Good to see you, {name}! 🌟 I'm here to provide health information. What's on your mind?",
];

pub const THANKS: &[&str] = &[
    "You're very welcome! 😊 I'm always here if you have more questions.",
    "Happy to help! 🌟 Don't hesitate to reach out if anything else comes up.",
    "Anytime! 😊 Remember, I'm here 24/7 for your health information needs.",
    "Glad I could assist! 🌟 Take care and feel free to message again if needed.",
];

pub const GOODBYES: &[&str] = &[
    "Goodbye! 👋 Hope you feel better soon!",
    "Take care! 😊 Remember to consult a doctor for persistent symptoms.",
    "See you later! 🌟 Don't hesitate to message if you have more questions.",
    "Bye for now! 👋 Wishing you good health!",
];

pub const NOT_UNDERSTOOD: &[&str] = &[
    "I'm not quite sure I understand. Could you tell me more about how you're feeling?",
    "Hmm, I'm not following. Could you describe your symptoms in different words?",
    "I want to make sure I help correctly. Could you rephrase that?",
    "Let me try to understand better. Could you tell me what symptoms you're experiencing?",
];

pub const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything! 😄",
    "Why did the scarecrow win an award? He was outstanding in his field! 🌾",
    "Why don't eggs tell jokes? They'd crack each other up! 🥚",
    "What do you call a fake noodle? An impasta! 🍝",
    "Why did the coffee file a police report? It got mugged! ☕",
];

pub const HELP_TEXT: &str = "🤖 Medical Bot - Available commands:

• hi/hello - Greeting
• help - Show this menu
• time - Current time
• joke - Random joke
• about - About this bot
• ping - Test response

💊 Describe your symptoms and I'll provide information about possible causes.

Common symptoms I recognize: fever, cough, headache, dizzy, nausea, fatigue, chest pain, shortness of breath, and more.";

pub const ABOUT_TEXT: &str = "🤖 Medical Symptom Checker Bot v2.0

I'm here to provide general health information and symptom checking. Remember:

• I'm not a substitute for professional medical advice
• Always consult a healthcare provider for proper diagnosis
• In emergencies, please contact local emergency services immediately

Type 'help' to see what I can do!";

pub const PING_TEXT: &str = "🏓 Pong! Everything seems to be working perfectly!";

pub const ALREADY_RESPONDED: &str =
    "I already responded to that. Is there something else you'd like to know?";

pub const REPEATED_MESSAGE: &str = "I notice you're sending the same message. Would you like to talk to a human instead? Type 'help' to see what I can assist with.";

pub const URGENT_WARNING: &str = "🚨 This symptom may require urgent medical attention. Please consider contacting a healthcare professional soon.";

pub const FOLLOW_UP_PREFIX: &str = "To help me understand better:";

pub const DISCLAIMER: &str = "⚠️ Remember: This is for informational purposes only. Please consult a healthcare professional for proper medical advice.";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symptom_keys_are_unique() {
        let keys: HashSet<_> = SYMPTOMS.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), SYMPTOMS.len());
    }

    #[test]
    fn test_variations_are_lowercase() {
        for entry in SYMPTOMS {
            for variation in entry.variations {
                assert_eq!(*variation, variation.to_lowercase(), "in {}", entry.key);
            }
        }
        for phrase in EMOTIONAL.phrases {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }

    #[test]
    fn test_only_chest_pain_is_urgent() {
        let urgent: Vec<_> = SYMPTOMS.iter().filter(|s| s.urgent).map(|s| s.key).collect();
        assert_eq!(urgent, vec!["chestpain"]);
    }

    #[test]
    fn test_symptom_lookup() {
        assert_eq!(symptom("cough").map(|s| s.label), Some("cough"));
        assert!(symptom("toothache").is_none());
    }
}
