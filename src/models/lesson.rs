//! Typed view of the lesson document the model is instructed to emit.
//!
//! The generate-lesson route returns the raw JSON produced by the model; this
//! model is used to check the document against the expected drop schema
//! (warn-only) and by tests that build well-formed lessons.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub estimated_time: String,
    pub drops: Vec<Drop>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drop {
    #[serde(rename = "type")]
    pub kind: DropKind,
    pub sender: String,
    pub messages: Vec<DropMessage>,
    pub interaction: Interaction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<i64>,
}

/// The four teaching steps a lesson is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropKind {
    Gancho,
    Conceito,
    Reflexao,
    Reforco,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropMessage {
    pub text: String,
    /// Milliseconds to wait before showing the message. Wire key is `delay`.
    #[serde(rename = "delay", default)]
    pub delay_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Interaction {
    Continue {
        button: String,
    },
    Quiz {
        question: String,
        options: Vec<QuizOption>,
        xp_correct: i64,
        xp_incorrect: i64,
    },
    Complete {
        button: String,
        #[serde(rename = "bonusXP")]
        bonus_xp: i64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub correct: bool,
    pub feedback: String,
}

impl Lesson {
    /// Quiz questions that violate the exactly-one-correct-option invariant.
    pub fn invalid_quizzes(&self) -> Vec<&str> {
        self.drops
            .iter()
            .filter_map(|drop| match &drop.interaction {
                Interaction::Quiz {
                    question, options, ..
                } => {
                    let correct = options.iter().filter(|o| o.correct).count();
                    (correct != 1).then_some(question.as_str())
                }
                _ => None,
            })
            .collect()
    }
}
