use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        quiz::EXPECTED_QUESTION_COUNT, quiz_question::EXPECTED_OPTION_COUNT, Quiz, QuizQuestion,
    },
};

static JSON_FENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```json\n(.*)\n```").expect("JSON_FENCE_REGEX is a valid regex pattern")
});

static PLAIN_FENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```\n(.*)\n```").expect("PLAIN_FENCE_REGEX is a valid regex pattern")
});

// An array of objects, so the options array inside a bare question object never matches.
static OBJECT_ARRAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[\s*\{.*\}\s*\]").expect("OBJECT_ARRAY_REGEX is a valid regex pattern")
});

static ANY_ARRAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[.*\]").expect("ANY_ARRAY_REGEX is a valid regex pattern")
});

/// Picks the part of a model reply that should hold the quiz JSON.
///
/// Tried in order: a ```` ```json ```` fence, a plain ```` ``` ```` fence, a bracketed
/// array of objects, then any bracketed array when the reply holds no object at all.
/// Falls back to the whole reply.
pub fn extract_quiz_json(reply: &str) -> &str {
    if let Some(inner) = JSON_FENCE_REGEX.captures(reply).and_then(|c| c.get(1)) {
        return inner.as_str();
    }

    if let Some(inner) = PLAIN_FENCE_REGEX.captures(reply).and_then(|c| c.get(1)) {
        return inner.as_str();
    }

    if let Some(array) = OBJECT_ARRAY_REGEX.find(reply) {
        return array.as_str();
    }

    // without objects there is no options array to mistake for the quiz
    if !reply.contains('{') {
        if let Some(array) = ANY_ARRAY_REGEX.find(reply) {
            return array.as_str();
        }
    }

    reply
}

/// Parses a model reply into a quiz. A bare object (or comma-separated objects) is
/// wrapped into an array first.
pub fn parse_quiz(reply: &str) -> AppResult<Quiz> {
    let candidate = extract_quiz_json(reply).trim();

    let questions: Vec<QuizQuestion> = if candidate.starts_with('[') {
        serde_json::from_str(candidate)?
    } else {
        serde_json::from_str(&format!("[{}]", candidate))?
    };

    for (index, question) in questions.iter().enumerate() {
        if !question.has_valid_answer() {
            return Err(AppError::ParseError(format!(
                "question {} has answer index {} but only {} options",
                index + 1,
                question.answer,
                question.options.len()
            )));
        }

        if question.options.len() != EXPECTED_OPTION_COUNT {
            log::warn!(
                "Quiz question {} has {} options, expected {}",
                index + 1,
                question.options.len(),
                EXPECTED_OPTION_COUNT
            );
        }
    }

    if questions.len() != EXPECTED_QUESTION_COUNT {
        log::warn!(
            "Quiz has {} questions, expected {}",
            questions.len(),
            EXPECTED_QUESTION_COUNT
        );
    }

    Ok(Quiz::new(questions))
}
