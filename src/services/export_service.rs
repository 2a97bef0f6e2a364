use std::str::FromStr;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{quiz_question::option_letter, LearningSession, Quiz},
    rendering::quiz_visible_text,
};

pub const SUMMARY_FILENAME: &str = "learning_summary.md";
pub const QUIZ_FILENAME: &str = "learning_quiz.txt";

pub const COPY_SUCCESS_MESSAGE: &str = "Content copied to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy content to clipboard.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

/// Page region whose text can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardRegion {
    Summary,
    Quiz,
    Result,
}

impl ClipboardRegion {
    pub fn element_id(&self) -> &'static str {
        match self {
            ClipboardRegion::Summary => "summary-content",
            ClipboardRegion::Quiz => "quiz-container",
            ClipboardRegion::Result => "quiz-result",
        }
    }
}

impl FromStr for ClipboardRegion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" | "summary-content" => Ok(ClipboardRegion::Summary),
            "quiz" | "quiz-container" => Ok(ClipboardRegion::Quiz),
            "result" | "quiz-result" => Ok(ClipboardRegion::Result),
            other => Err(AppError::ValidationError(format!(
                "Unknown clipboard region '{}'",
                other
            ))),
        }
    }
}

pub struct ExportService;

impl ExportService {
    pub fn summary_file(session: &LearningSession) -> ExportFile {
        ExportFile {
            filename: SUMMARY_FILENAME,
            content_type: "text/markdown; charset=utf-8",
            body: session.summary.clone(),
        }
    }

    pub fn quiz_file(session: &LearningSession) -> ExportFile {
        ExportFile {
            filename: QUIZ_FILENAME,
            content_type: "text/plain; charset=utf-8",
            body: Self::quiz_transcript(&session.quiz),
        }
    }

    /// Plain-text Q&A: lettered options followed by the correct letter.
    pub fn quiz_transcript(quiz: &Quiz) -> String {
        let mut text = String::new();

        for (index, question) in quiz.questions().iter().enumerate() {
            text.push_str(&format!("Question {}: {}\n\n", index + 1, question.question));

            for (option_index, option) in question.options.iter().enumerate() {
                text.push_str(&format!("{}) {}\n", option_letter(option_index), option));
            }

            text.push_str(&format!("\nCorrect Answer: {}\n\n", question.answer_letter()));
        }

        text
    }

    /// Summary copies the raw markdown; other regions copy their visible text.
    pub fn clipboard_text(session: &LearningSession, region: ClipboardRegion) -> AppResult<String> {
        match region {
            ClipboardRegion::Summary => Ok(session.summary.clone()),
            ClipboardRegion::Quiz => Ok(quiz_visible_text(&session.quiz)),
            ClipboardRegion::Result => session
                .last_attempt
                .as_ref()
                .map(|attempt| attempt.message())
                .ok_or_else(|| {
                    AppError::ValidationError(format!(
                        "{} The quiz result is not shown",
                        COPY_FAILURE_MESSAGE
                    ))
                }),
        }
    }
}
