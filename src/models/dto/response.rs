use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{LearningSession, QuizAttempt, QuizQuestion, YouTubeVideo};

/// A question as shown to the quiz taker; the answer stays on the server.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionDto {
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for QuizQuestionDto {
    fn from(question: &QuizQuestion) -> Self {
        QuizQuestionDto {
            question: question.question.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionDto {
    pub question_index: usize,
    pub option_index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreDto {
    pub correct_count: usize,
    pub total_questions: usize,
    pub percentage: u32,
    pub message: String,
}

impl From<&QuizAttempt> for ScoreDto {
    fn from(attempt: &QuizAttempt) -> Self {
        ScoreDto {
            correct_count: attempt.correct_count,
            total_questions: attempt.total_questions,
            percentage: attempt.percentage,
            message: attempt.message(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningSessionDto {
    pub id: String,
    pub summary: String,
    pub quiz: Vec<QuizQuestionDto>,
    pub selections: Vec<SelectionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreDto>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<&LearningSession> for LearningSessionDto {
    fn from(session: &LearningSession) -> Self {
        LearningSessionDto {
            id: session.id.clone(),
            summary: session.summary.clone(),
            quiz: session.quiz.questions().iter().map(QuizQuestionDto::from).collect(),
            selections: session
                .selection
                .iter()
                .map(|(question_index, option_index)| SelectionDto {
                    question_index,
                    option_index,
                })
                .collect(),
            score: session.last_attempt.as_ref().map(ScoreDto::from),
            created_at: session.created_at,
            modified_at: session.modified_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

pub type ProcessContentResponse = ApiResponse<LearningSessionDto>;

#[derive(Debug, Clone, Serialize)]
pub struct ClipboardDto {
    pub region: String,
    pub text: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct YouTubeValidationDto {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<YouTubeVideo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_url: Option<String>,
}

impl From<Option<YouTubeVideo>> for YouTubeValidationDto {
    fn from(video: Option<YouTubeVideo>) -> Self {
        YouTubeValidationDto {
            valid: video.is_some(),
            watch_url: video.as_ref().map(YouTubeVideo::watch_url),
            video,
        }
    }
}
