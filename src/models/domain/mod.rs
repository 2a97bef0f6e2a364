pub mod learning_session;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod quiz_selection;
pub mod youtube_video;
pub use learning_session::LearningSession;
pub use quiz::Quiz;
pub use quiz_attempt::QuizAttempt;
pub use quiz_question::QuizQuestion;
pub use quiz_selection::QuizSelection;
pub use youtube_video::YouTubeVideo;
