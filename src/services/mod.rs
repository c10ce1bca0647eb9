pub mod match_service;
pub mod question_service;

pub use match_service::MatchService;
pub use question_service::QuestionService;
