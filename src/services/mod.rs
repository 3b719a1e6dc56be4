//! Business logic services

pub mod contest_service;
pub mod detector_run_service;
pub mod plagiarism_service;
pub mod question_service;
pub mod submission_service;

pub use contest_service::ContestService;
pub use detector_run_service::DetectorRunService;
pub use plagiarism_service::PlagiarismService;
pub use question_service::QuestionService;
pub use submission_service::SubmissionService;
