//! Database repositories
//!
//! Repositories handle all direct database interactions. Lookups by partial
//! exemplar go through the per-entity filter structs; populated fields are
//! matched by equality and `None` fields are ignored.

pub mod contest_repo;
pub mod detector_run_repo;
pub mod plagiarism_repo;
pub mod question_repo;
pub mod submission_repo;

pub use contest_repo::{ContestFilter, ContestRepository};
pub use detector_run_repo::{DetectorRunFilter, DetectorRunRepository};
pub use plagiarism_repo::{PlagiarismFilter, PlagiarismRepository};
pub use question_repo::{QuestionFilter, QuestionRepository};
pub use submission_repo::{SubmissionFilter, SubmissionRepository};
