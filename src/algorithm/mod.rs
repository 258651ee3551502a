//! Recommendation and audit engine.
//!
//! Every function here is a pure computation over an [`AdvisingContext`](crate::models::AdvisingContext)
//! snapshot loaded once per request; nothing reads the store directly.

pub mod audit;
pub mod eligibility;
pub mod grading;
pub mod groups;
pub mod ingest;
pub mod plan;
pub mod progress;
pub mod recommend;
pub mod seminar;
pub mod transcript;

pub use audit::run_graduation_audit;
pub use grading::is_passing;
pub use groups::GroupResolver;
pub use ingest::{IngestOutcome, NewAttempt, ingest_transcript};
pub use plan::{append_requirements, build_plan};
pub use recommend::build_recommendations;
pub use seminar::next_ethics_seminar;
pub use transcript::TranscriptState;
