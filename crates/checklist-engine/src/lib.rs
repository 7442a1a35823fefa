//! Checklist engine for NSW Complying Development Certificate (CDC)
//! assessments of swimming pools and spas.
//!
//! Pure crate: the hand-authored regulatory rule set lives in [`sections`],
//! and everything else is derivation over checklist state — progress
//! summaries, the critical gateway pass/fail, AI-result merging, and report
//! assembly. No async, no network, no I/O.

pub mod gate;
pub mod merge;
pub mod progress;
pub mod report;
pub mod sections;

pub use gate::{failed_gateway_checks, passes_gateway, FailedCheck, CRITICAL_CHECK_IDS};
pub use merge::{apply_analysis, update_notes, update_status};
pub use progress::{summarize, ProgressSummary};
pub use report::{build_report, AssessmentReport};
pub use sections::{checklist_for, full_checklist};
