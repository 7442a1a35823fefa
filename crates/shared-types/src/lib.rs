pub mod chat;
pub mod types;

pub use chat::{ChatMessage, ChatRole};
pub use types::{
    AnalysisResponse, AnalysisResult, ChecklistCategory, ChecklistItem, ComplianceStatus,
    FileUpload, ProjectMetadata, ProjectType,
};
