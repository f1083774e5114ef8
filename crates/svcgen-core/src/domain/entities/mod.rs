pub mod file_plan;

pub use crate::domain::DomainError;
pub use file_plan::{FilePlan, TemplateData};
