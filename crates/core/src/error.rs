use crate::id::ReportId;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report id must be unique: {id}")]
    DuplicateId { id: ReportId },
    #[error("invalid report id: '{0}' is not a canonical UUID")]
    InvalidId(String),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
