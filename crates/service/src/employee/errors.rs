use thiserror::Error;

/// Outcomes of employee operations other than success or absence.
#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("an employee with email {0} already exists")]
    EmailTaken(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl EmployeeError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            EmployeeError::EmailTaken(_) => 2001,
            EmployeeError::Repository(_) => 2100,
        }
    }
}
