use std::fmt;

/// Result of a delete request. Carries no detail beyond success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
}

impl DeleteOutcome {
    /// The user-facing message for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            DeleteOutcome::Deleted => "Employee deleted successfully.",
            DeleteOutcome::Failed => "Failed to delete employee.",
        }
    }

    pub fn is_deleted(self) -> bool {
        self == DeleteOutcome::Deleted
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
