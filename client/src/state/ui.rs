//! Local header UI state: login dialog visibility and submit outcomes.
//!
//! DESIGN
//! ======
//! Visibility is a plain owned enum with explicit transitions. The header
//! keeps it in a local signal; nothing outside the header writes it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Whether the login/register dialog is currently offered to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

/// Result of a login or register submission as seen by the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The store accepted the submission.
    Succeeded,
    /// The store rejected the submission.
    Failed,
    /// Local validation failed; the store was never called.
    Rejected,
}

impl ModalVisibility {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Login trigger clicked.
    #[must_use]
    pub fn open(self) -> Self {
        Self::Open
    }

    /// Explicit close (button, backdrop, Escape).
    #[must_use]
    pub fn close(self) -> Self {
        Self::Closed
    }

    /// Apply a submit outcome: only success closes the dialog.
    #[must_use]
    pub fn after(self, outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Succeeded => Self::Closed,
            SubmitOutcome::Failed | SubmitOutcome::Rejected => self,
        }
    }
}
