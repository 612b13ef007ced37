/// A glossary operation that removes remote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    /// Delete one glossary.
    Delete,
    /// Delete every glossary of the account.
    DeleteAll,
    /// Delete the existing glossaries and create a new one.
    Replace,
}

impl DestructiveAction {
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Delete => "About to delete a glossary",
            Self::DeleteAll => "About to delete ALL glossaries",
            Self::Replace => "About to replace the existing glossary",
        }
    }

    pub const fn question(self) -> &'static str {
        match self {
            Self::Delete => "Confirm deletion?",
            Self::DeleteAll => "Confirm deleting all glossaries?",
            Self::Replace => "Delete the old glossary and create a new one?",
        }
    }
}

/// Decides whether a destructive action may proceed.
///
/// Only an explicit `true` lets the action run.
pub trait ConfirmGate {
    fn confirm(&mut self, action: DestructiveAction, description: &str) -> bool;
}

impl<F> ConfirmGate for F
where
    F: FnMut(DestructiveAction, &str) -> bool,
{
    fn confirm(&mut self, action: DestructiveAction, description: &str) -> bool {
        self(action, description)
    }
}
