use inquire::InquireError;

mod confirm;
mod spinner;
mod theme;

pub use confirm::PromptConfirm;
pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Prints an error line to stderr in the shared error style.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
}
