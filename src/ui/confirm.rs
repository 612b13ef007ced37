//! Console confirmation gate for destructive glossary operations.

use inquire::Confirm;

use super::Style;
use crate::lifecycle::{ConfirmGate, DestructiveAction};

/// Asks the user on the terminal before anything is deleted.
///
/// Defaults to "no"; a cancelled or failed prompt counts as a refusal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirm;

impl ConfirmGate for PromptConfirm {
    fn confirm(&mut self, action: DestructiveAction, description: &str) -> bool {
        println!();
        println!("{}", Style::warning(action.headline()));
        println!("{description}");

        let answer = Confirm::new(action.question())
            .with_default(false)
            .prompt();

        match answer {
            Ok(true) => true,
            Ok(false) => {
                println!("Cancelled");
                false
            }
            Err(e) => {
                tracing::debug!("confirmation prompt aborted: {e}");
                println!();
                false
            }
        }
    }
}
