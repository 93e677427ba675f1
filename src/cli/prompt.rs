use super::ui;
use crate::cloud::Instance;
use crate::lifecycle::{PromptError, Prompter};
use dialoguer::{Confirm, Input};

/// Terminal-backed [`Prompter`] used for real runs.
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm_launch(&self, running: usize) -> Result<bool, PromptError> {
        println!(
            "{}",
            ui::format_warning(&format!(
                "{} instance(s) of the managed image are already running.",
                running
            ))
        );
        Confirm::new()
            .with_prompt("Launch another instance anyway?")
            .default(false)
            .interact()
            .map_err(|e| PromptError::Input(e.to_string()))
    }

    fn select_instance(&self, candidates: &[Instance]) -> Result<Option<String>, PromptError> {
        for instance in candidates {
            println!(
                "Running instance {} found (public IP {})",
                ui::format_highlight(&instance.id),
                instance.public_ip.as_deref().unwrap_or("-")
            );
        }
        println!(
            "{}",
            ui::format_warning("The selected instance will be terminated and its data lost.")
        );

        let typed: String = Input::new()
            .with_prompt("Enter the instance ID to stop (leave empty to cancel)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PromptError::Input(e.to_string()))?;
        let typed = typed.trim();
        if typed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(typed.to_string()))
        }
    }
}
