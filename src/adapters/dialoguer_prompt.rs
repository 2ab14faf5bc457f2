use dialoguer::Input;

use crate::domain::AppError;
use crate::ports::UsernamePrompt;

/// Asks for the Gerrit username on the terminal.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl UsernamePrompt for DialoguerPrompt {
    fn ask_username(&self) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt("Please enter your gerrit username")
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(|e| AppError::Prompt {
                what: "gerrit username".into(),
                details: e.to_string(),
            })
    }
}
