use crate::domain::AppError;

/// Source of the Gerrit username when none is stored.
pub trait UsernamePrompt {
    fn ask_username(&self) -> Result<String, AppError>;
}
