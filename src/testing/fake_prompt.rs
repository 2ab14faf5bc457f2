use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::UsernamePrompt;

#[derive(Default)]
pub struct FakePrompt {
    pub answer: String,
    pub calls: Mutex<usize>,
}

impl FakePrompt {
    pub fn answering(answer: &str) -> Self {
        Self { answer: answer.to_string(), calls: Mutex::new(0) }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl UsernamePrompt for FakePrompt {
    fn ask_username(&self) -> Result<String, AppError> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.answer.trim().to_string())
    }
}
