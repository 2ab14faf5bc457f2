use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::SecureCopy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub port: String,
    pub source: String,
    pub destination: PathBuf,
}

#[derive(Default)]
pub struct FakeSecureCopy {
    pub copies: Mutex<Vec<CopyRequest>>,
}

impl FakeSecureCopy {
    pub fn copies(&self) -> Vec<CopyRequest> {
        self.copies.lock().unwrap().clone()
    }
}

impl SecureCopy for FakeSecureCopy {
    fn copy_from_remote(
        &self,
        port: &str,
        source: &str,
        destination: &Path,
    ) -> Result<(), AppError> {
        self.copies.lock().unwrap().push(CopyRequest {
            port: port.to_string(),
            source: source.to_string(),
            destination: destination.to_path_buf(),
        });
        Ok(())
    }
}
