use crate::utils::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends the raw message to its file, nothing more.
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn log(&self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(message.as_bytes())?;
        Ok(())
    }
}

/// Constructs and owns its `FileLogger`: the sink is hard-wired, so this
/// service cannot be given a console sink, a buffer for tests, or anything
/// else without editing it.
pub struct UserService {
    logger: FileLogger,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            logger: FileLogger::new("log.txt"),
        }
    }

    pub fn register_user(&self, username: &str) -> Result<()> {
        self.logger.log(&format!("User registered: {username}"))
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_logger_appends_raw_messages() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        let logger = FileLogger::new(&path);

        logger.log("User registered: John").unwrap();
        logger.log("User registered: Jane").unwrap();

        assert_eq!(
            fs::read(&path).unwrap(),
            b"User registered: JohnUser registered: Jane"
        );
    }

    // UserService itself is untestable without touching the real `log.txt`
    // in the working directory, which is exactly the lesson.
}
