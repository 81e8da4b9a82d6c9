use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// The data holder also prints itself and persists itself: console I/O and
/// file I/O coupled to the record they have nothing to do with.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub content: String,
}

impl Report {
    pub fn print(&self) {
        println!("{}", self.title);
        println!("{}", self.content);
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, format!("{}\n{}", self.title, self.content))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_saves_itself() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");
        let report = Report {
            title: "Report title".to_string(),
            content: "Report content".to_string(),
        };

        report.save_to_file(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"Report title\nReport content");
    }

    #[test]
    fn test_save_fails_on_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.txt");
        let report = Report {
            title: "t".to_string(),
            content: "c".to_string(),
        };

        assert!(report.save_to_file(&path).is_err());
    }
}
