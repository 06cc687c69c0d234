use std::path::{Path, PathBuf};

use directories::UserDirs;

use crate::platform::desktop::dialogs::save_csv_path;
use crate::usecase::ports::export::{DeliveryOutcome, ExportError, ExportSink};

fn write_report(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Native save dialog opened in the user's Downloads folder.
#[derive(Debug, Default, Clone)]
pub struct DialogSink;

impl DialogSink {
    fn downloads_dir() -> Option<PathBuf> {
        UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
    }
}

impl ExportSink for DialogSink {
    fn deliver(&self, file_name: &str, contents: &str) -> Result<DeliveryOutcome, ExportError> {
        let downloads = Self::downloads_dir();
        let Some(path) = save_csv_path(downloads.as_deref(), file_name) else {
            return Ok(DeliveryOutcome::Cancelled);
        };
        write_report(&path, contents)?;
        Ok(DeliveryOutcome::Delivered(path))
    }
}

/// Writes straight into a fixed folder, no questions asked.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&self, file_name: &str, contents: &str) -> Result<DeliveryOutcome, ExportError> {
        let path = self.dir.join(file_name);
        write_report(&path, contents)?;
        Ok(DeliveryOutcome::Delivered(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_sink_writes_the_file() {
        let temp = tempfile::tempdir().expect("should create temp dir");
        let sink = DirectorySink::new(temp.path().join("exports"));

        let outcome = sink
            .deliver("paiements_2024-02-15.csv", "ID,Montant\nPAY-001,1200")
            .expect("delivery should succeed");

        let expected = temp.path().join("exports").join("paiements_2024-02-15.csv");
        assert_eq!(outcome, DeliveryOutcome::Delivered(expected.clone()));
        let written = std::fs::read_to_string(expected).expect("file should exist");
        assert_eq!(written, "ID,Montant\nPAY-001,1200");
    }

    #[test]
    fn directory_sink_reports_write_failures() {
        let temp = tempfile::tempdir().expect("should create temp dir");
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").expect("should create blocker file");
        let sink = DirectorySink::new(&blocker);

        let result = sink.deliver("report.csv", "A");

        assert!(matches!(result, Err(ExportError::Write { .. })), "{result:?}");
    }
}
