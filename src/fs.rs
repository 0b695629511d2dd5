//! File system utilities.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;

use crate::deepl::DeeplError;

/// Writes a translation result through a temp file and a rename.
///
/// An interrupted run never leaves a half-written translation behind. The
/// temp file sits next to the target so the rename stays on one filesystem.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed. A missing
/// target directory is reported as [`DeeplError::FileNotAccessible`] so the
/// prompt loop can recover from it.
pub fn atomic_write(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content).map_err(|e| write_error(path, e, "write"))?;
    fs::rename(&temp_path, path).map_err(|e| write_error(path, e, "move translation into"))?;

    Ok(())
}

fn write_error(path: &Path, err: io::Error, action: &str) -> anyhow::Error {
    if err.kind() == io::ErrorKind::NotFound {
        return DeeplError::FileNotAccessible {
            path: path.to_path_buf(),
            source: err,
        }
        .into();
    }
    anyhow::Error::new(err).context(format!("Failed to {action} {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_text() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report_DE.txt");

        atomic_write(&file_path, "Hallo, Welt!").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Hallo, Welt!");
        assert!(!temp_dir.path().join(".report_DE.txt.tmp").exists());
    }

    #[test]
    fn test_atomic_write_binary() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("deck_translated.pptx");
        let content = [0x50_u8, 0x4b, 0x03, 0x04, 0x00, 0xff];

        atomic_write(&file_path, content).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), content);
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report_KO.txt");

        fs::write(&file_path, "old").unwrap();
        atomic_write(&file_path, "new").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("out.txt");

        let err = atomic_write(&file_path, "x").unwrap_err();
        let deepl_err = err.downcast_ref::<DeeplError>().unwrap();
        assert!(matches!(deepl_err, DeeplError::FileNotAccessible { .. }));
        assert!(deepl_err.is_recoverable());
    }
}
