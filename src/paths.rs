//! Path handling for prompt input and translated output files.

use std::io;
use std::path::{Path, PathBuf};

/// Turns a path typed or dragged into the terminal into a usable path.
///
/// Shells escape spaces when a file is dropped onto the terminal
/// (`my\ report.txt`), so `\ ` becomes a plain space. Surrounding whitespace
/// is removed.
pub fn normalize_input_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.replace("\\ ", " ").trim())
}

/// Where the direct text translation of `source` is written.
///
/// The target language is inserted between the file stem and its extension,
/// next to the source file: `notes/report.txt` → `notes/report_EN-US.txt`.
pub fn text_output_path(source: &Path, target_lang: &str) -> PathBuf {
    let (stem, extension) = split_file_name(source);
    source.with_file_name(format!("{stem}_{target_lang}{extension}"))
}

/// Where the translated document for `source` is written.
///
/// `_translated` is inserted before the extension. The file lands in the
/// source's directory, or in the current directory when `source` is a bare
/// file name.
pub fn document_output_path(source: &Path) -> io::Result<PathBuf> {
    let (stem, extension) = split_file_name(source);
    let file_name = format!("{stem}_translated{extension}");

    match source.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.join(file_name)),
        _ => Ok(std::env::current_dir()?.join(file_name)),
    }
}

/// Splits the final path component into its stem and its extension
/// (with the leading dot, or empty).
fn split_file_name(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, extension)
}
