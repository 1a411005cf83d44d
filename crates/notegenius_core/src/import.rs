//! Plain-text file import for the note editor.
//!
//! # Responsibility
//! - Accept `.txt` uploads and read them fully into memory.
//! - Derive a title hint from the file name.
//!
//! # Invariants
//! - Only files whose guessed MIME type is `text/plain` are accepted.
//! - Content is read as UTF-8; nothing is written back to disk.

use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const TEXT_EXTENSION_SUFFIX: &str = ".txt";

/// Text loaded from an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedText {
    /// File name with its first `.txt` removed.
    pub title_hint: String,
    pub content: String,
}

/// Failure while importing a text file.
#[derive(Debug)]
pub enum ImportError {
    /// The file is not plain text.
    UnsupportedType { path: PathBuf, mime: Option<String> },
    /// The file could not be read as UTF-8 text.
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedType { path, mime } => write!(
                f,
                "unsupported file type for `{}`: {}",
                path.display(),
                mime.as_deref().unwrap_or("unknown")
            ),
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::UnsupportedType { .. } => None,
        }
    }
}

/// Returns whether `path` looks like a plain-text upload.
pub fn is_plain_text(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .is_some_and(|mime| mime == mime_guess::mime::TEXT_PLAIN)
}

/// Reads a `.txt` file into an [`ImportedText`].
pub fn import_text_file(path: impl AsRef<Path>) -> Result<ImportedText, ImportError> {
    let path = path.as_ref();
    if !is_plain_text(path) {
        let mime = mime_guess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string());
        warn!(
            "event=text_import module=import status=rejected mime={}",
            mime.as_deref().unwrap_or("unknown")
        );
        return Err(ImportError::UnsupportedType {
            path: path.to_path_buf(),
            mime,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    info!(
        "event=text_import module=import status=ok bytes={}",
        content.len()
    );
    Ok(ImportedText {
        title_hint: title_hint(&file_name),
        content,
    })
}

/// Removes the first `.txt` occurrence from a file name.
pub fn title_hint(file_name: &str) -> String {
    file_name.replacen(TEXT_EXTENSION_SUFFIX, "", 1)
}

#[cfg(test)]
mod tests {
    use super::{is_plain_text, title_hint};
    use std::path::Path;

    #[test]
    fn only_txt_is_plain_text() {
        assert!(is_plain_text(Path::new("notes/meeting.txt")));
        assert!(!is_plain_text(Path::new("notes/meeting.md")));
        assert!(!is_plain_text(Path::new("notes/meeting")));
    }

    #[test]
    fn title_hint_drops_first_txt_only() {
        assert_eq!(title_hint("meeting.txt"), "meeting");
        assert_eq!(title_hint("a.txt.b.txt"), "a.b.txt");
    }
}
