//! Photo upload validation and storage
//!
//! Gate on a fixed extension allow-list, sanitize the client-supplied
//! filename, and persist bytes under the configured upload directory.
//! The stored public path (`uploads/<name>`) is what the owning row keeps
//! and what the static file route serves.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Extensions accepted for photos
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// URL prefix under which stored files are served
const PUBLIC_PREFIX: &str = "uploads";

/// Characters that survive sanitizing: anything else is dropped
static SAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]").expect("invalid filename regex"));

/// True iff the filename has an extension on the allow-list.
///
/// The check is on the substring after the LAST dot, case-insensitively;
/// a name without any dot never qualifies.
pub fn is_allowed_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Directory prefixes (either separator) are discarded, characters outside
/// `[A-Za-z0-9._-]` are removed, and leading dots are stripped so the result
/// can neither traverse out of the upload directory nor hide itself.
pub fn sanitize_filename(filename: &str) -> String {
    let last = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    SAFE_CHARS
        .replace_all(last, "")
        .trim_start_matches('.')
        .to_owned()
}

/// Upload failure taxonomy
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("file type not allowed: '{filename}'")]
    Disallowed { filename: String },

    #[error("filename unusable after sanitizing: '{filename}'")]
    UnusableName { filename: String },

    #[error("failed to write upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes validated photos under a fixed directory.
///
/// A repeated sanitized name overwrites the previous file silently; there
/// is no collision handling and no per-file size check beyond the global
/// request body cap.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory files are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it doesn't exist yet.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Validate, sanitize, and persist one photo.
    ///
    /// Returns the public path to store in the owning row.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, UploadError> {
        if !is_allowed_extension(original_name) {
            return Err(UploadError::Disallowed {
                filename: original_name.to_owned(),
            });
        }

        let name = sanitize_filename(original_name);
        // Sanitizing can eat the whole name (or the extension's dot) for
        // hostile input; refuse rather than store an extensionless blob.
        if name.is_empty() || !name.contains('.') {
            return Err(UploadError::UnusableName {
                filename: original_name.to_owned(),
            });
        }

        tokio::fs::write(self.dir.join(&name), bytes).await?;
        Ok(format!("{}/{}", PUBLIC_PREFIX, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_allow_list() {
        assert!(is_allowed_extension("photo.JPG"));
        assert!(is_allowed_extension("a.png"));
        assert!(is_allowed_extension("b.jpeg"));
        assert!(is_allowed_extension("c.gif"));
        assert!(!is_allowed_extension("virus.exe"));
        assert!(!is_allowed_extension("noext"));
        assert!(!is_allowed_extension("archive.tar.gz"));
    }

    #[test]
    fn sanitize_drops_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd.png"), "passwd.png");
        assert_eq!(sanitize_filename(r"c:\temp\photo.jpg"), "photo.jpg");
    }

    #[test]
    fn sanitize_drops_unsafe_chars() {
        assert_eq!(sanitize_filename("my photo (1).png"), "myphoto1.png");
        assert_eq!(sanitize_filename("año_nuevo.jpg"), "ao_nuevo.jpg");
    }

    #[test]
    fn sanitize_strips_leading_dots() {
        assert_eq!(sanitize_filename(".hidden.png"), "hidden.png");
        assert_eq!(sanitize_filename("..png"), "png");
    }

    #[tokio::test]
    async fn save_writes_and_returns_public_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path());

        let path = store.save("face.png", b"png bytes").await.unwrap();
        assert_eq!(path, "uploads/face.png");
        assert_eq!(std::fs::read(tmp.path().join("face.png")).unwrap(), b"png bytes");
    }

    #[tokio::test]
    async fn save_overwrites_same_name() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path());

        store.save("face.png", b"first").await.unwrap();
        store.save("face.png", b"second").await.unwrap();
        assert_eq!(std::fs::read(tmp.path().join("face.png")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn save_rejects_disallowed_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path());

        let err = store.save("script.exe", b"nope").await.unwrap_err();
        assert!(matches!(err, UploadError::Disallowed { .. }));
    }

    #[tokio::test]
    async fn save_rejects_name_that_sanitizes_away() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path());

        // Only the extension's dot survives sanitizing here
        let err = store.save("¡¡¡.png", b"x").await.unwrap_err();
        assert!(matches!(err, UploadError::UnusableName { .. }));
    }
}
