//! On-disk persistence for the session credential.
//!
//! Exactly one token lives at a fixed path; an absent (or empty) file means
//! anonymous. Only the session store reads or writes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

/// The persisted credential file.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    /// Create a handle for the token at `path`. Nothing is touched on disk
    /// until `load`/`save`/`clear`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the token lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted token. A missing or empty file is `None`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error for anything other than a missing
    /// file (permissions, unreadable disk).
    pub fn load(&self) -> io::Result<Option<SecretString>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SecretString::from(token.to_owned())))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Persist `token`, replacing any previous one. Parent directories are
    /// created as needed; on Unix the file is restricted to `0o600`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn save(&self, token: &SecretString) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, token.expose_secret())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Remove the persisted token. Idempotent: a missing file is success.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error for anything other than a missing
    /// file.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn token_in_tempdir() -> (tempfile::TempDir, TokenFile) {
        let dir = tempfile::tempdir().unwrap();
        let tokens = TokenFile::new(dir.path().join("nested").join("token"));
        (dir, tokens)
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let (_dir, tokens) = token_in_tempdir();
        assert!(tokens.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, tokens) = token_in_tempdir();
        tokens.save(&SecretString::from("abc123")).unwrap();

        let loaded = tokens.load().unwrap().unwrap();
        assert_eq!(loaded.expose_secret(), "abc123");
    }

    #[test]
    fn test_load_trims_trailing_newline() {
        let (_dir, tokens) = token_in_tempdir();
        fs::create_dir_all(tokens.path().parent().unwrap()).unwrap();
        fs::write(tokens.path(), "abc123\n").unwrap();

        let loaded = tokens.load().unwrap().unwrap();
        assert_eq!(loaded.expose_secret(), "abc123");
    }

    #[test]
    fn test_empty_file_is_none() {
        let (_dir, tokens) = token_in_tempdir();
        fs::create_dir_all(tokens.path().parent().unwrap()).unwrap();
        fs::write(tokens.path(), "  \n").unwrap();

        assert!(tokens.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, tokens) = token_in_tempdir();
        tokens.clear().unwrap(); // nothing there yet

        tokens.save(&SecretString::from("abc123")).unwrap();
        tokens.clear().unwrap();
        tokens.clear().unwrap();
        assert!(tokens.load().unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, tokens) = token_in_tempdir();
        tokens.save(&SecretString::from("abc123")).unwrap();

        let mode = fs::metadata(tokens.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
