//! Domain-specific error types for the sync engine.
//!
//! Configuration loading returns typed [`ConfigError`] values; command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] via the
//! standard `?` operator.

use thiserror::Error;

/// Errors that arise from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The manifest file contains a syntax error that prevents parsing.
    #[error("Invalid manifest {file}: {message}")]
    InvalidManifest {
        /// Path to the manifest that could not be parsed.
        file: String,
        /// Parser error message.
        message: String,
    },

    /// A tool section names a sync entry kind the engine does not know.
    #[error("Unknown entry kind '{kind}' for tool '{tool}'")]
    UnknownEntryKind {
        /// Tool section the entry belongs to.
        tool: String,
        /// The unrecognised kind value.
        kind: String,
    },

    /// An I/O error occurred while reading a config file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn invalid_manifest_display() {
        let e = ConfigError::InvalidManifest {
            file: "conf/sync.toml".to_string(),
            message: "unexpected token".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid manifest conf/sync.toml: unexpected token"
        );
    }

    #[test]
    fn unknown_entry_kind_display() {
        let e = ConfigError::UnknownEntryKind {
            tool: "vim".to_string(),
            kind: "symlink".to_string(),
        };
        assert_eq!(e.to_string(), "Unknown entry kind 'symlink' for tool 'vim'");
    }

    #[test]
    fn io_display_includes_path() {
        let e = ConfigError::Io {
            path: "/repo/brew/homebrews.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("/repo/brew/homebrews.txt"));
        assert!(e.to_string().contains("IO error reading config file"));
    }

    #[test]
    fn io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: "x".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn converts_to_anyhow() {
        let e = ConfigError::UnknownEntryKind {
            tool: "zsh".to_string(),
            kind: "weird".to_string(),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn error_types_are_send_sync() {
        assert_send_sync::<ConfigError>();
    }
}
