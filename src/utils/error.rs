use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Common result type for banana operations
pub type BananaResult<T> = Result<T, BananaError>;

/// Error types for banana operations
///
/// Every build-time variant is fatal to the build that raised it. `Watch`
/// is only ever logged by the watch coordinator and `Serve` ends `serve`.
#[derive(Debug, Error)]
pub enum BananaError {
    /// Missing, unreadable or malformed site configuration
    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Malformed front matter, unterminated front matter block, or an
    /// unreadable content file
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Template syntax or render failure
    #[error("Template error in {name}: {message}")]
    Template { name: String, message: String },

    /// A layout referenced by name has no file
    #[error("Layout not found: {name} (referenced from {referrer})")]
    LayoutNotFound { name: String, referrer: PathBuf },

    /// A layout chain revisited one of its own layouts
    #[error("Layout cycle detected: {}", chain.join(" -> "))]
    LayoutCycle { chain: Vec<String> },

    /// A layout chain grew past the configured depth bound
    #[error("Layout chain starting at {start} is deeper than {limit} layouts")]
    LayoutChainTooDeep { start: PathBuf, limit: usize },

    /// Cannot create an output directory or file
    #[error("Write error at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Filesystem watch subsystem failure
    #[error("Watch error: {0}")]
    Watch(String),

    /// The development server could not bind or stopped with an error
    #[error("Server error on {address}: {source}")]
    Serve {
        address: String,
        #[source]
        source: io::Error,
    },
}

impl BananaError {
    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn template(name: impl Into<String>, message: impl ToString) -> Self {
        Self::Template {
            name: name.into(),
            message: message.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn serve(address: impl Into<String>, source: io::Error) -> Self {
        Self::Serve {
            address: address.into(),
            source,
        }
    }

    pub fn watch(message: impl ToString) -> Self {
        Self::Watch(message.to_string())
    }

    /// Whether this error belongs to the template category
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            Self::Template { .. }
                | Self::LayoutNotFound { .. }
                | Self::LayoutCycle { .. }
                | Self::LayoutChainTooDeep { .. }
        )
    }
}

impl From<notify::Error> for BananaError {
    fn from(err: notify::Error) -> Self {
        BananaError::Watch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_file() {
        let err = BananaError::parse("posts/hello.md", "unterminated front matter");
        assert!(err.to_string().contains("posts/hello.md"));
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_cycle_error_lists_chain() {
        let err = BananaError::LayoutCycle {
            chain: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(err.to_string(), "Layout cycle detected: a -> b -> a");
        assert!(err.is_template_error());
    }

    #[test]
    fn test_write_error_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = BananaError::write("_build/index.html", io_err);
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_template_error());
    }
}
