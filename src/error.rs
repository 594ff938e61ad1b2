//! Mount and configuration errors.
//!
//! Core operations never fail; errors only arise while binding to the
//! document or reading configuration. Both are logged by the host and the
//! affected piece falls back (controller skipped, defaults used).

/// A controller's required element group is absent from the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// A required element did not match its selector.
    #[error("{controller}: missing required element `{selector}`")]
    MissingElement { controller: &'static str, selector: &'static str },

    /// A required element matched but has the wrong element type.
    #[error("{controller}: element `{selector}` is not a {expected}")]
    WrongElementType { controller: &'static str, selector: &'static str, expected: &'static str },
}

/// The inline configuration block could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON body did not parse into [`crate::config::Config`].
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
