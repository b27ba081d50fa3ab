//! Errors raised while configuring a rule catalog.

use thiserror::Error;

/// Errors raised by [`RuleCatalog`](crate::RuleCatalog) configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleCatalogError {
    /// A weight key did not name any rule arm.
    #[error("unknown rule weight '{key}'")]
    UnknownWeight {
        /// The rejected `<rule-id>.<arm-key>` key.
        key: String,
    },
    /// A weight key was not of the form `<rule-id>.<arm-key>`.
    #[error("malformed rule weight key '{key}': expected '<rule-id>.<arm-key>'")]
    MalformedKey {
        /// The rejected key.
        key: String,
    },
}
