//! Error types for the Vend API client.
//!
//! [`ConfigError`] covers everything that can be wrong before a request is
//! made: tokens, domain prefixes, timezones, hosts and retry settings. HTTP
//! and resource failures live in [`crate::clients`] and [`crate::rest`].
//!
//! # Example
//!
//! ```rust
//! use vend_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The personal API token cannot be empty.
    #[error("API token cannot be empty. Generate a personal token from Setup -> API Access.")]
    EmptyApiToken,

    /// Domain prefix is invalid.
    #[error("Invalid domain prefix '{prefix}'. Expected the store name, e.g. 'mystore' or 'mystore.vendhq.com'.")]
    InvalidDomainPrefix {
        /// The invalid prefix that was provided.
        prefix: String,
    },

    /// Timezone label is invalid.
    #[error("Invalid timezone '{label}'. Expected 'Local', 'UTC' or a fixed offset such as '+10:00'.")]
    InvalidTimeZone {
        /// The invalid label that was provided.
        label: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://127.0.0.1:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Retry policy is invalid.
    #[error("Invalid retry policy: {reason}")]
    InvalidRetryPolicy {
        /// Why the policy was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_token_error_message() {
        let error = ConfigError::EmptyApiToken;
        let message = error.to_string();
        assert!(message.contains("API token cannot be empty"));
        assert!(message.contains("API Access"));
    }

    #[test]
    fn test_invalid_domain_prefix_error_message() {
        let error = ConfigError::InvalidDomainPrefix {
            prefix: "bad prefix!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad prefix!"));
        assert!(message.contains("mystore.vendhq.com"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "token" };
        let message = error.to_string();
        assert!(message.contains("token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiToken;
        let _: &dyn std::error::Error = &error;
    }
}
