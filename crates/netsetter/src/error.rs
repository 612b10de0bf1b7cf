//! Error types for the setters
//!
//! Parse failures are ordinary errors; a misconfigured setter is reported by
//! [`Setter::check_setter`](crate::Setter::check_setter) with a panic instead.

use std::net::AddrParseError;
use thiserror::Error;

/// Result type alias for setter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the setters
#[derive(Error, Debug)]
pub enum Error {
    /// The value is not a literal IPv4 or IPv6 address
    #[error("could not convert {value:?} into an IP address")]
    InvalidIp {
        /// The rejected parameter value
        value: String,
        /// Underlying parse failure
        #[source]
        source: AddrParseError,
    },

    /// The value could not be resolved as a TCP endpoint
    #[error("could not convert {value:?} into a TCP address: {source}")]
    InvalidTcpAddr {
        /// The rejected parameter value
        value: String,
        /// Underlying resolution failure
        #[source]
        source: std::io::Error,
    },

    /// The setter was built without storage to write into
    #[error("{0}")]
    Unconfigured(String),
}

impl Error {
    /// Create an invalid IP error
    pub fn invalid_ip(value: impl Into<String>, source: AddrParseError) -> Self {
        Self::InvalidIp {
            value: value.into(),
            source,
        }
    }

    /// Create an invalid TCP address error
    pub fn invalid_tcp_addr(value: impl Into<String>, source: std::io::Error) -> Self {
        Self::InvalidTcpAddr {
            value: value.into(),
            source,
        }
    }

    /// Create an unconfigured setter error
    pub fn unconfigured(msg: impl Into<String>) -> Self {
        Self::Unconfigured(msg.into())
    }

    /// The parameter value that caused the error, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidIp { value, .. } | Self::InvalidTcpAddr { value, .. } => Some(value),
            Self::Unconfigured(_) => None,
        }
    }
}
