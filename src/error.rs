// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Push(PushError),
}

/// Failures of the push-messaging lifecycle.
///
/// None of these are shown to the user; they are logged and the push toggle
/// keeps the value it had before the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushError {
    /// No background registration is installed for this client.
    NoRegistration,

    /// The server's application key is not valid URL-safe base64.
    InvalidServerKey(String),

    /// The server configuration did not advertise an application key.
    MissingServerKey,

    /// Subscribing, unsubscribing or fetching the subscription failed.
    Subscription(String),

    /// The backend rejected or never received the (un)subscribe call.
    BackendNotify(String),
}

impl PushError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PushError::NoRegistration => "error-push-no-registration",
            PushError::InvalidServerKey(_) | PushError::MissingServerKey => {
                "error-push-server-key"
            }
            PushError::Subscription(_) => "error-push-subscription",
            PushError::BackendNotify(_) => "error-push-backend",
        }
    }
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::NoRegistration => write!(f, "No push registration available"),
            PushError::InvalidServerKey(msg) => write!(f, "Invalid server key: {}", msg),
            PushError::MissingServerKey => write!(f, "Server did not provide a push key"),
            PushError::Subscription(msg) => write!(f, "Subscription failed: {}", msg),
            PushError::BackendNotify(msg) => write!(f, "Backend notification failed: {}", msg),
        }
    }
}

impl std::error::Error for PushError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Push(e) => write!(f, "Push Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PushError> for Error {
    fn from(err: PushError) -> Self {
        Error::Push(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn push_error_wraps_into_crate_error() {
        let err: Error = PushError::Subscription("aborted".into()).into();
        assert_eq!(format!("{}", err), "Push Error: Subscription failed: aborted");
    }

    #[test]
    fn push_error_i18n_keys() {
        assert_eq!(
            PushError::NoRegistration.i18n_key(),
            "error-push-no-registration"
        );
        assert_eq!(
            PushError::MissingServerKey.i18n_key(),
            PushError::InvalidServerKey("x".into()).i18n_key()
        );
        assert_eq!(
            PushError::BackendNotify("503".into()).i18n_key(),
            "error-push-backend"
        );
    }
}
