use std::{any::Any, error::Error, fmt};

/// A failure captured by `try_capture`/`try_capture_result`, normalized into
/// one of three shapes.
#[derive(Debug)]
pub enum CapturedError {
    /// An error value that already carried its own kind and message, passed
    /// through unchanged.
    Error(Box<dyn Error + Send + Sync + 'static>),

    /// A plain string failure, such as `panic!("boom")`.
    Message(String),

    /// A failure that carried nothing recognizable.
    Unknown,
}

impl CapturedError {
    /// Returns the normalized failure message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Normalizes the payload of a caught panic.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Box<dyn Error + Send + Sync + 'static>>() {
            Ok(err) => return CapturedError::Error(*err),
            Err(payload) => payload,
        };

        let payload = match payload.downcast::<String>() {
            Ok(message) => return CapturedError::Message(*message),
            Err(payload) => payload,
        };

        match payload.downcast::<&'static str>() {
            Ok(message) => CapturedError::Message((*message).to_string()),
            Err(_) => CapturedError::Unknown,
        }
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapturedError::Error(err) => write!(f, "{}", err),
            CapturedError::Message(message) => write!(f, "{}", message),
            CapturedError::Unknown => write!(f, "Unknown error"),
        }
    }
}

impl Error for CapturedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CapturedError::Error(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
