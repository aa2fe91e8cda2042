use serde::{Deserialize, Serialize};

/// JSON body returned for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
    /// Reason phrase of `status`.
    pub error: String,
    /// Request path that produced the error.
    pub path: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl ErrorBody {
    pub fn new(status: u16, message: impl Into<String>, path: impl Into<String>, timestamp: i64) -> Self {
        Self {
            message: message.into(),
            status,
            error: reason_phrase(status).to_string(),
            path: path.into(),
            timestamp,
        }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Internal Server Error",
    }
}
