//! Describing requests that never produced a response

use std::io;

use anyhow::Error;

/// Why a request failed before any response body was read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    /// Nothing accepted the connection
    Unreachable,
    TimedOut,
    /// Connected, but the response was cut off
    Interrupted,
    Other,
}

impl TransportFailure {
    pub fn classify(error: &Error) -> Self {
        for cause in error.chain() {
            if let Some(e) = cause.downcast_ref::<reqwest::Error>() {
                // a connect timeout is both; the timeout is the useful half
                if e.is_timeout() {
                    return TransportFailure::TimedOut;
                }
                if e.is_connect() {
                    return TransportFailure::Unreachable;
                }
                if e.is_body() || e.is_decode() {
                    return TransportFailure::Interrupted;
                }
            }
            if let Some(e) = cause.downcast_ref::<io::Error>() {
                match e.kind() {
                    io::ErrorKind::ConnectionRefused | io::ErrorKind::AddrNotAvailable => {
                        return TransportFailure::Unreachable
                    }
                    io::ErrorKind::TimedOut => return TransportFailure::TimedOut,
                    io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::UnexpectedEof => return TransportFailure::Interrupted,
                    _ => {}
                }
            }
        }
        TransportFailure::Other
    }

    fn headline(self) -> Option<&'static str> {
        match self {
            TransportFailure::Unreachable => Some("Backend unreachable"),
            TransportFailure::TimedOut => Some("Backend timed out"),
            TransportFailure::Interrupted => Some("Response interrupted"),
            TransportFailure::Other => None,
        }
    }
}

/// Text for the `error` field of a failed request's envelope
pub fn describe_transport_failure(error: &Error) -> String {
    match TransportFailure::classify(error).headline() {
        Some(headline) => format!("{} ({})", headline, error.root_cause()),
        None => format_error_message(error),
    }
}

/// Prefers the reqwest error (it names the URL), otherwise the root cause.
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
        .map(|e| e.to_string())
        .unwrap_or_else(|| error.root_cause().to_string())
}
