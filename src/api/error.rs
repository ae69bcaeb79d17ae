//! API Error Taxonomy
//!
//! Classification drives both the retry policy and the localized message
//! shown to the admin: network/timeout/5xx failures are retried then
//! surfaced, 4xx failures surface immediately, 401 forces a logout.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response received at all
    #[error("network error: {0}")]
    Network(String),
    /// No response within the client timeout
    #[error("request timed out")]
    Timeout,
    /// HTTP 401; stored auth state is cleared by the client core
    #[error("authentication required")]
    Auth,
    /// Any other 4xx, surfaced verbatim and never retried
    #[error("request rejected ({status}): {message}")]
    Client { status: u16, message: String },
    /// 5xx, retried with backoff before surfacing
    #[error("server error ({status})")]
    Server { status: u16, message: String },
    /// 2xx whose body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth => Some(401),
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Transient failures worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout | Self::Server { .. })
    }

    /// Translation key for the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Network(_) => "error.network",
            Self::Timeout => "error.timeout",
            Self::Auth => "error.unauthorized",
            Self::Client { status: 403, .. } => "error.forbidden",
            Self::Client { status: 404, .. } => "error.not_found",
            Self::Client { .. } => "error.bad_request",
            Self::Server { .. } => "error.server",
            Self::Decode(_) => "error.decode",
        }
    }
}

/// Exponential backoff schedule for transient failures
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

/// Up to 3 attempts, backing off 1s, 2s, 4s
pub const RETRY: RetryPolicy = RetryPolicy { max_attempts: 3 };

impl RetryPolicy {
    pub const fn backoff_ms(attempt: u32) -> u32 {
        1_000 << (attempt - 1)
    }

    /// Delay before the next attempt, or None when the error must surface
    pub fn next_delay_ms(&self, attempt: u32, error: &ApiError) -> Option<u32> {
        if attempt >= self.max_attempts || !error.is_retryable() {
            return None;
        }
        Some(Self::backoff_ms(attempt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error() -> ApiError {
        ApiError::Server {
            status: 500,
            message: String::new(),
        }
    }

    fn client_error(status: u16) -> ApiError {
        ApiError::Client {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_backoff_schedule_doubles() {
        assert_eq!(RetryPolicy::backoff_ms(1), 1_000);
        assert_eq!(RetryPolicy::backoff_ms(2), 2_000);
        assert_eq!(RetryPolicy::backoff_ms(3), 4_000);
    }

    #[test]
    fn test_server_error_gets_three_attempts() {
        let error = server_error();
        assert_eq!(RETRY.next_delay_ms(1, &error), Some(1_000));
        assert_eq!(RETRY.next_delay_ms(2, &error), Some(2_000));
        assert_eq!(RETRY.next_delay_ms(3, &error), None);

        let mut attempts = 1;
        while RETRY.next_delay_ms(attempts, &error).is_some() {
            attempts += 1;
        }
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_auth_error_is_never_retried() {
        assert_eq!(RETRY.next_delay_ms(1, &ApiError::Auth), None);
    }

    #[test]
    fn test_client_error_gets_single_attempt() {
        assert_eq!(RETRY.next_delay_ms(1, &client_error(400)), None);
        assert_eq!(RETRY.next_delay_ms(1, &client_error(404)), None);
    }

    #[test]
    fn test_network_and_timeout_are_retryable() {
        assert!(ApiError::Network("failed to fetch".to_string()).is_retryable());
        assert!(ApiError::Timeout.is_retryable());
        assert!(!ApiError::Auth.is_retryable());
        assert!(!client_error(400).is_retryable());
    }

    #[test]
    fn test_message_keys_by_status() {
        assert_eq!(client_error(400).message_key(), "error.bad_request");
        assert_eq!(client_error(403).message_key(), "error.forbidden");
        assert_eq!(client_error(404).message_key(), "error.not_found");
        assert_eq!(server_error().message_key(), "error.server");
        assert_eq!(ApiError::Timeout.message_key(), "error.timeout");
    }
}
