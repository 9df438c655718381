use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient faults)
    Retry,
    /// Failed permanently (bad request, unknown species)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Catalog request errors - server errors, rate limiting, timeouts
            Self::CatalogError(reqwest_error) => {
                if let Some(status) = reqwest_error.status() {
                    match status {
                        // 429 - Too Many Requests
                        //
                        // The catalog is rate limiting us, backoff and try again
                        s if s.as_u16() == 429 => ErrorRetryStrategy::Retry,

                        // 500 - Internal Server Error
                        //
                        // The catalog is temporarily unavailable, backoff and retry
                        s if s.is_server_error() => ErrorRetryStrategy::Retry,

                        // 404 - Not Found, or any other client error
                        //
                        // The species does not exist, retrying won't change that
                        _ => ErrorRetryStrategy::Fail,
                    }
                } else if reqwest_error.is_decode() {
                    // Malformed payload, the same request would return the same body
                    ErrorRetryStrategy::Fail
                } else {
                    // Timeout, network error or connection issue - should retry
                    ErrorRetryStrategy::Retry
                }
            }

            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // All other database errors are permanent failures (constraint violations,
                // type conversion, schema errors, missing records)
                _ => ErrorRetryStrategy::Fail,
            },

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::RosterError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
