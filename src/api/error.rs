// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Error taxonomy for the playlist service client.
//!
//! Failures are classified so the UI can react differently to a missing
//! search target than to a generic transport or server failure. Display
//! strings end up verbatim in user-facing status messages, appended to a
//! fixed action-specific prefix.

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The request produced no response at all (connect failure, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("server error (status {status})")]
    Server { status: u16 },

    /// The requested song does not exist.
    #[error("not found")]
    NotFound,

    /// The service rejected the request payload, e.g. a rating outside 0-5.
    #[error("invalid request")]
    Validation,

    /// The response body could not be decoded as the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Maps an HTTP status code to the error it signals, if any.
pub(crate) fn classify_status(status: u16) -> Option<ApiError> {
    match status {
        200..=299 => None,
        404 => Some(ApiError::NotFound),
        400 | 422 => Some(ApiError::Validation),
        _ => Some(ApiError::Server { status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_are_not_errors() {
        assert!(classify_status(200).is_none());
        assert!(classify_status(204).is_none());
    }

    #[test]
    fn missing_target_is_distinct_from_server_failure() {
        assert!(matches!(classify_status(404), Some(ApiError::NotFound)));
        assert!(matches!(
            classify_status(500),
            Some(ApiError::Server { status: 500 })
        ));
    }

    #[test]
    fn rejected_payloads_are_validation_errors() {
        assert!(matches!(classify_status(400), Some(ApiError::Validation)));
        assert!(matches!(classify_status(422), Some(ApiError::Validation)));
    }
}
