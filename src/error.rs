// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the `Error` type returned by `great_circle`.
//!
//! All errors are raised before any interpolation takes place, so a caller
//! never receives a partial geometry.

use thiserror::Error;

/// The reasons why a great circle line could not be generated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The options are not a valid configuration object.
    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),
    /// Neither an end position nor a bearing was supplied.
    #[error("an end position or a bearing is required")]
    MissingEndpoint,
    /// A start or end value could not be resolved to a coordinate.
    #[error("invalid point: {0}")]
    InvalidPointInput(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            "invalid options: npoints must be at least 2",
            Error::InvalidOptions("npoints must be at least 2").to_string()
        );
        assert_eq!(
            "an end position or a bearing is required",
            Error::MissingEndpoint.to_string()
        );
        assert_eq!(
            "invalid point: latitude out of range",
            Error::InvalidPointInput("latitude out of range").to_string()
        );
    }

    #[test]
    fn test_error_traits() {
        let error = Error::MissingEndpoint;
        let error_copy = error;
        assert_eq!(error, error_copy);

        println!("Error: {:?}", error);
    }
}
