/*
 *  display/error.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Unified error types for display subsystem
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use std::error::Error;
use std::fmt;

/// Unified error type for all display operations
#[derive(Debug)]
pub enum DisplayError {
    /// Hardware/driver initialization failed
    InitializationFailed(String),

    /// Invalid configuration
    InvalidConfiguration(String),

    /// Unsupported operation for this display
    UnsupportedOperation,

    /// Framebuffer size mismatch
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Drawing operation failed
    DrawingError(String),

    /// Logo rasterization failed
    LogoError(String),

    /// Generic error with message
    Other(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::InitializationFailed(msg) =>
                write!(f, "Display initialization failed: {}", msg),
            DisplayError::InvalidConfiguration(msg) =>
                write!(f, "Invalid configuration: {}", msg),
            DisplayError::UnsupportedOperation =>
                write!(f, "Operation not supported by this display"),
            DisplayError::BufferSizeMismatch { expected, actual } =>
                write!(f, "Buffer size mismatch: expected {} bytes, got {}", expected, actual),
            DisplayError::DrawingError(msg) =>
                write!(f, "Drawing error: {}", msg),
            DisplayError::LogoError(msg) =>
                write!(f, "Logo error: {}", msg),
            DisplayError::Other(msg) =>
                write!(f, "{}", msg),
        }
    }
}

impl Error for DisplayError {}

// Drawing into the in-memory framebuffer cannot fail, but the DrawTarget
// plumbing still surfaces Infallible through `?`.
impl From<core::convert::Infallible> for DisplayError {
    fn from(err: core::convert::Infallible) -> Self {
        match err {}
    }
}

impl From<crate::logo::LogoError> for DisplayError {
    fn from(err: crate::logo::LogoError) -> Self {
        DisplayError::LogoError(err.to_string())
    }
}
