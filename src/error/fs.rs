//! File system errors

use super::BundlesmithError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> BundlesmithError {
    BundlesmithError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlesmithError {
    BundlesmithError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlesmithError {
    BundlesmithError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
