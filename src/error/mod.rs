//! Error types and handling for Bundlesmith
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`api`]: Anthropic API errors
//! - [`bundle`]: Bundle extraction and parsing errors
//! - [`fs`]: File system errors

pub mod api;
pub mod bundle;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, BundlesmithError>;

/// Main error type for Bundlesmith operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundlesmithError {
    // Credential errors
    #[error("ANTHROPIC_API_KEY not found in environment")]
    #[diagnostic(
        code(bundlesmith::api::missing_key),
        help("Set it with: export ANTHROPIC_API_KEY=your_api_key (a .env file also works)")
    )]
    MissingApiKey,

    // API errors
    #[error("Failed to build HTTP client: {reason}")]
    #[diagnostic(code(bundlesmith::api::client_build_failed))]
    ClientBuildFailed { reason: String },

    #[error("Request to Anthropic API failed: {reason}")]
    #[diagnostic(
        code(bundlesmith::api::request_failed),
        help("Check network connectivity and that your API key is valid")
    )]
    ApiRequestFailed { reason: String },

    #[error("Anthropic API returned status {status}: {body}")]
    #[diagnostic(code(bundlesmith::api::bad_status))]
    ApiBadStatus { status: u16, body: String },

    #[error("Failed while reading response stream: {reason}")]
    #[diagnostic(code(bundlesmith::api::stream_failed))]
    StreamFailed { reason: String },

    // Bundle errors
    #[error("No [JSON_BUNDLE] delimiter found in model response (raw response saved to {debug_path})")]
    #[diagnostic(
        code(bundlesmith::bundle::delimiter_not_found),
        help("The model did not answer in the expected format; inspect the saved response")
    )]
    DelimiterNotFound { debug_path: String },

    #[error("Model returned invalid JSON: {reason} (payload saved to {debug_path})")]
    #[diagnostic(code(bundlesmith::bundle::invalid_json))]
    InvalidJson { reason: String, debug_path: String },

    #[error("Bundle is missing required field: {field}")]
    #[diagnostic(
        code(bundlesmith::bundle::missing_field),
        help("Pass -o/--output to choose the output path explicitly")
    )]
    BundleMissingField { field: String },

    #[error("Failed to parse bundle file: {path}: {reason}")]
    #[diagnostic(code(bundlesmith::bundle::parse_failed))]
    BundleParseFailed { path: String, reason: String },

    #[error("Bundle path escapes the project directory: {path}")]
    #[diagnostic(
        code(bundlesmith::bundle::unsafe_path),
        help("Bundle entries must be relative paths without '..' components")
    )]
    UnsafeBundlePath { path: String },

    // CLI errors
    #[error("No description provided")]
    #[diagnostic(
        code(bundlesmith::cli::missing_description),
        help("Pass a description argument or run with -i/--interactive")
    )]
    MissingDescription,

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(bundlesmith::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(bundlesmith::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(bundlesmith::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bundlesmith::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BundlesmithError {
    fn from(err: std::io::Error) -> Self {
        BundlesmithError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for BundlesmithError {
    fn from(err: inquire::InquireError) -> Self {
        BundlesmithError::IoError {
            message: err.to_string(),
        }
    }
}
