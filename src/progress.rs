//! Progress display for generation and materialization

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a generation request is streaming.
///
/// Ticks on a background thread so it keeps moving while the main thread
/// blocks on the network call; the line is cleared on stop so result output
/// never shares a line with it.
pub struct GenerationSpinner {
    pb: ProgressBar,
}

impl GenerationSpinner {
    /// Start the spinner with a message; elapsed time is appended
    #[allow(clippy::unwrap_used)]
    pub fn start(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg} {elapsed_precise:.blue}")
            .unwrap()
            .tick_chars("|/-\\ ");

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Stop and clear the spinner line
    pub fn stop(self) {
        self.pb.finish_and_clear();
    }
}

/// File progress bar shown while materializing a bundle
pub struct FileProgress {
    pb: ProgressBar,
}

impl FileProgress {
    /// Create a file progress bar with total file count
    #[allow(clippy::unwrap_used)]
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap()
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);

        Self { pb }
    }

    /// Update progress with the file just written
    pub fn update(&self, file_path: &str) {
        // Truncate long paths for display
        let display_path = if file_path.len() > 50 {
            format!("...{}", path_tail(file_path, 47))
        } else {
            file_path.to_string()
        };
        self.pb.set_message(display_path);
        self.pb.inc(1);
    }

    /// Finish and clear the progress line
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

/// Last `max_bytes` of a path, never splitting a multibyte character
fn path_tail(path: &str, max_bytes: usize) -> &str {
    let mut start = path.len().saturating_sub(max_bytes);
    while !path.is_char_boundary(start) {
        start += 1;
    }
    &path[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_accepts_long_multibyte_paths() {
        let progress = FileProgress::new(1);
        let path = format!("{}{}", "a".repeat(12), "é".repeat(30));
        progress.update(&path);
        progress.finish();
    }

    #[test]
    fn test_path_tail_keeps_char_boundary() {
        let path = format!("{}{}", "a".repeat(12), "é".repeat(30));
        let tail = path_tail(&path, 47);
        assert!(tail.len() <= 47);
        assert!(tail.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_path_tail_ascii_is_exact() {
        let path = "a".repeat(60);
        assert_eq!(path_tail(&path, 47).len(), 47);
    }

    #[test]
    fn test_path_tail_shorter_than_limit() {
        assert_eq!(path_tail("app.py", 47), "app.py");
    }
}
