//! Logging init: diagnostics go to stderr, or to a file when one is requested.
//!
//! Extracted values are data, not diagnostics, and never pass through here.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Verbosity and sink selected on the command line.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub silent: bool,
    pub monochrome: bool,
    pub log_file: Option<PathBuf>,
}

impl LogOptions {
    /// Filter directive used when `RUST_LOG` is not set. `silent` wins over `verbose`.
    pub fn default_directive(&self) -> &'static str {
        if self.silent {
            "error"
        } else if self.verbose {
            "info,xurls_core=debug,xurls=debug"
        } else {
            "warn"
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(std::fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// Initialize structured logging according to `opts`.
///
/// With `log_file` set, appends to that file (creating parent directories);
/// returns Err if it cannot be opened so the caller can fall back to stderr.
pub fn init_logging(opts: &LogOptions) -> Result<()> {
    let Some(log_file_path) = opts.log_file.as_ref() else {
        init_logging_stderr(opts);
        return Ok(());
    };

    if let Some(parent) = log_file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir {}", parent.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("open log file {}", log_file_path.display()))?;

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(opts.env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("xurls logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only. Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr(opts: &LogOptions) {
    tracing_subscriber::fmt()
        .with_env_filter(opts.env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(!opts.monochrome)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_follows_flags() {
        let mut opts = LogOptions::default();
        assert_eq!(opts.default_directive(), "warn");
        opts.verbose = true;
        assert!(opts.default_directive().contains("debug"));
        opts.silent = true;
        assert_eq!(opts.default_directive(), "error");
    }
}
