use slog::Logger;
use sloggers::{
    file::FileLoggerBuilder,
    null::NullLoggerBuilder,
    terminal::{Destination, TerminalLoggerBuilder},
    types::Severity,
    Build,
};

/// Where builder logs go.
#[derive(Debug, Clone, Copy)]
pub struct LogOptions<'a> {
    /// Only log warnings and worse.
    pub quiet: bool,
    /// Log to this file instead of stderr.
    pub log_path: Option<&'a str>,
    pub discard_logs: bool,
}

impl Default for LogOptions<'_> {
    fn default() -> Self {
        LogOptions {
            quiet: true,
            log_path: None,
            discard_logs: true,
        }
    }
}

impl LogOptions<'_> {
    pub fn severity(&self) -> Severity {
        if self.quiet {
            Severity::Warning
        } else {
            Severity::Debug
        }
    }

    pub fn logger(&self) -> sloggers::Result<Logger> {
        if self.discard_logs {
            return NullLoggerBuilder.build();
        }

        match self.log_path {
            Some(path) => {
                let mut builder = FileLoggerBuilder::new(path);
                builder.level(self.severity());
                builder.build()
            }
            None => {
                let mut builder = TerminalLoggerBuilder::new();
                builder.level(self.severity());
                builder.destination(Destination::Stderr);
                builder.build()
            }
        }
    }
}
