use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn tag(&self) -> &str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    // ANSI color used when printing to the console.
    fn color(&self) -> &str {
        match self {
            LogLevel::Info => "\x1b[96m",
            LogLevel::Warn => "\x1b[93m",
            LogLevel::Error => "\x1b[91m",
        }
    }
}

/// Leveled logger that writes timestamped lines to the console or to a file.
pub struct Logger {
    file: Option<File>,
}

impl Logger {
    /// Creates a logger that prints colored messages to the console.
    pub fn console() -> Self {
        Logger { file: None }
    }

    /// Creates a logger that appends plain messages to the file at `path`.
    pub fn to_file(path: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Logger { file: Some(file) })
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        match &mut self.file {
            Some(file) => {
                let _ = file.write_all(line.as_bytes());
                let _ = file.flush();
            }
            None => {
                print!("{}{}\x1b[0m", level.color(), line);
                let _ = io::stdout().flush();
            }
        }
    }

    /// Logs an informational message.
    pub fn info(&mut self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning message.
    pub fn warn(&mut self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message.
    pub fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
