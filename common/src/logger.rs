use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

pub struct Logger {
    prefix: Option<String>,
    min_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, min_level: LogLevel) -> Self {
        Self { prefix, min_level }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let tag = match level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}] {}", timestamp, prefix, tag, message),
            None => format!("[{}][{}] {}", timestamp, tag, message),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        // stdout belongs to the game frames.
        eprintln!("{}", self.format_line(level, message));
    }
}

pub fn init_logger(prefix: Option<String>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, min_level));
}

/// Messages sent before [`init_logger`] are dropped.
pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, &format!($($arg)*))
    };
}
