use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    quiet: AtomicBool,
}

impl Logger {
    fn new(prefix: Option<String>, quiet: bool) -> Self {
        Self {
            prefix,
            quiet: AtomicBool::new(quiet),
        }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}:{}] {}",
                timestamp, prefix, file_name, line, message
            ),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if self.quiet.load(Ordering::Relaxed) {
            return;
        }
        println!("{}", self.format_line(file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>, quiet: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, quiet));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(Some("Arena".to_string()), false);

        let line = logger.format_line("engine/src/board.rs", 12, "hello");

        assert!(line.ends_with("[Arena][board.rs:12] hello"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, true);

        let line = logger.format_line("C:\\src\\main.rs", 3, "x");

        assert!(line.ends_with("[main.rs:3] x"));
    }
}
