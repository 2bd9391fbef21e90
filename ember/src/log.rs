use std::env;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use lazy_static::lazy_static;

#[macro_export]
macro_rules! log {
    (ERROR, $($arg:tt)*) => { $crate::log::log_error(&format!($($arg)*)) };
    (INFO, $($arg:tt)*) => { $crate::log::log_info(&format!($($arg)*)) };
    (VERBOSE, $($arg:tt)*) => { $crate::log::log_verbose(&format!($($arg)*)) };
    ($($arg:tt)*) => { $crate::log::log_verbose(&format!($($arg)*)) };
}

#[macro_export]
macro_rules! log_level {
    ($l:ident) => { $crate::log::set_log_level($crate::log::LogLevel::$l) };
}

/// Environment variable read once for the initial level.
pub const LOG_LEVEL_VARIABLE: &str = "EMBER_LOG_LEVEL";

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    NONE,
    ERROR,
    INFO,
    VERBOSE,
}

impl LogLevel {
    pub fn value(&self) -> u8 {
        match *self {
            LogLevel::NONE => 3,
            LogLevel::ERROR => 2,
            LogLevel::INFO => 1,
            LogLevel::VERBOSE => 0,
        }
    }

    fn from_environment() -> Self {
        env::var(LOG_LEVEL_VARIABLE)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(LogLevel::VERBOSE)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(LogLevel::NONE),
            "error" => Ok(LogLevel::ERROR),
            "info" => Ok(LogLevel::INFO),
            "verbose" => Ok(LogLevel::VERBOSE),
            other => Err(format!("LogLevel::from_str: unknown log level \"{}\"", other)),
        }
    }
}

lazy_static! {
    static ref LOG_LEVEL: Mutex<LogLevel> = Mutex::new(LogLevel::from_environment());
}

const TAG: &str = "ember";

pub fn get_log_level() -> LogLevel {
    *LOG_LEVEL.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn set_log_level(level: LogLevel) {
    *LOG_LEVEL.lock().unwrap_or_else(PoisonError::into_inner) = level;
}

pub fn log_enabled(level: LogLevel) -> bool {
    level != LogLevel::NONE && level.value() >= get_log_level().value()
}

pub fn log_error(string: &str) {
    if log_enabled(LogLevel::ERROR) {
        eprintln!("E {}: {}", TAG, string);
    }
}

pub fn log_info(string: &str) {
    if log_enabled(LogLevel::INFO) {
        println!("I {}: {}", TAG, string);
    }
}

pub fn log_verbose(string: &str) {
    if log_enabled(LogLevel::VERBOSE) {
        println!("V {}: {}", TAG, string);
    }
}
