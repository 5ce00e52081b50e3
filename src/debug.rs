use parking_lot::Mutex;
/// Debugging infrastructure for par-shot
///
/// Controlled by DEBUG_LEVEL environment variable:
/// - 0 or unset: No debugging
/// - 1: Errors only
/// - 2: Info level (capture requests, delivery)
/// - 3: Debug level (resolved geometry, selection crops)
/// - 4: Trace level (every paint call)
///
/// All output goes to /tmp/par_shot_debug.log on Unix/macOS,
/// or %TEMP%\par_shot_debug.log on Windows.
///
/// `log` records are routed to the same file once [`init_log_bridge`] has
/// run. When RUST_LOG is set they are mirrored to stderr as well.
use par_shot_config::LogLevel;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn from_env() -> Self {
        match std::env::var("DEBUG_LEVEL") {
            Ok(val) => match val.trim().parse::<u8>() {
                Ok(1) => DebugLevel::Error,
                Ok(2) => DebugLevel::Info,
                Ok(3) => DebugLevel::Debug,
                Ok(4) => DebugLevel::Trace,
                _ => DebugLevel::Off,
            },
            Err(_) => DebugLevel::Off,
        }
    }

    fn to_level_filter(self) -> log::LevelFilter {
        match self {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Error,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Path of the debug log file
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp/par_shot_debug.log");
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join("par_shot_debug.log");
    path
}

/// Global debug logger
struct DebugLogger {
    level: DebugLevel,
    file: Option<std::fs::File>,
    mirror_stderr: bool,
}

impl DebugLogger {
    fn new() -> Self {
        let mut logger = DebugLogger {
            level: DebugLevel::from_env(),
            file: None,
            mirror_stderr: false,
        };
        if logger.level != DebugLevel::Off {
            logger.open_file();
        }
        logger
    }

    /// Open (and truncate) the log file once; failures are silent
    fn open_file(&mut self) {
        if self.file.is_some() {
            return;
        }
        if let Ok(f) = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
        {
            self.file = Some(f);
            self.write_raw(&format!(
                "\n{}\npar-shot debug session started at {} (level={:?})\n{}\n",
                "=".repeat(80),
                get_timestamp(),
                self.level,
                "=".repeat(80)
            ));
        }
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }

    fn write_line(&mut self, level_str: &str, category: &str, msg: &str) {
        let line = format!("[{}] [{}] [{}] {}\n", get_timestamp(), level_str, category, msg);
        if self.mirror_stderr {
            eprint!("{}", line);
        }
        self.write_raw(&line);
    }

    fn log(&mut self, level: DebugLevel, category: &str, msg: &str) {
        if level <= self.level {
            let level_str = match level {
                DebugLevel::Error => "ERROR",
                DebugLevel::Info => "INFO ",
                DebugLevel::Debug => "DEBUG",
                DebugLevel::Trace => "TRACE",
                DebugLevel::Off => return,
            };
            self.write_line(level_str, category, msg);
        }
    }
}

static LOGGER: OnceLock<Mutex<DebugLogger>> = OnceLock::new();

/// Set when the CLI or RUST_LOG picked the level; config then leaves it alone
static LEVEL_OVERRIDDEN: AtomicBool = AtomicBool::new(false);

fn get_logger() -> &'static Mutex<DebugLogger> {
    LOGGER.get_or_init(|| Mutex::new(DebugLogger::new()))
}

fn get_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.6f").to_string()
}

/// Check if debugging is enabled at given level
pub fn is_enabled(level: DebugLevel) -> bool {
    let logger = get_logger().lock();
    level <= logger.level
}

/// Log a message at specified level
pub fn log(level: DebugLevel, category: &str, msg: &str) {
    let mut logger = get_logger().lock();
    logger.log(level, category, msg);
}

/// Log formatted message
pub fn logf(level: DebugLevel, category: &str, args: fmt::Arguments) {
    if is_enabled(level) {
        log(level, category, &format!("{}", args));
    }
}

/// Forwards `log` records into the debug log file
struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_str = match record.level() {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN ",
            log::Level::Info => "INFO ",
            log::Level::Debug => "DEBUG",
            log::Level::Trace => "TRACE",
        };
        let mut logger = get_logger().lock();
        logger.write_line(level_str, record.target(), &record.args().to_string());
    }

    fn flush(&self) {}
}

static BRIDGE: LogBridge = LogBridge;

fn rust_log_level() -> Option<LogLevel> {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| LogLevel::parse(value.trim()))
}

/// Install the `log` bridge.
///
/// Precedence: `cli_level`, then RUST_LOG, then DEBUG_LEVEL. The config
/// level is applied later through [`apply_config_level`] and only when
/// neither of the first two was given.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let rust_log = rust_log_level();
    let filter = match (cli_level, rust_log) {
        (Some(level), _) | (None, Some(level)) => {
            LEVEL_OVERRIDDEN.store(true, Ordering::Relaxed);
            level.to_level_filter()
        }
        (None, None) => get_logger().lock().level.to_level_filter(),
    };

    {
        let mut logger = get_logger().lock();
        logger.mirror_stderr = rust_log.is_some();
        if filter != log::LevelFilter::Off {
            logger.open_file();
        }
    }

    if log::set_logger(&BRIDGE).is_err() {
        // Another logger won; keep its setup
        return;
    }
    log::set_max_level(filter);
}

/// Apply the level from the config file unless the CLI or RUST_LOG set one
pub fn apply_config_level(level: LogLevel) {
    if LEVEL_OVERRIDDEN.load(Ordering::Relaxed) || level == LogLevel::Off {
        return;
    }
    let filter = level.to_level_filter();
    if filter > log::max_level() {
        get_logger().lock().open_file();
        log::set_max_level(filter);
    }
}

// Convenience macros for logging
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Error, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Info, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Debug, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Trace, $category, format_args!($($arg)*))
    };
}
