//! Core logging bootstrap.
//!
//! # Responsibility
//! - Initialize file-based rolling logs exactly once per process.
//! - Capture panics as sanitized, metadata-only log events.
//!
//! # Invariants
//! - Initialization is idempotent for an identical `(level, log_dir)`
//!   pair and rejected for a conflicting one.
//! - Initialization never panics; failures come back as readable strings.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "cxm";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 120;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initializes core logging with a level and an absolute log directory.
///
/// # Invariants
/// - Repeat calls with the same `(level, log_dir)` succeed as no-ops.
/// - Repeat calls with a different level or directory are rejected.
///
/// # Errors
/// - Unsupported `level`, empty or relative `log_dir`, directory creation
///   failure, or logger backend failure, each as a readable message.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = canonical_level(level)?;
    let log_dir = canonical_log_dir(log_dir)?;

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, log_dir.clone()))?;

    if state.level != level {
        return Err(format!(
            "logging already active at level `{}`; refusing `{}`",
            state.level, level
        ));
    }
    if state.log_dir != log_dir {
        return Err(format!(
            "logging already active in `{}`; refusing `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }

    Ok(())
}

/// Returns `(level, log_dir)` when logging is active, `None` before init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: PathBuf) -> Result<LoggingState, String> {
    std::fs::create_dir_all(&log_dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", log_dir.display()))?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("logger start failed: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=app_start module=core status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "event=logging_init module=core status=ok level={} log_dir={}",
        level,
        log_dir.display()
    );

    Ok(LoggingState {
        level,
        log_dir,
        _logger: logger,
    })
}

fn canonical_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn canonical_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be absolute, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Panic payloads can carry user-entered text; cap and flatten them
        // before they reach the log file.
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            panic_payload_summary(panic_info)
        );
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    flatten_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn flatten_message(value: &str, max_chars: usize) -> String {
    let single_line = value.replace(['\n', '\r'], " ");
    let mut capped = single_line.chars().take(max_chars).collect::<String>();
    if single_line.chars().count() > max_chars {
        capped.push_str("...");
    }
    capped
}

#[cfg(test)]
mod tests {
    use super::{canonical_level, canonical_log_dir, flatten_message, init_logging, logging_status};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("cxm-logging-{suffix}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn canonical_level_normalizes_case_and_aliases() {
        assert_eq!(canonical_level("INFO").expect("INFO is valid"), "info");
        assert_eq!(
            canonical_level(" warning ").expect("warning is valid"),
            "warn"
        );
        assert!(canonical_level("verbose").is_err());
    }

    #[test]
    fn canonical_log_dir_rejects_relative_and_empty_paths() {
        assert!(canonical_log_dir("").is_err());
        let error = canonical_log_dir("logs/dev").expect_err("relative paths are rejected");
        assert!(error.contains("absolute"));
    }

    #[test]
    fn flatten_message_strips_newlines_and_caps_length() {
        let flattened = flatten_message("one\ntwo\rthree", 6);
        assert!(!flattened.contains('\n'));
        assert!(flattened.ends_with("..."));
    }

    #[test]
    fn init_is_idempotent_for_same_config_and_rejects_conflicts() {
        let first_dir = unique_temp_dir("first");
        let first = first_dir.to_str().expect("utf-8 temp path").to_string();
        let second_dir = unique_temp_dir("second");
        let second = second_dir.to_str().expect("utf-8 temp path").to_string();

        init_logging("info", &first).expect("first init succeeds");
        init_logging("info", &first).expect("same config is a no-op");

        assert!(init_logging("debug", &first).is_err());
        assert!(init_logging("info", &second).is_err());

        let (level, dir) = logging_status().expect("logging is active");
        assert_eq!(level, "info");
        assert_eq!(dir, first_dir);
    }
}
