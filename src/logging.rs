use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming};

const LOG_FILE_SIZE_LIMIT_BYTES: u64 = 50_000_000;
const LOG_FILES_KEPT: usize = 5;

/// Starts the process-wide logger: a size-rotated file log under `log/`
/// duplicated to stderr. The returned handle must stay alive in `main`.
pub fn init() -> Result<LoggerHandle, FlexiLoggerError> {
  Logger::try_with_env_or_str("info")?
    .log_to_file(FileSpec::default().directory("log").basename("homework-status-bot"))
    .rotate(
      Criterion::Size(LOG_FILE_SIZE_LIMIT_BYTES),
      Naming::Numbers,
      Cleanup::KeepLogFiles(LOG_FILES_KEPT),
    )
    .append()
    .duplicate_to_stderr(Duplicate::All)
    .format(flexi_logger::detailed_format)
    .start()
}
