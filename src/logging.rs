use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::Path;

/// Environment variable naming the log file used by the binary.
pub const LOG_FILE_ENV: &str = "INPUT_MASKS_LOG";

/// Sends `log` output to `path`, truncating it. Terminal output stays clean
/// while a field is in raw mode.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file).map_err(io::Error::other)
}

/// Installs the file logger when [`LOG_FILE_ENV`] is set. Returns whether a
/// logger was installed.
pub fn init_from_env() -> io::Result<bool> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(false);
    };
    init_file_logger(path, LevelFilter::Debug)?;
    Ok(true)
}
