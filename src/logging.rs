use anyhow::Result;
use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};
use log::error;

use crate::techsupport::store::data_dir;

/// Logs to files in the data directory. `RUST_LOG` overrides the default spec.
pub fn init() -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str("warn,techsupport=debug,responder=debug")?
        .log_to_file(FileSpec::default().directory(data_dir()?.join("logs")))
        .write_mode(WriteMode::BufferAndFlush)
        .duplicate_to_stderr(Duplicate::Warn) // print warnings and errors also to the console
        .start()?;

    let orig_hook = std::panic::take_hook();
    let logger_for_panic = logger.clone();
    std::panic::set_hook(Box::new(move |panic_info| {
        // buffered log lines would be lost otherwise
        error!("Panic: {panic_info}");
        logger_for_panic.flush();
        orig_hook(panic_info);
        std::process::exit(1);
    }));
    Ok(logger)
}
