use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::{self, File};

use crate::app::prefs::Prefs;
use crate::error::{Error, ErrorConversion, Result};

pub const SESSION_LOG: &str = "snake_session.log";

/// Warnings and errors go to the terminal, everything at `prefs.log_level`
/// goes to the session log
pub fn init(prefs: &Prefs) -> Result {
    let path = prefs.log_dir.join(SESSION_LOG);
    let file = fs::create_dir_all(&prefs.log_dir)
        .and_then(|()| File::create(&path))
        .map_err(|e| Error::initialization(format!("{}: {}", path.display(), e)))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(prefs.log_level, Config::default(), file),
    ])
    .map_err(Error::from)
    .with_trace_step("logging::init")
}
