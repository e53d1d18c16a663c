use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::{ErrorConversion, Result};
use crate::event_log::{death_line, EventLog, SessionSummary};
use crate::game::Score;

/// File-backed event log.
///
/// Deaths are appended to `game_log.txt` through a buffer that is flushed
/// at session end, everything else goes to the `log` facade.
pub struct Journal {
    dir: PathBuf,
    session_id: u64,
    deaths: BufWriter<File>,
}

impl Journal {
    pub const DEATH_LOG: &'static str = "game_log.txt";

    pub fn open(dir: &Path) -> Result<Self> {
        let open = || -> Result<File> {
            fs::create_dir_all(dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(Self::DEATH_LOG))?;
            Ok(file)
        };
        let file = open().with_trace_step("Journal::open")?;

        let session_id = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        log::info!("session {} started, logging to {}", session_id, dir.display());

        Ok(Self {
            dir: dir.to_path_buf(),
            session_id,
            deaths: BufWriter::new(file),
        })
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// `MaxScore_Testrun<n>.txt` with the first unused `n`
    fn max_score_path(&self) -> PathBuf {
        (1..)
            .map(|n| self.dir.join(format!("MaxScore_Testrun{}.txt", n)))
            .find(|path| !path.exists())
            .unwrap_or_else(|| self.dir.join("MaxScore_Testrun.txt"))
    }

    fn flush_deaths(&mut self) {
        if let Err(e) = self.deaths.flush() {
            log::error!("failed to flush {}: {}", Self::DEATH_LOG, e);
        }
    }

    fn write_max_score(&self, best_score: Score) -> io::Result<PathBuf> {
        let path = self.max_score_path();
        fs::write(&path, format!("Max Score: {}\n", best_score))?;
        Ok(path)
    }
}

impl EventLog for Journal {
    fn death(&mut self, score: Score, time_alive: Duration) {
        let line = death_line(score, time_alive);
        log::info!("death: {}", line);
        if let Err(e) = writeln!(self.deaths, "{}", line) {
            log::error!("failed to write to {}: {}", Self::DEATH_LOG, e);
        }
    }

    fn score_update(&mut self, score: Score) {
        log::info!("score: {}", score);
    }

    fn telemetry(&mut self, event: &str) {
        log::info!("{}", event);
    }

    fn session_end(&mut self, summary: &SessionSummary) {
        self.death(summary.final_score, summary.time_alive);
        self.flush_deaths();

        match self.write_max_score(summary.best_score) {
            Ok(path) => log::info!("max score {} written to {}", summary.best_score, path.display()),
            Err(e) => log::error!("failed to write max score: {}", e),
        }

        log::info!("session {} ended", self.session_id);
        println!(
            "Game Ended! Final Score: {}, Time: {:.2}s",
            summary.final_score,
            summary.time_alive.as_secs_f32()
        );
    }
}

impl Drop for Journal {
    fn drop(&mut self) {
        self.flush_deaths();
    }
}
