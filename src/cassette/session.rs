//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::config::CassetteConfig;
use super::recorder::CassetteRecorder;

/// Shared handle to one port's recorder.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// One recorder per port, all writing into a timestamped directory.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: SharedRecorder,
    /// Recorder for key-value store interactions.
    pub kv: SharedRecorder,
    /// Recorder for id generator interactions.
    pub id_gen: SharedRecorder,
    /// Recorder for auth interactions.
    pub auth: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Creates a session writing to `<root>/<timestamp>/<port>.cassette.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamped directory already exists or
    /// cannot be created.
    pub fn new(root: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let make_recorder = |port: &str| -> SharedRecorder {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self {
            clock: make_recorder("clock"),
            kv: make_recorder("kv"),
            id_gen: make_recorder("id_gen"),
            auth: make_recorder("auth"),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The replay configuration matching this session's output files.
    #[must_use]
    pub fn replay_config(&self) -> CassetteConfig {
        let path = |port: &str| Some(self.output_dir.join(format!("{port}.cassette.yaml")));
        CassetteConfig {
            clock: path("clock"),
            kv: path("kv"),
            id_gen: path("id_gen"),
            auth: path("auth"),
        }
    }

    /// Writes every port's cassette and returns the output directory.
    ///
    /// The recording adapters must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(recorder: SharedRecorder, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(recorder)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.clock, "clock")?;
        finish_one(self.kv, "kv")?;
        finish_one(self.id_gen, "id_gen")?;
        finish_one(self.auth, "auth")?;

        Ok(self.output_dir)
    }
}
