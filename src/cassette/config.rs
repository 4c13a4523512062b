//! Per-port cassette selection for replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a path are served by an
/// adapter that panics when called during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the clock port.
    pub clock: Option<PathBuf>,
    /// Cassette for the key-value store port.
    pub kv: Option<PathBuf>,
    /// Cassette for the id generator port.
    pub id_gen: Option<PathBuf>,
    /// Cassette for the auth port.
    pub auth: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the key-value store port.
    pub kv: Option<CassetteReplayer>,
    /// Replayer for the id generator port.
    pub id_gen: Option<CassetteReplayer>,
    /// Replayer for the auth port.
    pub auth: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// A config with every port unconfigured.
    #[must_use]
    pub fn panic_on_unspecified() -> Self {
        Self::default()
    }

    /// Reads and parses one cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cassette(path: &Path) -> Result<Cassette, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Loads every configured cassette into its own replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let load = |path: &Option<PathBuf>| -> Result<Option<CassetteReplayer>, String> {
            path.as_deref()
                .map(|p| Self::load_cassette(p).map(|c| CassetteReplayer::new(&c)))
                .transpose()
        };
        Ok(PortReplayers {
            clock: load(&self.clock)?,
            kv: load(&self.kv)?,
            id_gen: load(&self.id_gen)?,
            auth: load(&self.auth)?,
        })
    }
}
