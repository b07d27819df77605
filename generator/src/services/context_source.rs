//! Decade context loaded from JSON files on disk

use std::path::PathBuf;

use shared::DecadeContext;
use tracing::{debug, warn};

use crate::error::GeneratorResult;
use crate::traits::ContextSource;

/// Reads `{dir}/{decade}.json`, e.g. `data/1970.json`
#[derive(Debug, Clone)]
pub struct FileContextSource {
    dir: PathBuf,
}

impl FileContextSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, decade: u16) -> PathBuf {
        self.dir.join(format!("{decade}.json"))
    }

    /// Strict load; errors are surfaced instead of replaced
    pub fn load(&self, decade: u16) -> GeneratorResult<DecadeContext> {
        let raw = std::fs::read_to_string(self.path_for(decade))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl ContextSource for FileContextSource {
    fn context_for(&self, decade: u16) -> DecadeContext {
        match self.load(decade) {
            Ok(context) => {
                debug!(decade, entries = context.entry_count(), "Loaded decade context");
                context
            }
            Err(e) => {
                warn!(
                    decade,
                    path = %self.path_for(decade).display(),
                    "Using fallback context: {}",
                    e
                );
                DecadeContext::fallback(decade)
            }
        }
    }
}
