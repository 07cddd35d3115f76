//! Skill discovery and the registry snapshot.
//!
//! Every discovery request re-scans the configured directories from scratch
//! and replaces the registry wholesale, so additions, removals and overrides
//! on disk are visible on the very next call without a restart. Precedence
//! needs no merge logic: directories are scanned lowest to highest priority
//! and map inserts overwrite, so the highest-priority entry for a name wins
//! by write order alone.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use skillhub_protocols::skill::SkillLocation;

use crate::resolver::SkillSource;

/// The document file probed for inside each skill subdirectory.
pub const SKILL_FILE: &str = "SKILL.md";

/// Name→location registry, rebuilt by every discovery call.
pub struct SkillRegistry {
    /// Configured directories, lowest to highest priority. Fixed at startup.
    sources: Vec<SkillSource>,
    /// Most recent scan result. Replaced as a whole, never patched.
    entries: RwLock<HashMap<String, SkillLocation>>,
}

impl SkillRegistry {
    /// Create a registry over the given directory order.
    pub fn new(sources: Vec<SkillSource>) -> Self {
        Self {
            sources,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Configured skill directories, lowest to highest priority.
    pub fn sources(&self) -> &[SkillSource] {
        &self.sources
    }

    /// Re-scan all configured directories and replace the registry snapshot.
    ///
    /// Returns the lexicographically sorted skill names.
    pub async fn discover(&self) -> Vec<String> {
        let mut entries: HashMap<String, SkillLocation> = HashMap::new();

        for source in &self.sources {
            scan_directory(source, &mut entries);
        }

        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort();

        debug!(
            "Discovered {} skills across {} directories",
            names.len(),
            self.sources.len()
        );

        // Single assignment: a concurrent reader sees the old snapshot or
        // this one, never a partially built map.
        *self.entries.write().await = entries;

        names
    }

    /// Look up a skill in the most recent snapshot.
    pub async fn locate(&self, name: &str) -> Option<SkillLocation> {
        self.entries.read().await.get(name).cloned()
    }
}

/// Scan one directory's immediate subdirectories into the accumulating map.
///
/// Presence of the document file is an existence check only; parsing is
/// deferred until the skill is actually loaded.
fn scan_directory(source: &SkillSource, entries: &mut HashMap<String, SkillLocation>) {
    let dir = source.path();

    if !dir.exists() {
        debug!("Skill directory does not exist, skipping: {}", dir.display());
        return;
    }

    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            // One unlistable directory must not hide the skills in the others.
            warn!("Failed to list skill directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to read entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let skill_file = path.join(SKILL_FILE);
        if !skill_file.is_file() {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };

        entries.insert(
            name.clone(),
            SkillLocation {
                name,
                path: skill_file,
                source_dir: dir.to_path_buf(),
            },
        );
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
