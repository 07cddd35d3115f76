//! Skill content loading.
//!
//! Every load reads the file fresh from disk and parses it on the spot.
//! Skills are deliberately never cached: an edit on disk is reflected by the
//! very next call, and callers depend on that hot-reload guarantee.

use std::sync::Arc;

use tracing::debug;

use skillhub_protocols::error::SkillError;
use skillhub_protocols::skill::{Skill, SkillMetadata};

use crate::discovery::SkillRegistry;
use crate::parser::parse_skill_file;

/// Loads skill content by name, resolving locations through the registry.
pub struct SkillLoader {
    registry: Arc<SkillRegistry>,
}

impl SkillLoader {
    pub fn new(registry: Arc<SkillRegistry>) -> Self {
        Self { registry }
    }

    /// Load the full skill record for `name`.
    ///
    /// The name is looked up in the most recent registry snapshot; read and
    /// parse failures are wrapped with the skill's name as context.
    pub async fn load(&self, name: &str) -> Result<Skill, SkillError> {
        let location = self
            .registry
            .locate(name)
            .await
            .ok_or_else(|| SkillError::NotFound(name.to_string()))?;

        debug!("Loading skill '{}' from {}", name, location.path.display());

        let content = std::fs::read_to_string(&location.path).map_err(|e| {
            SkillError::for_skill(
                name,
                SkillError::Io {
                    path: location.path.clone(),
                    source: e,
                },
            )
        })?;

        let parsed = parse_skill_file(&content).map_err(|e| SkillError::for_skill(name, e))?;

        Ok(Skill {
            name: parsed.name,
            description: parsed.description,
            body: parsed.body,
            path: location.path,
            source_dir: location.source_dir,
        })
    }

    /// Load `name` but return only its metadata.
    ///
    /// Same lookup, read and parse as [`SkillLoader::load`]; only the
    /// returned payload omits the body.
    pub async fn metadata(&self, name: &str) -> Result<SkillMetadata, SkillError> {
        Ok(self.load(name).await?.into_metadata())
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
