//! Skill record types.
//!
//! A skill is a named unit of expert instructions stored as one `SKILL.md`
//! file: a delimited YAML header declaring `name` and `description`, then a
//! free-form instruction body.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of one skill within a registry snapshot.
///
/// Produced by a discovery scan and replaced wholesale by the next one;
/// nothing holds a `SkillLocation` across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLocation {
    /// Skill name, taken from its directory name.
    pub name: String,

    /// Full path to the skill's `SKILL.md`.
    pub path: PathBuf,

    /// The configured directory the skill resolved from.
    pub source_dir: PathBuf,
}

/// A fully loaded skill, read fresh from disk for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Display name, from the header `name` field.
    pub name: String,

    /// One-line description, from the header `description` field.
    pub description: String,

    /// Everything after the closing header delimiter, trimmed.
    pub body: String,

    /// Full path of the file the skill was read from.
    pub path: PathBuf,

    /// The configured directory the skill resolved from.
    pub source_dir: PathBuf,
}

impl Skill {
    /// Drop the body, keeping the header fields and provenance.
    pub fn into_metadata(self) -> SkillMetadata {
        SkillMetadata {
            name: self.name,
            description: self.description,
            path: self.path,
            source_dir: self.source_dir,
        }
    }
}

/// Skill metadata without the body.
///
/// Loading metadata does the same read-and-parse work as a full load; only
/// the returned payload is smaller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMetadata {
    pub name: String,
    pub description: String,
    pub path: PathBuf,
    pub source_dir: PathBuf,
}

#[cfg(test)]
#[path = "skill_tests.rs"]
mod tests;
