//! Skill errors.
//!
//! Format violations are deliberately kept distinct: a caller repairing a
//! malformed skill file needs to know which rule was broken, so the four
//! violations are never collapsed into one generic parse error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    /// Requested name absent from the most recent registry snapshot.
    #[error(
        "Skill not found: {0}. The set of skills may have changed; re-run discovery to refresh it."
    )]
    NotFound(String),

    #[error("Skill file does not start with the opening frontmatter delimiter (---)")]
    MissingOpeningDelimiter,

    #[error("Skill file has no closing frontmatter delimiter (---)")]
    MissingClosingDelimiter,

    #[error("Skill frontmatter is missing the required 'name' field")]
    MissingName,

    #[error("Skill frontmatter is missing the required 'description' field")]
    MissingDescription,

    #[error("Invalid skill frontmatter: {0}")]
    InvalidFrontmatter(String),

    #[error("Failed to read skill file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read or parse failure attributed to one named skill.
    #[error("Failed to load skill '{name}': {source}")]
    LoadFailed {
        name: String,
        #[source]
        source: Box<SkillError>,
    },
}

impl SkillError {
    /// Attach a skill name to an underlying failure.
    pub fn for_skill(name: impl Into<String>, source: SkillError) -> Self {
        SkillError::LoadFailed {
            name: name.into(),
            source: Box::new(source),
        }
    }
}
