//! SKILL.md parser.
//!
//! A skill file opens with a `---` delimiter line, declares its metadata as
//! YAML, closes the header with a matching `---`, and carries the
//! instruction body after it:
//!
//! ```markdown
//! ---
//! name: Code Review Expert
//! description: Reviews code for correctness and style
//! ---
//!
//! You are an expert code reviewer...
//! ```
//!
//! `name` and `description` are required; additional header fields are
//! permitted and ignored.

use serde::Deserialize;

use skillhub_protocols::error::SkillError;

/// Deserialized YAML header of a skill file.
///
/// Both fields are optional at the serde layer so that each missing field
/// surfaces as its own error instead of one opaque deserialization failure.
#[derive(Debug, Default, Deserialize)]
struct SkillHeader {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Parsed pieces of a skill file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSkill {
    pub name: String,
    pub description: String,
    pub body: String,
}

/// Parse raw skill file text into header fields and body.
pub fn parse_skill_file(content: &str) -> Result<ParsedSkill, SkillError> {
    let (header_text, body) = extract_header(content)?;

    let header: SkillHeader = if header_text.is_empty() {
        SkillHeader::default()
    } else {
        serde_yml::from_str(&header_text)
            .map_err(|e| SkillError::InvalidFrontmatter(e.to_string()))?
    };

    let name = header.name.ok_or(SkillError::MissingName)?;
    let description = header.description.ok_or(SkillError::MissingDescription)?;

    Ok(ParsedSkill {
        name,
        description,
        body,
    })
}

/// Split content into the raw header block and the trimmed body.
fn extract_header(content: &str) -> Result<(String, String), SkillError> {
    let content = content.trim_start();

    if !content.starts_with("---") {
        return Err(SkillError::MissingOpeningDelimiter);
    }

    let after_open = &content[3..];
    let end = after_open
        .find("\n---")
        .ok_or(SkillError::MissingClosingDelimiter)?;

    let header = after_open[..end].trim().to_string();
    let body = after_open[end + 4..].trim().to_string();

    Ok((header, body))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
