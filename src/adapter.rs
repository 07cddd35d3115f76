//! The skill tool surface.
//!
//! Exposes discovery and loading as a single MCP tool. Listing tools runs a
//! fresh discovery and embeds the current catalog in the tool description;
//! calling the tool loads one skill and returns its formatted content. Every
//! failure at this boundary is rendered as readable text through the normal
//! result channel - the calling agent consumes text, not fault codes, and
//! needs something it can act on (re-list tools, fix a parameter, repair a
//! skill file).

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use skillhub_protocols::mcp::{McpToolDefinition, McpToolResult};
use skillhub_protocols::skill::Skill;

use crate::discovery::SkillRegistry;
use crate::loader::SkillLoader;

/// Tool id of the single invocation operation.
pub const LOAD_SKILL_TOOL: &str = "load_skill";

/// Catalog descriptions longer than this are cut with an ellipsis.
const MAX_CATALOG_DESCRIPTION: usize = 100;

/// Translates between the protocol surface and the registry/loader.
pub struct SkillToolAdapter {
    registry: Arc<SkillRegistry>,
    loader: SkillLoader,
}

impl SkillToolAdapter {
    pub fn new(registry: Arc<SkillRegistry>, loader: SkillLoader) -> Self {
        Self { registry, loader }
    }

    /// Discovery: re-scan and describe the `load_skill` tool.
    ///
    /// The description is rebuilt on every call so the embedded catalog is
    /// never stale.
    pub async fn list_tools(&self) -> Vec<McpToolDefinition> {
        let description = self.build_catalog().await;

        vec![McpToolDefinition {
            name: LOAD_SKILL_TOOL.to_string(),
            description: Some(description),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the skill to load"
                    }
                },
                "required": ["name"]
            }),
        }]
    }

    /// Invocation: dispatch a `tools/call` to the named tool.
    pub async fn call_tool(&self, tool: &str, arguments: &serde_json::Value) -> McpToolResult {
        if tool != LOAD_SKILL_TOOL {
            return McpToolResult::error_text(format!(
                "Unknown tool '{}'. The only available tool is '{}'.",
                tool, LOAD_SKILL_TOOL
            ));
        }

        let name = match arguments.get("name").and_then(|v| v.as_str()) {
            Some(n) => n,
            None => {
                return McpToolResult::error_text(
                    "Missing required parameter 'name': the name of the skill to load.",
                );
            }
        };

        match self.loader.load(name).await {
            Ok(skill) => McpToolResult::text(format_skill(&skill)),
            Err(e) => McpToolResult::error_text(format!("Error: {}", e)),
        }
    }

    /// Build the capability description embedding the current catalog.
    async fn build_catalog(&self) -> String {
        let names = self.registry.discover().await;

        if names.is_empty() {
            let mut text = String::from(
                "Load an expert skill by name. No skills are currently available.\n\n\
                 Configured skill directories:\n",
            );
            for source in self.registry.sources() {
                text.push_str(&format!(
                    "- {} ({})\n",
                    source.path().display(),
                    source.label()
                ));
            }
            return text;
        }

        let mut text = String::from(
            "Load an expert skill by name to get specialized instructions for the \
             current task.\n\nAvailable skills:\n",
        );

        for name in &names {
            match self.loader.metadata(name).await {
                Ok(meta) => {
                    text.push_str(&format!(
                        "- {}: {}\n",
                        name,
                        truncate(&meta.description, MAX_CATALOG_DESCRIPTION)
                    ));
                }
                Err(e) => {
                    // One malformed skill must not break discovery; list the
                    // bare name so it can still be inspected.
                    debug!("No description for skill '{}': {}", name, e);
                    text.push_str(&format!("- {}\n", name));
                }
            }
        }

        text
    }
}

/// Fixed text template for a loaded skill.
pub(crate) fn format_skill(skill: &Skill) -> String {
    format!(
        "# Skill: {}\n\n**Description**: {}\n**Source**: {}\n\n---\n\n{}",
        skill.name,
        skill.description,
        skill.source_dir.display(),
        skill.body
    )
}

/// First line of `text`, cut to `max` characters with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() <= max {
        line.to_string()
    } else {
        let cut: String = line.chars().take(max).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
