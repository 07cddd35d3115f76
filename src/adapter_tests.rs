use super::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::discovery::SKILL_FILE;
use crate::resolver::SkillSource;

fn write_skill(dir: &Path, skill: &str, description: &str, body: &str) {
    let skill_dir = dir.join(skill);
    fs::create_dir_all(&skill_dir).unwrap();
    let content = format!(
        "---\nname: {}\ndescription: {}\n---\n\n{}\n",
        skill, description, body
    );
    fs::write(skill_dir.join(SKILL_FILE), content).unwrap();
}

fn adapter_over(dirs: &[&Path]) -> SkillToolAdapter {
    let sources = dirs
        .iter()
        .map(|d| SkillSource::Project(d.to_path_buf()))
        .collect();
    let registry = Arc::new(SkillRegistry::new(sources));
    let loader = SkillLoader::new(registry.clone());
    SkillToolAdapter::new(registry, loader)
}

#[tokio::test]
async fn test_list_tools_embeds_catalog() {
    let temp = TempDir::new().unwrap();
    write_skill(temp.path(), "code-review", "Reviews code for defects", "...");
    write_skill(temp.path(), "api-design", "Designs REST APIs", "...");

    let adapter = adapter_over(&[temp.path()]);
    let tools = adapter.list_tools().await;

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, LOAD_SKILL_TOOL);

    let description = tools[0].description.as_deref().unwrap();
    assert!(description.contains("- api-design: Designs REST APIs"));
    assert!(description.contains("- code-review: Reviews code for defects"));
}

#[tokio::test]
async fn test_list_tools_schema_requires_name() {
    let temp = TempDir::new().unwrap();
    let adapter = adapter_over(&[temp.path()]);

    let tools = adapter.list_tools().await;
    let schema = &tools[0].input_schema;

    assert_eq!(schema["type"], "object");
    assert_eq!(schema["required"], serde_json::json!(["name"]));
    assert_eq!(schema["properties"]["name"]["type"], "string");
}

#[tokio::test]
async fn test_empty_catalog_lists_configured_directories() {
    let temp = TempDir::new().unwrap();
    let adapter = adapter_over(&[temp.path()]);

    let tools = adapter.list_tools().await;
    let description = tools[0].description.as_deref().unwrap();

    assert!(description.contains("No skills are currently available"));
    assert!(description.contains(&temp.path().display().to_string()));
}

#[tokio::test]
async fn test_long_descriptions_are_truncated_with_ellipsis() {
    let temp = TempDir::new().unwrap();
    let long = "x".repeat(150);
    write_skill(temp.path(), "wordy", &long, "...");

    let adapter = adapter_over(&[temp.path()]);
    let tools = adapter.list_tools().await;
    let description = tools[0].description.as_deref().unwrap();

    assert!(description.contains(&format!("- wordy: {}...", "x".repeat(100))));
    assert!(!description.contains(&long));
}

#[tokio::test]
async fn test_malformed_skill_falls_back_to_bare_name() {
    let temp = TempDir::new().unwrap();
    write_skill(temp.path(), "good", "A good skill", "...");

    let broken_dir = temp.path().join("broken");
    fs::create_dir_all(&broken_dir).unwrap();
    fs::write(broken_dir.join(SKILL_FILE), "not a skill file").unwrap();

    let adapter = adapter_over(&[temp.path()]);
    let tools = adapter.list_tools().await;
    let description = tools[0].description.as_deref().unwrap();

    assert!(description.contains("- broken\n"));
    assert!(description.contains("- good: A good skill"));
}

#[tokio::test]
async fn test_call_formats_skill_content() {
    let temp = TempDir::new().unwrap();
    write_skill(temp.path(), "review", "Reviews code", "Check every branch.");

    let adapter = adapter_over(&[temp.path()]);
    adapter.list_tools().await; // populate the registry

    let result = adapter
        .call_tool(LOAD_SKILL_TOOL, &serde_json::json!({"name": "review"}))
        .await;

    assert!(!result.is_error);
    let text = result.text_content();
    assert!(text.contains("# Skill: review"));
    assert!(text.contains("**Description**: Reviews code"));
    assert!(text.contains(&format!("**Source**: {}", temp.path().display())));
    assert!(text.contains("Check every branch."));
}

#[tokio::test]
async fn test_call_unknown_tool_is_text_not_fault() {
    let temp = TempDir::new().unwrap();
    let adapter = adapter_over(&[temp.path()]);

    let result = adapter
        .call_tool("launch_rockets", &serde_json::json!({}))
        .await;

    assert!(result.is_error);
    let text = result.text_content();
    assert!(text.contains("Unknown tool 'launch_rockets'"));
    assert!(text.contains(LOAD_SKILL_TOOL));
}

#[tokio::test]
async fn test_call_missing_parameter_is_text() {
    let temp = TempDir::new().unwrap();
    let adapter = adapter_over(&[temp.path()]);

    let result = adapter
        .call_tool(LOAD_SKILL_TOOL, &serde_json::json!({}))
        .await;

    assert!(result.is_error);
    assert!(result.text_content().contains("Missing required parameter 'name'"));
}

#[tokio::test]
async fn test_call_non_string_parameter_is_text() {
    let temp = TempDir::new().unwrap();
    let adapter = adapter_over(&[temp.path()]);

    let result = adapter
        .call_tool(LOAD_SKILL_TOOL, &serde_json::json!({"name": 42}))
        .await;

    assert!(result.is_error);
    assert!(result.text_content().contains("Missing required parameter"));
}

#[tokio::test]
async fn test_call_not_found_reports_error_text() {
    let temp = TempDir::new().unwrap();
    let adapter = adapter_over(&[temp.path()]);
    adapter.list_tools().await;

    let result = adapter
        .call_tool(LOAD_SKILL_TOOL, &serde_json::json!({"name": "ghost"}))
        .await;

    assert!(result.is_error);
    let text = result.text_content();
    assert!(text.starts_with("Error:"));
    assert!(text.contains("not found"));
    assert!(text.contains("ghost"));
}

#[tokio::test]
async fn test_skill_added_between_listings_is_visible() {
    let temp = TempDir::new().unwrap();
    let adapter = adapter_over(&[temp.path()]);

    let before = adapter.list_tools().await;
    assert!(before[0]
        .description
        .as_deref()
        .unwrap()
        .contains("No skills are currently available"));

    write_skill(temp.path(), "fresh", "Just added", "...");

    let after = adapter.list_tools().await;
    assert!(after[0]
        .description
        .as_deref()
        .unwrap()
        .contains("- fresh: Just added"));
}
