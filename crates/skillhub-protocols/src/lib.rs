//! # Skillhub Protocols
//!
//! Shared type definitions for skillhub.
//!
//! - [`skill`] - skill record types produced by discovery and loading
//! - [`error`] - the skill error taxonomy
//! - [`mcp`] - JSON-RPC/MCP wire types spoken over stdio

pub mod error;
pub mod mcp;
pub mod skill;

pub use error::SkillError;
pub use mcp::{
    McpContent, McpError, McpRequest, McpResponse, McpToolDefinition, McpToolResult, RequestId,
};
pub use skill::{Skill, SkillLocation, SkillMetadata};
