//! ToolExecutor - dispatches tool calls by name

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::builtin::{
    CalculateTool, GenerateApiKeyTool, GeneratePasswordTool, GeneratePinTool, GenerateTokenTool, GenerateUuidTool,
    HashTextTool,
};
use super::{Tool, ToolContext, ToolError, ToolResult};

/// A request to run one tool
#[derive(Debug, Clone)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub input: Value,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
        }
    }
}

/// Name, description and input schema of a registered tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Registry of tools keyed by name
pub struct ToolExecutor {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create executor with every built-in tool
    pub fn standard() -> Self {
        debug!("ToolExecutor::standard: called");
        let mut executor = Self::empty();

        // Generators
        executor.add_tool(Box::new(GenerateUuidTool));
        executor.add_tool(Box::new(GeneratePasswordTool));
        executor.add_tool(Box::new(GenerateApiKeyTool));
        executor.add_tool(Box::new(GenerateTokenTool));
        executor.add_tool(Box::new(GeneratePinTool));

        // Digests and arithmetic
        executor.add_tool(Box::new(HashTextTool));
        executor.add_tool(Box::new(CalculateTool));

        executor
    }

    /// Create an empty executor (for testing)
    pub fn empty() -> Self {
        debug!("ToolExecutor::empty: called");
        Self { tools: HashMap::new() }
    }

    /// Add a tool to the executor
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        debug!(tool_name = %tool.name(), "ToolExecutor::add_tool: called");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Definitions of every tool, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        debug!("ToolExecutor::definitions: called");
        let mut definitions: Vec<ToolDefinition> = self.tools.values().map(|t| Self::definition_of(t.as_ref())).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Definition of a single tool
    pub fn definition(&self, name: &str) -> Option<ToolDefinition> {
        debug!(%name, "ToolExecutor::definition: called");
        self.tools.get(name).map(|t| Self::definition_of(t.as_ref()))
    }

    fn definition_of(tool: &dyn Tool) -> ToolDefinition {
        ToolDefinition {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            input_schema: tool.input_schema(),
        }
    }

    /// Execute a tool call
    pub async fn execute(&self, tool_call: &ToolCall, ctx: &ToolContext) -> ToolResult {
        debug!(tool_name = %tool_call.name, tool_id = %tool_call.id, "ToolExecutor::execute: called");
        match self.tools.get(&tool_call.name) {
            Some(tool) => {
                debug!("ToolExecutor::execute: tool found, executing");
                tool.execute(tool_call.input.clone(), ctx).await
            }
            None => {
                debug!("ToolExecutor::execute: unknown tool");
                ToolError::UnknownTool {
                    name: tool_call.name.clone(),
                }
                .into()
            }
        }
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        debug!(%name, "ToolExecutor::has_tool: called");
        let result = self.tools.contains_key(name);
        debug!(%result, "ToolExecutor::has_tool: returning");
        result
    }

    /// Tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        debug!("ToolExecutor::tool_names: called");
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::standard()
    }
}
