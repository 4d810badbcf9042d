//! Tool registry - maps tool names to schemas and implementations

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::args::{BoundArgs, ToolError};
use super::spec::ToolSpec;
use super::travel::TravelTool;
use super::ToolResult;
use crate::llm::ToolCall;

/// Name-keyed table of tools, built once at startup
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    entries: Vec<(TravelTool, ToolSpec)>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every travel tool
    pub fn travel() -> Self {
        let mut registry = Self::new();
        for tool in TravelTool::ALL {
            registry.register(tool);
        }
        registry
    }

    /// Add a tool, replacing any tool registered under the same name
    pub fn register(&mut self, tool: TravelTool) {
        let spec = tool.spec();
        match self.index.get(&spec.name) {
            Some(&i) => self.entries[i] = (tool, spec),
            None => {
                self.index.insert(spec.name.clone(), self.entries.len());
                self.entries.push((tool, spec));
            }
        }
    }

    /// Schemas to advertise to the model, in registration order
    pub fn definitions(&self) -> Vec<ToolSpec> {
        self.entries.iter().map(|(_, spec)| spec.clone()).collect()
    }

    pub fn spec(&self, name: &str) -> Option<&ToolSpec> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names in registration order
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, spec)| spec.name.as_str()).collect()
    }

    /// Run a tool by name with an already-parsed argument object.
    ///
    /// Never fails: unknown names and bad arguments come back as error records.
    pub fn dispatch(&self, name: &str, args: &Map<String, Value>) -> ToolResult {
        self.run(name, name, |spec| BoundArgs::bind(spec, args))
    }

    /// Run a tool call from the model, parsing its raw JSON arguments
    pub fn dispatch_call(&self, call: &ToolCall) -> ToolResult {
        self.run(call.name(), &call.id, |spec| BoundArgs::parse(spec, &call.function.arguments))
    }

    fn run<F>(&self, name: &str, label: &str, bind: F) -> ToolResult
    where
        F: FnOnce(&ToolSpec) -> Result<BoundArgs, ToolError>,
    {
        let Some(&i) = self.index.get(name) else {
            log::warn!("Model requested unknown tool: {} ({})", name, label);
            return ToolResult::error(format!("Unknown tool: {}", name));
        };
        let (tool, spec) = &self.entries[i];

        let result = match bind(spec).and_then(|bound| tool.invoke(&bound)) {
            Ok(result) => result,
            Err(e) => ToolResult::error(format!("Invalid arguments for {}: {}", name, e)),
        };

        if result.is_error {
            log::warn!("Tool {} ({}) returned an error record: {}", name, label, result.content);
        } else {
            log::debug!("Tool {} ({}) succeeded", name, label);
        }
        result
    }

    /// Run a batch of tool calls in order
    pub fn dispatch_all(&self, calls: &[ToolCall]) -> Vec<(String, ToolResult)> {
        calls
            .iter()
            .map(|call| (call.id.clone(), self.dispatch_call(call)))
            .collect()
    }
}
