//! Tool registry: stores tools by name, lists specs, dispatches calls.

use std::collections::HashMap;

use serde_json::Value;

use super::{Tool, ToolError, ToolOutput, ToolSpec};

/// Registry of tools keyed by name.
///
/// Provides registration, listing (for the LLM request), and dispatch (for the
/// agent loop). Registering a tool under an existing name replaces it.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, replacing any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Lists all registered tools as specs for the LLM request.
    ///
    /// Order is sorted by name so prompts are stable across runs.
    pub fn list(&self) -> Vec<ToolSpec> {
        let mut specs: Vec<ToolSpec> = self.tools.values().map(|t| t.spec()).collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Calls a tool by name with the given JSON arguments.
    ///
    /// # Errors
    ///
    /// `ToolError::NotFound` for an unregistered name; otherwise whatever the
    /// tool itself returns.
    pub async fn call(&self, name: &str, args: Value) -> Result<ToolOutput, ToolError> {
        match self.tools.get(name) {
            Some(tool) => tool.call(args).await,
            None => Err(ToolError::NotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn spec(&self) -> ToolSpec {
            ToolSpec {
                name: "echo".to_string(),
                description: Some("Echo the input back.".to_string()),
                input_schema: json!({ "type": "object", "properties": {} }),
            }
        }

        async fn call(&self, args: Value) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput {
                text: args.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn register_list_and_call() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        registry.register(Box::new(EchoTool));
        assert_eq!(registry.len(), 1);
        let specs = registry.list();
        assert_eq!(specs[0].name, "echo");
        let out = registry.call("echo", json!({ "x": 1 })).await.unwrap();
        assert_eq!(out.text, r#"{"x":1}"#);
    }

    /// **Scenario**: calling an unregistered name yields NotFound with the name.
    #[tokio::test]
    async fn call_unknown_tool_is_not_found() {
        let registry = ToolRegistry::new();
        let err = registry.call("nope", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(name) if name == "nope"));
    }

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        struct Named(&'static str);

        #[async_trait]
        impl Tool for Named {
            fn name(&self) -> &str {
                self.0
            }
            fn spec(&self) -> ToolSpec {
                ToolSpec {
                    name: self.0.to_string(),
                    description: None,
                    input_schema: json!({}),
                }
            }
            async fn call(&self, _args: Value) -> Result<ToolOutput, ToolError> {
                Ok(ToolOutput {
                    text: String::new(),
                })
            }
        }

        let mut registry = ToolRegistry::new();
        registry.register(Box::new(Named("zeta")));
        registry.register(Box::new(Named("alpha")));
        let names: Vec<String> = registry.list().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
