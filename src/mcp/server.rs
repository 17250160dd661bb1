//! Units Converter MCP Server Implementation
//!
//! Exposes the conversion tools and one converter session over MCP.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::conversion::ConversionService;
use crate::models::ConverterState;
use crate::tools::conversions;
use crate::tools::session;
use crate::tools::status::StatusTracker;

/// Units Converter MCP Service
#[derive(Clone)]
pub struct UnitsConverterService {
    conversion: ConversionService,
    status_tracker: Arc<StatusTracker>,
    /// The converter "window" driven by the session tools
    session: Arc<Mutex<ConverterState>>,
    tool_router: ToolRouter<UnitsConverterService>,
}

impl UnitsConverterService {
    pub fn new(conversion: ConversionService, state: ConverterState) -> Self {
        Self {
            conversion,
            status_tracker: Arc::new(StatusTracker::new(conversion.unit_pairs().len())),
            session: Arc::new(Mutex::new(state)),
            tool_router: Self::tool_router(),
        }
    }

    fn session(&self) -> Result<MutexGuard<'_, ConverterState>, McpError> {
        self.session
            .lock()
            .map_err(|_| McpError::internal_error("Converter session lock poisoned", None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UnitPairParams {
    /// Unit pair identifier, e.g. "in to cm"
    pub unit_pair: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Unit pair identifier, e.g. "in to cm"
    pub unit_pair: String,
    /// Value to convert
    pub value: f64,
    /// Divide by the factor instead of multiplying (default false)
    #[serde(default)]
    pub reversed: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetReversedParams {
    pub reversed: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetInputParams {
    /// Text typed into the input field
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RunConversionParams {
    /// Text to type into the input field before converting (optional)
    pub input: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl UnitsConverterService {
    // --- Status ---

    #[tool(description = "Get the current status of the units converter including build info and uptime")]
    fn converter_status(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.status_tracker.get_status())
    }

    #[tool(description = "Get instructions for using the units converter tools. Call this when unsure which tool to use.")]
    fn converter_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERTER_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERTER_INSTRUCTIONS)]))
    }

    // --- Registry ---

    #[tool(description = "List every supported unit pair with its factor and labels")]
    fn list_unit_pairs(&self) -> Result<CallToolResult, McpError> {
        json_result(&conversions::list_unit_pairs(&self.conversion))
    }

    #[tool(description = "Look up a unit pair by identifier")]
    fn resolve_unit_pair(&self, Parameters(p): Parameters<UnitPairParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::resolve_unit_pair(&self.conversion, &p.unit_pair)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the source and target labels for a unit pair")]
    fn labels_for(&self, Parameters(p): Parameters<UnitPairParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::labels_for(&self.conversion, &p.unit_pair)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Conversion ---

    #[tool(description = "Convert a value with a unit pair. Forward multiplies by the factor, reversed divides. Does not touch the converter session.")]
    fn convert(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::convert(&self.conversion, &p.unit_pair, p.value, p.reversed)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Session ---

    #[tool(description = "Get the converter session: selected pair, direction, labels, values and pictures")]
    fn get_converter_state(&self) -> Result<CallToolResult, McpError> {
        let state = self.session()?;
        json_result(&session::get_state(&state))
    }

    #[tool(description = "Select a unit pair in the converter session. Both values reset to 0.")]
    fn select_unit_pair(&self, Parameters(p): Parameters<UnitPairParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.session()?;
        let view = session::select_unit_pair(&self.conversion, &mut state, &p.unit_pair)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&view)
    }

    #[tool(description = "Set the converter session direction. The field that becomes the output resets to 0.")]
    fn set_reversed(&self, Parameters(p): Parameters<SetReversedParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.session()?;
        json_result(&session::set_reversed(&mut state, p.reversed))
    }

    #[tool(description = "Type a number into the converter session's input field")]
    fn set_input(&self, Parameters(p): Parameters<SetInputParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.session()?;
        let view = session::set_input(&mut state, &p.text)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&view)
    }

    #[tool(description = "Press Convert in the converter session, optionally typing input first")]
    fn run_conversion(&self, Parameters(p): Parameters<RunConversionParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.session()?;
        let view = session::run_conversion(&self.conversion, &mut state, p.input.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&view)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for UnitsConverterService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "units-converter".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Units Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Units Converter - inches/centimeters, pounds/kilograms, feet/inches. \
                 Call converter_instructions first if unsure. \
                 Registry: list_unit_pairs, resolve_unit_pair, labels_for. \
                 One-off: convert. \
                 Session: get_converter_state, select_unit_pair, set_reversed, set_input, run_conversion. \
                 Status: converter_status."
                    .into(),
            ),
        }
    }
}
