//! Converter tools module
//!
//! Tool implementations shared by the MCP server and the command line.

pub mod conversions;
pub mod session;
pub mod status;
