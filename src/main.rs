//! Units Converter
//!
//! An MCP server exposing the units converter over stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use units_converter::build_info;
use units_converter::config::Config;
use units_converter::conversion::ConversionService;
use units_converter::mcp::UnitsConverterService;
use units_converter::models::ConverterState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    // A bad registry is a build defect; refuse to start
    let conversion = ConversionService::new()?;
    let initial_pair = config.initial_pair(&conversion)?;
    tracing::info!(
        unit_pairs = conversion.unit_pairs().len(),
        initial_pair = initial_pair.id,
        "Unit pair registry loaded"
    );

    let service = UnitsConverterService::new(conversion, ConverterState::new(initial_pair));

    eprintln!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
