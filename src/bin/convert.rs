//! One-shot command line converter

use clap::Parser;

use units_converter::config::Config;
use units_converter::conversion::ConversionService;
use units_converter::tools::conversions;

#[derive(Parser)]
#[command(name = "convert")]
#[command(about = "Convert inches/centimeters, pounds/kilograms and feet/inches", long_about = None)]
struct Cli {
    /// Value to convert
    #[arg(required_unless_present = "list", allow_negative_numbers = true)]
    value: Option<f64>,

    /// Unit pair (defaults to UNITS_CONVERTER_DEFAULT_PAIR, then "in to cm")
    #[arg(short, long)]
    pair: Option<String>,

    /// Divide by the factor instead of multiplying (e.g. centimeters to inches)
    #[arg(short, long)]
    reverse: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// List the supported unit pairs
    #[arg(short, long)]
    list: bool,
}

fn run(cli: Cli, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let service = ConversionService::new()?;

    if cli.list {
        let pairs = conversions::list_unit_pairs(&service);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&pairs)?);
        } else {
            for p in pairs.unit_pairs {
                println!("{:<10} {} -> {} (x {})", p.id, p.from_label, p.to_label, p.factor);
            }
        }
        return Ok(());
    }

    let pair = match cli.pair.as_deref() {
        Some(id) => service.resolve_unit_pair(id)?,
        None => config.initial_pair(&service)?,
    };
    let value = cli.value.ok_or("a value is required")?;

    let result = conversions::convert(&service, pair.id, value, cli.reverse)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} {} = {} {}",
            result.input, result.input_label, result.output, result.output_label
        );
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let config = Config::from_env();

    let filter = match config.env_filter() {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
