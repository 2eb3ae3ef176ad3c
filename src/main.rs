use std::path::PathBuf;

use clap::Parser;
use safeincloud_xlsx::convert;
use safeincloud_xlsx::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_tracing().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.infile.exists() {
        return Err(ToolError::MissingInput(cli.infile));
    }

    convert::xml_to_excel(&cli.infile, &cli.outfile)
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Create an Excel workbook from the contents of an exported SafeInCloud XML file."
)]
struct Cli {
    /// The exported SafeInCloud XML file to read.
    #[arg(value_name = "input XML file")]
    infile: PathBuf,

    /// The Excel .xlsx file to write to.
    #[arg(value_name = "output Excel file")]
    outfile: PathBuf,
}
