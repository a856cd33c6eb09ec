//! Print the OpenAPI document as JSON.

use bbq_tips::ApiDoc;
use clap::Parser;
use utoipa::OpenApi;

/// Command-line options for the OpenAPI dump.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the OpenAPI document as JSON")]
struct Args {
    /// Pretty-print the document.
    #[arg(long)]
    pretty: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let json = if args.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .map_err(std::io::Error::other)?;
    println!("{json}");
    Ok(())
}
