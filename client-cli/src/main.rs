mod flatdb_cli;
mod flatdb_server;
mod request;
mod response;
mod table_print;

use crate::flatdb_cli::{FlatDbCli, OutputFormat};
use crate::flatdb_server::FlatDbServer;
use clap::Parser;
use shared::{start_flatdb_options_builder, Logger};
use std::env;
use std::io::stdout;
use std::process::exit;

/// Command line client for a FlatDb server
#[derive(Parser, Debug)]
#[command(name = "flatdb")]
struct Args {
    /// Server address
    #[arg(long, default_value = "127.0.0.1:2134")]
    address: String,

    /// Print rows as JSON. Also enabled by FLATDB_TEST=1
    #[arg(long)]
    json: bool,

    /// Query to run. Without one, an interactive prompt is started
    query: Option<String>,
}

fn main() {
    let args = Args::parse();
    Logger::init(start_flatdb_options_builder()
        .use_debug_logging(false)
        .build_arc());

    let output_format = if args.json || is_test_environment() {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let server = match FlatDbServer::connect(&args.address) {
        Ok(server) => server,
        Err(error) => {
            eprintln!("flatdb: call server: {:?}", error);
            exit(1);
        }
    };
    let mut cli = FlatDbCli::create(server, output_format);

    let result = match &args.query {
        Some(query) => cli.run_query(query, &mut stdout()),
        None => cli.start(),
    };

    if let Err(error) = result {
        eprintln!("flatdb: {:?}", error);
        exit(1);
    }
}

fn is_test_environment() -> bool {
    env::var("FLATDB_TEST").map_or(false, |value| value == "1")
}
