use clap::Parser;

use predictbase::cli::output::{self, OutputConfig};
use predictbase::cli::{self, Cli};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = cli::run(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
