use clap::Parser;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

use cli::Cli;
use format::FormatterConfig;

fn main() {
    let cli = Cli::parse();
    let config = FormatterConfig::from_flags(cli.format, cli.quiet, cli.verbose);

    if let Err(e) = cmd::check::run(&cli, &config) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}
