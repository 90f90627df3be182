use clap::Parser;

use project_report::cli::Cli;
use project_report::commands::run_report;
use project_report::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = run_report(&cli);

    std::process::exit(exit_code);
}
