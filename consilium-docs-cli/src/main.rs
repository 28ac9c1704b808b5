use clap::Parser;
use std::process::ExitCode;

use consilium_docs_cli::logging::init_logging;
use consilium_docs_cli::{run, Args, FATAL_EXIT_CODE};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok((report, rendered)) => {
            print!("{rendered}");
            ExitCode::from(report.exit_code())
        }
        Err(e) => {
            eprintln!("❌ Docs validation aborted: {e:#}");
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
