use clap::Parser;

use dlt_cli::cli::commands::translate;
use dlt_cli::cli::{Args, Command, exit_code};
use dlt_cli::config::resolve_config;
use dlt_cli::deepl::print_languages;
use dlt_cli::output::{self, OutputConfig};
use dlt_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        None => {
            let config = match resolve_config(&args.resolve_options()) {
                Ok(config) => config,
                Err(e) => fail(&e, exitcode::CONFIG),
            };

            if let Err(e) = translate::run_translate(config).await {
                fail(&e, exit_code(&e));
            }
        }
    }
}

fn fail(err: &anyhow::Error, code: exitcode::ExitCode) -> ! {
    eprintln!("{} {err:#}", Style::error("Error:"));
    std::process::exit(code)
}
