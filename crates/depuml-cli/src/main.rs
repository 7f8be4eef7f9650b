use std::process::ExitCode;

use clap::Parser;

use depuml::{RunOptions, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "depuml",
    about = "depuml: pydeps DOT dependency graphs as nested PlantUML diagrams",
    version
)]
pub struct Cli {
    /// Path to the DOT file
    #[arg(value_name = "FILE")]
    file: String,

    /// Output file path (writes to stdout when omitted)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

pub fn run(args: Cli) -> ExitCode {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = RunOptions {
        file: args.file,
        output: args.output,
    };

    match run_main(&opts) {
        Ok(uml) => {
            if let Some(ref path) = opts.output {
                if let Err(e) = std::fs::write(path, format!("{uml}\n")) {
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                }
                tracing::info!(path = %path, "output written");
            } else {
                println!("{uml}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "conversion failed");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    run(Cli::parse())
}
