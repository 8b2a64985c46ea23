use numerizer::cli::{self, CliArgs};
use numerizer::logging::{self, LogConfig};
use numerizer::models::ParseOutcome;
use numerizer::{parse_with, ParseOptions};
use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    if let Err(e) = logging::init_logging(&LogConfig::from_env()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match cli::parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run with --help for usage");
            return ExitCode::from(2);
        }
    };

    if cli.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if cli.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let options = match cli.profile {
        Some(profile) => ParseOptions::for_profile(profile).with_env_overrides(),
        None => ParseOptions::from_env(),
    };
    tracing::debug!(?options, "Resolved parse options");

    let inputs = match collect_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Failed to read stdin: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut failed = false;
    for input in &inputs {
        let result = parse_with(input, &options);
        let outcome = ParseOutcome::new(input, options.profile, &result);
        failed |= !outcome.is_success();

        if cli.json {
            match serde_json::to_string(&outcome) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    tracing::error!("Failed to serialize result: {}", e);
                    failed = true;
                }
            }
            continue;
        }

        match result {
            Ok(value) => println!("{}", value),
            Err(e) => eprintln!("error: {:?}: {}", input, e),
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// The phrase given on the command line, or every non-blank stdin line
fn collect_inputs(cli: &CliArgs) -> io::Result<Vec<String>> {
    if !cli.text.is_empty() {
        return Ok(vec![cli.text.join(" ")]);
    }

    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}
