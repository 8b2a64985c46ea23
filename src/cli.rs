/// CLI argument parsing and help text
use crate::config::Profile;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Profile forced on the command line (overrides NUMERIZER_PROFILE)
    pub profile: Option<Profile>,
    pub json: bool,
    pub help: bool,
    pub version: bool,
    /// Words of the phrase to parse; empty means read lines from stdin
    pub text: Vec<String>,
}

/// Parse command-line arguments (without the program name)
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg {
            "-h" | "--help" => cli.help = true,
            "-v" | "--version" => cli.version = true,
            "--json" => cli.json = true,
            "--plain" => cli.profile = Some(Profile::Plain),
            "--currency" => cli.profile = Some(Profile::Currency),
            "--profile" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--profile requires a value".to_string())?;
                cli.profile = Some(value.parse()?);
            }
            "--" => {
                cli.text.extend(iter.by_ref().map(str::to_string));
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}", flag));
            }
            word => cli.text.push(word.to_string()),
        }
    }

    Ok(cli)
}

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Numerizer v{}", version);
    println!("Convert English number phrases into integers");
    println!();
    println!("USAGE:");
    println!("    numerizer [OPTIONS] [TEXT...]");
    println!();
    println!("OPTIONS:");
    println!("    --plain               Parse bare number words (default)");
    println!("    --currency            Parse dollars/cents amounts, print cents");
    println!("    --profile <NAME>      Same as above: plain | currency");
    println!("    --json                Print one JSON record per input");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    numerizer four thousand, four hundred thirty-two");
    println!("    numerizer --currency \"two hundred four dollars and eighteen cents\"");
    println!("    echo \"forty five\" | numerizer --json");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    NUMERIZER_PROFILE          - Default profile (plain/currency)");
    println!("    NUMERIZER_TEEN_HUNDREDS    - Accept \"seventeen hundred\" (true/false)");
    println!("    NUMERIZER_SKIP_UNKNOWN     - Skip stray words before dollars/cents (true/false)");
    println!("    NUMERIZER_LOG_FORMAT       - Log format (compact/pretty/json)");
    println!("    RUST_LOG                   - Log level (error/warn/info/debug/trace)");
    println!();
    println!("Settings can also be placed in a .env file in the current directory.");
}

pub fn print_version() {
    println!("Numerizer v{}", env!("CARGO_PKG_VERSION"));
}
