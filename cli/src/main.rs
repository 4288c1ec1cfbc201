//! CLI entry point for the riskbook calculator.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use log::info;

use riskbook_cli::batch;
use riskbook_cli::calc::{self, CalcRequest};
use riskbook_cli::config::Config;
use riskbook_cli::error::{Error, Result};
use riskbook_cli::session::Session;

#[derive(Parser)]
#[command(name = "riskcalc")]
#[command(about = "Position size and risk/reward calculator")]
#[command(version)]
struct Cli {
    /// Path to config.toml (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Size one position
    Calc(CalcArgs),

    /// Live calculator: set fields one at a time
    Interactive,

    /// Compute a JSON array of requests, one JSON result per line
    Batch {
        /// Path to requests.json
        file: PathBuf,
    },
}

// Field values are taken verbatim, leading `-` included, so negatives reach
// the coercion rules instead of being read as flags.
#[derive(Args)]
struct CalcArgs {
    /// Trading capital (defaults to [defaults].capital)
    #[arg(long, allow_hyphen_values = true)]
    capital: Option<String>,

    /// Percent of capital to risk (defaults to [defaults].risk_pct)
    #[arg(long = "risk", allow_hyphen_values = true)]
    risk_pct: Option<String>,

    /// Entry price
    #[arg(long, allow_hyphen_values = true)]
    entry: Option<String>,

    /// Stop-loss price
    #[arg(long = "sl", allow_hyphen_values = true)]
    stop_loss: Option<String>,

    /// Target price
    #[arg(long, allow_hyphen_values = true)]
    target: Option<String>,

    /// Reject malformed values instead of treating them as zero
    #[arg(long)]
    strict: bool,

    /// Print JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

impl CalcArgs {
    fn request(&self) -> CalcRequest {
        CalcRequest {
            capital: self.capital.clone(),
            risk_pct: self.risk_pct.clone(),
            entry: self.entry.clone(),
            stop_loss: self.stop_loss.clone(),
            target: self.target.clone(),
            strict: self.strict,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Calc(args) => {
            println!("{}", calc::run(&config, &args.request(), args.json)?);
            Ok(())
        }
        Command::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Session::new(&config).run(stdin.lock(), &mut stdout)
        }
        Command::Batch { file } => {
            let requests = batch::load(&file)?;
            let mut out = BufWriter::new(io::stdout().lock());
            batch::run(&config.calculator(), &requests, &mut out)?;
            out.flush().map_err(Error::from)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskbook::{Field, InputError};

    fn calc_args(argv: &[&str]) -> CalcArgs {
        let base = ["riskcalc", "calc", "--capital", "100000", "--risk", "1", "--entry", "100"];
        let cli = Cli::try_parse_from(base.iter().chain(argv).copied()).unwrap();
        match cli.command {
            Command::Calc(args) => args,
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn negative_stop_is_coerced_to_not_computable() {
        let args = calc_args(&["--sl", "-95"]);
        assert_eq!(args.stop_loss.as_deref(), Some("-95"));
        let text = calc::run(&Config::default(), &args.request(), args.json).unwrap();
        assert_eq!(text, calc::NOT_COMPUTABLE);
    }

    #[test]
    fn strict_negative_stop_is_rejected() {
        let args = calc_args(&["--strict", "--sl", "-95"]);
        let err = calc::run(&Config::default(), &args.request(), args.json).unwrap_err();
        assert!(matches!(
            err,
            Error::Input(InputError::NotPositive {
                field: Field::StopLossPrice,
                ..
            })
        ));
    }

    #[test]
    fn flags_after_negative_value_still_parse() {
        let args = calc_args(&["--sl", "-95", "--json"]);
        assert!(args.json);
        let text = calc::run(&Config::default(), &args.request(), args.json).unwrap();
        assert_eq!(text, "{\n  \"computable\": false\n}");
    }

    #[test]
    fn full_request_from_flags() {
        let args = calc_args(&["--sl", "95", "--target", "110"]);
        let text = calc::run(&Config::default(), &args.request(), args.json).unwrap();
        assert!(text.contains("Position size   : 200"));
        assert!(text.contains("1 : 2 (favorable)"));
    }
}
