use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, info};

use diophantine::equation::Equation;
use diophantine::error::Result;
use diophantine::input::{parse_i64, prompt_equation};
use diophantine::range::RangePolicy;
use diophantine::report::{write_json, write_text};

/// Solve the linear Diophantine equation a·x + b·y = c.
///
/// The first three COEFFICIENTS are a, b and c; any further ones are ignored.
/// With fewer than three, a, b and c are read from interactive prompts.
#[derive(Parser, Debug)]
#[command(name = "diophantine", version)]
struct Cli {
    /// a b c
    #[arg(allow_negative_numbers = true)]
    coefficients: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// How the admissible range of n is derived
    #[arg(long, value_enum, default_value = "classic")]
    policy: Policy,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Classic,
    Exact,
}

impl From<Policy> for RangePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Classic => RangePolicy::Classic,
            Policy::Exact => RangePolicy::Exact,
        }
    }
}

impl Cli {
    /// `None` when the coefficients have to be prompted for.
    fn equation(&self) -> Result<Option<Equation>> {
        if self.coefficients.len() < 3 {
            return Ok(None);
        }
        if self.coefficients.len() > 3 {
            debug!("ignoring arguments {:?}", &self.coefficients[3..]);
        }
        let a = parse_i64(&self.coefficients[0])?;
        let b = parse_i64(&self.coefficients[1])?;
        let c = parse_i64(&self.coefficients[2])?;
        Ok(Some(Equation::new(a, b, c)))
    }
}

fn run(cli: Cli) -> Result<()> {
    let equation = match cli.equation()? {
        Some(equation) => {
            info!("coefficients from arguments");
            equation
        }
        None => {
            info!("coefficients from prompts");
            prompt_equation()?
        }
    };

    let analysis = equation.analyze()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        Format::Text => write_text(&mut out, &analysis, cli.policy.into())?,
        Format::Json => write_json(&mut out, &analysis, cli.policy.into())?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().filter_or("DIOPHANTINE_LOG", "warn"));

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
