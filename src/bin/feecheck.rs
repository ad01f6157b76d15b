use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, bail};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, error, info};

use tuition_ceiling::fee::{EvaluationInput, FeeEvaluator, PricingMode};
use tuition_ceiling::print::tabulate_sweep;
use tuition_ceiling::report::Report;
use tuition_ceiling::schedule::FeeSchedule;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// pricing mode of the rate: 'minute' or 'hour'
    #[clap(short = 'm', long, value_parser = parse_mode)]
    mode: PricingMode,

    /// maximum rate, per minute (1-999) or per hour (1000 and above)
    #[clap(short = 'r', long)]
    rate: Option<String>,

    /// number of weeks a month is taken to have, e.g., 4.3
    #[clap(short = 'w', long)]
    weeks: Option<String>,

    /// file to source the fee schedule from
    #[clap(short = 's', long)]
    schedule: Option<PathBuf>,

    /// tabulate every session count up to the search bound
    #[clap(long)]
    sweep: bool,

    /// print the evaluation as JSON
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.json && self.sweep {
            bail!("the --json and --sweep flags cannot be combined");
        }
        Ok(())
    }
}
fn parse_mode(s: &str) -> anyhow::Result<PricingMode> {
    match s.to_lowercase().as_str() {
        "m" | "min" | "minute" | "per-minute" => Ok(PricingMode::PerMinute),
        "h" | "hour" | "per-hour" => Ok(PricingMode::PerHour),
        _ => Err(anyhow!("unsupported pricing mode {s}")),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let schedule = match &args.schedule {
        Some(path) => {
            debug!("loading fee schedule from {}", path.display());
            FeeSchedule::load(path)?
        }
        None => FeeSchedule::default(),
    };
    let evaluator = FeeEvaluator::new(schedule)?;
    debug!("schedule: {:?}", evaluator.schedule());

    let input = match EvaluationInput::parse(
        args.mode,
        args.rate.as_deref().unwrap_or_default(),
        args.weeks.as_deref().unwrap_or_default(),
    ) {
        Ok(input) => input,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };
    let evaluation = evaluator.evaluate(&input)?;
    debug!("evaluation: {evaluation:?}");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    let report = Report {
        schedule: evaluator.schedule(),
        input: &input,
        evaluation: &evaluation,
    };
    info!("\n{report}");

    if args.sweep {
        let evaluations = evaluator.sweep(input.mode, input.rate, input.weeks_per_month)?;
        let table = tabulate_sweep(&evaluations, evaluation.sessions_per_week);
        info!("\n{}", Console::default().render(&table));
    }
    Ok(())
}
