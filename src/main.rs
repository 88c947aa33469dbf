use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use filterbench::{
    bench::{BenchConfig, Benchmark},
    cli::{BenchArgs, Cli, Command, OutputFormat, ReportArgs, ReportMode},
    csv_output::{CsvBenchOutput, CsvReportOutput},
    json_output::JsonOutput,
    report::{Report, Scenario},
    text_output,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load the scenario file if one was given, else the built-in data
fn load_scenario(path: Option<&std::path::Path>) -> Result<Scenario> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading scenario");
            Scenario::from_file(path)
        }
        None => Ok(Scenario::default()),
    }
}

/// Print a report in the requested mode and format
fn print_report(
    report: Report,
    scenario: &Scenario,
    mode: ReportMode,
    format: OutputFormat,
    include_chart: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", text_output::format_report(&report, mode)),
        OutputFormat::Json => {
            let output = JsonOutput::new(report, scenario, mode.name(), include_chart);
            println!("{}", output.to_json().context("Failed to serialize report")?);
        }
        OutputFormat::Csv => print!("{}", CsvReportOutput::from_rows(&report.rows).to_csv()),
    }
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<()> {
    let scenario = load_scenario(args.scenario.as_deref())?;
    let report = Report::from_scenario(&scenario).context("Failed to build report")?;
    print_report(report, &scenario, args.mode, args.format, !args.no_chart)
}

fn run_bench(args: BenchArgs) -> Result<()> {
    let mut config = match args.sizes {
        Some(sizes) => BenchConfig {
            sizes,
            ..BenchConfig::default()
        },
        None => BenchConfig::default(),
    };
    if args.stress {
        config.sizes.push(filterbench::bench::STRESS_SIZE);
    }
    config.delay = Duration::from_millis(args.delay_ms);
    if args.report {
        config.validate_for_report()
    } else {
        config.validate()
    }
    .map_err(|e| anyhow::anyhow!(e))?;

    // models come from the scenario file; load it before the timed runs
    let models = if args.report {
        Some(load_scenario(args.scenario.as_deref())?)
    } else {
        None
    };

    let outcome = Benchmark::new(config.clone()).run();

    if let Some(models) = models {
        let scenario = outcome.to_scenario(
            models.imperative_model,
            models.higher_order_model,
            config.delay,
        );
        let report = Report::from_scenario(&scenario)
            .context("Failed to build report from measured timings")?;
        println!();
        print_report(report, &scenario, ReportMode::Complete, args.format, true)?;
    } else {
        match args.format {
            OutputFormat::Text => {}
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&outcome)
                    .context("Failed to serialize benchmark records")?
            ),
            OutputFormat::Csv => {
                print!("{}", CsvBenchOutput::from_records(&outcome.records).to_csv())
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    match args.command {
        Some(Command::Report(report_args)) => run_report(report_args),
        Some(Command::Bench(bench_args)) => run_bench(bench_args),
        None => run_report(ReportArgs::default()),
    }
}
