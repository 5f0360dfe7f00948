mod calc;
mod cli;
mod config;
mod error;
mod predict;
mod report;
mod session;
mod sheet;
mod types;

use crate::error::CgpaError;
use crate::sheet::{CourseSheet, SheetFile};
use crate::types::config::{CgpaConfig, ConfigFormat};
use crate::types::report::GpaReport;
use crate::types::scale::Scale;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_RESULT: i32 = 1;
    pub const TARGET_AT_RISK: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn output_format(
    cli_format: Option<cli::ReportFormat>,
    config: &CgpaConfig,
) -> report::OutputFormat {
    match cli_format {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.format() {
            Some(ConfigFormat::Json) => report::OutputFormat::Json,
            Some(ConfigFormat::Md) | None => report::OutputFormat::Md,
        },
    }
}

fn build_sheet(
    input: &cli::CourseInput,
    config: &CgpaConfig,
    quiet: bool,
) -> Result<CourseSheet, CgpaError> {
    let file = match &input.sheet {
        Some(path) => SheetFile::read(path)?,
        None => SheetFile::default(),
    };
    let mut sheet = CourseSheet::from_file(file, config.scale(), config.default_credits());
    for spec in &input.courses {
        sheet.push_spec(spec.clone());
    }
    if let Some(scale) = input.scale {
        sheet.set_scale(scale);
    }
    info!(
        scale = %sheet.scale(),
        courses = sheet.courses().len(),
        "course sheet ready"
    );
    if sheet.courses().is_empty() && !quiet {
        eprintln!("warning: no courses given; use --sheet or --course");
    }
    Ok(sheet)
}

fn run() -> Result<i32, CgpaError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let quiet = cli.quiet;

    let cwd = std::env::current_dir()?;
    let config = config::load_config(&cwd)?.unwrap_or_default();

    match cli.command {
        cli::Commands::Calc(cmd) => {
            let mut sheet = build_sheet(&cmd.input, &config, quiet)?;
            let average = sheet.calculate();
            let rendered = report::render(
                &GpaReport::from_sheet(&sheet),
                output_format(cmd.input.format, &config),
            )?;
            println!("{rendered}");

            if average.is_none() {
                if !quiet {
                    eprintln!("warning: average is undefined: no graded course carries credits");
                }
                return Ok(exit_code::NO_RESULT);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Predict(cmd) => {
            let mut sheet = build_sheet(&cmd.input, &config, quiet)?;
            if let Some(target) = &cmd.target {
                sheet.set_target(target);
            }
            let achievable = sheet
                .predict()
                .map(|prediction| prediction.target_achievable);
            let rendered = report::render(
                &GpaReport::from_sheet(&sheet),
                output_format(cmd.input.format, &config),
            )?;
            println!("{rendered}");

            match achievable {
                None => {
                    if !quiet {
                        eprintln!(
                            "warning: prediction unavailable: needs a numeric target and graded courses with credits"
                        );
                    }
                    Ok(exit_code::NO_RESULT)
                }
                Some(false) => Ok(exit_code::TARGET_AT_RISK),
                Some(true) => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Scales(cmd) => {
            let scales = match cmd.scale {
                Some(scale) => vec![scale],
                None => Scale::ALL.to_vec(),
            };
            for scale in scales {
                println!("{} scale (max {:.1}):", scale, scale.max_points());
                for (symbol, points) in scale.grades() {
                    println!("  {symbol:<3} {points:.1}");
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Session(cmd) => {
            let mut sheet =
                CourseSheet::new(cmd.scale.unwrap_or(config.scale()), config.default_credits());
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session::run(&mut sheet, stdin.lock(), &mut stdout)?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
