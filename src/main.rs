use attest::{
    EngineConfig, ExecutorImpl, ReportError, ReportGenerator, read_reports, read_single_report,
    render_all_to_dir,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Render internship reports to PDF.
#[derive(Parser, Debug)]
#[command(name = "attest", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one report document.
    Render {
        /// Report JSON (a single object with a `reportKind` field).
        input: PathBuf,
        /// Output file. Defaults to the generated filename in the current directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Engine configuration JSON.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Date printed in footers and signature stamps (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Render every report in a JSON array into a directory.
    Bulk {
        input: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Render one report at a time instead of in parallel.
        #[arg(long)]
        sequential: bool,
    },
}

fn generator(
    config: Option<&Path>,
    date: Option<NaiveDate>,
) -> Result<ReportGenerator, ReportError> {
    let config = match config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let generator = ReportGenerator::new(config)?;
    Ok(match date {
        Some(date) => generator.with_date(date),
        None => generator,
    })
}

fn run(cli: Cli) -> Result<bool, ReportError> {
    match cli.command {
        Command::Render {
            input,
            output,
            config,
            date,
        } => {
            let document = read_single_report(&input)?;
            let generator = generator(config.as_deref(), date)?;
            let path = output.unwrap_or_else(|| PathBuf::from(attest::report_filename(&document)));
            let summary = generator.render_to_file(&document, &path)?;
            if summary.overflowed_blocks > 0 {
                info!("{} block(s) were taller than a page", summary.overflowed_blocks);
            }
            println!("{} ({} page(s))", path.display(), summary.page_count);
            Ok(true)
        }
        Command::Bulk {
            input,
            out_dir,
            config,
            date,
            sequential,
        } => {
            let generator = generator(config.as_deref(), date)?;
            let documents = read_reports(&input)?;
            let executor = ExecutorImpl::select(sequential);
            let results = render_all_to_dir(&generator, documents, &out_dir, &executor);

            let mut all_ok = true;
            for (i, result) in results.iter().enumerate() {
                match result {
                    Ok((path, summary)) => {
                        println!("{} ({} page(s))", path.display(), summary.page_count)
                    }
                    Err(e) => {
                        all_ok = false;
                        error!("report #{} failed: {}", i + 1, e);
                    }
                }
            }
            Ok(all_ok)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
