//! Past-paper command line.
//!
//! Usage:
//!   pastpaper subjects
//!   pastpaper topical 9231_qp_merged.pdf --subject 9231 --output topical
//!   pastpaper fetch --subject 9231 --paper 1 --years 2018-2023 --sessions s,w --topical
//!
//! Set `RUST_LOG=debug` for per-page and per-download detail.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pastpaper::catalog::{self, parse_sessions, parse_year_range};
use pastpaper::config::DEFAULT_BASE_URL;
use pastpaper::{
    ClassificationJob, FetchConfig, HttpPaperSource, JobConfig, JobState, KeywordRegistry,
    LogProgress, PaperAssembler, PaperRequest, PdfMerger, Task, TaskStatus,
};

#[derive(Debug, Parser)]
#[command(name = "pastpaper")]
#[command(about = "Download, merge and split past papers by topic")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List known subjects and whether a keyword map exists for them.
    Subjects,

    /// Split a merged question paper into one PDF per topic.
    Topical {
        /// Merged question paper PDF.
        input: PathBuf,

        /// Subject code, e.g. 9231.
        #[arg(short, long)]
        subject: String,

        /// Directory for the topical PDFs.
        #[arg(short, long, default_value = "topical")]
        output: PathBuf,

        /// Report progress every N pages.
        #[arg(long, default_value_t = 50)]
        progress_interval: usize,

        /// Print the job result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Download and merge papers, optionally generating topical PDFs.
    Fetch {
        /// Subject code, e.g. 9231.
        #[arg(short, long)]
        subject: String,

        /// Paper number, 1 to 9.
        #[arg(short, long)]
        paper: u8,

        /// Year range, e.g. 2018-2023.
        #[arg(short, long)]
        years: String,

        /// Sessions: m (Feb/Mar), s (May/Jun), w (Oct/Nov), e.g. s,w.
        #[arg(long, default_value = "s,w")]
        sessions: String,

        /// Also download and merge mark schemes.
        #[arg(long)]
        mark_scheme: bool,

        /// Generate topical PDFs from the merged question paper.
        #[arg(long)]
        topical: bool,

        /// Root directory for task workspaces.
        #[arg(long)]
        workspace: Option<PathBuf>,

        /// Archive base URL.
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Print the task report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let registry = KeywordRegistry::builtin();

    match run(cli.command, &registry) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Returns `Ok(false)` when the command ran but ended in failure.
fn run(command: Command, registry: &KeywordRegistry) -> pastpaper::Result<bool> {
    match command {
        Command::Subjects => {
            for (code, slug) in catalog::subjects() {
                let marker = if registry.contains(code) { "topical" } else { "" };
                println!("{:<6}{:<26}{}", code, slug, marker);
            }
            Ok(true)
        },
        Command::Topical {
            input,
            subject,
            output,
            progress_interval,
            json,
        } => {
            let config = JobConfig::new()
                .with_output_dir(output)
                .with_progress_interval(progress_interval);
            let job = ClassificationJob::new(registry, config);
            let result = job.run_file(&input, &subject, &mut LogProgress);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}: {} topical files", result.state, result.outputs.len());
                for output in &result.outputs {
                    println!("  {} ({} pages)", output.path.display(), output.page_count);
                }
                for error in &result.errors {
                    println!("  {}", error);
                }
            }
            Ok(result.state != JobState::Failed)
        },
        Command::Fetch {
            subject,
            paper,
            years,
            sessions,
            mark_scheme,
            topical,
            workspace,
            base_url,
            json,
        } => {
            let (start_year, end_year) = parse_year_range(&years)?;
            let sessions = parse_sessions(&sessions)?;
            let request = PaperRequest::new(subject, paper, start_year, end_year, sessions)
                .with_mark_scheme(mark_scheme)
                .with_topical(topical);

            let mut config = FetchConfig::new().with_base_url(base_url);
            if let Some(workspace) = workspace {
                config = config.with_workspace_root(workspace);
            }

            let task = Task::new(request)?;
            let assembler = PaperAssembler::new(HttpPaperSource::new(&config)?, PdfMerger::new());
            let report = task.run(&assembler, registry, &config, &mut LogProgress);

            if json {
                println!("{}", report.to_json()?);
            } else {
                println!("Task {} {:?} in {}", report.id, report.status, report.directory.display());
                for name in report.files.qp.iter().chain(report.files.ms.iter()) {
                    println!("  {}", name);
                }
                for name in &report.files.topical {
                    println!("  {}", name);
                }
                for error in &report.errors {
                    println!("  {}", error);
                }
            }
            Ok(report.status == TaskStatus::Completed)
        },
    }
}
