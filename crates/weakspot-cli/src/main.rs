//! weakspot - 苦手問題の復習キュー
//!
//! Usage:
//!   weakspot --data tasks.json queue                   # 今日のクエスト
//!   weakspot --data tasks.json review <ID> easy        # 復習結果を記録
//!   weakspot --data tasks.json register --name "4(2)" --image img/4-2.jpg --score 3
//!   weakspot --data tasks.json summary                 # 克服率

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use weakspot_core::impls::{InMemoryTaskStore, TaskRow, format_review_date};
use weakspot_core::ports::{Clock, FixedClock};
use weakspot_core::{Outcome, ReviewService, TaskId, TaskSnapshot, WeakspotConfig};

#[derive(Parser)]
#[command(name = "weakspot", version, about = "Spaced-repetition queue for missed math problems")]
struct Cli {
    /// JSON file holding the task rows (created on first write)
    #[arg(long, default_value = "weakspot-tasks.json")]
    data: PathBuf,

    /// TOML config file (defaults are used when it does not exist)
    #[arg(long, default_value = "weakspot.toml")]
    config: PathBuf,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's queue, highest priority first
    Queue {
        /// Overrides `min_score` from the config
        #[arg(long)]
        min_score: Option<u32>,
    },

    /// Record the outcome of one review (easy / soso / fail)
    Review { task_id: TaskId, outcome: Outcome },

    /// Register a new problem
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        image: String,
        #[arg(long, default_value = "0")]
        score: u32,
    },

    /// Show counts per stage and the mastery rate
    Summary,
}

fn load_tasks(path: &Path, current_year: i32) -> Result<Vec<TaskSnapshot>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let rows: Vec<TaskRow> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(rows.into_iter().map(|row| row.into_snapshot(current_year)).collect())
}

async fn save_tasks(path: &Path, store: &InMemoryTaskStore) -> Result<()> {
    let rows: Vec<TaskRow> = store.snapshot().await.into_iter().map(TaskRow::from).collect();
    let content = serde_json::to_string_pretty(&rows)?;
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn print_task(rank: usize, task: &TaskSnapshot) {
    let last = task
        .last_reviewed
        .map(format_review_date)
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{rank:>3}. [{}] {}  score={}  {}  last={}  ({})",
        task.id,
        task.question_name,
        task.priority_score,
        task.current_stage(),
        last,
        task.image_url,
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "weakspot_core=debug,weakspot_cli=debug"
    } else {
        "weakspot_core=info,weakspot_cli=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = WeakspotConfig::load_from(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;

    let clock: Arc<dyn Clock> = match cli.today {
        Some(day) => Arc::new(FixedClock(day)),
        None => Arc::new(config.clock()?),
    };
    let today = clock.today();

    let tasks = load_tasks(&cli.data, today.year())?;
    tracing::debug!(count = tasks.len(), path = %cli.data.display(), "loaded tasks");

    let store = InMemoryTaskStore::with_tasks(tasks);
    let service = ReviewService::new(Arc::new(store.clone()), clock);

    match cli.command {
        Command::Queue { min_score } => {
            let min_score = min_score.unwrap_or(config.min_score);
            let queue = service.todays_queue(min_score).await?;
            println!("today's quest ({today}, min score {min_score}): {} task(s)", queue.len());
            for (i, task) in queue.iter().enumerate() {
                print_task(i + 1, task);
            }
        }
        Command::Review { task_id, outcome } => {
            let submission = service.submit(task_id, outcome).await?;
            save_tasks(&cli.data, &store).await?;
            println!(
                "{}: {} -> {} (last reviewed {})",
                submission.task.question_name,
                submission.previous_stage,
                submission.result.next_stage,
                format_review_date(submission.result.next_last_reviewed),
            );
        }
        Command::Register { name, image, score } => {
            let task = service.register(&name, &image, score).await?;
            save_tasks(&cli.data, &store).await?;
            println!("registered {} ({}); it joins the queue from now on", task.question_name, task.id);
        }
        Command::Summary => {
            let progress = service.progress().await?;
            println!(
                "stage 1: {}  stage 2: {}  stage 3: {}  graduated: {}",
                progress.stage1, progress.stage2, progress.stage3, progress.graduated
            );
            println!(
                "mastery: {:.0}% ({}/{})",
                progress.mastery_rate() * 100.0,
                progress.graduated,
                progress.total()
            );
        }
    }

    Ok(())
}
