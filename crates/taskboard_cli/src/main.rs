//! Taskboard interactive shell.
//!
//! # Responsibility
//! - Parse process arguments and optionally start core logging.
//! - Wire one in-memory task service into the line shell on stdin/stdout.

mod command;
mod shell;

use anyhow::Context;
use clap::Parser;
use shell::Shell;
use std::io;
use taskboard_core::{
    core_version, default_log_level, init_logging, SequentialTaskIdGenerator, TaskAccess,
    TaskService, TaskStore,
};

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "In-memory task tracker shell")]
struct Args {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rotating log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,

    /// Issue counter-based task ids instead of random ones.
    #[arg(long)]
    sequential_ids: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        init_logging(&args.log_level, log_dir).context("failed to initialize logging")?;
    }
    log::info!(
        "event=cli_start module=cli status=ok version={} sequential_ids={}",
        core_version(),
        args.sequential_ids
    );

    if args.sequential_ids {
        let store = TaskStore::with_generator(SequentialTaskIdGenerator::new());
        run_shell(TaskService::with_store(store))
    } else {
        run_shell(TaskService::new())
    }
}

fn run_shell(access: impl TaskAccess) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(access, stdin.lock(), stdout.lock());
    shell.run().context("shell i/o failed")?;
    Ok(())
}
