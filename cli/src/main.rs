mod repl;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use taskbot_core::repository::file::DEFAULT_FILE_NAME;
use taskbot_core::{FileTaskStorage, Session, TaskDto, TaskStorage};

const BOT_NAME: &str = "Bot";

#[derive(Parser)]
#[command(name = "taskbot")]
#[command(about = "A single-user task tracker backed by a plain text file", long_about = None)]
struct Cli {
    /// Directory holding the task file (default: ~/.taskbot)
    #[arg(long, env = "TASKBOT_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Name of the task file inside the data directory
    #[arg(long, default_value = DEFAULT_FILE_NAME, global = true)]
    file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Read instructions line by line until `bye` (default)
    Repl,
    /// Run one instruction and print the response (usage: exec deadline report /by 23-09-2025 2359)
    Exec {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
    /// Print the stored tasks
    List {
        /// Print as JSON instead of the numbered listing
        #[arg(long)]
        json: bool,
    },
    /// Open the terminal chat window
    Tui,
}

fn report_load_error<S: TaskStorage>(session: &Session<S>) {
    if let Some(err) = session.load_error() {
        eprintln!("{}", err);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let storage = FileTaskStorage::with_file_name(cli.data_dir, &cli.file)?;
    log::debug!("using task file {}", storage.path().display());
    let mut session = Session::open(storage);

    match cli.command {
        Some(Commands::Exec { args }) => {
            report_load_error(&session);
            let response = session.handle(&args.join(" "));
            println!("{}", response.message.trim_end());
        }
        Some(Commands::List { json }) => {
            report_load_error(&session);
            if json {
                let dtos = TaskDto::from_tasks(session.tasks().tasks());
                println!("{}", serde_json::to_string_pretty(&dtos)?);
            } else {
                println!("{}", session.handle("list").message.trim_end());
            }
        }
        Some(Commands::Tui) => {
            tui::run(session)?;
        }
        Some(Commands::Repl) | None => {
            repl::run(&mut session, BOT_NAME)?;
        }
    }
    Ok(())
}
