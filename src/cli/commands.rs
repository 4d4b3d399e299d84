use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ordo", about = concat!("[*] ordo v", env!("CARGO_PKG_VERSION"), " - tasks in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory (default: the platform data dir)
    #[arg(short = 'D', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    List(ListArgs),
    /// Add a task
    Add(AddArgs),
    /// Import tasks from a .txt or .json file
    Import(ImportArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// List the trash instead of active tasks
    #[arg(long)]
    pub trash: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub description: Vec<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// File to import (.txt: one task per line; .json: {"tasks": [...]})
    pub file: PathBuf,
}
