use std::path::Path;

use crate::cli::commands::{AddArgs, Cli, Commands, ImportArgs, ListArgs};
use crate::import;
use crate::model::Task;
use crate::store::{DB_FILE_NAME, TaskStore, paths};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store = open_store(cli.data_dir.as_deref())?;

    match cli.command {
        // No subcommand launches the TUI; main.rs handles that branch
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(&store, args, json),
            Commands::Add(args) => cmd_add(&store, args, json),
            Commands::Import(args) => cmd_import(&store, args, json),
        },
    }
}

/// Open the task store under the effective data directory.
pub fn open_store(data_dir: Option<&Path>) -> Result<TaskStore, Box<dyn std::error::Error>> {
    let dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => paths::data_dir().ok_or("could not determine a data directory")?,
    };
    Ok(TaskStore::open(&dir.join(DB_FILE_NAME))?)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(
    store: &TaskStore,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = if args.trash {
        store.list_trashed()?
    } else {
        store.list_active()?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("{}", if args.trash { "trash is empty" } else { "no tasks" });
        return Ok(());
    }
    for task in &tasks {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

fn cmd_add(
    store: &TaskStore,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let description = args.description.join(" ");
    let id = store.add(&description)?;
    if json {
        println!("{}", serde_json::json!({ "id": id }));
    } else {
        println!("added task {}", id);
    }
    Ok(())
}

fn cmd_import(
    store: &TaskStore,
    args: ImportArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let count = import::import_file(store, &args.file)?;
    if json {
        println!("{}", serde_json::json!({ "imported": count }));
    } else {
        println!("imported {} task(s)", count);
    }
    Ok(())
}

fn format_task_line(task: &Task) -> String {
    format!("{:>4}  [{}] {}", task.id, task.checkbox_char(), task.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_line_formats_checkbox_and_id() {
        let task = Task {
            id: 7,
            description: "Buy milk".into(),
            completed: true,
            deleted: false,
        };
        assert_eq!(format_task_line(&task), "   7  [x] Buy milk");
    }
}
