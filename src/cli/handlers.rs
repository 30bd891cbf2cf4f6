use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::storage::{Storage, default_data_dir};
use crate::model::config::AppConfig;
use crate::model::filter::{FilterSelection, StatusFilter};
use crate::model::task::{Category, Priority, TaskId};
use crate::ops::filter_ops::filter_tasks;
use crate::ops::store::{FilterState, TaskStore};
use crate::ops::{stats, suggest, task_ops};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let storage = Storage::new(
        cli.data_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir),
    );
    let config = config_io::read_config();

    match cli.command {
        // No subcommand → list through the active filters
        None => cmd_list(
            ListArgs {
                category: None,
                priority: None,
                status: None,
                no_filters: false,
            },
            json,
            storage,
        ),
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(args, storage, &config),
            Commands::List(args) => cmd_list(args, json, storage),
            Commands::Toggle(args) => cmd_toggle(args, storage),
            Commands::Edit(args) => cmd_edit(args, storage),
            Commands::Rm(args) => cmd_rm(args, storage),
            Commands::Filter(args) => cmd_filter(args, json, storage),
            Commands::Stats => cmd_stats(json, storage, &config),
            Commands::Suggest => cmd_suggest(json, storage, &config),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a filter axis value where "all" means no narrowing.
fn parse_category_filter(s: &str) -> Result<Option<Category>, String> {
    if s == "all" { Ok(None) } else { s.parse().map(Some) }
}

fn parse_priority_filter(s: &str) -> Result<Option<Priority>, String> {
    if s == "all" { Ok(None) } else { s.parse().map(Some) }
}

/// Overlay ad-hoc axis values onto a base selection.
fn apply_axis_overrides(
    base: FilterSelection,
    category: Option<&str>,
    priority: Option<&str>,
    status: Option<&str>,
) -> Result<FilterSelection, Box<dyn std::error::Error>> {
    let mut selection = base;
    if let Some(s) = category {
        selection.category = parse_category_filter(s)?;
    }
    if let Some(s) = priority {
        selection.priority = parse_priority_filter(s)?;
    }
    if let Some(s) = status {
        selection.status = s.parse::<StatusFilter>()?;
    }
    Ok(selection)
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(
    args: AddArgs,
    storage: Storage,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.text.trim().is_empty() {
        return Err("task text is empty".into());
    }

    let category = match args.category.as_deref() {
        Some(s) => s.parse::<Category>()?,
        None => config.defaults.category,
    };
    let priority = match args.priority.as_deref() {
        Some(s) => s.parse::<Priority>()?,
        None => config.defaults.priority,
    };

    let mut store = TaskStore::open(storage);
    // Blank text was rejected above, so the store always assigns an id
    let id = store
        .add(&args.text, category, priority)?
        .expect("non-blank text");
    println!("{}", id);
    Ok(())
}

fn cmd_toggle(args: IdArg, storage: Storage) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::open(storage);
    let id = TaskId(args.id);
    if store.toggle(id)? {
        let task = task_ops::find_task(store.list(), id).expect("toggled task exists");
        println!("{}", format_task_line(task));
    } else {
        println!("no task with id {}", id);
    }
    Ok(())
}

fn cmd_edit(args: EditArgs, storage: Storage) -> Result<(), Box<dyn std::error::Error>> {
    if args.text.trim().is_empty() {
        return Err("task text is empty".into());
    }

    let mut store = TaskStore::open(storage);
    let id = TaskId(args.id);
    if store.edit(id, &args.text)? {
        let task = task_ops::find_task(store.list(), id).expect("edited task exists");
        println!("{}", format_task_line(task));
    } else {
        println!("no task with id {}", id);
    }
    Ok(())
}

fn cmd_rm(args: RmArgs, storage: Storage) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        print!(
            "delete {} task{}? [y/N] ",
            args.ids.len(),
            if args.ids.len() == 1 { "" } else { "s" }
        );
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        if !matches!(line.trim(), "y" | "Y" | "yes") {
            println!("aborted");
            return Ok(());
        }
    }

    let mut store = TaskStore::open(storage);
    for raw_id in &args.ids {
        let id = TaskId(*raw_id);
        if store.remove(id)? {
            println!("deleted {}", id);
        } else {
            println!("no task with id {}", id);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(
    args: ListArgs,
    json: bool,
    storage: Storage,
) -> Result<(), Box<dyn std::error::Error>> {
    let filters = FilterState::load(storage.clone());
    let base = if args.no_filters {
        FilterSelection::default()
    } else {
        *filters.current()
    };
    // Ad-hoc flags narrow this listing only; the persisted selection is
    // untouched (that's what `filter` is for).
    let selection = apply_axis_overrides(
        base,
        args.category.as_deref(),
        args.priority.as_deref(),
        args.status.as_deref(),
    )?;

    let store = TaskStore::open(storage);
    let visible = filter_tasks(store.list(), &selection);

    if json {
        let items: Vec<TaskJson> = visible.iter().map(|t| task_to_json(t)).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if visible.is_empty() {
        println!("No tasks found.");
    } else {
        for line in format_task_lines(&visible, Utc::now()) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_filter(
    args: FilterArgs,
    json: bool,
    storage: Storage,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut filters = FilterState::load(storage);

    if args.clear {
        filters.clear()?;
    } else if args.category.is_some() || args.priority.is_some() || args.status.is_some() {
        // Unspecified axes keep their persisted value, as the original
        // filter controls did.
        let selection = apply_axis_overrides(
            *filters.current(),
            args.category.as_deref(),
            args.priority.as_deref(),
            args.status.as_deref(),
        )?;
        filters.apply(selection)?;
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&filters_to_json(filters.current()))?
        );
    } else {
        for line in format_filters(filters.current()) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_stats(
    json: bool,
    storage: Storage,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open(storage);
    let stats = stats::compute(store.list());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for line in format_stats(&stats) {
            println!("{}", line);
        }
        println!();
        println!(
            "{}",
            suggest::suggest(store.list(), Utc::now(), config.suggest.stale_days)
        );
    }
    Ok(())
}

fn cmd_suggest(
    json: bool,
    storage: Storage,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open(storage);
    let suggestion = suggest::suggest(store.list(), Utc::now(), config.suggest.stale_days);

    if json {
        let output = SuggestionJson {
            message: suggestion.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", suggestion);
    }
    Ok(())
}
