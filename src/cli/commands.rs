use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo", about = concat!("[x] smart-todo v", env!("CARGO_PKG_VERSION"), " - tasks with categories, priorities, and suggestions"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// List tasks through the active filters
    List(ListArgs),
    /// Toggle a task's completion
    Toggle(IdArg),
    /// Change a task's text
    Edit(EditArgs),
    /// Delete tasks
    Rm(RmArgs),
    /// Show, apply, or clear the persisted filters
    Filter(FilterArgs),
    /// Show task statistics
    Stats,
    /// Show the current suggestion
    Suggest,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Category (work, personal, shopping, health, education, none)
    #[arg(long)]
    pub category: Option<String>,
    /// Priority (high, medium, low, none)
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    pub id: u64,
    /// New task text
    pub text: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task ids to delete
    #[arg(required = true)]
    pub ids: Vec<u64>,
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Override the category filter for this listing (or "all")
    #[arg(long)]
    pub category: Option<String>,
    /// Override the priority filter for this listing (or "all")
    #[arg(long)]
    pub priority: Option<String>,
    /// Override the status filter for this listing (all, active, completed)
    #[arg(long)]
    pub status: Option<String>,
    /// Ignore the persisted filters entirely
    #[arg(long)]
    pub no_filters: bool,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Set the category filter (work, personal, ..., or "all")
    #[arg(long)]
    pub category: Option<String>,
    /// Set the priority filter (high, medium, low, none, or "all")
    #[arg(long)]
    pub priority: Option<String>,
    /// Set the status filter (all, active, completed)
    #[arg(long)]
    pub status: Option<String>,
    /// Reset all filters to "all"
    #[arg(long)]
    pub clear: bool,
}
