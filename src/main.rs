use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::app::BudgetApp;
use budget_tracker::cli::{
    handle_add, handle_category_command, handle_list, handle_remove, handle_summary, AddArgs,
    CategoryCommands, ListArgs, RemoveArgs,
};
use budget_tracker::config::paths::DATA_DIR_ENV;
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::logging;
use budget_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Track income and expense items by category and keep an eye on \
                  what remains of this month's budget, from the command line or \
                  an interactive terminal page."
)]
struct Cli {
    /// Directory holding config.json and the data/ folder
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Add an income or expense item
    Add(AddArgs),

    /// Remove an item by ID or by its row in the list
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// List items, optionally for one category
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show income, expenses and what remains
    Summary,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Create the data directory and default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Init) => {
            println!("Initializing budget tracker at: {}", paths.base_dir().display());
            let storage = Storage::open(&paths)?;
            let created = storage.categories().ensure_defaults()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if created {
                let categories = storage.categories().get();
                println!();
                println!(
                    "Default categories have been created ({} expense, {} income).",
                    categories.expenses.len(),
                    categories.incomes.len()
                );
            }
            println!();
            println!("Run 'budget category list' to see all categories.");
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency suffix:   {}", settings.currency_suffix);
            println!("  Notification time: {}s", settings.notification_secs);
            println!("  Show-all label:    {}", settings.show_all_label);
            return Ok(());
        }
        None => {
            println!("Budget tracker - personal income and expense tracking");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget tui' to launch the interactive interface.");
            return Ok(());
        }
        Some(command) => command,
    };

    let storage = Storage::open(&paths)?;
    let mut app = BudgetApp::start(storage, settings)?;

    match command {
        Commands::Tui => budget_tracker::tui::run_tui(app)?,
        Commands::Add(args) => handle_add(&mut app, args)?,
        Commands::Remove(args) => handle_remove(&mut app, args)?,
        Commands::List(args) => handle_list(&mut app, args)?,
        Commands::Summary => handle_summary(&app)?,
        Commands::Category(cmd) => handle_category_command(&mut app, cmd)?,
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}
