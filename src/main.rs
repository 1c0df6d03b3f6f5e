use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{handle_budget_command, handle_expense_command, handle_report_command};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::format_category_list;
use expense_tracker::services::ExpenseStore;
use expense_tracker::storage::initialize_storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track expenses against monthly budgets",
    long_about = "Expense Tracker records dated, categorized expenses, keeps an \
                  overall monthly budget and per-category budgets, and warns you \
                  as spending approaches or exceeds them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(expense_tracker::cli::ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(expense_tracker::cli::BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(expense_tracker::cli::ReportCommands),

    /// List categories in use and suggested categories
    Categories,

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let store = ExpenseStore::open(&paths)?;
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Categories) => {
            let store = ExpenseStore::open(&paths)?;
            print!(
                "{}",
                format_category_list(&store.categories(), &settings.default_categories)
            );
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Suggested categories: {}", settings.default_categories.join(", "));
            println!();
            println!("Run 'expense-tracker expense add <AMOUNT> <CATEGORY> <DESCRIPTION>' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.ledger_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Chart width:     {}", settings.chart_width);
        }
        None => {
            println!("Expense Tracker - monthly expenses and budgets");
            println!();
            println!("Run 'expense-tracker --help' for usage information.");
        }
    }

    Ok(())
}
