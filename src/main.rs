use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use leftover_cli::cli::{handle_report_command, ReportArgs, Session};
use leftover_cli::config::{LeftoverPaths, Settings};
use leftover_cli::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "leftover",
    version,
    about = "Terminal budgeting: see what is left until pay day",
    long_about = "leftover tracks one month's incomes, fixed expenses and variable \
                  expenses, and shows how much is left to spend per day until the \
                  next pay day. Budgets are saved and loaded as CSV."
)]
struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive budgeting session
    #[command(alias = "repl")]
    Session {
        /// Budget CSV to load before the first prompt
        #[arg(short, long)]
        import: Option<PathBuf>,

        /// Also load variable expense rows
        #[arg(long)]
        with_variable: bool,
    },

    /// Print the tables and dashboard for a budget CSV
    Report(ReportArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = LeftoverPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Session {
        import: None,
        with_variable: false,
    }) {
        Commands::Session {
            import,
            with_variable,
        } => {
            let mut session = Session::new(&settings);
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut out = stdout.lock();

            if let Some(path) = import.as_deref() {
                session.import_file(Some(path), with_variable, &mut out)?;
            }
            session.run(stdin.lock(), &mut out)?;
        }
        Commands::Report(args) => handle_report_command(&settings, args)?,
        Commands::Init => {
            println!("Initializing leftover at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("leftover Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Days mode:         {}", settings.days_mode);
            println!("  Default threshold: {}", settings.money(settings.default_threshold));
            println!("  Export file:       {}", settings.export_file_name);
            println!("  Import variable:   {}", settings.import_variable_rows);
        }
    }

    Ok(())
}
