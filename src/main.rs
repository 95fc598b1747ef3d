use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use credit_kiosk::cli::{
    handle_balance, handle_history, handle_redeem, handle_send, handle_store,
};
use credit_kiosk::config::{KioskConfig, KioskPaths};
use credit_kiosk::ledger::{Directory, Ledger};
use credit_kiosk::session::Session;
use credit_kiosk::storage::{JsonFileSink, LedgerSnapshot, PersistenceSink};

#[derive(Parser)]
#[command(
    name = "kiosk",
    version,
    about = "Two-user credit account kiosk",
    long_about = "A small credit-account kiosk: sign in with a 4-digit access \
                  code, check your balance, send credits to the other account, \
                  and redeem credits for store items."
)]
struct Cli {
    /// 4-digit access code used to sign in
    #[arg(long, global = true, env = "KIOSK_CODE")]
    code: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the store items and their prices
    Store,

    /// Show the balances visible to your account
    Balance,

    /// Send credits to the other account
    Send {
        /// Number of credits to send
        amount: u64,
        /// Recipient account id (defaults to the other account)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Redeem a store item
    Redeem {
        /// Exact item name, e.g. "One hole"
        item: String,
    },

    /// Show your account's history
    History,

    /// Write the default configuration and initial state
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = KioskPaths::new()?;
    let config = KioskConfig::load_or_default(&paths)?;
    let directory = Directory::new(config.accounts.clone())?;
    let catalog = config.catalog()?;
    let snapshot = LedgerSnapshot::load_or_default(&paths, &directory);

    let mut ledger = Ledger::new(
        directory,
        catalog,
        snapshot,
        Box::new(JsonFileSink::new(paths.clone())),
    )?;

    match cli.command {
        Some(Commands::Store) => {
            handle_store(ledger.catalog());
        }
        Some(Commands::Balance) => {
            let session = sign_in(&cli, &ledger)?;
            handle_balance(&session, &ledger)?;
        }
        Some(Commands::Send { amount, ref to }) => {
            let session = sign_in(&cli, &ledger)?;
            handle_send(&session, &mut ledger, to.as_deref(), amount)?;
        }
        Some(Commands::Redeem { ref item }) => {
            let session = sign_in(&cli, &ledger)?;
            handle_redeem(&session, &mut ledger, item)?;
        }
        Some(Commands::History) => {
            let session = sign_in(&cli, &ledger)?;
            handle_history(&session, &ledger);
        }
        Some(Commands::Init) => {
            println!("Initializing kiosk at: {}", paths.base_dir().display());
            config.save(&paths)?;

            let initial = LedgerSnapshot::load_or_default(&paths, ledger.directory());
            JsonFileSink::new(paths.clone()).persist(&initial)?;

            println!("Initialization complete!");
            println!();
            println!("Accounts:");
            for profile in ledger.directory().iter() {
                println!("  - {} (initial balance: {})", profile, profile.initial_balance);
            }
            println!();
            println!("Run 'kiosk store' to see the redeemable items.");
        }
        Some(Commands::Config) => {
            println!("Credit Kiosk Configuration");
            println!("==========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("State directory: {}", paths.state_dir().display());
            println!();
            println!("Accounts: {}", ledger.directory().len());
            println!("Store items: {}", ledger.catalog().list().len());
        }
        None => {
            println!("Credit Kiosk - two-user credit account simulation");
            println!();
            println!("Run 'kiosk --help' for usage information.");
            println!("Run 'kiosk --code <CODE> balance' to sign in and check your balance.");
        }
    }

    Ok(())
}

fn sign_in(cli: &Cli, ledger: &Ledger) -> Result<Session> {
    let code = cli.code.as_deref().ok_or_else(|| {
        anyhow::anyhow!("an access code is required: pass --code or set KIOSK_CODE")
    })?;

    Ok(Session::sign_in(ledger.directory(), code)?)
}
