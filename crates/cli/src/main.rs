use clap::{Parser, Subcommand};
use stubzone_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "stubzone")]
#[command(version)]
#[command(about = "Stubzone - minimal authoritative DNS responder for local zones")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the DNS server
    Serve {
        /// Address to listen on
        #[arg(short = 'a', long)]
        address: Option<String>,

        /// Port to listen on
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Path to the records file
        #[arg(short = 's', long, value_name = "FILE")]
        storage: Option<String>,

        /// Use the unprivileged port 5353 instead of 53
        #[arg(long)]
        insecure: bool,
    },

    /// Add or replace a record
    Add {
        /// Domain name
        #[arg(short = 'd', long)]
        domain: String,

        /// Record type (A or CNAME)
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: String,

        /// IP address for A, target domain for CNAME
        #[arg(long)]
        value: String,

        /// Time to live in seconds
        #[arg(long, default_value_t = 3600)]
        ttl: u32,

        /// Path to the records file
        #[arg(short = 's', long, value_name = "FILE")]
        storage: Option<String>,
    },

    /// Remove a record
    Remove {
        /// Domain name
        #[arg(short = 'd', long)]
        domain: String,

        /// Path to the records file
        #[arg(short = 's', long, value_name = "FILE")]
        storage: Option<String>,
    },

    /// List all records
    List {
        /// Path to the records file
        #[arg(short = 's', long, value_name = "FILE")]
        storage: Option<String>,
    },

    /// Show a single record
    Get {
        /// Domain name
        #[arg(short = 'd', long)]
        domain: String,

        /// Path to the records file
        #[arg(short = 's', long, value_name = "FILE")]
        storage: Option<String>,
    },
}

impl Command {
    fn overrides(&self, log_level: Option<String>) -> CliOverrides {
        let mut overrides = CliOverrides {
            log_level,
            ..Default::default()
        };

        match self {
            Command::Serve {
                address,
                port,
                storage,
                ..
            } => {
                overrides.bind_address = address.clone();
                overrides.port = *port;
                overrides.storage_path = storage.clone();
            }
            Command::Add { storage, .. }
            | Command::Remove { storage, .. }
            | Command::List { storage }
            | Command::Get { storage, .. } => {
                overrides.storage_path = storage.clone();
            }
        }

        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = cli.command.overrides(cli.log_level.clone());
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;

    bootstrap::init_logging(&config);

    match cli.command {
        Command::Serve { insecure, .. } => {
            info!("Starting Stubzone v{}", env!("CARGO_PKG_VERSION"));
            commands::serve(config, insecure).await
        }
        Command::Add {
            domain,
            record_type,
            value,
            ttl,
            ..
        } => {
            let services = di::RecordServices::open(&config)?;
            commands::add(&services, &domain, &record_type, &value, ttl).await
        }
        Command::Remove { domain, .. } => {
            let services = di::RecordServices::open(&config)?;
            commands::remove(&services, &domain).await
        }
        Command::List { .. } => {
            let services = di::RecordServices::open(&config)?;
            commands::list(&services).await
        }
        Command::Get { domain, .. } => {
            let services = di::RecordServices::open(&config)?;
            commands::get(&services, &domain).await
        }
    }
}
