use anyhow::Result;
use clap::{Parser, Subcommand};
use snip::config::Config;
use snip::storage;

#[derive(Parser)]
#[command(name = "snip-admin")]
#[command(about = "snip database management CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the urls table if it does not exist
    Init,
    /// List short links, newest first
    List {
        /// Maximum number of links to print
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Show a single short link
    Show {
        /// Short code to look up
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let storage = storage::connect(&config.database).await?;

    // Ensure database is initialized
    storage.init().await?;

    match cli.command {
        Commands::Init => {
            println!("✓ Database table created successfully");
        }
        Commands::List { limit } => {
            let mappings = storage.list(limit, 0).await?;
            if mappings.is_empty() {
                println!("No short links found.");
            } else {
                println!("{:<8} {:>8} {:<26} {}", "Code", "Clicks", "Created", "URL");
                println!("{}", "-".repeat(80));
                for m in mappings {
                    println!(
                        "{:<8} {:>8} {:<26} {}",
                        m.short_code,
                        m.clicks,
                        m.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                        m.original_url
                    );
                }
            }
        }
        Commands::Show { code } => match storage.get(&code).await? {
            Some(m) => {
                println!("Code:     {}", m.short_code);
                println!("URL:      {}", m.original_url);
                println!("Short:    {}", m.short_url(&config.base_url));
                println!("Clicks:   {}", m.clicks);
                println!("Created:  {}", m.created_at.to_rfc3339());
            }
            None => {
                println!("⚠ Short code '{}' not found", code);
            }
        },
    }

    Ok(())
}
