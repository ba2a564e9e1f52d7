//! Sorta CLI
//!
//! Command-line interface for waitlist operations:
//! - Add signups
//! - List entries and counts
//! - Export CSV
//! - Clear the store

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use sorta::admin::{AdminPanel, ConfirmPrompt, EMPTY_MESSAGE};
use sorta::config::Config;
use sorta::form::{HttpDelivery, SignupDelivery};
use sorta::store::SignupStore;

#[derive(Parser)]
#[command(name = "sorta")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Waitlist management for the Sorta landing page")]
#[command(
    long_about = "Sorta keeps a local waitlist of signup emails.\nAdd entries, inspect counts, export CSV, and clear the list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (status command)
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an email to the waitlist
    Join {
        /// Email address
        email: String,
    },

    /// List signups, newest first
    List {
        /// Maximum entries to show (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,
    },

    /// Show waitlist counts
    Stats,

    /// Check the proxy server
    Status,

    /// Export the waitlist as CSV
    Export {
        /// Output file (default: dated file in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear all signups
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load_default();

    match cli.command {
        Commands::Join { email } => {
            let store = open_store(&config);
            let added = store.add(&email)?;

            // The local record is the outcome; a failed forward to the
            // proxy is only a diagnostic.
            let delivery = HttpDelivery::new(cli.api_url.clone());
            if let Err(e) = delivery.deliver(&email).await {
                eprintln!("warning: proxy delivery failed: {}", e);
            }

            if added {
                println!("Added {} to the waitlist", email);
            } else {
                println!("{} is already on the waitlist", email);
            }
        }

        Commands::List { limit } => {
            let store = Arc::new(open_store(&config));
            let panel = AdminPanel::new(Arc::clone(&store), &config.store.export_dir);
            let view = panel.view()?;

            if view.entries.is_empty() {
                println!("{}", EMPTY_MESSAGE);
                println!();
                println!("Add the first one with:");
                println!("  sorta-cli join you@example.com");
            } else {
                let shown = if limit == 0 {
                    view.entries.len()
                } else {
                    limit.min(view.entries.len())
                };

                println!("{:<32} {}", "Email", "Signed up");
                println!("{}", "-".repeat(48));

                for entry in view.entries.iter().take(shown) {
                    println!("{:<32} {}", entry.email, entry.date_label);
                }

                if shown < view.total {
                    println!();
                    println!("({} of {} shown)", shown, view.total);
                }
            }
        }

        Commands::Stats => {
            let store = open_store(&config);
            println!("Total signups: {}", store.count()?);
            println!("Today:         {}", store.today_count()?);
        }

        Commands::Status => {
            let client = reqwest::Client::new();
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Sorta v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Upstream:   {}",
                        health["upstream"].as_str().unwrap_or("unknown")
                    );

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime:     {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to the Sorta API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the API server is running:");
                    eprintln!("  cargo run --bin sorta-api");
                    std::process::exit(1);
                }
            }
        }

        Commands::Export { output } => {
            let store = Arc::new(open_store(&config));

            match output {
                Some(path) => {
                    let csv = store.to_csv()?;
                    if csv.is_empty() {
                        println!("No signups to export");
                    } else {
                        if let Some(parent) = path.parent() {
                            std::fs::create_dir_all(parent)?;
                        }
                        std::fs::write(&path, &csv)?;
                        println!("Exported {} signups to {:?}", store.count()?, path);
                    }
                }
                None => {
                    let panel = AdminPanel::new(Arc::clone(&store), &config.store.export_dir);
                    match panel.export_csv()? {
                        Some(path) => println!("Exported to {:?}", path),
                        None => println!("No signups to export"),
                    }
                }
            }
        }

        Commands::Clear { yes } => {
            let store = Arc::new(open_store(&config));
            let panel = AdminPanel::new(Arc::clone(&store), &config.store.export_dir);

            let cleared = if yes {
                panel.clear_all(&AutoConfirm)?
            } else {
                panel.clear_all(&StdinConfirm)?
            };

            if cleared {
                println!("Waitlist cleared");
            } else {
                println!("Aborted");
            }
        }

        Commands::Config { output } => {
            let rendered = sorta::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &rendered)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", rendered);
                }
            }
        }
    }

    Ok(())
}

/// Accepts without prompting, for --yes runs
struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Asks on stdin and accepts only an explicit yes
struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }

        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn open_store(config: &Config) -> SignupStore {
    SignupStore::open_json(&config.store.data_dir)
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
