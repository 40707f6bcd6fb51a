use clap::{Parser, Subcommand};
use serde::Serialize;

use proverb_service::client::ProverbClient;

#[derive(Parser)]
#[command(name = "proverb-cli")]
#[command(about = "Command-line client for the proverb service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all proverbs
    List,
    /// Show one proverb
    Get { id: u64 },
    /// Add a proverb
    Add { text: String },
    /// Replace the text of a proverb
    Update { id: u64, text: String },
    /// Delete a proverb
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ProverbClient::new(&cli.url);

    match cli.command {
        Commands::List => print_json(&client.list().await?)?,
        Commands::Get { id } => print_json(&client.get(id).await?)?,
        Commands::Add { text } => print_json(&client.create(&text).await?)?,
        Commands::Update { id, text } => print_json(&client.update(id, &text).await?)?,
        Commands::Delete { id } => {
            client.delete(id).await?;
            println!("Deleted proverb {}", id);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
