use clap::{Parser, Subcommand};
use relay_sdk::RelayClient;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Probe a running CORS relay", long_about = None)]
struct Cli {
    #[arg(short, long, env = "RELAY_URL", default_value = "http://localhost:3001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the relay's own health endpoint
    Health,
    /// Print the relay URL for a backend service path
    Url { path: String },
    /// GET a backend service path through the relay
    Get { path: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RelayClient::new(&cli.url);

    match cli.command {
        Commands::Health => {
            let text = client.health().await?;
            println!("{}", text);
        }
        Commands::Url { path } => {
            println!("{}", client.service_url(&path));
        }
        Commands::Get { path } => {
            let res = client.get(&path).await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
