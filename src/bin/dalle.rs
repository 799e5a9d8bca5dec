//! CLI for dalle-client: generate an image from a text prompt.
//!
//! ```sh
//! cargo run --bin dalle -- "a red apple on a wooden table"
//! ```

use clap::Parser;
use dalle_client::{DalleClient, DEFAULT_OUTPUT_FILENAME};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str =
    "https://ai-image-generation-backend-ixhr.onrender.com/api/v1/dalle";

#[derive(Parser)]
#[command(name = "dalle")]
#[command(about = "Generate an image from a text prompt via a DALL-E backend")]
#[command(version)]
struct Cli {
    /// The text prompt describing the image
    prompt: String,

    /// Backend endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Output file path (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILENAME)]
    output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("Prompt: '{}'", cli.prompt);
    println!("Endpoint: {}", cli.endpoint);

    let client =
        DalleClient::new(&cli.endpoint).with_timeout(Duration::from_secs(cli.timeout));

    match client.generate_to_file(&cli.prompt, &cli.output).await {
        Ok(path) => {
            println!("Success! Image saved as '{}'", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Image generation failed: {err}");
            ExitCode::FAILURE
        }
    }
}
