//! Smoke test for the sentiment endpoint.
//!
//! Builds a client from the environment (`HF_TOKEN`, optional
//! `SENTIMENT_ENDPOINT`), classifies the text given on the command line and
//! prints the result.
//!
//! ```bash
//! export HF_TOKEN="hf_..."
//! cargo run --bin sentiment-check -- "Quarterly revenue beat expectations"
//! ```

use sentiment_client::observability::LoggingConfig;
use sentiment_client::SentimentClient;

const DEFAULT_TEXT: &str = "The new product launch was a huge success.";

#[tokio::main]
async fn main() {
    if let Err(e) = LoggingConfig::from_env().init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        DEFAULT_TEXT.to_string()
    } else {
        args.join(" ")
    };

    println!("Testing the sentiment model API...");
    println!("  Text: {text}");

    let client = match SentimentClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {e}");
            std::process::exit(1);
        }
    };
    println!("  Endpoint: {}", client.config().endpoint);

    match client.classify(&text).await {
        Ok(result) => {
            println!("Test successful!");
            println!("  Label: {}", result.label);
            println!("  Score: {:.4}", result.score);
        }
        Err(e) => {
            eprintln!("Test failed ({:?}): {e}", e.kind());
            eprintln!("Check HF_TOKEN and the endpoint configuration.");
            std::process::exit(1);
        }
    }
}
