//! Faucet Request CLI.
//!
//! Submits one mint request to the faucet service.
//!
//! Usage:
//!   cargo run --bin faucet-request -- --asset lunc --receiver terra1... [--api-url URL]
//!
//! The base URL is taken from `--api-url` or the `FAUCET_API_URL`
//! environment variable.

use std::env;

use terra_faucet::{FaucetConfig, MintForm};

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    let mut asset = String::new();
    let mut receiver = String::new();
    let mut api_url = String::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--asset" => {
                if i + 1 < args.len() {
                    asset = args[i + 1].clone();
                    i += 1;
                }
            }
            "--receiver" => {
                if i + 1 < args.len() {
                    receiver = args[i + 1].clone();
                    i += 1;
                }
            }
            "--api-url" => {
                if i + 1 < args.len() {
                    api_url = args[i + 1].clone();
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if asset.is_empty() || receiver.is_empty() {
        eprintln!("Usage: faucet-request --asset <lunc|juris> --receiver <terra1...> [--api-url <URL>]");
        std::process::exit(1);
    }

    let config = if api_url.is_empty() {
        match FaucetConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else {
        FaucetConfig::new(&api_url)
    };

    println!("Faucet: {}", config.api_url);
    println!("Requesting {} for {}...", asset, receiver);

    let form = MintForm::new(config);
    match form.submit(&asset, &receiver).await {
        Some(outcome) => {
            println!("{}", outcome.status_line());
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
        None => {
            eprintln!("A request is already in flight.");
            std::process::exit(1);
        }
    }
}
