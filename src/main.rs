use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::warn;

use url_decomposer::api::config::ApiConfig;
use url_decomposer::api::start_server;
use url_decomposer::cli::{apply_edits, render_table, Cli, Command};
use url_decomposer::session::Session;
use url_decomposer::url_parser::parse_url;
use url_decomposer::utils::logger::{init_logger, init_stderr_logger};

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { url, json } => {
            let _ = init_stderr_logger("warn");
            let result = parse_url(&url);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            if let Some(error) = result.error {
                bail!(error);
            }
            if !json {
                print!("{}", render_table(&result.parts));
            }
        }
        Command::Rebuild { url, disable, set } => {
            let _ = init_stderr_logger("warn");
            let mut session = Session::new();
            if !session.analyze(&url) {
                bail!(session.error().unwrap_or("Invalid URL format").to_string());
            }
            for selector in apply_edits(&mut session, &disable, &set) {
                warn!("Selector {} matched no component", selector);
            }
            println!("{}", session.preview());
        }
        Command::Serve { host, port, config } => {
            let mut api_config = ApiConfig::load(config.as_deref())?;
            if let Some(host) = host {
                api_config.host = host;
            }
            if let Some(port) = port {
                api_config.port = port;
            }

            let log_file = init_logger(&api_config.log_dir, &api_config.log_level)
                .context("Failed to initialize logger")?;
            println!("Listening on {}:{} (logging to {})", api_config.host, api_config.port, log_file.display());

            start_server(api_config).await?;
        }
    }

    Ok(())
}
