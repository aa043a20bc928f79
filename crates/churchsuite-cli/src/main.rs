//! ChurchSuite CLI - quick access to a ChurchSuite account from the terminal.
//!
//! Reads credentials from the environment (or a `.env` file), runs one
//! command and prints the JSON the API returned.

mod config;

use std::io;

use anyhow::{bail, Context, Result};
use churchsuite_core::{create_client, AnyClient, ContactsQuery, Envelope, EventsQuery, OAuthClient, TokenOutcome};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "usage: churchsuite <whoami | contacts [name] | events | authorize-url | token <code> | my-details>";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!(USAGE);
    };

    let options = config::load_options()?;
    let client = create_client(&options).context("Failed to create ChurchSuite client")?;
    info!(account = %options.account, command = %command, "Running command");

    match command.as_str() {
        "whoami" => print(client.client().account().user().await?),
        "contacts" => {
            let query = ContactsQuery {
                name: args.get(1).cloned(),
                ..Default::default()
            };
            print(client.client().address_book().contacts().list(&query).await?)
        }
        "events" => print(
            client
                .client()
                .calendar()
                .events()
                .list(&EventsQuery::default())
                .await?,
        ),
        "authorize-url" => {
            println!("{}", oauth(&client)?.oauth2().authorization_url());
            Ok(())
        }
        "token" => {
            let code = args.get(1).map(String::as_str);
            match oauth(&client)?.oauth2().create_token(code).await? {
                TokenOutcome::Token(token) => {
                    println!("{}", token);
                    Ok(())
                }
                TokenOutcome::Failed(envelope) => {
                    bail!("Token exchange failed ({}): {}", envelope.status, envelope.raw.body)
                }
            }
        }
        "my-details" => print(oauth(&client)?.my().details().await?),
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }
}

fn oauth(client: &AnyClient) -> Result<&OAuthClient> {
    client
        .as_oauth()
        .context("OAuth2 is not configured; set CHURCHSUITE_CLIENT_ID, CHURCHSUITE_CLIENT_SECRET and CHURCHSUITE_REDIRECT_URI")
}

/// Print the response body as pretty JSON, failing on non-2xx statuses.
fn print<T>(envelope: Envelope<T>) -> Result<()> {
    let body: Value = envelope.raw.json().context("Failed to parse response body")?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    if !envelope.is_success() {
        bail!("ChurchSuite returned {} {}", envelope.status.as_u16(), envelope.status_text);
    }
    Ok(())
}
