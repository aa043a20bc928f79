//! Environment-driven configuration for the CLI.
//!
//! Values come from the process environment, after `.env` has been loaded.

use anyhow::{Context, Result};
use churchsuite_core::{ClientOptions, OAuth2Options};

const ENV_ACCOUNT: &str = "CHURCHSUITE_ACCOUNT";
const ENV_APPLICATION: &str = "CHURCHSUITE_APPLICATION";
const ENV_AUTH: &str = "CHURCHSUITE_AUTH";
const ENV_BASE_URL: &str = "CHURCHSUITE_BASE_URL";
const ENV_CLIENT_ID: &str = "CHURCHSUITE_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "CHURCHSUITE_CLIENT_SECRET";
const ENV_REDIRECT_URI: &str = "CHURCHSUITE_REDIRECT_URI";
const ENV_ACCESS_TOKEN: &str = "CHURCHSUITE_ACCESS_TOKEN";

pub fn load_options() -> Result<ClientOptions> {
    options_from(|key| std::env::var(key).ok())
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .filter(|value| !value.is_empty())
        .with_context(|| format!("{} must be set", key))
}

fn options_from(lookup: impl Fn(&str) -> Option<String>) -> Result<ClientOptions> {
    let mut options = ClientOptions::new(
        required(&lookup, ENV_ACCOUNT)?,
        required(&lookup, ENV_APPLICATION)?,
        required(&lookup, ENV_AUTH)?,
    );

    if let Some(base_url) = lookup(ENV_BASE_URL) {
        options = options.with_base_url(base_url);
    }

    // OAuth2 is optional, but a partial client configuration is a mistake.
    if lookup(ENV_CLIENT_ID).is_some() {
        let mut oauth2 = OAuth2Options::new(
            required(&lookup, ENV_CLIENT_ID)?,
            required(&lookup, ENV_CLIENT_SECRET)?,
            required(&lookup, ENV_REDIRECT_URI)?,
        );
        oauth2.access_token = lookup(ENV_ACCESS_TOKEN).filter(|token| !token.is_empty());
        options = options.with_oauth2(oauth2);
    }

    Ok(options)
}
