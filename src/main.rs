//! splashgate - interactive login front end.
//!
//! Wires the two user triggers to the gateway: a credential prompt that
//! submits to the login endpoint, and `--sso`, which hands the user off to
//! the external SSO portal.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use splashgate::{
    AuthGateway, BrowserSso, Config, Credentials, FileTokenStore, LoginClient,
};

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
    info!("splashgate starting");

    let mut config = Config::load()?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--sso" {
        let gateway = build_gateway(&config, true)?;
        gateway.delegate_to_sso();
        println!("Continuing sign-on in your browser.");
        return Ok(());
    }

    let gateway = build_gateway(&config, false)?;
    let credentials = prompt_credentials(&config)?;

    println!("\nAuthenticating...");
    match gateway.submit_credentials(&credentials).await {
        Ok(_) => {
            config.last_username = Some(credentials.username.clone());
            config.save()?;
            println!("Login successful!");
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_notice());
            std::process::exit(1);
        }
    }
}

/// Assemble the gateway from config and environment overrides.
fn build_gateway(config: &Config, require_sso: bool) -> Result<AuthGateway> {
    let login_url = std::env::var("SPLASHGATE_LOGIN_URL")
        .ok()
        .or_else(|| config.login_url.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No login URL configured (set login_url or SPLASHGATE_LOGIN_URL)")
        })?;

    let client = match config.request_timeout_secs {
        Some(secs) => LoginClient::with_timeout(login_url, Duration::from_secs(secs))?,
        None => LoginClient::new(login_url)?,
    };

    let store = FileTokenStore::new(config.token_dir()?);
    let mut gateway = AuthGateway::new(client, store);

    let sso_url = std::env::var("SPLASHGATE_SSO_URL")
        .ok()
        .or_else(|| config.sso_url.clone());
    match sso_url {
        Some(url) => gateway = gateway.with_sso(BrowserSso::new(url)),
        None if require_sso => {
            anyhow::bail!("No SSO portal configured (set sso_url or SPLASHGATE_SSO_URL)")
        }
        None => {}
    }

    Ok(gateway)
}

/// Collect the credential pair, preferring environment variables and
/// prefilling the last used username.
fn prompt_credentials(config: &Config) -> Result<Credentials> {
    let env_username = std::env::var("SPLASHGATE_USERNAME")
        .ok()
        .filter(|s| !s.is_empty());
    let env_password = std::env::var("SPLASHGATE_PASSWORD")
        .ok()
        .filter(|s| !s.is_empty());

    let username = match env_username {
        Some(username) => username,
        None => {
            if let Some(ref last_user) = config.last_username {
                print!("Username [{}]: ", last_user);
                io::stdout().flush()?;

                let mut input = String::new();
                io::stdin().read_line(&mut input)?;
                let input = input.trim();

                if input.is_empty() {
                    last_user.clone()
                } else {
                    input.to_string()
                }
            } else {
                prompt_username()?
            }
        }
    };

    let password = match env_password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };

    if username.is_empty() || password.is_empty() {
        anyhow::bail!("Username and password required");
    }

    Ok(Credentials::new(username, password))
}

fn prompt_username() -> Result<String> {
    print!("Username: ");
    io::stdout().flush()?;

    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    Ok(username.trim().to_string())
}
