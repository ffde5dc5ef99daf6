//! cli
//!
//! Command-line surface for the repository facade.
//!
//! The CLI layer is thin: it parses arguments via clap, builds the default
//! facade, and prints JSON payloads for the query commands. All repository
//! behavior lives below the facade.

pub mod args;

pub use args::{Cli, Command};

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::core::types::Credentials;
use crate::repo::Repo;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let repo = Repo::new().context("cannot open the settings store")?;
    let path = cli.cwd.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Command::Status { full } => {
            if full {
                print_json(&repo.full_status(&path).await?)?;
            } else {
                print_json(&repo.status(&path).await?)?;
            }
        }
        Command::Stage { files } => repo.stage(&path, &files).await?,
        Command::Unstage { files } => repo.unstage(&path, &files).await?,
        Command::Commit { message } => {
            repo.commit(&path, &message).await?;
            println!("Committed.");
        }
        Command::Push { auth } => {
            repo.push(&path, stored_auth(&repo, auth)?.as_ref()).await?;
            println!("Pushed.");
        }
        Command::Pull { auth } => {
            repo.pull(&path, stored_auth(&repo, auth)?.as_ref()).await?;
            println!("Pulled.");
        }
        Command::Fetch { auth } => {
            repo.fetch(&path, stored_auth(&repo, auth)?.as_ref()).await?;
            println!("Fetched.");
        }
        Command::Clone { url, target, auth } => {
            repo.clone_into(&url, &target, stored_auth(&repo, auth)?.as_ref())
                .await?;
            println!("Cloned into {}.", target.display());
        }
        Command::Diff => print_json(&repo.remote_divergence(&path).await?)?,
        Command::Info => print_json(&repo.basic_info(&path).await)?,
        Command::Login => login(&repo)?,
    }

    Ok(())
}

/// Credentials for `--auth` commands, from the settings store.
fn stored_auth(repo: &Repo, wanted: bool) -> Result<Option<Credentials>> {
    if !wanted {
        return Ok(None);
    }
    match repo.stored_credentials()? {
        Some(credentials) => Ok(Some(credentials)),
        None => bail!("no stored credentials; run `dw login` first"),
    }
}

/// Prompt for and store remote credentials.
fn login(repo: &Repo) -> Result<()> {
    let username = prompt_line("Username: ")?;
    if username.is_empty() {
        bail!("username cannot be empty");
    }
    let password = rpassword::prompt_password("Password: ")?;

    repo.save_credentials(&Credentials { username, password })?;
    println!("Credentials saved.");
    Ok(())
}

fn prompt_line(label: &str) -> Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
