//! Passphrase prompts and confirmations.

use dialoguer::{Confirm, Password};
use zeroize::Zeroizing;

use crate::errors::CliError;

/// Read a passphrase from an environment variable, ignoring blank values.
pub fn env_passphrase(var: &str) -> Option<Zeroizing<String>> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(Zeroizing::new)
}

/// Prompt for a passphrase, or read it from `env_var`.
pub fn prompt_passphrase(
    env_var: &str,
    prompt: &str,
    interactive: bool,
) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = env_passphrase(env_var) {
        return Ok(value);
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            env_var
        ))
        .into());
    }
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))
}

/// Prompt for a new passphrase twice, or read it once from `env_var`.
///
/// Returns the passphrase and its confirmation so the caller can hand both
/// to the store, which performs the match check itself.
pub fn prompt_new_passphrase(
    env_var: &str,
    interactive: bool,
) -> anyhow::Result<(Zeroizing<String>, Zeroizing<String>)> {
    if let Some(value) = env_passphrase(env_var) {
        let confirmation = value.clone();
        return Ok((value, confirmation));
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No new passphrase provided and no TTY available. Set {}.",
            env_var
        ))
        .into());
    }
    let new = Password::new()
        .with_prompt("New passphrase")
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
    let confirmation = Password::new()
        .with_prompt("Confirm new passphrase")
        .allow_empty_password(true)
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
    Ok((new, confirmation))
}

/// Ask before a destructive action.
///
/// `--yes` skips the question; without a TTY the action is refused.
pub fn confirm(question: &str, yes: bool, interactive: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    if !interactive {
        return Err(CliError::invalid_input(
            "Refusing to continue without confirmation. Pass --yes to proceed.",
        )
        .into());
    }
    Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
