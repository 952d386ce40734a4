//! Config command handler

use crate::args::ConfigSubcommand;
use nu_transcript::config::Config;
use nu_transcript::info;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
///
/// # Errors
/// Returns a printable message if a key is unknown, a value is invalid, or
/// the config file cannot be written or removed
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            persist(config)?;
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            persist(config)?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    let Some(key) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\nConfig file: {}", Config::get_config_file_path().display());
        return Ok(());
    };

    config
        .get(key)
        .map(|value| println!("{value}"))
        .ok_or_else(|| format!("Unknown config key: '{key}'"))
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!(
        "Config saved to {}",
        Config::get_config_file_path().display()
    );
    Ok(())
}

fn reset<R: BufRead>(input: &mut R) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    if !confirmed(input) {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

/// Read one line and accept `y` or `yes` (case-insensitive)
fn confirmed<R: BufRead>(input: &mut R) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirmation_answers() {
        assert!(confirmed(&mut Cursor::new("y\n")));
        assert!(confirmed(&mut Cursor::new("YES\n")));
        assert!(!confirmed(&mut Cursor::new("n\n")));
        assert!(!confirmed(&mut Cursor::new("")));
    }

    #[test]
    fn test_show_unknown_key() {
        let config = Config::from_defaults();
        assert!(show(&config, Some("nope")).is_err());
        assert!(show(&config, Some("max_line_length")).is_ok());
    }
}
