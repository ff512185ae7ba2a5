use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub smtp_relay: String,
    pub smtp_username: String,
    pub smtp_pass: String,
    pub port: u16,
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let smtp_relay =
        env::var("SMTP_RELAY").map_err(|_| "SMTP_RELAY environment variable is required")?;
    let smtp_username =
        env::var("SMTP_USERNAME").map_err(|_| "SMTP_USERNAME environment variable is required")?;
    let smtp_pass =
        env::var("SMTP_PASS").map_err(|_| "SMTP_PASS environment variable is required")?;

    let port = env::var("PORT")
        .map_err(|_| "PORT environment variable is required")?
        .parse::<u16>()
        .map_err(|e| format!("Failed to parse PORT: {}", e))?;

    Ok(Config {
        smtp_relay,
        smtp_username,
        smtp_pass,
        port,
    })
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path =
        env::var("EMAIL_GATEWAY_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        let contents = fs::read_to_string(&config_path)?;
        return serde_yaml::from_str(&contents).map_err(Into::into);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        let contents = fs::read_to_string("config.yaml")?;
        return serde_yaml::from_str(&contents).map_err(Into::into);
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'\
             \n This file should not be used and should be replaced with actual data",
            config_path
        );
        let contents = fs::read_to_string("config.example.yaml")?;
        return serde_yaml::from_str(&contents).map_err(Into::into);
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Successfully loaded configuration from environment variables");
            Ok(config)
        }
        Err(e) => Err(format!(
            "Config file not found and environment variables are incomplete. \
             Tried: '{}', 'config.yaml', 'config.example.yaml', and environment variables. \
             Error: {}",
            config_path, e
        )
        .into()),
    }
}
