/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use dotenv::dotenv;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if val.is_empty() => default,
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if val.is_empty() => None,
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}

/// Gets a required environment variable
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// * `Ok(String)` - The raw value
/// * `Err(AppError::Configuration)` - If the variable is unset or empty
pub fn get_env_required(env_var: &str) -> Result<String, AppError> {
    match env::var(env_var) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(AppError::Configuration(format!(
            "missing {env_var} environment variable"
        ))),
    }
}

/// Loads variables from a `.env` file in the current directory, if present
///
/// Variables already set in the process environment are left untouched.
pub fn load_dotenv() {
    match dotenv() {
        Ok(path) => debug!("Successfully loaded {}", path.display()),
        Err(e) => debug!("Failed to load .env file: {e}"),
    }
}
