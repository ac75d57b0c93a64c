/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}

/// Gets a non-empty environment variable
///
/// # Returns
/// * `Err(AppError::Config)` - naming the variable when it is missing or empty
pub fn get_required_env(env_var: &str) -> Result<String, AppError> {
    match env::var(env_var) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => {
            error!("{} not found in environment variables or .env file", env_var);
            Err(AppError::Config(format!("{env_var} is not set")))
        }
    }
}

/// Reads a boolean flag, accepting `1`, `true`, `yes` and `on` in any case
pub fn get_env_flag(env_var: &str) -> bool {
    env::var(env_var).is_ok_and(|val| {
        matches!(
            val.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
