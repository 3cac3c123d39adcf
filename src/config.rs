use crate::env_source::{EnvSource, ProcessEnv};
use crate::error::{EnvCheckError, Result};
use crate::types::{EnvReport, KeyStatus, RequiredKey, Service};

use chrono::Local;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Required environment variables for the application
pub const REQUIRED_ENV_VARS: &[RequiredKey] = &[
    RequiredKey::new("NEXT_PUBLIC_SUPABASE_URL", Service::Database),
    RequiredKey::new("NEXT_PUBLIC_SUPABASE_ANON_KEY", Service::Database),
    RequiredKey::new("RAZORPAY_KEY_ID", Service::Payments),
    RequiredKey::new("RAZORPAY_KEY_SECRET", Service::Payments),
    RequiredKey::new("RAZORPAY_WEBHOOK_SECRET", Service::Payments),
];

/// Line written once when every required variable is set
pub const SUCCESS_NOTICE: &str = "✓ All environment variables are set";

/// Checks an ordered set of required keys against an environment.
#[derive(Debug, Clone)]
pub struct EnvironmentValidator {
    required: Vec<RequiredKey>,
}

impl Default for EnvironmentValidator {
    fn default() -> Self {
        EnvironmentValidator::new(REQUIRED_ENV_VARS.to_vec())
    }
}

impl EnvironmentValidator {
    /// Creates a validator for `required`, reported in the given order.
    #[must_use]
    pub fn new(required: Vec<RequiredKey>) -> Self {
        EnvironmentValidator { required }
    }

    /// The keys this validator checks, in reporting order.
    #[must_use]
    pub fn required(&self) -> &[RequiredKey] {
        &self.required
    }

    /// Keys that are unset or set to the empty string, in declaration order.
    ///
    /// # Arguments
    /// * `env` - The environment to check
    ///
    /// # Returns
    /// * `Vec<String>` - The missing key names
    pub fn missing_vars<E: EnvSource + ?Sized>(&self, env: &E) -> Vec<String> {
        self.required
            .iter()
            .filter(|key| !env.has_value(key.name))
            .map(|key| key.name.to_string())
            .collect()
    }

    /// Validates that every required key is set
    ///
    /// # Errors
    /// Returns `EnvCheckError::MissingEnvVars` naming every missing key
    pub fn validate<E: EnvSource + ?Sized>(&self, env: &E) -> Result<()> {
        let missing_vars = self.missing_vars(env);

        if !missing_vars.is_empty() {
            return Err(EnvCheckError::MissingEnvVars(missing_vars));
        }

        Ok(())
    }

    /// Validates `env` and writes the success notice to `out` when it passes.
    ///
    /// Nothing is written on failure; the error carries the message.
    ///
    /// # Errors
    /// * `EnvCheckError::MissingEnvVars` - If any required key is missing
    /// * `EnvCheckError::Io` - If the notice could not be written
    pub fn validate_and_notify<E, W>(&self, env: &E, out: &mut W) -> Result<()>
    where
        E: EnvSource + ?Sized,
        W: Write,
    {
        self.validate(env)?;
        writeln!(out, "{SUCCESS_NOTICE}")?;
        Ok(())
    }

    /// Builds a per-key presence report for `env`.
    pub fn report<E: EnvSource + ?Sized>(&self, env: &E) -> EnvReport {
        let keys = self
            .required
            .iter()
            .map(|key| KeyStatus {
                key: key.name.to_string(),
                service: key.service,
                present: env.has_value(key.name),
            })
            .collect();

        EnvReport {
            checked_at: Local::now(),
            keys,
        }
    }
}

/// Validates that all required environment variables are set in the process
/// environment and prints the success notice to stdout.
///
/// # Errors
/// Returns `EnvCheckError::MissingEnvVars` if any required environment variable is missing
pub fn validate_env_vars() -> Result<()> {
    let stdout = io::stdout();
    EnvironmentValidator::default().validate_and_notify(&ProcessEnv, &mut stdout.lock())
}

/// Gets a required environment variable
///
/// # Arguments
/// * `var_name` - The name of the environment variable to retrieve
///
/// # Errors
/// Returns `EnvCheckError::MissingEnvVars` if the variable is unset or empty
///
/// # Returns
/// * `Result<String>` - The value of the environment variable
pub fn get_required_env_var(var_name: &str) -> Result<String> {
    ProcessEnv
        .get_var(var_name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| EnvCheckError::MissingEnvVars(vec![var_name.to_string()]))
}

/// Loads a `.env` file into the process environment.
///
/// Variables already present in the environment are left untouched.
///
/// # Arguments
/// * `path` - Explicit file to load. When `None`, the default `.env` lookup is
///   used and a missing file is not an error.
///
/// # Errors
/// Returns `EnvCheckError::DotEnv` if the file cannot be read or parsed
///
/// # Returns
/// * `Result<Option<PathBuf>>` - The file that was loaded, if any
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenv::from_path(path)?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenv::dotenv() {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e.into()),
        },
    }
}
