use crate::domain::complex::Complex;
use crate::utils::error::{InspectError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub value: ValueConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fallback components for `print` when the command line leaves them out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueConfig {
    pub real: Option<f32>,
    pub imag: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Reads and parses a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InspectError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InspectError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Builds the value to print: explicit arguments win over the file, zero fills the rest.
    pub fn resolve_value(&self, real: Option<f32>, imag: Option<f32>) -> Complex {
        let real = real.or(self.value.real).unwrap_or(0.0);
        let imag = imag.or(self.value.imag).unwrap_or(0.0);
        Complex::new(real, imag)
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}
