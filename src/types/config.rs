use crate::error::CgpaError;
use crate::types::course::DEFAULT_CREDITS;
use crate::types::scale::Scale;
use serde::Deserialize;

/// Highest credit weight the course form accepts.
pub const MAX_CREDITS: u32 = 6;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CgpaConfig {
    pub defaults: Option<DefaultsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    pub scale: Option<Scale>,
    pub credits: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<ConfigFormat>,
}

impl CgpaConfig {
    pub fn scale(&self) -> Scale {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.scale)
            .unwrap_or_default()
    }

    pub fn default_credits(&self) -> u32 {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.credits)
            .unwrap_or(DEFAULT_CREDITS)
    }

    pub fn format(&self) -> Option<ConfigFormat> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn validate(&self) -> Result<(), CgpaError> {
        if let Some(credits) = self.defaults.as_ref().and_then(|defaults| defaults.credits) {
            if credits > MAX_CREDITS {
                return Err(CgpaError::ConfigParse(format!(
                    "defaults.credits must be between 0 and {MAX_CREDITS} (found {credits})"
                )));
            }
        }
        Ok(())
    }
}
