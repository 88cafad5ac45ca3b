//! Workflow timing and limits.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the caption workflow.
///
/// Every field has a default, so a partial JSON object (or `{}`)
/// deserializes into a usable config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Simulated caption generation latency in milliseconds.
    pub generation_delay_ms: u32,

    /// Simulated dispatch latency in milliseconds.
    pub dispatch_delay_ms: u32,

    /// How long the completion screen stays up before the form resets.
    pub reset_delay_ms: u32,

    /// How long a notice stays visible before it hides itself.
    pub notice_timeout_ms: u32,

    /// Currency printed after the price in captions and on the form.
    pub currency: String,

    /// Largest image file accepted, in bytes.
    pub max_image_bytes: usize,
}

impl WorkflowConfig {
    /// Default for [`generation_delay_ms`](Self::generation_delay_ms).
    pub const DEFAULT_GENERATION_DELAY_MS: u32 = 3000;
    /// Default for [`dispatch_delay_ms`](Self::dispatch_delay_ms).
    pub const DEFAULT_DISPATCH_DELAY_MS: u32 = 2500;
    /// Default for [`reset_delay_ms`](Self::reset_delay_ms).
    pub const DEFAULT_RESET_DELAY_MS: u32 = 2000;
    /// Default for [`notice_timeout_ms`](Self::notice_timeout_ms).
    pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5000;
    /// Default for [`currency`](Self::currency).
    pub const DEFAULT_CURRENCY: &'static str = "FCFA";
    /// Default for [`max_image_bytes`](Self::max_image_bytes) (10 MiB).
    pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

    /// Check the invariants the workflow relies on.
    ///
    /// Zero delays are allowed (they make the simulated services
    /// resolve on the next tick), but a notice that hides itself
    /// immediately or an image limit of zero would make the form unusable.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::EmptyCurrency);
        }
        if self.notice_timeout_ms == 0 {
            return Err(ConfigError::ZeroNoticeTimeout);
        }
        if self.max_image_bytes == 0 {
            return Err(ConfigError::ZeroImageLimit);
        }
        Ok(())
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: Self::DEFAULT_GENERATION_DELAY_MS,
            dispatch_delay_ms: Self::DEFAULT_DISPATCH_DELAY_MS,
            reset_delay_ms: Self::DEFAULT_RESET_DELAY_MS,
            notice_timeout_ms: Self::DEFAULT_NOTICE_TIMEOUT_MS,
            currency: Self::DEFAULT_CURRENCY.to_owned(),
            max_image_bytes: Self::DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(WorkflowConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: WorkflowConfig =
            serde_json::from_str(r#"{"currency": "EUR", "reset_delay_ms": 0}"#).unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.reset_delay_ms, 0);
        assert_eq!(
            config.generation_delay_ms,
            WorkflowConfig::DEFAULT_GENERATION_DELAY_MS
        );
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_currency() {
        let config = WorkflowConfig {
            currency: "  ".into(),
            ..WorkflowConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyCurrency));
    }

    #[test]
    fn rejects_zero_notice_timeout_and_image_limit() {
        let config = WorkflowConfig {
            notice_timeout_ms: 0,
            ..WorkflowConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroNoticeTimeout));

        let config = WorkflowConfig {
            max_image_bytes: 0,
            ..WorkflowConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroImageLimit));
    }

    #[test]
    fn round_trips_through_json() {
        let config = WorkflowConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: WorkflowConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
