//! Error types for image normalization, configuration, and services.

/// Reasons an image attachment is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    /// The selected file contained no bytes.
    #[error("the selected file is empty")]
    Empty,

    /// The selected file exceeds the configured size limit.
    #[error("image is too large ({size} bytes, limit is {max} bytes)")]
    TooLarge {
        /// Size of the rejected file in bytes.
        size: usize,
        /// Configured limit in bytes.
        max: usize,
    },

    /// The file is not in a supported image format.
    #[error("unsupported file type: {name}")]
    Unsupported {
        /// Name of the rejected file, as reported by the browser.
        name: String,
    },

    /// The URL field was blank after trimming.
    #[error("image URL is empty")]
    EmptyUrl,
}

/// Invalid [`WorkflowConfig`](crate::WorkflowConfig) values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `currency` was blank.
    #[error("currency must not be empty")]
    EmptyCurrency,

    /// `notice_timeout_ms` was zero.
    #[error("notice timeout must be greater than zero")]
    ZeroNoticeTimeout,

    /// `max_image_bytes` was zero.
    #[error("image size limit must be greater than zero")]
    ZeroImageLimit,
}

/// Failure reported by a caption or dispatch backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Caption generation failed.
    #[error("caption generation failed: {0}")]
    Captions(String),

    /// Sending posts to the groups failed.
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}
