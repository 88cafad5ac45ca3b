//! Simulated caption and dispatch backends.
//!
//! Both services sleep on a browser timer and then succeed. They stand
//! in for real network calls until a caption API and a messaging
//! integration exist; the workflow already handles their failure paths.

use allready_core::{
    CaptionPair, CaptionRequest, CaptionService, DispatchService, Post, ServiceError,
    TemplateCaptions, WorkflowConfig,
};
use gloo_timers::future::TimeoutFuture;

/// Caption backend that waits `delay_ms` and then renders the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedCaptionService {
    /// Artificial latency in milliseconds.
    pub delay_ms: u32,
}

impl CaptionService for SimulatedCaptionService {
    #[allow(clippy::future_not_send)] // WASM is single-threaded; TimeoutFuture is !Send
    async fn generate(&self, request: CaptionRequest) -> Result<CaptionPair, ServiceError> {
        TimeoutFuture::new(self.delay_ms).await;
        TemplateCaptions.generate(request).await
    }
}

/// Dispatch backend that waits `delay_ms` and reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDispatchService {
    /// Artificial latency in milliseconds.
    pub delay_ms: u32,
}

impl DispatchService for SimulatedDispatchService {
    #[allow(clippy::future_not_send)] // WASM is single-threaded; TimeoutFuture is !Send
    async fn dispatch(&self, post: Post) -> Result<(), ServiceError> {
        TimeoutFuture::new(self.delay_ms).await;
        tracing::info!(
            product = %post.product_name,
            has_image = post.image.is_some(),
            french_chars = post.captions.french.chars().count(),
            english_chars = post.captions.english.chars().count(),
            "posts delivered (simulated)"
        );
        Ok(())
    }
}

/// The pair of services the workflow driver awaits.
///
/// `Copy` so event handlers and spawned tasks can carry it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backends<C, D> {
    /// Caption generation backend.
    pub captions: C,
    /// Dispatch backend.
    pub dispatch: D,
}

impl Backends<SimulatedCaptionService, SimulatedDispatchService> {
    /// Simulated backends using the delays from `config`.
    #[must_use]
    pub const fn simulated(config: &WorkflowConfig) -> Self {
        Self {
            captions: SimulatedCaptionService {
                delay_ms: config.generation_delay_ms,
            },
            dispatch: SimulatedDispatchService {
                delay_ms: config.dispatch_delay_ms,
            },
        }
    }
}
