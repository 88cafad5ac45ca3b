//! Async backends the workflow suspends on.
//!
//! The workflow itself only emits [`Effect`](crate::Effect)s; whoever
//! drives it awaits one of these services and feeds the outcome back as
//! an [`Action`](crate::Action). Swapping the simulated browser
//! implementations for real network calls keeps the same contract.

use crate::error::ServiceError;
use crate::types::{CaptionPair, CaptionRequest, Post};

/// Produces a caption pair for a product.
// The app runs on single-threaded WASM, so the returned futures are not
// required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait CaptionService {
    /// Generate French and English captions.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Captions`] if the backend fails.
    async fn generate(&self, request: CaptionRequest) -> Result<CaptionPair, ServiceError>;
}

/// Delivers a reviewed post to the messaging groups.
#[allow(async_fn_in_trait)]
pub trait DispatchService {
    /// Send `post`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Dispatch`] if delivery fails.
    async fn dispatch(&self, post: Post) -> Result<(), ServiceError>;
}
