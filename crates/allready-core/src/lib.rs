//! allready-core: product model and caption workflow (sans-IO).
//!
//! Holds everything the AllReady form needs that does not touch the
//! browser: the product draft, image normalization, caption templates,
//! the transient notice slot, and the workflow state machine that
//! sequences input -> captions -> sending -> complete.
//!
//! The state machine never performs I/O. [`Workflow::apply`] returns an
//! [`Effect`] describing the async work to run, and the caller feeds the
//! outcome back in as another [`Action`]. All browser interaction lives
//! in `allready-io`.

pub mod caption;
pub mod config;
pub mod error;
pub mod image_ref;
pub mod notice;
pub mod price;
pub mod service;
pub mod types;
pub mod workflow;

pub use caption::TemplateCaptions;
pub use config::WorkflowConfig;
pub use error::{ConfigError, ImageError, ServiceError};
pub use image_ref::ImageRef;
pub use notice::{Notice, NoticeId, NoticeSlot, Severity};
pub use price::filter_price;
pub use service::{CaptionService, DispatchService};
pub use types::{CaptionPair, CaptionRequest, Language, Post, ProductDraft};
pub use workflow::{Action, Effect, Stage, Workflow, WorkflowStage};
