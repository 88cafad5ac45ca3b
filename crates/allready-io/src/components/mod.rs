//! Dioxus UI components for AllReady.
//!
//! Provides the image attachment widget, the transient notice, the
//! product form and caption review views, the workflow panel that ties
//! them to the state machine, and the static page header and footer.

mod caption_review;
mod image_attachment;
mod notice;
mod product_form;
mod shell;
mod workflow_panel;

pub use caption_review::CaptionReview;
pub use image_attachment::ImageAttachment;
pub use notice::TransientNotice;
pub use product_form::ProductForm;
pub use shell::{Footer, Header};
pub use workflow_panel::WorkflowPanel;

/// Small spinning ring shown inside busy buttons.
const SPINNER_CLASS: &str = "animate-spin rounded-full h-4 w-4 border-b-2 border-white mr-2";
