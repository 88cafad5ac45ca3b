//! allready-io: browser services and Dioxus component library.
//!
//! Runs the [`allready_core::Workflow`] state machine inside a Dioxus
//! app: the effect driver, simulated caption and dispatch backends, and
//! the page components (image attachment, transient notice, product
//! form, caption review, header, and footer).

pub mod components;
pub mod driver;
pub mod services;

pub use components::{
    CaptionReview, Footer, Header, ImageAttachment, ProductForm, TransientNotice, WorkflowPanel,
};
pub use driver::drive;
pub use services::{Backends, SimulatedCaptionService, SimulatedDispatchService};
