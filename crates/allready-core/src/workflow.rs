//! The caption workflow state machine.
//!
//! [`Workflow`] owns the product draft, the generated captions, the
//! notice slot, and the current [`Stage`]. It is driven exclusively
//! through [`Workflow::apply`]:
//!
//! ```rust
//! # use allready_core::{Action, Effect, TemplateCaptions, Workflow, WorkflowConfig, WorkflowStage};
//! let mut workflow = Workflow::new(WorkflowConfig::default());
//! workflow.apply(Action::EditName("Red Shoes".into()));
//! workflow.apply(Action::EditPrice("15000".into()));
//!
//! let Some(Effect::Generate { session, request }) = workflow.apply(Action::Generate) else {
//!     unreachable!("a complete draft starts generation");
//! };
//! let captions = TemplateCaptions::render(&request);
//! workflow.apply(Action::GenerationFinished { session, result: Ok(captions) });
//!
//! assert_eq!(workflow.stage().phase(), WorkflowStage::Captions);
//! assert!(workflow.captions().english.contains("#RedShoes"));
//! ```
//!
//! Async work is never performed here. Starting generation or dispatch
//! returns an [`Effect`]; the driver awaits the matching service and
//! reports back with [`Action::GenerationFinished`] or
//! [`Action::DispatchFinished`].
//!
//! # Sessions
//!
//! Every [`Action::Clear`] starts a new session. Effects carry the
//! session they were issued in, and completions or reset timers from an
//! older session are dropped, so a result arriving after the form was
//! cleared cannot resurrect old data.

use std::fmt;

use crate::config::WorkflowConfig;
use crate::error::ServiceError;
use crate::image_ref::ImageRef;
use crate::notice::{Notice, NoticeId, NoticeSlot, Severity};
use crate::price::filter_price;
use crate::types::{CaptionPair, CaptionRequest, Language, Post, ProductDraft};

/// Shown when Generate is attempted with a blank name or price.
pub const MSG_MISSING_FIELDS: &str = "Please fill in all required fields";
/// Shown when captions arrive.
pub const MSG_GENERATED: &str = "Captions generated successfully! Review and edit as needed.";
/// Shown when the caption service fails.
pub const MSG_GENERATION_FAILED: &str = "Failed to generate captions. Please try again.";
/// Shown when Send is attempted with a blank caption.
pub const MSG_MISSING_CAPTIONS: &str = "Both captions are required before sending";
/// Shown when the posts went out.
pub const MSG_SENT: &str = "Posts sent successfully to all WhatsApp groups! ✅";
/// Shown when the dispatch service fails.
pub const MSG_SEND_FAILED: &str = "Failed to send posts. Please try again.";

/// Internal workflow state.
///
/// `Generating` and `Sending` are the busy variants of `Input` and
/// `Captions`: the same view is shown but its controls are suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Editing the product fields.
    #[default]
    Input,
    /// Waiting for the caption service.
    Generating,
    /// Reviewing and editing captions.
    Captions,
    /// Waiting for the dispatch service.
    Sending,
    /// Posts were sent; the form resets after a short delay.
    Complete,
}

impl Stage {
    /// The user-facing stage this state belongs to.
    #[must_use]
    pub const fn phase(self) -> WorkflowStage {
        match self {
            Self::Input | Self::Generating => WorkflowStage::Input,
            Self::Captions => WorkflowStage::Captions,
            Self::Sending => WorkflowStage::Sending,
            Self::Complete => WorkflowStage::Complete,
        }
    }

    /// Whether a service call is in flight.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Generating | Self::Sending)
    }
}

/// One phase of the product-to-post pipeline, as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowStage {
    /// Product form.
    Input,
    /// Caption review.
    Captions,
    /// Posts are being sent.
    Sending,
    /// Posts were sent.
    Complete,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Input => "Input",
            Self::Captions => "Captions",
            Self::Sending => "Sending",
            Self::Complete => "Complete",
        })
    }
}

/// Everything that can happen to the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The name field changed.
    EditName(String),
    /// The price field changed. The text is filtered before storing.
    EditPrice(String),
    /// An image was attached (`Some`) or removed (`None`).
    SetImage(Option<ImageRef>),
    /// An image was refused by the attachment widget.
    RejectImage(String),
    /// The user asked for captions.
    Generate,
    /// The caption service settled.
    GenerationFinished {
        /// Session the request was issued in.
        session: u64,
        /// Service outcome.
        result: Result<CaptionPair, ServiceError>,
    },
    /// Expand a caption, or collapse it if already expanded.
    ToggleCaption(Language),
    /// A caption was edited.
    EditCaption(Language, String),
    /// The user asked to send the posts.
    Send,
    /// The dispatch service settled.
    DispatchFinished {
        /// Session the dispatch was issued in.
        session: u64,
        /// Service outcome.
        result: Result<(), ServiceError>,
    },
    /// Return from caption review to the form, keeping everything.
    Back,
    /// Reset the draft and captions and return to the form.
    Clear,
    /// The post-completion reset timer fired.
    AutoReset {
        /// Session the timer was scheduled in.
        session: u64,
    },
    /// A notice was closed or timed out.
    DismissNotice(NoticeId),
}

/// Side effect requested by [`Workflow::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the caption service and report [`Action::GenerationFinished`].
    Generate {
        /// Session to echo back.
        session: u64,
        /// What to generate captions for.
        request: CaptionRequest,
    },
    /// Run the dispatch service and report [`Action::DispatchFinished`].
    Dispatch {
        /// Session to echo back.
        session: u64,
        /// What to send.
        post: Post,
    },
    /// Report [`Action::AutoReset`] after `after_ms` milliseconds.
    ScheduleReset {
        /// Session to echo back.
        session: u64,
        /// Delay before the reset.
        after_ms: u32,
    },
}

/// The form's state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    config: WorkflowConfig,
    draft: ProductDraft,
    captions: CaptionPair,
    stage: Stage,
    expanded: Option<Language>,
    notice: NoticeSlot,
    session: u64,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new(WorkflowConfig::default())
    }
}

impl Workflow {
    /// Start a fresh workflow in [`Stage::Input`].
    #[must_use]
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            draft: ProductDraft::default(),
            captions: CaptionPair::default(),
            stage: Stage::Input,
            expanded: None,
            notice: NoticeSlot::default(),
            session: 0,
        }
    }

    /// Configuration the workflow was created with.
    #[must_use]
    pub const fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Current product fields.
    #[must_use]
    pub const fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Current captions (empty until generated).
    #[must_use]
    pub const fn captions(&self) -> &CaptionPair {
        &self.captions
    }

    /// Current internal stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Caption currently expanded for editing.
    #[must_use]
    pub const fn expanded(&self) -> Option<Language> {
        self.expanded
    }

    /// Notice currently showing.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.current()
    }

    /// Current session counter.
    #[must_use]
    pub const fn session(&self) -> u64 {
        self.session
    }

    /// Whether Generate would start the caption service.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.stage == Stage::Input && self.draft.is_complete()
    }

    /// Whether Send would start the dispatch service.
    #[must_use]
    pub fn can_send(&self) -> bool {
        self.stage == Stage::Captions && self.captions.is_sendable()
    }

    /// Whether the form fields accept edits.
    #[must_use]
    pub fn accepts_edits(&self) -> bool {
        self.stage == Stage::Input
    }

    /// Apply `action`, returning the side effect to run, if any.
    ///
    /// Actions that make no sense in the current stage (editing while a
    /// request is in flight, a second Send, a stale completion) are
    /// ignored.
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::EditName(name) => {
                if self.accepts_edits() {
                    self.draft.name = name;
                }
                None
            }
            Action::EditPrice(raw) => {
                if self.accepts_edits() {
                    self.draft.price = filter_price(&raw);
                }
                None
            }
            Action::SetImage(image) => {
                if self.accepts_edits() {
                    self.draft.image = image;
                }
                None
            }
            Action::RejectImage(message) => {
                self.notice.raise(Severity::Error, message);
                None
            }
            Action::Generate => self.start_generation(),
            Action::GenerationFinished { session, result } => {
                self.finish_generation(session, result);
                None
            }
            Action::ToggleCaption(language) => {
                if self.reviewing() {
                    self.expanded = if self.expanded == Some(language) {
                        None
                    } else {
                        Some(language)
                    };
                }
                None
            }
            Action::EditCaption(language, text) => {
                if self.reviewing() {
                    self.captions.set(language, text);
                }
                None
            }
            Action::Send => self.start_dispatch(),
            Action::DispatchFinished { session, result } => self.finish_dispatch(session, result),
            Action::Back => {
                if self.stage == Stage::Captions {
                    self.stage = Stage::Input;
                    self.expanded = None;
                }
                None
            }
            Action::Clear => {
                self.clear();
                None
            }
            Action::AutoReset { session } => {
                if session == self.session && self.stage == Stage::Complete {
                    self.clear();
                }
                None
            }
            Action::DismissNotice(id) => {
                self.notice.dismiss(id);
                None
            }
        }
    }

    /// Caption cards stay open for review while a send is in flight.
    /// The dispatched post is a snapshot, so late edits only affect a retry.
    const fn reviewing(&self) -> bool {
        matches!(self.stage, Stage::Captions | Stage::Sending)
    }

    fn start_generation(&mut self) -> Option<Effect> {
        if self.stage != Stage::Input {
            return None;
        }
        if !self.draft.is_complete() {
            self.notice.raise(Severity::Error, MSG_MISSING_FIELDS);
            return None;
        }
        self.stage = Stage::Generating;
        Some(Effect::Generate {
            session: self.session,
            request: CaptionRequest {
                product_name: self.draft.name.trim().to_owned(),
                price: self.draft.price.trim().to_owned(),
                currency: self.config.currency.clone(),
            },
        })
    }

    fn finish_generation(&mut self, session: u64, result: Result<CaptionPair, ServiceError>) {
        if session != self.session || self.stage != Stage::Generating {
            return;
        }
        match result {
            Ok(captions) => {
                self.captions = captions;
                self.expanded = None;
                self.stage = Stage::Captions;
                self.notice.raise(Severity::Success, MSG_GENERATED);
            }
            Err(_) => {
                self.stage = Stage::Input;
                self.notice.raise(Severity::Error, MSG_GENERATION_FAILED);
            }
        }
    }

    fn start_dispatch(&mut self) -> Option<Effect> {
        if self.stage != Stage::Captions {
            return None;
        }
        if !self.captions.is_sendable() {
            self.notice.raise(Severity::Error, MSG_MISSING_CAPTIONS);
            return None;
        }
        self.stage = Stage::Sending;
        Some(Effect::Dispatch {
            session: self.session,
            post: Post {
                product_name: self.draft.name.trim().to_owned(),
                price: self.draft.price.trim().to_owned(),
                currency: self.config.currency.clone(),
                captions: self.captions.clone(),
                image: self.draft.image.clone(),
            },
        })
    }

    fn finish_dispatch(&mut self, session: u64, result: Result<(), ServiceError>) -> Option<Effect> {
        if session != self.session || self.stage != Stage::Sending {
            return None;
        }
        match result {
            Ok(()) => {
                self.stage = Stage::Complete;
                self.notice.raise(Severity::Success, MSG_SENT);
                Some(Effect::ScheduleReset {
                    session: self.session,
                    after_ms: self.config.reset_delay_ms,
                })
            }
            Err(_) => {
                self.stage = Stage::Captions;
                self.notice.raise(Severity::Error, MSG_SEND_FAILED);
                None
            }
        }
    }

    /// Reset draft, captions, and expansion and start a new session.
    /// The current notice is left alone.
    fn clear(&mut self) {
        self.draft = ProductDraft::default();
        self.captions = CaptionPair::default();
        self.expanded = None;
        self.stage = Stage::Input;
        self.session = self.session.wrapping_add(1);
    }
}
