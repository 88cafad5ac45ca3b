//! The form card that owns the workflow state machine.

use allready_core::{Action, Stage, Workflow, WorkflowConfig, WorkflowStage};
use dioxus::prelude::*;

use super::caption_review::CaptionReview;
use super::notice::TransientNotice;
use super::product_form::ProductForm;
use crate::driver::drive;
use crate::services::Backends;

/// Props for the [`WorkflowPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct WorkflowPanelProps {
    /// Timing, currency, and limits for this form session.
    config: WorkflowConfig,
}

/// Product-to-post workflow: form, caption review, completion, notice.
///
/// Owns the [`Workflow`] signal and the simulated backends. Every child
/// reports through a single `on_action` handler that runs
/// [`drive`], so all state changes go through the reducer. Service calls
/// and the post-send reset timer are tasks of this component.
#[component]
pub fn WorkflowPanel(props: WorkflowPanelProps) -> Element {
    let config = props.config;
    let workflow = use_signal(|| Workflow::new(config.clone()));
    let backends = Backends::simulated(&config);

    let on_action = move |action: Action| drive(workflow, backends, action);

    let state = workflow.read();
    let stage = state.stage();
    let notice = state.notice().cloned();

    let body = match stage.phase() {
        WorkflowStage::Input => rsx! {
            ProductForm {
                draft: state.draft().clone(),
                generating: stage == Stage::Generating,
                can_generate: state.can_generate(),
                currency: config.currency.clone(),
                max_image_bytes: config.max_image_bytes,
                on_action: on_action,
            }
        },
        WorkflowStage::Captions | WorkflowStage::Sending => rsx! {
            CaptionReview {
                captions: state.captions().clone(),
                expanded: state.expanded(),
                sending: stage == Stage::Sending,
                can_send: state.can_send(),
                on_action: on_action,
            }
        },
        WorkflowStage::Complete => rsx! {
            div { class: "text-center space-y-2 py-8",
                h3 { class: "text-lg font-semibold text-white", "Posts sent" }
                p { class: "text-sm text-gray-300", "Resetting the form for the next product..." }
            }
        },
    };
    drop(state);

    rsx! {
        div { class: "max-w-2xl mx-auto",
            div { class: "bg-gray-800 rounded-lg shadow-sm border border-gray-700 p-6 space-y-6",
                div { class: "text-center mb-6",
                    h2 { class: "text-2xl font-bold text-white mb-2", "Create Marketing Post" }
                    p { class: "text-gray-300", "Generate and send product content to WhatsApp groups" }
                }
                {body}
            }
        }

        if let Some(notice) = notice {
            TransientNotice {
                key: "{notice.id}",
                message: notice.message,
                severity: notice.severity,
                timeout_ms: config.notice_timeout_ms,
                on_dismiss: move |()| on_action(Action::DismissNotice(notice.id)),
            }
        }
    }
}
