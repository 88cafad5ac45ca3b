//! Executes workflow effects as Dioxus tasks.
//!
//! [`drive`] is the only place the UI touches the workflow. It applies
//! an action, and if the reducer asks for async work it spawns a task
//! that awaits the matching backend and feeds the outcome back through
//! `drive` again.
//!
//! Tasks are spawned in the scope of whichever component owns the
//! workflow signal, so unmounting that component cancels any pending
//! service call or reset timer.

use allready_core::{Action, CaptionService, DispatchService, Effect, Workflow};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::services::Backends;

/// Apply `action` to `workflow` and start whatever effect it produces.
pub fn drive<C, D>(mut workflow: Signal<Workflow>, backends: Backends<C, D>, action: Action)
where
    C: CaptionService + Copy + 'static,
    D: DispatchService + Copy + 'static,
{
    if let Action::GenerationFinished { session, .. }
    | Action::DispatchFinished { session, .. }
    | Action::AutoReset { session } = &action
    {
        let current = workflow.peek().session();
        if *session != current {
            tracing::debug!(session, current, "dropping stale completion");
        }
    }

    let effect = workflow.write().apply(action);
    if let Some(effect) = effect {
        run_effect(workflow, backends, effect);
    }
}

fn run_effect<C, D>(workflow: Signal<Workflow>, backends: Backends<C, D>, effect: Effect)
where
    C: CaptionService + Copy + 'static,
    D: DispatchService + Copy + 'static,
{
    match effect {
        Effect::Generate { session, request } => {
            tracing::info!(product = %request.product_name, session, "generating captions");
            spawn(async move {
                let result = backends.captions.generate(request).await;
                match &result {
                    Ok(_) => tracing::info!(session, "captions ready"),
                    Err(e) => tracing::warn!(session, error = %e, "caption generation failed"),
                }
                drive(
                    workflow,
                    backends,
                    Action::GenerationFinished { session, result },
                );
            });
        }
        Effect::Dispatch { session, post } => {
            tracing::info!(product = %post.product_name, session, "sending posts");
            spawn(async move {
                let result = backends.dispatch.dispatch(post).await;
                if let Err(e) = &result {
                    tracing::warn!(session, error = %e, "dispatch failed");
                }
                drive(workflow, backends, Action::DispatchFinished { session, result });
            });
        }
        Effect::ScheduleReset { session, after_ms } => {
            tracing::debug!(session, after_ms, "form reset scheduled");
            spawn(async move {
                TimeoutFuture::new(after_ms).await;
                drive(workflow, backends, Action::AutoReset { session });
            });
        }
    }
}
