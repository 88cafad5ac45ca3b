//! Integration test: each notice's auto-hide timer dismisses only the
//! notice it was started for.

#![allow(clippy::unwrap_used)]

use allready_core::{Action, Severity, Workflow};

#[test]
fn earlier_timer_cannot_hide_a_newer_notice() {
    let mut workflow = Workflow::default();

    // Blank form: the first notice, with its timer keyed to its id.
    workflow.apply(Action::Generate);
    let first = workflow.notice().unwrap().id;

    // A rejected image replaces it before the first timer fires.
    workflow.apply(Action::RejectImage("File is too large".into()));
    let second = workflow.notice().unwrap();
    assert_ne!(second.id, first);
    assert_eq!(second.severity, Severity::Error);
    let second = second.id;

    // First timer fires late.
    workflow.apply(Action::DismissNotice(first));
    assert_eq!(workflow.notice().unwrap().id, second);
    assert_eq!(workflow.notice().unwrap().message, "File is too large");

    // The second notice's own timer hides it.
    workflow.apply(Action::DismissNotice(second));
    assert!(workflow.notice().is_none());
}

#[test]
fn notice_survives_clear_until_its_timer_fires() {
    let mut workflow = Workflow::default();
    workflow.apply(Action::Generate);
    let id = workflow.notice().unwrap().id;

    workflow.apply(Action::Clear);
    assert_eq!(workflow.notice().unwrap().id, id);

    workflow.apply(Action::DismissNotice(id));
    assert!(workflow.notice().is_none());
}
