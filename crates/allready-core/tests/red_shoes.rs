//! Integration test: walk one product through the whole workflow, from
//! an empty form to sent posts and back to an empty form.

#![allow(clippy::unwrap_used, clippy::panic)]

use allready_core::{
    Action, Effect, ImageRef, Language, Severity, Stage, TemplateCaptions, Workflow,
    WorkflowConfig, WorkflowStage,
};

#[test]
fn red_shoes_generate_send_and_reset() {
    let config = WorkflowConfig {
        reset_delay_ms: 1500,
        ..WorkflowConfig::default()
    };
    let mut workflow = Workflow::new(config);

    workflow.apply(Action::EditName("Red Shoes".into()));
    workflow.apply(Action::EditPrice("15000".into()));
    workflow.apply(Action::SetImage(Some(
        ImageRef::from_url(" https://example.com/red-shoes.jpg ").unwrap(),
    )));
    assert!(workflow.can_generate());

    // Input -> Generating -> Captions
    let Some(Effect::Generate { session, request }) = workflow.apply(Action::Generate) else {
        panic!("complete draft should start generation");
    };
    assert_eq!(workflow.stage(), Stage::Generating);
    workflow.apply(Action::GenerationFinished {
        session,
        result: Ok(TemplateCaptions::render(&request)),
    });
    assert_eq!(workflow.stage().phase(), WorkflowStage::Captions);

    for language in Language::ALL {
        let text = workflow.captions().get(language);
        assert!(text.contains("Red Shoes"), "{language} caption: {text}");
        assert!(text.contains("15000"), "{language} caption: {text}");
        assert!(text.contains("#RedShoes"), "{language} caption: {text}");
    }

    // Review: expand English, tweak it, collapse.
    workflow.apply(Action::ToggleCaption(Language::English));
    let edited = format!("{}\n#Sale", workflow.captions().english);
    workflow.apply(Action::EditCaption(Language::English, edited.clone()));
    workflow.apply(Action::ToggleCaption(Language::English));
    assert_eq!(workflow.expanded(), None);

    // Captions -> Sending -> Complete
    assert!(workflow.can_send());
    let Some(Effect::Dispatch { session, post }) = workflow.apply(Action::Send) else {
        panic!("sendable captions should start dispatch");
    };
    assert_eq!(post.captions.english, edited);
    assert_eq!(
        post.image.as_ref().map(ImageRef::preview),
        Some("https://example.com/red-shoes.jpg")
    );
    assert_eq!(workflow.stage().phase(), WorkflowStage::Sending);

    let reset = workflow.apply(Action::DispatchFinished {
        session,
        result: Ok(()),
    });
    assert_eq!(workflow.stage().phase(), WorkflowStage::Complete);
    assert_eq!(workflow.notice().unwrap().severity, Severity::Success);

    // Complete -> (delay) -> Input with everything cleared.
    let Some(Effect::ScheduleReset { session, after_ms }) = reset else {
        panic!("completion should schedule a reset");
    };
    assert_eq!(after_ms, 1500);
    workflow.apply(Action::AutoReset { session });

    assert_eq!(workflow.stage(), Stage::Input);
    assert!(workflow.draft().name.is_empty());
    assert!(workflow.draft().price.is_empty());
    assert!(workflow.draft().image.is_none());
    assert!(workflow.captions().french.is_empty());
    assert!(workflow.captions().english.is_empty());
}
