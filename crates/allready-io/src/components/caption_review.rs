//! Caption review and editing (workflow captions stage).

use allready_core::{Action, CaptionPair, Language};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdPencil, LdSave};

use super::SPINNER_CLASS;

/// Props for the [`CaptionReview`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CaptionReviewProps {
    /// Generated (and possibly edited) captions.
    captions: CaptionPair,
    /// Caption open for editing, if any.
    expanded: Option<Language>,
    /// Dispatch is in flight.
    sending: bool,
    /// The Send button is enabled.
    can_send: bool,
    /// Receives every edit and button press.
    on_action: EventHandler<Action>,
}

/// One card per language plus Send and Back buttons.
///
/// Collapsed cards show a three-line read-only excerpt. Clicking a
/// card's header expands it into a textarea; at most one card is open.
/// Cards stay editable while sending; only Send and Back are suspended.
#[component]
pub fn CaptionReview(props: CaptionReviewProps) -> Element {
    let CaptionReviewProps {
        captions,
        expanded,
        sending,
        can_send,
        on_action,
    } = props;

    rsx! {
        div { class: "space-y-6",
            div { class: "text-center",
                h3 { class: "text-lg font-semibold text-white mb-2", "Generated Captions" }
                p { class: "text-sm text-gray-300", "Review and edit your captions before sending" }
            }

            div { class: "space-y-4",
                for language in Language::ALL {
                    {render_card(language, captions.get(language), expanded == Some(language), on_action)}
                }
            }

            div { class: "flex flex-col sm:flex-row gap-3 pt-4",
                button {
                    r#type: "button",
                    class: "flex-1 bg-green-500 hover:bg-green-600 disabled:bg-green-400 text-white font-medium py-3 px-6 rounded-lg transition-colors duration-200 flex items-center justify-center min-h-[48px]",
                    disabled: !can_send || sending,
                    onclick: move |_| on_action.call(Action::Send),
                    if sending {
                        div { class: SPINNER_CLASS }
                        "Sending to Groups..."
                    } else {
                        Icon { width: 16, height: 16, class: "mr-2", icon: LdSave }
                        "Save and Send"
                    }
                }
                button {
                    r#type: "button",
                    class: "flex-none bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700 text-gray-200 font-medium py-3 px-6 rounded-lg transition-colors duration-200 flex items-center justify-center min-h-[48px]",
                    disabled: sending,
                    onclick: move |_| on_action.call(Action::Back),
                    Icon { width: 16, height: 16, class: "mr-2", icon: LdArrowLeft }
                    "Back to Form"
                }
            }
        }
    }
}

/// Render a single caption card.
fn render_card(
    language: Language,
    text: &str,
    is_expanded: bool,
    on_action: EventHandler<Action>,
) -> Element {
    let text = text.to_owned();
    let char_count = text.chars().count();

    rsx! {
        div { key: "{language}", class: "border border-gray-600 rounded-lg overflow-hidden",
            button {
                r#type: "button",
                class: "w-full px-4 py-3 bg-gray-700 hover:bg-gray-600 text-left font-medium text-white flex items-center justify-between transition-colors",
                "aria-expanded": "{is_expanded}",
                onclick: move |_| on_action.call(Action::ToggleCaption(language)),
                span { "{language.label()}" }
                span { class: "text-gray-300",
                    Icon { width: 16, height: 16, icon: LdPencil }
                }
            }
            div { class: "p-4 border-t border-gray-600",
                if is_expanded {
                    textarea {
                        rows: "6",
                        class: "w-full px-3 py-2 border border-gray-600 bg-gray-700 text-white rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-400 resize-none text-sm",
                        value: "{text}",
                        oninput: move |e| on_action.call(Action::EditCaption(language, e.value())),
                    }
                    div { class: "mt-2 text-xs text-gray-400", "{char_count} characters" }
                } else {
                    p { class: "text-sm text-gray-300 line-clamp-3 whitespace-pre-line", "{text}" }
                }
            }
        }
    }
}
