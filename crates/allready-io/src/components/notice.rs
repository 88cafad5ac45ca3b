//! Dismissible toast for success and error messages.

use allready_core::Severity;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdCircleX, LdX};
use gloo_timers::future::TimeoutFuture;

/// Props for the [`TransientNotice`] component.
#[derive(Props, Clone, PartialEq)]
pub struct TransientNoticeProps {
    /// Text to show.
    message: String,
    /// Drives the colour scheme and icon.
    severity: Severity,
    /// Hide automatically after `timeout_ms`.
    #[props(default = true)]
    auto_hide: bool,
    /// Auto-hide delay in milliseconds.
    timeout_ms: u32,
    /// Called on timeout or when the close button is pressed.
    on_dismiss: EventHandler<()>,
}

/// Fixed-position toast in the top-right corner.
///
/// The auto-hide timer is a task owned by this component, so it is
/// dropped with the component and never fires against a notice that is
/// no longer shown. Render it with a `key` per notice so that replacing
/// the message also restarts the timer.
#[component]
pub fn TransientNotice(props: TransientNoticeProps) -> Element {
    let TransientNoticeProps {
        message,
        severity,
        auto_hide,
        timeout_ms,
        on_dismiss,
    } = props;

    use_hook(move || {
        if let Some(delay) = hide_delay(auto_hide, timeout_ms) {
            spawn(async move {
                TimeoutFuture::new(delay).await;
                on_dismiss.call(());
            });
        }
    });

    let (frame, text, icon_color) = match severity {
        Severity::Success => (
            "bg-green-900/90 border-green-600",
            "text-green-100",
            "text-green-400",
        ),
        Severity::Error => ("bg-red-900/90 border-red-600", "text-red-100", "text-red-400"),
    };

    let role = if severity == Severity::Error { "alert" } else { "status" };

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 max-w-sm w-full {frame} border rounded-lg shadow-lg p-4 transition-all duration-300 ease-in-out",
            role,
            div { class: "flex items-start",
                div { class: "{icon_color} mt-0.5 flex-shrink-0",
                    if severity == Severity::Success {
                        Icon { width: 20, height: 20, icon: LdCircleCheck }
                    } else {
                        Icon { width: 20, height: 20, icon: LdCircleX }
                    }
                }
                div { class: "ml-3 flex-1",
                    p { class: "text-sm font-medium {text}", "{message}" }
                }
                button {
                    r#type: "button",
                    class: "ml-4 inline-flex text-gray-300 hover:text-white focus:outline-none",
                    "aria-label": "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    Icon { width: 16, height: 16, icon: LdX }
                }
            }
        }
    }
}

/// Milliseconds until the notice hides itself, if it does at all.
///
/// A zero timeout is treated as "stay up", so a bad config cannot make
/// a notice vanish before it is painted.
const fn hide_delay(auto_hide: bool, timeout_ms: u32) -> Option<u32> {
    if auto_hide && timeout_ms > 0 {
        Some(timeout_ms)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_hide_uses_configured_timeout() {
        assert_eq!(hide_delay(true, 5000), Some(5000));
    }

    #[test]
    fn sticky_or_zero_timeout_never_hides() {
        assert_eq!(hide_delay(false, 5000), None);
        assert_eq!(hide_delay(true, 0), None);
    }
}
