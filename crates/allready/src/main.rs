use allready_core::WorkflowConfig;
use allready_io::{Footer, Header, WorkflowPanel};
use dioxus::prelude::*;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app);
}

/// Root application component.
///
/// Static page chrome around a single [`WorkflowPanel`]. All form state
/// lives inside the panel.
fn app() -> Element {
    use_hook(set_document_title);

    rsx! {
        // Tailwind CSS (compiled by build.rs, inlined for single-file deploy).
        style { dangerous_inner_html: include_str!(env!("TAILWIND_CSS_PATH")) }

        div { class: "min-h-screen bg-gray-900 flex flex-col",
            Header {}
            main { class: "flex-1 py-8 px-4 sm:px-6 lg:px-8",
                WorkflowPanel { config: WorkflowConfig::default() }
            }
            Footer {}
        }
    }
}

fn set_document_title() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::warn!("no document; leaving page title unchanged");
        return;
    };
    document.set_title("AllReady - Community Marketing Manager");
}
