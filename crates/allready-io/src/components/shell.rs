//! Static page header and footer.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdMessageSquare;

/// Sticky header with the brand mark.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 shadow-sm",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-16",
                    div { class: "flex items-center space-x-3",
                        div { class: "bg-blue-500 p-2 rounded-lg text-white",
                            Icon { width: 24, height: 24, icon: LdMessageSquare }
                        }
                        h1 { class: "text-xl font-bold text-white", "AllReady" }
                    }
                    div { class: "hidden sm:block",
                        span { class: "text-sm text-gray-300", "Community Marketing Manager" }
                    }
                }
            }
        }
    }
}

/// Footer with the copyright line.
#[component]
pub fn Footer() -> Element {
    let year = use_hook(|| js_sys::Date::new_0().get_full_year());

    rsx! {
        footer { class: "bg-gray-800 border-t border-gray-700 mt-12",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6",
                div { class: "text-center",
                    p { class: "text-sm text-gray-300", "© {year} AllReady. All rights reserved." }
                    p { class: "text-xs text-gray-400 mt-1", "Community Marketing Manager" }
                }
            }
        }
    }
}
