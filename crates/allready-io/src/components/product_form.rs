//! The product details form (workflow input stage).

use allready_core::{Action, ProductDraft};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdRotateCcw, LdSparkles};

use super::SPINNER_CLASS;
use super::image_attachment::ImageAttachment;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-600 bg-gray-700 text-white rounded-lg shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-400 focus:border-blue-400 transition-colors text-base placeholder-gray-400 disabled:opacity-60";

/// Props for the [`ProductForm`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ProductFormProps {
    /// Current field values.
    draft: ProductDraft,
    /// Caption generation is in flight.
    generating: bool,
    /// The Generate button is enabled.
    can_generate: bool,
    /// Currency label shown inside the price field.
    currency: String,
    /// Image size limit forwarded to the attachment widget.
    max_image_bytes: usize,
    /// Receives every edit and button press.
    on_action: EventHandler<Action>,
}

/// Name, price, and image fields plus Generate and Clear buttons.
///
/// Fields are controlled: the displayed values always come from the
/// draft, so the price filter applied by the workflow shows up as the
/// user types.
#[component]
pub fn ProductForm(props: ProductFormProps) -> Element {
    let ProductFormProps {
        draft,
        generating,
        can_generate,
        currency,
        max_image_bytes,
        on_action,
    } = props;

    rsx! {
        form {
            class: "space-y-6",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_action.call(Action::Generate);
            },

            div {
                label { r#for: "productName",
                    class: "block text-sm font-medium text-gray-200 mb-2",
                    "Product Name *"
                }
                input {
                    r#type: "text",
                    id: "productName",
                    class: INPUT_CLASS,
                    placeholder: "Enter product name...",
                    value: "{draft.name}",
                    disabled: generating,
                    oninput: move |e| on_action.call(Action::EditName(e.value())),
                }
            }

            div {
                label { r#for: "productPrice",
                    class: "block text-sm font-medium text-gray-200 mb-2",
                    "Product Price *"
                }
                div { class: "relative",
                    span { class: "absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 text-base",
                        "{currency}"
                    }
                    input {
                        r#type: "text",
                        id: "productPrice",
                        inputmode: "decimal",
                        class: "{INPUT_CLASS} pr-16",
                        placeholder: "0",
                        value: "{draft.price}",
                        disabled: generating,
                        oninput: move |e| on_action.call(Action::EditPrice(e.value())),
                    }
                }
            }

            ImageAttachment {
                current: draft.image.clone(),
                max_bytes: max_image_bytes,
                disabled: generating,
                on_change: move |image| on_action.call(Action::SetImage(image)),
                on_reject: move |message| on_action.call(Action::RejectImage(message)),
            }

            div { class: "flex flex-col sm:flex-row gap-3 pt-4",
                button {
                    r#type: "submit",
                    class: "flex-1 bg-blue-500 hover:bg-blue-600 disabled:bg-blue-400 text-white font-medium py-3 px-6 rounded-lg transition-colors duration-200 flex items-center justify-center min-h-[48px]",
                    disabled: !can_generate || generating,
                    if generating {
                        div { class: SPINNER_CLASS }
                        "Generating..."
                    } else {
                        Icon { width: 16, height: 16, class: "mr-2", icon: LdSparkles }
                        "Generate Captions"
                    }
                }
                button {
                    r#type: "button",
                    class: "flex-none bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700 text-gray-200 font-medium py-3 px-6 rounded-lg transition-colors duration-200 flex items-center justify-center min-h-[48px]",
                    disabled: generating,
                    onclick: move |_| on_action.call(Action::Clear),
                    Icon { width: 16, height: 16, class: "mr-2", icon: LdRotateCcw }
                    "Clear Form"
                }
            }
        }
    }
}
