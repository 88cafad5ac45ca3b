//! Product image picker: file selection, drag-and-drop, or pasted URL.

use allready_core::ImageRef;
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdLink, LdUpload, LdX};

/// Shown in place of a preview that fails to load (e.g. a dead URL).
const PLACEHOLDER_SRC: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjAwIiBoZWlnaHQ9IjIwMCIgdmlld0JveD0iMCAwIDIwMCAyMDAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSIyMDAiIGhlaWdodD0iMjAwIiBmaWxsPSIjRjNGNEY2Ii8+CjxwYXRoIGQ9Ik0xMDAgODBMMTIwIDEwMEw4MCA5MFYxMjBIMTIwVjkwTDEwMCA4MFoiIGZpbGw9IiM5Q0EzQUYiLz4KPC9zdmc+";

/// Props for the [`ImageAttachment`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImageAttachmentProps {
    /// Image currently attached to the draft.
    current: Option<ImageRef>,
    /// Largest file accepted, in bytes.
    max_bytes: usize,
    /// Suspends all controls while a request is in flight.
    #[props(default)]
    disabled: bool,
    /// Called with the new image, or `None` when it is removed.
    on_change: EventHandler<Option<ImageRef>>,
    /// Called with a user-facing message when a file is refused.
    on_reject: EventHandler<String>,
}

/// Image attachment widget.
///
/// With no image attached it shows a drop zone (which doubles as a file
/// picker) and a "Use Image URL" affordance. With an image attached it
/// shows the preview and a remove button.
#[component]
pub fn ImageAttachment(props: ImageAttachmentProps) -> Element {
    let ImageAttachmentProps {
        current,
        max_bytes,
        disabled,
        on_change,
        on_reject,
    } = props;

    let mut dragging = use_signal(|| false);
    let mut show_url_input = use_signal(|| false);
    let mut url_value = use_signal(String::new);
    // Preview source that failed to load, so it can be swapped for the
    // placeholder without touching the attached image itself.
    let mut broken_src = use_signal(|| Option::<String>::None);

    // Read, validate, and forward the first file from a list.
    //
    // Shared by the file picker and drag-and-drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        let content_type = file.content_type();
        match file.read_bytes().await {
            Ok(bytes) => match ImageRef::from_typed_file(
                &name,
                content_type.as_deref(),
                &bytes[..],
                max_bytes,
            ) {
                Ok(image) => {
                    tracing::debug!(file = %name, "image attached");
                    on_change.call(Some(image));
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "image rejected");
                    on_reject.call(capitalize(&e.to_string()));
                }
            },
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "failed to read file");
                on_reject.call(format!("Failed to read file: {e}"));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        if disabled {
            return;
        }
        process_files(evt.files()).await;
    };

    let mut submit_url = move || {
        // Blank input is ignored.
        if let Ok(image) = ImageRef::from_url(&url_value()) {
            on_change.call(Some(image));
            url_value.set(String::new());
            show_url_input.set(false);
        }
    };

    let mut cancel_url = move || {
        show_url_input.set(false);
        url_value.set(String::new());
    };

    if let Some(image) = current {
        let src = image.preview().to_owned();
        let shown = if broken_src().as_deref() == Some(src.as_str()) {
            PLACEHOLDER_SRC.to_owned()
        } else {
            src.clone()
        };
        let label = image.source_label().to_owned();

        return rsx! {
            div { class: "space-y-4",
                label { class: "block text-sm font-medium text-gray-200 mb-2", "Product Image" }
                div { class: "relative bg-gray-700 rounded-lg border-2 border-gray-600 overflow-hidden",
                    img {
                        src: "{shown}",
                        alt: "Product preview",
                        title: "{label}",
                        class: "w-full h-48 object-cover",
                        onerror: move |_| broken_src.set(Some(src.clone())),
                    }
                    button {
                        r#type: "button",
                        class: "absolute top-2 right-2 bg-red-500 hover:bg-red-600 text-white rounded-full p-1 transition-colors",
                        "aria-label": "Remove image",
                        disabled: disabled,
                        onclick: move |_| on_change.call(None),
                        Icon { width: 16, height: 16, icon: LdX }
                    }
                }
            }
        };
    }

    let limit = format_size(max_bytes);
    let border_class = if dragging() {
        "border-blue-400 bg-blue-900/20"
    } else {
        "border-gray-600 hover:border-gray-500"
    };

    rsx! {
        div { class: "space-y-4",
            label { class: "block text-sm font-medium text-gray-200 mb-2", "Product Image" }

            div {
                class: "relative border-2 border-dashed rounded-lg p-6 transition-colors {border_class}",
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| {
                    dragging.set(false);
                },
                ondrop: handle_drop,

                input {
                    r#type: "file",
                    accept: "image/*",
                    disabled: disabled,
                    class: "absolute inset-0 w-full h-full opacity-0 cursor-pointer",
                    onchange: handle_files,
                }
                div { class: "text-center text-gray-500",
                    Icon { width: 48, height: 48, class: "mx-auto", icon: LdUpload }
                    div { class: "mt-4",
                        p { class: "text-sm text-gray-300",
                            span { class: "font-medium text-blue-400 hover:text-blue-300", "Click to upload" }
                            " or drag and drop"
                        }
                        p { class: "text-xs text-gray-400 mt-1",
                            "PNG, JPG, GIF, WebP, SVG up to {limit}"
                        }
                    }
                }
            }

            div { class: "mt-4 text-center",
                span { class: "text-sm text-gray-400", "or" }
            }

            div { class: "mt-4",
                if show_url_input() {
                    div { class: "flex space-x-2",
                        input {
                            r#type: "url",
                            value: "{url_value}",
                            placeholder: "Paste image URL here...",
                            disabled: disabled,
                            class: "flex-1 px-3 py-2 border border-gray-600 bg-gray-700 text-white rounded-md shadow-sm sm:text-sm placeholder-gray-400",
                            oninput: move |e| url_value.set(e.value()),
                            onkeydown: move |e| {
                                if e.key() == Key::Enter {
                                    e.prevent_default();
                                    submit_url();
                                }
                            },
                        }
                        button {
                            r#type: "button",
                            class: "px-4 py-2 bg-blue-500 text-white text-sm font-medium rounded-md hover:bg-blue-600 transition-colors",
                            disabled: disabled,
                            onclick: move |_| submit_url(),
                            "Add"
                        }
                        button {
                            r#type: "button",
                            class: "px-4 py-2 bg-gray-600 text-gray-200 text-sm font-medium rounded-md hover:bg-gray-500 transition-colors",
                            onclick: move |_| cancel_url(),
                            "Cancel"
                        }
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "w-full flex items-center justify-center px-4 py-2 border border-gray-600 rounded-md shadow-sm text-sm font-medium text-gray-200 bg-gray-700 hover:bg-gray-600 transition-colors",
                        disabled: disabled,
                        onclick: move |_| show_url_input.set(true),
                        Icon { width: 16, height: 16, class: "mr-2", icon: LdLink }
                        "Use Image URL"
                    }
                }
            }
        }
    }
}

/// Human-readable file size limit: whole or one-decimal MB, else KB.
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    if bytes >= MB {
        let tenths = bytes.saturating_mul(10) / MB;
        if tenths % 10 == 0 {
            format!("{}MB", tenths / 10)
        } else {
            format!("{}.{}MB", tenths / 10, tenths % 10)
        }
    } else if bytes >= KB {
        format!("{}KB", bytes / KB)
    } else {
        format!("{bytes} bytes")
    }
}

/// Upper-case the first character of an error message for display.
fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(
            capitalize("unsupported file type: a.txt"),
            "Unsupported file type: a.txt"
        );
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }

    #[test]
    fn size_limits_below_one_megabyte_are_not_rounded_to_zero() {
        assert_eq!(format_size(10 * 1024 * 1024), "10MB");
        assert_eq!(format_size(1536 * 1024), "1.5MB");
        assert_eq!(format_size(512 * 1024), "512KB");
        assert_eq!(format_size(100), "100 bytes");
    }
}
