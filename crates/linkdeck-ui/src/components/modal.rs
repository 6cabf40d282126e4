//! Modal shell
//!
//! Backdrop plus a titled panel. Clicking the backdrop or the close button
//! calls `on_close`; clicks inside the panel never reach the backdrop.

use dioxus::prelude::*;

use super::button::{class_list, CloseButton};

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    /// Whether the modal is rendered at all
    pub is_open: bool,
    /// Heading shown in the panel header
    pub title: String,
    /// Called on backdrop click or close button
    pub on_close: EventHandler<()>,
    /// Panel body
    pub children: Element,
    /// Optional additional CSS classes for the panel
    #[props(default)]
    pub class: Option<String>,
}

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         is_open: show(),
///         title: "Settings".to_string(),
///         on_close: move |_| show.set(false),
///         p { "body" }
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.is_open {
        return rsx! {};
    }

    let panel_class = class_list("modal-panel", props.class.as_deref());
    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "{panel_class}",
                onclick: move |e| e.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { class: "modal-body", {props.children} }
            }
        }
    }
}
