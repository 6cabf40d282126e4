//! Link Card Component
//!
//! One saved link as a clickable tile with copy, edit, delete, and QR
//! actions.

use dioxus::prelude::*;
use linkdeck_core::{domain_of, CopyFeedback, DragPayload, FaviconState, Link, LinkId, COPIED_INDICATOR_TTL};
use linkdeck_ui::IconButton;

use crate::context::use_drag;
use crate::desktop::{open_in_browser, SystemClipboard};

/// Link Card
///
/// Clicking the tile opens the link in the browser. The action buttons stop
/// propagation so they never open the link as well. The card owns no data:
/// edits and deletes are reported upward.
///
/// Render cards with `key: "{link.id}-{link.url}"` so a URL change remounts
/// the card and retries the favicon.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkCard {
///         key: "{link.id}-{link.url}",
///         link: link.clone(),
///         on_edit: move |link| editing.set(Some(link)),
///         on_delete: move |id| delete(id),
///         on_show_qr: move |link| qr_link.set(Some(link)),
///     }
/// }
/// ```
#[component]
pub fn LinkCard(
    /// The link to show
    link: Link,
    /// Edit requested
    on_edit: EventHandler<Link>,
    /// Delete requested
    on_delete: EventHandler<LinkId>,
    /// QR code requested
    on_show_qr: EventHandler<Link>,
    /// Dim the card while it is being dragged
    #[props(default = false)]
    is_dragging: bool,
) -> Element {
    let mut feedback = use_signal(CopyFeedback::new);
    let mut favicon = use_signal(|| FaviconState::new(&link.url));
    let mut drag = use_drag();

    let domain = domain_of(&link.url);
    let id = link.id;

    let open_link = {
        let url = link.url.clone();
        move |_| open_in_browser(&url)
    };

    let handle_copy = {
        let url = link.url.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            if feedback.write().copy(&mut SystemClipboard, &url) {
                spawn(async move {
                    tokio::time::sleep(COPIED_INDICATOR_TTL).await;
                    feedback.write().clear_expired();
                });
            }
        }
    };

    let handle_show_qr = {
        let link = link.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            on_show_qr.call(link.clone());
        }
    };

    let handle_edit = {
        let link = link.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            on_edit.call(link.clone());
        }
    };

    let handle_delete = move |evt: MouseEvent| {
        evt.stop_propagation();
        on_delete.call(id);
    };

    let payload = DragPayload::Link { id }.to_json();
    let copied = feedback.read().is_copied();
    let dragging_class = if is_dragging { "dragging" } else { "" };

    rsx! {
        div {
            class: "link-card {dragging_class}",
            draggable: "true",
            "data-drag-payload": "{payload}",
            onclick: open_link,
            ondragstart: move |_| drag.set(Some(DragPayload::Link { id })),
            ondragend: move |_| drag.set(None),

            div { class: "link-card__top",
                div { class: "link-card__identity",
                    div { class: "link-card__favicon",
                        if let Some(src) = favicon.read().src().map(str::to_string) {
                            img {
                                src: "{src}",
                                alt: "{domain} favicon",
                                onerror: move |_| favicon.write().mark_failed(),
                                onload: move |_| favicon.write().mark_loaded(),
                            }
                        } else {
                            span { class: "link-card__glyph", "\u{2197}" }
                        }
                    }

                    IconButton {
                        onclick: handle_show_qr,
                        aria_label: "Show QR code".to_string(),
                        class: "qr-btn".to_string(),
                        "\u{25A6}"
                    }
                }

                div { class: "link-card__actions",
                    IconButton {
                        onclick: handle_copy,
                        aria_label: "Copy link".to_string(),
                        class: if copied { "copied".to_string() } else { String::new() },
                        if copied { "\u{2713}" } else { "\u{2398}" }
                    }
                    IconButton {
                        onclick: handle_edit,
                        aria_label: "Edit link".to_string(),
                        "\u{270E}"
                    }
                    IconButton {
                        onclick: handle_delete,
                        aria_label: "Delete link".to_string(),
                        class: "danger".to_string(),
                        "\u{2715}"
                    }
                }
            }

            div { class: "link-card__body",
                h3 { class: "link-card__title", "{link.title}" }
                if let Some(description) = &link.description {
                    p { class: "link-card__description", "{description}" }
                }
                p { class: "link-card__domain", "{domain}" }
            }
        }
    }
}
