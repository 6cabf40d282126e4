//! Group Section Component
//!
//! A heading plus a grid of link cards. Each section is a drop target for
//! dragged cards; the drop itself is reported through the drag bridge.

use dioxus::prelude::*;
use linkdeck_core::{DragPayload, Link, LinkId};

use super::link_card::LinkCard;
use crate::context::use_drag;

#[component]
pub fn GroupSection(
    /// Heading text
    title: String,
    links: Vec<Link>,
    on_edit: EventHandler<Link>,
    on_delete: EventHandler<LinkId>,
    on_show_qr: EventHandler<Link>,
    /// `data-drop-target` value identifying this section
    drop_target: String,
    /// Optional delete action for the group itself
    #[props(default = None)]
    on_delete_group: Option<EventHandler<()>>,
) -> Element {
    let mut drag = use_drag();
    let mut drop_hover = use_signal(|| false);

    let dragged = match drag() {
        Some(DragPayload::Link { id }) => Some(id),
        None => None,
    };
    let hover_class = if drop_hover() && dragged.is_some() { "drop-hover" } else { "" };
    let count = links.len();

    rsx! {
        section {
            class: "group-section {hover_class}",
            "data-drop-target": "{drop_target}",
            ondragover: move |e| {
                e.prevent_default();
                drop_hover.set(true);
            },
            ondragleave: move |_| drop_hover.set(false),
            ondrop: move |e| {
                e.prevent_default();
                drop_hover.set(false);
                drag.set(None);
            },

            header { class: "group-section__header",
                h2 { class: "group-section__title", "{title}" }
                span { class: "group-section__count", "{count}" }
                if let Some(handler) = on_delete_group {
                    button {
                        class: "icon-btn danger",
                        title: "Delete group (links are kept)",
                        onclick: move |_| handler.call(()),
                        "\u{2715}"
                    }
                }
            }

            if links.is_empty() {
                p { class: "group-section__empty", "Drop links here" }
            } else {
                div { class: "link-grid",
                    for link in links {
                        LinkCard {
                            key: "{link.id}-{link.url}",
                            is_dragging: dragged == Some(link.id),
                            link: link.clone(),
                            on_edit,
                            on_delete,
                            on_show_qr,
                        }
                    }
                }
            }
        }
    }
}
