//! Native drag-and-drop between link cards and group sections.
//!
//! Cards carry their serialized [`DragPayload`] in a `data-drag-payload`
//! attribute and sections name themselves in `data-drop-target`. A
//! document-level script copies the payload onto the native event's
//! `dataTransfer` on drag start and, on drop over a section, posts the
//! transferred payload and the section back here.

use dioxus::prelude::*;
use linkdeck_core::{DragPayload, GroupId, LinkId};
use serde::Deserialize;

/// MIME type the payload travels under
pub const DRAG_MIME: &str = "application/json";

/// `data-drop-target` value of the ungrouped section
pub const UNGROUPED_TARGET: &str = "ungrouped";

const BRIDGE_JS: &str = r#"
const mime = "{{MIME}}";
const previous = window.__linkdeckDragBridge;
if (previous) {
    document.removeEventListener("dragstart", previous.start, true);
    document.removeEventListener("dragover", previous.over, true);
    document.removeEventListener("drop", previous.drop, true);
}

const closest = (e, selector) => (e.target && e.target.closest ? e.target.closest(selector) : null);
const bridge = {
    start(e) {
        const card = closest(e, "[data-drag-payload]");
        if (!card || !e.dataTransfer) { return; }
        e.dataTransfer.setData(mime, card.dataset.dragPayload);
        e.dataTransfer.effectAllowed = "move";
    },
    over(e) {
        if (closest(e, "[data-drop-target]")) { e.preventDefault(); }
    },
    drop(e) {
        const section = closest(e, "[data-drop-target]");
        if (!section || !e.dataTransfer) { return; }
        e.preventDefault();
        const payload = e.dataTransfer.getData(mime);
        if (payload) { dioxus.send({ target: section.dataset.dropTarget, payload }); }
    },
};
document.addEventListener("dragstart", bridge.start, true);
document.addEventListener("dragover", bridge.over, true);
document.addEventListener("drop", bridge.drop, true);
window.__linkdeckDragBridge = bridge;

while (true) { await dioxus.recv(); }
"#;

#[derive(Debug, Deserialize)]
struct DropMessage {
    target: String,
    payload: String,
}

/// A card dropped onto a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDrop {
    pub link: LinkId,
    /// `None` for the ungrouped section
    pub group: Option<GroupId>,
}

/// `data-drop-target` value for a section
pub fn drop_target(group: Option<&GroupId>) -> String {
    match group {
        Some(id) => id.to_string(),
        None => UNGROUPED_TARGET.to_string(),
    }
}

/// Interpret one transferred payload. Foreign drags (files, text from
/// other apps) and unknown sections yield `None`.
fn parse_drop(target: &str, payload: &str) -> Option<LinkDrop> {
    let DragPayload::Link { id } = DragPayload::from_json(payload)?;
    let group = match target {
        UNGROUPED_TARGET => None,
        other => Some(other.parse::<GroupId>().ok()?),
    };
    Some(LinkDrop { link: id, group })
}

/// Install the document listeners and call `on_drop` for every card
/// dropped on a section. The listeners live as long as the calling
/// component.
pub fn use_link_drops(on_drop: Callback<LinkDrop>) {
    use_hook(move || {
        spawn(async move {
            let mut eval = document::eval(&BRIDGE_JS.replace("{{MIME}}", DRAG_MIME));
            while let Ok(message) = eval.recv::<DropMessage>().await {
                match parse_drop(&message.target, &message.payload) {
                    Some(drop) => on_drop.call(drop),
                    None => tracing::debug!(
                        section = %message.target,
                        "ignoring drop that is not a link card"
                    ),
                }
            }
            tracing::debug!("Drag bridge finished");
        });
    });
}
