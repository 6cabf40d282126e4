//! Link Editor Component
//!
//! Modal form for adding a link or changing an existing one.

use dioxus::prelude::*;
use linkdeck_core::{domain_of, GroupId, Link, LinkId};
use linkdeck_ui::{Button, ButtonVariant, Modal};

/// Form contents handed in and out of the editor
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkDraft {
    /// Link being edited; None when adding
    pub id: Option<LinkId>,
    pub url: String,
    pub title: String,
    pub description: String,
    pub group_id: Option<GroupId>,
}

impl LinkDraft {
    /// Draft for a freshly scanned or typed URL, titled after its domain
    pub fn for_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: domain_of(url),
            ..Default::default()
        }
    }

    pub fn from_link(link: &Link) -> Self {
        Self {
            id: Some(link.id),
            url: link.url.clone(),
            title: link.title.clone(),
            description: link.description.clone().unwrap_or_default(),
            group_id: link.group_id,
        }
    }

    /// Error to show for this draft, if it cannot be saved
    pub fn validate(&self) -> Option<&'static str> {
        if self.url.trim().is_empty() {
            Some("URL is required")
        } else {
            None
        }
    }
}

#[component]
pub fn LinkEditor(
    /// Initial form contents
    draft: LinkDraft,
    on_save: EventHandler<LinkDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let is_new = draft.id.is_none();
    let mut form = use_signal(|| draft.clone());
    let mut error = use_signal(|| Option::<&'static str>::None);

    let submit = move |_| {
        let current = form();
        match current.validate() {
            Some(message) => error.set(Some(message)),
            None => on_save.call(current),
        }
    };

    rsx! {
        Modal {
            is_open: true,
            title: if is_new { "Add link".to_string() } else { "Edit link".to_string() },
            on_close,

            form { class: "link-editor",
                onsubmit: move |e| e.prevent_default(),

                label { "URL" }
                input {
                    class: if error().is_some() { "field invalid" } else { "field" },
                    r#type: "text",
                    value: "{form.read().url}",
                    placeholder: "https://",
                    autofocus: true,
                    oninput: move |e| {
                        form.write().url = e.value();
                        error.set(None);
                    },
                }

                label { "Title" }
                input {
                    class: "field",
                    r#type: "text",
                    value: "{form.read().title}",
                    oninput: move |e| form.write().title = e.value(),
                }

                label { "Description" }
                input {
                    class: "field",
                    r#type: "text",
                    value: "{form.read().description}",
                    placeholder: "optional",
                    oninput: move |e| form.write().description = e.value(),
                }

                if let Some(message) = error() {
                    p { class: "error-text", "{message}" }
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: submit,
                        if is_new { "Save link" } else { "Save changes" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
