//! Home page - the link board.
//!
//! Owns every user intent coming up from cards, the scanner, and the
//! settings panel, and turns each one into a library change.

use dioxus::prelude::*;
use linkdeck_core::{normalize_url, Group, GroupId, Library, Link, LinkEdit, LinkId, LinkResult};
use linkdeck_ui::{Button, ButtonVariant, Modal};

use crate::components::{GroupSection, LinkDraft, LinkEditor, QrCodeDisplay, QrScanner, SettingsModal};
use crate::context::{commit, use_library, use_startup_notice, use_store};
use crate::drag_bridge::{drop_target, use_link_drops, LinkDrop};

/// A single intent against the library
#[derive(Debug, Clone, PartialEq)]
enum Change {
    Save(LinkDraft),
    Delete(LinkId),
    Move(LinkId, Option<GroupId>),
    AddGroup(String),
    DeleteGroup(GroupId),
    Import(Vec<Link>, Vec<Group>),
    Clear,
}

fn apply_change(library: &mut Library, change: Change) -> LinkResult<()> {
    match change {
        Change::Save(draft) => {
            let url = normalize_url(&draft.url);
            match draft.id {
                Some(id) => library.update_link(
                    &id,
                    LinkEdit {
                        url: Some(url),
                        title: Some(draft.title),
                        description: Some(draft.description),
                    },
                ),
                None => library
                    .add_link(&url, &draft.title, Some(&draft.description), draft.group_id)
                    .map(|_| ()),
            }
        }
        Change::Delete(id) => library.delete_link(&id).map(|_| ()),
        Change::Move(id, group) => library.move_link(&id, group),
        Change::AddGroup(name) => {
            if !name.trim().is_empty() {
                library.add_group(&name);
            }
            Ok(())
        }
        Change::DeleteGroup(id) => library.delete_group(&id).map(|_| ()),
        Change::Import(links, groups) => {
            library.replace(links, groups);
            Ok(())
        }
        Change::Clear => {
            library.clear();
            Ok(())
        }
    }
}

#[component]
pub fn Home() -> Element {
    let library = use_library();
    let store = use_store();

    let mut show_scanner = use_signal(|| false);
    let mut show_settings = use_signal(|| false);
    let mut editing = use_signal(|| Option::<LinkDraft>::None);
    let mut qr_link = use_signal(|| Option::<Link>::None);
    let mut new_group = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let startup = use_startup_notice();
    let mut startup_notice = use_signal(move || startup.0);

    let apply = use_callback(move |change: Change| {
        match commit(library, &store, |lib| apply_change(lib, change)) {
            Ok(()) => error.set(None),
            Err(e) => {
                tracing::warn!("Change rejected: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    });

    use_link_drops(use_callback(move |dropped: LinkDrop| {
        apply.call(Change::Move(dropped.link, dropped.group))
    }));

    let lib = library.read();
    let ungrouped: Vec<Link> = lib.links_in(None).cloned().collect();
    let groups: Vec<(Group, Vec<Link>)> = lib
        .groups
        .iter()
        .map(|g| (g.clone(), lib.links_in(Some(&g.id)).cloned().collect()))
        .collect();
    let all_links = lib.links.clone();
    let all_groups = lib.groups.clone();
    drop(lib);

    rsx! {
        main { class: "home",
            header { class: "toolbar",
                h1 { class: "app-title", "LinkDeck" }
                div { class: "toolbar__actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| editing.set(Some(LinkDraft::default())),
                        "+ Add link"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| show_scanner.set(true),
                        "Scan QR"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| show_settings.set(true),
                        "Settings"
                    }
                }
            }

            if let Some(message) = startup_notice() {
                div { class: "banner banner--error",
                    title: "Click to dismiss",
                    onclick: move |_| startup_notice.set(None),
                    "{message}"
                }
            }

            if let Some(message) = error() {
                div { class: "banner banner--error",
                    onclick: move |_| error.set(None),
                    "{message}"
                }
            }

            GroupSection {
                title: "Links".to_string(),
                links: ungrouped,
                on_edit: move |link: Link| editing.set(Some(LinkDraft::from_link(&link))),
                on_delete: move |id: LinkId| apply.call(Change::Delete(id)),
                on_show_qr: move |link: Link| qr_link.set(Some(link)),
                drop_target: drop_target(None),
            }

            for (group, links) in groups {
                GroupSection {
                    key: "{group.id}",
                    title: group.name.clone(),
                    links,
                    on_edit: move |link: Link| editing.set(Some(LinkDraft::from_link(&link))),
                    on_delete: move |id: LinkId| apply.call(Change::Delete(id)),
                    on_show_qr: move |link: Link| qr_link.set(Some(link)),
                    drop_target: drop_target(Some(&group.id)),
                    on_delete_group: move |_: ()| apply.call(Change::DeleteGroup(group.id)),
                }
            }

            form { class: "new-group",
                onsubmit: move |e| {
                    e.prevent_default();
                    apply.call(Change::AddGroup(new_group()));
                    new_group.set(String::new());
                },
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "New group name",
                    value: "{new_group}",
                    oninput: move |e| new_group.set(e.value()),
                }
                button { class: "btn-secondary", r#type: "submit", "Add group" }
            }
        }

        if let Some(draft) = editing() {
            LinkEditor {
                draft,
                on_save: move |draft: LinkDraft| {
                    apply.call(Change::Save(draft));
                    editing.set(None);
                },
                on_close: move |_| editing.set(None),
            }
        }

        if let Some(link) = qr_link() {
            Modal {
                is_open: true,
                title: link.title.clone(),
                on_close: move |_| qr_link.set(None),
                QrCodeDisplay { data: link.url.clone() }
            }
        }

        QrScanner {
            is_open: show_scanner(),
            on_close: move |_| show_scanner.set(false),
            on_scan: move |url: String| {
                tracing::info!("Scanned link: {}", url);
                editing.set(Some(LinkDraft::for_url(&normalize_url(&url))));
            },
        }

        SettingsModal {
            is_open: show_settings(),
            on_close: move |_| show_settings.set(false),
            links: all_links,
            groups: all_groups,
            on_import_data: move |(links, groups): (Vec<Link>, Vec<Group>)| apply.call(Change::Import(links, groups)),
            on_clear_data: move |_| apply.call(Change::Clear),
        }
    }
}
