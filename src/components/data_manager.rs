//! Data Manager Component
//!
//! Export, import, and clear the link library.

use dioxus::prelude::*;
use linkdeck_core::{Backup, Group, Library, Link, LinkResult};
use linkdeck_ui::{Button, ButtonVariant};
use rfd::FileDialog;

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Ok(String),
    Error(String),
}

/// Default file name offered by the export dialog
fn export_file_name() -> String {
    format!("linkdeck-{}.json", chrono::Local::now().format("%Y-%m-%d"))
}

fn export_to(path: &std::path::Path, links: Vec<Link>, groups: Vec<Group>) -> LinkResult<usize> {
    let count = links.len();
    let library = Library { links, groups };
    std::fs::write(path, Backup::from_library(&library).to_json()?)?;
    Ok(count)
}

fn import_from(path: &std::path::Path) -> LinkResult<Backup> {
    let json = std::fs::read_to_string(path)?;
    Backup::parse(&json)
}

#[component]
pub fn DataManager(
    links: Vec<Link>,
    groups: Vec<Group>,
    on_import_data: EventHandler<(Vec<Link>, Vec<Group>)>,
    on_clear_data: EventHandler<()>,
) -> Element {
    let mut status = use_signal(|| Option::<Status>::None);
    let mut confirming_clear = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let link_count = links.len();
    let group_count = groups.len();

    let handle_export = move |_| {
        let links = links.clone();
        let groups = groups.clone();
        busy.set(true);
        status.set(None);
        spawn(async move {
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name(export_file_name())
                    .set_title("Export links")
                    .save_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match export_to(&path, links, groups) {
                    Ok(count) => {
                        tracing::info!("Exported {} links to {:?}", count, path);
                        status.set(Some(Status::Ok(format!("Exported {} links", count))));
                    }
                    Err(e) => {
                        tracing::error!("Export failed: {}", e);
                        status.set(Some(Status::Error(format!("Export failed: {}", e))));
                    }
                },
                Ok(None) => {}
                Err(e) => status.set(Some(Status::Error(format!("File dialog error: {}", e)))),
            }
            busy.set(false);
        });
    };

    let handle_import = move |_| {
        busy.set(true);
        status.set(None);
        spawn(async move {
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_title("Import links")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match import_from(&path) {
                    Ok(backup) => {
                        let (links, groups) = backup.into_parts();
                        status.set(Some(Status::Ok(format!(
                            "Imported {} links and {} groups",
                            links.len(),
                            groups.len()
                        ))));
                        on_import_data.call((links, groups));
                    }
                    Err(e) => {
                        tracing::warn!("Import of {:?} failed: {}", path, e);
                        status.set(Some(Status::Error(format!("Import failed: {}", e))));
                    }
                },
                Ok(None) => {}
                Err(e) => status.set(Some(Status::Error(format!("File dialog error: {}", e)))),
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "data-manager",
            h3 { class: "section-title", "Data" }
            p { class: "data-manager__counts",
                "{link_count} links in {group_count} groups"
            }

            div { class: "data-manager__actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: busy(),
                    onclick: handle_export,
                    "Export"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: busy(),
                    onclick: handle_import,
                    "Import"
                }

                if confirming_clear() {
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| {
                            confirming_clear.set(false);
                            on_clear_data.call(());
                            status.set(Some(Status::Ok("All data cleared".to_string())));
                        },
                        "Really delete everything?"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| confirming_clear.set(false),
                        "Cancel"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: busy() || link_count + group_count == 0,
                        onclick: move |_| confirming_clear.set(true),
                        "Clear all data"
                    }
                }
            }

            match status() {
                Some(Status::Ok(message)) => rsx! { p { class: "status status--ok", "{message}" } },
                Some(Status::Error(message)) => rsx! { p { class: "status status--error", "{message}" } },
                None => rsx! {},
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_then_import_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("backup.json");
        let mut lib = Library::new();
        let g = lib.add_group("Tools");
        lib.add_link("https://a.example", "A", None, Some(g)).unwrap();

        assert_eq!(export_to(&path, lib.links.clone(), lib.groups.clone()).unwrap(), 1);
        let (links, groups) = import_from(&path).unwrap().into_parts();
        assert_eq!(links, lib.links);
        assert_eq!(groups, lib.groups);
    }

    #[test]
    fn test_export_file_name() {
        let name = export_file_name();
        assert!(name.starts_with("linkdeck-"));
        assert!(name.ends_with(".json"));
    }
}
