//! Settings Modal Component

use dioxus::prelude::*;
use linkdeck_core::{Group, Link};
use linkdeck_ui::Modal;

use super::data_manager::DataManager;

/// Settings
///
/// Hosts the data manager and a short note on keeping data safe.
#[component]
pub fn SettingsModal(
    is_open: bool,
    on_close: EventHandler<()>,
    links: Vec<Link>,
    groups: Vec<Group>,
    /// Replace the library with imported data
    on_import_data: EventHandler<(Vec<Link>, Vec<Group>)>,
    /// Delete every link and group
    on_clear_data: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            is_open,
            title: "Settings".to_string(),
            on_close,

            div { class: "settings-body",
                DataManager { links, groups, on_import_data, on_clear_data }

                div { class: "settings-help",
                    h4 { "Keeping your links safe" }
                    ul {
                        li { "Export your data regularly as a backup" }
                        li { "Everything is stored locally on this computer" }
                        li { "Import a backup to restore or move your links" }
                    }
                }
            }
        }
    }
}
