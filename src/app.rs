use dioxus::prelude::*;
use linkdeck_core::{DragPayload, LibraryStore};

use crate::context::{get_data_dir, open_library};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Loads the library once, then provides it, its store, any load problem,
/// and the drag state to everything below.
#[component]
pub fn App() -> Element {
    let (store, loaded, notice) = use_hook(|| open_library(LibraryStore::new(get_data_dir())));
    let library = use_signal(move || loaded);
    let drag: Signal<Option<DragPayload>> = use_signal(|| None);

    use_context_provider(|| store);
    use_context_provider(|| library);
    use_context_provider(|| notice);
    use_context_provider(|| drag);

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
