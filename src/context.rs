//! Shared state for LinkDeck components.
//!
//! The library signal is the single owner of links and groups. Components
//! below the app root read it and go through [`commit`] to change it, so
//! every mutation is written to disk.

use std::path::PathBuf;

use dioxus::prelude::*;
use linkdeck_core::{DragPayload, Library, LibraryStore, LinkResult, Recovered};

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Problem found while loading the data file, shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupNotice(pub Option<String>);

/// Load the library behind `store`.
///
/// An unparseable file has already been moved aside by the store. A file
/// that cannot be read at all stays where it is and the returned store
/// refuses to save, so nothing overwrites it.
pub fn open_library(store: LibraryStore) -> (LibraryStore, Library, StartupNotice) {
    match store.load_or_recover() {
        Ok(Recovered {
            library,
            moved_to: None,
        }) => (store, library, StartupNotice(None)),
        Ok(Recovered {
            library,
            moved_to: Some(path),
        }) => {
            let notice = format!(
                "The library file could not be read and was moved to {}. Starting with an empty library.",
                path.display()
            );
            (store, library, StartupNotice(Some(notice)))
        }
        Err(e) => {
            tracing::error!("Failed to load library from {:?}: {}", store.path(), e);
            let notice = format!(
                "Could not load {}: {}. Changes will not be saved.",
                store.path().display(),
                e
            );
            (store.read_only(), Library::new(), StartupNotice(Some(notice)))
        }
    }
}

/// Hook to access the load problem, if any
pub fn use_startup_notice() -> StartupNotice {
    use_context::<StartupNotice>()
}

/// Hook to access the library signal
pub fn use_library() -> Signal<Library> {
    use_context::<Signal<Library>>()
}

/// Hook to access the data file
pub fn use_store() -> LibraryStore {
    use_context::<LibraryStore>()
}

/// Hook to access the payload of the card currently being dragged
pub fn use_drag() -> Signal<Option<DragPayload>> {
    use_context::<Signal<Option<DragPayload>>>()
}

/// Apply `change` to the library and persist the result.
///
/// A failed change leaves both the signal and the file untouched. A failed
/// save keeps the in-memory change and is logged.
pub fn commit<T>(
    mut library: Signal<Library>,
    store: &LibraryStore,
    change: impl FnOnce(&mut Library) -> LinkResult<T>,
) -> LinkResult<T> {
    let mut draft = library.peek().clone();
    let value = change(&mut draft)?;
    if let Err(e) = store.save(&draft) {
        tracing::error!("Failed to save library to {:?}: {}", store.path(), e);
    }
    library.set(draft);
    Ok(value)
}
