//! QR Scanner Component
//!
//! Camera overlay that reads a QR code and hands back the URL it contains.

use dioxus::prelude::*;
use linkdeck_core::scanner::{
    scan_channel, ScanExit, ScanOptions, ScanSession, ScanSnapshot, ScanState,
};

use crate::camera::{WebviewCamera, OUTLINE_CANVAS_ID, VIDEO_ELEMENT_ID};

/// QR Scanner
///
/// Mounting the dialog opens a scan session; hiding it (or unmounting the
/// parent) drops the session, which releases the camera.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     QrScanner {
///         is_open: show_scanner(),
///         on_close: move |_| show_scanner.set(false),
///         on_scan: move |url| add_scanned(url),
///     }
/// }
/// ```
#[component]
pub fn QrScanner(
    /// Whether the scanner is visible
    is_open: bool,
    /// Called after the session has been torn down
    on_close: EventHandler<()>,
    /// Called with the raw decoded text when it looks like a URL
    on_scan: EventHandler<String>,
    /// Camera choice, scan rate, and overlay highlights
    #[props(default)]
    options: ScanOptions,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        ScannerDialog { on_close, on_scan, options }
    }
}

#[component]
fn ScannerDialog(
    on_close: EventHandler<()>,
    on_scan: EventHandler<String>,
    options: ScanOptions,
) -> Element {
    let mut snapshot = use_signal(ScanSnapshot::default);

    // One session per mount; the task (and the session it owns) is dropped
    // with this component
    let controller = use_hook(move || {
        let (controller, mut commands) = scan_channel();
        spawn(async move {
            let mut session = ScanSession::with_options(WebviewCamera::new(), options);
            let exit = session
                .run(&mut commands, move |snap| snapshot.set(snap))
                .await;
            drop(session);

            if let ScanExit::Scanned(url) = exit {
                on_scan.call(url);
            }
            on_close.call(());
        });
        controller
    });

    let close = {
        let controller = controller.clone();
        move |_| controller.close()
    };
    let close_button = {
        let controller = controller.clone();
        move |_| controller.close()
    };
    let toggle_flash = {
        let controller = controller.clone();
        move |_| controller.toggle_flash()
    };

    let snap = snapshot();
    let show_preview = !matches!(snap.state, ScanState::NoCamera);
    let flash_class = if snap.flash_on { "flash-btn on" } else { "flash-btn" };
    let flash_title = if snap.flash_on { "Turn flash off" } else { "Turn flash on" };

    rsx! {
        div { class: "scanner-overlay",
            div { class: "scanner-backdrop", onclick: close }

            div { class: "scanner-panel",
                header { class: "scanner-header",
                    h2 { class: "scanner-title", "Scan QR code" }
                    button {
                        class: "icon-btn close-btn",
                        "aria-label": "Close scanner",
                        onclick: close_button,
                        "\u{00D7}"
                    }
                }

                div { class: "scanner-stage",
                    if show_preview {
                        video {
                            id: VIDEO_ELEMENT_ID,
                            class: "scanner-video",
                            autoplay: true,
                            muted: true,
                            "playsinline": "true",
                        }
                        canvas { id: OUTLINE_CANVAS_ID, class: "scanner-outline" }

                        if snap.scan_region {
                            div { class: "scanner-frame",
                                span { class: "corner tl" }
                                span { class: "corner tr" }
                                span { class: "corner bl" }
                                span { class: "corner br" }
                                if snap.scanning {
                                    div { class: "scan-line" }
                                }
                            }
                        }

                        button {
                            class: "{flash_class}",
                            title: "{flash_title}",
                            disabled: snap.state != ScanState::Scanning,
                            onclick: toggle_flash,
                            "\u{26A1}"
                        }
                    } else {
                        div { class: "scanner-no-camera",
                            p { class: "scanner-no-camera__title", "Camera not available" }
                            p { class: "scanner-no-camera__hint", "Check camera permissions" }
                        }
                    }
                }

                div { class: "scanner-footer",
                    if let Some(message) = snap.banner() {
                        div { class: "banner banner--error", "{message}" }
                    } else {
                        div { class: "banner banner--info",
                            "Point the camera at a QR code that contains a URL"
                        }
                    }

                    if snap.scanning {
                        div { class: "scanner-status",
                            span { class: "pulse-dot" }
                            "Scanning..."
                        }
                    }
                }
            }
        }
    }
}
