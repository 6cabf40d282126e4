//! QR code renderer for sharing a saved link.

use base64::Engine;
use dioxus::prelude::*;

/// Generate an SVG data URL for `data`, or None if it does not fit in a QR code
pub fn generate_qr_data_url(data: &str) -> Option<String> {
    use qrcode::render::svg;
    use qrcode::QrCode;

    let code = QrCode::new(data.as_bytes()).ok()?;

    // SVG for crisp scaling; dark modules on a light field so phone cameras
    // pick it up off a dark UI
    let svg_string = code
        .render()
        .min_dimensions(240, 240)
        .dark_color(svg::Color("#101418"))
        .light_color(svg::Color("#f7f4ea"))
        .build();

    let encoded = base64::engine::general_purpose::STANDARD.encode(svg_string.as_bytes());
    Some(format!("data:image/svg+xml;base64,{}", encoded))
}

/// QR code display component.
///
/// Falls back to displaying the raw text if QR generation fails.
#[component]
pub fn QrCodeDisplay(
    /// The data to encode as a QR code
    data: String,
    /// Optional size in pixels
    #[props(default = 240)]
    size: u32,
) -> Element {
    let qr_url = use_memo({
        let data = data.clone();
        move || generate_qr_data_url(&data)
    });

    match qr_url() {
        Some(url) => rsx! {
            div { class: "qr-code-container",
                img {
                    class: "qr-code-image",
                    src: "{url}",
                    alt: "QR code for {data}",
                    width: "{size}",
                    height: "{size}",
                }
                code { class: "qr-code-caption", "{data}" }
            }
        },
        None => rsx! {
            div { class: "qr-code-fallback",
                p { "This link is too long for a QR code" }
                code { "{data}" }
            }
        },
    }
}
