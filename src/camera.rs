//! Camera capture inside the webview, QR decoding in Rust.
//!
//! The webview owns the media stream: a script started with
//! `document::eval` attaches `getUserMedia` to the scanner's `<video>`
//! element and posts downscaled greyscale frames back at the configured
//! rate. Each frame is searched for QR grids with rqrr; hits go to the
//! session's [`DecodeSink`] and, when enabled, their corners go back to the
//! page to be outlined.

use base64::Engine;
use dioxus::prelude::*;
use linkdeck_core::scanner::{DecodeSink, ScanEngine, ScanOptions};
use linkdeck_core::ScanError;
use serde::{Deserialize, Serialize};

/// DOM id of the preview element rendered by the scanner dialog
pub const VIDEO_ELEMENT_ID: &str = "linkdeck-scanner-video";

/// DOM id of the canvas the code outline is drawn on
pub const OUTLINE_CANVAS_ID: &str = "linkdeck-scanner-outline";

/// Frames are downscaled so the longer side is at most this many pixels
const FRAME_MAX_SIDE: u32 = 640;

const HAS_CAMERA_JS: &str = r#"
if (!navigator.mediaDevices || !navigator.mediaDevices.enumerateDevices) {
    return false;
}
const devices = await navigator.mediaDevices.enumerateDevices();
return devices.some((d) => d.kind === "videoinput");
"#;

const STOP_JS: &str = r#"
const scan = window.__linkdeckScan;
if (scan) { scan.stop(); } else { window.__linkdeckScanCancelled = true; }
const stream = window.__linkdeckStream;
if (stream) { stream.getTracks().forEach((t) => t.stop()); }
window.__linkdeckStream = undefined;
return true;
"#;

const DESTROY_JS: &str = r#"
const scan = window.__linkdeckScan;
if (scan) { scan.destroy(); }
window.__linkdeckScan = undefined;
return true;
"#;

/// Capture loop installed in the page. `{{...}}` placeholders are filled in
/// by [`start_script`].
const START_JS: &str = r#"
const videoId = "{{VIDEO_ID}}";
const outlineId = "{{OUTLINE_ID}}";
const facingMode = "{{FACING}}";
const intervalMs = {{INTERVAL_MS}};
const maxSide = {{MAX_SIDE}};
window.__linkdeckScanCancelled = false;

let video = null;
for (let i = 0; i < 50 && !video; i++) {
    video = document.getElementById(videoId);
    if (!video) { await new Promise((r) => setTimeout(r, 20)); }
}
if (!video) {
    dioxus.send({ kind: "error", name: "NotFoundError", message: "preview element missing" });
    return;
}

let stream;
try {
    stream = await navigator.mediaDevices.getUserMedia({
        video: { facingMode: { ideal: facingMode } },
        audio: false,
    });
} catch (err) {
    dioxus.send({ kind: "error", name: err.name || "Error", message: String(err.message || err) });
    return;
}
// Stopped while the permission prompt was up
if (window.__linkdeckScanCancelled) {
    stream.getTracks().forEach((t) => t.stop());
    return;
}

// Reachable from STOP_JS even if setup below fails
window.__linkdeckStream = stream;
const release = () => {
    stream.getTracks().forEach((t) => t.stop());
    video.srcObject = null;
    if (window.__linkdeckStream === stream) { window.__linkdeckStream = undefined; }
};

let timer = null;
let scale = 1;
let track;
try {
    video.srcObject = stream;
    video.setAttribute("playsinline", "");
    video.muted = true;
    await video.play();
    if (window.__linkdeckScanCancelled) {
        release();
        return;
    }

    const canvas = document.createElement("canvas");
    const ctx = canvas.getContext("2d", { willReadFrequently: true });

    timer = setInterval(() => {
        if (!video.videoWidth) { return; }
        scale = Math.min(1, maxSide / Math.max(video.videoWidth, video.videoHeight));
        const w = Math.round(video.videoWidth * scale);
        const h = Math.round(video.videoHeight * scale);
        canvas.width = w;
        canvas.height = h;
        ctx.drawImage(video, 0, 0, w, h);
        const rgba = ctx.getImageData(0, 0, w, h).data;
        let luma = "";
        for (let i = 0; i < rgba.length; i += 4) {
            luma += String.fromCharCode((rgba[i] * 77 + rgba[i + 1] * 150 + rgba[i + 2] * 29) >> 8);
        }
        dioxus.send({ kind: "frame", width: w, height: h, luma: btoa(luma) });
    }, intervalMs);

    track = stream.getVideoTracks()[0];
} catch (err) {
    if (timer !== null) { clearInterval(timer); }
    release();
    dioxus.send({ kind: "error", name: err.name || "Error", message: String(err.message || err) });
    return;
}

window.__linkdeckScan = {
    stop() {
        clearInterval(timer);
        release();
    },
    destroy() {
        const outline = document.getElementById(outlineId);
        if (outline) { outline.getContext("2d").clearRect(0, 0, outline.width, outline.height); }
    },
    async torch(on) {
        await track.applyConstraints({ advanced: [{ torch: on }] });
    },
};

dioxus.send({ kind: "started" });

while (true) {
    const corners = await dioxus.recv();
    const outline = document.getElementById(outlineId);
    if (!outline || !video.videoWidth) { continue; }
    outline.width = outline.clientWidth;
    outline.height = outline.clientHeight;
    const sx = outline.width / (video.videoWidth * scale);
    const sy = outline.height / (video.videoHeight * scale);
    const g = outline.getContext("2d");
    g.clearRect(0, 0, outline.width, outline.height);
    g.strokeStyle = "#e9b949";
    g.lineWidth = 4;
    g.beginPath();
    corners.forEach(([x, y], i) => (i ? g.lineTo(x * sx, y * sy) : g.moveTo(x * sx, y * sy)));
    g.closePath();
    g.stroke();
}
"#;

fn start_script(options: &ScanOptions) -> String {
    START_JS
        .replace("{{VIDEO_ID}}", VIDEO_ELEMENT_ID)
        .replace("{{OUTLINE_ID}}", OUTLINE_CANVAS_ID)
        .replace("{{FACING}}", options.preferred_camera.as_constraint())
        .replace(
            "{{INTERVAL_MS}}",
            &options.scan_interval().as_millis().to_string(),
        )
        .replace("{{MAX_SIDE}}", &FRAME_MAX_SIDE.to_string())
}

/// Messages posted by the capture script
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum CameraMessage {
    Started,
    Error { name: String, message: String },
    Frame { width: usize, height: usize, luma: String },
}

/// A QR code found in a frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundCode {
    pub text: String,
    /// Corner points in frame pixels, clockwise from top-left
    pub corners: [(i32, i32); 4],
}

/// Search one greyscale frame (row-major, one byte per pixel) for a QR code
pub fn decode_luma(width: usize, height: usize, luma: &[u8]) -> Option<FoundCode> {
    if width == 0 || height == 0 || luma.len() < width * height {
        return None;
    }
    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| luma[y * width + x]);
    prepared.detect_grids().into_iter().find_map(|grid| {
        let corners = grid.bounds.map(|p| (p.x, p.y));
        match grid.decode() {
            Ok((_, text)) => Some(FoundCode { text, corners }),
            Err(e) => {
                tracing::trace!("grid found but not decodable: {:?}", e);
                None
            }
        }
    })
}

fn acquisition_error(name: &str, message: &str) -> ScanError {
    match name {
        "NotFoundError" | "OverconstrainedError" => ScanError::CameraUnavailable,
        _ => ScanError::Acquisition(format!("{name}: {message}")),
    }
}

/// [`ScanEngine`] backed by the webview's media devices
#[derive(Default)]
pub struct WebviewCamera {
    frames: Option<Task>,
}

impl WebviewCamera {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScanEngine for WebviewCamera {
    async fn has_camera(&mut self) -> bool {
        match document::eval(HAS_CAMERA_JS).join::<bool>().await {
            Ok(present) => present,
            Err(e) => {
                tracing::warn!("Camera probe failed: {:?}", e);
                false
            }
        }
    }

    async fn start(&mut self, options: &ScanOptions, sink: DecodeSink) -> Result<(), ScanError> {
        let mut eval = document::eval(&start_script(options));

        match eval.recv::<CameraMessage>().await {
            Ok(CameraMessage::Started) => {}
            Ok(CameraMessage::Error { name, message }) => {
                return Err(acquisition_error(&name, &message));
            }
            Ok(CameraMessage::Frame { .. }) => {
                return Err(ScanError::Acquisition("frame before start".to_string()));
            }
            Err(e) => return Err(ScanError::Acquisition(format!("{:?}", e))),
        }

        let outline = options.highlight_code_outline;
        self.frames = Some(spawn(async move {
            while let Ok(message) = eval.recv::<CameraMessage>().await {
                let CameraMessage::Frame { width, height, luma } = message else {
                    continue;
                };
                let luma = match base64::engine::general_purpose::STANDARD.decode(luma) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        tracing::debug!("Dropping malformed frame: {}", e);
                        continue;
                    }
                };
                if let Some(found) = decode_luma(width, height, &luma) {
                    if outline {
                        let _ = eval.send(found.corners);
                    }
                    if !sink.deliver(found.text) {
                        break;
                    }
                }
            }
            tracing::debug!("Frame loop finished");
        }));
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(task) = self.frames.take() {
            task.cancel();
        }
        let _ = document::eval(STOP_JS);
    }

    fn destroy(&mut self) {
        let _ = document::eval(DESTROY_JS);
    }

    async fn set_flash(&mut self, on: bool) -> Result<(), ScanError> {
        let script = format!(
            r#"
            const scan = window.__linkdeckScan;
            if (!scan) {{ return "not started"; }}
            try {{ await scan.torch({on}); return ""; }}
            catch (err) {{ return String(err.message || err); }}
            "#
        );
        match document::eval(&script).join::<String>().await {
            Ok(reason) if reason.is_empty() => Ok(()),
            Ok(reason) if reason == "not started" => Err(ScanError::NotStarted),
            Ok(reason) => Err(ScanError::FlashUnsupported(reason)),
            Err(e) => Err(ScanError::FlashUnsupported(format!("{:?}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdeck_core::scanner::CameraFacing;

    /// Render `text` as a QR code into a greyscale frame
    fn qr_frame(text: &str, scale: usize) -> (usize, Vec<u8>) {
        let code = qrcode::QrCode::new(text.as_bytes()).unwrap();
        let modules = code.width();
        let colors = code.to_colors();
        let quiet = 4;
        let side = (modules + quiet * 2) * scale;
        let mut luma = vec![255u8; side * side];
        for y in 0..side {
            for x in 0..side {
                let (mx, my) = (x / scale, y / scale);
                if mx < quiet || my < quiet || mx >= modules + quiet || my >= modules + quiet {
                    continue;
                }
                if colors[(my - quiet) * modules + (mx - quiet)] == qrcode::Color::Dark {
                    luma[y * side + x] = 0;
                }
            }
        }
        (side, luma)
    }

    #[test]
    fn test_decode_rendered_code() {
        let (side, luma) = qr_frame("https://example.com/page", 6);
        let found = decode_luma(side, side, &luma).expect("code should decode");
        assert_eq!(found.text, "https://example.com/page");
    }

    #[test]
    fn test_blank_frame_has_no_code() {
        let luma = vec![255u8; 64 * 48];
        assert_eq!(decode_luma(64, 48, &luma), None);
    }

    #[test]
    fn test_short_frame_is_rejected() {
        assert_eq!(decode_luma(10, 10, &[0u8; 20]), None);
        assert_eq!(decode_luma(0, 10, &[]), None);
    }

    #[test]
    fn test_start_script_placeholders_filled() {
        let script = start_script(&ScanOptions {
            preferred_camera: CameraFacing::User,
            ..Default::default()
        });
        assert!(!script.contains("{{"));
        assert!(script.contains(r#"const facingMode = "user";"#));
        assert!(script.contains("const intervalMs = 200;"));
    }

    #[test]
    fn test_stream_reachable_before_playback() {
        let script = start_script(&ScanOptions::default());
        let published = script.find("window.__linkdeckStream = stream;").unwrap();
        let playing = script.find("await video.play();").unwrap();
        assert!(published < playing);
    }

    #[test]
    fn test_setup_failure_releases_stream() {
        let script = start_script(&ScanOptions::default());
        let playing = script.find("await video.play();").unwrap();
        let started = script.find(r#"dioxus.send({ kind: "started" });"#).unwrap();
        let setup = &script[playing..started];
        let handler = setup.find("} catch (err) {").expect("setup is guarded");
        let released = setup[handler..].find("release();").expect("stream released");
        let reported = setup[handler..].find(r#"kind: "error""#).unwrap();
        assert!(released < reported);
    }

    #[test]
    fn test_stop_releases_stream_without_capture_loop() {
        assert!(STOP_JS.contains("window.__linkdeckStream"));
        assert!(STOP_JS.contains("stream.getTracks().forEach((t) => t.stop());"));
    }

    #[test]
    fn test_acquisition_error_mapping() {
        assert_eq!(acquisition_error("NotFoundError", "none"), ScanError::CameraUnavailable);
        assert!(matches!(
            acquisition_error("NotAllowedError", "denied"),
            ScanError::Acquisition(_)
        ));
    }

    #[test]
    fn test_camera_message_parsing() {
        let msg: CameraMessage =
            serde_json::from_str(r#"{"kind":"frame","width":2,"height":1,"luma":"AP8="}"#).unwrap();
        assert!(matches!(msg, CameraMessage::Frame { width: 2, height: 1, .. }));
        let msg: CameraMessage = serde_json::from_str(r#"{"kind":"started"}"#).unwrap();
        assert!(matches!(msg, CameraMessage::Started));
    }
}
