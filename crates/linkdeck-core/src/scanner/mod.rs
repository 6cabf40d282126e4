//! QR scan session.
//!
//! [`ScanSession`] owns one camera/decoder lifetime: it is opened when the
//! scanner becomes visible, classifies every decoded string, and tears the
//! engine down exactly once however it is closed. The camera and decoder sit
//! behind [`ScanEngine`], so the state machine does not care whether frames
//! come from a webview, a native camera, or a test script.

mod engine;
mod session;

pub use engine::{CameraFacing, DecodeSink, Decoded, ScanEngine, ScanOptions};
pub use session::{
    scan_channel, ScanCommand, ScanController, ScanExit, ScanSession, ScanSnapshot, ScanState,
    ACQUISITION_FAILED_MESSAGE, NO_CAMERA_MESSAGE,
};
