//! The seam between the scan state machine and a concrete camera/decoder.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::error::ScanError;

/// Which camera to ask for when more than one is present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    /// Rear camera on phones and tablets
    #[default]
    Environment,
    /// Front camera
    User,
}

impl CameraFacing {
    /// Value for the `facingMode` media constraint
    pub fn as_constraint(&self) -> &'static str {
        match self {
            CameraFacing::Environment => "environment",
            CameraFacing::User => "user",
        }
    }
}

/// Capture settings handed to the engine on start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub preferred_camera: CameraFacing,
    /// Upper bound on decode attempts per second
    pub max_scans_per_second: u32,
    /// Draw the region of the frame that is being searched
    pub highlight_scan_region: bool,
    /// Outline a detected code in the preview
    pub highlight_code_outline: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            preferred_camera: CameraFacing::Environment,
            max_scans_per_second: 5,
            highlight_scan_region: true,
            highlight_code_outline: true,
        }
    }
}

impl ScanOptions {
    /// Minimum spacing between two decode attempts
    pub fn scan_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.max_scans_per_second.max(1)))
    }
}

/// One successfully decoded frame, stamped with the session that asked for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub epoch: u64,
    pub text: String,
}

/// Where an engine delivers decode results for the current session.
///
/// Once the session closes, deliveries are dropped on the floor.
#[derive(Debug, Clone)]
pub struct DecodeSink {
    epoch: u64,
    tx: mpsc::UnboundedSender<Decoded>,
}

impl DecodeSink {
    pub(crate) fn new(epoch: u64, tx: mpsc::UnboundedSender<Decoded>) -> Self {
        Self { epoch, tx }
    }

    /// Hand decoded text to the session; false if the session is gone
    pub fn deliver(&self, text: impl Into<String>) -> bool {
        self.tx
            .send(Decoded {
                epoch: self.epoch,
                text: text.into(),
            })
            .is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Camera plus decoder.
///
/// `start`, `has_camera` and `set_flash` may suspend; `stop` and `destroy`
/// must release resources before returning so that a close is complete by
/// the time the caller is notified.
#[allow(async_fn_in_trait)]
pub trait ScanEngine {
    /// Whether any video input device exists
    async fn has_camera(&mut self) -> bool;

    /// Acquire the camera and begin decoding into `sink`
    async fn start(&mut self, options: &ScanOptions, sink: DecodeSink) -> Result<(), ScanError>;

    /// Stop capture; safe to call when not started
    fn stop(&mut self);

    /// Release the decoder and any preview resources
    fn destroy(&mut self);

    /// Turn the torch on or off
    async fn set_flash(&mut self, on: bool) -> Result<(), ScanError>;
}
