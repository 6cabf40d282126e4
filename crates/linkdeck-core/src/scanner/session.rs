//! Scan session state machine.

use tokio::sync::mpsc;

use super::engine::{DecodeSink, Decoded, ScanEngine, ScanOptions};
use crate::error::ScanError;
use crate::transient::{sleep_until_or_pending, Transient, SCAN_NOTICE_TTL};
use crate::weblink::is_probably_url;

/// Shown when the device has no camera at all
pub const NO_CAMERA_MESSAGE: &str = "Camera is not available on this device";

/// Shown when the camera exists but could not be started
pub const ACQUISITION_FAILED_MESSAGE: &str = "Could not start the camera. Check camera permissions.";

/// Lifecycle of one scanner instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// No capture, no decoder
    #[default]
    Closed,
    /// Probing for a camera and starting capture
    Initializing,
    /// Frames are being decoded
    Scanning,
    /// No camera exists; nothing more will happen until close
    NoCamera,
    /// Camera acquisition failed; the user has to close and reopen
    Failed,
}

impl ScanState {
    /// Whether a capture is (or may be) holding the camera
    pub fn is_open(&self) -> bool {
        !matches!(self, ScanState::Closed)
    }
}

/// Everything the scanner view renders
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanSnapshot {
    pub state: ScanState,
    pub camera_available: bool,
    pub scanning: bool,
    pub flash_on: bool,
    /// Draw the scan region frame over the preview
    pub scan_region: bool,
    /// Persistent error (no camera, acquisition failure)
    pub error: Option<String>,
    /// Transient notice about the last rejected scan
    pub notice: Option<String>,
}

impl ScanSnapshot {
    /// Text for the banner under the preview, if any
    pub fn banner(&self) -> Option<&str> {
        self.error.as_deref().or(self.notice.as_deref())
    }
}

/// Requests from the view into a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCommand {
    ToggleFlash,
    Close,
}

/// How [`ScanSession::run`] ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanExit {
    /// A URL was decoded; the session is already closed
    Scanned(String),
    /// Closed by the user or because the controller went away
    Closed,
}

/// Cloneable handle the view uses to drive a running session
#[derive(Debug, Clone)]
pub struct ScanController {
    tx: mpsc::UnboundedSender<ScanCommand>,
}

impl ScanController {
    pub fn toggle_flash(&self) {
        self.send(ScanCommand::ToggleFlash);
    }

    pub fn close(&self) {
        self.send(ScanCommand::Close);
    }

    fn send(&self, command: ScanCommand) {
        if self.tx.send(command).is_err() {
            tracing::debug!(?command, "scan session already finished");
        }
    }
}

/// Create a controller and the command stream for [`ScanSession::run`]
pub fn scan_channel() -> (ScanController, mpsc::UnboundedReceiver<ScanCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ScanController { tx }, rx)
}

enum Wake {
    Command(Option<ScanCommand>),
    Decoded(Option<Decoded>),
    NoticeExpired,
}

/// One scanner instance and the engine it drives.
///
/// Dropping the session closes it.
pub struct ScanSession<E: ScanEngine> {
    engine: E,
    options: ScanOptions,
    state: ScanState,
    camera_available: bool,
    scanning: bool,
    flash_on: bool,
    error: Option<String>,
    notice: Transient<String>,
    /// Bumped on every open and close; decodes from other epochs are stale
    epoch: u64,
    /// The engine was asked to start and has not been torn down yet
    engine_live: bool,
    decodes: Option<mpsc::UnboundedReceiver<Decoded>>,
}

impl<E: ScanEngine> ScanSession<E> {
    pub fn new(engine: E) -> Self {
        Self::with_options(engine, ScanOptions::default())
    }

    pub fn with_options(engine: E, options: ScanOptions) -> Self {
        Self {
            engine,
            options,
            state: ScanState::Closed,
            camera_available: true,
            scanning: false,
            flash_on: false,
            error: None,
            notice: Transient::new(SCAN_NOTICE_TTL),
            epoch: 0,
            engine_live: false,
            decodes: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn snapshot(&self) -> ScanSnapshot {
        ScanSnapshot {
            state: self.state,
            camera_available: self.camera_available,
            scanning: self.scanning,
            flash_on: self.flash_on,
            scan_region: self.options.highlight_scan_region
                && matches!(self.state, ScanState::Initializing | ScanState::Scanning),
            error: self.error.clone(),
            notice: self.notice.get().cloned(),
        }
    }

    /// Probe for a camera and start decoding.
    ///
    /// Only valid from `Closed`; an already open session is left alone.
    pub async fn open(&mut self) -> ScanState {
        if self.state.is_open() {
            tracing::warn!(state = ?self.state, "scan session already open");
            return self.state;
        }

        self.epoch += 1;
        self.state = ScanState::Initializing;
        self.scanning = true;
        self.error = None;
        self.notice.clear();

        if !self.engine.has_camera().await {
            tracing::info!("no camera available, scanner idle");
            self.enter_no_camera();
            return self.state;
        }
        self.camera_available = true;

        let (tx, rx) = mpsc::unbounded_channel();
        self.decodes = Some(rx);
        self.engine_live = true;

        match self
            .engine
            .start(&self.options, DecodeSink::new(self.epoch, tx))
            .await
        {
            Ok(()) => {
                tracing::info!(epoch = self.epoch, "scan session started");
                self.state = ScanState::Scanning;
            }
            Err(ScanError::CameraUnavailable) => {
                tracing::info!("camera disappeared during start");
                self.enter_no_camera();
            }
            Err(e) => {
                tracing::error!("Scanner initialization error: {}", e);
                self.state = ScanState::Failed;
                self.scanning = false;
                self.error = Some(ACQUISITION_FAILED_MESSAGE.to_string());
            }
        }
        self.state
    }

    /// Classify one decode result.
    ///
    /// Returns the raw text when it looks like a URL; the session is closed
    /// before returning, so a second result for the same session can never
    /// be produced. Non-URL text raises a notice and scanning continues.
    pub fn handle_decode(&mut self, decoded: Decoded) -> Option<String> {
        if decoded.epoch != self.epoch || self.state != ScanState::Scanning {
            tracing::debug!(
                epoch = decoded.epoch,
                current = self.epoch,
                state = ?self.state,
                "ignoring stale decode"
            );
            return None;
        }

        if is_probably_url(&decoded.text) {
            tracing::info!(text = %decoded.text, "scanned URL");
            self.close();
            Some(decoded.text)
        } else {
            tracing::debug!(text = %decoded.text, "scanned text is not a URL");
            self.notice
                .set(format!("Scanned text is not a URL: {}", decoded.text));
            None
        }
    }

    /// Toggle the torch. Only meaningful while scanning; failures are
    /// logged and leave the flag as it was.
    pub async fn toggle_flash(&mut self) -> bool {
        if self.state != ScanState::Scanning {
            tracing::debug!(state = ?self.state, "flash toggle ignored");
            return self.flash_on;
        }
        let target = !self.flash_on;
        match self.engine.set_flash(target).await {
            Ok(()) => self.flash_on = target,
            Err(e) => tracing::warn!("Flash toggle error: {}", e),
        }
        self.flash_on
    }

    /// Stop capture and release the engine.
    ///
    /// Idempotent: the engine sees `stop` and `destroy` at most once per
    /// open, however many close paths fire.
    pub fn close(&mut self) {
        if self.engine_live {
            self.engine.stop();
            self.engine.destroy();
            self.engine_live = false;
            tracing::info!(epoch = self.epoch, "scan session closed");
        }
        if self.state.is_open() {
            self.epoch += 1;
        }
        self.decodes = None;
        self.state = ScanState::Closed;
        self.camera_available = true;
        self.scanning = false;
        self.flash_on = false;
        self.error = None;
        self.notice.clear();
    }

    /// Open the session and drive it until it closes.
    ///
    /// `on_change` receives a snapshot after every visible change. The
    /// session is closed whenever this returns.
    pub async fn run(
        &mut self,
        commands: &mut mpsc::UnboundedReceiver<ScanCommand>,
        mut on_change: impl FnMut(ScanSnapshot),
    ) -> ScanExit {
        on_change(self.snapshot());
        let opened = tokio::select! {
            biased;
            _ = self.open() => true,
            _ = close_requested(commands) => false,
        };
        if !opened {
            tracing::info!("scan session closed while starting");
            self.close();
            on_change(self.snapshot());
            return ScanExit::Closed;
        }
        on_change(self.snapshot());

        loop {
            let deadline = self.notice.deadline();
            let wake = tokio::select! {
                command = commands.recv() => Wake::Command(command),
                decoded = next_decode(&mut self.decodes) => Wake::Decoded(decoded),
                _ = sleep_until_or_pending(deadline) => Wake::NoticeExpired,
            };

            match wake {
                Wake::Command(Some(ScanCommand::ToggleFlash)) => {
                    self.toggle_flash().await;
                }
                Wake::Command(Some(ScanCommand::Close)) | Wake::Command(None) => {
                    self.close();
                    on_change(self.snapshot());
                    return ScanExit::Closed;
                }
                Wake::Decoded(Some(decoded)) => {
                    if let Some(url) = self.handle_decode(decoded) {
                        on_change(self.snapshot());
                        return ScanExit::Scanned(url);
                    }
                }
                Wake::Decoded(None) => {
                    tracing::debug!("decoder stream ended");
                    self.decodes = None;
                }
                Wake::NoticeExpired => {
                    self.notice.clear_expired();
                }
            }
            on_change(self.snapshot());
        }
    }

    fn enter_no_camera(&mut self) {
        self.state = ScanState::NoCamera;
        self.camera_available = false;
        self.scanning = false;
        self.error = Some(NO_CAMERA_MESSAGE.to_string());
    }
}

impl<E: ScanEngine> Drop for ScanSession<E> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Resolve once the view asks to close or drops its controller. Flash
/// requests arriving before capture has started are ignored.
async fn close_requested(commands: &mut mpsc::UnboundedReceiver<ScanCommand>) {
    loop {
        match commands.recv().await {
            Some(ScanCommand::ToggleFlash) => {
                tracing::debug!("flash toggle ignored while starting");
            }
            Some(ScanCommand::Close) | None => return,
        }
    }
}

async fn next_decode(decodes: &mut Option<mpsc::UnboundedReceiver<Decoded>>) -> Option<Decoded> {
    match decodes {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine with a camera that starts instantly and counts teardown calls
    #[derive(Default)]
    struct CountingEngine {
        stops: usize,
        destroys: usize,
    }

    impl ScanEngine for CountingEngine {
        async fn has_camera(&mut self) -> bool {
            true
        }

        async fn start(&mut self, _: &ScanOptions, _: DecodeSink) -> Result<(), ScanError> {
            Ok(())
        }

        fn stop(&mut self) {
            self.stops += 1;
        }

        fn destroy(&mut self) {
            self.destroys += 1;
        }

        async fn set_flash(&mut self, _: bool) -> Result<(), ScanError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_open_reaches_scanning() {
        let mut session = ScanSession::new(CountingEngine::default());
        assert_eq!(session.open().await, ScanState::Scanning);

        let snap = session.snapshot();
        assert!(snap.scanning);
        assert!(snap.camera_available);
        assert_eq!(snap.banner(), None);
    }

    #[tokio::test]
    async fn test_decode_from_previous_epoch_is_ignored() {
        let mut session = ScanSession::new(CountingEngine::default());
        session.open().await;
        let stale = Decoded {
            epoch: 0,
            text: "https://example.com".into(),
        };
        assert_eq!(session.handle_decode(stale), None);
        assert_eq!(session.state(), ScanState::Scanning);
    }

    #[tokio::test]
    async fn test_close_twice_tears_down_once() {
        let mut session = ScanSession::new(CountingEngine::default());
        session.open().await;
        session.close();
        session.close();
        assert_eq!(session.engine().stops, 1);
        assert_eq!(session.engine().destroys, 1);
        assert_eq!(session.state(), ScanState::Closed);
    }

    #[test]
    fn test_close_without_open_is_noop() {
        let mut session = ScanSession::new(CountingEngine::default());
        session.close();
        assert_eq!(session.engine().stops, 0);
        assert_eq!(session.snapshot(), ScanSnapshot {
            camera_available: true,
            ..Default::default()
        });
    }

    #[tokio::test]
    async fn test_scan_region_follows_options() {
        let mut session = ScanSession::new(CountingEngine::default());
        session.open().await;
        assert!(session.snapshot().scan_region);
        session.close();
        assert!(!session.snapshot().scan_region);

        let options = ScanOptions {
            highlight_scan_region: false,
            ..Default::default()
        };
        let mut session = ScanSession::with_options(CountingEngine::default(), options);
        session.open().await;
        assert_eq!(session.state(), ScanState::Scanning);
        assert!(!session.snapshot().scan_region);
    }

    #[test]
    fn test_banner_prefers_error() {
        let snap = ScanSnapshot {
            error: Some("err".into()),
            notice: Some("notice".into()),
            ..Default::default()
        };
        assert_eq!(snap.banner(), Some("err"));
    }
}
