//! Scan session lifecycle tests
//!
//! Drive a `ScanSession` with a scripted engine and check the visible
//! state, the scan result, and the engine teardown sequence.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use linkdeck_core::scanner::{
    scan_channel, DecodeSink, ScanEngine, ScanExit, ScanOptions, ScanSession, ScanSnapshot,
    ScanState, ACQUISITION_FAILED_MESSAGE, NO_CAMERA_MESSAGE,
};
use linkdeck_core::ScanError;

// ============================================================================
// Test Utilities
// ============================================================================

#[derive(Default)]
struct EngineLog {
    starts: usize,
    stops: usize,
    destroys: usize,
    flash_calls: Vec<bool>,
    options: Option<ScanOptions>,
    sink: Option<DecodeSink>,
}

struct ScriptedEngine {
    camera: bool,
    start_error: Option<ScanError>,
    /// `start` never resolves, like a permission prompt left open
    hang_on_start: bool,
    flash_error: Option<ScanError>,
    log: Rc<RefCell<EngineLog>>,
}

impl ScriptedEngine {
    fn with_camera() -> (Self, Rc<RefCell<EngineLog>>) {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        let engine = Self {
            camera: true,
            start_error: None,
            hang_on_start: false,
            flash_error: None,
            log: log.clone(),
        };
        (engine, log)
    }
}

impl ScanEngine for ScriptedEngine {
    async fn has_camera(&mut self) -> bool {
        self.camera
    }

    async fn start(&mut self, options: &ScanOptions, sink: DecodeSink) -> Result<(), ScanError> {
        {
            let mut log = self.log.borrow_mut();
            log.starts += 1;
            log.options = Some(options.clone());
            log.sink = Some(sink);
        }
        if self.hang_on_start {
            std::future::pending::<()>().await;
        }
        match &self.start_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn stop(&mut self) {
        self.log.borrow_mut().stops += 1;
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().destroys += 1;
    }

    async fn set_flash(&mut self, on: bool) -> Result<(), ScanError> {
        self.log.borrow_mut().flash_calls.push(on);
        match &self.flash_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// Wait until the engine has been started and hand back its sink
async fn wait_for_sink(log: &Rc<RefCell<EngineLog>>) -> DecodeSink {
    loop {
        if let Some(sink) = log.borrow().sink.clone() {
            return sink;
        }
        tokio::task::yield_now().await;
    }
}

/// Let the session loop process whatever is queued
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn recorder() -> (Rc<RefCell<Vec<ScanSnapshot>>>, impl FnMut(ScanSnapshot)) {
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let sink = snapshots.clone();
    (snapshots, move |snap| sink.borrow_mut().push(snap))
}

fn last(snapshots: &Rc<RefCell<Vec<ScanSnapshot>>>) -> ScanSnapshot {
    snapshots.borrow().last().cloned().unwrap_or_default()
}

// ============================================================================
// Classification
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_url_scan_fires_once_and_closes() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);
    let (_controller, mut commands) = scan_channel();
    let (snapshots, on_change) = recorder();

    let (exit, delivered) = tokio::join!(session.run(&mut commands, on_change), async {
        let sink = wait_for_sink(&log).await;
        sink.deliver("https://example.com/a");
        sink.deliver("https://example.com/b");
        settle().await;
        sink.deliver("https://example.com/c")
    });

    assert_eq!(exit, ScanExit::Scanned("https://example.com/a".to_string()));
    assert!(!delivered, "sink must be dead once the session closed");
    assert_eq!(session.state(), ScanState::Closed);
    assert_eq!(last(&snapshots).state, ScanState::Closed);
    assert!(!last(&snapshots).scanning);

    let log = log.borrow();
    assert_eq!(log.stops, 1);
    assert_eq!(log.destroys, 1);
}

#[tokio::test(start_paused = true)]
async fn test_dotted_text_without_scheme_counts_as_url() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);
    let (_controller, mut commands) = scan_channel();

    let (exit, _) = tokio::join!(session.run(&mut commands, |_| {}), async {
        wait_for_sink(&log).await.deliver("example.com/page");
    });

    assert_eq!(exit, ScanExit::Scanned("example.com/page".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_non_url_shows_notice_for_three_seconds() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);
    let (controller, mut commands) = scan_channel();
    let (snapshots, on_change) = recorder();

    let (exit, _) = tokio::join!(session.run(&mut commands, on_change), async {
        let sink = wait_for_sink(&log).await;
        sink.deliver("hello world");
        sink.deliver("no-dot-no-scheme");
        settle().await;

        let snap = last(&snapshots);
        assert_eq!(snap.state, ScanState::Scanning);
        assert!(snap.scanning);
        assert_eq!(
            snap.banner(),
            Some("Scanned text is not a URL: no-dot-no-scheme")
        );

        tokio::time::sleep(Duration::from_millis(2990)).await;
        assert!(last(&snapshots).notice.is_some());

        tokio::time::sleep(Duration::from_millis(20)).await;
        let snap = last(&snapshots);
        assert_eq!(snap.notice, None);
        assert!(snap.scanning);
        assert_eq!(snap.state, ScanState::Scanning);

        controller.close();
    });

    assert_eq!(exit, ScanExit::Closed);
    assert_eq!(log.borrow().stops, 1);
}

#[tokio::test(start_paused = true)]
async fn test_text_with_whitespace_is_not_a_url() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);
    let (controller, mut commands) = scan_channel();
    let (snapshots, on_change) = recorder();

    let (exit, _) = tokio::join!(session.run(&mut commands, on_change), async {
        wait_for_sink(&log).await.deliver("192.168.1.1 config");
        settle().await;
        controller.close();
    });

    assert_eq!(exit, ScanExit::Closed);
    assert!(snapshots
        .borrow()
        .iter()
        .any(|s| s.notice.as_deref() == Some("Scanned text is not a URL: 192.168.1.1 config")));
}

// ============================================================================
// Start-up paths
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_start_uses_rear_camera_at_five_scans_per_second() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);
    assert_eq!(session.open().await, ScanState::Scanning);

    let options = log.borrow().options.clone().unwrap();
    assert_eq!(options, ScanOptions::default());
    assert_eq!(options.preferred_camera.as_constraint(), "environment");
}

#[tokio::test(start_paused = true)]
async fn test_no_camera_never_starts_decoding() {
    let (mut engine, log) = ScriptedEngine::with_camera();
    engine.camera = false;
    let mut session = ScanSession::new(engine);
    let (controller, mut commands) = scan_channel();
    let (snapshots, on_change) = recorder();

    let (exit, _) = tokio::join!(session.run(&mut commands, on_change), async {
        settle().await;
        let snap = last(&snapshots);
        assert_eq!(snap.state, ScanState::NoCamera);
        assert!(!snap.camera_available);
        assert!(!snap.scanning);
        assert_eq!(snap.banner(), Some(NO_CAMERA_MESSAGE));

        // Flash is unavailable without a session
        controller.toggle_flash();
        settle().await;
        controller.close();
    });

    assert_eq!(exit, ScanExit::Closed);
    let log = log.borrow();
    assert_eq!(log.starts, 0);
    assert_eq!(log.stops, 0);
    assert_eq!(log.destroys, 0);
    assert!(log.flash_calls.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_acquisition_failure_is_visible_and_not_retried() {
    let (mut engine, log) = ScriptedEngine::with_camera();
    engine.start_error = Some(ScanError::Acquisition("NotAllowedError".into()));
    let mut session = ScanSession::new(engine);

    assert_eq!(session.open().await, ScanState::Failed);
    let snap = session.snapshot();
    assert!(!snap.scanning);
    assert_eq!(snap.banner(), Some(ACQUISITION_FAILED_MESSAGE));

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(log.borrow().starts, 1);

    session.close();
    session.close();
    let log = log.borrow();
    assert_eq!(log.stops, 1);
    assert_eq!(log.destroys, 1);
}

// ============================================================================
// Flash
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_flash_toggles_while_scanning() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);
    session.open().await;

    assert!(session.toggle_flash().await);
    assert!(session.snapshot().flash_on);
    assert!(!session.toggle_flash().await);
    assert_eq!(log.borrow().flash_calls, vec![true, false]);

    session.close();
    assert!(!session.snapshot().flash_on);
}

#[tokio::test(start_paused = true)]
async fn test_flash_failure_leaves_state_unchanged() {
    let (mut engine, log) = ScriptedEngine::with_camera();
    engine.flash_error = Some(ScanError::FlashUnsupported("no torch".into()));
    let mut session = ScanSession::new(engine);
    session.open().await;

    assert!(!session.toggle_flash().await);
    let snap = session.snapshot();
    assert!(!snap.flash_on);
    assert_eq!(snap.state, ScanState::Scanning);
    assert_eq!(snap.banner(), None);
    assert_eq!(log.borrow().flash_calls, vec![true]);
}

// ============================================================================
// Teardown
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_double_close_tears_down_once() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);
    let (controller, mut commands) = scan_channel();

    let (exit, _) = tokio::join!(session.run(&mut commands, |_| {}), async {
        wait_for_sink(&log).await;
        controller.close();
        controller.close();
    });

    assert_eq!(exit, ScanExit::Closed);
    session.close();
    drop(session);

    let log = log.borrow();
    assert_eq!(log.stops, 1);
    assert_eq!(log.destroys, 1);
}

#[tokio::test(start_paused = true)]
async fn test_close_while_camera_is_starting() {
    let (mut engine, log) = ScriptedEngine::with_camera();
    engine.hang_on_start = true;
    let mut session = ScanSession::new(engine);
    let (controller, mut commands) = scan_channel();
    let (snapshots, on_change) = recorder();

    controller.close();
    let exit = tokio::time::timeout(
        Duration::from_secs(30),
        session.run(&mut commands, on_change),
    )
    .await;

    assert_eq!(exit.ok(), Some(ScanExit::Closed));
    assert_eq!(session.state(), ScanState::Closed);
    assert_eq!(last(&snapshots).state, ScanState::Closed);

    let log = log.borrow();
    assert_eq!(log.starts, 1);
    assert_eq!(log.stops, 1);
    assert_eq!(log.destroys, 1);
    assert!(log.sink.as_ref().is_some_and(|sink| sink.is_closed()));
}

#[tokio::test(start_paused = true)]
async fn test_flash_request_while_starting_is_ignored() {
    let (mut engine, log) = ScriptedEngine::with_camera();
    engine.hang_on_start = true;
    let mut session = ScanSession::new(engine);
    let (controller, mut commands) = scan_channel();

    let (exit, _) = tokio::join!(session.run(&mut commands, |_| {}), async {
        wait_for_sink(&log).await;
        controller.toggle_flash();
        settle().await;
        controller.close();
    });

    assert_eq!(exit, ScanExit::Closed);
    let log = log.borrow();
    assert!(log.flash_calls.is_empty());
    assert_eq!(log.stops, 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_controller_closes_session() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);
    let (controller, mut commands) = scan_channel();

    let (exit, _) = tokio::join!(session.run(&mut commands, |_| {}), async {
        wait_for_sink(&log).await;
        drop(controller);
    });

    assert_eq!(exit, ScanExit::Closed);
    assert_eq!(log.borrow().stops, 1);
}

#[tokio::test(start_paused = true)]
async fn test_unmount_mid_scan_releases_camera() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);
    let (_controller, mut commands) = scan_channel();

    tokio::select! {
        _ = session.run(&mut commands, |_| {}) => panic!("session should still be scanning"),
        _ = tokio::time::sleep(Duration::from_millis(50)) => {}
    }
    assert_eq!(session.state(), ScanState::Scanning);
    drop(session);

    let log = log.borrow();
    assert_eq!(log.stops, 1);
    assert_eq!(log.destroys, 1);
}

#[tokio::test(start_paused = true)]
async fn test_reopen_starts_fresh_session() {
    let (engine, log) = ScriptedEngine::with_camera();
    let mut session = ScanSession::new(engine);

    session.open().await;
    let old_sink = log.borrow().sink.clone().unwrap();
    old_sink.deliver("not a url at all");
    session.close();

    session.open().await;
    assert!(!old_sink.deliver("https://stale.example"));
    assert_eq!(session.snapshot().notice, None);
    assert_eq!(log.borrow().starts, 2);
    assert_eq!(session.state(), ScanState::Scanning);
}
