// Host-side tests for the warnings logged by degenerate layouts.
// Kept in their own binary: the logger is process-global.

use glam::DVec3;
use sphere_core::{SphereConfig, SphereState, TagSphere};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

struct CountingLogger;

static DEGENERATE_WARNINGS: AtomicUsize = AtomicUsize::new(0);
static LOGGER: CountingLogger = CountingLogger;
// tests in this binary share the counter
static SERIAL: Mutex<()> = Mutex::new(());

impl log::Log for CountingLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if record.level() == log::Level::Warn
            && record.args().to_string().contains("degenerate radius")
        {
            DEGENERATE_WARNINGS.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

fn install() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

fn warnings_during(f: impl FnOnce()) -> usize {
    install();
    let before = DEGENERATE_WARNINGS.load(Ordering::SeqCst);
    f();
    DEGENERATE_WARNINGS.load(Ordering::SeqCst) - before
}

#[test]
fn degenerate_snapshot_layout_warns_once() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let mut state = None;
    let n = warnings_during(|| state = Some(SphereState::layout(&["a", "b", "c"], -5.0)));
    assert_eq!(n, 1);
    let state = state.unwrap();
    assert_eq!(state.radius(), 0.0);
    assert!(state.points().iter().all(|p| p.position == DVec3::ZERO));
}

#[test]
fn degenerate_free_layout_warns_once() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let n = warnings_during(|| {
        sphere_core::layout(&["a", "b"], f64::NAN);
    });
    assert_eq!(n, 1);
}

#[test]
fn controller_with_degenerate_radius_warns_once() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let n = warnings_during(|| {
        TagSphere::new(&["a"], SphereConfig::default().with_radius(0.0)).unwrap();
    });
    assert_eq!(n, 1);
}

#[test]
fn valid_radius_does_not_warn() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let n = warnings_during(|| {
        SphereState::layout(&["a", "b"], 50.0);
    });
    assert_eq!(n, 0);
}
