mod common;

use andean_backdrop::config::SceneConfig;
use common::scene;

const FRAMES: u64 = 30_000;

#[test]
fn bands_and_patterns_stay_within_amplitude() {
    let mut s = scene(1200.0, 800.0, &SceneConfig::default(), 21);
    for _ in 0..FRAMES {
        s.tick();
        for band in s.bands() {
            assert!((band.y() - band.base_y()).abs() <= band.amplitude() + 1e-12);
        }
        for pattern in s.patterns() {
            assert!((pattern.y() - pattern.base_y()).abs() <= pattern.amplitude() + 1e-12);
            assert_eq!(pattern.base_y(), pattern.spawn_y());
        }
    }
}

#[test]
fn triangles_breathe_within_bounds_without_compounding() {
    let mut s = scene(1200.0, 800.0, &SceneConfig::default(), 22);
    for _ in 0..FRAMES {
        s.tick();
        for t in s.triangles() {
            let (base, now) = (t.base(), t.current());
            assert_eq!(base, t.spawn());
            assert_eq!(now.x, base.x);
            assert!((now.y - base.y).abs() <= t.lift() + 1e-12);
            assert!(now.size >= base.size * (1.0 - t.breathing()) - 1e-12);
            assert!(now.size <= base.size * (1.0 + t.breathing()) + 1e-12);
            assert!((now.rotation - base.rotation).abs() <= t.sway() + 1e-12);
        }
    }
}

#[test]
fn motion_actually_happens() {
    let mut s = scene(1200.0, 800.0, &SceneConfig::default(), 23);
    let before: Vec<f64> = s.bands().iter().map(|b| b.y()).collect();
    for _ in 0..2_000 {
        s.tick();
    }
    let after: Vec<f64> = s.bands().iter().map(|b| b.y()).collect();
    assert_ne!(before, after);
}

#[test]
fn clock_counts_frames() {
    let mut s = scene(100.0, 100.0, &SceneConfig::default(), 24);
    let first = s.tick();
    let second = s.tick();
    assert_eq!(first.time, 1.0);
    assert_eq!(second.time, 2.0);
    assert!(first.cycle.is_none());
    assert_eq!(s.clock().frame(), 2);
}
