mod common;

use andean_backdrop::config::SceneConfig;
use andean_backdrop::palette::Color;
use andean_backdrop::shapes::Shape;
use andean_backdrop::{BackdropError, Scene};
use common::{rng, scene, Op, Recorder};

#[test]
fn rebuild_always_yields_configured_counts() {
    let config = SceneConfig::default();
    let mut s = scene(1000.0, 600.0, &config, 1);
    for (i, &(w, h)) in [(1.0, 1.0), (0.0, 0.0), (3840.0, 2160.0), (320.0, 900.0)]
        .iter()
        .enumerate()
    {
        s.rebuild(w, h, &config, &mut rng(i as u64)).unwrap();
        assert_eq!(s.bands().len(), 4);
        assert_eq!(s.triangles().len(), 8);
        assert_eq!(s.patterns().len(), 3);
        assert_eq!((s.width(), s.height()), (w, h));
    }
}

#[test]
fn bands_are_evenly_spaced_across_height() {
    let s = scene(1000.0, 600.0, &SceneConfig::default(), 42);
    let ys: Vec<f64> = s.bands().iter().map(|b| b.base_y()).collect();
    assert_eq!(ys, vec![120.0, 240.0, 360.0, 480.0]);
    for band in s.bands() {
        assert_eq!(band.width(), 1000.0);
        assert_eq!(band.y(), band.base_y());
    }
}

#[test]
fn triangles_sit_near_their_column_slot() {
    let config = SceneConfig::default();
    let s = scene(900.0, 500.0, &config, 3);
    for (i, t) in s.triangles().iter().enumerate() {
        let slot = 100.0 * (i + 1) as f64;
        let spawn = t.spawn();
        assert!((spawn.x - slot).abs() <= config.triangles.jitter / 2.0);
        assert!((0.0..=500.0).contains(&spawn.y));
        assert!((15.0..=40.0).contains(&spawn.size));
        assert_eq!(spawn.rotation, 0.0);
        assert!(Color::TRIANGLES.contains(&t.color()));
    }
}

#[test]
fn patterns_start_left_and_stack_vertically() {
    let s = scene(1000.0, 800.0, &SceneConfig::default(), 9);
    let ys: Vec<f64> = s.patterns().iter().map(|p| p.base_y()).collect();
    assert_eq!(ys, vec![200.0, 400.0, 600.0]);
    for p in s.patterns() {
        assert!((0.0..=300.0).contains(&p.x()));
        assert!((3..=6).contains(&p.steps()));
        assert!((20.0..=35.0).contains(&p.step_size()));
        assert!(Color::PATTERNS.contains(&p.color()));
    }
}

#[test]
fn same_seed_same_scene() {
    let config = SceneConfig::default();
    let a = scene(1280.0, 720.0, &config, 77);
    let b = scene(1280.0, 720.0, &config, 77);
    assert_eq!(a.bands(), b.bands());
    assert_eq!(a.triangles(), b.triangles());
    assert_eq!(a.patterns(), b.patterns());
}

#[test]
fn rebuild_keeps_clock_unless_asked_to_reset() {
    let mut config = SceneConfig::default();
    let mut s = scene(800.0, 600.0, &config, 5);
    for _ in 0..30 {
        s.tick();
    }
    s.rebuild(640.0, 480.0, &config, &mut rng(6)).unwrap();
    assert_eq!(s.clock().frame(), 30);

    config.reset_clock_on_resize = true;
    s.rebuild(640.0, 480.0, &config, &mut rng(7)).unwrap();
    assert_eq!(s.clock().frame(), 0);
}

#[test]
fn frame_clears_then_strokes_bands_triangles_patterns() {
    let mut s = scene(1000.0, 600.0, &SceneConfig::default(), 11);
    let mut out = Recorder::default();
    s.frame(&mut out);

    assert_eq!(out.ops.first(), Some(&Op::Clear(1000.0, 600.0)));
    assert_eq!(s.clock().frame(), 1);
    let clears = out.ops.iter().filter(|op| matches!(op, Op::Clear(..))).count();
    assert_eq!(clears, 1);

    let paths = out.paths();
    assert_eq!(paths.len(), 4 + 8 + 3);

    for (path, band) in paths[..4].iter().zip(s.bands()) {
        assert_eq!(
            path,
            &vec![Op::MoveTo(0.0, band.y()), Op::LineTo(1000.0, band.y())]
        );
    }
    for path in &paths[4..12] {
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&Op::ClosePath));
    }
    for (path, pattern) in paths[12..].iter().zip(s.patterns()) {
        assert_eq!(path.len(), 1 + 2 * pattern.steps() as usize);
    }
}

#[test]
fn triangle_is_apex_up_and_drawn_in_local_frame() {
    let mut s = scene(1000.0, 600.0, &SceneConfig::default(), 12);
    s.tick();
    let t = &s.triangles()[0];
    let mut out = Recorder::default();
    t.draw(&mut out);

    let pose = t.current();
    assert_eq!(out.ops[0], Op::Save);
    assert_eq!(out.ops[1], Op::Translate(pose.x, pose.y));
    assert_eq!(out.ops[2], Op::Rotate(pose.rotation));
    assert_eq!(out.ops.last(), Some(&Op::Restore));

    let path = &out.paths()[0];
    let half_base = pose.size * 3f64.sqrt() / 2.0;
    assert_eq!(path[0], Op::MoveTo(0.0, -pose.size));
    match (&path[1], &path[2]) {
        (Op::LineTo(lx, ly), Op::LineTo(rx, ry)) => {
            assert!((lx + half_base).abs() < 1e-9);
            assert!((rx - half_base).abs() < 1e-9);
            assert_eq!(*ly, pose.size * 0.5);
            assert_eq!(*ry, pose.size * 0.5);
        }
        other => panic!("unexpected triangle path {other:?}"),
    }
}

#[test]
fn stepped_path_alternates_horizontal_and_vertical() {
    let mut s = scene(1000.0, 600.0, &SceneConfig::default(), 13);
    s.tick();
    for pattern in s.patterns() {
        let mut out = Recorder::default();
        pattern.draw(&mut out);
        let path = &out.paths()[0];

        assert_eq!(path[0], Op::MoveTo(pattern.x(), pattern.y()));
        assert_eq!(path.len() - 1, 2 * pattern.steps() as usize);

        let mut prev = (pattern.x(), pattern.y());
        for (i, op) in path[1..].iter().enumerate() {
            let Op::LineTo(x, y) = *op else {
                panic!("expected line segment, got {op:?}");
            };
            let (dx, dy) = (x - prev.0, y - prev.1);
            if i % 2 == 0 {
                assert!((dx - pattern.step_size()).abs() < 1e-9 && dy == 0.0);
            } else {
                assert!(dx == 0.0 && (dy - pattern.step_size()).abs() < 1e-9);
            }
            prev = (x, y);
        }
    }
}

#[test]
fn counts_follow_config() {
    let mut config = SceneConfig::default();
    config.bands.count = 5;
    config.triangles.count = 0;
    config.patterns.count = 4;
    let s = scene(500.0, 500.0, &config, 2);
    assert_eq!(s.bands().len(), 5);
    assert!(s.triangles().is_empty());
    assert_eq!(s.patterns().len(), 4);
}

#[test]
fn build_rejects_configs_it_cannot_sample() {
    let mut steps = SceneConfig::default();
    steps.patterns.min_steps = 7;
    steps.patterns.max_steps = 3;

    let mut speed = SceneConfig::default();
    speed.bands.speed = andean_backdrop::config::Span::new(0.5, 0.1);

    let mut colors = SceneConfig::default();
    colors.triangles.colors.clear();

    for config in [steps, speed, colors] {
        let err = Scene::build(800.0, 600.0, &config, &mut rng(1)).unwrap_err();
        assert!(matches!(err, BackdropError::Config(_)), "{err}");
    }
}

#[test]
fn failed_rebuild_keeps_the_previous_scene() {
    let good = SceneConfig::default();
    let mut s = scene(800.0, 600.0, &good, 14);
    let bands = s.bands().to_vec();

    let mut bad = good.clone();
    bad.patterns.min_steps = 9;
    bad.patterns.max_steps = 2;
    assert!(s.rebuild(1024.0, 768.0, &bad, &mut rng(15)).is_err());

    assert_eq!(s.bands(), &bands[..]);
    assert_eq!((s.width(), s.height()), (800.0, 600.0));
}
