// Host-side tests for the backdrop entity model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod scene {
    include!("../src/scene.rs");
}

use config::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn entity_at(pos: Vec2, vel: Vec2) -> Entity {
    Entity {
        pos,
        vel,
        size: 20.0,
        opacity: 0.2,
        kind: ShapeKind::Square,
        tint: Tint::Accent,
        rotation: 0.0,
        spin: 0.0,
        phase: 0.0,
    }
}

fn within(e: &Entity, b: Bounds, margin: f32) -> bool {
    let eps = 1e-3;
    e.pos.x >= -margin - eps
        && e.pos.x <= b.width + margin + eps
        && e.pos.y >= -margin - eps
        && e.pos.y <= b.height + margin + eps
}

#[test]
fn entity_count_follows_area_over_density() {
    let density = 20_000.0;
    for &(w, h) in &[(320.0, 568.0), (800.0, 600.0), (1024.0, 768.0), (1.0, 1.0)] {
        let expected = ((w * h) / density as f64).floor() as usize;
        assert_eq!(entity_count(w, h, density, 10_000), expected, "{}x{}", w, h);
    }
}

#[test]
fn entity_count_is_capped() {
    assert_eq!(entity_count(3840.0, 2160.0, 20_000.0, 80), 80);
    assert_eq!(entity_count(f64::MAX, f64::MAX, 1.0, 120), 120);
    // exactly at the cap
    assert_eq!(entity_count(400.0, 500.0, 2_000.0, 100), 100);
}

#[test]
fn entity_count_degenerate_inputs_are_zero() {
    assert_eq!(entity_count(0.0, 600.0, 20_000.0, 80), 0);
    assert_eq!(entity_count(-10.0, 600.0, 20_000.0, 80), 0);
    assert_eq!(entity_count(f64::NAN, 600.0, 20_000.0, 80), 0);
    assert_eq!(entity_count(800.0, 600.0, 0.0, 80), 0);
}

#[test]
fn resize_regenerates_entities_for_the_new_viewport() {
    let mut s = Scene::new(BackdropConfig::default(), StdRng::seed_from_u64(1));
    s.resize(800.0, 600.0);
    assert_eq!(s.entities.len(), 24);
    for e in &s.entities {
        assert!(e.pos.x >= 0.0 && e.pos.x <= 800.0);
        assert!(e.pos.y >= 0.0 && e.pos.y <= 600.0);
        assert_ne!(e.kind, ShapeKind::Circle);
    }

    s.resize(3840.0, 2160.0);
    assert_eq!(s.entities.len(), s.config.cap);

    // stepping never changes the population
    s.step(1.0, None);
    assert_eq!(s.entities.len(), s.config.cap);
}

#[test]
fn particle_style_spawns_circles() {
    let mut s = Scene::new(
        BackdropConfig::for_style(Style::Particles),
        StdRng::seed_from_u64(2),
    );
    s.resize(1200.0, 800.0);
    assert!(!s.entities.is_empty());
    assert!(s.entities.iter().all(|e| e.kind == ShapeKind::Circle));
}

#[test]
fn bounce_keeps_entities_inside_margin() {
    let cfg = BackdropConfig::from_attributes(Some("geometric"), Some("bounce"));
    let margin = cfg.margin();
    let mut s = Scene::new(cfg, StdRng::seed_from_u64(7));
    s.resize(640.0, 480.0);
    for i in 0..5_000 {
        s.step(1.0 + (i % 3) as f32, None);
        for e in &s.entities {
            assert!(within(e, s.bounds, margin), "escaped at step {}: {:?}", i, e.pos);
        }
    }
}

#[test]
fn wrap_keeps_entities_inside_margin_with_pointer() {
    let cfg = BackdropConfig::for_style(Style::Particles);
    let margin = cfg.margin();
    let mut s = Scene::new(cfg, StdRng::seed_from_u64(11));
    s.resize(500.0, 400.0);
    for i in 0..5_000 {
        let pointer = Vec2::new((i % 500) as f32, (i % 400) as f32);
        s.step(2.5, Some(pointer));
        for e in &s.entities {
            assert!(within(e, s.bounds, margin), "escaped at step {}: {:?}", i, e.pos);
        }
    }
}

#[test]
fn wrap_teleports_to_opposite_edge() {
    let b = Bounds {
        width: 100.0,
        height: 100.0,
    };
    let mut e = entity_at(Vec2::new(109.0, 50.0), Vec2::new(2.0, 0.0));
    e.step(1.0, b, EdgeMode::Wrap, 10.0);
    assert_eq!(e.pos.x, -10.0);
    assert_eq!(e.vel.x, 2.0);

    let mut e = entity_at(Vec2::new(50.0, -9.5), Vec2::new(0.0, -1.0));
    e.step(1.0, b, EdgeMode::Wrap, 10.0);
    assert_eq!(e.pos.y, 110.0);
}

#[test]
fn bounce_reverses_the_crossing_component() {
    let b = Bounds {
        width: 100.0,
        height: 100.0,
    };
    let mut e = entity_at(Vec2::new(-19.5, 50.0), Vec2::new(-1.0, 0.5));
    e.step(1.0, b, EdgeMode::Bounce, 20.0);
    assert_eq!(e.pos.x, -20.0);
    assert_eq!(e.vel.x, 1.0);
    assert_eq!(e.vel.y, 0.5);
}

#[test]
fn pointer_pushes_nearby_entities_away_and_caps_speed() {
    let mut e = entity_at(Vec2::new(110.0, 100.0), Vec2::ZERO);
    e.repel_from(Vec2::new(100.0, 100.0), 140.0, 0.6, 1.0);
    assert!(e.vel.x > 0.0);
    assert!(e.vel.y.abs() < 1e-6);

    let mut fast = entity_at(Vec2::new(110.0, 100.0), Vec2::new(5.0, 0.0));
    fast.repel_from(Vec2::new(100.0, 100.0), 140.0, 0.6, 1.0);
    assert!(fast.vel.length() <= 0.6 + 1e-5);

    let mut far = entity_at(Vec2::new(500.0, 100.0), Vec2::new(0.1, 0.0));
    far.repel_from(Vec2::new(100.0, 100.0), 140.0, 0.6, 1.0);
    assert_eq!(far.vel, Vec2::new(0.1, 0.0));
}

#[test]
fn link_alpha_fades_with_distance() {
    let a = Vec2::ZERO;
    let near = link_alpha(a, Vec2::new(10.0, 0.0), 120.0).unwrap();
    let mid = link_alpha(a, Vec2::new(60.0, 0.0), 120.0).unwrap();
    assert!(near > mid);
    assert!(link_alpha(a, Vec2::new(120.0, 0.0), 120.0).is_none());
    assert!(link_alpha(a, Vec2::new(300.0, 0.0), 120.0).is_none());
}

#[test]
fn links_visit_each_close_pair_once() {
    let es = vec![
        entity_at(Vec2::new(0.0, 0.0), Vec2::ZERO),
        entity_at(Vec2::new(50.0, 0.0), Vec2::ZERO),
        entity_at(Vec2::new(100.0, 0.0), Vec2::ZERO),
        entity_at(Vec2::new(1000.0, 0.0), Vec2::ZERO),
    ];
    let mut pairs = Vec::new();
    for_each_link(&es, 120.0, |a, b, _| pairs.push((a.x, b.x)));
    assert_eq!(pairs, vec![(0.0, 50.0), (0.0, 100.0), (50.0, 100.0)]);
}

#[test]
fn outlines_have_expected_vertex_counts() {
    assert_eq!(ShapeKind::Hexagon.outline(10.0).len(), 6);
    assert_eq!(ShapeKind::Square.outline(10.0).len(), 4);
    assert_eq!(ShapeKind::Triangle.outline(10.0).len(), 3);
    assert!(ShapeKind::Circle.outline(10.0).is_empty());
}

#[test]
fn frames_for_scales_and_clamps() {
    assert!((frames_for(1.0 / 60.0) - 1.0).abs() < 1e-4);
    assert!((frames_for(1.0 / 30.0) - 2.0).abs() < 1e-4);
    assert_eq!(frames_for(5.0), constants::MAX_FRAME_STEP);
    assert_eq!(frames_for(-1.0), 0.0);
}

#[test]
fn config_attributes_select_style_and_edge() {
    let cfg = BackdropConfig::from_attributes(Some("Particles"), None);
    assert_eq!(cfg.style, Style::Particles);
    assert_eq!(cfg.edge, EdgeMode::Wrap);
    assert!(cfg.link_distance.is_some());

    let cfg = BackdropConfig::from_attributes(Some("particles"), Some("bounce"));
    assert_eq!(cfg.edge, EdgeMode::Bounce);

    let cfg = BackdropConfig::from_attributes(Some("unknown"), Some("sideways"));
    assert_eq!(cfg, BackdropConfig::default());
}
