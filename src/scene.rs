// Decorative entity model for the canvas backdrop.
//
// Everything here is platform-independent: the web side owns the canvas and
// only reads entity state to draw it.

use crate::config::{BackdropConfig, EdgeMode, Style};
use crate::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Hexagon,
    Square,
    Triangle,
    Circle,
}

impl ShapeKind {
    pub const POLYGONS: [ShapeKind; 3] = [ShapeKind::Hexagon, ShapeKind::Square, ShapeKind::Triangle];

    /// Closed outline in local (unrotated) coordinates. Empty for circles.
    pub fn outline(self, size: f32) -> Vec<Vec2> {
        let half = size * 0.5;
        match self {
            ShapeKind::Hexagon => (0..6)
                .map(|i| {
                    let a = PI / 3.0 * i as f32;
                    Vec2::new(size * a.cos(), size * a.sin())
                })
                .collect(),
            ShapeKind::Square => vec![
                Vec2::new(-half, -half),
                Vec2::new(half, -half),
                Vec2::new(half, half),
                Vec2::new(-half, half),
            ],
            ShapeKind::Triangle => vec![
                Vec2::new(0.0, -half),
                Vec2::new(half, half),
                Vec2::new(-half, half),
            ],
            ShapeKind::Circle => Vec::new(),
        }
    }
}

/// Which palette colour an entity is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Accent,
    Secondary,
}

impl Tint {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tint::Accent => ACCENT_RGB,
            Tint::Secondary => SECONDARY_RGB,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug)]
pub struct Entity {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub kind: ShapeKind,
    pub tint: Tint,
    pub rotation: f32,
    pub spin: f32,
    pub phase: f32,
}

/// `min(floor(width * height / density), cap)`; degenerate inputs give 0.
pub fn entity_count(width: f64, height: f64, density: f64, cap: usize) -> usize {
    if !(width > 0.0 && height > 0.0 && density > 0.0) {
        return 0;
    }
    let area = width * height;
    if !area.is_finite() {
        return cap;
    }
    let n = (area / density).floor();
    if n >= cap as f64 {
        cap
    } else {
        n as usize
    }
}

pub fn spawn(rng: &mut impl Rng, bounds: Bounds, cfg: &BackdropConfig) -> Entity {
    let kind = match cfg.style {
        Style::Geometric => ShapeKind::POLYGONS[rng.gen_range(0..ShapeKind::POLYGONS.len())],
        Style::Particles => ShapeKind::Circle,
    };
    let tint = if rng.gen_bool(0.25) {
        Tint::Secondary
    } else {
        Tint::Accent
    };
    Entity {
        pos: Vec2::new(
            rng.gen::<f32>() * bounds.width,
            rng.gen::<f32>() * bounds.height,
        ),
        vel: Vec2::new(
            (rng.gen::<f32>() - 0.5) * cfg.max_speed,
            (rng.gen::<f32>() - 0.5) * cfg.max_speed,
        ),
        size: cfg.size_min + rng.gen::<f32>() * cfg.size_span,
        opacity: OPACITY_MIN + rng.gen::<f32>() * OPACITY_SPAN,
        kind,
        tint,
        rotation: rng.gen::<f32>() * TAU,
        spin: (rng.gen::<f32>() - 0.5) * cfg.max_spin,
        phase: rng.gen::<f32>() * TAU,
    }
}

impl Entity {
    /// Advance by `frames` reference frames and apply the edge rule.
    /// Afterwards each coordinate lies in `[-margin, extent + margin]`.
    pub fn step(&mut self, frames: f32, bounds: Bounds, edge: EdgeMode, margin: f32) {
        self.pos += self.vel * frames;
        self.rotation = (self.rotation + self.spin * frames) % TAU;
        self.phase = (self.phase + PULSE_SPEED * frames) % TAU;

        let (x, vx) = apply_edge(self.pos.x, self.vel.x, bounds.width, edge, margin);
        let (y, vy) = apply_edge(self.pos.y, self.vel.y, bounds.height, edge, margin);
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::new(vx, vy);
    }

    /// Push away from the pointer when inside `radius`, keeping speed under `max_speed`.
    pub fn repel_from(&mut self, pointer: Vec2, radius: f32, max_speed: f32, frames: f32) {
        let d = self.pos - pointer;
        let dist = d.length();
        if dist < radius && dist > 1e-3 {
            let push = (1.0 - dist / radius) * POINTER_FORCE * frames;
            self.vel += d / dist * push;
        }
        self.vel = self.vel.clamp_length_max(max_speed);
    }

    /// Radius multiplier for the particle breathing effect.
    pub fn pulse_scale(&self) -> f32 {
        1.0 + 0.2 * self.phase.sin()
    }
}

fn apply_edge(p: f32, v: f32, extent: f32, edge: EdgeMode, margin: f32) -> (f32, f32) {
    let lo = -margin;
    let hi = extent + margin;
    match edge {
        EdgeMode::Bounce => {
            if p < lo {
                (lo, v.abs())
            } else if p > hi {
                (hi, -v.abs())
            } else {
                (p, v)
            }
        }
        EdgeMode::Wrap => {
            if p < lo {
                (hi, v)
            } else if p > hi {
                (lo, v)
            } else {
                (p, v)
            }
        }
    }
}

/// Opacity of a link between two points, or `None` beyond `max_distance`.
#[inline]
pub fn link_alpha(a: Vec2, b: Vec2, max_distance: f32) -> Option<f32> {
    let d = a.distance(b);
    (d < max_distance).then(|| LINK_ALPHA * (1.0 - d / max_distance))
}

/// Visit every linked pair once, in index order.
pub fn for_each_link(entities: &[Entity], max_distance: f32, mut f: impl FnMut(Vec2, Vec2, f32)) {
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            if let Some(alpha) = link_alpha(a.pos, b.pos, max_distance) {
                f(a.pos, b.pos, alpha);
            }
        }
    }
}

/// Entity set plus the viewport it lives in.
pub struct Scene {
    pub config: BackdropConfig,
    pub bounds: Bounds,
    pub entities: Vec<Entity>,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: BackdropConfig, rng: StdRng) -> Self {
        Self {
            config,
            bounds: Bounds {
                width: 0.0,
                height: 0.0,
            },
            entities: Vec::new(),
            rng,
        }
    }

    /// Regenerate the whole entity set for a new viewport size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = Bounds {
            width: width.max(0.0) as f32,
            height: height.max(0.0) as f32,
        };
        let n = entity_count(width, height, self.config.density, self.config.cap);
        let bounds = self.bounds;
        let cfg = &self.config;
        let rng = &mut self.rng;
        self.entities = (0..n).map(|_| spawn(rng, bounds, cfg)).collect();
    }

    /// Advance all entities; `pointer` is ignored unless the config enables it.
    pub fn step(&mut self, frames: f32, pointer: Option<Vec2>) {
        let margin = self.config.margin();
        let repel = self.config.pointer_radius.zip(pointer);
        for e in &mut self.entities {
            if let Some((radius, p)) = repel {
                e.repel_from(p, radius, self.config.max_speed, frames);
            }
            e.step(frames, self.bounds, self.config.edge, margin);
        }
    }
}

/// Convert elapsed seconds into reference frames, clamped after stalls.
#[inline]
pub fn frames_for(dt_sec: f32) -> f32 {
    (dt_sec / REFERENCE_FRAME_SEC).clamp(0.0, MAX_FRAME_STEP)
}
