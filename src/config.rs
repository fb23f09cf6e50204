// Backdrop configuration.
//
// Defaults come from `constants.rs`; a page may pick a different style or edge
// behavior through `data-style` / `data-edge` attributes on the canvas.

use crate::constants::*;

/// Visual family of the backdrop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Slowly drifting outlined polygons over a faint grid.
    Geometric,
    /// Small dots linked by distance and pushed away by the cursor.
    Particles,
}

/// What happens when an entity leaves the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeMode {
    Bounce,
    Wrap,
}

impl Style {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geometric" | "shapes" => Some(Style::Geometric),
            "particles" | "particle" => Some(Style::Particles),
            _ => None,
        }
    }
}

impl EdgeMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounce" => Some(EdgeMode::Bounce),
            "wrap" => Some(EdgeMode::Wrap),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropConfig {
    pub style: Style,
    pub edge: EdgeMode,
    /// Square CSS pixels per entity.
    pub density: f64,
    pub cap: usize,
    pub max_speed: f32,
    pub max_spin: f32,
    pub size_min: f32,
    pub size_span: f32,
    pub draw_grid: bool,
    /// Pairwise link distance; `None` disables the O(n²) link pass.
    pub link_distance: Option<f32>,
    /// Cursor repulsion radius; `None` ignores the pointer.
    pub pointer_radius: Option<f32>,
}

impl BackdropConfig {
    pub fn for_style(style: Style) -> Self {
        match style {
            Style::Geometric => Self {
                style,
                edge: EdgeMode::Bounce,
                density: GEOMETRIC_DENSITY,
                cap: GEOMETRIC_CAP,
                max_speed: GEOMETRIC_MAX_SPEED,
                max_spin: GEOMETRIC_MAX_SPIN,
                size_min: GEOMETRIC_SIZE_MIN,
                size_span: GEOMETRIC_SIZE_SPAN,
                draw_grid: true,
                link_distance: None,
                pointer_radius: None,
            },
            Style::Particles => Self {
                style,
                edge: EdgeMode::Wrap,
                density: PARTICLE_DENSITY,
                cap: PARTICLE_CAP,
                max_speed: PARTICLE_MAX_SPEED,
                max_spin: 0.0,
                size_min: PARTICLE_SIZE_MIN,
                size_span: PARTICLE_SIZE_SPAN,
                draw_grid: false,
                link_distance: Some(LINK_DISTANCE),
                pointer_radius: Some(POINTER_RADIUS),
            },
        }
    }

    /// Build a config from optional `data-style` / `data-edge` values.
    /// Unknown values fall back to the defaults.
    pub fn from_attributes(style: Option<&str>, edge: Option<&str>) -> Self {
        let style = style.and_then(Style::parse).unwrap_or(Style::Geometric);
        let mut cfg = Self::for_style(style);
        if let Some(edge) = edge.and_then(EdgeMode::parse) {
            cfg.edge = edge;
        }
        cfg
    }

    /// Distance outside the canvas an entity may travel before the edge rule applies.
    pub fn margin(&self) -> f32 {
        match self.edge {
            EdgeMode::Bounce => self.size_min + self.size_span,
            EdgeMode::Wrap => WRAP_MARGIN,
        }
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self::for_style(Style::Geometric)
    }
}
