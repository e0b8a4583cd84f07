use serde::{Deserialize, Serialize};

/// Tuning for the particle field. Every field has a default, so hosts can
/// pass a partial JSON object (or `{}`) and override only what they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Viewport area (px²) per particle; count = floor(area / this).
    pub area_per_particle: f32,
    /// Pointer repulsion radius.
    pub interaction_radius: f32,
    /// Pointer-to-particle lines reach `interaction_radius * pointer_link_factor`.
    pub pointer_link_factor: f32,
    /// Peak alpha of a pointer-to-particle line.
    pub pointer_link_alpha: f32,
    /// Max distance for particle-to-particle lines.
    pub neighbour_link_distance: f32,
    /// Peak alpha of a particle-to-particle line.
    pub neighbour_link_alpha: f32,
    pub pointer_line_width: f32,
    pub neighbour_line_width: f32,
    /// Extra space beyond each viewport edge before wrap/respawn.
    pub edge_margin: f32,
    /// Scale applied to the normalized repulsion force.
    pub repulsion_strength: f32,
    /// Per-tick decay of interaction velocity.
    pub friction: f32,
    /// Rate at which vertical velocity relaxes toward the base fall speed.
    pub return_speed: f32,
    pub resting_opacity: f32,
    /// Per-tick relaxation rate toward `resting_opacity`.
    pub opacity_relax: f32,
    /// Per-tick opacity gain while inside the interaction radius.
    pub opacity_boost: f32,
    pub max_opacity: f32,
    /// Scale applied to the horizontal sway term.
    pub swing_scale: f32,
    pub size_range: (f32, f32),
    pub speed_y_range: (f32, f32),
    pub speed_x_range: (f32, f32),
    pub opacity_range: (f32, f32),
    pub swing_speed_range: (f32, f32),
    pub swing_amplitude_range: (f32, f32),
    /// Quiet period before a burst of resize events rebuilds the field.
    pub resize_debounce_secs: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 6000.0,
            interaction_radius: 150.0,
            pointer_link_factor: 1.5,
            pointer_link_alpha: 0.15,
            neighbour_link_distance: 80.0,
            neighbour_link_alpha: 0.1,
            pointer_line_width: 1.0,
            neighbour_line_width: 0.5,
            edge_margin: 10.0,
            repulsion_strength: 2.0,
            friction: 0.98,
            return_speed: 0.02,
            resting_opacity: 0.4,
            opacity_relax: 0.01,
            opacity_boost: 0.02,
            max_opacity: 0.9,
            swing_scale: 0.1,
            size_range: (1.0, 3.5),
            speed_y_range: (0.1, 0.4),
            speed_x_range: (-0.05, 0.05),
            opacity_range: (0.3, 0.8),
            swing_speed_range: (0.002, 0.007),
            swing_amplitude_range: (0.2, 0.7),
            resize_debounce_secs: 0.2,
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of particles for a viewport. Degenerate viewports yield zero.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        if self.area_per_particle <= 0.0 {
            return 0;
        }
        let area = width.max(0.0) * height.max(0.0);
        (area / self.area_per_particle).floor() as usize
    }

    /// Distance within which a particle gets a line to the pointer.
    pub fn pointer_link_distance(&self) -> f32 {
        self.interaction_radius * self.pointer_link_factor
    }
}
