//! The particle collection, sized by viewport area.

mod particle;

pub use particle::Particle;

use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::core::rng::Rng;

/// Ordered particle storage for one viewport.
/// Rebuilt from scratch whenever the viewport changes size.
pub struct Field {
    particles: Vec<Particle>,
    viewport: Vec2,
}

impl Field {
    /// An empty field with a zero-sized viewport.
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            viewport: Vec2::ZERO,
        }
    }

    /// Adopt an existing set of particles, e.g. a hand-placed arrangement.
    pub fn from_particles(viewport: Vec2, particles: Vec<Particle>) -> Self {
        Self { particles, viewport }
    }

    /// Discard every particle and seed floor(area / area_per_particle) fresh ones,
    /// spread over the full height so the first frame is already populated.
    pub fn initialize(&mut self, width: f32, height: f32, config: &FieldConfig, rng: &mut Rng) {
        let count = config.particle_count(width, height);
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let mut p = Particle::new(rng, self.viewport, config);
            p.pos.y = rng.range(0.0, self.viewport.y);
            self.particles.push(p);
        }
    }

    /// Rebuild for a new viewport size.
    pub fn resize(&mut self, width: f32, height: f32, config: &FieldConfig, rng: &mut Rng) {
        self.initialize(width, height, config, rng);
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
