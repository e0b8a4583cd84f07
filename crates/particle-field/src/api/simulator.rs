use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::core::rng::Rng;
use crate::field::Field;
use crate::input::pointer::PointerTracker;
use crate::renderer::theme::ThemeSignal;
use crate::renderer::traits::{Rgba, Surface};

/// Owns the field, the pointer, and the RNG, and runs one frame at a time.
pub struct Simulator {
    config: FieldConfig,
    field: Field,
    pointer: PointerTracker,
    rng: Rng,
}

impl Simulator {
    pub fn new(config: FieldConfig, field: Field, pointer: PointerTracker, rng: Rng) -> Self {
        Self {
            config,
            field,
            pointer,
            rng,
        }
    }

    /// Build a simulator with a freshly seeded field for the given viewport.
    pub fn with_viewport(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let mut field = Field::new();
        field.initialize(width, height, &config, &mut rng);
        let pointer = PointerTracker::new(config.interaction_radius);
        Self::new(config, field, pointer, rng)
    }

    /// One frame: clear, connection lines, then update-and-draw each particle in order.
    pub fn tick<S, T>(&mut self, surface: &mut S, theme: &T)
    where
        S: Surface + ?Sized,
        T: ThemeSignal + ?Sized,
    {
        let ink = theme.theme().ink();
        let viewport = self.field.viewport();
        surface.clear(viewport.x, viewport.y);

        self.draw_connections(surface, ink);

        let Self {
            config,
            field,
            pointer,
            rng,
        } = self;
        for p in field.iter_mut() {
            p.update(pointer, viewport, config, rng);
            p.draw(surface, ink);
        }
    }

    /// Lines from the pointer to nearby particles, and between close pairs of
    /// those particles. Pairs are only scanned for particles already near the
    /// pointer, which keeps the quadratic part local.
    pub fn draw_connections<S: Surface + ?Sized>(&self, surface: &mut S, ink: Rgba) {
        let Some(at) = self.pointer.position() else {
            return;
        };
        let reach = self.pointer.radius() * self.config.pointer_link_factor;
        let neighbour = self.config.neighbour_link_distance;
        let particles = self.field.particles();

        for (i, a) in particles.iter().enumerate() {
            let distance = a.pos.distance(at);
            if distance >= reach {
                continue;
            }
            let alpha = (1.0 - distance / reach) * self.config.pointer_link_alpha;
            surface.stroke_line(a.pos, at, self.config.pointer_line_width, ink.with_alpha(alpha));

            for b in &particles[i + 1..] {
                let d = a.pos.distance(b.pos);
                if d < neighbour {
                    let alpha = (1.0 - d / neighbour) * self.config.neighbour_link_alpha;
                    surface.stroke_line(
                        a.pos,
                        b.pos,
                        self.config.neighbour_line_width,
                        ink.with_alpha(alpha),
                    );
                }
            }
        }
    }

    /// Rebuild the field for a new viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height, &self.config, &mut self.rng);
        log::debug!(
            "particle field rebuilt: {}x{} -> {} particles",
            width,
            height,
            self.field.len()
        );
    }

    pub fn viewport(&self) -> Vec2 {
        self.field.viewport()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }
}
