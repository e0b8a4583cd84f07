//! A single drifting, pointer-repelled particle.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::api::config::FieldConfig;
use crate::core::rng::Rng;
use crate::input::pointer::PointerTracker;
use crate::renderer::traits::{Rgba, Surface};

/// A single particle. Created once, then recycled in place by [`Particle::reset`]
/// every time it falls out of the bottom of the viewport.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Interaction velocity from pointer repulsion. Decays every tick.
    pub vel: Vec2,
    /// Constant sideways drift (x) and fall speed (y) for this lifetime.
    pub drift: Vec2,
    /// Radius.
    pub size: f32,
    pub opacity: f32,
    /// Sway phase in radians. Only ever increases.
    pub swing: f32,
    pub swing_speed: f32,
    pub swing_amplitude: f32,
    pub friction: f32,
    pub return_speed: f32,
}

impl Particle {
    /// Create a particle with fresh random parameters, spawned just above the top edge.
    pub fn new(rng: &mut Rng, viewport: Vec2, config: &FieldConfig) -> Self {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            drift: Vec2::ZERO,
            size: 0.0,
            opacity: 0.0,
            swing: 0.0,
            swing_speed: 0.0,
            swing_amplitude: 0.0,
            friction: config.friction,
            return_speed: config.return_speed,
        };
        p.reset(rng, viewport, config);
        p
    }

    /// Re-randomize every per-lifetime attribute and zero the interaction velocity.
    /// `y` lands in the margin strip above the top edge.
    pub fn reset(&mut self, rng: &mut Rng, viewport: Vec2, config: &FieldConfig) {
        self.pos = Vec2::new(
            rng.range(0.0, viewport.x),
            rng.range(-config.edge_margin, 0.0),
        );
        self.vel = Vec2::ZERO;
        self.size = rng.in_range(config.size_range);
        self.drift = Vec2::new(
            rng.in_range(config.speed_x_range),
            rng.in_range(config.speed_y_range),
        );
        self.opacity = rng.in_range(config.opacity_range);
        self.swing = rng.range(0.0, TAU);
        self.swing_speed = rng.in_range(config.swing_speed_range);
        self.swing_amplitude = rng.in_range(config.swing_amplitude_range);
    }

    /// Advance one frame. Returns true when the particle fell past the bottom
    /// edge and was respawned at the top.
    pub fn update(
        &mut self,
        pointer: &PointerTracker,
        viewport: Vec2,
        config: &FieldConfig,
        rng: &mut Rng,
    ) -> bool {
        if let Some(at) = pointer.position() {
            let radius = pointer.radius();
            let offset = self.pos - at;
            let distance = offset.length();
            if distance < radius {
                let force = (radius - distance) / radius;
                let angle = offset.y.atan2(offset.x);
                self.vel += Vec2::from_angle(angle) * force * config.repulsion_strength;
                self.opacity = (self.opacity + config.opacity_boost).min(config.max_opacity);
            }
        }

        self.vel *= self.friction;
        self.vel.y += (self.drift.y - self.vel.y) * self.return_speed;

        self.swing += self.swing_speed;
        self.pos.x +=
            self.vel.x + self.drift.x + self.swing.sin() * self.swing_amplitude * config.swing_scale;
        self.pos.y += self.vel.y;

        self.opacity += (config.resting_opacity - self.opacity) * config.opacity_relax;

        let margin = config.edge_margin;
        if self.pos.y > viewport.y + margin {
            self.reset(rng, viewport, config);
            self.pos.y = -margin;
            return true;
        }
        if self.pos.x > viewport.x + margin {
            self.pos.x = -margin;
        } else if self.pos.x < -margin {
            self.pos.x = viewport.x + margin;
        }
        false
    }

    /// Fill a circle in `ink` at the particle's current opacity.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, ink: Rgba) {
        surface.fill_circle(self.pos, self.size, ink.with_alpha(self.opacity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::{DrawCommand, DrawList};

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn config() -> FieldConfig {
        FieldConfig::default()
    }

    /// A particle with no drift or sway, so only pointer/friction terms move it.
    fn still_particle(rng: &mut Rng, pos: Vec2) -> Particle {
        let mut p = Particle::new(rng, VIEWPORT, &config());
        p.pos = pos;
        p.drift = Vec2::ZERO;
        p.swing_amplitude = 0.0;
        p
    }

    fn assert_in(value: f32, range: (f32, f32), what: &str) {
        assert!(
            value >= range.0 && value < range.1,
            "{} {} outside [{}, {})",
            what,
            value,
            range.0,
            range.1
        );
    }

    #[test]
    fn reset_randomizes_within_ranges() {
        let cfg = config();
        let mut rng = Rng::new(42);
        for _ in 0..500 {
            let p = Particle::new(&mut rng, VIEWPORT, &cfg);
            assert_in(p.pos.x, (0.0, VIEWPORT.x), "x");
            assert_in(p.pos.y, (-cfg.edge_margin, 0.0), "y");
            assert_in(p.size, cfg.size_range, "size");
            assert_in(p.drift.y, cfg.speed_y_range, "speed_y");
            assert_in(p.drift.x, cfg.speed_x_range, "speed_x");
            assert_in(p.opacity, cfg.opacity_range, "opacity");
            assert_in(p.swing, (0.0, TAU), "swing");
            assert_in(p.swing_speed, cfg.swing_speed_range, "swing_speed");
            assert_in(p.swing_amplitude, cfg.swing_amplitude_range, "swing_amplitude");
            assert_eq!(p.vel, Vec2::ZERO);
            assert_eq!(p.friction, 0.98);
            assert_eq!(p.return_speed, 0.02);
        }
    }

    #[test]
    fn repulsion_pushes_away_from_pointer() {
        let cfg = config();
        let mut rng = Rng::new(1);
        let mut p = still_particle(&mut rng, Vec2::new(100.0, 100.0));
        let mut pointer = PointerTracker::new(150.0);
        pointer.set(50.0, 100.0);

        p.update(&pointer, VIEWPORT, &cfg, &mut rng);

        // force = (150 - 50) / 150, scaled by 2, then one friction step
        let expected = (100.0 / 150.0) * 2.0 * 0.98;
        assert!((p.vel.x - expected).abs() < 1e-4, "vx was {}", p.vel.x);
        assert!(p.vel.y.abs() < 1e-4, "vy was {}", p.vel.y);
        assert!(p.pos.x > 100.0, "particle should move away from the pointer");
    }

    #[test]
    fn pointer_outside_radius_has_no_effect() {
        let cfg = config();
        let mut rng = Rng::new(2);
        let mut p = still_particle(&mut rng, Vec2::new(400.0, 300.0));
        p.opacity = 0.6;
        let mut pointer = PointerTracker::new(150.0);
        pointer.set(400.0, 460.0);

        p.update(&pointer, VIEWPORT, &cfg, &mut rng);

        assert_eq!(p.vel, Vec2::ZERO);
        assert!(p.opacity < 0.6);
    }

    #[test]
    fn opacity_boost_is_capped() {
        let cfg = config();
        let mut rng = Rng::new(3);
        let mut p = still_particle(&mut rng, Vec2::new(400.0, 300.0));
        let mut pointer = PointerTracker::new(150.0);
        for _ in 0..500 {
            // Keep the pointer right next to the particle as it is pushed around.
            pointer.set(p.pos.x - 1.0, p.pos.y);
            p.update(&pointer, VIEWPORT, &cfg, &mut rng);
            assert!(p.opacity <= cfg.max_opacity + 1e-6, "opacity was {}", p.opacity);
        }
        assert!(p.opacity > 0.8);
    }

    #[test]
    fn relaxes_toward_resting_state_without_pointer() {
        let cfg = config();
        let mut rng = Rng::new(4);
        let mut p = Particle::new(&mut rng, VIEWPORT, &cfg);
        p.pos.y = 0.0;
        p.opacity = 0.8;
        p.vel = Vec2::new(0.0, 3.0);
        let pointer = PointerTracker::new(150.0);

        // Friction and the return pull settle vy where they balance.
        let settle = p.return_speed * p.drift.y / (1.0 - p.friction * (1.0 - p.return_speed));
        let mut last_gap_vy = p.vel.y - settle;
        let mut last_gap_opacity = p.opacity - cfg.resting_opacity;
        for _ in 0..100 {
            p.update(&pointer, VIEWPORT, &cfg, &mut rng);
            let gap_vy = p.vel.y - settle;
            let gap_opacity = p.opacity - cfg.resting_opacity;
            // Strictly closer each tick, never crossing the target.
            assert!(gap_vy > 0.0 && gap_vy < last_gap_vy);
            assert!(gap_opacity > 0.0 && gap_opacity < last_gap_opacity);
            last_gap_vy = gap_vy;
            last_gap_opacity = gap_opacity;
        }
        assert!(p.vel.y - settle < 0.1);
    }

    #[test]
    fn falling_past_bottom_respawns_at_top() {
        let cfg = config();
        let mut rng = Rng::new(5);
        let mut p = Particle::new(&mut rng, VIEWPORT, &cfg);
        p.pos = Vec2::new(300.0, VIEWPORT.y + 11.0);
        p.vel = Vec2::new(4.0, 1.0);
        p.size = 100.0;
        p.swing_speed = 100.0;
        let pointer = PointerTracker::new(150.0);

        let respawned = p.update(&pointer, VIEWPORT, &cfg, &mut rng);

        assert!(respawned);
        assert_eq!(p.pos.y, -10.0);
        assert_eq!(p.vel, Vec2::ZERO);
        assert!(p.size >= 1.0 && p.size < 3.5);
        assert!(p.swing_speed >= 0.002 && p.swing_speed < 0.007);
        assert!(p.pos.x >= 0.0 && p.pos.x < VIEWPORT.x);
    }

    #[test]
    fn x_wraps_at_both_edges() {
        let cfg = config();
        let mut rng = Rng::new(6);
        let pointer = PointerTracker::new(150.0);

        let mut right = still_particle(&mut rng, Vec2::new(VIEWPORT.x + 10.0, 100.0));
        right.vel = Vec2::new(1.0, 0.0);
        right.update(&pointer, VIEWPORT, &cfg, &mut rng);
        assert_eq!(right.pos.x, -10.0);

        let mut left = still_particle(&mut rng, Vec2::new(-10.0, 100.0));
        left.vel = Vec2::new(-1.0, 0.0);
        left.update(&pointer, VIEWPORT, &cfg, &mut rng);
        assert_eq!(left.pos.x, VIEWPORT.x + 10.0);
    }

    #[test]
    fn bounded_after_many_updates() {
        let cfg = config();
        let mut rng = Rng::new(7);
        let mut pointer_rng = Rng::new(8);
        let mut pointer = PointerTracker::new(150.0);
        let mut particles: Vec<Particle> =
            (0..50).map(|_| Particle::new(&mut rng, VIEWPORT, &cfg)).collect();

        for frame in 0..3000 {
            if frame % 40 < 30 {
                pointer.set(
                    pointer_rng.range(0.0, VIEWPORT.x),
                    pointer_rng.range(0.0, VIEWPORT.y),
                );
            } else {
                pointer.clear();
            }
            for p in &mut particles {
                p.update(&pointer, VIEWPORT, &cfg, &mut rng);
                assert!(p.opacity >= 0.0 && p.opacity <= 0.9 + 1e-6);
                assert!(p.pos.x >= -10.0 && p.pos.x <= VIEWPORT.x + 10.0);
                assert!(p.pos.y <= VIEWPORT.y + 10.0);
            }
        }
    }

    #[test]
    fn draw_uses_ink_and_opacity() {
        let mut rng = Rng::new(9);
        let mut p = Particle::new(&mut rng, VIEWPORT, &config());
        p.opacity = 0.5;
        let mut list = DrawList::new();
        p.draw(&mut list, Rgba::WHITE);
        assert_eq!(
            list.commands,
            vec![DrawCommand::Circle {
                center: p.pos,
                radius: p.size,
                color: Rgba::WHITE.with_alpha(0.5),
            }]
        );
    }
}
