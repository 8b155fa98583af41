//! Transient particle effects.
//!
//! Every particle shares a position/velocity/life base; the fields that only
//! make sense for one kind (a glyph for fly-aways, a tumbling rectangle for
//! confetti) live in [`EffectBody`]. Spawning is best-effort: bursts are
//! trimmed to the pool capacity rather than failing.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::clock::frames;
use crate::model::{FieldBounds, Point};
use crate::rng::GardenRng;

pub const CONFETTI_COLORS: [&str; 7] = [
    "#FF0000", "#FF8C00", "#FFD700", "#32CD32", "#1E90FF", "#8A2BE2", "#FF69B4",
];
const SPARKLE_COLORS: [&str; 3] = ["#FFD700", "#FFB6C1", "#FF69B4"];
const STARBURST_COLORS: [&str; 2] = ["#FFD700", "#FFF59D"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Water,
    Clipping,
    Sparkle,
    Confetti,
    Flyaway,
    Starburst,
}

/// Per-kind spawn and physics parameters, in reference frames.
#[derive(Clone, Copy, Debug)]
struct KindProfile {
    burst: usize,
    life: (f64, f64),
    /// Added to vertical velocity every frame (positive is down).
    gravity: f64,
    /// Fraction of life over which the particle fades out.
    fade_fraction: f64,
    jitter: f64,
}

impl EffectKind {
    fn profile(self) -> KindProfile {
        match self {
            EffectKind::Water => KindProfile {
                burst: 5,
                life: (24.0, 36.0),
                gravity: 0.15,
                fade_fraction: 1.0,
                jitter: 30.0,
            },
            EffectKind::Clipping => KindProfile {
                burst: 6,
                life: (30.0, 45.0),
                gravity: 0.2,
                fade_fraction: 0.5,
                jitter: 20.0,
            },
            EffectKind::Sparkle => KindProfile {
                burst: 8,
                life: (40.0, 60.0),
                gravity: -0.02,
                fade_fraction: 0.5,
                jitter: 60.0,
            },
            EffectKind::Confetti => KindProfile {
                burst: 30,
                life: (240.0, 300.0),
                gravity: 0.05,
                fade_fraction: 0.25,
                jitter: 40.0,
            },
            EffectKind::Flyaway => KindProfile {
                burst: 1,
                life: (90.0, 90.0),
                gravity: 0.1,
                fade_fraction: 1.0,
                jitter: 0.0,
            },
            EffectKind::Starburst => KindProfile {
                burst: 12,
                life: (40.0, 40.0),
                gravity: 0.0,
                fade_fraction: 0.5,
                jitter: 0.0,
            },
        }
    }

    pub fn default_burst(self) -> usize {
        self.profile().burst
    }

    pub fn gravity(self) -> f64 {
        self.profile().gravity
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfettiShape {
    Circle,
    Square,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EffectBody {
    Water {
        radius: f64,
    },
    Clipping {
        length: f64,
        rotation: f64,
        rotation_speed: f64,
    },
    Sparkle {
        size: f64,
        rotation: f64,
        rotation_speed: f64,
        color: &'static str,
    },
    Confetti {
        size: f64,
        rotation: f64,
        rotation_speed: f64,
        color: &'static str,
        shape: ConfettiShape,
    },
    Flyaway {
        glyph: String,
        scale: f64,
        rotation: f64,
        rotation_speed: f64,
    },
    Starburst {
        size: f64,
        color: &'static str,
    },
}

impl EffectBody {
    pub fn kind(&self) -> EffectKind {
        match self {
            EffectBody::Water { .. } => EffectKind::Water,
            EffectBody::Clipping { .. } => EffectKind::Clipping,
            EffectBody::Sparkle { .. } => EffectKind::Sparkle,
            EffectBody::Confetti { .. } => EffectKind::Confetti,
            EffectBody::Flyaway { .. } => EffectKind::Flyaway,
            EffectBody::Starburst { .. } => EffectKind::Starburst,
        }
    }

    fn spin(&mut self, step: f64) {
        match self {
            EffectBody::Clipping { rotation, rotation_speed, .. }
            | EffectBody::Sparkle { rotation, rotation_speed, .. }
            | EffectBody::Confetti { rotation, rotation_speed, .. } => {
                *rotation += *rotation_speed * step;
            }
            EffectBody::Flyaway { rotation, rotation_speed, scale, .. } => {
                *rotation += *rotation_speed * step;
                *scale *= 0.995f64.powf(step);
            }
            EffectBody::Water { .. } | EffectBody::Starburst { .. } => {}
        }
        if let EffectBody::Sparkle { size, .. } = self {
            *size *= 0.99f64.powf(step);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    /// Reference frames left.
    pub life: f64,
    pub max_life: f64,
    pub alpha: f64,
    pub body: EffectBody,
}

impl Particle {
    pub fn kind(&self) -> EffectKind {
        self.body.kind()
    }
}

/// Overrides for a single spawn call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnConfig {
    pub count: Option<usize>,
    /// Required for fly-aways; ignored by other kinds.
    pub glyph: Option<String>,
}

impl SpawnConfig {
    pub fn count(count: usize) -> Self {
        Self {
            count: Some(count),
            glyph: None,
        }
    }

    pub fn glyph(glyph: impl Into<String>) -> Self {
        Self {
            count: None,
            glyph: Some(glyph.into()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectSystem {
    bounds: FieldBounds,
    capacity: usize,
    particles: Vec<Particle>,
}

impl EffectSystem {
    pub fn new(bounds: FieldBounds, capacity: usize) -> Self {
        Self {
            bounds,
            capacity,
            particles: Vec::new(),
        }
    }

    pub fn set_bounds(&mut self, bounds: FieldBounds) {
        self.bounds = bounds;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn count_of(&self, kind: EffectKind) -> usize {
        self.particles.iter().filter(|p| p.kind() == kind).count()
    }

    /// Spawns a burst at `origin`; returns how many particles were created.
    pub fn spawn(&mut self, kind: EffectKind, origin: Point, config: SpawnConfig, rng: &mut GardenRng) -> usize {
        let profile = kind.profile();
        let wanted = config.count.unwrap_or(profile.burst);
        let room = self.capacity.saturating_sub(self.particles.len());
        let n = wanted.min(room);
        if n < wanted {
            log::debug!("effect pool full, trimmed {kind:?} burst {wanted} -> {n}");
        }
        for i in 0..n {
            let life = rng.range(profile.life.0, profile.life.1).max(1.0);
            let mut position = origin.offset(rng.spread(profile.jitter), rng.spread(profile.jitter));
            let (velocity, body) = match kind {
                EffectKind::Water => (
                    Point::new(rng.spread(2.0), rng.range(-1.0, 0.0)),
                    EffectBody::Water {
                        radius: rng.range(3.0, 8.0),
                    },
                ),
                EffectKind::Clipping => (
                    Point::new(rng.spread(4.0), rng.range(-3.0, -1.0)),
                    EffectBody::Clipping {
                        length: rng.range(3.0, 7.0),
                        rotation: rng.range(0.0, TAU),
                        rotation_speed: rng.spread(0.4),
                    },
                ),
                EffectKind::Sparkle => (
                    Point::new(rng.spread(4.0), rng.range(-3.0, -1.0)),
                    EffectBody::Sparkle {
                        size: rng.range(4.0, 8.0),
                        rotation: rng.range(0.0, TAU),
                        rotation_speed: rng.spread(0.2),
                        color: rng.pick(&SPARKLE_COLORS).unwrap_or("#FFD700"),
                    },
                ),
                EffectKind::Confetti => {
                    position = Point::new(
                        rng.range(0.0, self.bounds.width),
                        origin.y.min(0.0) - rng.range(0.0, profile.jitter),
                    );
                    (
                        Point::new(rng.spread(6.0), rng.range(2.0, 5.0)),
                        EffectBody::Confetti {
                            size: rng.range(4.0, 12.0),
                            rotation: rng.range(0.0, TAU),
                            rotation_speed: rng.spread(0.35),
                            color: rng.pick(&CONFETTI_COLORS).unwrap_or("#FF0000"),
                            shape: if rng.chance(0.5) {
                                ConfettiShape::Circle
                            } else {
                                ConfettiShape::Square
                            },
                        },
                    )
                }
                EffectKind::Flyaway => (
                    Point::new(rng.spread(8.0), rng.range(-7.0, -3.0)),
                    EffectBody::Flyaway {
                        glyph: config.glyph.clone().unwrap_or_else(|| "✨".to_string()),
                        scale: 1.0,
                        rotation: 0.0,
                        rotation_speed: rng.spread(0.2),
                    },
                ),
                EffectKind::Starburst => {
                    let angle = TAU * i as f64 / n as f64;
                    let speed = 3.0;
                    (
                        Point::new(angle.cos() * speed, angle.sin() * speed),
                        EffectBody::Starburst {
                            size: 5.0,
                            color: STARBURST_COLORS[i % STARBURST_COLORS.len()],
                        },
                    )
                }
            };
            self.particles.push(Particle {
                position,
                velocity,
                life,
                max_life: life,
                alpha: 1.0,
                body,
            });
        }
        n
    }

    pub fn tick(&mut self, dt: f64) {
        let step = frames(dt);
        if !(step > 0.0) {
            return;
        }
        for p in &mut self.particles {
            let profile = p.kind().profile();
            p.position = p.position.offset(p.velocity.x * step, p.velocity.y * step);
            p.velocity.y += profile.gravity * step;
            p.body.spin(step);
            p.life -= step;
            let ratio = (p.life / p.max_life).clamp(0.0, 1.0);
            p.alpha = (ratio / profile.fade_fraction).min(1.0);
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn system() -> EffectSystem {
        EffectSystem::new(FieldBounds::new(800.0, 600.0), 500)
    }

    #[test]
    fn sparkles_retire_once_life_runs_out() {
        let mut rng = GardenRng::default();
        let mut fx = system();
        assert_eq!(fx.spawn(EffectKind::Sparkle, Point::new(0.0, 0.0), SpawnConfig::count(5), &mut rng), 5);
        let mut ticks = 0;
        while !fx.is_empty() {
            fx.tick(DT);
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert!(ticks >= 40);
    }

    #[test]
    fn life_strictly_decreases_and_alpha_follows() {
        let mut rng = GardenRng::default();
        let mut fx = system();
        fx.spawn(EffectKind::Confetti, Point::new(400.0, -20.0), SpawnConfig::default(), &mut rng);
        let before: Vec<f64> = fx.particles().iter().map(|p| p.life).collect();
        fx.tick(DT);
        for (p, life) in fx.particles().iter().zip(before) {
            assert!(p.life < life);
            // Confetti stays opaque until the last quarter of its life.
            assert_eq!(p.alpha, 1.0);
        }
    }

    #[test]
    fn confetti_falls_from_above_the_field() {
        let mut rng = GardenRng::default();
        let mut fx = system();
        let n = fx.spawn(EffectKind::Confetti, Point::new(400.0, -20.0), SpawnConfig::default(), &mut rng);
        assert_eq!(n, EffectKind::Confetti.default_burst());
        for p in fx.particles() {
            assert!(p.position.y <= 0.0);
            assert!(p.velocity.y > 0.0);
            assert!((0.0..=800.0).contains(&p.position.x));
        }
    }

    #[test]
    fn starburst_is_radially_symmetric() {
        let mut rng = GardenRng::default();
        let mut fx = system();
        fx.spawn(EffectKind::Starburst, Point::new(100.0, 100.0), SpawnConfig::default(), &mut rng);
        let sum = fx
            .particles()
            .iter()
            .fold(Point::default(), |acc, p| acc.offset(p.velocity.x, p.velocity.y));
        assert!(sum.x.abs() < 1e-9 && sum.y.abs() < 1e-9);
        assert!(fx.particles().iter().all(|p| p.position == Point::new(100.0, 100.0)));
    }

    #[test]
    fn flyaway_carries_its_glyph_and_launches_upward() {
        let mut rng = GardenRng::default();
        let mut fx = system();
        fx.spawn(EffectKind::Flyaway, Point::new(50.0, 50.0), SpawnConfig::glyph("🥕"), &mut rng);
        let p = &fx.particles()[0];
        assert!(p.velocity.y < 0.0);
        assert!(matches!(&p.body, EffectBody::Flyaway { glyph, .. } if glyph == "🥕"));
    }

    #[test]
    fn gravity_bends_water_downward() {
        let mut rng = GardenRng::default();
        let mut fx = system();
        fx.spawn(EffectKind::Water, Point::new(50.0, 50.0), SpawnConfig::count(1), &mut rng);
        let vy0 = fx.particles()[0].velocity.y;
        fx.tick(DT);
        assert!(fx.particles()[0].velocity.y > vy0);
    }

    #[test]
    fn spawn_is_trimmed_to_capacity() {
        let mut rng = GardenRng::default();
        let mut fx = EffectSystem::new(FieldBounds::default(), 10);
        assert_eq!(fx.spawn(EffectKind::Confetti, Point::default(), SpawnConfig::default(), &mut rng), 10);
        assert_eq!(fx.spawn(EffectKind::Water, Point::default(), SpawnConfig::default(), &mut rng), 0);
        fx.clear();
        assert!(fx.is_empty());
    }
}
