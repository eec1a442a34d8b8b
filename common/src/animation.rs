//! Geometry of the decorative canvases on the dashboard.
//!
//! Nothing here touches a canvas; the frontend draws whatever these
//! functions return, one frame per timer tick.

use std::f64::consts::{PI, TAU};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub const HELIX_WIDTH: u32 = 300;
pub const HELIX_HEIGHT: u32 = 400;
pub const HELIX_RADIUS: f64 = 60.0;
/// Added to the helix clock after every frame.
pub const HELIX_TIME_STEP: f64 = 0.02;
pub const STRAND_COLORS: [&str; 2] = ["#0D7377", "#A239EA"];
pub const BASE_PAIR_COLOR: &str = "#21E6C1";

const STRAND_TOP: u32 = 20;
const STRAND_SAMPLE: usize = 2;
const RUNG_TOP: u32 = 40;
const RUNG_SPACING: usize = 20;

/// One frame of the two-strand helix.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixFrame {
    pub strands: [Vec<Point>; 2],
    /// Base pairs joining the strands, left end first.
    pub rungs: Vec<(Point, Point)>,
}

fn strand_angle(y: f64, time: f64, strand: usize) -> f64 {
    (y * 0.02 + time * 0.01 + strand as f64 * PI) % TAU
}

/// Computes the helix at `time` for a canvas of the given size. The helix
/// occupies the top 80 % of the canvas height.
pub fn helix_frame(time: f64, width: u32, height: u32) -> HelixFrame {
    let center_x = f64::from(width) / 2.0;
    let helix_height = (f64::from(height) * 0.8) as u32;

    let strand = |index: usize| -> Vec<Point> {
        (STRAND_TOP..helix_height)
            .step_by(STRAND_SAMPLE)
            .map(|y| {
                let y = f64::from(y);
                Point {
                    x: center_x + strand_angle(y, time, index).cos() * HELIX_RADIUS,
                    y,
                }
            })
            .collect()
    };

    let rungs = (RUNG_TOP..helix_height)
        .step_by(RUNG_SPACING)
        .map(|y| {
            let y = f64::from(y);
            (
                Point {
                    x: center_x + strand_angle(y, time, 0).cos() * HELIX_RADIUS,
                    y,
                },
                Point {
                    x: center_x + strand_angle(y, time, 1).cos() * HELIX_RADIUS,
                    y,
                },
            )
        })
        .collect();

    HelixFrame {
        strands: [strand(0), strand(1)],
        rungs,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub radius: f64,
}

/// A segment drawn between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    /// `1.0` when the particles touch, fading to `0.0` at the link distance.
    pub opacity: f64,
}

pub const PARTICLE_COUNT: usize = 60;
pub const LINK_DISTANCE: f64 = 110.0;
const MAX_SPEED: f64 = 0.6;
const MIN_RADIUS: f64 = 1.0;
const MAX_RADIUS: f64 = 3.0;

/// Drifting particles that wrap around the canvas edges.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// `random` must return uniform samples in `[0, 1)`.
    pub fn new(count: usize, width: f64, height: f64, mut random: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                position: Point {
                    x: random() * width,
                    y: random() * height,
                },
                velocity: Point {
                    x: (random() * 2.0 - 1.0) * MAX_SPEED,
                    y: (random() * 2.0 - 1.0) * MAX_SPEED,
                },
                radius: MIN_RADIUS + random() * (MAX_RADIUS - MIN_RADIUS),
            })
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    /// Moves every particle one frame, wrapping at the edges.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.position.x = wrap(particle.position.x + particle.velocity.x, self.width);
            particle.position.y = wrap(particle.position.y + particle.velocity.y, self.height);
        }
    }

    /// Keeps particles inside a resized canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for particle in &mut self.particles {
            particle.position.x = wrap(particle.position.x, width);
            particle.position.y = wrap(particle.position.y, height);
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = (a.position.x - b.position.x).hypot(a.position.y - b.position.y);
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        from: a.position,
                        to: b.position,
                        opacity: 1.0 - distance / LINK_DISTANCE,
                    });
                }
            }
        }
        links
    }
}

fn wrap(value: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return 0.0;
    }
    value.rem_euclid(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helix_sampling_matches_canvas() {
        let frame = helix_frame(0.0, HELIX_WIDTH, HELIX_HEIGHT);
        // y from 20 to 318 step 2, and 40 to 300 step 20.
        assert_eq!(frame.strands[0].len(), 150);
        assert_eq!(frame.strands[1].len(), 150);
        assert_eq!(frame.rungs.len(), 14);
        assert_eq!(frame.strands[0][0].y, 20.0);
    }

    #[test]
    fn strands_are_opposite() {
        let frame = helix_frame(3.0, HELIX_WIDTH, HELIX_HEIGHT);
        let center = f64::from(HELIX_WIDTH) / 2.0;
        for (left, right) in &frame.rungs {
            assert!(((left.x - center) + (right.x - center)).abs() < 1e-9);
            assert!((left.x - center).abs() <= HELIX_RADIUS + 1e-9);
        }
    }

    #[test]
    fn particles_wrap_around_edges() {
        let mut field = ParticleField {
            width: 100.0,
            height: 50.0,
            particles: vec![Particle {
                position: Point { x: 99.8, y: 0.1 },
                velocity: Point { x: 0.5, y: -0.3 },
                radius: 2.0,
            }],
        };
        field.step();
        let p = field.particles[0].position;
        assert!((p.x - 0.3).abs() < 1e-9);
        assert!((p.y - 49.8).abs() < 1e-9);
    }

    #[test]
    fn links_only_between_close_particles() {
        let particle = |x: f64| Particle {
            position: Point { x, y: 10.0 },
            velocity: Point { x: 0.0, y: 0.0 },
            radius: 1.0,
        };
        let field = ParticleField {
            width: 500.0,
            height: 100.0,
            particles: vec![particle(0.0), particle(55.0), particle(400.0)],
        };
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn new_field_stays_in_bounds() {
        let mut seed = 0.0_f64;
        let field = ParticleField::new(PARTICLE_COUNT, 320.0, 240.0, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        assert!(field.particles.iter().all(|p| {
            (0.0..320.0).contains(&p.position.x)
                && (0.0..240.0).contains(&p.position.y)
                && (MIN_RADIUS..=MAX_RADIUS).contains(&p.radius)
        }));
    }
}
