//! Layout and motion for the decorative particle backdrop.

/// Frame length the particle speeds are expressed against.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    /// Distance travelled per frame.
    pub speed: f64,
    pub size: f64,
    pub opacity: f64,
    pub link_distance: f64,
    pub link_opacity: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 40,
            speed: 1.5,
            size: 1.0,
            opacity: 0.5,
            link_distance: 150.0,
            link_opacity: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

// xorshift64*, enough for scattering dots
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        let bits = self.0.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
        bits as f64 / (1u64 << 53) as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    pub config: ParticleConfig,
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Scatters `config.count` particles over the area. The same seed always
    /// yields the same field so server and browser render identical markup.
    pub fn generate(config: ParticleConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let particles = (0..config.count)
            .map(|_| {
                let x = rng.next_f64() * width;
                let y = rng.next_f64() * height;
                let angle = rng.next_f64() * std::f64::consts::TAU;
                Particle {
                    x,
                    y,
                    dx: angle.cos() * config.speed,
                    dy: angle.sin() * config.speed,
                }
            })
            .collect();
        Self {
            config,
            width,
            height,
            particles,
        }
    }

    /// Advances every particle by `elapsed_ms`, bouncing off the edges.
    pub fn step(&mut self, elapsed_ms: f64) {
        let frames = elapsed_ms / FRAME_MS;
        for p in &mut self.particles {
            p.x += p.dx * frames;
            p.y += p.dy * frames;
            if p.x < 0.0 || p.x > self.width {
                p.dx = -p.dx;
                p.x = p.x.clamp(0.0, self.width);
            }
            if p.y < 0.0 || p.y > self.height {
                p.dy = -p.dy;
                p.y = p.y.clamp(0.0, self.height);
            }
        }
    }

    /// Pairs close enough to be joined, fading out towards the link distance.
    pub fn links(&self) -> Vec<Link> {
        let max = self.config.link_distance;
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance <= max {
                    links.push(Link {
                        from: i,
                        to: j,
                        opacity: self.config.link_opacity * (1.0 - distance / max),
                    });
                }
            }
        }
        links
    }
}
