//! Annealing configuration.

/// Configuration for an annealing run.
///
/// Defaults: rooms of four, initial temperature 10 000 with geometric
/// cooling at 0.95, a cooling window of 2 000 accepts or 20 000 rejects.
///
/// # Examples
///
/// ```
/// use room_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_factor(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Members per room. The population must be a multiple of this.
    pub room_capacity: usize,

    /// Initial temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Temperature floor. The run stops once cooling reaches it, which
    /// bounds pathological instances whose acceptance rate never
    /// collapses.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied at every cooling event.
    pub cooling_factor: f64,

    /// Accepted moves that trigger a cooling event and reset the window.
    pub accepts_per_cooling: usize,

    /// Rejected moves that trigger a cooling event; a full window of this
    /// many rejects with zero accepts terminates the run.
    pub rejects_per_cooling: usize,

    /// Positions exchanged by a pair swap, as `(position in room A,
    /// position in room B)` pairs. Every position must be below
    /// `room_capacity` and may appear at most once per side.
    pub pair_positions: Vec<(usize, usize)>,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Random seed. `None` draws a fresh seed at run start.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            room_capacity: 4,
            initial_temperature: 10_000.0,
            min_temperature: 1e-9,
            cooling_factor: 0.95,
            accepts_per_cooling: 2_000,
            rejects_per_cooling: 20_000,
            pair_positions: vec![(0, 2), (1, 3)],
            max_iterations: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_room_capacity(mut self, capacity: usize) -> Self {
        self.room_capacity = capacity;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_accepts_per_cooling(mut self, n: usize) -> Self {
        self.accepts_per_cooling = n;
        self
    }

    pub fn with_rejects_per_cooling(mut self, n: usize) -> Self {
        self.rejects_per_cooling = n;
        self
    }

    pub fn with_pair_positions(mut self, positions: Vec<(usize, usize)>) -> Self {
        self.pair_positions = positions;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.room_capacity == 0 {
            return Err("room_capacity must be positive".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        if self.accepts_per_cooling == 0 {
            return Err("accepts_per_cooling must be positive".into());
        }
        if self.rejects_per_cooling == 0 {
            return Err("rejects_per_cooling must be positive".into());
        }
        if self.pair_positions.is_empty() {
            return Err("pair_positions must not be empty".into());
        }
        let mut used_a = vec![false; self.room_capacity];
        let mut used_b = vec![false; self.room_capacity];
        for &(pos_a, pos_b) in &self.pair_positions {
            if pos_a >= self.room_capacity || pos_b >= self.room_capacity {
                return Err(format!(
                    "pair position ({pos_a}, {pos_b}) exceeds room capacity {}",
                    self.room_capacity
                ));
            }
            if used_a[pos_a] || used_b[pos_b] {
                return Err(format!(
                    "pair position ({pos_a}, {pos_b}) repeats a position on one side"
                ));
            }
            used_a[pos_a] = true;
            used_b[pos_b] = true;
        }
        Ok(())
    }
}
