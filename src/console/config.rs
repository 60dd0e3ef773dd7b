/// Console settings. Defaults can be overridden through `LIFE_*` environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Generations rendered per second by `run`; `0` disables the limit.
    pub max_fps: f64,
    /// Side of the square filled by `random`.
    pub random_side: u32,
    /// Probability of a cell being alive in a random soup.
    pub fill_rate: f64,
    /// Seed used by `random` when none is typed.
    pub seed: Option<u64>,
    /// Largest view, in cells, that is printed; bigger boards only get the status line.
    pub max_view_cells: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fps: Self::MAX_FPS,
            random_side: Self::RANDOM_SIDE,
            fill_rate: Self::FILL_RATE,
            seed: None,
            max_view_cells: Self::MAX_VIEW_CELLS,
        }
    }
}

impl Config {
    pub const MAX_FPS: f64 = 10.;
    pub const RANDOM_SIDE: u32 = 16;
    pub const FILL_RATE: f64 = 0.3;
    pub const MAX_VIEW_CELLS: u64 = 40_000;

    pub const ENV_MAX_FPS: &'static str = "LIFE_MAX_FPS";
    pub const ENV_RANDOM_SIDE: &'static str = "LIFE_RANDOM_SIDE";
    pub const ENV_FILL_RATE: &'static str = "LIFE_FILL_RATE";
    pub const ENV_SEED: &'static str = "LIFE_SEED";
    pub const ENV_MAX_VIEW_CELLS: &'static str = "LIFE_MAX_VIEW_CELLS";

    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies every value `lookup` knows about. Unparsable values are reported and skipped.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn read<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            let raw = lookup(key)?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(key, value = %raw, "ignoring unparsable setting");
                    None
                }
            }
        }

        if let Some(v) = read::<f64>(&lookup, Self::ENV_MAX_FPS) {
            self.max_fps = v.max(0.);
        }
        if let Some(v) = read(&lookup, Self::ENV_RANDOM_SIDE) {
            self.random_side = v;
        }
        if let Some(v) = read::<f64>(&lookup, Self::ENV_FILL_RATE) {
            self.fill_rate = v.clamp(0., 1.);
        }
        if let Some(v) = read(&lookup, Self::ENV_SEED) {
            self.seed = Some(v);
        }
        if let Some(v) = read(&lookup, Self::ENV_MAX_VIEW_CELLS) {
            self.max_view_cells = v;
        }
        self
    }
}
