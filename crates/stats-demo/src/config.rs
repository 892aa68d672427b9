use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::DemoError;

const ENV_PREFIX: &str = "STATS_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sort,
    Extreme,
    Median,
    All,
}

impl FromStr for Mode {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sort" => Ok(Mode::Sort),
            "extreme" | "min" | "max" => Ok(Mode::Extreme),
            "median" => Ok(Mode::Median),
            "all" => Ok(Mode::All),
            _ => Err(DemoError::UnknownMode(s.to_string())),
        }
    }
}

/**
Settings read from `STATS_*` environment variables, with `.env` loaded first.
When `values` is empty, `count` random values are drawn from `[low, high)`.
*/
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_low")]
    pub low: f64,
    #[serde(default = "default_high")]
    pub high: f64,
    pub seed: Option<u64>,
}

fn default_mode() -> String {
    String::from("all")
}

fn default_count() -> usize {
    16
}

fn default_low() -> f64 {
    0.0
}

fn default_high() -> f64 {
    100.0
}

impl Config {
    pub fn from_env() -> Result<Self, DemoError> {
        if let Err(error) = dotenv::dotenv() {
            tracing::debug!(%error, "No .env file loaded");
        }
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Config>()?)
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(pairs)?)
    }

    pub fn mode(&self) -> Result<Mode, DemoError> {
        self.mode.parse()
    }

    /**
    The stream to feed into the maintainers: the configured values when there
    are any, otherwise `count` random draws.
    */
    pub fn input(&self) -> Result<Vec<f64>, DemoError> {
        if !self.values.is_empty() {
            return Ok(self.values.clone());
        }
        if self.count == 0 {
            return Err(DemoError::EmptyInput);
        }
        if !(self.low.is_finite() && self.high.is_finite() && self.low < self.high) {
            return Err(DemoError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok((0..self.count)
            .map(|_| rng.gen_range(self.low..self.high))
            .collect())
    }
}
