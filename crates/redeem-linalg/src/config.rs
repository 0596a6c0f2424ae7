use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Controls how floating-point vectors and matrices are compared by `approx_eq`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    pub tolerance: f64,

    #[serde(default)]
    pub mode: ToleranceMode,
}

/// How the tolerance is applied to a pair of elements.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToleranceMode {
    /// `|a - b| <= tolerance`
    #[default]
    Absolute,
    /// `|a - b| <= tolerance * max(|a|, |b|, 1)`
    Relative,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        ToleranceConfig {
            tolerance: 1e-5,
            mode: ToleranceMode::Absolute,
        }
    }
}

impl ToleranceConfig {
    pub fn new(tolerance: f64, mode: ToleranceMode) -> Self {
        ToleranceConfig { tolerance, mode }
    }

    pub fn absolute(tolerance: f64) -> Self {
        Self::new(tolerance, ToleranceMode::Absolute)
    }

    pub fn relative(tolerance: f64) -> Self {
        Self::new(tolerance, ToleranceMode::Relative)
    }

    /// Whether `a` and `b` are equal under this tolerance.
    pub fn is_close<F: num_traits::Float>(&self, a: F, b: F) -> bool {
        if a == b {
            return true;
        }
        // Unequal infinities and NaN are never close.
        let diff = match (a - b).abs().to_f64() {
            Some(d) if d.is_finite() => d,
            _ => return false,
        };
        match self.mode {
            ToleranceMode::Absolute => diff <= self.tolerance,
            ToleranceMode::Relative => {
                let scale = a
                    .abs()
                    .max(b.abs())
                    .to_f64()
                    .map_or(1.0, |s| s.max(1.0));
                diff <= self.tolerance * scale
            }
        }
    }
}

impl FromStr for ToleranceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "absolute" | "abs" => Ok(ToleranceMode::Absolute),
            "relative" | "rel" => Ok(ToleranceMode::Relative),
            _ => Err(format!("Unknown tolerance mode: {}", s)),
        }
    }
}
