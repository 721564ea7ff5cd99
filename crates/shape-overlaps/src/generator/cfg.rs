//! Generation constants.
//!
//! Defaults reproduce the reference population mix: 20% circles, 25% regular
//! polygons, 55% irregular polygons; radii from 10 up to the requested maximum.

use super::GeneratorError;
use crate::shapes::{Color, DEFAULT_PALETTE};

/// Generator configuration (kind mix, radius floor, retry budget, palette).
#[derive(Clone, Debug)]
pub struct GenCfg {
    /// Kind selector below this value yields a circle.
    pub circle_below: f64,
    /// Kind selector below this value (and not a circle) yields a regular polygon.
    pub regular_below: f64,
    /// Smallest generation radius drawn.
    pub min_radius: f64,
    /// Irregular vertex radii as fractions of the generation radius.
    pub radial_band: (f64, f64),
    /// Draws per irregular polygon before the run is aborted as degenerate.
    pub max_attempts: u32,
    pub palette: Vec<Color>,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            circle_below: 0.20,
            regular_below: 0.45,
            min_radius: 10.0,
            radial_band: (0.5, 1.0),
            max_attempts: 16,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl GenCfg {
    pub(crate) fn validate(&self) -> Result<(), GeneratorError> {
        let thresholds_ok = 0.0 <= self.circle_below
            && self.circle_below <= self.regular_below
            && self.regular_below <= 1.0;
        if !thresholds_ok {
            return Err(GeneratorError::invalid(
                "kind thresholds must satisfy 0 <= circle_below <= regular_below <= 1",
            ));
        }
        if !(self.min_radius.is_finite() && self.min_radius > 0.0) {
            return Err(GeneratorError::invalid("min_radius must be finite and > 0"));
        }
        let (lo, hi) = self.radial_band;
        if !(lo > 0.0 && lo <= hi && hi.is_finite()) {
            return Err(GeneratorError::invalid(
                "radial_band must satisfy 0 < lo <= hi",
            ));
        }
        if self.max_attempts == 0 {
            return Err(GeneratorError::invalid("max_attempts must be > 0"));
        }
        if self.palette.is_empty() {
            return Err(GeneratorError::invalid("palette must not be empty"));
        }
        Ok(())
    }
}
