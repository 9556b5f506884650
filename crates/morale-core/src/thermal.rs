//! Thermal discomfort tracking.
//!
//! The effect subsystem reports cold and heat exposure per body part. Each
//! category's discomfort worsens by a fixed amount per minute of exposure,
//! down to an exposure ceiling set by the worst exposed region. The moment no
//! region is exposed, the discomfort snaps back to zero: there is no gradual
//! recovery.
//!
//! With a maximum region intensity of `i` the discomfort bottoms out at
//! `-10 * i` under the default configuration.

use std::collections::BTreeMap;

use morale_types::{BodyPart, ThermalCategory};

use crate::config::ThermalConfig;

/// Exposure state of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Exposure {
    /// Non-zero intensities by region.
    intensities: BTreeMap<BodyPart, u32>,
    /// Current discomfort, always `<= 0`.
    discomfort: i32,
    /// Minutes of exposure accrued in the current bout.
    exposed_minutes: u32,
}

impl Exposure {
    /// Largest discomfort magnitude reachable at the current intensities.
    fn ceiling(&self, per_intensity: i32) -> i32 {
        let worst = self.intensities.values().copied().max().unwrap_or(0);
        let worst = i32::try_from(worst).unwrap_or(i32::MAX);
        per_intensity.saturating_mul(worst)
    }
}

/// Per-category thermal discomfort for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThermalComfortTracker {
    growth_per_minute: i32,
    ceiling_per_intensity: i32,
    exposures: BTreeMap<ThermalCategory, Exposure>,
}

impl Default for ThermalComfortTracker {
    fn default() -> Self {
        Self::new(&ThermalConfig::default())
    }
}

impl ThermalComfortTracker {
    /// An unexposed tracker.
    pub const fn new(config: &ThermalConfig) -> Self {
        Self {
            growth_per_minute: config.growth_per_minute,
            ceiling_per_intensity: config.ceiling_per_intensity,
            exposures: BTreeMap::new(),
        }
    }

    /// Record the intensity of one region. Intensity 0 clears the region.
    pub fn set_region_intensity(
        &mut self,
        category: ThermalCategory,
        region: BodyPart,
        intensity: u32,
    ) {
        let exposure = self.exposures.entry(category).or_default();
        if intensity == 0 {
            exposure.intensities.remove(&region);
        } else {
            exposure.intensities.insert(region, intensity);
        }
    }

    /// Current intensity of one region.
    pub fn region_intensity(&self, category: ThermalCategory, region: BodyPart) -> u32 {
        self.exposures
            .get(&category)
            .and_then(|exposure| exposure.intensities.get(&region))
            .copied()
            .unwrap_or(0)
    }

    /// Advance time: exposed categories worsen, relieved ones reset.
    pub fn advance(&mut self, elapsed_minutes: u32) {
        let growth = i64::from(self.growth_per_minute).saturating_mul(i64::from(elapsed_minutes));
        let per_intensity = self.ceiling_per_intensity;
        for (category, exposure) in &mut self.exposures {
            if exposure.intensities.is_empty() {
                if exposure.discomfort != 0 {
                    tracing::debug!(category = ?category, "thermal discomfort relieved");
                }
                exposure.discomfort = 0;
                exposure.exposed_minutes = 0;
                continue;
            }

            let floor = i64::from(exposure.ceiling(per_intensity)).saturating_neg();
            let worsened = i64::from(exposure.discomfort).saturating_sub(growth).max(floor);
            exposure.discomfort = i32::try_from(worsened).unwrap_or(i32::MIN);
            exposure.exposed_minutes = exposure.exposed_minutes.saturating_add(elapsed_minutes);
        }
    }

    /// Signed discomfort of a category; 0 when inactive.
    pub fn aggregate(&self, category: ThermalCategory) -> i32 {
        self.exposures
            .get(&category)
            .map_or(0, |exposure| exposure.discomfort)
    }

    /// Largest discomfort magnitude the category can currently reach.
    pub fn ceiling(&self, category: ThermalCategory) -> i32 {
        self.exposures
            .get(&category)
            .map_or(0, |exposure| exposure.ceiling(self.ceiling_per_intensity))
    }

    /// Minutes of exposure accrued in the current bout.
    pub fn exposure_minutes(&self, category: ThermalCategory) -> u32 {
        self.exposures
            .get(&category)
            .map_or(0, |exposure| exposure.exposed_minutes)
    }

    /// Forget every exposure.
    pub fn clear(&mut self) {
        self.exposures.clear();
    }
}
