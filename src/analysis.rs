//! Data type and methods for building and describing an analysis.
//!
//! The analysis runs the whole pipeline on a sounding: wind vectors, mean wind, deep layer shear,
//! Bunkers storm motion, and storm relative helicity. It holds everything needed to draw a
//! hodograph.
use crate::{
    error::{AnalysisError, Result},
    helicity::{DiscreteHelicity, HelicityIntegrator, Layer, DEFAULT_HELICITY_TOP},
    keys::StormMotionReference,
    sounding::HodographSounding,
    wind::{
        bulk_shear, bunkers_storm_motion, magnitude, mean_wind, wind_vectors, MotionEstimate,
        DEFAULT_DEVIATION,
    },
};
use metfor::{HectoPascal, IntHelicityM2pS2, Knots, Quantity, WindUV};
use tracing::{debug, info};

/// Settings for an analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisParams {
    /// How far the storm motions are deviated from the mean wind.
    pub deviation: Knots,
    /// Top of the helicity layer, the bottom is always the lowest level.
    pub helicity_top: HectoPascal,
    /// The storm motion helicity is relative to.
    pub storm_motion: StormMotionReference,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        AnalysisParams {
            deviation: DEFAULT_DEVIATION,
            helicity_top: DEFAULT_HELICITY_TOP,
            storm_motion: StormMotionReference::Ground,
        }
    }
}

/// Convenient package for the values derived from a hodograph sounding.
#[derive(Debug, Clone)]
pub struct HodographAnalysis {
    // Sounding used to make the analysis
    sounding: HodographSounding,

    // One per level, surface first
    winds: Vec<WindUV<Knots>>,

    mean_wind: WindUV<Knots>,
    shear: WindUV<Knots>,

    // Storm motion
    right_mover: MotionEstimate,
    left_mover: MotionEstimate,

    // Helicity
    storm_motion_ref: StormMotionReference,
    helicity_layer: Layer,
    helicity: IntHelicityM2pS2,
}

impl HodographAnalysis {
    /// Analyze a sounding, integrating helicity with `DiscreteHelicity`.
    pub fn analyze(snd: HodographSounding, params: &AnalysisParams) -> Result<Self> {
        Self::analyze_with(snd, params, &DiscreteHelicity)
    }

    /// Analyze a sounding with a specific helicity integrator.
    pub fn analyze_with<H>(
        snd: HodographSounding,
        params: &AnalysisParams,
        integrator: &H,
    ) -> Result<Self>
    where
        H: HelicityIntegrator + ?Sized,
    {
        let deviation = params.deviation.unpack();
        if !deviation.is_finite() || deviation < 0.0 {
            return Err(AnalysisError::InvalidInput(
                "storm motion deviation must be zero or more knots",
            ));
        }

        let winds = wind_vectors(&snd);
        debug!(levels = winds.len(), "derived wind vectors");

        let mean_wind = mean_wind(&winds)?;
        let shear = bulk_shear(&winds)?;
        let (right_mover, left_mover) = bunkers_storm_motion(&winds, params.deviation)?;

        let storm_motion = match params.storm_motion {
            StormMotionReference::Ground => WindUV {
                u: Knots(0.0),
                v: Knots(0.0),
            },
            StormMotionReference::RightMoving => right_mover.motion,
            StormMotionReference::LeftMoving => left_mover.motion,
        };

        let helicity_layer = Layer::surface_to(&snd, params.helicity_top)?;
        let helicity = integrator.storm_relative_helicity(
            &snd.pressure_profile(),
            &winds,
            &helicity_layer,
            storm_motion,
        )?;

        info!(
            helicity = helicity.unpack(),
            shear = magnitude(shear).unpack(),
            storm_motion = %params.storm_motion,
            "hodograph analysis complete"
        );

        Ok(HodographAnalysis {
            sounding: snd,
            winds,
            mean_wind,
            shear,
            right_mover,
            left_mover,
            storm_motion_ref: params.storm_motion,
            helicity_layer,
            helicity,
        })
    }

    /// Get the sounding this analysis was made from.
    #[inline]
    pub fn sounding(&self) -> &HodographSounding {
        &self.sounding
    }

    /// Wind vectors for each level, surface first.
    #[inline]
    pub fn wind_vectors(&self) -> &[WindUV<Knots>] {
        &self.winds
    }

    /// Mean wind of the lowest levels.
    #[inline]
    pub fn mean_wind(&self) -> WindUV<Knots> {
        self.mean_wind
    }

    /// Deep layer shear vector.
    #[inline]
    pub fn shear(&self) -> WindUV<Knots> {
        self.shear
    }

    /// Magnitude of the deep layer shear.
    #[inline]
    pub fn shear_magnitude(&self) -> Knots {
        magnitude(self.shear)
    }

    /// Right moving storm motion estimate.
    #[inline]
    pub fn right_mover(&self) -> MotionEstimate {
        self.right_mover
    }

    /// Left moving storm motion estimate.
    #[inline]
    pub fn left_mover(&self) -> MotionEstimate {
        self.left_mover
    }

    /// Which storm motion the helicity is relative to.
    #[inline]
    pub fn storm_motion_reference(&self) -> StormMotionReference {
        self.storm_motion_ref
    }

    /// Layer the helicity was integrated over.
    #[inline]
    pub fn helicity_layer(&self) -> Layer {
        self.helicity_layer
    }

    /// Storm relative helicity.
    #[inline]
    pub fn helicity(&self) -> IntHelicityM2pS2 {
        self.helicity
    }
}
