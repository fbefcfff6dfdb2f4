#![warn(missing_docs)]
//! Storm motion and storm relative helicity from a hodograph sounding.
//!
//! A hodograph sounding is the wind at a few pressure levels, entered by hand or loaded from a
//! configuration file. From it this crate derives the wind vectors, the mean wind, the deep layer
//! shear, Bunkers right and left moving storm motions, and storm relative helicity, and it can
//! draw the result as a text hodograph.
//!
//! # Examples
//!
//! ```rust
//! use hodograph_analysis::{AnalysisParams, HodographAnalysis, HodographSounding};
//! use metfor::Quantity;
//!
//! let snd = HodographSounding::from_standard_levels(&[
//!     (10.0, 0.0),
//!     (15.0, 45.0),
//!     (20.0, 90.0),
//!     (25.0, 135.0),
//!     (30.0, 180.0),
//! ])
//! .unwrap();
//!
//! let anal = HodographAnalysis::analyze(snd, &AnalysisParams::default()).unwrap();
//!
//! let rm = anal.right_mover().motion;
//! let lm = anal.left_mover().motion;
//! let separation = (rm.u.unpack() - lm.u.unpack()).hypot(rm.v.unpack() - lm.v.unpack());
//! assert!((separation - 15.0).abs() < 1.0e-9);
//! ```

//
// API
//
pub use crate::{
    analysis::{AnalysisParams, HodographAnalysis},
    config::{HodographConfig, LevelConfig},
    error::{AnalysisError, ConfigError, Result},
    helicity::{sr_helicity, DiscreteHelicity, HelicityIntegrator, Layer, DEFAULT_HELICITY_TOP},
    keys::StormMotionReference,
    prompt::Prompter,
    render::{summary, title, HodographPlot},
    sounding::{HodographSounding, SoundingLevel, STANDARD_LEVELS},
    wind::{
        bulk_shear, bunkers_storm_motion, magnitude, mean_wind, wind_components, wind_vectors,
        MotionEstimate, Mover, DEFAULT_DEVIATION, MEAN_WIND_LEVELS,
    },
};

//
// Internal use only
//

// Modules
mod analysis;
mod config;
mod error;
mod helicity;
mod interpolation;
mod keys;
mod prompt;
mod render;
mod sounding;
mod wind;

#[cfg(test)]
mod test_data;
#[cfg(test)]
mod utility;
