//! Wind vectors, mean wind, deep layer shear, and Bunkers storm motion.
use crate::{
    error::{AnalysisError, Result},
    sounding::{validate_direction, validate_speed, HodographSounding, SoundingLevel},
};
use metfor::{HectoPascal, Knots, Quantity, WindSpdDir, WindUV};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::debug;

/// Number of levels, counting up from the surface, that go into the mean wind.
///
/// This is a fixed stand in for the 0-6 km layer with the standard levels, not a height or
/// pressure based cutoff.
pub const MEAN_WIND_LEVELS: usize = 4;

/// The default deviation of the storm motion from the mean wind.
pub const DEFAULT_DEVIATION: Knots = Knots(7.5);

/// Which supercell a storm motion estimate describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum Mover {
    /// The mean wind plus the deviation.
    #[strum(to_string = "right-moving", serialize = "rm")]
    RightMoving,
    /// The mean wind minus the deviation.
    #[strum(to_string = "left-moving", serialize = "lm")]
    LeftMoving,
}

impl Mover {
    /// Short label used when marking a hodograph.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Mover::RightMoving => "RM",
            Mover::LeftMoving => "LM",
        }
    }
}

/// A storm motion estimate.
#[derive(Clone, Copy, Debug)]
pub struct MotionEstimate {
    /// Storm motion components.
    pub motion: WindUV<Knots>,
    /// Which mover this is.
    pub label: Mover,
}

/// Convert a wind speed and direction to u-v components, validating them first.
///
/// The direction is where the wind blows from, 360 is treated as 0.
pub fn wind_components(speed: Knots, direction: f64) -> Result<WindUV<Knots>> {
    // Not tied to a level, so there is no pressure to report.
    let speed = validate_speed(None::<HectoPascal>, speed)?;
    let direction = validate_direction(None::<HectoPascal>, direction)?;

    Ok(WindUV::<Knots>::from(WindSpdDir { speed, direction }))
}

/// Get the u-v wind components for each level in the sounding, surface first.
pub fn wind_vectors(snd: &HodographSounding) -> Vec<WindUV<Knots>> {
    snd.levels().iter().map(SoundingLevel::wind_uv).collect()
}

/// Calculate the mean wind over the lowest `MEAN_WIND_LEVELS` levels.
///
/// This is the simple arithmetic mean of the components, it is NOT weighted by pressure or
/// height.
pub fn mean_wind(winds: &[WindUV<Knots>]) -> Result<WindUV<Knots>> {
    if winds.len() < MEAN_WIND_LEVELS {
        return Err(AnalysisError::NotEnoughData);
    }

    let (sum_u, sum_v) = winds
        .iter()
        .take(MEAN_WIND_LEVELS)
        .fold((0.0, 0.0), |(su, sv), WindUV { u, v }| {
            (su + u.unpack(), sv + v.unpack())
        });

    let n = MEAN_WIND_LEVELS as f64;
    Ok(WindUV {
        u: Knots(sum_u / n),
        v: Knots(sum_v / n),
    })
}

/// Calculate the deep layer shear, the top wind minus the bottom wind.
pub fn bulk_shear(winds: &[WindUV<Knots>]) -> Result<WindUV<Knots>> {
    if winds.len() < 2 {
        return Err(AnalysisError::NotEnoughData);
    }

    let bottom = winds[0];
    let top = winds[winds.len() - 1];

    Ok(WindUV {
        u: Knots(top.u.unpack() - bottom.u.unpack()),
        v: Knots(top.v.unpack() - bottom.v.unpack()),
    })
}

/// The magnitude of a wind or shear vector.
#[inline]
pub fn magnitude(uv: WindUV<Knots>) -> Knots {
    Knots(uv.u.unpack().hypot(uv.v.unpack()))
}

/// Calculate the super cell storm motions using the Bunkers method.
///
/// The deviation is applied perpendicular to the deep layer shear, rotated 90 degrees counter
/// clockwise, and added to the mean wind for the right mover and subtracted for the left mover.
///
/// Returns (right mover, left mover).
pub fn bunkers_storm_motion(
    winds: &[WindUV<Knots>],
    deviation: Knots,
) -> Result<(MotionEstimate, MotionEstimate)> {
    let WindUV {
        u: mean_u,
        v: mean_v,
    } = mean_wind(winds)?;

    let shear = bulk_shear(winds)?;
    let shear_mag = magnitude(shear).unpack();

    if shear_mag < std::f64::EPSILON {
        return Err(AnalysisError::DegenerateShear);
    }

    let scale = deviation.unpack() / shear_mag;
    let (delta_u, delta_v) = (-shear.v.unpack() * scale, shear.u.unpack() * scale);

    debug!(
        mean_u = mean_u.unpack(),
        mean_v = mean_v.unpack(),
        shear_mag,
        delta_u,
        delta_v,
        "bunkers storm motion"
    );

    Ok((
        MotionEstimate {
            motion: WindUV {
                u: Knots(mean_u.unpack() + delta_u),
                v: Knots(mean_v.unpack() + delta_v),
            },
            label: Mover::RightMoving,
        },
        MotionEstimate {
            motion: WindUV {
                u: Knots(mean_u.unpack() - delta_u),
                v: Knots(mean_v.unpack() - delta_v),
            },
            label: Mover::LeftMoving,
        },
    ))
}
