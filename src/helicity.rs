//! Storm relative helicity.
//!
//! The integral is hidden behind the `HelicityIntegrator` trait so a different discretization can
//! be swapped in without touching the rest of the analysis. `DiscreteHelicity` is the default.
use crate::{
    error::{AnalysisError, Result},
    interpolation::linear_interp_wind,
    sounding::HodographSounding,
    wind::wind_vectors,
};
use itertools::{izip, Itertools};
use metfor::{HectoPascal, IntHelicityM2pS2, Knots, MetersPSec, Quantity, WindUV};
use tracing::{debug, trace};

/// Default top of the helicity layer.
pub const DEFAULT_HELICITY_TOP: HectoPascal = HectoPascal(500.0);

/// A layer in the atmosphere described by the pressure at the top and bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Pressure at the bottom of the layer.
    pub bottom: HectoPascal,
    /// Pressure at the top of the layer.
    pub top: HectoPascal,
}

impl Layer {
    /// Create a layer from the lowest level of the sounding up to `top`.
    pub fn surface_to(snd: &HodographSounding, top: HectoPascal) -> Result<Layer> {
        let bottom = snd
            .surface()
            .ok_or(AnalysisError::NotEnoughData)?
            .pressure();

        let layer = Layer { bottom, top };
        layer.validate()?;
        Ok(layer)
    }

    /// Whether a pressure is inside the layer, including the boundaries.
    #[inline]
    pub fn contains(&self, p: HectoPascal) -> bool {
        p <= self.bottom && p >= self.top
    }

    fn validate(&self) -> Result<()> {
        if self.top.unpack() > 0.0 && self.top < self.bottom {
            Ok(())
        } else {
            Err(AnalysisError::InvalidInput(
                "the top of the helicity layer must be above the bottom",
            ))
        }
    }
}

/// Something that can integrate the storm relative helicity of a wind profile.
///
/// `pressure` and `wind` are parallel profiles ordered from the surface up. Implementations must
/// fail with `AnalysisError::InsufficientLevels` when fewer than two levels of the profile are
/// inside `layer`.
pub trait HelicityIntegrator {
    /// Integrate the helicity relative to `storm_motion` over `layer`.
    fn storm_relative_helicity(
        &self,
        pressure: &[HectoPascal],
        wind: &[WindUV<Knots>],
        layer: &Layer,
        storm_motion: WindUV<Knots>,
    ) -> Result<IntHelicityM2pS2>;
}

impl<F> HelicityIntegrator for F
where
    F: Fn(&[HectoPascal], &[WindUV<Knots>], &Layer, WindUV<Knots>) -> Result<IntHelicityM2pS2>,
{
    fn storm_relative_helicity(
        &self,
        pressure: &[HectoPascal],
        wind: &[WindUV<Knots>],
        layer: &Layer,
        storm_motion: WindUV<Knots>,
    ) -> Result<IntHelicityM2pS2> {
        self(pressure, wind, layer, storm_motion)
    }
}

/// The standard discrete form of storm relative helicity.
///
/// Each pair of consecutive levels contributes `(u1 - cu)(v0 - cv) - (u0 - cu)(v1 - cv)`, which
/// is twice the signed area swept out on the hodograph relative to the storm motion `(cu, cv)`.
/// Layer boundaries that fall between two levels get a level interpolated linearly in pressure.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscreteHelicity;

impl HelicityIntegrator for DiscreteHelicity {
    fn storm_relative_helicity(
        &self,
        pressure: &[HectoPascal],
        wind: &[WindUV<Knots>],
        layer: &Layer,
        storm_motion: WindUV<Knots>,
    ) -> Result<IntHelicityM2pS2> {
        if pressure.len() != wind.len() {
            return Err(AnalysisError::InvalidInput(
                "pressure and wind profiles must be the same length",
            ));
        }
        layer.validate()?;

        let storm_motion = to_mps(&storm_motion);

        let profile: Vec<(HectoPascal, WindUV<MetersPSec>)> = izip!(pressure, wind)
            .map(|(&p, w)| (p, to_mps(w)))
            .collect();

        let found = profile.iter().filter(|(p, _)| layer.contains(*p)).count();
        if found < 2 {
            return Err(AnalysisError::InsufficientLevels { found });
        }

        let bottom = interpolated_level(&profile, layer.bottom);
        let top = interpolated_level(&profile, layer.top);
        trace!(?bottom, ?top, "interpolated layer boundaries");

        let srh = bottom
            .into_iter()
            // Levels inside the layer
            .chain(profile.iter().copied().filter(|(p, _)| layer.contains(*p)))
            .chain(top)
            // Storm relative components
            .map(|(_, WindUV { u, v })| {
                (
                    u.unpack() - storm_motion.u.unpack(),
                    v.unpack() - storm_motion.v.unpack(),
                )
            })
            // Two levels at a time
            .tuple_windows::<(_, _)>()
            .map(|((u0, v0), (u1, v1))| u1 * v0 - u0 * v1)
            .sum::<f64>();

        debug!(
            bottom = layer.bottom.unpack(),
            top = layer.top.unpack(),
            levels = found,
            srh,
            "storm relative helicity"
        );

        Ok(IntHelicityM2pS2(srh))
    }
}

/// Storm relative helicity of the sounding over `layer`, using `DiscreteHelicity`.
pub fn sr_helicity(
    snd: &HodographSounding,
    layer: &Layer,
    storm_motion: WindUV<Knots>,
) -> Result<IntHelicityM2pS2> {
    DiscreteHelicity.storm_relative_helicity(
        &snd.pressure_profile(),
        &wind_vectors(snd),
        layer,
        storm_motion,
    )
}

#[inline]
fn to_mps(wind: &WindUV<Knots>) -> WindUV<MetersPSec> {
    WindUV {
        u: MetersPSec::from(wind.u),
        v: MetersPSec::from(wind.v),
    }
}

// A level at `tgt_p` if it falls strictly between two levels of the profile.
fn interpolated_level(
    profile: &[(HectoPascal, WindUV<MetersPSec>)],
    tgt_p: HectoPascal,
) -> Option<(HectoPascal, WindUV<MetersPSec>)> {
    profile
        .iter()
        .copied()
        .tuple_windows::<(_, _)>()
        .find(|((p0, _), (p1, _))| *p0 > tgt_p && *p1 < tgt_p)
        .map(|(lvl0, lvl1)| (tgt_p, linear_interp_wind(tgt_p, lvl0, lvl1)))
}
