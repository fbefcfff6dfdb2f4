//! Data type and methods to store a hodograph sounding.
//!
//! A hodograph sounding is only the wind at a handful of pressure levels, ordered from the surface
//! up. Every value is validated when it is added, so the rest of the crate can assume directions
//! are in [0, 360) and speeds are not negative.

use crate::error::{AnalysisError, Result};
use chrono::NaiveDateTime;
use metfor::{HectoPascal, Knots, Quantity, WindSpdDir, WindUV};

/// The pressure levels winds are collected at, from the surface up.
pub const STANDARD_LEVELS: [HectoPascal; 5] = [
    HectoPascal(1000.0),
    HectoPascal(850.0),
    HectoPascal(600.0),
    HectoPascal(350.0),
    HectoPascal(150.0),
];

/// The wind observed at one pressure level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundingLevel {
    pressure: HectoPascal,
    wind: WindSpdDir<Knots>,
}

impl SoundingLevel {
    /// Create a level, validating the wind speed and direction.
    ///
    /// A direction of exactly 360 degrees is the usual way of reporting a north wind, so it is
    /// stored as 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hodograph_analysis::SoundingLevel;
    /// use metfor::{HectoPascal, Knots};
    ///
    /// let lvl = SoundingLevel::new(HectoPascal(850.0), Knots(15.0), 360.0).unwrap();
    /// assert_eq!(lvl.wind_direction(), 0.0);
    ///
    /// assert!(SoundingLevel::new(HectoPascal(850.0), Knots(15.0), 361.0).is_err());
    /// assert!(SoundingLevel::new(HectoPascal(850.0), Knots(-1.0), 90.0).is_err());
    /// ```
    pub fn new(pressure: HectoPascal, speed: Knots, direction: f64) -> Result<Self> {
        if !(pressure.unpack() > 0.0) || !pressure.unpack().is_finite() {
            return Err(AnalysisError::InvalidInput("pressure must be positive"));
        }

        let speed = validate_speed(pressure, speed)?;
        let direction = validate_direction(pressure, direction)?;

        Ok(SoundingLevel {
            pressure,
            wind: WindSpdDir { speed, direction },
        })
    }

    /// Pressure of this level.
    #[inline]
    pub fn pressure(&self) -> HectoPascal {
        self.pressure
    }

    /// Wind speed at this level.
    #[inline]
    pub fn wind_speed(&self) -> Knots {
        self.wind.speed
    }

    /// Direction the wind is blowing from in degrees, always in [0, 360).
    #[inline]
    pub fn wind_direction(&self) -> f64 {
        self.wind.direction
    }

    /// The wind as speed and direction.
    #[inline]
    pub fn wind(&self) -> WindSpdDir<Knots> {
        self.wind
    }

    /// The wind as u-v components.
    ///
    /// The direction is where the wind comes from, so the vector points the opposite way:
    /// `u = -speed * sin(direction)` and `v = -speed * cos(direction)`.
    #[inline]
    pub fn wind_uv(&self) -> WindUV<Knots> {
        WindUV::<Knots>::from(self.wind)
    }
}

/// Check a wind direction, mapping 360 to 0.
///
/// `pressure` is the level the direction was entered for, it is only used to describe the error.
pub fn validate_direction<P>(pressure: P, direction: f64) -> Result<f64>
where
    Option<HectoPascal>: From<P>,
{
    if direction.is_nan() || direction < 0.0 || direction > 360.0 {
        Err(AnalysisError::InvalidDirection {
            pressure: Option::from(pressure).map(|p: HectoPascal| p.unpack()),
            direction,
        })
    } else if direction == 360.0 {
        Ok(0.0)
    } else {
        Ok(direction)
    }
}

/// Check a wind speed is finite and not negative.
pub fn validate_speed<P>(pressure: P, speed: Knots) -> Result<Knots>
where
    Option<HectoPascal>: From<P>,
{
    let spd = speed.unpack();
    if !spd.is_finite() || spd < 0.0 {
        Err(AnalysisError::InvalidSpeed {
            pressure: Option::from(pressure).map(|p: HectoPascal| p.unpack()),
            speed: spd,
        })
    } else {
        Ok(speed)
    }
}

/// The winds at each level, along with a description of the hodograph.
#[derive(Clone, Debug, Default)]
pub struct HodographSounding {
    // Name given to the hodograph by the operator.
    name: Option<String>,

    // Valid time of sounding, UTC.
    valid_time: Option<NaiveDateTime>,

    // Surface first, pressure strictly decreasing.
    levels: Vec<SoundingLevel>,
}

impl HodographSounding {
    /// Create a new sounding with no levels. This is a proxy for default with a clearer name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hodograph_analysis::HodographSounding;
    ///
    /// let snd = HodographSounding::new();
    /// assert!(snd.levels().is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        HodographSounding::default()
    }

    /// Build a sounding from (speed knots, direction degrees) pairs at the `STANDARD_LEVELS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hodograph_analysis::HodographSounding;
    ///
    /// let snd = HodographSounding::from_standard_levels(&[
    ///     (10.0, 0.0),
    ///     (15.0, 45.0),
    ///     (20.0, 90.0),
    ///     (25.0, 135.0),
    ///     (30.0, 180.0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(snd.levels().len(), 5);
    /// ```
    pub fn from_standard_levels(winds: &[(f64, f64)]) -> Result<Self> {
        if winds.len() != STANDARD_LEVELS.len() {
            return Err(AnalysisError::InvalidInput(
                "one wind is required for each standard level",
            ));
        }

        let levels = STANDARD_LEVELS
            .iter()
            .zip(winds)
            .map(|(&p, &(spd, dir))| SoundingLevel::new(p, Knots(spd), dir))
            .collect::<Result<Vec<_>>>()?;

        HodographSounding::new().with_levels(levels)
    }

    /// Builder method for the levels.
    ///
    /// The levels must be ordered from the surface up, so pressure must be strictly decreasing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hodograph_analysis::{HodographSounding, SoundingLevel};
    /// use metfor::{HectoPascal, Knots};
    ///
    /// let sfc = SoundingLevel::new(HectoPascal(1000.0), Knots(10.0), 180.0).unwrap();
    /// let aloft = SoundingLevel::new(HectoPascal(500.0), Knots(40.0), 270.0).unwrap();
    ///
    /// assert!(HodographSounding::new().with_levels(vec![sfc, aloft]).is_ok());
    /// assert!(HodographSounding::new().with_levels(vec![aloft, sfc]).is_err());
    /// ```
    pub fn with_levels(self, levels: Vec<SoundingLevel>) -> Result<Self> {
        let decreasing = levels
            .windows(2)
            .all(|pair| pair[0].pressure() > pair[1].pressure());

        if !decreasing {
            return Err(AnalysisError::InvalidInput(
                "levels must be ordered with pressure decreasing upward",
            ));
        }

        Ok(Self { levels, ..self })
    }

    /// Get the levels, surface first.
    #[inline]
    pub fn levels(&self) -> &[SoundingLevel] {
        &self.levels
    }

    /// Get the lowest level.
    #[inline]
    pub fn surface(&self) -> Option<&SoundingLevel> {
        self.levels.first()
    }

    /// Get the pressure at each level.
    pub fn pressure_profile(&self) -> Vec<HectoPascal> {
        self.levels.iter().map(SoundingLevel::pressure).collect()
    }

    /// Add a name to this hodograph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hodograph_analysis::HodographSounding;
    ///
    /// let snd = HodographSounding::new().with_name("Moore, OK".to_owned());
    /// assert_eq!(snd.name().unwrap(), "Moore, OK");
    ///
    /// let snd = snd.with_name(None);
    /// assert!(snd.name().is_none());
    /// ```
    #[inline]
    pub fn with_name<S>(mut self, name: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.name = Option::from(name);
        self
    }

    /// Retrieve the name of this hodograph.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Builder method for the valid time of the sounding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use hodograph_analysis::HodographSounding;
    ///
    /// let vt = NaiveDate::from_ymd_opt(2013, 5, 20).unwrap().and_hms_opt(18, 0, 0).unwrap();
    /// let snd = HodographSounding::new().with_valid_time(vt);
    /// assert_eq!(snd.valid_time(), Some(vt));
    /// ```
    #[inline]
    pub fn with_valid_time<T>(mut self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.valid_time = Option::from(valid_time);
        self
    }

    /// Get the valid time of the sounding.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }
}
