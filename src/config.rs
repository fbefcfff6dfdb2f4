//! Configuration for a hodograph.
//!
//! A `HodographConfig` holds everything an operator provides: a name, the date and time, the
//! winds at each standard level, and optional analysis settings. It can be loaded from a TOML
//! file or collected interactively with `prompt::Prompter`.
use crate::{
    analysis::AnalysisParams,
    error::ConfigError,
    helicity::DEFAULT_HELICITY_TOP,
    keys::StormMotionReference,
    sounding::{HodographSounding, SoundingLevel, STANDARD_LEVELS},
    wind::DEFAULT_DEVIATION,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use metfor::{HectoPascal, Knots, Quantity};
use serde::Deserialize;
use std::{fs, path::Path, str::FromStr};
use tracing::debug;

/// Winds at one level as entered by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelConfig {
    /// Pressure in hPa.
    pub pressure_hpa: f64,
    /// Wind speed in knots.
    pub speed_kt: f64,
    /// Direction the wind is from in degrees.
    pub direction_deg: f64,
}

/// Everything needed to make a hodograph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HodographConfig {
    /// Name of the hodograph.
    #[serde(default)]
    pub name: String,
    /// Date in YYYY-MM-DD format.
    #[serde(default)]
    pub date: Option<String>,
    /// UTC time in HHMM or HH:MM format.
    #[serde(default)]
    pub time: Option<String>,
    /// Storm motion deviation from the mean wind in knots.
    #[serde(default = "default_deviation")]
    pub deviation_kt: f64,
    /// Top of the helicity layer in hPa.
    #[serde(default = "default_helicity_top")]
    pub helicity_top_hpa: f64,
    /// The storm motion helicity is measured relative to.
    #[serde(default)]
    pub storm_motion: StormMotionReference,
    /// Winds at each of the standard levels, surface first.
    pub levels: Vec<LevelConfig>,
}

fn default_deviation() -> f64 {
    DEFAULT_DEVIATION.unpack()
}

fn default_helicity_top() -> f64 {
    DEFAULT_HELICITY_TOP.unpack()
}

impl Default for HodographConfig {
    fn default() -> Self {
        HodographConfig {
            name: String::new(),
            date: None,
            time: None,
            deviation_kt: default_deviation(),
            helicity_top_hpa: default_helicity_top(),
            storm_motion: StormMotionReference::default(),
            levels: vec![],
        }
    }
}

impl FromStr for HodographConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: HodographConfig = toml::from_str(s)?;
        Ok(config)
    }
}

impl HodographConfig {
    /// Load a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading hodograph configuration");

        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    /// Parse the date and time into a valid time.
    ///
    /// Without a date there is no valid time. A date without a time is valid at 00 UTC.
    pub fn valid_time(&self) -> Result<Option<NaiveDateTime>, ConfigError> {
        let date = match self.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => parse_date(date)?,
            _ => return Ok(None),
        };

        let time = match self.time.as_deref().map(str::trim) {
            Some(time) if !time.is_empty() => parse_time(time)?,
            _ => NaiveTime::from_hms_opt(0, 0, 0).ok_or(ConfigError::InvalidTime(String::new()))?,
        };

        Ok(Some(date.and_time(time)))
    }

    /// Build a sounding, validating every level.
    ///
    /// The levels must be the standard levels, in order from the surface up.
    pub fn to_sounding(&self) -> Result<HodographSounding, ConfigError> {
        if self.levels.len() != STANDARD_LEVELS.len() {
            return Err(ConfigError::InvalidLevels(format!(
                "expected {} levels, found {}",
                STANDARD_LEVELS.len(),
                self.levels.len()
            )));
        }

        let levels = STANDARD_LEVELS
            .iter()
            .zip(&self.levels)
            .map(|(&std_p, lvl)| -> Result<SoundingLevel, ConfigError> {
                if (lvl.pressure_hpa - std_p.unpack()).abs() > std::f64::EPSILON {
                    return Err(ConfigError::InvalidLevels(format!(
                        "expected a level at {} hPa, found {} hPa",
                        std_p.unpack(),
                        lvl.pressure_hpa
                    )));
                }

                let level = SoundingLevel::new(
                    HectoPascal(lvl.pressure_hpa),
                    Knots(lvl.speed_kt),
                    lvl.direction_deg,
                )?;
                Ok(level)
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let name = if self.name.trim().is_empty() {
            None
        } else {
            Some(self.name.trim().to_owned())
        };

        Ok(HodographSounding::new()
            .with_levels(levels)?
            .with_name(name)
            .with_valid_time(self.valid_time()?))
    }

    /// The analysis settings from this configuration.
    pub fn analysis_params(&self) -> AnalysisParams {
        AnalysisParams {
            deviation: Knots(self.deviation_kt),
            helicity_top: HectoPascal(self.helicity_top_hpa),
            storm_motion: self.storm_motion,
        }
    }
}

/// Parse a date in YYYY-MM-DD format.
pub fn parse_date(val: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(val.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidDate(val.to_owned()))
}

/// Parse a UTC time in HHMM or HH:MM format, a trailing 'Z' is allowed.
pub fn parse_time(val: &str) -> Result<NaiveTime, ConfigError> {
    let trimmed = val.trim().trim_end_matches(|c| c == 'z' || c == 'Z');

    NaiveTime::parse_from_str(trimmed, "%H%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| ConfigError::InvalidTime(val.to_owned()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::AnalysisError;
    use chrono::Timelike;

    const CONFIG: &str = r#"
name = "Moore, OK"
date = "2013-05-20"
time = "1800"
storm_motion = "right-moving"

[[levels]]
pressure_hpa = 1000.0
speed_kt = 10.0
direction_deg = 0.0

[[levels]]
pressure_hpa = 850.0
speed_kt = 15.0
direction_deg = 45.0

[[levels]]
pressure_hpa = 600.0
speed_kt = 20.0
direction_deg = 90.0

[[levels]]
pressure_hpa = 350.0
speed_kt = 25.0
direction_deg = 135.0

[[levels]]
pressure_hpa = 150.0
speed_kt = 30.0
direction_deg = 180.0
"#;

    #[test]
    fn test_parse_config() {
        let config: HodographConfig = CONFIG.parse().unwrap();

        assert_eq!(config.name, "Moore, OK");
        assert_eq!(config.levels.len(), 5);
        assert_eq!(config.storm_motion, StormMotionReference::RightMoving);

        let params = config.analysis_params();
        assert_eq!(params.deviation, Knots(7.5));
        assert_eq!(params.helicity_top, HectoPascal(500.0));

        let snd = config.to_sounding().unwrap();
        assert_eq!(snd.name(), Some("Moore, OK"));
        assert_eq!(snd.levels().len(), 5);

        let vt = snd.valid_time().unwrap();
        assert_eq!(vt.date(), NaiveDate::from_ymd_opt(2013, 5, 20).unwrap());
        assert_eq!(vt.hour(), 18);
        assert_eq!(vt.minute(), 0);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let bad = format!("colour = \"red\"\n{}", CONFIG);
        assert!(matches!(
            bad.parse::<HodographConfig>(),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_wrong_levels() {
        let mut config: HodographConfig = CONFIG.parse().unwrap();
        config.levels.pop();
        assert!(matches!(
            config.to_sounding(),
            Err(ConfigError::InvalidLevels(_))
        ));

        let mut config: HodographConfig = CONFIG.parse().unwrap();
        config.levels[2].pressure_hpa = 700.0;
        assert!(matches!(
            config.to_sounding(),
            Err(ConfigError::InvalidLevels(_))
        ));

        let mut config: HodographConfig = CONFIG.parse().unwrap();
        config.levels[3].direction_deg = 370.0;
        assert!(matches!(
            config.to_sounding(),
            Err(ConfigError::Analysis(AnalysisError::InvalidDirection { .. }))
        ));
    }

    #[test]
    fn test_times() {
        assert_eq!(
            parse_time("1830").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("06:15").unwrap(),
            NaiveTime::from_hms_opt(6, 15, 0).unwrap()
        );
        assert_eq!(
            parse_time("00z").unwrap_err().to_string(),
            "invalid UTC time '00z', expected HHMM or HH:MM"
        );
        assert!(parse_time("2500").is_err());
        assert!(parse_date("2013-02-30").is_err());
        assert!(parse_date("05/20/2013").is_err());

        let config = HodographConfig {
            date: Some("2013-05-20".to_owned()),
            ..HodographConfig::default()
        };
        let vt = config.valid_time().unwrap().unwrap();
        assert_eq!(vt.hour(), 0);

        let config = HodographConfig::default();
        assert!(config.valid_time().unwrap().is_none());
    }
}
