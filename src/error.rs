//! Error types for the hodograph-analysis crate.
use std::{error::Error, fmt::Display};

/// Error type for the analysis pipeline.
///
/// None of these are fatal, they describe which input needs to be corrected.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AnalysisError {
    /// A wind direction outside of [0, 360) degrees.
    InvalidDirection {
        /// Pressure level (hPa) the bad value was entered for, if it belongs to a level.
        pressure: Option<f64>,
        /// The offending direction in degrees.
        direction: f64,
    },
    /// A negative or non-finite wind speed.
    InvalidSpeed {
        /// Pressure level (hPa) the bad value was entered for, if it belongs to a level.
        pressure: Option<f64>,
        /// The offending speed in knots.
        speed: f64,
    },
    /// The deep layer shear is zero, so there is no direction to deviate the storm motion from.
    DegenerateShear,
    /// Fewer than two observed levels inside the helicity layer.
    InsufficientLevels {
        /// Number of levels found inside the layer.
        found: usize,
    },
    /// Not enough data available for analysis.
    NotEnoughData,
    /// Bad or invalid input.
    InvalidInput(&'static str),
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use crate::error::AnalysisError::*;

        match self {
            InvalidDirection {
                pressure,
                direction,
            } => {
                write!(f, "invalid wind direction {}", direction)?;
                write_level(f, *pressure)?;
                write!(f, ", must be between 0 and 360 degrees")
            }
            InvalidSpeed { pressure, speed } => {
                write!(f, "invalid wind speed {}", speed)?;
                write_level(f, *pressure)?;
                write!(f, ", must be zero or more knots")
            }
            DegenerateShear => write!(
                f,
                "deep layer shear is zero, storm motion is undefined for a uniform wind profile"
            ),
            InsufficientLevels { found } => write!(
                f,
                "need at least 2 levels inside the helicity layer, found {}",
                found
            ),
            NotEnoughData => write!(f, "not enough data available for analysis"),
            InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

fn write_level(f: &mut std::fmt::Formatter, pressure: Option<f64>) -> std::fmt::Result {
    match pressure {
        Some(p) => write!(f, " at {} hPa", p),
        None => Ok(()),
    }
}

impl Error for AnalysisError {}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, AnalysisError>;

/// Errors from loading or collecting a hodograph configuration.
#[derive(Debug)]
pub enum ConfigError {
    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),

    // Other forwarded errors
    /// The configuration file is not valid TOML, or doesn't match the expected layout.
    Toml(::toml::de::Error),
    /// A value failed validation in the analysis layer.
    Analysis(AnalysisError),

    // My own errors
    /// A date that isn't in YYYY-MM-DD format.
    InvalidDate(String),
    /// A UTC time that isn't in HHMM or HH:MM format.
    InvalidTime(String),
    /// A value that couldn't be parsed as a number.
    InvalidNumber(String),
    /// The levels don't match the standard pressure levels.
    InvalidLevels(String),
    /// Input ended before all the values were entered.
    UnexpectedEof,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use crate::error::ConfigError::*;

        match self {
            IO(err) => write!(f, "std lib io error: {}", err),
            Toml(err) => write!(f, "error parsing configuration: {}", err),
            Analysis(err) => write!(f, "{}", err),

            InvalidDate(val) => write!(f, "invalid date '{}', expected YYYY-MM-DD", val),
            InvalidTime(val) => write!(f, "invalid UTC time '{}', expected HHMM or HH:MM", val),
            InvalidNumber(val) => write!(f, "'{}' is not a number", val),
            InvalidLevels(msg) => write!(f, "invalid levels: {}", msg),
            UnexpectedEof => write!(f, "input ended before all values were entered"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::IO(err) => Some(err),
            ConfigError::Toml(err) => Some(err),
            ConfigError::Analysis(err) => Some(err),
            _ => None,
        }
    }
}

impl From<::std::io::Error> for ConfigError {
    fn from(err: ::std::io::Error) -> ConfigError {
        ConfigError::IO(err)
    }
}

impl From<::toml::de::Error> for ConfigError {
    fn from(err: ::toml::de::Error) -> ConfigError {
        ConfigError::Toml(err)
    }
}

impl From<AnalysisError> for ConfigError {
    fn from(err: AnalysisError) -> ConfigError {
        ConfigError::Analysis(err)
    }
}
