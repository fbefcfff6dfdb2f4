//! Enums used as keys for setting options in functions.
use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The storm motion helicity is measured relative to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum StormMotionReference {
    /// A stationary storm, so the helicity is ground relative.
    #[default]
    #[strum(to_string = "ground")]
    Ground,
    /// The Bunkers right mover.
    #[strum(to_string = "right-moving", serialize = "rm")]
    RightMoving,
    /// The Bunkers left mover.
    #[strum(to_string = "left-moving", serialize = "lm")]
    LeftMoving,
}
