//! Data used in tests.
use crate::sounding::HodographSounding;

/// Winds turning from north to south through east, getting stronger with height.
pub fn turning_sounding() -> HodographSounding {
    HodographSounding::from_standard_levels(&[
        (10.0, 0.0),
        (15.0, 45.0),
        (20.0, 90.0),
        (25.0, 135.0),
        (30.0, 180.0),
    ])
    .unwrap()
}

/// Classic severe weather profile, southeast at the surface veering to west aloft.
pub fn veering_sounding() -> HodographSounding {
    HodographSounding::from_standard_levels(&[
        (15.0, 140.0),
        (35.0, 200.0),
        (45.0, 240.0),
        (60.0, 260.0),
        (70.0, 270.0),
    ])
    .unwrap()
}

/// The same wind at every level.
pub fn uniform_sounding() -> HodographSounding {
    HodographSounding::from_standard_levels(&[
        (20.0, 225.0),
        (20.0, 225.0),
        (20.0, 225.0),
        (20.0, 225.0),
        (20.0, 225.0),
    ])
    .unwrap()
}

/// West winds increasing with height, a straight line hodograph through the origin.
pub fn unidirectional_sounding() -> HodographSounding {
    HodographSounding::from_standard_levels(&[
        (5.0, 270.0),
        (15.0, 270.0),
        (30.0, 270.0),
        (50.0, 270.0),
        (80.0, 270.0),
    ])
    .unwrap()
}
