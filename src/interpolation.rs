use metfor::{HectoPascal, MetersPSec, Quantity, WindUV};
use std::ops::Sub;

/// Interpolate linearly between two points, `(x1, y1)` and `(x2, y2)`.
#[inline]
pub(crate) fn linear_interp<X, Y>(x_val: X, x1: X, x2: X, y1: Y, y2: Y) -> Y
where
    X: Sub<X> + Copy + std::fmt::Debug + std::cmp::PartialEq,
    <X as Sub<X>>::Output: Quantity,
    Y: Quantity + Sub<Y>,
    <Y as Sub<Y>>::Output: Quantity,
{
    debug_assert_ne!(x1, x2);

    let run = (x2 - x1).unpack();
    let rise = (y2 - y1).unpack();
    let dx = (x_val - x1).unpack();

    Y::pack(y1.unpack() + dx * (rise / run))
}

/// Interpolate the wind components between two levels using pressure as the vertical
/// coordinate.
#[inline]
pub(crate) fn linear_interp_wind(
    tgt_p: HectoPascal,
    (p0, w0): (HectoPascal, WindUV<MetersPSec>),
    (p1, w1): (HectoPascal, WindUV<MetersPSec>),
) -> WindUV<MetersPSec> {
    WindUV {
        u: linear_interp(tgt_p, p0, p1, w0.u, w1.u),
        v: linear_interp(tgt_p, p0, p1, w0.v, w1.v),
    }
}
