//! Draw a hodograph as text.
//!
//! The plot is a grid of characters centered on calm, with u increasing to the right and v
//! increasing upward. Rings mark wind speed at a fixed increment.
use crate::{analysis::HodographAnalysis, keys::StormMotionReference, sounding::HodographSounding};
use metfor::{Knots, Quantity, WindSpdDir, WindUV};
use std::fmt::Write;

const RING: char = '.';
const PROFILE: char = '*';
const MEAN: char = 'M';
const RIGHT_MOVER: char = 'R';
const LEFT_MOVER: char = 'L';

/// Settings for drawing a hodograph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HodographPlot {
    range: Knots,
    ring_increment: Knots,
    width: usize,
    height: usize,
}

impl Default for HodographPlot {
    fn default() -> Self {
        HodographPlot {
            range: Knots(100.0),
            ring_increment: Knots(20.0),
            width: 61,
            height: 31,
        }
    }
}

impl HodographPlot {
    /// Create a plot with the default settings, 100 knot range with rings every 20 knots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest wind speed shown along each axis.
    pub fn with_range(self, range: Knots) -> Self {
        let range = if range.unpack() > 0.0 {
            range
        } else {
            Self::default().range
        };
        Self { range, ..self }
    }

    /// Set the spacing of the speed rings.
    pub fn with_ring_increment(self, ring_increment: Knots) -> Self {
        let ring_increment = if ring_increment.unpack() > 0.0 {
            ring_increment
        } else {
            Self::default().ring_increment
        };
        Self {
            ring_increment,
            ..self
        }
    }

    /// Set the size in characters. Sizes are made odd so calm sits on the center cell.
    pub fn with_size(self, width: usize, height: usize) -> Self {
        let fix = |n: usize| n.max(11) | 1;
        Self {
            width: fix(width),
            height: fix(height),
            ..self
        }
    }

    /// Width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in characters.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Draw the wind profile, the mean wind, and the storm motions.
    ///
    /// Levels are marked with their number counting up from the surface, values outside the
    /// range are left off.
    pub fn render(&self, anal: &HodographAnalysis) -> String {
        let mut canvas = vec![vec![' '; self.width]; self.height];

        self.draw_rings(&mut canvas);
        self.draw_axes(&mut canvas);

        let points: Vec<(f64, f64)> = anal
            .wind_vectors()
            .iter()
            .map(|w| self.position(w))
            .collect();
        for pair in points.windows(2) {
            if let Some((from, to)) = self.clip(pair[0], pair[1]) {
                self.draw_segment(&mut canvas, from, to);
            }
        }
        for (i, w) in anal.wind_vectors().iter().enumerate() {
            self.put(&mut canvas, self.cell(w), level_mark(i));
        }

        self.put(&mut canvas, self.cell(&anal.mean_wind()), MEAN);
        self.put(&mut canvas, self.cell(&anal.right_mover().motion), RIGHT_MOVER);
        self.put(&mut canvas, self.cell(&anal.left_mover().motion), LEFT_MOVER);

        let mut out = String::with_capacity((self.width + 1) * (self.height + 1));
        for row in canvas {
            let line: String = row.into_iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "rings every {} kt, {} mean wind, {} right mover, {} left mover",
            self.ring_increment.unpack(),
            MEAN,
            RIGHT_MOVER,
            LEFT_MOVER
        );

        out
    }

    fn half_width(&self) -> f64 {
        (self.width / 2) as f64
    }

    fn half_height(&self) -> f64 {
        (self.height / 2) as f64
    }

    // Fractional column and row of a wind, may be far off the canvas.
    fn position(&self, wind: &WindUV<Knots>) -> (f64, f64) {
        let range = self.range.unpack();
        let col = self.half_width() + wind.u.unpack() / range * self.half_width();
        let row = self.half_height() - wind.v.unpack() / range * self.half_height();
        (col, row)
    }

    // Column and row of a wind, may be off the canvas. Huge values saturate.
    fn cell(&self, wind: &WindUV<Knots>) -> (i64, i64) {
        let (col, row) = self.position(wind);
        (col.round() as i64, row.round() as i64)
    }

    // Cut a segment down to the part that lies on the canvas (Liang-Barsky). Ends that are cut
    // are placed exactly on the edge they cross, so far away ends don't swamp the result.
    fn clip(&self, from: (f64, f64), to: (f64, f64)) -> Option<((f64, f64), (f64, f64))> {
        let (x0, y0) = from;
        let (dx, dy) = (to.0 - x0, to.1 - y0);
        if !(x0.is_finite() && y0.is_finite() && dx.is_finite() && dy.is_finite()) {
            return None;
        }

        let max_col = (self.width - 1) as f64;
        let max_row = (self.height - 1) as f64;

        let edges = [
            (-dx, x0, Edge::Col(0.0)),
            (dx, max_col - x0, Edge::Col(max_col)),
            (-dy, y0, Edge::Row(0.0)),
            (dy, max_row - y0, Edge::Row(max_row)),
        ];

        let (mut t0, mut start_edge) = (0.0f64, None);
        let (mut t1, mut end_edge) = (1.0f64, None);
        for &(p, q, edge) in &edges {
            if p == 0.0 {
                // Parallel to this edge and outside of it.
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 && r > t0 {
                    t0 = r;
                    start_edge = Some(edge);
                } else if p > 0.0 && r < t1 {
                    t1 = r;
                    end_edge = Some(edge);
                }
            }
        }

        if t0 > t1 + 1.0e-9 {
            return None;
        }

        let point = |t: f64, edge: Option<Edge>| {
            let (col, row) = match edge {
                Some(Edge::Col(col)) => (col, y0 + t * dy),
                Some(Edge::Row(row)) => (x0 + t * dx, row),
                None => (x0 + t * dx, y0 + t * dy),
            };
            (col.max(0.0).min(max_col), row.max(0.0).min(max_row))
        };

        Some((point(t0, start_edge), point(t1, end_edge)))
    }

    fn put(&self, canvas: &mut [Vec<char>], (col, row): (i64, i64), mark: char) {
        if col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height {
            canvas[row as usize][col as usize] = mark;
        }
    }

    fn draw_axes(&self, canvas: &mut [Vec<char>]) {
        let (c_col, c_row) = (self.width / 2, self.height / 2);
        for cell in canvas[c_row].iter_mut() {
            *cell = '-';
        }
        for row in canvas.iter_mut() {
            row[c_col] = '|';
        }
        canvas[c_row][c_col] = '+';
    }

    fn draw_rings(&self, canvas: &mut [Vec<char>]) {
        let range = self.range.unpack();
        let inc = self.ring_increment.unpack();
        let du = range / self.half_width();
        let dv = range / self.half_height();

        for (r, row) in canvas.iter_mut().enumerate() {
            let v = (self.half_height() - r as f64) * dv;
            for (c, cell) in row.iter_mut().enumerate() {
                let u = (c as f64 - self.half_width()) * du;

                // Range of speeds covered by this cell.
                let near_u = (u.abs() - du / 2.0).max(0.0);
                let near_v = (v.abs() - dv / 2.0).max(0.0);
                let min_spd = near_u.hypot(near_v);
                let max_spd = (u.abs() + du / 2.0).hypot(v.abs() + dv / 2.0);

                let ring = (min_spd / inc).ceil() * inc;
                if ring > 0.0 && ring <= range && ring < max_spd {
                    *cell = RING;
                }
            }
        }
    }

    // Both ends must already be on the canvas.
    fn draw_segment(&self, canvas: &mut [Vec<char>], from: (f64, f64), to: (f64, f64)) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs()).ceil() as usize;

        for i in 0..=steps {
            let frac = if steps == 0 {
                0.0
            } else {
                i as f64 / steps as f64
            };
            let col = (from.0 + dx * frac).round() as i64;
            let row = (from.1 + dy * frac).round() as i64;
            self.put(canvas, (col, row), PROFILE);
        }
    }
}

// A side of the canvas, by its column or row.
#[derive(Clone, Copy, Debug)]
enum Edge {
    Col(f64),
    Row(f64),
}

// Levels are numbered from 1 at the surface.
fn level_mark(index: usize) -> char {
    std::char::from_digit((index as u32 + 1) % 10, 10).unwrap_or(PROFILE)
}

/// A title from the hodograph name and valid time, e.g. `Moore, OK - 2013-05-20 @ 1800z`.
pub fn title(snd: &HodographSounding) -> String {
    let name = snd.name().unwrap_or("Custom Hodograph");

    match snd.valid_time() {
        Some(vt) => format!("{} - {} @ {}z", name, vt.format("%Y-%m-%d"), vt.format("%H%M")),
        None => name.to_owned(),
    }
}

/// The numbers that go along with the plot, ending with the wind at each numbered level.
pub fn summary(anal: &HodographAnalysis) -> String {
    let layer = anal.helicity_layer();
    let reference = match anal.storm_motion_reference() {
        StormMotionReference::Ground => "ground relative".to_owned(),
        other => format!("relative to the {} storm", other),
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Helicity: {:.2} m²/s² ({}-{} hPa, {})",
        anal.helicity().unpack(),
        layer.bottom.unpack(),
        layer.top.unpack(),
        reference
    );
    let _ = writeln!(out, "Wind Shear: {:.2} knots", anal.shear_magnitude().unpack());

    for est in &[anal.right_mover(), anal.left_mover()] {
        let WindSpdDir { speed, direction } = WindSpdDir::<Knots>::from(est.motion);
        let _ = writeln!(
            out,
            "{} ({}): {:03.0}° at {:.1} kt (u {:.1}, v {:.1})",
            est.label.abbreviation(),
            est.label,
            direction,
            speed.unpack(),
            est.motion.u.unpack(),
            est.motion.v.unpack()
        );
    }

    for (i, lvl) in anal.sounding().levels().iter().enumerate() {
        let _ = writeln!(
            out,
            "{}: {} hPa {:.1} kt from {:03.0}°",
            level_mark(i),
            lvl.pressure().unpack(),
            lvl.wind_speed().unpack(),
            lvl.wind_direction()
        );
    }

    out
}
