use super::approx_equal;
use hodograph_analysis::{
    magnitude, sr_helicity, summary, title, HodographAnalysis, HodographConfig, HodographPlot,
    Mover, StormMotionReference,
};
use metfor::{Knots, Quantity, WindUV};

const TOL: f64 = 1.0e-9;

fn analyze(config: &HodographConfig) -> HodographAnalysis {
    let snd = config.to_sounding().expect("valid sounding");
    HodographAnalysis::analyze(snd, &config.analysis_params()).expect("analysis")
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_wind_vectors(config: &HodographConfig) {
    let anal = analyze(config);

    assert_eq!(anal.wind_vectors().len(), config.levels.len());
    for (w, lvl) in anal.wind_vectors().iter().zip(&config.levels) {
        println!("{:?} -> {:?}", lvl, w);
        assert!(approx_equal(magnitude(*w).unpack(), lvl.speed_kt, TOL));

        let recovered = (-w.u.unpack()).atan2(-w.v.unpack()).to_degrees();
        let recovered = (recovered + 360.0) % 360.0;
        if lvl.speed_kt > 0.0 {
            let diff = (recovered - lvl.direction_deg % 360.0).abs();
            assert!(diff < 1.0e-6 || (360.0 - diff) < 1.0e-6);
        }
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_storm_motion(config: &HodographConfig) {
    let anal = analyze(config);
    let WindUV {
        u: mean_u,
        v: mean_v,
    } = anal.mean_wind();

    let rm = anal.right_mover();
    let lm = anal.left_mover();
    assert_eq!(rm.label, Mover::RightMoving);
    assert_eq!(lm.label, Mover::LeftMoving);

    // Midpoint is the mean wind.
    let mid_u = (rm.motion.u.unpack() + lm.motion.u.unpack()) / 2.0;
    let mid_v = (rm.motion.v.unpack() + lm.motion.v.unpack()) / 2.0;
    assert!(approx_equal(mid_u, mean_u.unpack(), TOL));
    assert!(approx_equal(mid_v, mean_v.unpack(), TOL));

    // Separation is twice the deviation.
    let sep = (rm.motion.u.unpack() - lm.motion.u.unpack())
        .hypot(rm.motion.v.unpack() - lm.motion.v.unpack());
    assert!(approx_equal(sep, 2.0 * config.deviation_kt, TOL));

    // Deviation is perpendicular to the shear.
    let shear = anal.shear();
    let dot = (rm.motion.u.unpack() - mean_u.unpack()) * shear.u.unpack()
        + (rm.motion.v.unpack() - mean_v.unpack()) * shear.v.unpack();
    assert!(approx_equal(dot, 0.0, 1.0e-6));
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_helicity(config: &HodographConfig) {
    let anal = analyze(config);

    let storm_motion = match config.storm_motion {
        StormMotionReference::Ground => WindUV {
            u: Knots(0.0),
            v: Knots(0.0),
        },
        StormMotionReference::RightMoving => anal.right_mover().motion,
        StormMotionReference::LeftMoving => anal.left_mover().motion,
    };

    let expected = sr_helicity(anal.sounding(), &anal.helicity_layer(), storm_motion).unwrap();
    assert!(approx_equal(
        anal.helicity().unpack(),
        expected.unpack(),
        TOL
    ));
    assert!(anal.helicity().unpack().is_finite());
    assert!(approx_equal(
        anal.helicity_layer().top.unpack(),
        config.helicity_top_hpa,
        TOL
    ));
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_report(config: &HodographConfig) {
    let anal = analyze(config);

    let header = title(anal.sounding());
    assert!(header.starts_with(config.name.as_str()));

    let plot = HodographPlot::new();
    let text = plot.render(&anal);
    assert_eq!(text.lines().count(), plot.height() + 1);

    let numbers = summary(&anal);
    assert!(numbers.contains("Helicity: "));
    assert!(numbers.contains("Wind Shear: "));
}
