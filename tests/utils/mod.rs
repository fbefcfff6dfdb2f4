use hodograph_analysis::HodographConfig;
use std::path::PathBuf;

pub mod analysis_tests;

pub fn load_test_file(fname: &str) -> HodographConfig {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);

    HodographConfig::load(&test_path)
        .unwrap_or_else(|err| panic!("Error loading {:?}: {}", test_path, err))
}

pub fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
    assert!(eps > 0.0);

    (val1 - val2).abs() < eps
}

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {
            use crate::utils::{self, analysis_tests};

            #[test]
            fn wind_vectors() {
                let config = utils::load_test_file($fname);
                analysis_tests::test_wind_vectors(&config);
            }

            #[test]
            fn storm_motion() {
                let config = utils::load_test_file($fname);
                analysis_tests::test_storm_motion(&config);
            }

            #[test]
            fn helicity() {
                let config = utils::load_test_file($fname);
                analysis_tests::test_helicity(&config);
            }

            #[test]
            fn report() {
                let config = utils::load_test_file($fname);
                analysis_tests::test_report(&config);
            }
        }
    };
}

#[allow(unused_macros)] // False alarm
macro_rules! degenerate_file {
    ($test_name:ident, $fname:expr) => {
        #[test]
        fn $test_name() {
            use hodograph_analysis::{AnalysisError, HodographAnalysis};

            let config = crate::utils::load_test_file($fname);
            let snd = config.to_sounding().expect("valid sounding");

            assert_eq!(
                HodographAnalysis::analyze(snd, &config.analysis_params()).unwrap_err(),
                AnalysisError::DegenerateShear
            );
        }
    };
}
