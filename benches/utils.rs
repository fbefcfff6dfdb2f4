use hodograph_analysis::{HodographConfig, HodographSounding};
use std::path::PathBuf;

pub fn load_all_test_files() -> [HodographSounding; 3] {
    let snd1 = load_test_file("turning.toml");
    let snd2 = load_test_file("veering.toml");
    let snd3 = load_test_file("backing.toml");

    [snd1, snd2, snd3]
}

fn load_test_file(fname: &str) -> HodographSounding {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);

    HodographConfig::load(&test_path)
        .and_then(|config| config.to_sounding())
        .expect(&format!("Error loading file: {:#?}", test_path))
}
