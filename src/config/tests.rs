use super::*;

use crate::settings::Mode;

#[test]
fn test_load_single_mode() {
    let settings = at(["src/testing/assets/configs/single-mode.yaml"])
        .no_default(true)
        .load()
        .unwrap();
    assert_eq!(settings.mode, Mode::Single);
    assert_eq!(settings.exclude.len(), 2);
}

#[test]
fn test_load_layered() {
    let settings = at([
        "src/testing/assets/configs/single-mode.yaml",
        "src/testing/assets/configs/exclude-only.toml",
    ])
    .no_default(true)
    .load()
    .unwrap();
    assert_eq!(settings.mode, Mode::Single);
    assert_eq!(settings.exclude, vec!["*~".to_owned()]);
}

#[test]
fn test_load_missing_explicit_file() {
    let result = at(["src/testing/assets/configs/missing.yaml"]).no_default(true).load();
    assert!(result.is_err());
}

#[test]
fn test_sources_no_default() {
    let loader = at(["a.yaml", "b.toml"]).no_default(true);
    let sources = loader.sources();
    assert_eq!(sources.len(), 2);
    assert!(sources.iter().all(|s| matches!(s, Source::File(f) if f.required)));
}

#[test]
fn test_load_no_default() {
    let settings = at(Vec::<PathBuf>::new()).no_default(true).load().unwrap();
    assert_eq!(settings, Settings::default());
}
