use super::*;

#[test]
fn can_use_defaults() {
    let config = StatisticsConfig::default();

    assert_eq!(config.modulus, 1);
    assert!(!config.gather_full);
    assert!(!config.gather_subpops);
    assert!(config.file.is_none());
    assert!(!config.gzip);
    assert!(config.validate().is_ok());
}

parameterized_test! {can_validate_config, (modulus, file, gzip, is_valid), {
    can_validate_config_impl(modulus, file, gzip, is_valid);
}}

can_validate_config! {
    case01_default_modulus: (1, None, false, true),
    case02_large_modulus: (10, Some("stats.txt"), false, true),
    case03_zero_modulus: (0, None, false, false),
    case04_gzip_with_file: (1, Some("stats.txt"), true, true),
    case05_gzip_without_file: (1, None, true, false),
}

fn can_validate_config_impl(modulus: usize, file: Option<&str>, gzip: bool, is_valid: bool) {
    let config = StatisticsConfig::default().with_modulus(modulus).with_file(file.map(PathBuf::from), gzip);

    assert_eq!(config.validate().is_ok(), is_valid);
}
