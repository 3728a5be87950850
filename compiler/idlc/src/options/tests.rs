use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_defaults() {
    let options = parse_options(&args(&["schema.idl"])).unwrap();
    assert_eq!(options.limits, OrdinalLimits::default());
    assert_eq!(options.color, ColorMode::Auto);
    assert!(!options.json);
    assert_eq!(options.paths, vec!["schema.idl".to_string()]);
}

#[test]
fn test_all_flags() {
    let options = parse_options(&args(&[
        "--max-field-ordinal=100",
        "a.idl",
        "--max-method-ordinal=200",
        "--color=never",
        "--json",
        "b.idl",
    ]))
    .unwrap();
    assert_eq!(options.limits.max_field, 100);
    assert_eq!(options.limits.max_method, 200);
    assert_eq!(options.color, ColorMode::Never);
    assert!(options.json);
    assert_eq!(options.paths, args(&["a.idl", "b.idl"]));
}

#[test]
fn test_bad_values() {
    assert_eq!(
        parse_options(&args(&["--max-field-ordinal=-1"])).unwrap_err(),
        "`--max-field-ordinal=-1`: expected a non-negative integer"
    );
    assert!(parse_options(&args(&["--color=blue"])).is_err());
    assert_eq!(
        parse_options(&args(&["--verbose"])).unwrap_err(),
        "unknown option `--verbose`"
    );
}
