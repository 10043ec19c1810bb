//! Parameterised command-line parsing tests.

use std::path::PathBuf;

use boardroute_core::{parse, Locale, ParseOutcome, StartupConfiguration};
use rstest::rstest;

fn config(tokens: &[&str]) -> StartupConfiguration {
    match parse(tokens) {
        ParseOutcome::Run(config) => config,
        ParseOutcome::Help => panic!("unexpected help for {tokens:?}"),
    }
}

// ---------------------------------------------------------------------------
// -de lookahead
// ---------------------------------------------------------------------------

#[rstest]
#[case(&["-de", "board.dsn"], "board.dsn")]
#[case(&["-de", "board.dsn", "-test"], "board.dsn")]
#[case(&["-s", "-de", "dir/board.bin"], "dir/board.bin")]
#[case(&["-de", "x", "-de", "y"], "y")]
#[case(&["-design", "long.dsn"], "long.dsn")]
fn design_flag_followed_by_value_sets_path(#[case] tokens: &[&str], #[case] expected: &str) {
    let config = config(tokens);
    assert_eq!(config.explicit_design_path, Some(PathBuf::from(expected)));
    assert!(config.is_explicit());
}

#[rstest]
#[case(&["-de"])]
#[case(&["-de", "-test"])]
#[case(&["-de", "-s", "board.dsn"])]
#[case(&["board.dsn", "-de"])]
fn design_flag_without_value_leaves_path_unset(#[case] tokens: &[&str]) {
    let config = config(tokens);
    assert_eq!(config.explicit_design_path, None);
    assert!(!config.is_explicit());
}

#[test]
fn flag_shaped_lookahead_is_still_scanned_as_flag() {
    let config = config(&["-de", "-test"]);
    assert!(config.debug_mode);
}

// ---------------------------------------------------------------------------
// -di, -l, -s, -test
// ---------------------------------------------------------------------------

#[rstest]
#[case(&["-di", "boards"], Some("boards"))]
#[case(&["-di"], None)]
#[case(&["-di", "-s"], None)]
fn directory_hint(#[case] tokens: &[&str], #[case] expected: Option<&str>) {
    assert_eq!(
        config(tokens).design_directory_hint,
        expected.map(PathBuf::from)
    );
}

#[rstest]
#[case(&["-l", "de"], Locale::Alternate)]
#[case(&["-locale", "deutsch"], Locale::Alternate)]
#[case(&["-l", "en"], Locale::Default)]
#[case(&["-l"], Locale::Default)]
#[case(&["-l", "-de", "x.dsn"], Locale::Default)]
fn locale_selection(#[case] tokens: &[&str], #[case] expected: Locale) {
    assert_eq!(config(tokens).locale, expected);
}

#[test]
fn switches_set_their_booleans() {
    let config = config(&["-s", "-test"]);
    assert!(config.auto_save_on_exit);
    assert!(config.debug_mode);
}

#[test]
fn unknown_tokens_are_ignored() {
    assert_eq!(
        config(&["--verbose", "stray", "-x"]),
        StartupConfiguration::default()
    );
}

#[test]
fn consumed_value_is_not_rescanned() {
    // "-l" accepts any lookahead starting with 'd'; a design path following
    // -de is never interpreted, even if it looks like a locale code.
    let config = config(&["-de", "de", "-l", "dk"]);
    assert_eq!(config.explicit_design_path, Some(PathBuf::from("de")));
    assert_eq!(config.locale, Locale::Alternate);
}

// ---------------------------------------------------------------------------
// Help
// ---------------------------------------------------------------------------

#[rstest]
#[case(&["-h"])]
#[case(&["--help"])]
#[case(&["-de", "board.dsn", "-h"])]
#[case(&["-help", "-de", "board.dsn"])]
#[case(&["-s", "-test", "--help", "-di", "x"])]
fn help_anywhere_produces_no_configuration(#[case] tokens: &[&str]) {
    assert_eq!(parse(tokens), ParseOutcome::Help);
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[rstest]
#[case(&[])]
#[case(&["-de", "board.dsn", "-test"])]
#[case(&["-di", "boards", "-l", "de", "-s"])]
#[case(&["-h"])]
fn parsing_twice_is_identical(#[case] tokens: &[&str]) {
    assert_eq!(parse(tokens), parse(tokens));
}

#[test]
fn scenario_a_explicit_debug() {
    let config = config(&["-de", "board.dsn", "-test"]);
    assert_eq!(
        config,
        StartupConfiguration {
            explicit_design_path: Some(PathBuf::from("board.dsn")),
            debug_mode: true,
            ..StartupConfiguration::default()
        }
    );
}
