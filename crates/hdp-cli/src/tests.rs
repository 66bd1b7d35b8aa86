use clap::error::ErrorKind;

use super::*;

#[test]
fn parses_zpid_with_timeout() {
    let cli = Cli::try_parse_from(["hdp-cli", "--zpid", "2101920883", "-t", "5"])
        .expect("expected valid cli args");

    assert_eq!(cli.zpid.as_deref(), Some("2101920883"));
    assert!(cli.url.is_none());
    assert_eq!(cli.request_timeout, Some(5));
}

#[test]
fn parses_url_with_long_timeout_flag() {
    let cli = Cli::try_parse_from([
        "hdp-cli",
        "--url",
        "http://www.zillow.com/homedetails/2101920883_zpid",
        "--request-timeout",
        "10",
    ])
    .expect("expected valid cli args");

    assert!(cli.zpid.is_none());
    assert_eq!(cli.request_timeout, Some(10));
}

#[test]
fn zpid_and_url_conflict() {
    let err = Cli::try_parse_from([
        "hdp-cli",
        "--zpid",
        "1",
        "--url",
        "http://www.zillow.com/homedetails/1_zpid",
    ])
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn target_is_required() {
    let err = Cli::try_parse_from(["hdp-cli", "-t", "5"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn timeout_must_be_numeric() {
    let err = Cli::try_parse_from(["hdp-cli", "--zpid", "1", "-t", "soon"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}
