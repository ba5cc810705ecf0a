use super::utils::NegotiateCli;

#[test]
#[ignore]
fn test_rank_arguments() {
    let lines = NegotiateCli::run(vec![
        "text/html,application/xhtml+xml",
        "application/xml;q=0.9,*/*;q=0.8",
    ])
    .unwrap();
    assert_eq!(
        lines,
        "text/html\napplication/xhtml+xml\napplication/xml\n*/*\n"
    );
}

#[test]
#[ignore]
fn test_rank_with_weights() {
    let lines = NegotiateCli::run(vec!["-w", "gzip;q=0.5,br"]).unwrap();
    assert_eq!(lines, "br;q=1\ngzip;q=0.5\n");
}

#[test]
#[ignore]
fn test_rank_stdin() {
    let lines =
        NegotiateCli::run_with_stdin(vec![], "da, en-gb;q=0.8\nen;q=0.7\n").unwrap();
    assert_eq!(lines, "da\n en-gb\nen\n");
}

#[test]
#[ignore]
fn test_params_json() {
    let lines = NegotiateCli::run(vec!["--params", "text/html;level=1;q=0.4"]).unwrap();
    assert!(lines.contains(r#""text/html""#), "lines: {lines:?}");
    assert!(lines.contains(r#""level": "1""#), "lines: {lines:?}");
    assert!(lines.contains(r#""q": "0.4""#), "lines: {lines:?}");
}

#[test]
#[ignore]
fn test_invalid_quality_fails() {
    let output = NegotiateCli::output(vec!["text/html;q=2"]).unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid q value."), "stderr: {stderr:?}");
}
