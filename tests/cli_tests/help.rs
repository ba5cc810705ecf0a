use super::utils::NegotiateCli;

#[test]
#[ignore]
fn test_help() {
    let lines = NegotiateCli::run(vec!["--help"]).unwrap();
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Arguments:"));
    assert!(lines.contains("--weights"));
    assert!(lines.contains("--params"));
    assert!(lines.contains("Options:"));
}
