// tests/parser_test.rs
use git_recent::conventional::ParsedCommit;

#[test]
fn test_feat_line() {
    let input = "a1b2c3d feat: add login page";
    let parsed = ParsedCommit::parse(input);
    assert_eq!(parsed.hash, "a1b2c3d");
    assert_eq!(parsed.r#type, "feat");
    assert_eq!(parsed.message, "add login page");
    assert_eq!(parsed.full_line, input);
}

#[test]
fn test_fix_line_with_scope() {
    let input = "a1b2c3d fix(auth): handle expired token";
    let parsed = ParsedCommit::parse(input);
    assert_eq!(parsed.hash, "a1b2c3d");
    assert_eq!(parsed.r#type, "fix");
    assert_eq!(parsed.message, "handle expired token");
    assert_eq!(parsed.full_line, input);
}

#[test]
fn test_subject_without_colon() {
    let input = "a1b2c3d cleanup old files";
    let parsed = ParsedCommit::parse(input);
    assert_eq!(parsed.hash, "a1b2c3d");
    assert_eq!(parsed.r#type, "");
    assert_eq!(parsed.message, "cleanup old files");
    assert_eq!(parsed.full_line, input);
}

#[test]
fn test_line_without_hash_shape() {
    for input in ["", "not-a-hash line", "  leading spaces", "feat: no hash at all"] {
        let parsed = ParsedCommit::parse(input);
        assert_eq!(parsed.hash, "", "input: {:?}", input);
        assert_eq!(parsed.r#type, "", "input: {:?}", input);
        assert_eq!(parsed.message, input);
        assert_eq!(parsed.full_line, input);
    }
}

#[test]
fn test_full_line_is_always_verbatim() {
    let inputs = [
        "a1b2c3d feat: add login page",
        "a1b2c3d fix(auth): handle expired token",
        "a1b2c3d cleanup old files",
        "Merge pull request #42 from origin/main",
        "",
    ];

    for input in inputs {
        assert_eq!(ParsedCommit::parse(input).full_line, input);
    }
}

#[test]
fn test_parser_is_deterministic() {
    let input = "deadbee docs(guide): describe setup";
    assert_eq!(ParsedCommit::parse(input), ParsedCommit::parse(input));
}

#[test]
fn test_unknown_type_is_accepted() {
    // Types are not validated against a known set
    let parsed = ParsedCommit::parse("abc1234 wibble: strange but valid");
    assert_eq!(parsed.r#type, "wibble");
    assert_eq!(parsed.message, "strange but valid");
}

#[test]
fn test_scope_never_surfaces() {
    let parsed = ParsedCommit::parse("abc1234 feat(deeply/nested scope): thing");
    assert_eq!(parsed.r#type, "feat");
    assert_eq!(parsed.message, "thing");
    assert!(!parsed.message.contains("scope"));
}
