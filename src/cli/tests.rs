use super::*;
use clap::CommandFactory;

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["wildspan", "a*b"]).unwrap();
    assert_eq!(opt.pattern, "a*b");
    assert!(opt.files.is_empty());
    assert_eq!(opt.mode(), ModeOption::All);
    assert_eq!(opt.output_format, OutputFormat::Text);
}

#[test]
fn test_aliases() {
    let opt = Opt::try_parse_from(["wildspan", "-l", "-c", "--color", "never", "b*b", "x.log", "-"]).unwrap();
    assert_eq!(opt.mode(), ModeOption::Longest);
    assert_eq!(opt.color(), ColorOption::Always);
    assert_eq!(opt.files, vec![PathBuf::from("x.log"), PathBuf::from("-")]);
}

#[test]
fn test_options() {
    let opt = Opt::try_parse_from([
        "wildspan",
        "--mode",
        "longest",
        "--output-format",
        "json",
        "--color",
        "never",
        "?",
    ])
    .unwrap();
    assert_eq!(opt.mode(), ModeOption::Longest);
    assert_eq!(opt.output_format, OutputFormat::Json);
    assert_eq!(opt.color(), ColorOption::Never);
}

#[test]
fn test_missing_pattern() {
    assert!(Opt::try_parse_from(["wildspan"]).is_err());
}
