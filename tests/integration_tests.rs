use chai_translator::core::Report;
use chai_translator::{run, LifeForce, TranslationReport, DEFAULT_WORD};
use std::process::Command;

fn translate(word: &str) -> String {
    let mut buffer = Vec::new();
    run(word, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_chai-translator"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_life_force_is_independent_of_word() {
    for word in ["", "A", "Chai", "שלום"] {
        let output = translate(word);
        assert!(output.starts_with(
            "--- SACRED MATH CHECK ---\n\
             Hebrew 'Chai' Value: 18\n\
             Ancient Binary Code: 010010\n\
             -------------------------\n\n"
        ));
    }
    assert_eq!(LifeForce::chai().value(), 18);
}

#[test]
fn test_default_word_lines() {
    let output = translate(DEFAULT_WORD);
    assert!(output.contains("Translating: Chai\n"));
    assert!(output.contains("C -> 67 -> 01000011\n"));
    assert!(output.contains("h -> 104 -> 01101000\n"));
    assert!(output.contains("a -> 97 -> 01100001\n"));
    assert!(output.contains("i -> 105 -> 01101001\n"));
}

#[test]
fn test_single_letter() {
    let output = translate("A");
    assert!(output.ends_with("Translating: A\nA -> 65 -> 01000001\n"));
}

#[test]
fn test_empty_word_has_no_character_lines() {
    let output = translate("");
    assert_eq!(output.lines().count(), 6);
    assert!(output.ends_with("Translating: \n"));
}

#[test]
fn test_output_is_repeatable() {
    assert_eq!(translate("Shalom"), translate("Shalom"));
}

#[test]
fn test_wide_code_points_are_not_truncated() {
    let output = translate("€");
    assert!(output.contains("€ -> 8364 -> 10000010101100\n"));
}

#[test]
fn test_report_renders_through_trait() {
    let report = TranslationReport::new("ok");
    let mut buffer = Vec::new();
    report.render(&mut buffer).unwrap();
    assert_eq!(buffer, translate("ok").into_bytes());
}

#[test]
fn test_binary_without_arguments() {
    let output = run_binary(&[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), translate("Chai"));
}

#[test]
fn test_binary_uses_first_argument() {
    let output = run_binary(&["A", "ignored"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Translating: A\n"));
    assert!(stdout.contains("A -> 65 -> 01000001\n"));
    assert!(!stdout.contains("ignored"));
}

#[test]
fn test_binary_accepts_empty_word() {
    let output = run_binary(&[""]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), translate(""));
}

#[test]
fn test_binary_translates_double_dash_verbatim() {
    let output = run_binary(&["--"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Translating: --\n- -> 45 -> 00101101\n- -> 45 -> 00101101\n"));
}

#[test]
fn test_binary_double_dash_wins_over_later_words() {
    let output = run_binary(&["--", "X"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Translating: --\n"));
    assert!(!stdout.contains("X -> "));
}

#[cfg(unix)]
#[test]
fn test_binary_accepts_invalid_utf8() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new(env!("CARGO_BIN_EXE_chai-translator"))
        .arg(OsStr::from_bytes(&[b'f', 0xff]))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("f -> 102 -> 01100110\n"));
    assert!(stdout.contains("\u{FFFD} -> 65533 -> 1111111111111101\n"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_binary_reports_write_failure_once() {
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_chai-translator"))
        .stdout(full)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Could not write output").count(), 1);
    assert!(!stderr.contains("Error:"));
}
