use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn explicit_config_changes_markup() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.html");
    fs::write(&input, "a **b**\nc").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"[inline]
bold_tag = "strong"

[html]
line_break = "<br />"
trailing_newline = true
"#,
    )
    .unwrap();

    cargo_bin_cmd!("md2html")
        .arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<p>\na <strong>b</strong><br />\nc\n</p>\n"
    );
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "-item\n- item").unwrap();
    fs::write(
        dir.path().join("md2html.toml"),
        "[syntax]\nrequire_marker_space = true\n",
    )
    .unwrap();

    cargo_bin_cmd!("md2html")
        .current_dir(dir.path())
        .arg("doc.md")
        .arg("doc.html")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("doc.html")).unwrap(),
        "<p>\n-item\n</p>\n<ul>\n<li>item</li>\n</ul>"
    );
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "text").unwrap();

    cargo_bin_cmd!("md2html")
        .arg(&input)
        .arg(dir.path().join("doc.html"))
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Failed to load configuration:"));
}

#[test]
fn set_flags_override_config_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.html");
    fs::write(&input, "__x__\ny").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(&config_path, "[inline]\nemphasis_tag = \"i\"\n").unwrap();

    cargo_bin_cmd!("md2html")
        .arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config_path)
        .arg("--set")
        .arg("inline.emphasis_tag=strong")
        .arg("--set")
        .arg("html.line_break=<br>")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<p>\n<strong>x</strong><br>\ny\n</p>"
    );
}

#[test]
fn malformed_set_flag_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "text").unwrap();

    cargo_bin_cmd!("md2html")
        .arg(&input)
        .arg(dir.path().join("doc.html"))
        .arg("--set")
        .arg("inline.bold_tag")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected key=value"));
}
