mod common;

use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn ocr2table() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ocr2table"))
}

#[test]
fn cli_prints_markdown_table() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("words.tsv");
    common::write_tsv(&input, &common::grid_words(&[&["Qty", "Item"], &["2", "Pen"]]))
        .expect("TSV fixture should be written");

    let output = ocr2table()
        .args(["tsv", "-i", &input.to_string_lossy()])
        .output()
        .expect("CLI should run");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "| Qty | Item |\n| --- | --- |\n| 2 | Pen |\n"
    );
}

#[test]
fn cli_writes_json_to_file() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("words.tsv");
    let output = dir.path().join("table.json");
    common::write_tsv(&input, &common::grid_words(&[&["a", "b"]]))
        .expect("TSV fixture should be written");

    let status = ocr2table()
        .args([
            "tsv",
            "-i",
            &input.to_string_lossy(),
            "-o",
            &output.to_string_lossy(),
            "--format",
            "json",
        ])
        .status()
        .expect("CLI should run");
    assert_eq!(status.code(), Some(0));

    let json = std::fs::read_to_string(&output).expect("JSON should be readable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("output should be JSON");
    assert_eq!(value["rows"][0][0], "a");
    assert_eq!(value["rows"][0][1], "b");
}

#[test]
fn cli_exits_with_code_2_when_no_table() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("empty.tsv");
    common::write_tsv(&input, &[("noise", 0, 0, 10, -1)]).expect("TSV fixture should be written");

    let output = ocr2table()
        .args(["tsv", "-i", &input.to_string_lossy()])
        .output()
        .expect("CLI should run");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_rejects_unknown_format() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("words.tsv");
    common::write_tsv(&input, &[("A", 0, 0, 10, 90)]).expect("TSV fixture should be written");

    let status = ocr2table()
        .args(["tsv", "-i", &input.to_string_lossy(), "--format", "xml"])
        .status()
        .expect("CLI should run");

    assert_eq!(status.code(), Some(1));
}

#[test]
fn cli_image_fails_when_recognizer_is_missing() {
    let dir = tempdir().expect("tempdir should be created");
    let image = dir.path().join("shot.png");
    std::fs::write(&image, b"png").expect("image fixture should be written");

    let status = ocr2table()
        .args([
            "image",
            "-i",
            &image.to_string_lossy(),
            "--tesseract",
            &dir.path().join("missing-tesseract").to_string_lossy(),
        ])
        .status()
        .expect("CLI should run");

    assert_eq!(status.code(), Some(1));
}

// The "image" is a shell script and `sh` stands in for the recognizer: it is
// invoked as `sh <image> stdout -l eng --psm <n> tsv`, so `$5` is the layout mode.
#[cfg(unix)]
#[test]
fn cli_image_retries_with_fallback_layout() {
    let dir = tempdir().expect("tempdir should be created");
    let tsv = dir.path().join("words.tsv");
    common::write_tsv(&tsv, &common::grid_words(&[&["Day", "Temp"], &["Mon", "21"]]))
        .expect("TSV fixture should be written");

    let script = dir.path().join("recognizer.sh");
    std::fs::write(
        &script,
        format!(
            "if [ \"$5\" = \"5\" ]; then echo '{}'; else cat '{}'; fi\n",
            common::TSV_HEADER,
            tsv.display()
        ),
    )
    .expect("script should be written");

    let output = ocr2table()
        .args([
            "image",
            "-i",
            &script.to_string_lossy(),
            "--tesseract",
            "sh",
        ])
        .output()
        .expect("CLI should run");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "| Day | Temp |\n| --- | --- |\n| Mon | 21 |\n"
    );
}

#[test]
fn cli_writes_csv_file_with_custom_delimiter() {
    let dir = tempdir().expect("tempdir should be created");
    let input = dir.path().join("words.tsv");
    let output = dir.path().join("table.csv");
    common::write_tsv(&input, &common::grid_words(&[&["Day", "Temp"], &["Mon", "21"]]))
        .expect("TSV fixture should be written");

    let status = ocr2table()
        .args([
            "tsv",
            "-i",
            &input.to_string_lossy(),
            "-o",
            &output.to_string_lossy(),
            "--format",
            "csv",
            "--delimiter",
            ";",
        ])
        .status()
        .expect("CLI should run");
    assert_eq!(status.code(), Some(0));

    let csv = std::fs::read_to_string(&output).expect("CSV should be readable");
    assert_eq!(csv, "Day;Temp\nMon;21\n");
}
