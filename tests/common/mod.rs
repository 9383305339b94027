#![allow(dead_code)]

use std::path::Path;

pub const TSV_HEADER: &str =
    "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

/// A word placed on the page: `(text, left, top, height, conf)`.
pub type Placed<'a> = (&'a str, i32, i32, i32, i32);

/// Builds recognizer-style TSV, including the block/line level rows with
/// `conf = -1` the way the recognizer prints them.
pub fn build_tsv(words: &[Placed<'_>]) -> String {
    let mut lines = vec![
        TSV_HEADER.to_string(),
        "1\t1\t0\t0\t0\t0\t0\t0\t800\t600\t-1\t".to_string(),
        "2\t1\t1\t0\t0\t0\t10\t10\t780\t580\t-1\t".to_string(),
    ];

    for (index, (text, left, top, height, conf)) in words.iter().enumerate() {
        let width = i32::try_from(text.len()).unwrap_or(0) * 8;
        lines.push(format!(
            "5\t1\t1\t1\t1\t{}\t{left}\t{top}\t{width}\t{height}\t{conf}\t{text}",
            index + 1
        ));
    }

    let mut tsv = lines.join("\n");
    tsv.push('\n');
    tsv
}

/// Lays out a table on a regular grid: each row 30px below the previous,
/// each column 150px right of the previous, words 12px high.
pub fn grid_words<'a>(rows: &[&[&'a str]]) -> Vec<Placed<'a>> {
    let mut words = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, text) in row.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let left = 40 + 150 * i32::try_from(col_index).unwrap_or(0);
            let top = 20 + 30 * i32::try_from(row_index).unwrap_or(0);
            words.push((*text, left, top, 12, 92));
        }
    }
    words
}

pub fn write_tsv(path: &Path, words: &[Placed<'_>]) -> std::io::Result<()> {
    std::fs::write(path, build_tsv(words))
}
