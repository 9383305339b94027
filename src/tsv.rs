use crate::model::RawRecord;

/// Minimum number of tab-separated columns in a per-word record.
pub const MIN_COLUMNS: usize = 12;

const BLOCK_COL: usize = 2;
const LINE_COL: usize = 4;
const LEFT_COL: usize = 6;
const TOP_COL: usize = 7;
const WIDTH_COL: usize = 8;
const HEIGHT_COL: usize = 9;
const CONF_COL: usize = 10;
const TEXT_COL: usize = 11;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTsv {
    pub records: Vec<RawRecord>,
    /// 1-based line numbers of records with too few columns.
    pub skipped_lines: Vec<usize>,
}

fn parse_int(field: &str) -> Option<i32> {
    field.trim().parse().ok()
}

// Newer recognizers print fractional confidences ("91.304"); keep the integer part.
#[allow(clippy::cast_possible_truncation)]
fn parse_confidence(field: &str) -> Option<i32> {
    let field = field.trim();
    field.parse::<i32>().ok().or_else(|| {
        field
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && value.abs() <= f64::from(i32::MAX))
            .map(|value| value.trunc() as i32)
    })
}

fn parse_record(line: &str) -> Option<RawRecord> {
    let fields = line.split('\t').collect::<Vec<_>>();
    if fields.len() < MIN_COLUMNS {
        return None;
    }

    Some(RawRecord {
        block_num: parse_int(fields[BLOCK_COL]),
        line_num: parse_int(fields[LINE_COL]),
        left: parse_int(fields[LEFT_COL]),
        top: parse_int(fields[TOP_COL]),
        width: parse_int(fields[WIDTH_COL]),
        height: parse_int(fields[HEIGHT_COL]),
        confidence: parse_confidence(fields[CONF_COL]),
        text: fields[TEXT_COL..].join("\t"),
    })
}

/// Parses the recognizer's TSV output. The first line is a header and is skipped.
#[must_use]
pub fn parse_tsv(input: &str) -> ParsedTsv {
    let mut parsed = ParsedTsv::default();

    for (index, line) in input.lines().enumerate().skip(1) {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line) {
            Some(record) => parsed.records.push(record),
            None => parsed.skipped_lines.push(index + 1),
        }
    }

    parsed
}
