use crate::model::{Row, WordToken};

/// Arithmetic mean of word heights. Zero for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn average_height(words: &[WordToken]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let total = words.iter().map(|word| f64::from(word.height)).sum::<f64>();
    total / words.len() as f64
}

fn close_row(mut row: Row, rows: &mut Vec<Row>) {
    row.sort_by_key(|word| word.left);
    rows.push(row);
}

/// Groups words into horizontal bands.
///
/// Each row keeps the `top` of its first word as a fixed anchor: a word joins
/// the row while `|top - anchor| <= tolerance`. The anchor is not a rolling
/// average, so a long line of slightly sloped text does not drift into the
/// next one. The price is sensitivity to the first word's vertical jitter.
/// Keep it fixed.
pub(crate) fn cluster_rows(words: &[WordToken], tolerance: f64) -> Vec<Row> {
    let mut sorted = words.to_vec();
    sorted.sort_by_key(|word| word.top);

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    let mut anchor_top = first.top;
    let mut current = vec![first];

    for word in iter {
        if (f64::from(word.top) - f64::from(anchor_top)).abs() > tolerance {
            anchor_top = word.top;
            close_row(std::mem::replace(&mut current, vec![word]), &mut rows);
        } else {
            current.push(word);
        }
    }

    close_row(current, &mut rows);
    rows
}
