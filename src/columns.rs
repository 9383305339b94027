use crate::model::Row;

/// Derives column anchors from the left edges of every word in every row.
///
/// A new anchor opens wherever consecutive sorted left edges are more than
/// `min_gap` apart. Anchors are global so columns line up down the table.
pub(crate) fn infer_columns(rows: &[Row], min_gap: f64) -> Vec<i32> {
    let mut lefts = rows
        .iter()
        .flat_map(|row| row.iter().map(|word| word.left))
        .collect::<Vec<_>>();
    lefts.sort_unstable();

    let Some(&first) = lefts.first() else {
        return Vec::new();
    };

    let mut anchors = vec![first];
    let mut last = first;
    for &left in &lefts[1..] {
        if f64::from(left) - f64::from(last) > min_gap {
            anchors.push(left);
        }
        last = left;
    }

    anchors
}
