use crate::model::Row;

// Strict `<` keeps the lowest-indexed anchor on an exact tie. Downstream
// fixtures depend on that, even though it looks accidental; leave it.
fn nearest_anchor(left: i32, anchors: &[i32]) -> usize {
    let mut best = 0;
    let mut best_dist = i64::MAX;
    for (index, &anchor) in anchors.iter().enumerate() {
        let dist = (i64::from(left) - i64::from(anchor)).abs();
        if dist < best_dist {
            best = index;
            best_dist = dist;
        }
    }
    best
}

/// Places each word of each row into the cell of its nearest anchor,
/// space-joining words that land in the same cell.
pub(crate) fn assign_cells(rows: &[Row], anchors: &[i32]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            let mut cells = vec![String::new(); anchors.len().max(row.len())];
            for word in row {
                let cell = &mut cells[nearest_anchor(word.left, anchors)];
                if !cell.is_empty() {
                    cell.push(' ');
                }
                cell.push_str(&word.text);
            }
            cells
        })
        .collect()
}
