/// Moves the element at `source_index` to `dest_index`, shifting the others.
///
/// Returns `None` (nothing happened) when the list is empty, `source_index` is
/// outside `[0, len)`, `dest_index` is outside `[0, len]`, or the two are equal.
/// Otherwise the element is removed first and reinserted at `dest_index` in the
/// shortened list, clamped to its end.
pub fn reorder<T: Clone>(list: &[T], source_index: i64, dest_index: i64) -> Option<Vec<T>> {
    let len = list.len() as i64;
    if len == 0
        || !(0..len).contains(&source_index)
        || !(0..=len).contains(&dest_index)
        || source_index == dest_index
    {
        return None;
    }

    let mut moved = list.to_vec();
    let item = moved.remove(source_index as usize);
    let dest = (dest_index as usize).min(moved.len());
    moved.insert(dest, item);
    Some(moved)
}
