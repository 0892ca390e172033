/// Range slicing and pagination over the ordered period records
/// Pure list operations consumed by the presentation side; the engine's
/// record ordering is never touched

use crate::models::PeriodRecord;

/// Slice a result to the 1-based inclusive month window [start, end]
/// Out-of-range bounds are clamped to the available months; an inverted
/// window yields an empty slice
pub fn slice_range(periods: &[PeriodRecord], start: u32, end: u32) -> &[PeriodRecord] {
    let available = periods.len() as u32;
    let first = start.max(1);
    let last = end.min(available);
    if first > last {
        return &[];
    }
    &periods[(first - 1) as usize..last as usize]
}

/// Number of fixed-size pages needed to show `visible_rows` rows
/// `rows_per_page` must be positive
pub fn page_count(visible_rows: usize, rows_per_page: usize) -> usize {
    visible_rows.div_ceil(rows_per_page)
}

/// The 1-based `page_number`-th page of the visible rows
/// Pages past the end are empty; `rows_per_page` must be positive
pub fn page(rows: &[PeriodRecord], page_number: usize, rows_per_page: usize) -> &[PeriodRecord] {
    let start = page_number.saturating_sub(1) * rows_per_page;
    if start >= rows.len() {
        return &[];
    }
    let end = (start + rows_per_page).min(rows.len());
    &rows[start..end]
}
