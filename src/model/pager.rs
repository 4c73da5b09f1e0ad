//! Page-slice math for the fixed 4×2 album grid.

pub const GRID_COLS: usize = 4;
pub const GRID_ROWS: usize = 2;
pub const PAGE_SIZE: usize = GRID_COLS * GRID_ROWS;

/// Returns the `[start, end)` index range visible on `page`. The range is
/// contiguous, order-preserving and never longer than [`PAGE_SIZE`]; it is
/// empty when the page lies beyond the collection (deletions can strand the
/// cursor there).
pub fn page_slice(len: usize, page: usize) -> (usize, usize) {
    let start = (page * PAGE_SIZE).min(len);
    let end = (start + PAGE_SIZE).min(len);
    (start, end)
}

/// Highest valid page index, clamped to zero for empty collections.
pub fn max_page(len: usize) -> usize {
    (len.div_ceil(PAGE_SIZE)).saturating_sub(1)
}
