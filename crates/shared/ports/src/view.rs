/// Port for the paged view being driven by gestures
///
/// Moves past either end must be silent no-ops, never errors.
pub trait PagedView: Send {
    /// Move to the next page, if any
    fn advance(&mut self);

    /// Move to the previous page, if any
    fn retreat(&mut self);

    /// Zero-based index of the page currently shown
    fn current_page(&self) -> usize;

    /// Total number of pages
    fn page_count(&self) -> usize;

    /// True while the user drags the view or it is still settling
    fn is_interacting(&self) -> bool {
        false
    }
}
