//! Page Track - In-memory paged view
//!
//! Tracks which page is showing, refuses to move past either end, and
//! models the user's own scrolling: while a drag is in progress or the view
//! is still settling afterwards, it reports itself as interacting.

use tilt_core::NavigationIntent;
use tilt_ports::PagedView;

/// Default number of pages, matching the demo layouts
pub const DEFAULT_PAGE_COUNT: usize = 20;

/// A finite strip of pages with one current page
#[derive(Debug, Clone)]
pub struct PageTrack {
    page_count: usize,
    current: usize,
    dragging: bool,
    settling: bool,
    /// Successful programmatic moves, in order
    moves: Vec<(NavigationIntent, usize)>,
}

impl PageTrack {
    /// Create a track positioned on the first page
    ///
    /// A zero page count is raised to one.
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count: page_count.max(1),
            current: 0,
            dragging: false,
            settling: false,
            moves: Vec::new(),
        }
    }

    /// Position the track on a page (clamped to the last page)
    pub fn with_page(mut self, page: usize) -> Self {
        self.current = page.min(self.page_count - 1);
        self
    }

    /// Programmatic moves that actually changed the page
    pub fn moves(&self) -> &[(NavigationIntent, usize)] {
        &self.moves
    }

    /// The user put a finger on the view
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.settling = false;
    }

    /// The user lifted the finger at `offset` (in pages) while moving
    /// forward or backward
    ///
    /// Snaps to the next whole page in the direction of travel and starts
    /// settling there.
    pub fn end_drag(&mut self, offset: f64, forward: bool) {
        let snapped = if forward {
            offset.ceil()
        } else {
            offset.floor()
        };
        let last = (self.page_count - 1) as f64;
        self.current = snapped.clamp(0.0, last) as usize;

        self.dragging = false;
        self.settling = true;
    }

    /// Deceleration finished
    pub fn finish_settling(&mut self) {
        self.settling = false;
    }

    /// True while a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True while settling after a drag
    pub fn is_settling(&self) -> bool {
        self.settling
    }

    fn step(&mut self, intent: NavigationIntent) {
        let target = match intent {
            NavigationIntent::Advance if self.current + 1 < self.page_count => self.current + 1,
            NavigationIntent::Retreat if self.current > 0 => self.current - 1,
            _ => {
                log::debug!(
                    "Ignoring {} at page {} of {}",
                    intent,
                    self.current,
                    self.page_count
                );
                return;
            }
        };

        self.current = target;
        self.moves.push((intent, target));
    }
}

impl Default for PageTrack {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_COUNT)
    }
}

impl PagedView for PageTrack {
    fn advance(&mut self) {
        self.step(NavigationIntent::Advance);
    }

    fn retreat(&mut self) {
        self.step(NavigationIntent::Retreat);
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn is_interacting(&self) -> bool {
        self.dragging || self.settling
    }
}
