//! Tilt Pager - Gesture-driven paging
//!
//! Connects a motion sensor to a paged view:
//!
//! - **Pager**: owns the classifier, debouncer, view and clock; handles one
//!   reading at a time with no async and no shared state
//! - **Task**: runs a pager on a tokio task, feeding it from the sensor
//!   stream and arming the cooldown unlock timer; cancelled on shutdown
//! - **Page track**: in-memory paged view with boundaries and drag state
//!
//! ## Architecture
//!
//! ```text
//!   OrientationSource ──► broadcast<SensorReading>
//!                                  │
//!                                  ▼
//!                       ┌─────────────────────┐
//!   shutdown ─────────► │     PagerTask       │ ◄──── unlock timer
//!                       └──────────┬──────────┘
//!                                  │ handle_reading
//!                                  ▼
//!                       ┌─────────────────────┐
//!                       │ GestureDrivenPager  │
//!                       │ classifier+debounce │
//!                       └──────────┬──────────┘
//!                                  │ advance / retreat
//!                                  ▼
//!                              PagedView
//! ```

pub mod error;
pub mod page_track;
pub mod pager;
pub mod task;

// Re-export main types
pub use error::{PagerError, Result};
pub use page_track::PageTrack;
pub use pager::{GestureDrivenPager, PagerOutcome, PagerStats};
pub use task::{PagerHandle, PagerTask};
