//! Test doubles and a headless harness for exercising paging cursors.
//!
//! - [`CountingSource`] — integer domain data source that counts probes,
//!   for laziness assertions.
//! - [`RecordingResolver`] — ticket-based resolver that records every
//!   resolve/release and tracks the live handle set, for leak and
//!   lifecycle assertions.
//! - [`CursorTestRule`] — bundles the two around a
//!   [`PagingCursor`](paging_core::PagingCursor) with scenario helpers,
//!   so tests read as traversal scripts.

pub mod recorder;
pub mod rule;
pub mod sources;

pub use recorder::{RecordingResolver, ResolverEvent};
pub use rule::CursorTestRule;
pub use sources::CountingSource;
