//! Badge Grid Generator Core
//!
//! Turns a certification record list into a honeycomb badge grid image:
//! records are filtered to eligible badges, grouped by issuer, ordered by
//! issuer recency and tier, laid out on a hex-offset grid, and composited
//! onto a transparent canvas.

pub mod compose;
pub mod layout;
pub mod ordering;
pub mod records;

pub use compose::{GridError, GridPipeline, GridSummary};
pub use layout::{GridConfig, GridLayout, LayoutError, Placement};
pub use ordering::{group_by_issuer, ordered_badge_names, IssuerGroup};
pub use records::{Certification, CertificateRef, RecordError, BADGE_PATH_PREFIX};
