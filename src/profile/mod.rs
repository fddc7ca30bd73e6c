mod aggregate;
mod offset;
mod report;

pub use aggregate::{aggregate, Profile};
pub use offset::{next_offset, OffsetCursor, OffsetRange};
pub use report::write_profiles;

/// Lowest offset used when none is given: 50 windows upstream of the TSS.
pub const DEFAULT_LOWEST_OFFSET: i32 = -50;
