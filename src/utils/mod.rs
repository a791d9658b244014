//! Small shared helpers.

pub mod de;
pub mod format;
