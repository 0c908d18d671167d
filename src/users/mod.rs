mod record;
mod source;

pub use record::{UserRecord, INVALID_DATE};
pub use source::{HttpUserSource, SourceError, SourceTimeouts, UserSource};
