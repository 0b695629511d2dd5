mod source;

pub use source::{DIRECT_SEND_LIMIT, SourceDocument};
