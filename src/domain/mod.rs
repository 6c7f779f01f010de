//! Domain logic - pure release rules independent of the filesystem and tools

pub mod fragment;
pub mod release_kind;

pub use fragment::{has_allowed_keyword, malformed_fragments};
pub use release_kind::ReleaseKind;
