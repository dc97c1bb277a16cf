//! PaperLens Pipeline — report assembly over the extract/query/retrieve/
//! score stages.
//!
//! One function per request-facing operation: external check, internal
//! check, corpus upload.

pub mod external;
pub mod internal;
pub mod services;
pub mod upload;

pub use external::check_external;
pub use internal::check_internal;
pub use services::Services;
pub use upload::upload_paper;
