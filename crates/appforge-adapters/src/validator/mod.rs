//! Package-id validators.

mod reverse_host;

pub use reverse_host::ReverseHostValidator;
