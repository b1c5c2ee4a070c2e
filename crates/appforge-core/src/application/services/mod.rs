//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project" or "load a project".

pub mod app;
pub mod directories;
pub mod scaffolder;

pub use app::Application;
pub use directories::DirectoryValidator;
pub use scaffolder::ProjectScaffolder;
