//! Domain model types (pure).
//!
//! The host document, its functions containers and the functions themselves.

pub mod container;
pub mod error;
pub mod function;
pub mod identifiers;
pub mod project;

// Re-export for convenience
pub use container::EventsFunctionsContainer;
pub use error::ProjectError;
pub use function::{EventsFunction, FunctionType};
pub use identifiers::{ContainerId, FunctionId, ListKey};
pub use project::{EventsFunctionsExtension, Project};
