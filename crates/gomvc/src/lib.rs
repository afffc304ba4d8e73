//! gomvc - Go MVC project scaffolding
//!
//! Lays down a fixed Gin service skeleton (entry point, router, controller,
//! model, middleware, utility package) under a project root, and removes it
//! again. The only input is the Go module identifier, which becomes the import
//! prefix of every generated cross-package reference.
//!
//! The file set is compiled in. This is not a general template engine.

pub mod decommission;
pub mod error;
pub mod init;
pub mod layout;
pub mod module;
pub mod provision;
pub mod status;
pub mod templates;
pub mod variables;

pub use decommission::{DecommissionReport, Decommissioner};
pub use error::{DeleteError, ProvisionError};
pub use init::{CommandInitializer, InitOutcome, ModuleInitializer, SkipInitializer};
pub use module::ModuleId;
pub use provision::{ProvisionReport, Provisioner};
pub use status::SkeletonStatus;
pub use variables::Variables;
