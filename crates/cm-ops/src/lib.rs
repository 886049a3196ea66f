//! cm-ops - Configuration Manager operations for cmclient
//!
//! High-level operations against the SMS provider: collections and their
//! membership rules, computer records, package distribution, and site
//! control objects. Every function takes the provider capability as an
//! explicit first argument; nothing here retries, caches, or reinterprets
//! provider failures.

pub mod collection;
pub mod computer;
pub mod distribution;
pub mod error;
pub mod folder;
pub mod object;
pub mod site;

pub use collection::WeeklySchedule;
pub use computer::ComputerQuery;
pub use error::{OpsError, OpsResult};
pub use folder::FolderType;
pub use object::{get_objects, remove_objects};
