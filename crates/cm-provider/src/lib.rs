//! cm-provider - Management-provider abstraction for cmclient
//!
//! This crate defines the [`Provider`] trait (the query-execution
//! capability every operation is handed), the managed-object data model,
//! connection configuration, and a scripted in-memory provider for tests.

pub mod config;
pub mod error;
pub mod fake;
pub mod object;
pub mod traits;

pub use config::ConnectionConfig;
pub use error::{ProviderError, ProviderResult};
pub use fake::{FakeProvider, MethodCall};
pub use object::{ManagedObject, MethodParams, PropertyValue};
pub use traits::Provider;
