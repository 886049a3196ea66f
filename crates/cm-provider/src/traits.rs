//! Provider trait definition

use crate::error::ProviderResult;
use crate::object::{ManagedObject, MethodParams};

/// Management-provider abstraction for cmclient
///
/// Implementations must be Send + Sync. Every call is synchronous and may
/// block for the duration of the underlying remote round-trip; timeout and
/// cancellation policy belong to the caller, and no call is ever retried
/// here.
pub trait Provider: Send + Sync {
    /// Execute a WQL query, returning the matching objects verbatim
    fn execute_query(&self, wql: &str) -> ProviderResult<Vec<ManagedObject>>;

    /// Fetch a single instance by direct object path
    fn get_instance(&self, path: &str) -> ProviderResult<ManagedObject>;

    /// Create a new, unsaved top-level instance of the given class
    fn create_instance(&self, class: &str) -> ProviderResult<ManagedObject>;

    /// Create a new embedded-object instance of the given class
    fn create_embedded_instance(&self, class: &str) -> ProviderResult<ManagedObject>;

    /// Invoke a class-level method, returning its out parameters
    fn execute_class_method(
        &self,
        class: &str,
        method: &str,
        params: MethodParams,
    ) -> ProviderResult<ManagedObject>;

    /// Invoke a method on a saved instance, returning its out parameters
    fn execute_object_method(
        &self,
        object: &ManagedObject,
        method: &str,
        params: MethodParams,
    ) -> ProviderResult<ManagedObject>;

    /// Save the object, assigning its provider path on first save
    fn put(&self, object: &mut ManagedObject) -> ProviderResult<()>;

    /// Re-read the saved state of the object from the provider
    fn refresh(&self, object: &mut ManagedObject) -> ProviderResult<()>;

    /// Delete the saved instance behind the object
    fn delete(&self, object: &ManagedObject) -> ProviderResult<()>;

    /// Site code of the connected site
    fn connected_site_code(&self) -> ProviderResult<String>;

    /// Provider type identifier for logging
    fn provider_type(&self) -> &'static str;
}
