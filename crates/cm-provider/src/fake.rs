//! Scripted in-memory provider
//!
//! [`FakeProvider`] stands in for the remote SMS provider in tests. It
//! records every query and method invocation, serves seeded objects back
//! by class, and keeps a per-path store so saved objects can be re-read
//! and deleted. WQL filter text is recorded but never interpreted; tests
//! assert on the exact query string instead.

use crate::error::{ProviderError, ProviderResult};
use crate::object::{ManagedObject, MethodParams};
use crate::traits::Provider;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A recorded method invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Class name for class-level methods, object path for instance
    /// methods
    pub target: String,
    pub method: String,
    pub params: MethodParams,
}

#[derive(Default)]
struct Inner {
    site_code: String,
    store: Vec<ManagedObject>,
    queries: Vec<String>,
    method_calls: Vec<MethodCall>,
    method_results: VecDeque<ManagedObject>,
    query_failures: VecDeque<ProviderError>,
    put_history: Vec<ManagedObject>,
    next_path_id: u64,
}

/// Scripted in-memory provider backend
pub struct FakeProvider {
    inner: Mutex<Inner>,
}

impl FakeProvider {
    /// Create an empty fake with no connected site code
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Create an empty fake reporting the given connected site code
    pub fn with_site_code(site_code: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.inner.lock().unwrap().site_code = site_code.into();
        fake
    }

    /// Seed an object into the store under an explicit path.
    ///
    /// The object becomes visible to `execute_query` (by class) and to
    /// `get_instance` (by path).
    pub fn seed_object(&self, path: &str, mut object: ManagedObject) {
        object.set_path(path);
        self.inner.lock().unwrap().store.push(object);
    }

    /// Queue the out-parameter object for the next method invocation.
    ///
    /// Invocations beyond the queue receive an empty result object.
    pub fn queue_method_result(&self, result: ManagedObject) {
        self.inner.lock().unwrap().method_results.push_back(result);
    }

    /// Fail the next `execute_query` call with the given error
    pub fn fail_next_query(&self, error: ProviderError) {
        self.inner.lock().unwrap().query_failures.push_back(error);
    }

    /// All WQL strings dispatched so far, in order
    pub fn queries(&self) -> Vec<String> {
        self.inner.lock().unwrap().queries.clone()
    }

    /// All method invocations recorded so far, in order
    pub fn method_calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().method_calls.clone()
    }

    /// Snapshot of every object state passed to `put`, in order
    pub fn put_history(&self) -> Vec<ManagedObject> {
        self.inner.lock().unwrap().put_history.clone()
    }

    /// Current store contents, seeded and saved objects alike
    pub fn stored_objects(&self) -> Vec<ManagedObject> {
        self.inner.lock().unwrap().store.clone()
    }

    /// Stored objects of one class
    pub fn stored_objects_of_class(&self, class: &str) -> Vec<ManagedObject> {
        self.inner
            .lock()
            .unwrap()
            .store
            .iter()
            .filter(|object| object.class() == class)
            .cloned()
            .collect()
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the class name following `FROM` in a WQL query
fn query_class(wql: &str) -> Option<&str> {
    let upper = wql.to_ascii_uppercase();
    let pos = upper.find(" FROM ")?;
    wql[pos + 6..].split_whitespace().next()
}

impl Provider for FakeProvider {
    fn execute_query(&self, wql: &str) -> ProviderResult<Vec<ManagedObject>> {
        let mut inner = self.inner.lock().unwrap();
        inner.queries.push(wql.to_string());
        if let Some(error) = inner.query_failures.pop_front() {
            return Err(error);
        }

        let class = query_class(wql).unwrap_or_default().to_string();
        log::debug!("fake provider query for class {class}: {wql}");
        Ok(inner
            .store
            .iter()
            .filter(|object| object.class() == class)
            .cloned()
            .collect())
    }

    fn get_instance(&self, path: &str) -> ProviderResult<ManagedObject> {
        let inner = self.inner.lock().unwrap();
        inner
            .store
            .iter()
            .find(|object| object.path() == Some(path))
            .cloned()
            .ok_or_else(|| ProviderError::InstanceNotFound(path.to_string()))
    }

    fn create_instance(&self, class: &str) -> ProviderResult<ManagedObject> {
        Ok(ManagedObject::new(class))
    }

    fn create_embedded_instance(&self, class: &str) -> ProviderResult<ManagedObject> {
        Ok(ManagedObject::new(class))
    }

    fn execute_class_method(
        &self,
        class: &str,
        method: &str,
        params: MethodParams,
    ) -> ProviderResult<ManagedObject> {
        let mut inner = self.inner.lock().unwrap();
        inner.method_calls.push(MethodCall {
            target: class.to_string(),
            method: method.to_string(),
            params,
        });
        Ok(inner
            .method_results
            .pop_front()
            .unwrap_or_else(|| ManagedObject::new("MethodResult")))
    }

    fn execute_object_method(
        &self,
        object: &ManagedObject,
        method: &str,
        params: MethodParams,
    ) -> ProviderResult<ManagedObject> {
        let mut inner = self.inner.lock().unwrap();
        let target = object.path().unwrap_or(object.class()).to_string();
        inner.method_calls.push(MethodCall {
            target,
            method: method.to_string(),
            params,
        });
        Ok(inner
            .method_results
            .pop_front()
            .unwrap_or_else(|| ManagedObject::new("MethodResult")))
    }

    fn put(&self, object: &mut ManagedObject) -> ProviderResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if object.path().is_none() {
            inner.next_path_id += 1;
            object.set_path(format!("{}/{}", object.class(), inner.next_path_id));
        }

        inner.put_history.push(object.clone());
        if let Some(existing) = inner
            .store
            .iter_mut()
            .find(|stored| stored.path() == object.path())
        {
            *existing = object.clone();
        } else {
            inner.store.push(object.clone());
        }
        Ok(())
    }

    fn refresh(&self, object: &mut ManagedObject) -> ProviderResult<()> {
        let path = object
            .path()
            .ok_or_else(|| ProviderError::Unsaved {
                class: object.class().to_string(),
            })?
            .to_string();

        let inner = self.inner.lock().unwrap();
        let stored = inner
            .store
            .iter()
            .find(|stored| stored.path() == Some(path.as_str()))
            .ok_or(ProviderError::InstanceNotFound(path))?;
        *object = stored.clone();
        Ok(())
    }

    fn delete(&self, object: &ManagedObject) -> ProviderResult<()> {
        let path = object
            .path()
            .ok_or_else(|| ProviderError::Unsaved {
                class: object.class().to_string(),
            })?
            .to_string();

        let mut inner = self.inner.lock().unwrap();
        let before = inner.store.len();
        inner.store.retain(|stored| stored.path() != Some(path.as_str()));
        if inner.store.len() == before {
            return Err(ProviderError::InstanceNotFound(path));
        }
        Ok(())
    }

    fn connected_site_code(&self) -> ProviderResult<String> {
        Ok(self.inner.lock().unwrap().site_code.clone())
    }

    fn provider_type(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_collection(fake: &FakeProvider, collection_id: &str) {
        let mut collection = ManagedObject::new("SMS_Collection");
        collection.set_string("CollectionID", collection_id);
        fake.seed_object(
            &format!("SMS_Collection.CollectionID='{collection_id}'"),
            collection,
        );
    }

    #[test]
    fn test_query_returns_seeded_objects_by_class() {
        let fake = FakeProvider::new();
        seeded_collection(&fake, "XYZ00012");

        let results = fake
            .execute_query("SELECT * FROM SMS_Collection WHERE Name='anything'")
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].string_value("CollectionID").unwrap(), "XYZ00012");

        assert!(fake.execute_query("SELECT * FROM SMS_Package").unwrap().is_empty());
    }

    #[test]
    fn test_queries_are_recorded_verbatim() {
        let fake = FakeProvider::new();
        fake.execute_query("SELECT * FROM SMS_Site").unwrap();
        assert_eq!(fake.queries(), vec!["SELECT * FROM SMS_Site".to_string()]);
    }

    #[test]
    fn test_query_failure_injection() {
        let fake = FakeProvider::new();
        fake.fail_next_query(ProviderError::QueryError("boom".to_string()));

        let err = fake.execute_query("SELECT * FROM SMS_Site").unwrap_err();
        assert!(matches!(err, ProviderError::QueryError(_)));

        // The failure is consumed; the next query succeeds.
        assert!(fake.execute_query("SELECT * FROM SMS_Site").unwrap().is_empty());
    }

    #[test]
    fn test_get_instance_by_path() {
        let fake = FakeProvider::new();
        seeded_collection(&fake, "XYZ00012");

        let collection = fake
            .get_instance("SMS_Collection.CollectionID='XYZ00012'")
            .unwrap();
        assert_eq!(collection.class(), "SMS_Collection");

        let err = fake
            .get_instance("SMS_Collection.CollectionID='MISSING'")
            .unwrap_err();
        assert!(matches!(err, ProviderError::InstanceNotFound(_)));
    }

    #[test]
    fn test_put_assigns_path_and_stores() {
        let fake = FakeProvider::new();
        let mut collection = fake.create_instance("SMS_Collection").unwrap();
        collection.set_string("Name", "Lab");

        fake.put(&mut collection).unwrap();
        assert!(collection.path().is_some());
        assert_eq!(fake.stored_objects_of_class("SMS_Collection").len(), 1);

        // A second put updates in place rather than duplicating.
        collection.set_string("Name", "Lab v2");
        fake.put(&mut collection).unwrap();
        let stored = fake.stored_objects_of_class("SMS_Collection");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].string_value("Name").unwrap(), "Lab v2");
        assert_eq!(fake.put_history().len(), 2);
    }

    #[test]
    fn test_refresh_rereads_saved_state() {
        let fake = FakeProvider::new();
        let mut collection = fake.create_instance("SMS_Collection").unwrap();
        collection.set_string("Name", "Lab");
        fake.put(&mut collection).unwrap();

        let mut stale = collection.clone();
        stale.set_string("Name", "local edit");
        fake.refresh(&mut stale).unwrap();
        assert_eq!(stale.string_value("Name").unwrap(), "Lab");
    }

    #[test]
    fn test_refresh_unsaved_object_fails() {
        let fake = FakeProvider::new();
        let mut collection = fake.create_instance("SMS_Collection").unwrap();
        let err = fake.refresh(&mut collection).unwrap_err();
        assert!(matches!(err, ProviderError::Unsaved { .. }));
    }

    #[test]
    fn test_delete_removes_from_store() {
        let fake = FakeProvider::new();
        seeded_collection(&fake, "XYZ00012");

        let collection = fake
            .get_instance("SMS_Collection.CollectionID='XYZ00012'")
            .unwrap();
        fake.delete(&collection).unwrap();
        assert!(fake.stored_objects().is_empty());

        let err = fake.delete(&collection).unwrap_err();
        assert!(matches!(err, ProviderError::InstanceNotFound(_)));
    }

    #[test]
    fn test_method_results_are_scripted_in_order() {
        let fake = FakeProvider::new();
        let mut out = ManagedObject::new("ImportResult");
        out.set_integer("ResourceID", 16777220);
        fake.queue_method_result(out);

        let result = fake
            .execute_class_method("SMS_Site", "ImportMachineEntry", MethodParams::new())
            .unwrap();
        assert_eq!(result.integer_value("ResourceID").unwrap(), 16777220);

        // Queue exhausted: an empty result object comes back.
        let result = fake
            .execute_class_method("SMS_Site", "ImportMachineEntry", MethodParams::new())
            .unwrap();
        assert_eq!(result.class(), "MethodResult");

        let calls = fake.method_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].target, "SMS_Site");
        assert_eq!(calls[0].method, "ImportMachineEntry");
    }

    #[test]
    fn test_object_method_targets_path() {
        let fake = FakeProvider::new();
        seeded_collection(&fake, "XYZ00012");
        let collection = fake
            .get_instance("SMS_Collection.CollectionID='XYZ00012'")
            .unwrap();

        fake.execute_object_method(&collection, "RequestRefresh", MethodParams::new())
            .unwrap();
        assert_eq!(
            fake.method_calls()[0].target,
            "SMS_Collection.CollectionID='XYZ00012'"
        );
    }

    #[test]
    fn test_connected_site_code() {
        let fake = FakeProvider::with_site_code("PS1");
        assert_eq!(fake.connected_site_code().unwrap(), "PS1");
        assert_eq!(fake.provider_type(), "fake");
    }
}
