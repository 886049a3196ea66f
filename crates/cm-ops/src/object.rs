//! Generic object query and removal
//!
//! Every lookup in this crate funnels through [`get_objects`]: render the
//! query with `cm_wql::select_all`, dispatch it, and hand the result set
//! back untouched.

use crate::error::OpsResult;
use cm_provider::{ManagedObject, Provider};
use cm_wql::select_all;

/// Query all instances of `object_class` matching `filter`.
///
/// An empty filter selects every instance of the class. The result set is
/// returned exactly as the provider produced it, and provider failures
/// propagate unchanged.
pub fn get_objects(
    provider: &dyn Provider,
    object_class: &str,
    filter: &str,
) -> OpsResult<Vec<ManagedObject>> {
    let query = select_all(object_class, filter);
    log::debug!("dispatching WQL query: {query}");
    Ok(provider.execute_query(&query)?)
}

/// Delete every instance of `object_class` matching `filter`, returning
/// the number of objects deleted.
pub fn remove_objects(
    provider: &dyn Provider,
    object_class: &str,
    filter: &str,
) -> OpsResult<usize> {
    let objects = get_objects(provider, object_class, filter)?;
    let count = objects.len();
    for object in &objects {
        provider.delete(object)?;
    }
    Ok(count)
}

#[cfg(test)]
#[path = "object_test.rs"]
mod tests;
