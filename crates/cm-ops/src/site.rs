//! Site, site system, boundary, and site-control objects

use crate::error::OpsResult;
use crate::object::get_objects;
use cm_provider::{ManagedObject, Provider};
use cm_wql::FilterBuilder;

/// Role name of a site system in the system resource list
const SITE_SYSTEM_ROLE: &str = "SMS Site System";

/// All site installations in the hierarchy.
pub fn get_sites(provider: &dyn Provider) -> OpsResult<Vec<ManagedObject>> {
    get_objects(provider, "SMS_Site", "")
}

/// Site systems whose remote server name matches `server_name`
/// (wildcards honored on both name and site code).
pub fn get_site_systems(
    provider: &dyn Provider,
    server_name: &str,
    site_code: Option<&str>,
) -> OpsResult<Vec<ManagedObject>> {
    let mut filter = FilterBuilder::new()
        .eq("RoleName", SITE_SYSTEM_ROLE)
        .like("ServerRemoteName", server_name);
    if let Some(site_code) = site_code {
        filter = filter.like("SiteCode", site_code);
    }
    get_objects(provider, "SMS_SystemResourceList", &filter.build())
}

/// System resource list rows for a server, any role.
pub fn get_system_resource_list(
    provider: &dyn Provider,
    server_name: &str,
    site_code: Option<&str>,
) -> OpsResult<Vec<ManagedObject>> {
    let mut filter = FilterBuilder::new().like("ServerRemoteName", server_name);
    if let Some(site_code) = site_code {
        filter = filter.like("SiteCode", site_code);
    }
    get_objects(provider, "SMS_SystemResourceList", &filter.build())
}

/// Boundaries by display name and/or value, optionally pinned to a site.
///
/// Name and value honor wildcards; the site code matches exactly.
pub fn get_boundaries(
    provider: &dyn Provider,
    boundary_name: Option<&str>,
    value: Option<&str>,
    site_code: Option<&str>,
) -> OpsResult<Vec<ManagedObject>> {
    let mut filter = FilterBuilder::new();
    if let Some(site_code) = site_code {
        filter = filter.eq("DefaultSiteCode", site_code);
    }
    if let Some(boundary_name) = boundary_name {
        filter = filter.like("DisplayName", boundary_name);
    }
    if let Some(value) = value {
        filter = filter.like("Value", value);
    }
    get_objects(provider, "SMS_Boundary", &filter.build())
}

/// Boundary groups by name, optionally pinned to a site.
pub fn get_boundary_groups(
    provider: &dyn Provider,
    boundary_name: Option<&str>,
    site_code: Option<&str>,
) -> OpsResult<Vec<ManagedObject>> {
    let mut filter = FilterBuilder::new();
    if let Some(site_code) = site_code {
        filter = filter.eq("DefaultSiteCode", site_code);
    }
    if let Some(boundary_name) = boundary_name {
        filter = filter.like("Name", boundary_name);
    }
    get_objects(provider, "SMS_BoundaryGroup", &filter.build())
}

/// Register a server (or other network resource) for a site role.
///
/// NAL path format is the MSWNET scheme documented for site control
/// items: <http://msdn.microsoft.com/en-us/library/hh949718.aspx>
pub fn create_sci_sys_res_use(
    provider: &dyn Provider,
    site_control_item_name: &str,
    site_code: &str,
    role_name: &str,
) -> OpsResult<ManagedObject> {
    let nal_path = format!(
        r#"["Display=\\{site_control_item_name}\"]MSWNET:["SMS_SITE={site_code}"]\\{site_control_item_name}\"#
    );

    let mut item = provider.create_instance("SMS_SCI_SysResUse")?;
    item.set_string("ItemName", format!("{nal_path},SMS Site System"));
    item.set_string("ItemType", "System Resource Usage");
    item.set_string("NALPath", nal_path);
    item.set_string("NALType", "Windows NT Server");
    item.set_string("NetworkOSPath", format!(r"\\{site_control_item_name}"));
    item.set_string("RoleName", role_name);
    item.set_string("SiteCode", site_code);

    provider.put(&mut item)?;
    provider.refresh(&mut item)?;
    Ok(item)
}

/// Site control resource usages for a site, optionally narrowed by item
/// name (wildcards honored) and role.
pub fn get_sci_res_use(
    provider: &dyn Provider,
    server_name: Option<&str>,
    site_code: &str,
    role_name: Option<&str>,
) -> OpsResult<Vec<ManagedObject>> {
    let mut filter = FilterBuilder::new().eq("SiteCode", site_code);
    if let Some(server_name) = server_name {
        filter = filter.like("ItemName", server_name);
    }
    if let Some(role_name) = role_name {
        filter = filter.eq("RoleName", role_name);
    }
    get_objects(provider, "SMS_SCI_SysResUse", &filter.build())
}

/// Fetch a distribution point's LAN address from the site control file.
pub fn get_sci_address(
    provider: &dyn Provider,
    item_name: &str,
    site_code: &str,
) -> OpsResult<ManagedObject> {
    let path = format!(
        r#"SMS_SCI_ADDRESS.FileType=2,ItemName="{item_name}|MS_LAN",ItemType="Address",SiteCode="{site_code}""#
    );
    Ok(provider.get_instance(&path)?)
}

/// Build a general-purpose embedded property for site control items.
///
/// `value` carries numeric properties; `value1`/`value2` carry string
/// properties and registry-typed values.
pub fn embedded_property(
    provider: &dyn Provider,
    property_name: &str,
    value: i64,
    value1: &str,
    value2: &str,
) -> OpsResult<ManagedObject> {
    let mut property = provider.create_embedded_instance("SMS_EmbeddedProperty")?;
    property.set_string("PropertyName", property_name);
    property.set_integer("Value", value);
    property.set_string("Value1", value1);
    property.set_string("Value2", value2);
    Ok(property)
}

/// Build an embedded property list for site control items.
pub fn embedded_property_list(
    provider: &dyn Provider,
    property_list_name: &str,
    values: Vec<String>,
) -> OpsResult<ManagedObject> {
    let mut list = provider.create_embedded_instance("SMS_EmbeddedPropertyList")?;
    list.set_string("PropertyListName", property_list_name);
    list.set_string_array("Values", values);
    Ok(list)
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
