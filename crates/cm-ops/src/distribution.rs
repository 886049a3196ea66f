//! Package distribution operations
//!
//! Assigning, refreshing, and removing packages across distribution
//! points, singly, site-wide, or by distribution point group. Package
//! associations live in `SMS_DistributionPoint`; the points themselves
//! are rows of `SMS_SystemResourceList`.

use crate::error::OpsResult;
use crate::object::{get_objects, remove_objects};
use cm_provider::{ManagedObject, Provider};
use cm_wql::FilterBuilder;

/// Role name of a distribution point in the system resource list
const DISTRIBUTION_POINT_ROLE: &str = "SMS Distribution Point";

/// Associate a package with every distribution point in the hierarchy.
pub fn assign_package_to_all_distribution_points(
    provider: &dyn Provider,
    package_id: &str,
) -> OpsResult<()> {
    // One association object, saved once per distribution point. Each save
    // with a new NAL path lands as a separate association on the site.
    let mut distribution_point = provider.create_instance("SMS_DistributionPoint")?;
    distribution_point.set_string("PackageID", package_id);

    let filter = FilterBuilder::new()
        .eq("RoleName", DISTRIBUTION_POINT_ROLE)
        .build();
    for resource in get_objects(provider, "SMS_SystemResourceList", &filter)? {
        distribution_point.set_string("ServerNALPath", resource.string_value("NALPath")?);
        distribution_point.set_string("SiteCode", resource.string_value("SiteCode")?);
        provider.put(&mut distribution_point)?;
        provider.refresh(&mut distribution_point)?;
    }
    Ok(())
}

/// Associate a package with a single distribution point, selected by site
/// code, server name, and NAL path pattern.
pub fn assign_package_to_distribution_point(
    provider: &dyn Provider,
    package_id: &str,
    site_code: &str,
    server_name: &str,
    nal_path_query: &str,
) -> OpsResult<()> {
    let mut distribution_point = provider.create_instance("SMS_SCI_SysResUse")?;
    distribution_point.set_string("PackageID", package_id);

    let filter = FilterBuilder::new()
        .eq("RoleName", DISTRIBUTION_POINT_ROLE)
        .eq("SiteCode", site_code)
        .eq("ServerName", server_name)
        .like("NALPath", nal_path_query)
        .build();
    for resource in get_objects(provider, "SMS_SystemResourceList", &filter)? {
        distribution_point.set_string("ServerNALPath", resource.string_value("NALPath")?);
        distribution_point.set_string("SiteCode", resource.string_value("SiteCode")?);
    }

    provider.put(&mut distribution_point)?;
    Ok(())
}

/// Associate a package with every distribution point in a group.
pub fn assign_package_to_distribution_point_group(
    provider: &dyn Provider,
    package_id: &str,
    group_name: &str,
) -> OpsResult<()> {
    let mut distribution_point = provider.create_instance("SMS_DistributionPoint")?;
    distribution_point.set_string("PackageID", package_id);

    let group_filter = FilterBuilder::new().like("sGroupName", group_name).build();
    let role_filter = FilterBuilder::new()
        .eq("RoleName", DISTRIBUTION_POINT_ROLE)
        .build();
    for group in get_objects(provider, "SMS_DistributionPointGroup", &group_filter)? {
        for nal_path in group.string_array_value("arrNALPath")? {
            for resource in get_objects(provider, "SMS_SystemResourceList", &role_filter)? {
                if resource.string_value("NALPath")? != nal_path {
                    continue;
                }
                distribution_point.set_string("ServerNALPath", nal_path.clone());
                distribution_point.set_string("SiteCode", resource.string_value("SiteCode")?);
                provider.put(&mut distribution_point)?;
                provider.refresh(&mut distribution_point)?;
            }
        }
    }
    Ok(())
}

/// Flag a package for refresh on every distribution point that carries it.
pub fn refresh_package_at_all_distribution_points(
    provider: &dyn Provider,
    package_id: &str,
) -> OpsResult<()> {
    let role_filter = FilterBuilder::new()
        .eq("RoleName", DISTRIBUTION_POINT_ROLE)
        .build();
    let package_filter = FilterBuilder::new().eq("PackageID", package_id).build();

    for resource in get_objects(provider, "SMS_SystemResourceList", &role_filter)? {
        let nal_path = resource.string_value("NALPath")?;
        for mut distribution_point in
            get_objects(provider, "SMS_DistributionPoint", &package_filter)?
        {
            if distribution_point.string_value("ServerNALPath")? != nal_path {
                continue;
            }
            distribution_point.set_boolean("RefreshNow", true);
            provider.put(&mut distribution_point)?;
        }
    }
    Ok(())
}

/// Flag a package for refresh on one distribution point.
pub fn refresh_package_at_distribution_point(
    provider: &dyn Provider,
    package_id: &str,
    site_code: &str,
    server_name: &str,
    nal_path_query: &str,
) -> OpsResult<()> {
    let resource_filter = FilterBuilder::new()
        .eq("RoleName", DISTRIBUTION_POINT_ROLE)
        .eq("SiteCode", site_code)
        .eq("ServerName", server_name)
        .like("NALPath", nal_path_query)
        .build();
    let package_filter = FilterBuilder::new().eq("PackageID", package_id).build();

    for resource in get_objects(provider, "SMS_SystemResourceList", &resource_filter)? {
        let nal_path = resource.string_value("NALPath")?;
        for mut distribution_point in
            get_objects(provider, "SMS_DistributionPoint", &package_filter)?
        {
            if distribution_point.string_value("ServerNALPath")? == nal_path {
                distribution_point.set_boolean("RefreshNow", true);
                provider.put(&mut distribution_point)?;
                break;
            }
        }
    }
    Ok(())
}

/// Flag a package for refresh on every distribution point in a group.
pub fn refresh_package_at_distribution_point_group(
    provider: &dyn Provider,
    package_id: &str,
    group_name: &str,
) -> OpsResult<()> {
    let group_filter = FilterBuilder::new().like("sGroupName", group_name).build();
    let package_filter = FilterBuilder::new().eq("PackageID", package_id).build();

    for group in get_objects(provider, "SMS_DistributionPointGroup", &group_filter)? {
        for nal_path in group.string_array_value("arrNALPath")? {
            for mut distribution_point in
                get_objects(provider, "SMS_DistributionPoint", &package_filter)?
            {
                if distribution_point.string_value("ServerNALPath")? != nal_path {
                    continue;
                }
                distribution_point.set_boolean("RefreshNow", true);
                provider.put(&mut distribution_point)?;
            }
        }
    }
    Ok(())
}

/// Remove a package from every distribution point that carries it.
pub fn remove_package_from_all_distribution_points(
    provider: &dyn Provider,
    package_id: &str,
) -> OpsResult<()> {
    let filter = FilterBuilder::new().eq("PackageID", package_id).build();
    remove_objects(provider, "SMS_DistributionPoint", &filter)?;
    Ok(())
}

/// Remove a package from one distribution point.
pub fn remove_package_from_distribution_point(
    provider: &dyn Provider,
    package_id: &str,
    site_code: &str,
    server_name: &str,
    nal_path_query: &str,
) -> OpsResult<()> {
    let resource_filter = FilterBuilder::new()
        .eq("RoleName", DISTRIBUTION_POINT_ROLE)
        .eq("SiteCode", site_code)
        .eq("ServerName", server_name)
        .eq("PackageID", package_id)
        .like("NALPath", nal_path_query)
        .build();

    for resource in get_objects(provider, "SMS_SystemResourceList", &resource_filter)? {
        let filter = FilterBuilder::new()
            .eq("PackageID", package_id)
            .eq("ServerNALPath", resource.string_value("NALPath")?)
            .build();
        remove_objects(provider, "SMS_DistributionPoint", &filter)?;
    }
    Ok(())
}

/// Remove a package from every distribution point in a group.
pub fn remove_package_from_distribution_point_group(
    provider: &dyn Provider,
    package_id: &str,
    group_name: &str,
) -> OpsResult<()> {
    let group_filter = FilterBuilder::new().like("sGroupName", group_name).build();
    let package_filter = FilterBuilder::new().eq("PackageID", package_id).build();

    for group in get_objects(provider, "SMS_DistributionPointGroup", &group_filter)? {
        for nal_path in group.string_array_value("arrNALPath")? {
            for distribution_point in
                get_objects(provider, "SMS_DistributionPoint", &package_filter)?
            {
                if distribution_point.string_value("ServerNALPath")? == nal_path {
                    provider.delete(&distribution_point)?;
                }
            }
        }
    }
    Ok(())
}

/// Distribution points whose remote server name matches
/// `site_system_server_name` (wildcards honored).
pub fn get_distribution_points(
    provider: &dyn Provider,
    site_system_server_name: &str,
) -> OpsResult<Vec<ManagedObject>> {
    let filter = FilterBuilder::new()
        .eq("RoleName", DISTRIBUTION_POINT_ROLE)
        .like("ServerRemoteName", site_system_server_name)
        .build();
    get_objects(provider, "SMS_SystemResourceList", &filter)
}

/// Distribution point groups by name (wildcards honored).
pub fn get_distribution_point_groups(
    provider: &dyn Provider,
    group_name: &str,
) -> OpsResult<Vec<ManagedObject>> {
    let filter = FilterBuilder::new().like("Name", group_name).build();
    get_objects(provider, "SMS_DistributionPointGroup", &filter)
}

/// Distribution point info rows by group name (wildcards honored).
pub fn get_distribution_point_info(
    provider: &dyn Provider,
    group_name: &str,
) -> OpsResult<Vec<ManagedObject>> {
    let filter = FilterBuilder::new().like("Name", group_name).build();
    get_objects(provider, "SMS_DistributionPointInfo", &filter)
}

/// Package associations for a package across all distribution points.
pub fn get_package_distribution_points(
    provider: &dyn Provider,
    package_id: &str,
) -> OpsResult<Vec<ManagedObject>> {
    let filter = FilterBuilder::new().eq("PackageID", package_id).build();
    get_objects(provider, "SMS_DistributionPoint", &filter)
}

/// Query packages with a raw filter clause.
pub fn get_packages(provider: &dyn Provider, filter: &str) -> OpsResult<Vec<ManagedObject>> {
    get_objects(provider, "SMS_Package", filter)
}

#[cfg(test)]
#[path = "distribution_test.rs"]
mod tests;
