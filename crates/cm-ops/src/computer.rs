//! Computer records, device variables, and PXE state
//!
//! Machine import goes through the site's `ImportMachineEntry` method;
//! everything else is `SMS_R_System` and settings-object bookkeeping.

use crate::error::{OpsError, OpsResult};
use crate::object::get_objects;
use cm_provider::{ManagedObject, MethodParams, PropertyValue, Provider};
use cm_wql::{instance_path, FilterBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// LocaleID written to newly created machine settings (en-US)
const DEFAULT_LOCALE_ID: i64 = 1033;

/// Optional match criteria for [`get_computers`].
///
/// NetBIOS and domain names honor `*` wildcards; resource ID and MAC
/// address match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerQuery {
    pub resource_id: Option<u32>,
    pub netbios_name: Option<String>,
    pub domain_name: Option<String>,
    pub mac_address: Option<String>,
}

/// Import a new computer record and register it as a direct member of the
/// given collection. Returns the new resource ID.
///
/// At least one of `smbios_guid` and `mac_address` must be provided; the
/// site cannot match an import record without a hardware identity.
pub fn import_computer(
    provider: &dyn Provider,
    collection_id: &str,
    netbios_name: &str,
    smbios_guid: Option<Uuid>,
    mac_address: Option<&str>,
) -> OpsResult<i64> {
    if smbios_guid.is_none() && mac_address.is_none() {
        return Err(OpsError::MissingMachineIdentity {
            netbios_name: netbios_name.to_string(),
        });
    }

    let resource_id = import_machine_entry(provider, netbios_name, smbios_guid, mac_address, false)?;

    // Register the imported record as a direct member of the target
    // collection.
    let collection =
        provider.get_instance(&instance_path("SMS_Collection", "CollectionID", collection_id))?;
    let mut rule = provider.create_embedded_instance("SMS_CollectionRuleDirect")?;
    rule.set_string("ResourceClassName", "SMS_R_System");
    rule.set_integer("ResourceID", resource_id);

    let mut params = MethodParams::new();
    params.insert(
        "collectionRule".to_string(),
        PropertyValue::Object(Box::new(rule)),
    );
    provider.execute_object_method(&collection, "AddMembershipRule", params)?;

    Ok(resource_id)
}

/// Re-import an existing computer record, overwriting what the site has.
/// Returns the resource ID.
pub fn update_existing_computer(
    provider: &dyn Provider,
    netbios_name: &str,
    mac_address: &str,
) -> OpsResult<i64> {
    import_machine_entry(provider, netbios_name, None, Some(mac_address), true)
}

fn import_machine_entry(
    provider: &dyn Provider,
    netbios_name: &str,
    smbios_guid: Option<Uuid>,
    mac_address: Option<&str>,
    overwrite: bool,
) -> OpsResult<i64> {
    // The import method wants colon-separated MAC addresses.
    let mac_address = mac_address.map(|mac| mac.replace('-', ":"));

    let mut params = MethodParams::new();
    params.insert(
        "NetbiosName".to_string(),
        PropertyValue::String(netbios_name.to_string()),
    );
    if let Some(guid) = smbios_guid {
        params.insert(
            "SMBIOSGUID".to_string(),
            PropertyValue::String(guid.to_string()),
        );
    }
    if let Some(mac) = mac_address {
        params.insert("MACAddress".to_string(), PropertyValue::String(mac));
    }
    params.insert(
        "OverwriteExistingRecord".to_string(),
        PropertyValue::Boolean(overwrite),
    );

    let out_params = provider.execute_class_method("SMS_Site", "ImportMachineEntry", params)?;
    Ok(out_params.integer_value("ResourceID")?)
}

/// Query computer records matching the given criteria.
pub fn get_computers(
    provider: &dyn Provider,
    query: &ComputerQuery,
) -> OpsResult<Vec<ManagedObject>> {
    let mut filter = FilterBuilder::new();
    if let Some(resource_id) = query.resource_id {
        filter = filter.eq("ResourceID", resource_id.to_string());
    }
    if let Some(netbios_name) = &query.netbios_name {
        filter = filter.like("NetbiosName", netbios_name);
    }
    if let Some(mac_address) = &query.mac_address {
        filter = filter.eq("MacAddresses", mac_address);
    }
    if let Some(domain_name) = &query.domain_name {
        filter = filter.like("ResourceDomainOrWorkgroup", domain_name);
    }
    get_objects(provider, "SMS_R_System", &filter.build())
}

/// Create a device variable on a machine's settings object.
///
/// The settings object is created on first use, stamped with the locale
/// and the connected site code.
pub fn create_device_variable(
    provider: &dyn Provider,
    resource_id: u32,
    name: &str,
    value: &str,
    mask: bool,
) -> OpsResult<()> {
    let filter = FilterBuilder::new()
        .eq("ResourceID", resource_id.to_string())
        .build();
    let existing = get_objects(provider, "SMS_MachineSettings", &filter)?.pop();

    let mut variable = provider.create_embedded_instance("SMS_MachineVariable")?;
    variable.set_string("Name", name);
    variable.set_string("Value", value);
    variable.set_boolean("IsMasked", mask);

    let mut settings = match existing {
        Some(settings) => settings,
        None => {
            let mut settings = provider.create_instance("SMS_MachineSettings")?;
            // ResourceID is a string property on SMS_MachineSettings.
            settings.set_string("ResourceID", resource_id.to_string());
            settings.set_integer("LocaleID", DEFAULT_LOCALE_ID);
            settings.set_string("SourceSite", provider.connected_site_code()?);
            settings
        }
    };

    let mut variables = settings.array_items("MachineVariables")?;
    variables.push(variable);
    settings.set_array_items("MachineVariables", variables);
    provider.put(&mut settings)?;
    provider.refresh(&mut settings)?;
    Ok(())
}

/// Clear any last-PXE-advertisement state for a device.
///
/// Returns `Ok(true)` when the device ends up clear, including the case
/// where no PXE advertisement was on record to begin with.
pub fn clear_pxe_advertisement(provider: &dyn Provider, netbios_name: &str) -> OpsResult<bool> {
    let filter = FilterBuilder::new().eq("NetBiosName", netbios_name).build();
    let advertisements = get_objects(provider, "SMS_LastPXEAdvertisement", &filter)?;
    if advertisements.is_empty() {
        // Nothing on record for the device, so it is already clear.
        log::warn!("no PXE advertisement recorded for {netbios_name}");
        return Ok(true);
    }

    let query = ComputerQuery {
        netbios_name: Some(netbios_name.to_string()),
        ..ComputerQuery::default()
    };
    let computer = get_computers(provider, &query)?
        .into_iter()
        .next()
        .ok_or_else(|| OpsError::ResourceNotFound {
            netbios_name: netbios_name.to_string(),
        })?;
    let resource_id = computer.integer_value("ResourceID")?;

    let mut params = MethodParams::new();
    params.insert(
        "ResourceIDs".to_string(),
        PropertyValue::IntegerArray(vec![resource_id]),
    );
    let result =
        provider.execute_class_method("SMS_Collection", "ClearLastNBSAdvForMachines", params)?;
    if result.integer_value("StatusCode")? != 0 {
        return Err(OpsError::PxeClearFailed {
            message: result.string_value("Description")?.to_string(),
        });
    }
    Ok(true)
}

#[cfg(test)]
#[path = "computer_test.rs"]
mod tests;
