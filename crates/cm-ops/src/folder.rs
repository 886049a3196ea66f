//! Console folder types and item moves

use crate::error::OpsResult;
use cm_provider::{MethodParams, PropertyValue, Provider};
use serde::{Deserialize, Serialize};

/// Console folder object types understood by `SMS_ObjectContainerItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderType {
    Package,
    Advertisement,
    Query,
    Report,
    MeteredProductRule,
    ConfigurationItem,
    OperatingSystemInstallPackage,
    StateMigration,
    ImagePackage,
    BootImagePackage,
    TaskSequencePackage,
    DeviceSettingPackage,
    DriverPackage,
    Driver,
    SoftwareUpdate,
    DeviceCollection,
}

impl FolderType {
    /// Numeric object type code used by the provider
    pub fn code(self) -> i64 {
        match self {
            Self::Package => 2,
            Self::Advertisement => 3,
            Self::Query => 7,
            Self::Report => 8,
            Self::MeteredProductRule => 9,
            Self::ConfigurationItem => 11,
            Self::OperatingSystemInstallPackage => 14,
            Self::StateMigration => 17,
            Self::ImagePackage => 18,
            Self::BootImagePackage => 19,
            Self::TaskSequencePackage => 20,
            Self::DeviceSettingPackage => 21,
            Self::DriverPackage => 23,
            Self::Driver => 25,
            Self::SoftwareUpdate => 1011,
            Self::DeviceCollection => 5000,
        }
    }
}

/// Move a console item between folders.
pub fn move_console_folder_item(
    provider: &dyn Provider,
    item_object_id: &str,
    folder_type: FolderType,
    source_container_id: i64,
    destination_container_id: i64,
) -> OpsResult<()> {
    let mut params = MethodParams::new();
    // Only one item moves per call, so InstanceKeys is a one-element array.
    params.insert(
        "InstanceKeys".to_string(),
        PropertyValue::StringArray(vec![item_object_id.to_string()]),
    );
    params.insert(
        "ContainerNodeID".to_string(),
        PropertyValue::Integer(source_container_id),
    );
    params.insert(
        "TargetContainerNodeID".to_string(),
        PropertyValue::Integer(destination_container_id),
    );
    params.insert(
        "ObjectType".to_string(),
        PropertyValue::Integer(folder_type.code()),
    );
    provider.execute_class_method("SMS_ObjectContainerItem", "MoveMembers", params)?;
    Ok(())
}

#[cfg(test)]
#[path = "folder_test.rs"]
mod tests;
