use super::*;
use cm_provider::FakeProvider;

#[test]
fn test_get_sites_is_unfiltered() {
    let fake = FakeProvider::new();
    get_sites(&fake).unwrap();
    assert_eq!(fake.queries(), vec!["SELECT * FROM SMS_Site".to_string()]);
}

#[test]
fn test_get_site_systems_without_site_code() {
    let fake = FakeProvider::new();
    get_site_systems(&fake, "SRV*", None).unwrap();
    assert_eq!(
        fake.queries(),
        vec![
            "SELECT * FROM SMS_SystemResourceList WHERE \
             RoleName='SMS Site System' AND ServerRemoteName LIKE 'SRV%'"
                .to_string()
        ]
    );
}

#[test]
fn test_get_site_systems_with_site_code() {
    let fake = FakeProvider::new();
    get_site_systems(&fake, "SRV01", Some("PS*")).unwrap();
    assert_eq!(
        fake.queries(),
        vec![
            "SELECT * FROM SMS_SystemResourceList WHERE \
             RoleName='SMS Site System' AND ServerRemoteName='SRV01' AND SiteCode LIKE 'PS%'"
                .to_string()
        ]
    );
}

#[test]
fn test_get_system_resource_list_has_no_role_constraint() {
    let fake = FakeProvider::new();
    get_system_resource_list(&fake, "SRV*", Some("PS1")).unwrap();
    assert_eq!(
        fake.queries(),
        vec![
            "SELECT * FROM SMS_SystemResourceList WHERE \
             ServerRemoteName LIKE 'SRV%' AND SiteCode='PS1'"
                .to_string()
        ]
    );
}

#[test]
fn test_get_boundaries_full_criteria() {
    let fake = FakeProvider::new();
    get_boundaries(&fake, Some("Lab*"), Some("10.0.0.*"), Some("PS1")).unwrap();
    assert_eq!(
        fake.queries(),
        vec![
            "SELECT * FROM SMS_Boundary WHERE \
             DefaultSiteCode='PS1' AND DisplayName LIKE 'Lab%' AND Value LIKE '10.0.0.%'"
                .to_string()
        ]
    );
}

#[test]
fn test_get_boundaries_without_criteria_selects_all() {
    let fake = FakeProvider::new();
    get_boundaries(&fake, None, None, None).unwrap();
    assert_eq!(fake.queries(), vec!["SELECT * FROM SMS_Boundary".to_string()]);
}

#[test]
fn test_get_boundary_groups_name_only() {
    let fake = FakeProvider::new();
    get_boundary_groups(&fake, Some("Branch*"), None).unwrap();
    assert_eq!(
        fake.queries(),
        vec!["SELECT * FROM SMS_BoundaryGroup WHERE Name LIKE 'Branch%'".to_string()]
    );
}

#[test]
fn test_get_boundary_groups_site_pinned() {
    let fake = FakeProvider::new();
    get_boundary_groups(&fake, Some("Branch Offices"), Some("PS1")).unwrap();
    assert_eq!(
        fake.queries(),
        vec![
            "SELECT * FROM SMS_BoundaryGroup WHERE \
             DefaultSiteCode='PS1' AND Name='Branch Offices'"
                .to_string()
        ]
    );
}

#[test]
fn test_create_sci_sys_res_use_formats_nal_paths() {
    let fake = FakeProvider::new();
    let item = create_sci_sys_res_use(&fake, "SRV01", "PS1", "SMS Distribution Point").unwrap();

    assert_eq!(item.class(), "SMS_SCI_SysResUse");
    assert_eq!(
        item.string_value("NALPath").unwrap(),
        r#"["Display=\\SRV01\"]MSWNET:["SMS_SITE=PS1"]\\SRV01\"#
    );
    assert_eq!(
        item.string_value("ItemName").unwrap(),
        r#"["Display=\\SRV01\"]MSWNET:["SMS_SITE=PS1"]\\SRV01\,SMS Site System"#
    );
    assert_eq!(item.string_value("ItemType").unwrap(), "System Resource Usage");
    assert_eq!(item.string_value("NALType").unwrap(), "Windows NT Server");
    assert_eq!(item.string_value("NetworkOSPath").unwrap(), r"\\SRV01");
    assert_eq!(
        item.string_value("RoleName").unwrap(),
        "SMS Distribution Point"
    );
    assert_eq!(item.string_value("SiteCode").unwrap(), "PS1");
    assert!(item.path().is_some());
}

#[test]
fn test_get_sci_res_use_with_all_criteria() {
    let fake = FakeProvider::new();
    get_sci_res_use(&fake, Some("SRV*"), "PS1", Some("SMS Site System")).unwrap();
    assert_eq!(
        fake.queries(),
        vec![
            "SELECT * FROM SMS_SCI_SysResUse WHERE \
             SiteCode='PS1' AND ItemName LIKE 'SRV%' AND RoleName='SMS Site System'"
                .to_string()
        ]
    );
}

#[test]
fn test_get_sci_res_use_site_only() {
    let fake = FakeProvider::new();
    get_sci_res_use(&fake, None, "PS1", None).unwrap();
    assert_eq!(
        fake.queries(),
        vec!["SELECT * FROM SMS_SCI_SysResUse WHERE SiteCode='PS1'".to_string()]
    );
}

#[test]
fn test_get_sci_address_instance_path() {
    let fake = FakeProvider::new();
    let path = r#"SMS_SCI_ADDRESS.FileType=2,ItemName="SRV01|MS_LAN",ItemType="Address",SiteCode="PS1""#;
    fake.seed_object(path, ManagedObject::new("SMS_SCI_ADDRESS"));

    let address = get_sci_address(&fake, "SRV01", "PS1").unwrap();
    assert_eq!(address.class(), "SMS_SCI_ADDRESS");
}

#[test]
fn test_embedded_property() {
    let fake = FakeProvider::new();
    let property =
        embedded_property(&fake, "Startup Schedule", 0, "REG_SZ", "0001200000100038").unwrap();

    assert_eq!(property.class(), "SMS_EmbeddedProperty");
    assert_eq!(
        property.string_value("PropertyName").unwrap(),
        "Startup Schedule"
    );
    assert_eq!(property.integer_value("Value").unwrap(), 0);
    assert_eq!(property.string_value("Value1").unwrap(), "REG_SZ");
    assert_eq!(property.string_value("Value2").unwrap(), "0001200000100038");
    // Embedded objects never carry a provider path.
    assert!(property.path().is_none());
}

#[test]
fn test_embedded_property_list() {
    let fake = FakeProvider::new();
    let list = embedded_property_list(
        &fake,
        "Network Connection Accounts",
        vec!["CONTOSO\\svc-a".to_string(), "CONTOSO\\svc-b".to_string()],
    )
    .unwrap();

    assert_eq!(list.class(), "SMS_EmbeddedPropertyList");
    assert_eq!(
        list.string_value("PropertyListName").unwrap(),
        "Network Connection Accounts"
    );
    assert_eq!(list.string_array_value("Values").unwrap().len(), 2);
}
