use super::*;

#[test]
fn test_select_all_without_filter() {
    assert_eq!(
        select_all("SMS_Collection", ""),
        "SELECT * FROM SMS_Collection"
    );
}

#[test]
fn test_select_all_with_filter() {
    assert_eq!(
        select_all("SMS_Package", "PackageID='ABC00001'"),
        "SELECT * FROM SMS_Package WHERE PackageID='ABC00001'"
    );
}

#[test]
fn test_select_all_does_not_inspect_the_filter() {
    // Malformed filters are the provider's problem at execution time.
    assert_eq!(
        select_all("SMS_Package", "WHERE WHERE"),
        "SELECT * FROM SMS_Package WHERE WHERE WHERE"
    );
}

#[test]
fn test_instance_path() {
    assert_eq!(
        instance_path("SMS_Collection", "CollectionID", "XYZ00012"),
        "SMS_Collection.CollectionID='XYZ00012'"
    );
}

#[test]
fn test_instance_path_quotes_numeric_keys() {
    assert_eq!(
        instance_path("SMS_R_System", "ResourceID", "16777220"),
        "SMS_R_System.ResourceID='16777220'"
    );
}
