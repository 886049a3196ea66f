use super::*;
use cm_provider::{FakeProvider, ManagedObject, ProviderError};

#[test]
fn test_get_objects_without_filter() {
    let fake = FakeProvider::new();
    get_objects(&fake, "SMS_Collection", "").unwrap();
    assert_eq!(fake.queries(), vec!["SELECT * FROM SMS_Collection".to_string()]);
}

#[test]
fn test_get_objects_with_filter() {
    let fake = FakeProvider::new();
    get_objects(&fake, "SMS_Package", "PackageID='ABC00001'").unwrap();
    assert_eq!(
        fake.queries(),
        vec!["SELECT * FROM SMS_Package WHERE PackageID='ABC00001'".to_string()]
    );
}

#[test]
fn test_get_objects_returns_provider_results_verbatim() {
    let fake = FakeProvider::new();
    let mut package = ManagedObject::new("SMS_Package");
    package.set_string("PackageID", "ABC00001");
    fake.seed_object("SMS_Package.PackageID='ABC00001'", package);

    let results = get_objects(&fake, "SMS_Package", "").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].string_value("PackageID").unwrap(), "ABC00001");
}

#[test]
fn test_provider_failure_propagates_unchanged() {
    let fake = FakeProvider::new();
    fake.fail_next_query(ProviderError::QueryError("Generic Failure".to_string()));

    let err = get_objects(&fake, "SMS_Package", "").unwrap_err();
    match err {
        crate::error::OpsError::Provider(ProviderError::QueryError(message)) => {
            assert_eq!(message, "Generic Failure");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_remove_objects_deletes_every_match() {
    let fake = FakeProvider::new();
    for n in 0..3 {
        let mut dp = ManagedObject::new("SMS_DistributionPoint");
        dp.set_string("PackageID", "ABC00001");
        fake.seed_object(&format!("SMS_DistributionPoint/{n}"), dp);
    }

    let deleted = remove_objects(&fake, "SMS_DistributionPoint", "PackageID='ABC00001'").unwrap();
    assert_eq!(deleted, 3);
    assert!(fake.stored_objects().is_empty());
}
