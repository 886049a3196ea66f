//! Collection operations
//!
//! Creation, membership rules, refresh, and collection variables for
//! `SMS_Collection` and its settings objects.

use crate::error::OpsResult;
use crate::object::get_objects;
use chrono::Utc;
use cm_provider::{ManagedObject, MethodParams, Provider};
use cm_wql::{instance_path, FilterBuilder};
use serde::{Deserialize, Serialize};

/// RefreshType value for periodically evaluated collections (1 = Manual)
const REFRESH_TYPE_PERIODIC: i64 = 2;

/// Weekly refresh schedule for a collection.
///
/// Field ranges follow the `SMS_ST_RecurWeekly` class: `day` runs 1
/// (Sunday) through 7, `day_duration` 0-31 with 0 meaning the action
/// continues indefinitely, `for_number_of_weeks` 1-4, `hour_duration`
/// 0-23 and `minute_duration` 0-59 with 0 meaning no duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub day: u32,
    pub day_duration: u32,
    pub for_number_of_weeks: u32,
    pub hour_duration: u32,
    /// Schedule times are UTC when set, local time otherwise
    pub is_gmt: bool,
    pub minute_duration: u32,
}

impl WeeklySchedule {
    fn to_embedded(self, provider: &dyn Provider) -> OpsResult<ManagedObject> {
        let mut schedule = provider.create_embedded_instance("SMS_ST_RecurWeekly")?;
        schedule.set_integer("Day", i64::from(self.day));
        schedule.set_integer("DayDuration", i64::from(self.day_duration));
        schedule.set_integer("ForNumberOfWeeks", i64::from(self.for_number_of_weeks));
        schedule.set_integer("HourDuration", i64::from(self.hour_duration));
        schedule.set_boolean("IsGMT", self.is_gmt);
        schedule.set_integer("MinuteDuration", i64::from(self.minute_duration));
        schedule.set_datetime("StartTime", Utc::now());
        Ok(schedule)
    }
}

/// Create a collection owned by this site, limited to
/// `limiting_collection_id`.
pub fn create_collection(
    provider: &dyn Provider,
    name: &str,
    comment: &str,
    limiting_collection_id: &str,
) -> OpsResult<ManagedObject> {
    let mut collection = provider.create_instance("SMS_Collection")?;
    collection.set_string("Name", name);
    collection.set_string("Comment", comment);
    collection.set_boolean("OwnedByThisSite", true);
    collection.set_string("LimitToCollectionID", limiting_collection_id);

    // The provider only materializes key properties on save, so re-read
    // before handing the object back.
    provider.put(&mut collection)?;
    provider.refresh(&mut collection)?;
    Ok(collection)
}

/// Create a collection with a periodic weekly refresh schedule.
pub fn create_collection_with_schedule(
    provider: &dyn Provider,
    name: &str,
    comment: &str,
    schedule: WeeklySchedule,
    limiting_collection_id: &str,
) -> OpsResult<ManagedObject> {
    let mut collection = create_collection(provider, name, comment, limiting_collection_id)?;

    let recur_weekly = schedule.to_embedded(provider)?;
    let mut refresh_schedules = collection.array_items("RefreshSchedule")?;
    refresh_schedules.push(recur_weekly);
    collection.set_array_items("RefreshSchedule", refresh_schedules);
    collection.set_integer("RefreshType", REFRESH_TYPE_PERIODIC);

    provider.put(&mut collection)?;
    provider.refresh(&mut collection)?;
    Ok(collection)
}

/// Add a machine as a direct member of a collection.
///
/// No-op when a direct rule named after the machine already exists.
pub fn add_direct_member(
    provider: &dyn Provider,
    collection_id: &str,
    resource_id: u32,
) -> OpsResult<()> {
    let mut collection =
        provider.get_instance(&instance_path("SMS_Collection", "CollectionID", collection_id))?;
    provider.refresh(&mut collection)?;

    let system = provider.get_instance(&instance_path(
        "SMS_R_System",
        "ResourceID",
        &resource_id.to_string(),
    ))?;
    let machine_name = system.string_value("Name")?.to_string();

    let mut rules = collection.array_items("CollectionRules")?;
    let already_member = rules
        .iter()
        .any(|rule| rule.string_value("RuleName").is_ok_and(|name| name == machine_name));
    if already_member {
        return Ok(());
    }

    let mut rule = provider.create_embedded_instance("SMS_CollectionRuleDirect")?;
    rule.set_string("RuleName", machine_name);
    rule.set_string("ResourceClassName", "SMS_R_System");
    rule.set_integer("ResourceID", system.integer_value("ResourceID")?);

    rules.push(rule);
    collection.set_array_items("CollectionRules", rules);
    provider.put(&mut collection)?;
    Ok(())
}

/// Add a query-based membership rule to a collection.
///
/// No-op when a rule with the same name already exists.
/// `limit_to_collection_id` is applied only when non-blank.
pub fn add_query_rule(
    provider: &dyn Provider,
    collection_id: &str,
    rule_name: &str,
    wql_query: &str,
    limit_to_collection_id: &str,
) -> OpsResult<()> {
    let mut collection =
        provider.get_instance(&instance_path("SMS_Collection", "CollectionID", collection_id))?;
    provider.refresh(&mut collection)?;

    let mut rules = collection.array_items("CollectionRules")?;
    let exists = rules
        .iter()
        .any(|rule| rule.string_value("RuleName").is_ok_and(|name| name == rule_name));
    if exists {
        return Ok(());
    }

    let mut rule = provider.create_embedded_instance("SMS_CollectionRuleQuery")?;
    rule.set_string("RuleName", rule_name);
    rule.set_string("QueryExpression", wql_query);
    if !limit_to_collection_id.trim().is_empty() {
        rule.set_string("LimitToCollectionID", limit_to_collection_id);
    }

    rules.push(rule);
    collection.set_array_items("CollectionRules", rules);
    provider.put(&mut collection)?;
    Ok(())
}

/// Remove the membership rule with the given name, if present.
pub fn remove_member_rule(
    provider: &dyn Provider,
    collection_id: &str,
    rule_name: &str,
) -> OpsResult<()> {
    let mut collection =
        provider.get_instance(&instance_path("SMS_Collection", "CollectionID", collection_id))?;

    let mut rules = collection.array_items("CollectionRules")?;
    let position = rules
        .iter()
        .position(|rule| rule.string_value("RuleName").is_ok_and(|name| name == rule_name));

    if let Some(position) = position {
        rules.remove(position);
        collection.set_array_items("CollectionRules", rules);
        provider.put(&mut collection)?;
    }
    Ok(())
}

/// Ask the site to re-evaluate a collection's membership.
pub fn refresh_collection(provider: &dyn Provider, collection_id: &str) -> OpsResult<()> {
    let collection =
        provider.get_instance(&instance_path("SMS_Collection", "CollectionID", collection_id))?;
    provider.execute_object_method(&collection, "RequestRefresh", MethodParams::new())?;
    Ok(())
}

/// Query collections with a raw filter clause.
pub fn get_collections(
    provider: &dyn Provider,
    filter: &str,
) -> OpsResult<Vec<ManagedObject>> {
    get_objects(provider, "SMS_Collection", filter)
}

/// Full membership rows of a collection.
pub fn get_collection_members(
    provider: &dyn Provider,
    collection_id: &str,
) -> OpsResult<Vec<ManagedObject>> {
    let filter = FilterBuilder::new().eq("CollectionID", collection_id).build();
    get_objects(provider, "SMS_FullCollectionMembership", &filter)
}

/// Whether a named resource appears in a collection's membership.
pub fn collection_member_exists(
    provider: &dyn Provider,
    collection_id: &str,
    resource_name: &str,
) -> OpsResult<bool> {
    let filter = FilterBuilder::new()
        .eq("CollectionID", collection_id)
        .eq("Name", resource_name)
        .build();
    let members = get_objects(provider, "SMS_FullCollectionMembership", &filter)?;
    Ok(!members.is_empty())
}

/// Create (or append to) a collection's variable list.
///
/// The collection's settings object is created on first use; when several
/// settings rows match, the last one wins.
pub fn create_collection_variable(
    provider: &dyn Provider,
    name: &str,
    value: &str,
    mask: bool,
    collection_id: &str,
    precedence: i64,
) -> OpsResult<()> {
    let filter = FilterBuilder::new().eq("CollectionID", collection_id).build();
    let existing = get_objects(provider, "SMS_CollectionSettings", &filter)?.pop();

    let mut settings = match existing {
        Some(settings) => settings,
        None => {
            let mut settings = provider.create_instance("SMS_CollectionSettings")?;
            settings.set_string("CollectionID", collection_id);
            provider.put(&mut settings)?;
            provider.refresh(&mut settings)?;
            settings
        }
    };

    let mut variable = provider.create_embedded_instance("SMS_CollectionVariable")?;
    variable.set_string("Name", name);
    variable.set_string("Value", value);
    variable.set_boolean("IsMasked", mask);

    let mut variables = settings.array_items("CollectionVariables")?;
    variables.push(variable);
    settings.set_array_items("CollectionVariables", variables);
    settings.set_integer("CollectionVariablePrecedence", precedence);
    provider.put(&mut settings)?;
    Ok(())
}

#[cfg(test)]
#[path = "collection_test.rs"]
mod tests;
