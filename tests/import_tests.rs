/* tests/import_tests.rs */

use attrmap::{Attribute, AttributeError, AttributeHolder, AttributeMap, AttributeValue, HolderKind};
use std::collections::HashMap;
use std::sync::Arc;

#[test]
fn test_imported_holder_is_a_copy() {
	let source = AttributeMap::new();
	let holder_a = source.set("x", 1).unwrap();
	holder_a.mark_persistable();

	let map = AttributeMap::new();
	map.set_all_attribute_holders([("x", Attribute::from(Arc::clone(&holder_a)))])
		.unwrap();

	holder_a.lock();

	let stored = map.get_holder("x").unwrap();
	assert!(!Arc::ptr_eq(&stored, &holder_a));
	assert!(!stored.is_locked());
	assert!(stored.is_persistable());
	assert_eq!(map.get_as_int("x").unwrap(), 1);
}

#[test]
fn test_imported_holder_keeps_flags() {
	let locked = AttributeHolder::new("v");
	locked.lock();

	let map = AttributeMap::new();
	map.set_all_attribute_holders([("k", Attribute::from(locked))])
		.unwrap();

	assert!(map.get_holder("k").unwrap().is_locked());
	map.set("k", "other").unwrap();
	assert_eq!(map.get_as_string("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_holder_import_bypasses_validation_and_lock() {
	let map = AttributeMap::new();
	map.set("k", "original").unwrap().lock();

	map.set_all_attribute_holders([
		("k", Attribute::from(AttributeHolder::new("forced"))),
		("not-a-name", Attribute::from(AttributeHolder::new(1))),
	])
	.unwrap();

	assert_eq!(map.get_as_string("k").unwrap().as_deref(), Some("forced"));
	assert_eq!(map.get_as_int("not-a-name").unwrap(), 1);
}

#[test]
fn test_null_entries_are_skipped() {
	let map = AttributeMap::new();
	map.set("keep", 1).unwrap();

	map.set_all_attribute_holders([
		("keep", Attribute::Value(AttributeValue::Null)),
		("fresh", Attribute::Value(AttributeValue::Null)),
	])
	.unwrap();

	assert_eq!(map.get_as_int("keep").unwrap(), 1);
	assert!(!map.has_attribute("fresh"));
}

#[test]
fn test_plain_values_are_validated() {
	let map = AttributeMap::new();
	let result = map.set_all_attribute_holders([
		("good", Attribute::value(1)),
		("bad-name", Attribute::value(2)),
	]);

	assert!(matches!(result, Err(AttributeError::InvalidName { .. })));
	assert!(map.has_attribute("good"));
	assert!(!map.has_attribute("bad-name"));
}

#[test]
fn test_composites_exclude_imported_basic_holders() {
	let map = AttributeMap::new();
	map.set("created", 1).unwrap();
	map.set_all([("plain", 2)]).unwrap();
	map.set_all_attribute_holders([("copied", Attribute::from(AttributeHolder::new(3)))])
		.unwrap();

	let mut keys: Vec<_> = map.find_composite_attributes().into_keys().collect();
	keys.sort();
	assert_eq!(keys, vec!["created".to_string(), "plain".to_string()]);
	assert_eq!(map.get_holder("copied").unwrap().kind(), HolderKind::Basic);
}

#[test]
fn test_from_values() {
	let mut values = HashMap::new();
	values.insert("a".to_string(), AttributeValue::from(1));
	values.insert("b".to_string(), AttributeValue::from("two"));
	values.insert("c".to_string(), AttributeValue::Null);

	let map = AttributeMap::try_from(values).unwrap();
	assert_eq!(map.len(), 2);
	assert_eq!(map.get_as_string("b").unwrap().as_deref(), Some("two"));

	let err = AttributeMap::from_values([("1x", 1)]).unwrap_err();
	assert_eq!(err.key(), "1x");
}

#[test]
fn test_builder_values() {
	let map = AttributeMap::builder()
		.value("host", "api")
		.values([("port", 8080), ("retries", 3)])
		.build()
		.unwrap();

	assert_eq!(map.get_as_int("port").unwrap(), 8080);
	assert_eq!(map.get_as_string("host").unwrap().as_deref(), Some("api"));
	assert_eq!(map.len(), 3);

	assert!(AttributeMap::builder().value("a b", 1).build().is_err());
}

#[test]
fn test_imported_composite_holder_stays_composite() {
	let source = AttributeMap::new();
	let created = source.set("origin", "svc").unwrap();

	let map = AttributeMap::new();
	map.set_all_attribute_holders([
		("origin", Attribute::from(Arc::clone(&created))),
		("built", Attribute::from(AttributeHolder::composite(7))),
	])
	.unwrap();

	let composites = map.find_composite_attributes();
	assert_eq!(composites.len(), 2);
	assert!(!Arc::ptr_eq(&composites["origin"], &created));
	assert_eq!(composites["origin"].kind(), HolderKind::Composite);
	assert_eq!(**composites["built"].value(), AttributeValue::Int(7));
}
