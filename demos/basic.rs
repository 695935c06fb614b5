/* demos/basic.rs */

use attrmap::{Attribute, AttributeMap, AttributeValue};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 1. Collect attributes for an event
	let attributes = AttributeMap::builder()
		.value("service", "checkout")
		.value("latency_ms", "183")
		.build()?;

	// 2. Mark what may leave the process, lock what must not change
	attributes.set("status", 200)?.mark_persistable();
	attributes.set("trace_id", "3f9a")?.lock().mark_persistable();
	attributes.set("trace_id", "overwritten")?; // ignored, the holder is locked

	// 3. Read back with coercion
	let latency = attributes.get_as_long("latency_ms")?;
	let retries = attributes.get_as_int_or("retries", 0)?;
	println!("latency={latency}ms retries={retries}");

	// 4. Merge attributes from another event
	let parent = AttributeMap::new();
	parent.set("region", "eu-west")?.mark_persistable();
	attributes.set_all_attribute_holders(
		parent
			.get_all_attribute_holders()
			.into_iter()
			.map(|(key, holder)| (key, Attribute::from(holder))),
	)?;
	attributes.set_all([("tags", AttributeValue::array(["a", "b"]))])?;

	println!("all: {attributes}");
	for (key, value) in attributes.get_all_serializable() {
		println!("export {key}={value}");
	}

	Ok(())
}
