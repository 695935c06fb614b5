/* tests/concurrency_tests.rs */

use attrmap::AttributeMap;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_keys() {
	let map = Arc::new(AttributeMap::new());

	let mut tasks = Vec::new();
	for worker in 0..8 {
		let map = Arc::clone(&map);
		tasks.push(tokio::spawn(async move {
			for i in 0..50 {
				map.set(&format!("k_{worker}_{i}"), i).unwrap();
			}
		}));
	}
	for task in tasks {
		task.await.unwrap();
	}

	assert_eq!(map.len(), 8 * 50);
	assert_eq!(map.get_as_int("k_7_49").unwrap(), 49);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers_keep_persistable_flag() {
	let map = Arc::new(AttributeMap::new());
	map.set("shared", 0).unwrap().mark_persistable();

	let mut tasks = Vec::new();
	for worker in 0..4 {
		let map = Arc::clone(&map);
		tasks.push(tokio::spawn(async move {
			for i in 0..100 {
				map.set("shared", worker * 1000 + i).unwrap();
			}
		}));
	}
	for task in tasks {
		task.await.unwrap();
	}

	let holder = map.get_holder("shared").unwrap();
	assert!(holder.is_persistable());
	assert_eq!(map.get_as_int("shared").unwrap() % 1000, 99);
}

#[test]
fn test_lock_survives_concurrent_writers() {
	let map = AttributeMap::new();
	map.set("frozen", "initial").unwrap().lock();

	std::thread::scope(|scope| {
		for _ in 0..4 {
			scope.spawn(|| {
				for i in 0..100 {
					map.set("frozen", i).unwrap();
				}
			});
		}
	});

	assert_eq!(map.get_as_string("frozen").unwrap().as_deref(), Some("initial"));
}
