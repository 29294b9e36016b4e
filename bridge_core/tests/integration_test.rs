use bridge_core::*;
use std::cell::RefCell;
use std::rc::Rc;

fn key(name: &str) -> StorageKey {
    StorageKey::new(name).unwrap()
}

#[test]
fn test_score_scenario() {
    let mut storage = StorageFacade::new(MemoryStore::new());

    storage.write_value(&key("score"), "42").unwrap();
    assert_eq!(storage.read_value(&key("score")), Ok("42".to_string()));

    assert_eq!(storage.read_value(&key("unseen-key")), Err(Absent));

    storage.write_value(&key("score"), "43").unwrap();
    assert_eq!(storage.read_value(&key("score")), Ok("43".to_string()));
}

#[test]
fn test_values_survive_new_session() {
    let mut storage = StorageFacade::new(MemoryStore::new());
    storage.write_value(&key("theme"), "dark").unwrap();

    // A later session sees the same host store through a fresh facade
    let host = storage.into_host();
    let storage = StorageFacade::new(host);
    assert_eq!(storage.read_value(&key("theme")), Ok("dark".to_string()));
}

#[test]
fn test_cleared_store_reads_absent() {
    let mut storage = StorageFacade::new(MemoryStore::new());
    storage.write_value(&key("score"), "42").unwrap();

    let mut host = storage.into_host();
    host.clear();
    let storage = StorageFacade::new(host);
    assert_eq!(storage.read_value(&key("score")), Err(Absent));
}

#[test]
fn test_round_trip_many_values() {
    let mut storage = StorageFacade::new(MemoryStore::new());
    let values = ["", "0", "hello world", "ünïcødé", "{\"a\":1}", "line\nbreak"];

    for (i, value) in values.iter().enumerate() {
        let k = key(&format!("slot-{}", i));
        storage.write_value(&k, value).unwrap();
        assert_eq!(storage.read_value(&k), Ok(value.to_string()));
    }
}

#[test]
fn test_keyboard_and_storage_together() {
    // Application persists the last key it saw
    let storage = Rc::new(RefCell::new(StorageFacade::new(MemoryStore::new())));
    let bridge = KeyboardBridge::new(&Config::new());

    let sink = storage.clone();
    bridge.register(move |k: &KeyIdentifier| {
        sink.borrow_mut()
            .write_value(&key("last-key"), k.as_str())
            .unwrap();
    });

    for name in ["ArrowLeft", "a", "Enter"] {
        assert!(bridge.notify(&KeyIdentifier::from(name), false));
    }

    assert_eq!(
        storage.borrow().read_value(&key("last-key")),
        Ok("Enter".to_string())
    );
}

#[test]
fn test_switching_handlers() {
    let bridge = KeyboardBridge::default();
    let first = Rc::new(RefCell::new(0));
    let second = Rc::new(RefCell::new(0));

    let c1 = first.clone();
    bridge.register(move |_k: &KeyIdentifier| *c1.borrow_mut() += 1);
    bridge.notify(&KeyIdentifier::from("a"), false);

    let c2 = second.clone();
    bridge.register(move |_k: &KeyIdentifier| *c2.borrow_mut() += 1);
    for _ in 0..3 {
        bridge.notify(&KeyIdentifier::from("a"), false);
    }

    assert_eq!(*first.borrow(), 1);
    assert_eq!(*second.borrow(), 3);
}

#[test]
fn test_events_before_registration_are_dropped() {
    let bridge = KeyboardBridge::default();
    assert!(!bridge.notify(&KeyIdentifier::from("Enter"), false));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    bridge.register(move |k: &KeyIdentifier| sink.borrow_mut().push(k.clone()));
    assert!(seen.borrow().is_empty(), "No replay of earlier events");

    bridge.notify(&KeyIdentifier::from("Tab"), false);
    assert_eq!(*seen.borrow(), vec![KeyIdentifier::from("Tab")]);
}
