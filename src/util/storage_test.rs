use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("token"), None);
    storage.set("token", "T1");
    assert_eq!(storage.get("token").as_deref(), Some("T1"));
    storage.remove("token");
    assert_eq!(storage.get("token"), None);
}

#[test]
fn memory_storage_clones_share_items() {
    let storage = MemoryStorage::with_item("token", "T1");
    let view = storage.clone();
    storage.set("token", "T2");
    assert_eq!(view.get("token").as_deref(), Some("T2"));
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("token");
    assert_eq!(storage.get("token"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_without_browser() {
    let storage = BrowserStorage;
    storage.set("token", "T1");
    assert_eq!(storage.get("token"), None);
}
