//! Whether the full guide is unlocked.
//!
//! The flag lives in local storage and is granted when the payment provider
//! sends the visitor back with `?payment=success`. Nothing confirms that
//! payment with the provider: anyone who types the return URL unlocks the
//! guide. A hardened setup would exchange a server-signed token instead.

use thiserror::Error;

use crate::location::{AddressBar, ReturnMarker};

/// Storage key of the persisted flag.
pub const ENTITLEMENT_KEY: &str = "isGuidePaid";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("local storage rejected the write: {0}")]
    Write(String),
}

/// Durable string storage scoped to this browser profile.
pub trait FlagStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct EntitlementStore<S> {
    storage: S,
    unlocked: bool,
}

impl<S: FlagStorage> EntitlementStore<S> {
    /// Reads the persisted flag. Anything other than a stored JSON `true`
    /// counts as locked.
    pub fn open(storage: S) -> Self {
        let unlocked = match storage.load(ENTITLEMENT_KEY) {
            Some(raw) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|err| {
                log::debug!("Ignoring malformed entitlement value {:?}: {}", raw, err);
                false
            }),
            None => false,
        };
        log::info!("Entitlement loaded: unlocked = {}", unlocked);
        Self { storage, unlocked }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Single mutation entry point. The in-memory flag is set even if the
    /// write fails, so the current visit stays unlocked.
    pub fn unlock(&mut self) {
        self.unlocked = true;
        let encoded = serde_json::Value::Bool(true).to_string();
        if let Err(err) = self.storage.save(ENTITLEMENT_KEY, &encoded) {
            log::warn!("Entitlement granted but not persisted: {}", err);
        }
    }

    /// One-shot check of the return marker, run once at startup. A success
    /// marker unlocks the guide, a cancel marker changes nothing; both are
    /// removed from the address bar so a refresh does not replay them.
    pub fn acknowledge_return(&mut self, address_bar: &impl AddressBar) -> Option<ReturnMarker> {
        let location = address_bar.location()?;
        let marker = location.return_marker()?;
        match marker {
            ReturnMarker::Success => {
                log::info!("Payment return marker received, unlocking the guide");
                self.unlock();
            }
            ReturnMarker::Cancel => log::info!("Payment was cancelled by the visitor"),
        }
        address_bar.replace_path(location.path());
        Some(marker)
    }

    #[cfg(test)]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// `window.localStorage`. When storage is blocked (private mode, disabled
/// cookies) reads come back empty and writes fail with `Unavailable`.
pub struct LocalStorage;

impl LocalStorage {
    fn handle() -> Option<web_sys::Storage> {
        gloo_utils::window().local_storage().ok().flatten()
    }
}

impl FlagStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::handle()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::handle()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{:?}", err)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::course::{Catalog, Module};
    use crate::gate::{module_access, ModuleAccess};
    use crate::location::PageLocation;

    /// Shared map standing in for local storage; clones see the same data,
    /// so dropping a store and opening a new one simulates a reload.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
        read_only: bool,
    }

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        fn read_only() -> Self {
            Self {
                read_only: true,
                ..Self::default()
            }
        }

        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl FlagStorage for MemoryStorage {
        fn load(&self, key: &str) -> Option<String> {
            self.get(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Unavailable);
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    pub(crate) struct FakeAddressBar {
        href: RefCell<String>,
        pub(crate) replaced: RefCell<Vec<String>>,
    }

    impl FakeAddressBar {
        pub(crate) fn at(href: &str) -> Self {
            Self {
                href: RefCell::new(href.to_string()),
                replaced: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn href(&self) -> String {
            self.href.borrow().clone()
        }
    }

    impl AddressBar for FakeAddressBar {
        fn location(&self) -> Option<PageLocation> {
            PageLocation::parse(&self.href.borrow()).ok()
        }

        fn replace_path(&self, path: &str) {
            let mut url = url::Url::parse(&self.href.borrow()).unwrap();
            url.set_query(None);
            url.set_fragment(None);
            url.set_path(path);
            *self.href.borrow_mut() = url.to_string();
            self.replaced.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn defaults_to_locked() {
        let _ = pretty_env_logger::try_init();
        let store = EntitlementStore::open(MemoryStorage::default());
        assert!(!store.is_unlocked());
    }

    #[test]
    fn malformed_values_read_as_locked() {
        for raw in ["", "yes", "1", "\"true\"", "{", "null", "TRUE"] {
            let store = EntitlementStore::open(MemoryStorage::with(ENTITLEMENT_KEY, raw));
            assert!(!store.is_unlocked(), "{:?} should not unlock", raw);
        }
        let store = EntitlementStore::open(MemoryStorage::with(ENTITLEMENT_KEY, "false"));
        assert!(!store.is_unlocked());
    }

    #[test]
    fn unlock_survives_reload() {
        let storage = MemoryStorage::default();
        let mut store = EntitlementStore::open(storage.clone());
        store.unlock();
        assert!(store.is_unlocked());
        assert_eq!(storage.get(ENTITLEMENT_KEY).as_deref(), Some("true"));
        drop(store);

        let reloaded = EntitlementStore::open(storage);
        assert!(reloaded.is_unlocked());
    }

    #[test]
    fn failed_write_still_unlocks_current_visit() {
        let _ = pretty_env_logger::try_init();
        let mut store = EntitlementStore::open(MemoryStorage::read_only());
        store.unlock();
        assert!(store.is_unlocked());

        let storage = store.into_storage();
        assert!(!EntitlementStore::open(storage).is_unlocked());
    }

    #[test]
    fn success_marker_unlocks_and_is_stripped() {
        let storage = MemoryStorage::default();
        let bar = FakeAddressBar::at("https://guia.example/pcb/?payment=success");
        let mut store = EntitlementStore::open(storage.clone());

        assert_eq!(store.acknowledge_return(&bar), Some(ReturnMarker::Success));
        assert!(store.is_unlocked());
        assert_eq!(bar.href(), "https://guia.example/pcb/");
        assert_eq!(*bar.replaced.borrow(), vec!["/pcb/".to_string()]);
        assert_eq!(storage.get(ENTITLEMENT_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn cancel_marker_is_stripped_without_unlocking() {
        let storage = MemoryStorage::default();
        let bar = FakeAddressBar::at("https://guia.example/?payment=cancel");
        let mut store = EntitlementStore::open(storage.clone());

        assert_eq!(store.acknowledge_return(&bar), Some(ReturnMarker::Cancel));
        assert!(!store.is_unlocked());
        assert_eq!(bar.href(), "https://guia.example/");
        assert_eq!(storage.get(ENTITLEMENT_KEY), None);
    }

    #[test]
    fn cancel_marker_keeps_an_existing_unlock() {
        let storage = MemoryStorage::with(ENTITLEMENT_KEY, "true");
        let bar = FakeAddressBar::at("https://guia.example/?payment=cancel");
        let mut store = EntitlementStore::open(storage);
        store.acknowledge_return(&bar);
        assert!(store.is_unlocked());
    }

    #[test]
    fn no_marker_leaves_address_bar_alone() {
        let bar = FakeAddressBar::at("https://guia.example/#module1");
        let mut store = EntitlementStore::open(MemoryStorage::default());
        assert_eq!(store.acknowledge_return(&bar), None);
        assert!(bar.replaced.borrow().is_empty());
        assert!(!store.is_unlocked());
    }

    #[test]
    fn second_module_unlocks_after_success_return_and_stays_unlocked() {
        let catalog = Catalog {
            modules: vec![
                Module {
                    id: "module1".into(),
                    title: "Uno".into(),
                    lessons: Vec::new(),
                },
                Module {
                    id: "module2".into(),
                    title: "Dos".into(),
                    lessons: Vec::new(),
                },
            ],
        };
        let access = |unlocked| -> Vec<ModuleAccess> {
            module_access(&catalog, unlocked).map(|(_, a)| a).collect()
        };
        let storage = MemoryStorage::default();

        let store = EntitlementStore::open(storage.clone());
        assert_eq!(access(store.is_unlocked()), vec![ModuleAccess::Open, ModuleAccess::Locked]);
        drop(store);

        let bar = FakeAddressBar::at("https://guia.example/?payment=success");
        let mut store = EntitlementStore::open(storage.clone());
        store.acknowledge_return(&bar);
        assert_eq!(access(store.is_unlocked()), vec![ModuleAccess::Open, ModuleAccess::Open]);
        drop(store);

        // fresh load, marker already gone from the URL
        let bar = FakeAddressBar::at(&bar.href());
        let mut store = EntitlementStore::open(storage);
        assert_eq!(store.acknowledge_return(&bar), None);
        assert_eq!(access(store.is_unlocked()), vec![ModuleAccess::Open, ModuleAccess::Open]);
    }
}
