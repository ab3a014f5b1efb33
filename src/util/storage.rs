//! Tab-scoped storage for values that must survive the login round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard writes the return path (and the role it logged in with) before
//! leaving for the hub; the callback consumes them once the hub sends the
//! browser back. `sessionStorage` is per tab, so parallel tabs never collide.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Path + query of the page that triggered the login redirect.
pub const RETURN_URL_KEY: &str = "return_url";

/// Role used for the last role-scoped login, replayed by "retry login".
pub const LOGIN_ROLE_KEY: &str = "login_role";

/// Minimal key/value store used by the guard and the callback.
pub trait TabStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Read and delete in one step, so a value is consumed at most once.
    fn take(&self, key: &str) -> Option<String> {
        let value = self.get(key);
        if value.is_some() {
            self.remove(key);
        }
        value
    }
}

/// `window.sessionStorage`. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTabStorage;

#[cfg(feature = "csr")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl TabStorage for BrowserTabStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = session_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("sessionStorage rejected write for {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = session_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("sessionStorage rejected removal of {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl TabStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
