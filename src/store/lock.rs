//! Per-period append serialization.
//!
//! The append path is read-count-then-write: two concurrent appends to
//! the same period would otherwise observe the same row count, assign
//! the same sequence number, and the last table write would clobber the
//! other row entirely. Appends to different periods touch different
//! files and may proceed in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

static LOCKS: OnceLock<Mutex<HashMap<String, Arc<Mutex<()>>>>> = OnceLock::new();

/// Return the lock guarding appends for the given period key.
pub fn period_lock(key: &str) -> Arc<Mutex<()>> {
    let registry = LOCKS.get_or_init(|| Mutex::new(HashMap::new()));

    let mut map = registry.lock().unwrap_or_else(|e| e.into_inner());
    map.entry(key.to_string())
        .or_insert_with(|| Arc::new(Mutex::new(())))
        .clone()
}
