use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("groove_haven_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// missing keys are the normal case on a first visit, so reads stay quiet and
// hand back the default instead of logging
pub fn try_local_storage<T>(key: &str) -> T
where
    T: Default,
    T: for<'a> Deserialize<'a>,
{
    let key = format!("groove_haven_{}", key);

    LocalStorage::get(key).unwrap_or_default()
}
