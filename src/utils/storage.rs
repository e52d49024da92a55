use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    let json = serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Failed to write to localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Plain-string variants for values that are not JSON (the JWT).
pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Failed to write to localStorage".to_string())?;
    Ok(())
}

pub fn load_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn json_values_round_trip() {
        let key = "storageTestEntry";
        save_to_storage(key, &vec![1u32, 2, 3]).expect("save");
        let loaded: Option<Vec<u32>> = load_from_storage(key);
        assert_eq!(loaded, Some(vec![1, 2, 3]));
        remove_from_storage(key);
        let gone: Option<Vec<u32>> = load_from_storage(key);
        assert_eq!(gone, None);
    }

    #[wasm_bindgen_test]
    fn corrupt_entries_read_as_none() {
        let key = "storageTestCorrupt";
        save_raw(key, "{not json").expect("save raw");
        let loaded: Option<Vec<u32>> = load_from_storage(key);
        assert_eq!(loaded, None);
        remove_from_storage(key);
    }
}
