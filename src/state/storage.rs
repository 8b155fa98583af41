// localStorage helpers. Every failure degrades to "nothing stored".

use web_sys::Storage;
use yew_garden::{GardenError, GardenSession};

pub const KEY_SAVE: &str = "garden_save";
pub const KEY_CONFIG: &str = "garden_config";
pub const KEY_SOUND: &str = "garden_setting_sound";
pub const KEY_VOICE: &str = "garden_setting_voice";
pub const KEY_INTRO_SEEN: &str = "garden_intro_seen";

fn store() -> Result<Storage, GardenError> {
    web_sys::window()
        .ok_or_else(|| GardenError::Storage("no window".into()))?
        .local_storage()
        .map_err(|_| GardenError::Storage("access denied".into()))?
        .ok_or_else(|| GardenError::Storage("localStorage missing".into()))
}

pub fn load(key: &str) -> Option<String> {
    store().ok()?.get_item(key).ok().flatten()
}

pub fn save(key: &str, value: &str) {
    let res = store().and_then(|s| {
        s.set_item(key, value)
            .map_err(|_| GardenError::Storage(format!("could not write {key}")))
    });
    if let Err(e) = res {
        log::warn!("{e}");
    }
}

pub fn remove(key: &str) {
    if let Ok(s) = store() {
        let _ = s.remove_item(key);
    }
}

pub fn load_flag(key: &str, default: bool) -> bool {
    match load(key) {
        Some(v) => v == "1" || v == "true",
        None => default,
    }
}

pub fn save_flag(key: &str, on: bool) {
    save(key, if on { "1" } else { "0" });
}

pub fn save_garden(session: &GardenSession) {
    match session.serialize().to_json() {
        Ok(json) => save(KEY_SAVE, &json),
        Err(e) => log::warn!("garden not saved: {e}"),
    }
}

/// Wipes the save and every setting, including the intro flag.
pub fn wipe_all() {
    for key in [KEY_SAVE, KEY_CONFIG, KEY_SOUND, KEY_VOICE, KEY_INTRO_SEEN] {
        remove(key);
    }
}
