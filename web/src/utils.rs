use colheita_core as game;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;

/// Local storage key a value is persisted under.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

/// A persisted blob that can be rebuilt from whatever string was stored, repairing what it can.
pub(crate) trait StoredSnapshot: StorageKey + Serialize + Default {
    fn parse(raw: &str) -> Self;
}

impl StorageKey for game::PlayerState {
    const KEY: &'static str = "cfState";
}

impl StoredSnapshot for game::PlayerState {
    fn parse(raw: &str) -> Self {
        game::PlayerState::from_snapshot_str(raw)
    }
}

impl StorageKey for game::Farm {
    const KEY: &'static str = "cfFarm";
}

impl StoredSnapshot for game::Farm {
    fn parse(raw: &str) -> Self {
        game::Farm::from_snapshot_str(raw)
    }
}

pub(crate) trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
}

impl<T: StoredSnapshot> LocalOrDefault for T {
    fn local_or_default() -> Self {
        match LocalStorage::raw().get_item(T::KEY) {
            Ok(Some(raw)) => T::parse(&raw),
            Ok(None) => {
                log::debug!("nothing saved under {}, starting fresh", T::KEY);
                T::default()
            }
            Err(err) => {
                log::error!("Could not read {} from local storage: {:?}", T::KEY, err);
                T::default()
            }
        }
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for T {
    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("Could not save {} to local storage: {:?}", T::KEY, err);
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_stay_compatible_with_prototype_saves() {
        assert_eq!(<game::PlayerState as StorageKey>::KEY, "cfState");
        assert_eq!(<game::Farm as StorageKey>::KEY, "cfFarm");
    }
}
