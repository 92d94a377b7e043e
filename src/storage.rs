//! Save/load of the game state through an injected key-value store.
//! The persisted record uses dedicated serde structs so the on-disk shape
//! stays decoupled from the live model. Store trouble never propagates
//! past this module: saves log and drop the error, loads fall back to
//! "no saved game".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{GameState, UPGRADE_DEFS, UpgradeId, UpgradeState};
use crate::util::clog;

/// Single key the whole game state lives under.
pub const SAVE_KEY: &str = "spaceStationGame";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal durable key-value capability the adapter runs against.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `localStorage`-backed store used by the running game.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}

// ---------------- Persisted record -----------------

#[derive(Serialize, Deserialize)]
struct SavedUpgrade {
    id: String,
    cost: f64,
    owned: u32,
}

/// On-disk snapshot. Every field is required; a record that cannot be
/// decoded in full is treated as absent rather than partially applied.
#[derive(Serialize, Deserialize)]
struct SavedGame {
    energy: f64,
    total_energy: f64,
    energy_per_click: f64,
    energy_per_second: f64,
    clicks: u64,
    upgrades: Vec<SavedUpgrade>,
}

impl SavedGame {
    fn from_state(state: &GameState) -> Self {
        Self {
            energy: state.energy,
            total_energy: state.total_energy,
            energy_per_click: state.energy_per_click,
            energy_per_second: state.energy_per_second,
            clicks: state.clicks,
            upgrades: UPGRADE_DEFS
                .iter()
                .zip(state.upgrades.iter())
                .map(|(def, up)| SavedUpgrade {
                    id: def.id.key().to_string(),
                    cost: up.cost,
                    owned: up.owned,
                })
                .collect(),
        }
    }

    /// Rebuild a live state. `None` whenever the record would not form a
    /// fully consistent state: bad numbers, unknown ids, duplicate ids,
    /// or a catalog entry with no saved counterpart.
    fn into_state(self) -> Option<GameState> {
        // NaN fails every comparison below, so it is rejected too.
        if !(self.energy >= 0.0
            && self.total_energy >= 0.0
            && self.energy_per_click >= 1.0
            && self.energy_per_second >= 0.0)
        {
            return None;
        }
        let mut slots: Vec<Option<UpgradeState>> = vec![None; UPGRADE_DEFS.len()];
        for entry in &self.upgrades {
            let id = UpgradeId::from_key(&entry.id)?;
            if !entry.cost.is_finite() || entry.cost < 0.0 {
                return None;
            }
            let slot = &mut slots[id as usize];
            if slot.is_some() {
                return None;
            }
            *slot = Some(UpgradeState {
                cost: entry.cost,
                owned: entry.owned,
            });
        }
        let upgrades = slots.into_iter().collect::<Option<Vec<_>>>()?;
        Some(GameState {
            energy: self.energy,
            total_energy: self.total_energy,
            energy_per_click: self.energy_per_click,
            energy_per_second: self.energy_per_second,
            clicks: self.clicks,
            upgrades,
        })
    }
}

// ---------------- Adapter -----------------

pub struct SaveSlot<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SaveSlot<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Flush the current state. Store failures are logged and dropped;
    /// gameplay never halts on storage trouble.
    pub fn save(&self, state: &GameState) {
        let record = SavedGame::from_state(state);
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                clog(&format!("save: serialize failed: {e}"));
                return;
            }
        };
        if let Err(e) = self.store.write(SAVE_KEY, &json) {
            clog(&format!("save: {e}"));
        }
    }

    /// Hydrate a previously saved state. Any read or decode problem
    /// yields `None` and the caller starts a fresh game.
    pub fn load(&self) -> Option<GameState> {
        let raw = match self.store.read(SAVE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                clog(&format!("load: {e}"));
                return None;
            }
        };
        let record: SavedGame = serde_json::from_str(&raw).ok()?;
        record.into_state()
    }
}
