//! Core simulation model for the space station clicker.
//! Defines the upgrade catalog, the mutable game state, and the reducer
//! that serializes clicks, interval accrual, and purchases.

use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;

/// Price multiplier applied after each purchase of the same upgrade.
pub const COST_GROWTH: f64 = 1.15;

/// Automatic generation runs on a 100 ms interval; each tick accrues
/// one tenth of the per-second rate.
pub const TICK_INTERVAL_MS: i32 = 100;
pub const TICK_FRACTION: f64 = 0.1;

/// Cadence of the background save flush.
pub const SAVE_INTERVAL_MS: i32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpgradeId {
    ReactorBoost,
    NanoBot,
    SolarPanel,
    FusionCore,
    QuantumGen,
}

impl UpgradeId {
    /// Stable string key used in the persisted record.
    pub fn key(self) -> &'static str {
        match self {
            UpgradeId::ReactorBoost => "click",
            UpgradeId::NanoBot => "auto1",
            UpgradeId::SolarPanel => "auto2",
            UpgradeId::FusionCore => "auto3",
            UpgradeId::QuantumGen => "auto4",
        }
    }

    pub fn from_key(key: &str) -> Option<UpgradeId> {
        UPGRADE_DEFS
            .iter()
            .find(|def| def.id.key() == key)
            .map(|def| def.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeKind {
    /// Adds `power` to the yield of each manual tap.
    PerClick,
    /// Adds `power` to the automatic per-second yield.
    PerSecond,
}

pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: &'static str,
    pub icon: &'static str,
    pub base_cost: f64,
    pub power: f64,
    pub kind: UpgradeKind,
}

/// Full purchasable catalog. Definition order is display order.
pub static UPGRADE_DEFS: &[UpgradeDef] = &[
    UpgradeDef {
        id: UpgradeId::ReactorBoost,
        name: "REACTOR BOOST",
        icon: "⚡",
        base_cost: 10.0,
        power: 1.0,
        kind: UpgradeKind::PerClick,
    },
    UpgradeDef {
        id: UpgradeId::NanoBot,
        name: "NANO-BOT",
        icon: "🤖",
        base_cost: 50.0,
        power: 1.0,
        kind: UpgradeKind::PerSecond,
    },
    UpgradeDef {
        id: UpgradeId::SolarPanel,
        name: "SOLAR PANEL",
        icon: "☀️",
        base_cost: 200.0,
        power: 5.0,
        kind: UpgradeKind::PerSecond,
    },
    UpgradeDef {
        id: UpgradeId::FusionCore,
        name: "FUSION CORE",
        icon: "⚛️",
        base_cost: 1000.0,
        power: 25.0,
        kind: UpgradeKind::PerSecond,
    },
    UpgradeDef {
        id: UpgradeId::QuantumGen,
        name: "QUANTUM GEN",
        icon: "✨",
        base_cost: 5000.0,
        power: 100.0,
        kind: UpgradeKind::PerSecond,
    },
];

/// Live purchase state for one catalog entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpgradeState {
    /// Current price. Grows by [`COST_GROWTH`] per purchase, never drops.
    pub cost: f64,
    pub owned: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("unknown upgrade id")]
    UnknownUpgrade,
    #[error("not enough energy")]
    InsufficientEnergy,
}

/// Outcome of a successful purchase, for presentation feedback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PurchaseReceipt {
    pub id: UpgradeId,
    pub owned: u32,
    pub cost: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Spendable energy. Never negative after a valid transition.
    pub energy: f64,
    /// Lifetime energy earned. Spending does not reduce it.
    pub total_energy: f64,
    /// Yield of one manual tap. At least 1.
    pub energy_per_click: f64,
    /// Automatic yield per second. 0 until a generator is bought.
    pub energy_per_second: f64,
    pub clicks: u64,
    /// One entry per catalog def, same order as [`UPGRADE_DEFS`].
    pub upgrades: Vec<UpgradeState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            energy: 0.0,
            total_energy: 0.0,
            energy_per_click: 1.0,
            energy_per_second: 0.0,
            clicks: 0,
            upgrades: UPGRADE_DEFS
                .iter()
                .map(|def| UpgradeState {
                    cost: def.base_cost,
                    owned: 0,
                })
                .collect(),
        }
    }

    pub fn upgrade(&self, id: UpgradeId) -> &UpgradeState {
        &self.upgrades[id as usize]
    }

    pub fn can_afford(&self, id: UpgradeId) -> bool {
        self.energy >= self.upgrade(id).cost
    }

    /// Catalog defs joined with their live purchase state, in display order.
    pub fn catalog(&self) -> impl Iterator<Item = (&'static UpgradeDef, &UpgradeState)> {
        UPGRADE_DEFS.iter().zip(self.upgrades.iter())
    }

    pub fn upgrades_owned(&self) -> u32 {
        self.upgrades.iter().map(|u| u.owned).sum()
    }

    /// Apply one manual reactor tap. Returns the energy gained.
    pub fn click(&mut self) -> f64 {
        let gained = self.energy_per_click;
        self.energy += gained;
        self.total_energy += gained;
        self.clicks += 1;
        gained
    }

    /// Advance automatic generation by `fraction` of one second of the
    /// per-second rate. No-op while no generator is owned.
    pub fn accrue(&mut self, fraction: f64) {
        if self.energy_per_second <= 0.0 {
            return;
        }
        let gained = self.energy_per_second * fraction;
        self.energy += gained;
        self.total_energy += gained;
    }

    /// Validate and apply a purchase. On failure nothing changes; on
    /// success the cost is deducted, the price curve advances, and the
    /// matching yield rate grows by the def's power.
    pub fn purchase(&mut self, id: UpgradeId) -> Result<PurchaseReceipt, PurchaseError> {
        let def = &UPGRADE_DEFS[id as usize];
        let cost = self.upgrades[id as usize].cost;
        if self.energy < cost {
            return Err(PurchaseError::InsufficientEnergy);
        }
        self.energy -= cost;
        let slot = &mut self.upgrades[id as usize];
        slot.owned += 1;
        slot.cost = (cost * COST_GROWTH).floor();
        let receipt = PurchaseReceipt {
            id,
            owned: slot.owned,
            cost: slot.cost,
        };
        match def.kind {
            UpgradeKind::PerClick => self.energy_per_click += def.power,
            UpgradeKind::PerSecond => self.energy_per_second += def.power,
        }
        Ok(receipt)
    }

    /// Purchase entry point for callers holding a persisted string id.
    pub fn purchase_by_key(&mut self, key: &str) -> Result<PurchaseReceipt, PurchaseError> {
        let id = UpgradeId::from_key(key).ok_or(PurchaseError::UnknownUpgrade)?;
        self.purchase(id)
    }
}

// ---------------- Reducer & Actions -----------------

#[derive(Clone, Copy, Debug)]
pub enum GameAction {
    Click,
    Tick { fraction: f64 },
    Buy { id: UpgradeId },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut next = (*self).clone();
        match action {
            Click => {
                next.click();
            }
            Tick { fraction } => {
                // Skip the re-render entirely while nothing generates.
                if next.energy_per_second <= 0.0 {
                    return self;
                }
                next.accrue(fraction);
            }
            Buy { id } => {
                if next.purchase(id).is_err() {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn three_clicks_accumulate() {
        let mut state = GameState::new();
        state.click();
        state.click();
        state.click();
        assert_close(state.energy, 3.0);
        assert_close(state.total_energy, 3.0);
        assert_eq!(state.clicks, 3);
    }

    #[test]
    fn click_returns_amount_gained() {
        let mut state = GameState::new();
        state.energy_per_click = 4.0;
        assert_close(state.click(), 4.0);
        assert_close(state.energy, 4.0);
    }

    #[test]
    fn accrue_is_a_noop_without_generators() {
        let mut state = GameState::new();
        state.accrue(0.1);
        assert_close(state.energy, 0.0);
        assert_close(state.total_energy, 0.0);
    }

    #[test]
    fn accrue_is_linear_in_the_fraction() {
        let mut split = GameState::new();
        split.energy_per_second = 7.0;
        let mut whole = split.clone();
        split.accrue(0.1);
        split.accrue(0.1);
        whole.accrue(0.2);
        assert_close(split.energy, whole.energy);
        assert_close(split.total_energy, whole.total_energy);
    }

    #[test]
    fn accrue_does_not_touch_clicks() {
        let mut state = GameState::new();
        state.energy_per_second = 3.0;
        state.accrue(0.1);
        assert_eq!(state.clicks, 0);
        assert_close(state.energy, 0.3);
    }

    #[test]
    fn purchase_follows_the_price_curve() {
        let mut state = GameState::new();
        state.energy = 10.0;
        let receipt = state.purchase(UpgradeId::ReactorBoost).unwrap();
        assert_close(state.energy, 0.0);
        assert_eq!(receipt.owned, 1);
        assert_close(receipt.cost, 11.0); // floor(10 * 1.15)
        assert_eq!(state.upgrade(UpgradeId::ReactorBoost).owned, 1);
        assert_close(state.upgrade(UpgradeId::ReactorBoost).cost, 11.0);
        assert_close(state.energy_per_click, 2.0);
    }

    #[test]
    fn purchase_with_insufficient_energy_changes_nothing() {
        let mut state = GameState::new();
        state.energy = 5.0;
        let before = state.clone();
        let err = state.purchase(UpgradeId::ReactorBoost).unwrap_err();
        assert_eq!(err, PurchaseError::InsufficientEnergy);
        assert_eq!(state, before);
    }

    #[test]
    fn purchase_spends_without_earning() {
        let mut state = GameState::new();
        state.energy = 60.0;
        state.total_energy = 60.0;
        state.purchase(UpgradeId::NanoBot).unwrap();
        assert_close(state.total_energy, 60.0);
        assert_close(state.energy, 10.0);
    }

    #[test]
    fn generator_purchase_raises_the_auto_rate() {
        let mut state = GameState::new();
        state.energy = 50.0;
        state.purchase(UpgradeId::NanoBot).unwrap();
        assert_close(state.energy_per_second, 1.0);
        assert_close(state.energy_per_click, 1.0);
    }

    #[test]
    fn cost_never_decreases_over_repeated_purchases() {
        let mut state = GameState::new();
        state.energy = 1e12;
        let mut prev = state.upgrade(UpgradeId::SolarPanel).cost;
        for _ in 0..20 {
            let receipt = state.purchase(UpgradeId::SolarPanel).unwrap();
            assert!(receipt.cost >= prev);
            prev = receipt.cost;
        }
        assert!(state.energy >= 0.0);
    }

    #[test]
    fn purchase_by_key_rejects_unknown_ids() {
        let mut state = GameState::new();
        state.energy = 1000.0;
        let err = state.purchase_by_key("warp-drive").unwrap_err();
        assert_eq!(err, PurchaseError::UnknownUpgrade);
        state.purchase_by_key("click").unwrap();
        assert_eq!(state.upgrade(UpgradeId::ReactorBoost).owned, 1);
    }

    #[test]
    fn upgrade_keys_round_trip() {
        for def in UPGRADE_DEFS {
            assert_eq!(UpgradeId::from_key(def.id.key()), Some(def.id));
        }
        assert_eq!(UpgradeId::from_key(""), None);
    }

    #[test]
    fn energy_stays_non_negative_through_mixed_play() {
        let mut state = GameState::new();
        for _ in 0..10 {
            state.click();
        }
        state.purchase(UpgradeId::ReactorBoost).unwrap();
        state.accrue(0.1);
        for _ in 0..25 {
            state.click();
        }
        state.purchase(UpgradeId::NanoBot).unwrap();
        state.accrue(0.1);
        assert!(state.energy >= 0.0);
        assert!(state.total_energy >= state.energy);
    }

    #[test]
    fn idle_tick_returns_the_same_state_handle() {
        let state = Rc::new(GameState::new());
        let out = state.clone().reduce(GameAction::Tick { fraction: 0.1 });
        assert!(Rc::ptr_eq(&state, &out));
    }

    #[test]
    fn failed_buy_returns_the_same_state_handle() {
        let state = Rc::new(GameState::new());
        let out = state.clone().reduce(GameAction::Buy {
            id: UpgradeId::QuantumGen,
        });
        assert!(Rc::ptr_eq(&state, &out));
    }

    #[test]
    fn reducer_click_matches_the_direct_call() {
        let state = Rc::new(GameState::new());
        let out = state.reduce(GameAction::Click);
        assert_close(out.energy, 1.0);
        assert_eq!(out.clicks, 1);
    }
}
