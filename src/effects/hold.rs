use crate::effects::kinds::{AppliedEffect, HoldEffectKind};
use crate::effects::scheduler::{DeferredTask, GameTick, TickScheduler};
use crate::items::identity::IdentityResolver;
use crate::items::stack::ItemStack;
use crate::weapons::index::WeaponIndex;
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

/// Stable player identifier assigned by the host. Survives nothing past a
/// disconnect; state is keyed by it rather than any host object handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

/// Input events that can change what a player holds. Most need one tick
/// for the host's own inventory mutation to settle before hands are
/// re-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldTrigger {
    Join,
    HandSwap,
    SlotChange,
    InventoryClick,
    InventoryDrag,
    Drop,
    Pickup,
}

impl HoldTrigger {
    pub fn delay_ticks(self) -> u64 {
        match self {
            HoldTrigger::HandSwap | HoldTrigger::Drop => 0,
            HoldTrigger::Join
            | HoldTrigger::SlotChange
            | HoldTrigger::InventoryClick
            | HoldTrigger::InventoryDrag
            | HoldTrigger::Pickup => 1,
        }
    }
}

/// The game-server seam the synchronizer drives.
pub trait EffectHost {
    fn is_online(&self, player: PlayerId) -> bool;
    fn main_hand(&self, player: PlayerId) -> Option<&ItemStack>;
    fn off_hand(&self, player: PlayerId) -> Option<&ItemStack>;
    fn apply_effect(&mut self, player: PlayerId, effect: AppliedEffect);
    fn remove_effect(&mut self, player: PlayerId, kind: HoldEffectKind);
}

/// Per-player tracking. `main_hand`/`off_hand` are diagnostic last-known
/// values; `active` is authoritative for what this engine has applied.
#[derive(Debug, Default, Clone)]
pub struct PlayerHoldState {
    pub main_hand: Option<String>,
    pub off_hand: Option<String>,
    pub active: BTreeSet<HoldEffectKind>,
}

/// Keeps each player's status effects consistent with the weapons in their
/// hands. The state table lock serializes overlapping triggers; every run
/// fully clears and recomputes, so there is no incremental drift to
/// protect against.
#[derive(Debug, Default)]
pub struct HoldEffectSync {
    players: Mutex<HashMap<PlayerId, PlayerHoldState>>,
}

impl HoldEffectSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a recompute for the trigger's settle delay.
    pub fn on_trigger(
        &self,
        player: PlayerId,
        trigger: HoldTrigger,
        scheduler: &mut TickScheduler,
        now: GameTick,
    ) {
        scheduler.schedule(DeferredTask::SyncHold(player), trigger.delay_ticks(), now);
    }

    /// Recomputes the player's hold effects from current hands. Offline
    /// players are a no-op. Errors affect only this player.
    pub fn sync_player<H: EffectHost>(
        &self,
        index: &WeaponIndex,
        resolver: &IdentityResolver,
        player: PlayerId,
        host: &mut H,
    ) -> Result<(), String> {
        if !host.is_online(player) {
            return Ok(());
        }

        let mut players = self
            .players
            .lock()
            .map_err(|_| "hold state lock poisoned".to_string())?;
        let state = players.entry(player).or_default();

        let main_id = host
            .main_hand(player)
            .and_then(|item| resolver.resolve(index, item));
        let off_id = host
            .off_hand(player)
            .and_then(|item| resolver.resolve(index, item));

        // Full clear before recompute; selective diffing under rapid
        // successive events is where drift bugs live.
        for kind in &state.active {
            host.remove_effect(player, *kind);
        }
        state.active.clear();

        for id in [main_id.as_deref(), off_id.as_deref()].into_iter().flatten() {
            let Some(definition) = index.get(id) else {
                continue;
            };
            for (kind, level) in definition.hold_effect_levels() {
                host.apply_effect(player, AppliedEffect::hold(kind, level));
                state.active.insert(kind);
            }
        }

        state.main_hand = main_id;
        state.off_hand = off_id;
        Ok(())
    }

    /// Drops all tracking for a disconnecting player. The host discards
    /// its own effects on disconnect; nothing to remove here.
    pub fn remove_player(&self, player: PlayerId) {
        if let Ok(mut players) = self.players.lock() {
            players.remove(&player);
        }
    }

    pub fn active_effects(&self, player: PlayerId) -> BTreeSet<HoldEffectKind> {
        self.players
            .lock()
            .ok()
            .and_then(|players| players.get(&player).map(|state| state.active.clone()))
            .unwrap_or_default()
    }

    pub fn tracked_players(&self) -> usize {
        self.players.lock().map(|players| players.len()).unwrap_or(0)
    }
}
