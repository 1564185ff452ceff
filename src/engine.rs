use crate::effects::hold::{EffectHost, HoldEffectSync, HoldTrigger, PlayerId};
use crate::effects::projectile::{self, MarkHost, Projectile};
use crate::effects::scheduler::{DeferredTask, GameTick, TickScheduler};
use crate::items::factory::{HostCapabilities, ItemFactory};
use crate::items::identity::IdentityResolver;
use crate::items::stack::ItemStack;
use crate::telemetry::logging;
use crate::weapons::compiler::compile;
use crate::weapons::index::{WeaponIndex, WeaponStore};
use std::sync::{Arc, RwLock};

/// Facade wiring the compiled definition set, item factory, identity
/// resolution and per-player effect sync together. The event glue talks to
/// this type only.
pub struct WeaponsEngine {
    store: WeaponStore,
    resolver: RwLock<Arc<IdentityResolver>>,
    factory: ItemFactory,
    hold: HoldEffectSync,
}

impl Default for WeaponsEngine {
    fn default() -> Self {
        Self::new(HostCapabilities::default())
    }
}

impl WeaponsEngine {
    pub fn new(capabilities: HostCapabilities) -> Self {
        Self {
            store: WeaponStore::new(),
            resolver: RwLock::new(Arc::new(IdentityResolver::new())),
            factory: ItemFactory::new(capabilities),
            hold: HoldEffectSync::new(),
        }
    }

    /// Compiles and publishes a new definition set. A fresh resolver is
    /// installed so no cached render from the old set survives.
    pub fn reload(&self, tree: &serde_yaml::Value) -> usize {
        let index = compile(tree);
        let count = index.len();
        self.store.publish(index);
        let resolver = Arc::new(IdentityResolver::new());
        match self.resolver.write() {
            Ok(mut guard) => *guard = resolver,
            Err(poisoned) => *poisoned.into_inner() = resolver,
        }
        logging::log_weapons(&format!("definitions published: {}", count));
        count
    }

    pub fn definitions(&self) -> Arc<WeaponIndex> {
        self.store.current()
    }

    fn resolver(&self) -> Arc<IdentityResolver> {
        match self.resolver.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn create_item(&self, id: &str) -> Option<ItemStack> {
        self.factory.create_item(&self.store.current(), id)
    }

    pub fn resolve(&self, item: &ItemStack) -> Option<String> {
        self.resolver().resolve(&self.store.current(), item)
    }

    pub fn on_hold_event(
        &self,
        player: PlayerId,
        trigger: HoldTrigger,
        scheduler: &mut TickScheduler,
        now: GameTick,
    ) {
        self.hold.on_trigger(player, trigger, scheduler, now);
    }

    pub fn sync_player<H: EffectHost>(
        &self,
        player: PlayerId,
        host: &mut H,
    ) -> Result<(), String> {
        let index = self.store.current();
        let resolver = self.resolver();
        self.hold.sync_player(&index, &resolver, player, host)
    }

    pub fn remove_player(&self, player: PlayerId) {
        self.hold.remove_player(player);
    }

    pub fn on_projectile_launch<H: EffectHost>(
        &self,
        shooter: PlayerId,
        host: &H,
        projectile: &mut Projectile,
    ) {
        let index = self.store.current();
        let resolver = self.resolver();
        projectile::on_projectile_launch(&index, &resolver, shooter, host, projectile);
    }

    pub fn on_projectile_impact<H: MarkHost>(
        &self,
        projectile: &Projectile,
        target: PlayerId,
        host: &mut H,
        scheduler: &mut TickScheduler,
        now: GameTick,
    ) {
        let index = self.store.current();
        projectile::on_projectile_impact(&index, projectile, target, host, scheduler, now);
    }

    /// Runs one deferred task. Failures are logged and contained; a bad
    /// recompute for one player never reaches the caller's event loop.
    pub fn run_deferred<H: EffectHost + MarkHost>(&self, task: DeferredTask, host: &mut H) {
        match task {
            DeferredTask::SyncHold(player) => {
                if let Err(err) = self.sync_player(player, host) {
                    logging::log_error(&format!(
                        "hold sync failed for player {}: {}",
                        player.0, err
                    ));
                }
            }
            DeferredTask::ClearMark(player) => projectile::clear_mark(player, host),
        }
    }
}
