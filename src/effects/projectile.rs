use crate::effects::hold::{EffectHost, PlayerId};
use crate::effects::scheduler::{DeferredTask, GameTick, TickScheduler};
use crate::items::identity::IdentityResolver;
use crate::weapons::index::WeaponIndex;

/// Burn duration granted per flame-boost level.
pub const BURN_TICKS_PER_LEVEL: i64 = 80;

/// How long a struck player stays marked.
pub const MARK_DURATION_TICKS: u64 = 200;

/// The engine's view of a launched projectile: mutable burn state plus the
/// identity stamp used to correlate the later impact.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Projectile {
    pub fire_ticks: i64,
    pub weapon_tag: Option<String>,
}

/// Host seam for the visual marker on struck players.
pub trait MarkHost {
    fn is_online(&self, player: PlayerId) -> bool;
    fn set_marked(&mut self, player: PlayerId, marked: bool);
}

/// Resolves the launching weapon (main hand unless it is not a launcher,
/// then off hand), scales the projectile's burn duration, and stamps the
/// weapon id for impact handling. Unresolvable launches pass through
/// untouched.
pub fn on_projectile_launch<H: EffectHost>(
    index: &WeaponIndex,
    resolver: &IdentityResolver,
    shooter: PlayerId,
    host: &H,
    projectile: &mut Projectile,
) {
    let launcher = match host.main_hand(shooter) {
        Some(item) if item.material.is_launcher() => Some(item),
        _ => host.off_hand(shooter),
    };
    let Some(id) = launcher.and_then(|item| resolver.resolve(index, item)) else {
        return;
    };
    let Some(definition) = index.get(&id) else {
        return;
    };

    let flame_level = definition.flame_level();
    if flame_level > 0 {
        let burn = BURN_TICKS_PER_LEVEL.saturating_mul(flame_level);
        projectile.fire_ticks = projectile.fire_ticks.max(burn);
    }
    projectile.weapon_tag = Some(id);
}

/// Marks the struck player when the stamped weapon has a mark boost and
/// schedules the removal. A target that left in the meantime is a no-op.
pub fn on_projectile_impact<H: MarkHost>(
    index: &WeaponIndex,
    projectile: &Projectile,
    target: PlayerId,
    host: &mut H,
    scheduler: &mut TickScheduler,
    now: GameTick,
) {
    let Some(tag) = projectile.weapon_tag.as_deref() else {
        return;
    };
    let Some(definition) = index.get(tag) else {
        return;
    };
    if !definition.marks_target() || !host.is_online(target) {
        return;
    }
    host.set_marked(target, true);
    scheduler.schedule(DeferredTask::ClearMark(target), MARK_DURATION_TICKS, now);
}

/// Deferred mark removal; defensive against the target having left.
pub fn clear_mark<H: MarkHost>(target: PlayerId, host: &mut H) {
    if host.is_online(target) {
        host.set_marked(target, false);
    }
}
