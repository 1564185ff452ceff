pub mod admin;
mod config;
pub mod effects;
mod engine;
pub mod items;
pub mod telemetry;
pub mod text;
pub mod weapons;

pub use effects::hold::{EffectHost, HoldEffectSync, HoldTrigger, PlayerId};
pub use effects::kinds::{AppliedEffect, HoldEffectKind};
pub use effects::projectile::{MarkHost, Projectile};
pub use effects::scheduler::{DeferredTask, GameTick, TickScheduler};
pub use engine::WeaponsEngine;
pub use items::factory::{HostCapabilities, ItemFactory};
pub use items::identity::IdentityResolver;
pub use items::material::Material;
pub use items::stack::{ItemStack, ItemTag};
pub use weapons::definition::{WeaponDefinition, WeaponVisuals};
pub use weapons::index::{WeaponIndex, WeaponStore};

pub fn run(args: &[String]) -> Result<(), String> {
    let config = config::AppConfig::from_args(args)?;
    telemetry::logging::init(&config.log_root)?;

    let raw = std::fs::read_to_string(&config.config_path).map_err(|err| {
        format!(
            "failed to read config {}: {}",
            config.config_path.display(),
            err
        )
    })?;
    let tree: serde_yaml::Value = serde_yaml::from_str(&raw).map_err(|err| {
        format!(
            "failed to parse config {}: {}",
            config.config_path.display(),
            err
        )
    })?;

    let engine = WeaponsEngine::default();
    let count = engine.reload(&tree);
    telemetry::logging::log_weapons(&format!(
        "config load: file={}, weapons={}",
        config.config_path.display(),
        count
    ));

    println!("cweapons: weapon scan");
    println!("- config: {}", config.config_path.display());
    println!("- weapons: {}", count);
    for definition in engine.definitions().iter() {
        println!(
            "- {} [{}] material={} hold_effects={} spectral={}",
            definition.id,
            definition.schema_name(),
            definition.material.as_str(),
            definition.hold_effect_levels().len(),
            definition.grants_spectral_ammo()
        );
    }
    Ok(())
}
