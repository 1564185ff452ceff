use crate::effects::kinds::HoldEffectKind;
use crate::items::material::Material;
use std::collections::BTreeMap;

pub const BOOST_FLAME_LEVEL: &str = "BOW_FLAME_LEVEL";
pub const BOOST_MARK_TARGET: &str = "BOW_MARK_TARGET";
pub const BOOST_SPECTRAL: &str = "BOW_SPECTRAL";

/// A named effect contributed by a weapon. `kind` is upper-cased at compile
/// time; `value` and `chance` stay absent when the config omits them.
#[derive(Debug, Clone, PartialEq)]
pub struct Boost {
    pub kind: String,
    pub value: Option<f64>,
    pub chance: Option<f64>,
}

/// Opaque legacy bow-modifier values, kept as configured.
#[derive(Debug, Clone, PartialEq)]
pub enum ModifierValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

/// Visuals and behavior from the structured schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatedVisuals {
    pub name_template: String,
    pub lore_templates: Vec<String>,
    pub colorize_segments: Vec<String>,
    pub color_palette: Vec<String>,
    pub boost_display: String,
    /// Parsed for display compatibility; produced items never carry these.
    pub enchants: BTreeMap<String, i64>,
    pub vanilla_enchants: bool,
    pub boosts: Vec<Boost>,
}

/// Visuals and behavior from the legacy flat schema.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyVisuals {
    pub display_name: String,
    pub enchantments: BTreeMap<String, i64>,
    pub hold_effects: BTreeMap<String, i64>,
    pub give_spectral_ammo: bool,
    pub bow_modifiers: BTreeMap<String, ModifierValue>,
}

/// Exactly one schema variant per definition, decided once at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum WeaponVisuals {
    Templated(TemplatedVisuals),
    Legacy(LegacyVisuals),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeaponDefinition {
    pub id: String,
    /// Value embedded in produced items for identity lookup.
    pub persistent_key: String,
    pub material: Material,
    pub visuals: WeaponVisuals,
}

impl WeaponDefinition {
    /// Hold effects granted while this weapon is in hand, with their
    /// configured levels. Structured boosts keep config order; legacy
    /// entries come out sorted by effect name.
    pub fn hold_effect_levels(&self) -> Vec<(HoldEffectKind, i64)> {
        match &self.visuals {
            WeaponVisuals::Templated(templated) => templated
                .boosts
                .iter()
                .filter_map(|boost| {
                    let kind = HoldEffectKind::from_boost_kind(&boost.kind)?;
                    let level = boost.value.map(|value| value as i64).unwrap_or(1);
                    Some((kind, level))
                })
                .collect(),
            WeaponVisuals::Legacy(legacy) => legacy
                .hold_effects
                .iter()
                .filter_map(|(name, level)| {
                    Some((HoldEffectKind::from_effect_name(name)?, *level))
                })
                .collect(),
        }
    }

    /// Burn-boost level for launched projectiles; 0 when absent. Takes the
    /// larger of the legacy `flame_level` modifier and any flame boosts.
    pub fn flame_level(&self) -> i64 {
        match &self.visuals {
            WeaponVisuals::Templated(templated) => templated
                .boosts
                .iter()
                .filter(|boost| boost.kind == BOOST_FLAME_LEVEL)
                .filter_map(|boost| boost.value)
                .map(|value| value as i64)
                .max()
                .unwrap_or(0),
            WeaponVisuals::Legacy(legacy) => match legacy.bow_modifiers.get("flame_level") {
                Some(ModifierValue::Number(value)) => *value as i64,
                _ => 0,
            },
        }
    }

    /// Whether projectiles from this weapon mark struck players.
    pub fn marks_target(&self) -> bool {
        match &self.visuals {
            WeaponVisuals::Templated(templated) => templated
                .boosts
                .iter()
                .any(|boost| boost.kind == BOOST_MARK_TARGET),
            WeaponVisuals::Legacy(_) => false,
        }
    }

    /// Whether handing out this weapon should include one spectral arrow.
    pub fn grants_spectral_ammo(&self) -> bool {
        match &self.visuals {
            WeaponVisuals::Templated(templated) => templated
                .boosts
                .iter()
                .any(|boost| boost.kind == BOOST_SPECTRAL),
            WeaponVisuals::Legacy(legacy) => {
                legacy.give_spectral_ammo
                    || matches!(
                        legacy.bow_modifiers.get("spectral"),
                        Some(ModifierValue::Flag(true))
                    )
            }
        }
    }

    /// Raw name shown in operator listings, before any rendering.
    pub fn display_label(&self) -> &str {
        match &self.visuals {
            WeaponVisuals::Templated(templated) => &templated.name_template,
            WeaponVisuals::Legacy(legacy) => &legacy.display_name,
        }
    }

    pub fn schema_name(&self) -> &'static str {
        match &self.visuals {
            WeaponVisuals::Templated(_) => "structured",
            WeaponVisuals::Legacy(_) => "legacy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templated(boosts: Vec<Boost>) -> WeaponDefinition {
        WeaponDefinition {
            id: "test".to_string(),
            persistent_key: "test".to_string(),
            material: Material::Bow,
            visuals: WeaponVisuals::Templated(TemplatedVisuals {
                name_template: "Test".to_string(),
                lore_templates: Vec::new(),
                colorize_segments: Vec::new(),
                color_palette: Vec::new(),
                boost_display: "{color_1}{boost}".to_string(),
                enchants: BTreeMap::new(),
                vanilla_enchants: false,
                boosts,
            }),
        }
    }

    fn legacy(
        hold_effects: BTreeMap<String, i64>,
        bow_modifiers: BTreeMap<String, ModifierValue>,
    ) -> WeaponDefinition {
        WeaponDefinition {
            id: "old".to_string(),
            persistent_key: "old".to_string(),
            material: Material::Bow,
            visuals: WeaponVisuals::Legacy(LegacyVisuals {
                display_name: "Old Bow".to_string(),
                enchantments: BTreeMap::new(),
                hold_effects,
                give_spectral_ammo: false,
                bow_modifiers,
            }),
        }
    }

    #[test]
    fn hold_levels_from_boosts_default_to_one() {
        let def = templated(vec![
            Boost {
                kind: "HOLD_STRENGTH".to_string(),
                value: None,
                chance: None,
            },
            Boost {
                kind: "HOLD_SPEED".to_string(),
                value: Some(3.0),
                chance: None,
            },
            Boost {
                kind: "BOW_FLAME_LEVEL".to_string(),
                value: Some(2.0),
                chance: None,
            },
        ]);
        assert_eq!(
            def.hold_effect_levels(),
            vec![(HoldEffectKind::Strength, 1), (HoldEffectKind::Speed, 3)]
        );
    }

    #[test]
    fn hold_levels_from_legacy_map() {
        let mut effects = BTreeMap::new();
        effects.insert("SPEED".to_string(), 2);
        effects.insert("UNKNOWN_EFFECT".to_string(), 5);
        let def = legacy(effects, BTreeMap::new());
        assert_eq!(def.hold_effect_levels(), vec![(HoldEffectKind::Speed, 2)]);
    }

    #[test]
    fn flame_level_takes_max_boost() {
        let def = templated(vec![
            Boost {
                kind: "BOW_FLAME_LEVEL".to_string(),
                value: Some(1.0),
                chance: None,
            },
            Boost {
                kind: "BOW_FLAME_LEVEL".to_string(),
                value: Some(2.0),
                chance: None,
            },
        ]);
        assert_eq!(def.flame_level(), 2);
    }

    #[test]
    fn flame_level_reads_legacy_modifier() {
        let mut modifiers = BTreeMap::new();
        modifiers.insert("flame_level".to_string(), ModifierValue::Number(3.0));
        let def = legacy(BTreeMap::new(), modifiers);
        assert_eq!(def.flame_level(), 3);
    }

    #[test]
    fn spectral_ammo_from_legacy_modifier_flag() {
        let mut modifiers = BTreeMap::new();
        modifiers.insert("spectral".to_string(), ModifierValue::Flag(true));
        let def = legacy(BTreeMap::new(), modifiers);
        assert!(def.grants_spectral_ammo());
    }

    #[test]
    fn mark_target_requires_boost() {
        let marked = templated(vec![Boost {
            kind: "BOW_MARK_TARGET".to_string(),
            value: None,
            chance: None,
        }]);
        let plain = templated(Vec::new());
        assert!(marked.marks_target());
        assert!(!plain.marks_target());
        assert!(!legacy(BTreeMap::new(), BTreeMap::new()).marks_target());
    }
}
