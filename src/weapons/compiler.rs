use crate::items::material::Material;
use crate::telemetry::logging;
use crate::weapons::definition::{
    Boost, LegacyVisuals, ModifierValue, TemplatedVisuals, WeaponDefinition, WeaponVisuals,
};
use crate::weapons::index::WeaponIndex;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

const DEFAULT_BOOST_DISPLAY: &str = "{color_1}{boost}";

/// Compiles the `weapons` mapping of a parsed config tree. One bad entry
/// never aborts the load: malformed fields default, broken sections are
/// skipped, and every defect is logged.
pub fn compile(tree: &Value) -> WeaponIndex {
    let mut index = WeaponIndex::default();
    let Some(weapons) = tree.get("weapons").and_then(Value::as_mapping) else {
        return index;
    };
    for (key, section) in weapons {
        let Some(id) = key.as_str() else {
            logging::log_error("weapon section with non-string key skipped");
            continue;
        };
        let Some(section) = section.as_mapping() else {
            logging::log_error(&format!("weapon '{id}' is not a mapping, skipped"));
            continue;
        };
        // A nested `weapon` mapping selects the structured schema.
        let definition = match section.get("weapon").and_then(Value::as_mapping) {
            Some(weapon) => compile_structured(id, section, weapon),
            None => compile_legacy(id, section),
        };
        if let Err(err) = index.insert(definition) {
            logging::log_error(&format!("weapon '{id}' dropped: {err}"));
        }
    }
    index
}

fn compile_structured(id: &str, section: &Mapping, weapon: &Mapping) -> WeaponDefinition {
    let persistent_key = string_field(section, "id").unwrap_or_else(|| id.to_string());
    let name_template = string_field(weapon, "name").unwrap_or_else(|| id.to_string());
    WeaponDefinition {
        id: id.to_string(),
        persistent_key,
        material: material_field(id, weapon.get("material")),
        visuals: WeaponVisuals::Templated(TemplatedVisuals {
            name_template,
            lore_templates: string_list(weapon, "lore"),
            colorize_segments: string_list(section, "colorized"),
            color_palette: string_list(section, "colors"),
            boost_display: string_field(section, "boost-display")
                .unwrap_or_else(|| DEFAULT_BOOST_DISPLAY.to_string()),
            enchants: compile_enchants(id, weapon.get("enchants")),
            vanilla_enchants: bool_field(section, "vanillaEnchants"),
            boosts: compile_boosts(section.get("boosts")),
        }),
    }
}

fn compile_legacy(id: &str, section: &Mapping) -> WeaponDefinition {
    WeaponDefinition {
        id: id.to_string(),
        persistent_key: string_field(section, "persistent_key").unwrap_or_else(|| id.to_string()),
        material: material_field(id, section.get("material")),
        visuals: WeaponVisuals::Legacy(LegacyVisuals {
            display_name: string_field(section, "display_name").unwrap_or_else(|| id.to_string()),
            enchantments: compile_level_map(section.get("enchantments")),
            hold_effects: compile_level_map(section.get("hold_effects")),
            give_spectral_ammo: bool_field(section, "give_spectral_arrows"),
            bow_modifiers: compile_modifiers(section.get("bow_modifiers")),
        }),
    }
}

fn compile_enchants(id: &str, value: Option<&Value>) -> BTreeMap<String, i64> {
    let mut enchants = BTreeMap::new();
    let Some(entries) = value.and_then(Value::as_mapping) else {
        return enchants;
    };
    for (_, entry) in entries {
        let Some(entry) = entry.as_mapping() else {
            continue;
        };
        let Some(name) = string_field(entry, "enchant") else {
            logging::log_error(&format!("weapon '{id}' enchant entry without a name skipped"));
            continue;
        };
        let level = entry.get("level").and_then(Value::as_i64).unwrap_or(1);
        enchants.insert(name.to_ascii_uppercase(), level);
    }
    enchants
}

fn compile_boosts(value: Option<&Value>) -> Vec<Boost> {
    let Some(entries) = value.and_then(Value::as_mapping) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|(_, entry)| entry.as_mapping())
        .map(|entry| Boost {
            kind: string_field(entry, "type")
                .unwrap_or_default()
                .to_ascii_uppercase(),
            value: entry.get("value").and_then(Value::as_f64),
            chance: entry.get("chance").and_then(Value::as_f64),
        })
        .collect()
}

fn compile_level_map(value: Option<&Value>) -> BTreeMap<String, i64> {
    let mut levels = BTreeMap::new();
    let Some(entries) = value.and_then(Value::as_mapping) else {
        return levels;
    };
    for (key, level) in entries {
        let Some(name) = key.as_str() else {
            continue;
        };
        levels.insert(
            name.to_ascii_uppercase(),
            level.as_i64().unwrap_or(0),
        );
    }
    levels
}

fn compile_modifiers(value: Option<&Value>) -> BTreeMap<String, ModifierValue> {
    let mut modifiers = BTreeMap::new();
    let Some(entries) = value.and_then(Value::as_mapping) else {
        return modifiers;
    };
    for (key, raw) in entries {
        let Some(name) = key.as_str() else {
            continue;
        };
        let value = match raw {
            Value::Bool(flag) => ModifierValue::Flag(*flag),
            Value::Number(number) => match number.as_f64() {
                Some(value) => ModifierValue::Number(value),
                None => continue,
            },
            Value::String(text) => ModifierValue::Text(text.clone()),
            _ => continue,
        };
        modifiers.insert(name.to_string(), value);
    }
    modifiers
}

fn string_field(section: &Mapping, key: &str) -> Option<String> {
    section.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bool_field(section: &Mapping, key: &str) -> bool {
    section.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn string_list(section: &Mapping, key: &str) -> Vec<String> {
    section
        .get(key)
        .and_then(Value::as_sequence)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn material_field(id: &str, value: Option<&Value>) -> Material {
    let Some(name) = value.and_then(Value::as_str) else {
        return Material::DEFAULT;
    };
    match Material::parse(name) {
        Some(material) => material,
        None => {
            logging::log_error(&format!(
                "weapon '{id}' has unknown material '{name}', using {}",
                Material::DEFAULT.as_str()
            ));
            Material::DEFAULT
        }
    }
}
