use crate::items::stack::ItemStack;
use crate::text::style::translate_style_codes;
use crate::text::template::{apply_colorize_tag, apply_placeholders};
use crate::weapons::definition::{Boost, WeaponDefinition, WeaponVisuals};
use crate::weapons::index::WeaponIndex;

/// Tag name under which produced items carry their identity at the host
/// boundary.
pub const WEAPON_TAG_NAME: &str = "cweapons_id";

/// What the target host version supports. Replaces silent feature probing
/// with an explicit check.
#[derive(Debug, Clone, Copy)]
pub struct HostCapabilities {
    pub glint_override: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            glint_override: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct ItemFactory {
    capabilities: HostCapabilities,
}

impl ItemFactory {
    pub fn new(capabilities: HostCapabilities) -> Self {
        Self { capabilities }
    }

    /// Builds a fresh item for the given weapon id. Unknown ids yield
    /// `None`. Produced items never carry enchantments: the configured
    /// enchant table is display metadata only.
    pub fn create_item(&self, index: &WeaponIndex, id: &str) -> Option<ItemStack> {
        let definition = index.get(id)?;
        let mut item = ItemStack::new(definition.material);
        item.display_name = render_name(definition);
        item.lore = render_lore(definition);
        item.clear_enchantments();
        if self.capabilities.glint_override {
            item.glint_override = Some(false);
        }
        item.hide_attributes = true;
        item.set_weapon_tag(&definition.persistent_key);
        Some(item)
    }
}

/// Renders the display name exactly as a produced item would carry it.
/// Shared with the identity resolver's fallback matching.
pub fn render_name(definition: &WeaponDefinition) -> Option<String> {
    match &definition.visuals {
        WeaponVisuals::Templated(templated) => {
            let colorized = apply_colorize_tag(&templated.name_template, &templated.colorize_segments);
            Some(apply_placeholders(&colorized, &templated.color_palette, None))
        }
        WeaponVisuals::Legacy(legacy) => Some(legacy.display_name.clone()),
    }
}

/// Renders the lore lines exactly as a produced item would carry them.
pub fn render_lore(definition: &WeaponDefinition) -> Vec<String> {
    match &definition.visuals {
        WeaponVisuals::Templated(templated) => {
            if templated.lore_templates.is_empty() {
                return Vec::new();
            }
            let boost_lines: Vec<String> = templated
                .boosts
                .iter()
                .map(|boost| {
                    let text = boost_text(boost);
                    let line = templated.boost_display.replace("{boost}", &text);
                    let line = apply_placeholders(&line, &templated.color_palette, Some(&text));
                    translate_style_codes(&line)
                })
                .collect();
            let joined = boost_lines.join("\n");
            templated
                .lore_templates
                .iter()
                .map(|template| {
                    let line = apply_placeholders(template, &templated.color_palette, Some(&joined));
                    translate_style_codes(&line)
                })
                .collect()
        }
        WeaponVisuals::Legacy(legacy) => {
            if legacy.hold_effects.is_empty() {
                return Vec::new();
            }
            let mut lore = vec![translate_style_codes("&7Hold Effects:")];
            for (name, level) in &legacy.hold_effects {
                lore.push(translate_style_codes(&format!("&3{} {}", name, level)));
            }
            lore
        }
    }
}

/// `KIND[" x"value][" ("chance"%)"]`, with integral values printed without
/// a decimal part.
fn boost_text(boost: &Boost) -> String {
    let mut text = boost.kind.clone();
    if let Some(value) = boost.value {
        text.push_str(" x");
        text.push_str(&format_number(value));
    }
    if let Some(chance) = boost.chance {
        text.push_str(&format!(" ({}%)", (chance * 100.0).round() as i64));
    }
    text
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::material::Material;
    use crate::text::style::strip_style_codes;
    use crate::weapons::definition::{LegacyVisuals, TemplatedVisuals};
    use std::collections::BTreeMap;

    fn structured_definition() -> WeaponDefinition {
        WeaponDefinition {
            id: "royal_saber".to_string(),
            persistent_key: "royal_saber_key".to_string(),
            material: Material::DiamondSword,
            visuals: WeaponVisuals::Templated(TemplatedVisuals {
                name_template: "{color_1}Royal Saber".to_string(),
                lore_templates: vec!["{boost}".to_string()],
                colorize_segments: Vec::new(),
                color_palette: vec!["&6".to_string()],
                boost_display: "{color_1}{boost}".to_string(),
                enchants: BTreeMap::new(),
                vanilla_enchants: false,
                boosts: vec![Boost {
                    kind: "HOLD_STRENGTH".to_string(),
                    value: None,
                    chance: None,
                }],
            }),
        }
    }

    fn index_with(definition: WeaponDefinition) -> WeaponIndex {
        let mut index = WeaponIndex::default();
        index.insert(definition).expect("insert definition");
        index
    }

    #[test]
    fn create_item_renders_and_tags() {
        let index = index_with(structured_definition());
        let factory = ItemFactory::default();
        let item = factory.create_item(&index, "royal_saber").expect("item");

        assert_eq!(item.material, Material::DiamondSword);
        assert_eq!(item.display_name.as_deref(), Some("\u{00A7}6Royal Saber"));
        assert_eq!(item.lore, vec!["\u{00A7}6HOLD_STRENGTH".to_string()]);
        assert_eq!(item.weapon_tag(), Some("royal_saber_key"));
        assert!(item.enchantments.is_empty());
        assert_eq!(item.glint_override, Some(false));
        assert!(item.hide_attributes);
    }

    #[test]
    fn create_item_returns_none_for_unknown_id() {
        let index = index_with(structured_definition());
        let factory = ItemFactory::default();
        assert!(factory.create_item(&index, "missing").is_none());
    }

    #[test]
    fn glint_override_respects_capabilities() {
        let index = index_with(structured_definition());
        let factory = ItemFactory::new(HostCapabilities {
            glint_override: false,
        });
        let item = factory.create_item(&index, "royal_saber").expect("item");
        assert_eq!(item.glint_override, None);
    }

    #[test]
    fn boost_lines_carry_value_and_chance() {
        let boost = Boost {
            kind: "HOLD_SPEED".to_string(),
            value: Some(2.0),
            chance: Some(0.25),
        };
        assert_eq!(boost_text(&boost), "HOLD_SPEED x2 (25%)");

        let fractional = Boost {
            kind: "HOLD_SPEED".to_string(),
            value: Some(1.5),
            chance: None,
        };
        assert_eq!(boost_text(&fractional), "HOLD_SPEED x1.5");
    }

    #[test]
    fn multiple_boosts_join_into_the_placeholder() {
        let mut definition = structured_definition();
        let WeaponVisuals::Templated(templated) = &mut definition.visuals else {
            unreachable!();
        };
        templated.boosts.push(Boost {
            kind: "HOLD_SPEED".to_string(),
            value: Some(2.0),
            chance: None,
        });
        let lore = render_lore(&definition);
        assert_eq!(lore.len(), 1);
        assert_eq!(
            strip_style_codes(&lore[0]),
            "HOLD_STRENGTH\nHOLD_SPEED x2"
        );
    }

    #[test]
    fn legacy_lore_lists_hold_effects() {
        let mut hold_effects = BTreeMap::new();
        hold_effects.insert("SPEED".to_string(), 2);
        hold_effects.insert("STRENGTH".to_string(), 1);
        let definition = WeaponDefinition {
            id: "old_blade".to_string(),
            persistent_key: "old_blade".to_string(),
            material: Material::IronSword,
            visuals: WeaponVisuals::Legacy(LegacyVisuals {
                display_name: "&bOld Blade".to_string(),
                enchantments: BTreeMap::new(),
                hold_effects,
                give_spectral_ammo: false,
                bow_modifiers: BTreeMap::new(),
            }),
        };

        let lore = render_lore(&definition);
        assert_eq!(lore.len(), 3);
        assert_eq!(strip_style_codes(&lore[0]), "Hold Effects:");
        assert_eq!(strip_style_codes(&lore[1]), "SPEED 2");
        assert_eq!(strip_style_codes(&lore[2]), "STRENGTH 1");
    }

    #[test]
    fn legacy_name_is_used_verbatim() {
        let definition = WeaponDefinition {
            id: "old_blade".to_string(),
            persistent_key: "old_blade".to_string(),
            material: Material::IronSword,
            visuals: WeaponVisuals::Legacy(LegacyVisuals {
                display_name: "&bOld Blade".to_string(),
                enchantments: BTreeMap::new(),
                hold_effects: BTreeMap::new(),
                give_spectral_ammo: false,
                bow_modifiers: BTreeMap::new(),
            }),
        };
        assert_eq!(render_name(&definition).as_deref(), Some("&bOld Blade"));
    }
}
