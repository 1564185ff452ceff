use crate::items::material::Material;
use std::collections::BTreeMap;

/// Metadata entries carried by an item instance. The weapon identity tag is
/// the only entry this crate writes; anything else round-trips untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemTag {
    WeaponId(String),
    Unknown { key: String, value: String },
}

/// An item instance as the engine sees it: rendered visuals plus metadata.
/// Host adapters translate between this and the server's own item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub material: Material,
    pub display_name: Option<String>,
    pub lore: Vec<String>,
    pub enchantments: BTreeMap<String, i64>,
    pub glint_override: Option<bool>,
    pub hide_attributes: bool,
    pub tags: Vec<ItemTag>,
}

impl ItemStack {
    pub fn new(material: Material) -> Self {
        Self {
            material,
            display_name: None,
            lore: Vec::new(),
            enchantments: BTreeMap::new(),
            glint_override: None,
            hide_attributes: false,
            tags: Vec::new(),
        }
    }

    pub fn weapon_tag(&self) -> Option<&str> {
        for tag in &self.tags {
            if let ItemTag::WeaponId(key) = tag {
                return Some(key.as_str());
            }
        }
        None
    }

    pub fn set_weapon_tag(&mut self, key: &str) {
        self.clear_weapon_tag();
        self.tags.push(ItemTag::WeaponId(key.to_string()));
    }

    pub fn clear_weapon_tag(&mut self) {
        self.tags.retain(|tag| !matches!(tag, ItemTag::WeaponId(_)));
    }

    pub fn clear_enchantments(&mut self) {
        self.enchantments.clear();
    }
}
