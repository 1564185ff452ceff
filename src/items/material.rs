/// Base item kinds weapons can be built from. Config names use the
/// upper-case underscore form (`NETHERITE_SWORD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    WoodenSword,
    StoneSword,
    IronSword,
    GoldenSword,
    DiamondSword,
    NetheriteSword,
    IronAxe,
    DiamondAxe,
    NetheriteAxe,
    Bow,
    Crossbow,
    Trident,
    Mace,
    Stick,
    BlazeRod,
    SpectralArrow,
}

impl Material {
    /// Fallback for missing or unrecognized config values.
    pub const DEFAULT: Material = Material::NetheriteSword;

    pub fn parse(name: &str) -> Option<Material> {
        let name = name.trim().to_ascii_uppercase();
        let material = match name.as_str() {
            "WOODEN_SWORD" => Material::WoodenSword,
            "STONE_SWORD" => Material::StoneSword,
            "IRON_SWORD" => Material::IronSword,
            "GOLDEN_SWORD" => Material::GoldenSword,
            "DIAMOND_SWORD" => Material::DiamondSword,
            "NETHERITE_SWORD" => Material::NetheriteSword,
            "IRON_AXE" => Material::IronAxe,
            "DIAMOND_AXE" => Material::DiamondAxe,
            "NETHERITE_AXE" => Material::NetheriteAxe,
            "BOW" => Material::Bow,
            "CROSSBOW" => Material::Crossbow,
            "TRIDENT" => Material::Trident,
            "MACE" => Material::Mace,
            "STICK" => Material::Stick,
            "BLAZE_ROD" => Material::BlazeRod,
            "SPECTRAL_ARROW" => Material::SpectralArrow,
            _ => return None,
        };
        Some(material)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Material::WoodenSword => "WOODEN_SWORD",
            Material::StoneSword => "STONE_SWORD",
            Material::IronSword => "IRON_SWORD",
            Material::GoldenSword => "GOLDEN_SWORD",
            Material::DiamondSword => "DIAMOND_SWORD",
            Material::NetheriteSword => "NETHERITE_SWORD",
            Material::IronAxe => "IRON_AXE",
            Material::DiamondAxe => "DIAMOND_AXE",
            Material::NetheriteAxe => "NETHERITE_AXE",
            Material::Bow => "BOW",
            Material::Crossbow => "CROSSBOW",
            Material::Trident => "TRIDENT",
            Material::Mace => "MACE",
            Material::Stick => "STICK",
            Material::BlazeRod => "BLAZE_ROD",
            Material::SpectralArrow => "SPECTRAL_ARROW",
        }
    }

    /// Items that fire projectiles when used.
    pub fn is_launcher(self) -> bool {
        matches!(self, Material::Bow | Material::Crossbow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_lowercase_names() {
        assert_eq!(Material::parse("diamond_sword"), Some(Material::DiamondSword));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Material::parse("OBSIDIAN_CLUB"), None);
    }

    #[test]
    fn parse_round_trips_every_name() {
        for material in [
            Material::WoodenSword,
            Material::Bow,
            Material::Crossbow,
            Material::Trident,
            Material::NetheriteSword,
        ] {
            assert_eq!(Material::parse(material.as_str()), Some(material));
        }
    }

    #[test]
    fn launchers_are_bow_kinds_only() {
        assert!(Material::Bow.is_launcher());
        assert!(Material::Crossbow.is_launcher());
        assert!(!Material::Trident.is_launcher());
        assert!(!Material::NetheriteSword.is_launcher());
    }
}
