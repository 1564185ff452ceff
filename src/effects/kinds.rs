/// Status effects a held weapon can grant. The name tables below are fixed
/// at compile time; the mapping never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HoldEffectKind {
    Speed,
    Slowness,
    Strength,
    Resistance,
    Regeneration,
    FireResistance,
    NightVision,
    JumpBoost,
    Haste,
    Invisibility,
}

impl HoldEffectKind {
    /// Looks up a legacy effect name (`SPEED`, `JUMP_BOOST`, ...).
    pub fn from_effect_name(name: &str) -> Option<HoldEffectKind> {
        let name = name.trim().to_ascii_uppercase();
        let kind = match name.as_str() {
            "SPEED" => HoldEffectKind::Speed,
            "SLOWNESS" => HoldEffectKind::Slowness,
            "STRENGTH" => HoldEffectKind::Strength,
            "RESISTANCE" => HoldEffectKind::Resistance,
            "REGENERATION" => HoldEffectKind::Regeneration,
            "FIRE_RESISTANCE" => HoldEffectKind::FireResistance,
            "NIGHT_VISION" => HoldEffectKind::NightVision,
            "JUMP_BOOST" => HoldEffectKind::JumpBoost,
            "HASTE" => HoldEffectKind::Haste,
            "INVISIBILITY" => HoldEffectKind::Invisibility,
            _ => return None,
        };
        Some(kind)
    }

    /// Looks up a structured boost kind (`HOLD_SPEED`, `HOLD_STRENGTH`, ...).
    pub fn from_boost_kind(kind: &str) -> Option<HoldEffectKind> {
        kind.trim()
            .to_ascii_uppercase()
            .strip_prefix("HOLD_")
            .and_then(HoldEffectKind::from_effect_name)
    }

    pub fn effect_name(self) -> &'static str {
        match self {
            HoldEffectKind::Speed => "SPEED",
            HoldEffectKind::Slowness => "SLOWNESS",
            HoldEffectKind::Strength => "STRENGTH",
            HoldEffectKind::Resistance => "RESISTANCE",
            HoldEffectKind::Regeneration => "REGENERATION",
            HoldEffectKind::FireResistance => "FIRE_RESISTANCE",
            HoldEffectKind::NightVision => "NIGHT_VISION",
            HoldEffectKind::JumpBoost => "JUMP_BOOST",
            HoldEffectKind::Haste => "HASTE",
            HoldEffectKind::Invisibility => "INVISIBILITY",
        }
    }
}

/// Duration used for hold effects: practically infinite, removed explicitly
/// when the weapon leaves the hand.
pub const HOLD_EFFECT_DURATION_TICKS: i32 = i32::MAX;

/// A concrete effect application handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedEffect {
    pub kind: HoldEffectKind,
    pub amplifier: i32,
    pub duration_ticks: i32,
    pub ambient: bool,
    pub particles: bool,
}

impl AppliedEffect {
    /// Hold-effect application for a configured level. Level 1 maps to
    /// amplifier 0; levels below 1 clamp to amplifier 0.
    pub fn hold(kind: HoldEffectKind, level: i64) -> Self {
        let amplifier = (level - 1).max(0).min(i64::from(i32::MAX)) as i32;
        Self {
            kind,
            amplifier,
            duration_ticks: HOLD_EFFECT_DURATION_TICKS,
            ambient: true,
            particles: false,
        }
    }
}
