//! Magic effect catalogue.
//!
//! Effect ids, attribute indices and skill indices follow the record layout
//! of the game data files: `-1` marks an unused slot.

use serde::{Deserialize, Serialize};

/// Effects whose magnitude applies to one attribute.
const ATTRIBUTE_EFFECTS: [i32; 5] = [
    17, // Drain Attribute
    22, // Damage Attribute
    74, // Restore Attribute
    79, // Fortify Attribute
    85, // Absorb Attribute
];

/// Effects whose magnitude applies to one skill.
const SKILL_EFFECTS: [i32; 5] = [
    21, // Drain Skill
    26, // Damage Skill
    78, // Restore Skill
    83, // Fortify Skill
    89, // Absorb Skill
];

const MAGIC_EFFECT_NAMES: [&str; 102] = [
    "Water Breathing",
    "Swift Swim",
    "Water Walking",
    "Shield",
    "Fire Shield",
    "Lightning Shield",
    "Frost Shield",
    "Burden",
    "Feather",
    "Jump",
    "Levitate",
    "Slow Fall",
    "Lock",
    "Open",
    "Fire Damage",
    "Shock Damage",
    "Frost Damage",
    "Drain Attribute",
    "Drain Health",
    "Drain Magicka",
    "Drain Fatigue",
    "Drain Skill",
    "Damage Attribute",
    "Damage Health",
    "Damage Magicka",
    "Damage Fatigue",
    "Damage Skill",
    "Poison",
    "Weakness to Fire",
    "Weakness to Frost",
    "Weakness to Shock",
    "Weakness to Magicka",
    "Weakness to Common Disease",
    "Weakness to Blight Disease",
    "Weakness to Corprus Disease",
    "Weakness to Poison",
    "Weakness to Normal Weapons",
    "Disintegrate Weapon",
    "Disintegrate Armor",
    "Invisibility",
    "Chameleon",
    "Light",
    "Sanctuary",
    "Night Eye",
    "Charm",
    "Paralyze",
    "Silence",
    "Blind",
    "Sound",
    "Calm Humanoid",
    "Calm Creature",
    "Frenzy Humanoid",
    "Frenzy Creature",
    "Demoralize Humanoid",
    "Demoralize Creature",
    "Rally Humanoid",
    "Rally Creature",
    "Dispel",
    "Soultrap",
    "Telekinesis",
    "Mark",
    "Recall",
    "Divine Intervention",
    "Almsivi Intervention",
    "Detect Animal",
    "Detect Enchantment",
    "Detect Key",
    "Spell Absorption",
    "Reflect",
    "Cure Common Disease",
    "Cure Blight Disease",
    "Cure Corprus Disease",
    "Cure Poison",
    "Cure Paralyzation",
    "Restore Attribute",
    "Restore Health",
    "Restore Magicka",
    "Restore Fatigue",
    "Restore Skill",
    "Fortify Attribute",
    "Fortify Health",
    "Fortify Magicka",
    "Fortify Fatigue",
    "Fortify Skill",
    "Fortify Maximum Magicka",
    "Absorb Attribute",
    "Absorb Health",
    "Absorb Magicka",
    "Absorb Fatigue",
    "Absorb Skill",
    "Resist Fire",
    "Resist Frost",
    "Resist Shock",
    "Resist Magicka",
    "Resist Common Disease",
    "Resist Blight Disease",
    "Resist Corprus Disease",
    "Resist Poison",
    "Resist Normal Weapons",
    "Resist Paralysis",
    "Remove Curse",
    "Turn Undead",
];

/// Display name of a magic effect, if the id is catalogued.
pub fn magic_effect_name(effect_id: i32) -> Option<&'static str> {
    usize::try_from(effect_id)
        .ok()
        .and_then(|index| MAGIC_EFFECT_NAMES.get(index))
        .copied()
}

pub fn is_attribute_effect(effect_id: i32) -> bool {
    ATTRIBUTE_EFFECTS.contains(&effect_id)
}

pub fn is_skill_effect(effect_id: i32) -> bool {
    SKILL_EFFECTS.contains(&effect_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Strength,
    Intelligence,
    Willpower,
    Agility,
    Speed,
    Endurance,
    Personality,
    Luck,
}

impl Attribute {
    pub const ALL: [Attribute; 8] = [
        Attribute::Strength,
        Attribute::Intelligence,
        Attribute::Willpower,
        Attribute::Agility,
        Attribute::Speed,
        Attribute::Endurance,
        Attribute::Personality,
        Attribute::Luck,
    ];

    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Intelligence => "Intelligence",
            Attribute::Willpower => "Willpower",
            Attribute::Agility => "Agility",
            Attribute::Speed => "Speed",
            Attribute::Endurance => "Endurance",
            Attribute::Personality => "Personality",
            Attribute::Luck => "Luck",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    Block,
    Armorer,
    MediumArmor,
    HeavyArmor,
    BluntWeapon,
    LongBlade,
    Axe,
    Spear,
    Athletics,
    Enchant,
    Destruction,
    Alteration,
    Illusion,
    Conjuration,
    Mysticism,
    Restoration,
    Alchemy,
    Unarmored,
    Security,
    Sneak,
    Acrobatics,
    LightArmor,
    ShortBlade,
    Marksman,
    Mercantile,
    Speechcraft,
    HandToHand,
}

impl Skill {
    pub const ALL: [Skill; 27] = [
        Skill::Block,
        Skill::Armorer,
        Skill::MediumArmor,
        Skill::HeavyArmor,
        Skill::BluntWeapon,
        Skill::LongBlade,
        Skill::Axe,
        Skill::Spear,
        Skill::Athletics,
        Skill::Enchant,
        Skill::Destruction,
        Skill::Alteration,
        Skill::Illusion,
        Skill::Conjuration,
        Skill::Mysticism,
        Skill::Restoration,
        Skill::Alchemy,
        Skill::Unarmored,
        Skill::Security,
        Skill::Sneak,
        Skill::Acrobatics,
        Skill::LightArmor,
        Skill::ShortBlade,
        Skill::Marksman,
        Skill::Mercantile,
        Skill::Speechcraft,
        Skill::HandToHand,
    ];

    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Skill::Block => "Block",
            Skill::Armorer => "Armorer",
            Skill::MediumArmor => "Medium Armor",
            Skill::HeavyArmor => "Heavy Armor",
            Skill::BluntWeapon => "Blunt Weapon",
            Skill::LongBlade => "Long Blade",
            Skill::Axe => "Axe",
            Skill::Spear => "Spear",
            Skill::Athletics => "Athletics",
            Skill::Enchant => "Enchant",
            Skill::Destruction => "Destruction",
            Skill::Alteration => "Alteration",
            Skill::Illusion => "Illusion",
            Skill::Conjuration => "Conjuration",
            Skill::Mysticism => "Mysticism",
            Skill::Restoration => "Restoration",
            Skill::Alchemy => "Alchemy",
            Skill::Unarmored => "Unarmored",
            Skill::Security => "Security",
            Skill::Sneak => "Sneak",
            Skill::Acrobatics => "Acrobatics",
            Skill::LightArmor => "Light Armor",
            Skill::ShortBlade => "Short Blade",
            Skill::Marksman => "Marksman",
            Skill::Mercantile => "Mercantile",
            Skill::Speechcraft => "Speechcraft",
            Skill::HandToHand => "Hand-to-hand",
        }
    }
}

/// One magic effect as carried by an ingredient.
///
/// Built through [`EffectKey::new`], which drops the attribute or skill
/// index when the effect does not target one, so derived equality compares
/// effects the way a player reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectKey {
    pub effect_id: i32,
    pub attribute: i32,
    pub skill: i32,
}

impl EffectKey {
    pub fn new(effect_id: i32, attribute: i32, skill: i32) -> Self {
        Self {
            effect_id,
            attribute: if is_attribute_effect(effect_id) {
                attribute
            } else {
                -1
            },
            skill: if is_skill_effect(effect_id) { skill } else { -1 },
        }
    }

    pub fn display_name(&self) -> String {
        let Some(base) = magic_effect_name(self.effect_id) else {
            return format!("Unknown Effect ({})", self.effect_id);
        };

        if let Some(attribute) = Attribute::from_index(self.attribute) {
            return base.replace("Attribute", attribute.name());
        }
        if let Some(skill) = Skill::from_index(self.skill) {
            return base.replace("Skill", skill.name());
        }
        base.to_string()
    }
}
