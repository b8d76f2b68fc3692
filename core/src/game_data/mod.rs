//! Static reference tables for the game content the parser recognizes.
//!
//! The larger tables (equipment MP regeneration, consumable organ hits,
//! semirare and Bad Moon encounter names) are generated at build time
//! from `data/*.csv` into perfect-hash maps and sets. Smaller fixed sets
//! live here as `phf` literals. All lookups are zero-effect on miss; an
//! unknown item never aborts a parse.

use phf::{phf_map, phf_set};

include!(concat!(env!("OUT_DIR"), "/mp_regen_equipment.rs"));
include!(concat!(env!("OUT_DIR"), "/organ_hits.rs"));
include!(concat!(env!("OUT_DIR"), "/semirare_encounters.rs"));
include!(concat!(env!("OUT_DIR"), "/bad_moon_encounters.rs"));

/// Average per-turn MP regeneration for a worn piece of equipment.
/// Unknown items contribute zero.
pub fn equipment_mp_regen(item: &str) -> i64 {
    EQUIPMENT_MP_REGEN
        .get(item)
        .map(|&(min, max)| i64::from(min + max) / 2)
        .unwrap_or(0)
}

/// Organ capacity cost of a consumable. Unknown consumables cost zero.
pub fn organ_hit(name: &str) -> i64 {
    ORGAN_HITS.get(name).map(|&size| i64::from(size)).unwrap_or(0)
}

/// Area names the client logs inconsistently, mapped to their canonical
/// form so per-area aggregation groups them together.
static AREA_REMAP: phf::Map<&'static str, &'static str> = phf_map! {
    "The Typical Tavern (Pre-Rat)" => "The Typical Tavern",
    "The Typical Tavern (Post-Rat)" => "The Typical Tavern",
    "Guano Junction " => "Guano Junction",
    "Lair of the Ninja Snowmen" => "Ninja Snowmen",
    "Cobb's Knob Laboratory " => "Cobb's Knob Laboratory",
    "Haiku Dungeon" => "The Haiku Dungeon",
};

pub fn remap_area_name(name: &str) -> &str {
    AREA_REMAP.get(name).copied().unwrap_or(name)
}

// ─── Substat vocabulary ──────────────────────────────────────────────────────

pub static MUSCLE_SUBSTATS: phf::Set<&'static str> = phf_set! {
    "Beefiness", "Fortitude", "Muscleboundness", "Strengthliness", "Strongness",
};

pub static MYST_SUBSTATS: phf::Set<&'static str> = phf_set! {
    "Enchantedness", "Magicalness", "Mysteriousness", "Wizardliness",
};

pub static MOXIE_SUBSTATS: phf::Set<&'static str> = phf_set! {
    "Cheek", "Chutzpah", "Roguishness", "Sarcasm", "Smarm",
};

pub static MP_TOKENS: phf::Set<&'static str> = phf_set! {
    "Mana Points", "Mojo Points", "Muscularity Points",
};

// ─── Combat vocabulary ───────────────────────────────────────────────────────

/// Skills whose cast banishes the monster for the rest of the run.
pub static BANISH_SKILLS: phf::Set<&'static str> = phf_set! {
    "BANISHING SHOUT", "SNOKEBOMB", "THUNDER CLAP", "CREEPY GRIN",
    "TALK ABOUT POLITICS", "BATTER UP!",
};

/// Combat items that banish on use.
pub static BANISH_COMBAT_ITEMS: phf::Set<&'static str> = phf_set! {
    "divine champagne popper", "Louder Than Bomb", "tennis ball",
    "crystal skull",
};

/// Familiars that feed the player MP during combat.
pub static STARFISH_FAMILIARS: phf::Set<&'static str> = phf_set! {
    "Star Starfish", "Twitching Space Critter", "Rogue Program",
    "Midget Clownfish", "Grouper Groupie", "Dancing Frog",
};

/// Encounters that appear without a preceding adventure line because the
/// client mislogs their area.
pub static BROKEN_AREA_ENCOUNTERS: phf::Set<&'static str> = phf_set! {
    "Encounter: Cleesh", "Encounter: Boxing the Juke",
    "Encounter: Lunchboxing", "Encounter: Piece of Cake",
};

/// Arcade games that consume five turns per play.
pub static GAME_GRID_GAMES: phf::Set<&'static str> = phf_set! {
    "DemonStar", "Meteoid", "Jackass Plumber", "The Fighters of Fighting",
    "Dungeon Fist!", "Space Trip",
};

pub const SHORE_TRIP_SUFFIX: &str = "Shore, Inc. Travel Agency";
pub const RESTING_AREA_PREFIX: &str = "Rest ";
pub const DISINTEGRATE_MARKER: &str = "disintegrates into a fine yellow powder";
pub const WINS_FIGHT_MARKER: &str = "wins the fight";
pub const FIGHT_CONTINUE_URL: &str = "fight.php";
pub const FAMILIAR_POUND_MARKER: &str = "gains a pound";

pub const FREE_RUNAWAY_MARKERS: &[&str] =
    &["casually saunter away", "wriggle blindly away"];

/// Verbs the client logs as pseudo-adventures for crafting actions.
pub const CRAFTING_VERBS: &[&str] = &["Combine", "Cook", "Mix", "Smith"];

/// Lines longer than this are treated as corrupted and skipped.
pub const MAX_LINE_LEN: usize = 450;

/// Noise lines emitted by unrelated UI interactions; skipped between
/// blocks so they never start one.
pub const LINE_BLACKLIST: &[&str] = &[
    "familiar lock",
    "mall.php",
    "custom outfit save",
    "Encounter: Using the Force",
    "chat (",
];

/// Combined substats needed to reach a level. The stat requirement for
/// level `n` is `(n-1)^2 + 4`, and substats are the square of the stat.
pub fn substats_for_level(level: u32) -> i64 {
    if level <= 1 {
        return 0;
    }
    let stat = i64::from((level - 1).pow(2) + 4);
    stat * stat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mp_regen_lookup() {
        assert_eq!(equipment_mp_regen("plexiglass pith helmet"), 7);
        assert_eq!(equipment_mp_regen("beer helmet"), 3);
        // Lookup miss is zero-effect, not an error
        assert_eq!(equipment_mp_regen("completely unknown hat"), 0);
        assert_eq!(equipment_mp_regen("none"), 0);
    }

    #[test]
    fn test_organ_hit_lookup() {
        assert_eq!(organ_hit("hell ramen"), 6);
        assert_eq!(organ_hit("white wine"), 1);
        assert_eq!(organ_hit("mojo filter"), 0);
        assert_eq!(organ_hit("mystery meat"), 0);
    }

    #[test]
    fn test_area_remap() {
        assert_eq!(remap_area_name("The Typical Tavern (Pre-Rat)"), "The Typical Tavern");
        assert_eq!(remap_area_name("The Spooky Forest"), "The Spooky Forest");
    }

    #[test]
    fn test_substat_vocabulary_is_disjoint() {
        for s in MUSCLE_SUBSTATS.iter() {
            assert!(!MYST_SUBSTATS.contains(s));
            assert!(!MOXIE_SUBSTATS.contains(s));
        }
        for s in MYST_SUBSTATS.iter() {
            assert!(!MOXIE_SUBSTATS.contains(s));
        }
    }

    #[test]
    fn test_substats_for_level() {
        assert_eq!(substats_for_level(1), 0);
        // Level 2 requires stat 5 -> 25 substats
        assert_eq!(substats_for_level(2), 25);
        // Level 5 requires stat 20 -> 400 substats
        assert_eq!(substats_for_level(5), 400);
    }
}
