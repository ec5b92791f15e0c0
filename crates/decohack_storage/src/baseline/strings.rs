//! Built-in text strings.

use decohack_foundation::Dialect;

/// `(mnemonic, text, ultimate_only)`. Rows flagged `ultimate_only` exist
/// only in the Ultimate Doom executable.
static STRINGS: [(&str, &str, bool); 158] = [
    ("D_DEVSTR", "Development mode ON.\n", false),
    ("D_CDROM", "CD-ROM Version: default.cfg from c:\\doomdata\n", false),
    ("PRESSKEY", "press a key.", false),
    ("PRESSYN", "press y or n.", false),
    ("QUITMSG", "are you sure you want to\nquit this great game?", false),
    ("LOADNET", "you can't do load while in a net game!\n\npress a key.", false),
    ("QLOADNET", "you can't quickload during a netgame!\n\npress a key.", false),
    ("QSAVESPOT", "you haven't picked a quicksave slot yet!\n\npress a key.", false),
    ("SAVEDEAD", "you can't save if you aren't playing!\n\npress a key.", false),
    ("QSPROMPT", "quicksave over your game named\n\n'%s'?\n\npress y or n.", false),
    ("QLPROMPT", "do you want to quickload the game named\n\n'%s'?\n\npress y or n.", false),
    ("NEWGAME", "you can't start a new game\nwhile in a network game.\n\npress a key.", false),
    ("NIGHTMARE", "are you sure? this skill level\nisn't even remotely fair.\n\npress y or n.", false),
    ("SWSTRING", "this is the shareware version of doom.\n\nyou need to order the entire trilogy.\n\npress a key.", false),
    ("MSGOFF", "Messages OFF", false),
    ("MSGON", "Messages ON", false),
    ("NETEND", "you can't end a netgame!\n\npress a key.", false),
    ("ENDGAME", "are you sure you want to end the game?\n\npress y or n.", false),
    ("DOSY", "(press y to quit)", false),
    ("DETAILHI", "High detail", false),
    ("DETAILLO", "Low detail", false),
    ("GAMMALVL0", "Gamma correction OFF", false),
    ("GAMMALVL1", "Gamma correction level 1", false),
    ("GAMMALVL2", "Gamma correction level 2", false),
    ("GAMMALVL3", "Gamma correction level 3", false),
    ("GAMMALVL4", "Gamma correction level 4", false),
    ("EMPTYSTRING", "empty slot", false),
    ("GOTARMOR", "Picked up the armor.", false),
    ("GOTMEGA", "Picked up the MegaArmor!", false),
    ("GOTHTHBONUS", "Picked up a health bonus.", false),
    ("GOTARMBONUS", "Picked up an armor bonus.", false),
    ("GOTSTIM", "Picked up a stimpack.", false),
    ("GOTMEDINEED", "Picked up a medikit that you REALLY need!", false),
    ("GOTMEDIKIT", "Picked up a medikit.", false),
    ("GOTSUPER", "Supercharge!", false),
    ("GOTBLUECARD", "Picked up a blue keycard.", false),
    ("GOTYELWCARD", "Picked up a yellow keycard.", false),
    ("GOTREDCARD", "Picked up a red keycard.", false),
    ("GOTBLUESKUL", "Picked up a blue skull key.", false),
    ("GOTYELWSKUL", "Picked up a yellow skull key.", false),
    ("GOTREDSKULL", "Picked up a red skull key.", false),
    ("GOTINVUL", "Invulnerability!", false),
    ("GOTBERSERK", "Berserk!", false),
    ("GOTINVIS", "Partial Invisibility", false),
    ("GOTSUIT", "Radiation Shielding Suit", false),
    ("GOTMAP", "Computer Area Map", false),
    ("GOTVISOR", "Light Amplification Visor", false),
    ("GOTMSPHERE", "MegaSphere!", false),
    ("GOTCLIP", "Picked up a clip.", false),
    ("GOTCLIPBOX", "Picked up a box of bullets.", false),
    ("GOTROCKET", "Picked up a rocket.", false),
    ("GOTROCKBOX", "Picked up a box of rockets.", false),
    ("GOTCELL", "Picked up an energy cell.", false),
    ("GOTCELLBOX", "Picked up an energy cell pack.", false),
    ("GOTSHELLS", "Picked up 4 shotgun shells.", false),
    ("GOTSHELLBOX", "Picked up a box of shotgun shells.", false),
    ("GOTBACKPACK", "Picked up a backpack full of ammo!", false),
    ("GOTBFG9000", "You got the BFG9000!  Oh, yes.", false),
    ("GOTCHAINGUN", "You got the chaingun!", false),
    ("GOTCHAINSAW", "A chainsaw!  Find some meat!", false),
    ("GOTLAUNCHER", "You got the rocket launcher!", false),
    ("GOTPLASMA", "You got the plasma gun!", false),
    ("GOTSHOTGUN", "You got the shotgun!", false),
    ("GOTSHOTGUN2", "You got the super shotgun!", false),
    ("PD_BLUEO", "You need a blue key to activate this object", false),
    ("PD_REDO", "You need a red key to activate this object", false),
    ("PD_YELLOWO", "You need a yellow key to activate this object", false),
    ("PD_BLUEK", "You need a blue key to open this door", false),
    ("PD_REDK", "You need a red key to open this door", false),
    ("PD_YELLOWK", "You need a yellow key to open this door", false),
    ("GGSAVED", "game saved.", false),
    ("HUSTR_MSGU", "[Message unsent]", false),
    ("HUSTR_E1M1", "E1M1: Hangar", false),
    ("HUSTR_E1M2", "E1M2: Nuclear Plant", false),
    ("HUSTR_E1M3", "E1M3: Toxin Refinery", false),
    ("HUSTR_E1M4", "E1M4: Command Control", false),
    ("HUSTR_E1M5", "E1M5: Phobos Lab", false),
    ("HUSTR_E1M6", "E1M6: Central Processing", false),
    ("HUSTR_E1M7", "E1M7: Computer Station", false),
    ("HUSTR_E1M8", "E1M8: Phobos Anomaly", false),
    ("HUSTR_E1M9", "E1M9: Military Base", false),
    ("HUSTR_E2M1", "E2M1: Deimos Anomaly", false),
    ("HUSTR_E2M2", "E2M2: Containment Area", false),
    ("HUSTR_E2M3", "E2M3: Refinery", false),
    ("HUSTR_E2M4", "E2M4: Deimos Lab", false),
    ("HUSTR_E2M5", "E2M5: Command Center", false),
    ("HUSTR_E2M6", "E2M6: Halls of the Damned", false),
    ("HUSTR_E2M7", "E2M7: Spawning Vats", false),
    ("HUSTR_E2M8", "E2M8: Tower of Babel", false),
    ("HUSTR_E2M9", "E2M9: Fortress of Mystery", false),
    ("HUSTR_E3M1", "E3M1: Hell Keep", false),
    ("HUSTR_E3M2", "E3M2: Slough of Despair", false),
    ("HUSTR_E3M3", "E3M3: Pandemonium", false),
    ("HUSTR_E3M4", "E3M4: House of Pain", false),
    ("HUSTR_E3M5", "E3M5: Unholy Cathedral", false),
    ("HUSTR_E3M6", "E3M6: Mt. Erebus", false),
    ("HUSTR_E3M7", "E3M7: Limbo", false),
    ("HUSTR_E3M8", "E3M8: Dis", false),
    ("HUSTR_E3M9", "E3M9: Warrens", false),
    ("HUSTR_E4M1", "E4M1: Hell Beneath", true),
    ("HUSTR_E4M2", "E4M2: Perfect Hatred", true),
    ("HUSTR_E4M3", "E4M3: Sever The Wicked", true),
    ("HUSTR_E4M4", "E4M4: Unruly Evil", true),
    ("HUSTR_E4M5", "E4M5: They Will Repent", true),
    ("HUSTR_E4M6", "E4M6: Against Thee Wickedly", true),
    ("HUSTR_E4M7", "E4M7: And Hell Followed", true),
    ("HUSTR_E4M8", "E4M8: Unto The Cruel", true),
    ("HUSTR_E4M9", "E4M9: Fear", true),
    ("HUSTR_1", "level 1: entryway", false),
    ("HUSTR_2", "level 2: underhalls", false),
    ("HUSTR_3", "level 3: the gantlet", false),
    ("HUSTR_4", "level 4: the focus", false),
    ("HUSTR_5", "level 5: the waste tunnels", false),
    ("HUSTR_6", "level 6: the crusher", false),
    ("HUSTR_7", "level 7: dead simple", false),
    ("HUSTR_8", "level 8: tricks and traps", false),
    ("HUSTR_9", "level 9: the pit", false),
    ("HUSTR_10", "level 10: refueling base", false),
    ("HUSTR_11", "level 11: 'o' of destruction!", false),
    ("HUSTR_12", "level 12: the factory", false),
    ("HUSTR_13", "level 13: downtown", false),
    ("HUSTR_14", "level 14: the inmost dens", false),
    ("HUSTR_15", "level 15: industrial zone", false),
    ("HUSTR_16", "level 16: suburbs", false),
    ("HUSTR_17", "level 17: tenements", false),
    ("HUSTR_18", "level 18: the courtyard", false),
    ("HUSTR_19", "level 19: the citadel", false),
    ("HUSTR_20", "level 20: gotcha!", false),
    ("HUSTR_21", "level 21: nirvana", false),
    ("HUSTR_22", "level 22: the catacombs", false),
    ("HUSTR_23", "level 23: barrels o' fun", false),
    ("HUSTR_24", "level 24: the chasm", false),
    ("HUSTR_25", "level 25: bloodfalls", false),
    ("HUSTR_26", "level 26: the abandoned mines", false),
    ("HUSTR_27", "level 27: monster condo", false),
    ("HUSTR_28", "level 28: the spirit world", false),
    ("HUSTR_29", "level 29: the living end", false),
    ("HUSTR_30", "level 30: icon of sin", false),
    ("HUSTR_31", "level 31: wolfenstein", false),
    ("HUSTR_32", "level 32: grosse", false),
    ("AMSTR_FOLLOWON", "Follow Mode ON", false),
    ("AMSTR_FOLLOWOFF", "Follow Mode OFF", false),
    ("AMSTR_GRIDON", "Grid ON", false),
    ("AMSTR_GRIDOFF", "Grid OFF", false),
    ("AMSTR_MARKEDSPOT", "Marked Spot", false),
    ("AMSTR_MARKSCLEARED", "All Marks Cleared", false),
    ("STSTR_MUS", "Music Change", false),
    ("STSTR_NOMUS", "IMPOSSIBLE SELECTION", false),
    ("STSTR_DQDON", "Degreelessness Mode On", false),
    ("STSTR_DQDOFF", "Degreelessness Mode Off", false),
    ("STSTR_KFAADDED", "Very Happy Ammo Added", false),
    ("STSTR_FAADDED", "Ammo (no keys) Added", false),
    ("STSTR_NCON", "No Clipping Mode ON", false),
    ("STSTR_NCOFF", "No Clipping Mode OFF", false),
    ("STSTR_BEHOLD", "inVuln, Str, Inviso, Rad, Allmap, or Lite-amp", false),
    ("STSTR_BEHOLDX", "Power-up Toggled", false),
    ("STSTR_CHOPPERS", "... doesn't suck - GM", false),
    ("STSTR_CLEV", "Changing Level...", false),
];

/// `(mnemonic, text)` rows for `dialect`, in table order.
pub(crate) fn rows(dialect: Dialect) -> impl Iterator<Item = (&'static str, &'static str)> {
    let ultimate = dialect != Dialect::Doom19;
    STRINGS
        .iter()
        .filter(move |(_, _, ultimate_only)| ultimate || !ultimate_only)
        .map(|&(mnemonic, text, _)| (mnemonic, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_four_only_in_ultimate() {
        let doom = rows(Dialect::Doom19).count();
        let ultimate = rows(Dialect::UltimateDoom19).count();
        assert_eq!(ultimate - doom, 9);
        assert!(rows(Dialect::Doom19).all(|(m, _)| !m.starts_with("HUSTR_E4")));
        assert!(rows(Dialect::Boom).any(|(m, _)| m == "HUSTR_E4M1"));
    }

    #[test]
    fn mnemonics_are_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(STRINGS.iter().all(|(m, _, _)| seen.insert(*m)));
    }
}
