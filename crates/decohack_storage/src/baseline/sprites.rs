//! Sprite name tables.

use decohack_foundation::{Dialect, FeatureLevel};

/// Sprites referenced by built-in state rows. Discriminants are table
/// indices.
#[allow(non_camel_case_types, clippy::upper_case_acronyms, dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub(crate) enum Spr {
    TROO, SHTG, PUNG, PISG, PISF, SHTF, SHT2, CHGG, CHGF, MISG, MISF, SAWG, PLSG, PLSF, BFGG,
    BFGF, BLUD, PUFF, BAL1, BAL2, PLSS, PLSE, MISL, BFS1, BFE1, BFE2, TFOG, IFOG, PLAY, POSS,
    SPOS, VILE, FIRE, FATB, FBXP, SKEL, MANF, FATT, CPOS, SARG, HEAD, BAL7, BOSS, BOS2, SKUL,
    SPID, BSPI, APLS, APBX, CYBR, PAIN, SSWV, KEEN, BBRN, BOSF, ARM1, ARM2, BAR1, BEXP, FCAN,
    BON1, BON2, BKEY, RKEY, YKEY, BSKU, RSKU, YSKU, STIM, MEDI, SOUL, PINV, PSTR, PINS, MEGA,
    SUIT, PMAP, PVIS, CLIP, AMMO, ROCK, BROK, CELL, CELP, SHEL, SBOX, BPAK, BFUG, MGUN, CSAW,
    LAUN, PLAS, SHOT, SGN2, COLU, SMT2, GOR1, POL2, POL5, POL4, POL3, POL1, POL6, GOR2, GOR3,
    GOR4, GOR5, SMIT, COL1, COL2, COL3, COL4, CAND, CBRA, COL6, TRE1, TRE2, ELEC, CEYE, FSKU,
    COL5, TBLU, TGRN, TRED, SMBT, SMGT, SMRT, HDB1, HDB2, HDB3, HDB4, HDB5, HDB6, POB1, POB2,
    BRS1, TLMP, TLP2, TNT1, DOGS, PLS1, PLS2, BON3, BON4,
}

impl Spr {
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

const VANILLA: [&str; 138] = [
    "TROO", "SHTG", "PUNG", "PISG", "PISF", "SHTF", "SHT2", "CHGG", "CHGF", "MISG", "MISF",
    "SAWG", "PLSG", "PLSF", "BFGG", "BFGF", "BLUD", "PUFF", "BAL1", "BAL2", "PLSS", "PLSE",
    "MISL", "BFS1", "BFE1", "BFE2", "TFOG", "IFOG", "PLAY", "POSS", "SPOS", "VILE", "FIRE",
    "FATB", "FBXP", "SKEL", "MANF", "FATT", "CPOS", "SARG", "HEAD", "BAL7", "BOSS", "BOS2",
    "SKUL", "SPID", "BSPI", "APLS", "APBX", "CYBR", "PAIN", "SSWV", "KEEN", "BBRN", "BOSF",
    "ARM1", "ARM2", "BAR1", "BEXP", "FCAN", "BON1", "BON2", "BKEY", "RKEY", "YKEY", "BSKU",
    "RSKU", "YSKU", "STIM", "MEDI", "SOUL", "PINV", "PSTR", "PINS", "MEGA", "SUIT", "PMAP",
    "PVIS", "CLIP", "AMMO", "ROCK", "BROK", "CELL", "CELP", "SHEL", "SBOX", "BPAK", "BFUG",
    "MGUN", "CSAW", "LAUN", "PLAS", "SHOT", "SGN2", "COLU", "SMT2", "GOR1", "POL2", "POL5",
    "POL4", "POL3", "POL1", "POL6", "GOR2", "GOR3", "GOR4", "GOR5", "SMIT", "COL1", "COL2",
    "COL3", "COL4", "CAND", "CBRA", "COL6", "TRE1", "TRE2", "ELEC", "CEYE", "FSKU", "COL5",
    "TBLU", "TGRN", "TRED", "SMBT", "SMGT", "SMRT", "HDB1", "HDB2", "HDB3", "HDB4", "HDB5",
    "HDB6", "POB1", "POB2", "BRS1", "TLMP", "TLP2",
];

const BOOM: [&str; 1] = ["TNT1"];

const MBF: [&str; 5] = ["DOGS", "PLS1", "PLS2", "BON3", "BON4"];

/// Sprite count for `dialect`.
pub(crate) fn count(dialect: Dialect) -> usize {
    match dialect {
        Dialect::Doom19 | Dialect::UltimateDoom19 => VANILLA.len(),
        Dialect::Boom => VANILLA.len() + BOOM.len(),
        Dialect::Mbf => VANILLA.len() + BOOM.len() + MBF.len(),
        Dialect::Extended => 245,
    }
}

/// Sprite names for `dialect`, in table order.
pub(crate) fn names(dialect: Dialect) -> Vec<String> {
    let mut names: Vec<String> = VANILLA.iter().map(|s| (*s).to_string()).collect();
    let level = dialect.feature_level();
    if level >= FeatureLevel::Boom {
        names.extend(BOOM.iter().map(|s| (*s).to_string()));
    }
    if level >= FeatureLevel::Mbf {
        names.extend(MBF.iter().map(|s| (*s).to_string()));
    }
    if dialect == Dialect::Extended {
        names.push("BLD2".to_string());
        names.extend((0..100).map(|n| format!("SP{n:02}")));
    }
    debug_assert_eq!(names.len(), count(dialect));
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_names() {
        for dialect in Dialect::ALL {
            assert_eq!(names(dialect).len(), count(dialect));
        }
    }

    #[test]
    fn enum_matches_table() {
        let names = names(Dialect::Mbf);
        assert_eq!(names[Spr::TROO.index()], "TROO");
        assert_eq!(names[Spr::TLP2.index()], "TLP2");
        assert_eq!(names[Spr::TNT1.index()], "TNT1");
        assert_eq!(names[Spr::DOGS.index()], "DOGS");
    }

    #[test]
    fn extended_sprites() {
        let names = names(Dialect::Extended);
        assert_eq!(names[144], "BLD2");
        assert_eq!(names[145], "SP00");
        assert_eq!(names[244], "SP99");
    }
}
