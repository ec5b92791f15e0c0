//! Built-in sound rows.

use decohack_foundation::Dialect;

/// Lump name without `DS` and playback priority. Sound numbers are
/// 1-based, so row 0 here is sound 1.
static VANILLA: [(&str, i32); 108] = [
    ("PISTOL", 64),
    ("SHOTGN", 64),
    ("SGCOCK", 64),
    ("DSHTGN", 64),
    ("DBOPN", 64),
    ("DBCLS", 64),
    ("DBLOAD", 64),
    ("PLASMA", 64),
    ("BFG", 64),
    ("SAWUP", 64),
    ("SAWIDL", 118),
    ("SAWFUL", 64),
    ("SAWHIT", 64),
    ("RLAUNC", 64),
    ("RXPLOD", 70),
    ("FIRSHT", 70),
    ("FIRXPL", 70),
    ("PSTART", 100),
    ("PSTOP", 100),
    ("DOROPN", 100),
    ("DORCLS", 100),
    ("STNMOV", 119),
    ("SWTCHN", 78),
    ("SWTCHX", 78),
    ("PLPAIN", 96),
    ("DMPAIN", 96),
    ("POPAIN", 96),
    ("VIPAIN", 96),
    ("MNPAIN", 96),
    ("PEPAIN", 96),
    ("SLOP", 78),
    ("ITEMUP", 78),
    ("WPNUP", 78),
    ("OOF", 96),
    ("TELEPT", 32),
    ("POSIT1", 98),
    ("POSIT2", 98),
    ("POSIT3", 98),
    ("BGSIT1", 98),
    ("BGSIT2", 98),
    ("SGTSIT", 98),
    ("CACSIT", 98),
    ("BRSSIT", 94),
    ("CYBSIT", 92),
    ("SPISIT", 90),
    ("BSPSIT", 90),
    ("KNTSIT", 90),
    ("VILSIT", 90),
    ("MANSIT", 90),
    ("PESIT", 90),
    ("SKLATK", 70),
    ("SGTATK", 70),
    ("SKEPCH", 70),
    ("VILATK", 70),
    ("CLAW", 70),
    ("SKESWG", 70),
    ("PLDETH", 32),
    ("PDIEHI", 32),
    ("PODTH1", 70),
    ("PODTH2", 70),
    ("PODTH3", 70),
    ("BGDTH1", 70),
    ("BGDTH2", 70),
    ("SGTDTH", 70),
    ("CACDTH", 70),
    ("SKLDTH", 70),
    ("BRSDTH", 32),
    ("CYBDTH", 32),
    ("SPIDTH", 32),
    ("BSPDTH", 32),
    ("VILDTH", 32),
    ("KNTDTH", 32),
    ("PEDTH", 32),
    ("SKEDTH", 32),
    ("POSACT", 120),
    ("BGACT", 120),
    ("DMACT", 120),
    ("BSPACT", 100),
    ("BSPWLK", 100),
    ("VILACT", 100),
    ("NOWAY", 78),
    ("BAREXP", 60),
    ("PUNCH", 64),
    ("HOOF", 70),
    ("METAL", 70),
    ("CHGUN", 64),
    ("TINK", 60),
    ("BDOPN", 100),
    ("BDCLS", 100),
    ("ITMBK", 100),
    ("FLAME", 32),
    ("FLAMST", 32),
    ("GETPOW", 60),
    ("BOSPIT", 70),
    ("BOSCUB", 70),
    ("BOSSIT", 70),
    ("BOSPN", 70),
    ("BOSDTH", 70),
    ("MANATK", 70),
    ("MANDTH", 70),
    ("SSSIT", 70),
    ("SSDTH", 70),
    ("KEENPN", 70),
    ("KEENDT", 70),
    ("SKEACT", 70),
    ("SKESIT", 70),
    ("SKEATK", 70),
    ("RADIO", 60),
];

static MBF: [(&str, i32); 5] = [
    ("DGSIT", 98),
    ("DGATK", 70),
    ("DGACT", 120),
    ("DGDTH", 70),
    ("DGPAIN", 96),
];

/// Priority of the free extended slots.
const EXTENDED_PRIORITY: i32 = 127;

/// Sound count for `dialect`.
pub(crate) fn count(dialect: Dialect) -> usize {
    match dialect {
        Dialect::Doom19 | Dialect::UltimateDoom19 | Dialect::Boom => VANILLA.len(),
        Dialect::Mbf => VANILLA.len() + MBF.len(),
        Dialect::Extended => VANILLA.len() + MBF.len() + 200,
    }
}

/// `(name, priority)` rows for `dialect`.
pub(crate) fn rows(dialect: Dialect) -> Vec<(String, i32)> {
    let mut rows: Vec<(String, i32)> = VANILLA
        .iter()
        .map(|&(name, priority)| (name.to_string(), priority))
        .collect();
    if matches!(dialect, Dialect::Mbf | Dialect::Extended) {
        rows.extend(MBF.iter().map(|&(name, priority)| (name.to_string(), priority)));
    }
    if dialect == Dialect::Extended {
        rows.extend((0..200).map(|n| (format!("FRE{n:03}"), EXTENDED_PRIORITY)));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_rows() {
        for dialect in Dialect::ALL {
            assert_eq!(rows(dialect).len(), count(dialect));
        }
    }

    #[test]
    fn known_priorities() {
        let rows = rows(Dialect::Extended);
        assert_eq!(rows[0], ("PISTOL".to_string(), 64));
        assert_eq!(rows[10], ("SAWIDL".to_string(), 118));
        assert_eq!(rows[107], ("RADIO".to_string(), 60));
        assert_eq!(rows[108].0, "DGSIT");
        assert_eq!(rows[312], ("FRE199".to_string(), 127));
    }
}
