//! Built-in state rows.
//!
//! Rows past the defined ones are blank `TNT1` rows that loop on
//! themselves; see [`count`].

use decohack_foundation::Dialect;

use super::sprites::Spr::{self, *};
use crate::state::BRIGHT_BIT;

/// One built-in state row. An empty `action` means no pointer.
#[derive(Debug)]
pub(crate) struct StateDef {
    pub sprite: Spr,
    pub frame: i32,
    pub tics: i32,
    pub action: &'static str,
    pub next: usize,
}

/// Frames are a letter from `A` to `]`, with a trailing `*` for bright.
#[allow(clippy::cast_lossless)]
const fn st(sprite: Spr, frame: &str, tics: i32, action: &'static str, next: usize) -> StateDef {
    let bytes = frame.as_bytes();
    let mut frame = (bytes[0] - b'A') as i32;
    if bytes.len() > 1 {
        frame |= BRIGHT_BIT;
    }
    StateDef {
        sprite,
        frame,
        tics,
        action,
        next,
    }
}

static VANILLA: [StateDef; 967] = [
    // Engine placeholders (0)
    st(TROO, "A", -1, "", 0),
    st(SHTG, "E", 0, "Light0", 0),

    // Fist (2)
    st(PUNG, "A", 1, "WeaponReady", 2),
    st(PUNG, "A", 1, "Lower", 3),
    st(PUNG, "A", 1, "Raise", 4),
    st(PUNG, "B", 4, "", 6),
    st(PUNG, "C", 4, "Punch", 7),
    st(PUNG, "D", 5, "", 8),
    st(PUNG, "C", 4, "", 9),
    st(PUNG, "B", 5, "ReFire", 2),

    // Pistol (10)
    st(PISG, "A", 1, "WeaponReady", 10),
    st(PISG, "A", 1, "Lower", 11),
    st(PISG, "A", 1, "Raise", 12),
    st(PISG, "A", 4, "", 14),
    st(PISG, "B", 6, "FirePistol", 15),
    st(PISG, "C", 4, "", 16),
    st(PISG, "B", 5, "ReFire", 10),
    st(PISF, "A*", 7, "Light1", 1),

    // Shotgun (18)
    st(SHTG, "A", 1, "WeaponReady", 18),
    st(SHTG, "A", 1, "Lower", 19),
    st(SHTG, "A", 1, "Raise", 20),
    st(SHTG, "A", 3, "", 22),
    st(SHTG, "A", 7, "FireShotgun", 23),
    st(SHTG, "B", 5, "", 24),
    st(SHTG, "C", 5, "", 25),
    st(SHTG, "D", 4, "", 26),
    st(SHTG, "C", 5, "", 27),
    st(SHTG, "B", 5, "", 28),
    st(SHTG, "A", 3, "", 29),
    st(SHTG, "A", 7, "ReFire", 18),
    st(SHTF, "A*", 4, "Light1", 31),
    st(SHTF, "B*", 3, "Light2", 1),

    // Super shotgun (32)
    st(SHT2, "A", 1, "WeaponReady", 32),
    st(SHT2, "A", 1, "Lower", 33),
    st(SHT2, "A", 1, "Raise", 34),
    st(SHT2, "A", 3, "", 36),
    st(SHT2, "A", 7, "FireShotgun2", 37),
    st(SHT2, "B", 7, "", 38),
    st(SHT2, "C", 7, "CheckReload", 39),
    st(SHT2, "D", 7, "OpenShotgun2", 40),
    st(SHT2, "E", 7, "", 41),
    st(SHT2, "F", 7, "LoadShotgun2", 42),
    st(SHT2, "G", 6, "", 43),
    st(SHT2, "H", 6, "CloseShotgun2", 44),
    st(SHT2, "A", 5, "ReFire", 32),
    st(SHT2, "B", 7, "", 46),
    st(SHT2, "A", 3, "", 33),
    st(SHT2, "I*", 5, "Light1", 48),
    st(SHT2, "J*", 4, "Light2", 1),

    // Chaingun (49)
    st(CHGG, "A", 1, "WeaponReady", 49),
    st(CHGG, "A", 1, "Lower", 50),
    st(CHGG, "A", 1, "Raise", 51),
    st(CHGG, "A", 4, "FireCGun", 53),
    st(CHGG, "B", 4, "FireCGun", 54),
    st(CHGG, "B", 0, "ReFire", 49),
    st(CHGF, "A*", 5, "Light1", 1),
    st(CHGF, "B*", 5, "Light2", 1),

    // Rocket launcher (57)
    st(MISG, "A", 1, "WeaponReady", 57),
    st(MISG, "A", 1, "Lower", 58),
    st(MISG, "A", 1, "Raise", 59),
    st(MISG, "B", 8, "GunFlash", 61),
    st(MISG, "B", 12, "FireMissile", 62),
    st(MISG, "B", 0, "ReFire", 57),
    st(MISF, "A*", 3, "Light1", 64),
    st(MISF, "B*", 4, "", 65),
    st(MISF, "C*", 4, "Light2", 66),
    st(MISF, "D*", 4, "Light2", 1),

    // Chainsaw (67)
    st(SAWG, "C", 4, "WeaponReady", 68),
    st(SAWG, "D", 4, "WeaponReady", 67),
    st(SAWG, "C", 1, "Lower", 69),
    st(SAWG, "C", 1, "Raise", 70),
    st(SAWG, "A", 4, "Saw", 72),
    st(SAWG, "B", 4, "Saw", 73),
    st(SAWG, "B", 0, "ReFire", 67),

    // Plasma rifle (74)
    st(PLSG, "A", 1, "WeaponReady", 74),
    st(PLSG, "A", 1, "Lower", 75),
    st(PLSG, "A", 1, "Raise", 76),
    st(PLSG, "A", 3, "FirePlasma", 78),
    st(PLSG, "B", 20, "ReFire", 74),
    st(PLSF, "A*", 4, "Light1", 1),
    st(PLSF, "B*", 4, "Light1", 1),

    // BFG 9000 (81)
    st(BFGG, "A", 1, "WeaponReady", 81),
    st(BFGG, "A", 1, "Lower", 82),
    st(BFGG, "A", 1, "Raise", 83),
    st(BFGG, "A", 20, "BFGsound", 85),
    st(BFGG, "B", 10, "GunFlash", 86),
    st(BFGG, "B", 10, "FireBFG", 87),
    st(BFGG, "B", 20, "ReFire", 81),
    st(BFGF, "A*", 11, "Light1", 89),
    st(BFGF, "B*", 6, "Light2", 1),

    // Blood, puffs and projectiles (90)
    st(BLUD, "C", 8, "", 91),
    st(BLUD, "B", 8, "", 92),
    st(BLUD, "A", 8, "", 0),
    st(PUFF, "A*", 4, "", 94),
    st(PUFF, "B", 4, "", 95),
    st(PUFF, "C", 4, "", 96),
    st(PUFF, "D", 4, "", 0),
    st(BAL1, "A*", 4, "", 98),
    st(BAL1, "B*", 4, "", 97),
    st(BAL1, "C*", 6, "", 100),
    st(BAL1, "D*", 6, "", 101),
    st(BAL1, "E*", 6, "", 0),
    st(BAL2, "A*", 4, "", 103),
    st(BAL2, "B*", 4, "", 102),
    st(BAL2, "C*", 6, "", 105),
    st(BAL2, "D*", 6, "", 106),
    st(BAL2, "E*", 6, "", 0),
    st(PLSS, "A*", 6, "", 108),
    st(PLSS, "B*", 6, "", 107),
    st(PLSE, "A*", 4, "", 110),
    st(PLSE, "B*", 4, "", 111),
    st(PLSE, "C*", 4, "", 112),
    st(PLSE, "D*", 4, "", 113),
    st(PLSE, "E*", 4, "", 0),
    st(MISL, "A*", 1, "", 114),
    st(BFS1, "A*", 4, "", 116),
    st(BFS1, "B*", 4, "", 115),
    st(BFE1, "A*", 8, "", 118),
    st(BFE1, "B*", 8, "", 119),
    st(BFE1, "C*", 8, "BFGSpray", 120),
    st(BFE1, "D*", 8, "", 121),
    st(BFE1, "E*", 8, "", 122),
    st(BFE1, "F*", 8, "", 0),
    st(BFE2, "A*", 8, "", 124),
    st(BFE2, "B*", 8, "", 125),
    st(BFE2, "C*", 8, "", 126),
    st(BFE2, "D*", 8, "", 0),
    st(MISL, "B*", 8, "Explode", 128),
    st(MISL, "C*", 6, "", 129),
    st(MISL, "D*", 4, "", 0),
    st(TFOG, "A*", 6, "", 131),
    st(TFOG, "B*", 6, "", 132),
    st(TFOG, "A*", 6, "", 133),
    st(TFOG, "B*", 6, "", 134),
    st(TFOG, "C*", 6, "", 135),
    st(TFOG, "D*", 6, "", 136),
    st(TFOG, "E*", 6, "", 137),
    st(TFOG, "F*", 6, "", 138),
    st(TFOG, "G*", 6, "", 139),
    st(TFOG, "H*", 6, "", 140),
    st(TFOG, "I*", 6, "", 141),
    st(TFOG, "J*", 6, "", 0),
    st(IFOG, "A*", 6, "", 143),
    st(IFOG, "B*", 6, "", 144),
    st(IFOG, "A*", 6, "", 145),
    st(IFOG, "B*", 6, "", 146),
    st(IFOG, "C*", 6, "", 147),
    st(IFOG, "D*", 6, "", 148),
    st(IFOG, "E*", 6, "", 0),

    // Player (149)
    st(PLAY, "A", -1, "", 0),
    st(PLAY, "A", 4, "", 151),
    st(PLAY, "B", 4, "", 152),
    st(PLAY, "C", 4, "", 153),
    st(PLAY, "D", 4, "", 150),
    st(PLAY, "E", 12, "", 149),
    st(PLAY, "F*", 6, "", 154),
    st(PLAY, "G", 4, "", 157),
    st(PLAY, "G", 4, "Pain", 149),
    st(PLAY, "H", 10, "", 159),
    st(PLAY, "I", 10, "PlayerScream", 160),
    st(PLAY, "J", 10, "Fall", 161),
    st(PLAY, "K", 10, "", 162),
    st(PLAY, "L", 10, "", 163),
    st(PLAY, "M", 10, "", 164),
    st(PLAY, "N", -1, "", 0),
    st(PLAY, "O", 5, "", 166),
    st(PLAY, "P", 5, "XScream", 167),
    st(PLAY, "Q", 5, "Fall", 168),
    st(PLAY, "R", 5, "", 169),
    st(PLAY, "S", 5, "", 170),
    st(PLAY, "T", 5, "", 171),
    st(PLAY, "U", 5, "", 172),
    st(PLAY, "V", 5, "", 173),
    st(PLAY, "W", -1, "", 0),

    // Zombieman (174)
    st(POSS, "A", 10, "Look", 175),
    st(POSS, "B", 10, "Look", 174),
    st(POSS, "A", 4, "Chase", 177),
    st(POSS, "A", 4, "Chase", 178),
    st(POSS, "B", 4, "Chase", 179),
    st(POSS, "B", 4, "Chase", 180),
    st(POSS, "C", 4, "Chase", 181),
    st(POSS, "C", 4, "Chase", 182),
    st(POSS, "D", 4, "Chase", 183),
    st(POSS, "D", 4, "Chase", 176),
    st(POSS, "E", 10, "FaceTarget", 185),
    st(POSS, "F", 8, "PosAttack", 186),
    st(POSS, "E", 8, "", 176),
    st(POSS, "G", 3, "", 188),
    st(POSS, "G", 3, "Pain", 176),
    st(POSS, "H", 5, "", 190),
    st(POSS, "I", 5, "Scream", 191),
    st(POSS, "J", 5, "Fall", 192),
    st(POSS, "K", 5, "", 193),
    st(POSS, "L", -1, "", 0),
    st(POSS, "M", 5, "", 195),
    st(POSS, "N", 5, "XScream", 196),
    st(POSS, "O", 5, "Fall", 197),
    st(POSS, "P", 5, "", 198),
    st(POSS, "Q", 5, "", 199),
    st(POSS, "R", 5, "", 200),
    st(POSS, "S", 5, "", 201),
    st(POSS, "T", 5, "", 202),
    st(POSS, "U", -1, "", 0),
    st(POSS, "K", 5, "", 204),
    st(POSS, "J", 5, "", 205),
    st(POSS, "I", 5, "", 206),
    st(POSS, "H", 5, "", 176),

    // Shotgun guy (207)
    st(SPOS, "A", 10, "Look", 208),
    st(SPOS, "B", 10, "Look", 207),
    st(SPOS, "A", 3, "Chase", 210),
    st(SPOS, "A", 3, "Chase", 211),
    st(SPOS, "B", 3, "Chase", 212),
    st(SPOS, "B", 3, "Chase", 213),
    st(SPOS, "C", 3, "Chase", 214),
    st(SPOS, "C", 3, "Chase", 215),
    st(SPOS, "D", 3, "Chase", 216),
    st(SPOS, "D", 3, "Chase", 209),
    st(SPOS, "E", 10, "FaceTarget", 218),
    st(SPOS, "F*", 10, "SPosAttack", 219),
    st(SPOS, "E", 10, "", 209),
    st(SPOS, "G", 3, "", 221),
    st(SPOS, "G", 3, "Pain", 209),
    st(SPOS, "H", 5, "", 223),
    st(SPOS, "I", 5, "Scream", 224),
    st(SPOS, "J", 5, "Fall", 225),
    st(SPOS, "K", 5, "", 226),
    st(SPOS, "L", -1, "", 0),
    st(SPOS, "M", 5, "", 228),
    st(SPOS, "N", 5, "XScream", 229),
    st(SPOS, "O", 5, "Fall", 230),
    st(SPOS, "P", 5, "", 231),
    st(SPOS, "Q", 5, "", 232),
    st(SPOS, "R", 5, "", 233),
    st(SPOS, "S", 5, "", 234),
    st(SPOS, "T", 5, "", 235),
    st(SPOS, "U", -1, "", 0),
    st(SPOS, "L", 5, "", 237),
    st(SPOS, "K", 5, "", 238),
    st(SPOS, "J", 5, "", 239),
    st(SPOS, "I", 5, "", 240),
    st(SPOS, "H", 5, "", 209),

    // Arch-vile (241)
    st(VILE, "A", 10, "Look", 242),
    st(VILE, "B", 10, "Look", 241),
    st(VILE, "A", 2, "VileChase", 244),
    st(VILE, "A", 2, "VileChase", 245),
    st(VILE, "B", 2, "VileChase", 246),
    st(VILE, "B", 2, "VileChase", 247),
    st(VILE, "C", 2, "VileChase", 248),
    st(VILE, "C", 2, "VileChase", 249),
    st(VILE, "D", 2, "VileChase", 250),
    st(VILE, "D", 2, "VileChase", 251),
    st(VILE, "E", 2, "VileChase", 252),
    st(VILE, "E", 2, "VileChase", 253),
    st(VILE, "F", 2, "VileChase", 254),
    st(VILE, "F", 2, "VileChase", 243),
    st(VILE, "G*", 0, "VileStart", 256),
    st(VILE, "G*", 10, "FaceTarget", 257),
    st(VILE, "H*", 8, "VileTarget", 258),
    st(VILE, "I*", 8, "FaceTarget", 259),
    st(VILE, "J*", 8, "FaceTarget", 260),
    st(VILE, "K*", 8, "FaceTarget", 261),
    st(VILE, "L*", 8, "FaceTarget", 262),
    st(VILE, "M*", 8, "FaceTarget", 263),
    st(VILE, "N*", 8, "FaceTarget", 264),
    st(VILE, "O*", 8, "VileAttack", 265),
    st(VILE, "P*", 20, "", 243),
    st(VILE, "[*", 10, "", 267),
    st(VILE, "\\*", 10, "", 268),
    st(VILE, "]*", 10, "", 243),
    st(VILE, "Q", 5, "", 270),
    st(VILE, "Q", 5, "Pain", 243),
    st(VILE, "Q", 7, "", 272),
    st(VILE, "R", 7, "Scream", 273),
    st(VILE, "S", 7, "Fall", 274),
    st(VILE, "T", 7, "", 275),
    st(VILE, "U", 7, "", 276),
    st(VILE, "V", 7, "", 277),
    st(VILE, "W", 7, "", 278),
    st(VILE, "X", 5, "", 279),
    st(VILE, "Y", 5, "", 280),
    st(VILE, "Z", -1, "", 0),

    // Arch-vile flame (281)
    st(FIRE, "A*", 2, "StartFire", 282),
    st(FIRE, "B*", 2, "Fire", 283),
    st(FIRE, "A*", 2, "Fire", 284),
    st(FIRE, "B*", 2, "Fire", 285),
    st(FIRE, "C*", 2, "FireCrackle", 286),
    st(FIRE, "B*", 2, "Fire", 287),
    st(FIRE, "C*", 2, "Fire", 288),
    st(FIRE, "B*", 2, "Fire", 289),
    st(FIRE, "C*", 2, "Fire", 290),
    st(FIRE, "D*", 2, "Fire", 291),
    st(FIRE, "C*", 2, "Fire", 292),
    st(FIRE, "D*", 2, "Fire", 293),
    st(FIRE, "C*", 2, "Fire", 294),
    st(FIRE, "D*", 2, "Fire", 295),
    st(FIRE, "E*", 2, "Fire", 296),
    st(FIRE, "D*", 2, "Fire", 297),
    st(FIRE, "E*", 2, "Fire", 298),
    st(FIRE, "D*", 2, "Fire", 299),
    st(FIRE, "E*", 2, "FireCrackle", 300),
    st(FIRE, "F*", 2, "Fire", 301),
    st(FIRE, "E*", 2, "Fire", 302),
    st(FIRE, "F*", 2, "Fire", 303),
    st(FIRE, "E*", 2, "Fire", 304),
    st(FIRE, "F*", 2, "Fire", 305),
    st(FIRE, "G*", 2, "Fire", 306),
    st(FIRE, "H*", 2, "Fire", 307),
    st(FIRE, "G*", 2, "Fire", 308),
    st(FIRE, "H*", 2, "Fire", 309),
    st(FIRE, "G*", 2, "Fire", 310),
    st(FIRE, "H*", 2, "Fire", 0),

    // Revenant tracer (311)
    st(PUFF, "B", 4, "", 312),
    st(PUFF, "C", 4, "", 313),
    st(PUFF, "B", 4, "", 314),
    st(PUFF, "C", 4, "", 315),
    st(PUFF, "D", 4, "", 0),
    st(FATB, "A*", 2, "Tracer", 317),
    st(FATB, "B*", 2, "Tracer", 316),
    st(FBXP, "A*", 8, "", 319),
    st(FBXP, "B*", 6, "", 320),
    st(FBXP, "C*", 4, "", 0),

    // Revenant (321)
    st(SKEL, "A", 10, "Look", 322),
    st(SKEL, "B", 10, "Look", 321),
    st(SKEL, "A", 2, "Chase", 324),
    st(SKEL, "A", 2, "Chase", 325),
    st(SKEL, "B", 2, "Chase", 326),
    st(SKEL, "B", 2, "Chase", 327),
    st(SKEL, "C", 2, "Chase", 328),
    st(SKEL, "C", 2, "Chase", 329),
    st(SKEL, "D", 2, "Chase", 330),
    st(SKEL, "D", 2, "Chase", 331),
    st(SKEL, "E", 2, "Chase", 332),
    st(SKEL, "E", 2, "Chase", 333),
    st(SKEL, "F", 2, "Chase", 334),
    st(SKEL, "F", 2, "Chase", 323),
    st(SKEL, "G", 0, "FaceTarget", 336),
    st(SKEL, "G", 6, "SkelWhoosh", 337),
    st(SKEL, "H", 6, "FaceTarget", 338),
    st(SKEL, "I", 6, "SkelFist", 323),
    st(SKEL, "J*", 0, "FaceTarget", 340),
    st(SKEL, "J*", 10, "FaceTarget", 341),
    st(SKEL, "K", 10, "SkelMissile", 342),
    st(SKEL, "K", 10, "FaceTarget", 323),
    st(SKEL, "L", 5, "", 344),
    st(SKEL, "L", 5, "Pain", 323),
    st(SKEL, "L", 7, "", 346),
    st(SKEL, "M", 7, "", 347),
    st(SKEL, "N", 7, "Scream", 348),
    st(SKEL, "O", 7, "Fall", 349),
    st(SKEL, "P", 7, "", 350),
    st(SKEL, "Q", -1, "", 0),
    st(SKEL, "Q", 5, "", 352),
    st(SKEL, "P", 5, "", 353),
    st(SKEL, "O", 5, "", 354),
    st(SKEL, "N", 5, "", 355),
    st(SKEL, "M", 5, "", 356),
    st(SKEL, "L", 5, "", 323),

    // Mancubus fireball (357)
    st(MANF, "A*", 4, "", 358),
    st(MANF, "B*", 4, "", 357),
    st(MISL, "B*", 8, "", 360),
    st(MISL, "C*", 6, "", 361),
    st(MISL, "D*", 4, "", 0),

    // Mancubus (362)
    st(FATT, "A", 15, "Look", 363),
    st(FATT, "B", 15, "Look", 362),
    st(FATT, "A", 4, "Chase", 365),
    st(FATT, "A", 4, "Chase", 366),
    st(FATT, "B", 4, "Chase", 367),
    st(FATT, "B", 4, "Chase", 368),
    st(FATT, "C", 4, "Chase", 369),
    st(FATT, "C", 4, "Chase", 370),
    st(FATT, "D", 4, "Chase", 371),
    st(FATT, "D", 4, "Chase", 372),
    st(FATT, "E", 4, "Chase", 373),
    st(FATT, "E", 4, "Chase", 374),
    st(FATT, "F", 4, "Chase", 375),
    st(FATT, "F", 4, "Chase", 364),
    st(FATT, "G", 20, "FatRaise", 377),
    st(FATT, "H*", 10, "FatAttack1", 378),
    st(FATT, "I", 5, "FaceTarget", 379),
    st(FATT, "G", 5, "FaceTarget", 380),
    st(FATT, "H*", 10, "FatAttack2", 381),
    st(FATT, "I", 5, "FaceTarget", 382),
    st(FATT, "G", 5, "FaceTarget", 383),
    st(FATT, "H*", 10, "FatAttack3", 384),
    st(FATT, "I", 5, "FaceTarget", 385),
    st(FATT, "G", 5, "FaceTarget", 364),
    st(FATT, "J", 3, "", 387),
    st(FATT, "J", 3, "Pain", 364),
    st(FATT, "K", 6, "", 389),
    st(FATT, "L", 6, "Scream", 390),
    st(FATT, "M", 6, "Fall", 391),
    st(FATT, "N", 6, "", 392),
    st(FATT, "O", 6, "", 393),
    st(FATT, "P", 6, "", 394),
    st(FATT, "Q", 6, "", 395),
    st(FATT, "R", 6, "", 396),
    st(FATT, "S", 6, "", 397),
    st(FATT, "T", -1, "BossDeath", 0),
    st(FATT, "R", 5, "", 399),
    st(FATT, "Q", 5, "", 400),
    st(FATT, "P", 5, "", 401),
    st(FATT, "O", 5, "", 402),
    st(FATT, "N", 5, "", 403),
    st(FATT, "M", 5, "", 404),
    st(FATT, "L", 5, "", 405),
    st(FATT, "K", 5, "", 364),

    // Chaingunner (406)
    st(CPOS, "A", 10, "Look", 407),
    st(CPOS, "B", 10, "Look", 406),
    st(CPOS, "A", 3, "Chase", 409),
    st(CPOS, "A", 3, "Chase", 410),
    st(CPOS, "B", 3, "Chase", 411),
    st(CPOS, "B", 3, "Chase", 412),
    st(CPOS, "C", 3, "Chase", 413),
    st(CPOS, "C", 3, "Chase", 414),
    st(CPOS, "D", 3, "Chase", 415),
    st(CPOS, "D", 3, "Chase", 408),
    st(CPOS, "E", 10, "FaceTarget", 417),
    st(CPOS, "F*", 4, "CPosAttack", 418),
    st(CPOS, "E*", 4, "CPosAttack", 419),
    st(CPOS, "F", 1, "CPosRefire", 417),
    st(CPOS, "G", 3, "", 421),
    st(CPOS, "G", 3, "Pain", 408),
    st(CPOS, "H", 5, "", 423),
    st(CPOS, "I", 5, "Scream", 424),
    st(CPOS, "J", 5, "Fall", 425),
    st(CPOS, "K", 5, "", 426),
    st(CPOS, "L", 5, "", 427),
    st(CPOS, "M", 5, "", 428),
    st(CPOS, "N", -1, "", 0),
    st(CPOS, "O", 5, "", 430),
    st(CPOS, "P", 5, "XScream", 431),
    st(CPOS, "Q", 5, "Fall", 432),
    st(CPOS, "R", 5, "", 433),
    st(CPOS, "S", 5, "", 434),
    st(CPOS, "T", -1, "", 0),
    st(CPOS, "N", 5, "", 436),
    st(CPOS, "M", 5, "", 437),
    st(CPOS, "L", 5, "", 438),
    st(CPOS, "K", 5, "", 439),
    st(CPOS, "J", 5, "", 440),
    st(CPOS, "I", 5, "", 441),
    st(CPOS, "H", 5, "", 408),

    // Imp (442)
    st(TROO, "A", 10, "Look", 443),
    st(TROO, "B", 10, "Look", 442),
    st(TROO, "A", 3, "Chase", 445),
    st(TROO, "A", 3, "Chase", 446),
    st(TROO, "B", 3, "Chase", 447),
    st(TROO, "B", 3, "Chase", 448),
    st(TROO, "C", 3, "Chase", 449),
    st(TROO, "C", 3, "Chase", 450),
    st(TROO, "D", 3, "Chase", 451),
    st(TROO, "D", 3, "Chase", 444),
    st(TROO, "E", 8, "FaceTarget", 453),
    st(TROO, "F", 8, "FaceTarget", 454),
    st(TROO, "G", 6, "TroopAttack", 444),
    st(TROO, "H", 2, "", 456),
    st(TROO, "H", 2, "Pain", 444),
    st(TROO, "I", 8, "", 458),
    st(TROO, "J", 8, "Scream", 459),
    st(TROO, "K", 6, "", 460),
    st(TROO, "L", 6, "Fall", 461),
    st(TROO, "M", -1, "", 0),
    st(TROO, "N", 5, "", 463),
    st(TROO, "O", 5, "XScream", 464),
    st(TROO, "P", 5, "", 465),
    st(TROO, "Q", 5, "Fall", 466),
    st(TROO, "R", 5, "", 467),
    st(TROO, "S", 5, "", 468),
    st(TROO, "T", 5, "", 469),
    st(TROO, "U", -1, "", 0),
    st(TROO, "M", 8, "", 471),
    st(TROO, "L", 8, "", 472),
    st(TROO, "K", 6, "", 473),
    st(TROO, "J", 6, "", 474),
    st(TROO, "I", 6, "", 444),

    // Demon (475)
    st(SARG, "A", 10, "Look", 476),
    st(SARG, "B", 10, "Look", 475),
    st(SARG, "A", 2, "Chase", 478),
    st(SARG, "A", 2, "Chase", 479),
    st(SARG, "B", 2, "Chase", 480),
    st(SARG, "B", 2, "Chase", 481),
    st(SARG, "C", 2, "Chase", 482),
    st(SARG, "C", 2, "Chase", 483),
    st(SARG, "D", 2, "Chase", 484),
    st(SARG, "D", 2, "Chase", 477),
    st(SARG, "E", 8, "FaceTarget", 486),
    st(SARG, "F", 8, "FaceTarget", 487),
    st(SARG, "G", 8, "SargAttack", 477),
    st(SARG, "H", 2, "", 489),
    st(SARG, "H", 2, "Pain", 477),
    st(SARG, "I", 8, "", 491),
    st(SARG, "J", 8, "Scream", 492),
    st(SARG, "K", 4, "", 493),
    st(SARG, "L", 4, "Fall", 494),
    st(SARG, "M", 4, "", 495),
    st(SARG, "N", -1, "", 0),
    st(SARG, "N", 5, "", 497),
    st(SARG, "M", 5, "", 498),
    st(SARG, "L", 5, "", 499),
    st(SARG, "K", 5, "", 500),
    st(SARG, "J", 5, "", 501),
    st(SARG, "I", 5, "", 477),

    // Cacodemon (502)
    st(HEAD, "A", 10, "Look", 502),
    st(HEAD, "A", 3, "Chase", 503),
    st(HEAD, "B", 5, "FaceTarget", 505),
    st(HEAD, "C", 5, "FaceTarget", 506),
    st(HEAD, "D*", 5, "HeadAttack", 503),
    st(HEAD, "E", 3, "", 508),
    st(HEAD, "E", 3, "Pain", 509),
    st(HEAD, "F", 6, "", 503),
    st(HEAD, "G", 8, "", 511),
    st(HEAD, "H", 8, "Scream", 512),
    st(HEAD, "I", 8, "", 513),
    st(HEAD, "J", 8, "", 514),
    st(HEAD, "K", 8, "Fall", 515),
    st(HEAD, "L", -1, "", 0),
    st(HEAD, "L", 8, "", 517),
    st(HEAD, "K", 8, "", 518),
    st(HEAD, "J", 8, "", 519),
    st(HEAD, "I", 8, "", 520),
    st(HEAD, "H", 8, "", 521),
    st(HEAD, "G", 8, "", 503),

    // Baron fireball (522)
    st(BAL7, "A*", 4, "", 523),
    st(BAL7, "B*", 4, "", 522),
    st(BAL7, "C*", 6, "", 525),
    st(BAL7, "D*", 6, "", 526),
    st(BAL7, "E*", 6, "", 0),

    // Baron of Hell (527)
    st(BOSS, "A", 10, "Look", 528),
    st(BOSS, "B", 10, "Look", 527),
    st(BOSS, "A", 3, "Chase", 530),
    st(BOSS, "A", 3, "Chase", 531),
    st(BOSS, "B", 3, "Chase", 532),
    st(BOSS, "B", 3, "Chase", 533),
    st(BOSS, "C", 3, "Chase", 534),
    st(BOSS, "C", 3, "Chase", 535),
    st(BOSS, "D", 3, "Chase", 536),
    st(BOSS, "D", 3, "Chase", 529),
    st(BOSS, "E", 8, "FaceTarget", 538),
    st(BOSS, "F", 8, "FaceTarget", 539),
    st(BOSS, "G", 8, "BruisAttack", 529),
    st(BOSS, "H", 2, "", 541),
    st(BOSS, "H", 2, "Pain", 529),
    st(BOSS, "I", 8, "", 543),
    st(BOSS, "J", 8, "Scream", 544),
    st(BOSS, "K", 8, "", 545),
    st(BOSS, "L", 8, "Fall", 546),
    st(BOSS, "M", 8, "", 547),
    st(BOSS, "N", 8, "", 548),
    st(BOSS, "O", -1, "BossDeath", 0),
    st(BOSS, "O", 8, "", 550),
    st(BOSS, "N", 8, "", 551),
    st(BOSS, "M", 8, "", 552),
    st(BOSS, "L", 8, "", 553),
    st(BOSS, "K", 8, "", 554),
    st(BOSS, "J", 8, "", 555),
    st(BOSS, "I", 8, "", 529),

    // Hell knight (556)
    st(BOS2, "A", 10, "Look", 557),
    st(BOS2, "B", 10, "Look", 556),
    st(BOS2, "A", 3, "Chase", 559),
    st(BOS2, "A", 3, "Chase", 560),
    st(BOS2, "B", 3, "Chase", 561),
    st(BOS2, "B", 3, "Chase", 562),
    st(BOS2, "C", 3, "Chase", 563),
    st(BOS2, "C", 3, "Chase", 564),
    st(BOS2, "D", 3, "Chase", 565),
    st(BOS2, "D", 3, "Chase", 558),
    st(BOS2, "E", 8, "FaceTarget", 567),
    st(BOS2, "F", 8, "FaceTarget", 568),
    st(BOS2, "G", 8, "BruisAttack", 558),
    st(BOS2, "H", 2, "", 570),
    st(BOS2, "H", 2, "Pain", 558),
    st(BOS2, "I", 8, "", 572),
    st(BOS2, "J", 8, "Scream", 573),
    st(BOS2, "K", 8, "", 574),
    st(BOS2, "L", 8, "Fall", 575),
    st(BOS2, "M", 8, "", 576),
    st(BOS2, "N", 8, "", 577),
    st(BOS2, "O", -1, "", 0),
    st(BOS2, "O", 8, "", 579),
    st(BOS2, "N", 8, "", 580),
    st(BOS2, "M", 8, "", 581),
    st(BOS2, "L", 8, "", 582),
    st(BOS2, "K", 8, "", 583),
    st(BOS2, "J", 8, "", 584),
    st(BOS2, "I", 8, "", 558),

    // Lost soul (585)
    st(SKUL, "A*", 10, "Look", 586),
    st(SKUL, "B*", 10, "Look", 585),
    st(SKUL, "A*", 6, "Chase", 588),
    st(SKUL, "B*", 6, "Chase", 587),
    st(SKUL, "C*", 10, "FaceTarget", 590),
    st(SKUL, "D*", 4, "SkullAttack", 591),
    st(SKUL, "C*", 4, "", 592),
    st(SKUL, "D*", 4, "", 591),
    st(SKUL, "E*", 3, "", 594),
    st(SKUL, "E*", 3, "Pain", 587),
    st(SKUL, "F*", 6, "", 596),
    st(SKUL, "G*", 6, "Scream", 597),
    st(SKUL, "H*", 6, "", 598),
    st(SKUL, "I*", 6, "Fall", 599),
    st(SKUL, "J", 6, "", 600),
    st(SKUL, "K", 6, "", 0),

    // Spider mastermind (601)
    st(SPID, "A", 10, "Look", 602),
    st(SPID, "B", 10, "Look", 601),
    st(SPID, "A", 3, "Metal", 604),
    st(SPID, "A", 3, "Chase", 605),
    st(SPID, "B", 3, "Chase", 606),
    st(SPID, "B", 3, "Chase", 607),
    st(SPID, "C", 3, "Metal", 608),
    st(SPID, "C", 3, "Chase", 609),
    st(SPID, "D", 3, "Chase", 610),
    st(SPID, "D", 3, "Chase", 611),
    st(SPID, "E", 3, "Metal", 612),
    st(SPID, "E", 3, "Chase", 613),
    st(SPID, "F", 3, "Chase", 614),
    st(SPID, "F", 3, "Chase", 603),
    st(SPID, "A*", 20, "FaceTarget", 616),
    st(SPID, "G*", 4, "SPosAttack", 617),
    st(SPID, "H*", 4, "SPosAttack", 618),
    st(SPID, "H*", 1, "SpidRefire", 616),
    st(SPID, "I", 3, "", 620),
    st(SPID, "I", 3, "Pain", 603),
    st(SPID, "J", 20, "Scream", 622),
    st(SPID, "K", 10, "Fall", 623),
    st(SPID, "L", 10, "", 624),
    st(SPID, "M", 10, "", 625),
    st(SPID, "N", 10, "", 626),
    st(SPID, "O", 10, "", 627),
    st(SPID, "P", 10, "", 628),
    st(SPID, "Q", 10, "", 629),
    st(SPID, "R", 10, "", 630),
    st(SPID, "S", 30, "", 631),
    st(SPID, "S", -1, "BossDeath", 0),

    // Arachnotron (632)
    st(BSPI, "A", 10, "Look", 633),
    st(BSPI, "B", 10, "Look", 632),
    st(BSPI, "A", 20, "", 635),
    st(BSPI, "A", 3, "BabyMetal", 636),
    st(BSPI, "A", 3, "Chase", 637),
    st(BSPI, "B", 3, "Chase", 638),
    st(BSPI, "B", 3, "Chase", 639),
    st(BSPI, "C", 3, "Chase", 640),
    st(BSPI, "C", 3, "Chase", 641),
    st(BSPI, "D", 3, "BabyMetal", 642),
    st(BSPI, "D", 3, "Chase", 643),
    st(BSPI, "E", 3, "Chase", 644),
    st(BSPI, "E", 3, "Chase", 645),
    st(BSPI, "F", 3, "Chase", 646),
    st(BSPI, "F", 3, "Chase", 635),
    st(BSPI, "A*", 20, "FaceTarget", 648),
    st(BSPI, "G*", 4, "BspiAttack", 649),
    st(BSPI, "H*", 4, "", 650),
    st(BSPI, "H*", 1, "SpidRefire", 648),
    st(BSPI, "I", 3, "", 652),
    st(BSPI, "I", 3, "Pain", 635),
    st(BSPI, "J", 20, "Scream", 654),
    st(BSPI, "K", 7, "Fall", 655),
    st(BSPI, "L", 7, "", 656),
    st(BSPI, "M", 7, "", 657),
    st(BSPI, "N", 7, "", 658),
    st(BSPI, "O", 7, "", 659),
    st(BSPI, "P", -1, "BossDeath", 0),
    st(BSPI, "P", 5, "", 661),
    st(BSPI, "O", 5, "", 662),
    st(BSPI, "N", 5, "", 663),
    st(BSPI, "M", 5, "", 664),
    st(BSPI, "L", 5, "", 665),
    st(BSPI, "K", 5, "", 666),
    st(BSPI, "J", 5, "", 635),

    // Arachnotron plasma (667)
    st(APLS, "A*", 5, "", 668),
    st(APLS, "B*", 5, "", 667),
    st(APBX, "A*", 5, "", 670),
    st(APBX, "B*", 5, "", 671),
    st(APBX, "C*", 5, "", 672),
    st(APBX, "D*", 5, "", 673),
    st(APBX, "E*", 5, "", 0),

    // Cyberdemon (674)
    st(CYBR, "A", 10, "Look", 675),
    st(CYBR, "B", 10, "Look", 674),
    st(CYBR, "A", 3, "Hoof", 677),
    st(CYBR, "A", 3, "Chase", 678),
    st(CYBR, "B", 3, "Chase", 679),
    st(CYBR, "B", 3, "Chase", 680),
    st(CYBR, "C", 3, "Chase", 681),
    st(CYBR, "C", 3, "Chase", 682),
    st(CYBR, "D", 3, "Metal", 683),
    st(CYBR, "D", 3, "Chase", 676),
    st(CYBR, "E", 6, "FaceTarget", 685),
    st(CYBR, "F", 12, "CyberAttack", 686),
    st(CYBR, "E", 12, "FaceTarget", 687),
    st(CYBR, "F", 12, "CyberAttack", 688),
    st(CYBR, "E", 12, "FaceTarget", 689),
    st(CYBR, "F", 12, "CyberAttack", 676),
    st(CYBR, "G", 10, "Pain", 676),
    st(CYBR, "H", 10, "", 692),
    st(CYBR, "I", 10, "Scream", 693),
    st(CYBR, "J", 10, "", 694),
    st(CYBR, "K", 10, "", 695),
    st(CYBR, "L", 10, "", 696),
    st(CYBR, "M", 10, "Fall", 697),
    st(CYBR, "N", 10, "", 698),
    st(CYBR, "O", 10, "", 699),
    st(CYBR, "P", 30, "", 700),
    st(CYBR, "P", -1, "BossDeath", 0),

    // Pain elemental (701)
    st(PAIN, "A", 10, "Look", 701),
    st(PAIN, "A", 3, "Chase", 703),
    st(PAIN, "A", 3, "Chase", 704),
    st(PAIN, "B", 3, "Chase", 705),
    st(PAIN, "B", 3, "Chase", 706),
    st(PAIN, "C", 3, "Chase", 707),
    st(PAIN, "C", 3, "Chase", 702),
    st(PAIN, "D", 5, "FaceTarget", 709),
    st(PAIN, "E", 5, "FaceTarget", 710),
    st(PAIN, "F*", 5, "FaceTarget", 711),
    st(PAIN, "F*", 0, "PainAttack", 702),
    st(PAIN, "G", 6, "", 713),
    st(PAIN, "G", 6, "Pain", 702),
    st(PAIN, "H*", 8, "", 715),
    st(PAIN, "I*", 8, "Scream", 716),
    st(PAIN, "J*", 8, "", 717),
    st(PAIN, "K*", 8, "", 718),
    st(PAIN, "L*", 8, "PainDie", 719),
    st(PAIN, "M*", 8, "", 0),
    st(PAIN, "M", 8, "", 721),
    st(PAIN, "L", 8, "", 722),
    st(PAIN, "K", 8, "", 723),
    st(PAIN, "J", 8, "", 724),
    st(PAIN, "I", 8, "", 725),
    st(PAIN, "H", 8, "", 702),

    // Wolfenstein SS (726)
    st(SSWV, "A", 10, "Look", 727),
    st(SSWV, "B", 10, "Look", 726),
    st(SSWV, "A", 3, "Chase", 729),
    st(SSWV, "A", 3, "Chase", 730),
    st(SSWV, "B", 3, "Chase", 731),
    st(SSWV, "B", 3, "Chase", 732),
    st(SSWV, "C", 3, "Chase", 733),
    st(SSWV, "C", 3, "Chase", 734),
    st(SSWV, "D", 3, "Chase", 735),
    st(SSWV, "D", 3, "Chase", 728),
    st(SSWV, "E", 10, "FaceTarget", 737),
    st(SSWV, "F", 10, "FaceTarget", 738),
    st(SSWV, "G*", 4, "CPosAttack", 739),
    st(SSWV, "F", 6, "FaceTarget", 740),
    st(SSWV, "G*", 4, "CPosAttack", 741),
    st(SSWV, "F", 1, "CPosRefire", 737),
    st(SSWV, "H", 3, "", 743),
    st(SSWV, "H", 3, "Pain", 728),
    st(SSWV, "I", 5, "", 745),
    st(SSWV, "J", 5, "Scream", 746),
    st(SSWV, "K", 5, "Fall", 747),
    st(SSWV, "L", 5, "", 748),
    st(SSWV, "M", -1, "", 0),
    st(SSWV, "N", 5, "", 750),
    st(SSWV, "O", 5, "XScream", 751),
    st(SSWV, "P", 5, "Fall", 752),
    st(SSWV, "Q", 5, "", 753),
    st(SSWV, "R", 5, "", 754),
    st(SSWV, "S", 5, "", 755),
    st(SSWV, "T", 5, "", 756),
    st(SSWV, "U", 5, "", 757),
    st(SSWV, "V", -1, "", 0),
    st(SSWV, "M", 5, "", 759),
    st(SSWV, "L", 5, "", 760),
    st(SSWV, "K", 5, "", 761),
    st(SSWV, "J", 5, "", 762),
    st(SSWV, "I", 5, "", 728),

    // Commander Keen (763)
    st(KEEN, "A", -1, "", 763),
    st(KEEN, "A", 6, "", 765),
    st(KEEN, "B", 6, "", 766),
    st(KEEN, "C", 6, "Scream", 767),
    st(KEEN, "D", 6, "", 768),
    st(KEEN, "E", 6, "", 769),
    st(KEEN, "F", 6, "", 770),
    st(KEEN, "G", 6, "", 771),
    st(KEEN, "H", 6, "", 772),
    st(KEEN, "I", 6, "", 773),
    st(KEEN, "J", 6, "", 774),
    st(KEEN, "K", 6, "KeenDie", 775),
    st(KEEN, "L", -1, "", 0),
    st(KEEN, "M", 4, "", 777),
    st(KEEN, "M", 8, "Pain", 763),

    // Boss brain (778)
    st(BBRN, "A", -1, "", 0),
    st(BBRN, "B", 36, "BrainPain", 778),
    st(BBRN, "A", 100, "BrainScream", 781),
    st(BBRN, "A", 10, "", 782),
    st(BBRN, "A", 10, "", 783),
    st(BBRN, "A", -1, "BrainDie", 0),
    st(SSWV, "A", 10, "Look", 784),
    st(SSWV, "A", 181, "BrainAwake", 786),
    st(SSWV, "A", 150, "BrainSpit", 786),

    // Spawn cube (787)
    st(BOSF, "A*", 3, "SpawnSound", 788),
    st(BOSF, "B*", 3, "SpawnFly", 789),
    st(BOSF, "C*", 3, "SpawnFly", 790),
    st(BOSF, "D*", 3, "SpawnFly", 787),
    st(FIRE, "A*", 4, "Fire", 792),
    st(FIRE, "B*", 4, "Fire", 793),
    st(FIRE, "C*", 4, "Fire", 794),
    st(FIRE, "D*", 4, "Fire", 795),
    st(FIRE, "E*", 4, "Fire", 796),
    st(FIRE, "F*", 4, "Fire", 797),
    st(FIRE, "G*", 4, "Fire", 798),
    st(FIRE, "H*", 4, "Fire", 0),
    st(MISL, "B*", 10, "", 800),
    st(MISL, "C*", 10, "", 801),
    st(MISL, "D*", 10, "BrainExplode", 0),

    // Pickups (802)
    st(ARM1, "A", 6, "", 803),
    st(ARM1, "B*", 7, "", 802),
    st(ARM2, "A", 6, "", 805),
    st(ARM2, "B*", 6, "", 804),
    st(BAR1, "A", 6, "", 807),
    st(BAR1, "B", 6, "", 806),
    st(BEXP, "A*", 5, "", 809),
    st(BEXP, "B*", 5, "Scream", 810),
    st(BEXP, "C*", 5, "", 811),
    st(BEXP, "D*", 10, "Explode", 812),
    st(BEXP, "E*", 10, "", 0),
    st(FCAN, "A*", 4, "", 814),
    st(FCAN, "B*", 4, "", 815),
    st(FCAN, "C*", 4, "", 813),
    st(BON1, "A", 6, "", 817),
    st(BON1, "B", 6, "", 818),
    st(BON1, "C", 6, "", 819),
    st(BON1, "D", 6, "", 820),
    st(BON1, "C", 6, "", 821),
    st(BON1, "B", 6, "", 816),
    st(BON2, "A", 6, "", 823),
    st(BON2, "B", 6, "", 824),
    st(BON2, "C", 6, "", 825),
    st(BON2, "D", 6, "", 826),
    st(BON2, "C", 6, "", 827),
    st(BON2, "B", 6, "", 822),
    st(BKEY, "A", 10, "", 829),
    st(BKEY, "B*", 10, "", 828),
    st(RKEY, "A", 10, "", 831),
    st(RKEY, "B*", 10, "", 830),
    st(YKEY, "A", 10, "", 833),
    st(YKEY, "B*", 10, "", 832),
    st(BSKU, "A", 10, "", 835),
    st(BSKU, "B*", 10, "", 834),
    st(RSKU, "A", 10, "", 837),
    st(RSKU, "B*", 10, "", 836),
    st(YSKU, "A", 10, "", 839),
    st(YSKU, "B*", 10, "", 838),
    st(STIM, "A", -1, "", 0),
    st(MEDI, "A", -1, "", 0),
    st(SOUL, "A*", 6, "", 843),
    st(SOUL, "B*", 6, "", 844),
    st(SOUL, "C*", 6, "", 845),
    st(SOUL, "D*", 6, "", 846),
    st(SOUL, "C*", 6, "", 847),
    st(SOUL, "B*", 6, "", 842),
    st(PINV, "A*", 6, "", 849),
    st(PINV, "B*", 6, "", 850),
    st(PINV, "C*", 6, "", 851),
    st(PINV, "D*", 6, "", 848),
    st(PSTR, "A*", -1, "", 0),
    st(PINS, "A*", 6, "", 854),
    st(PINS, "B*", 6, "", 855),
    st(PINS, "C*", 6, "", 856),
    st(PINS, "D*", 6, "", 853),
    st(MEGA, "A*", 6, "", 858),
    st(MEGA, "B*", 6, "", 859),
    st(MEGA, "C*", 6, "", 860),
    st(MEGA, "D*", 6, "", 857),
    st(SUIT, "A*", -1, "", 0),
    st(PMAP, "A*", 6, "", 863),
    st(PMAP, "B*", 6, "", 864),
    st(PMAP, "C*", 6, "", 865),
    st(PMAP, "D*", 6, "", 866),
    st(PMAP, "C*", 6, "", 867),
    st(PMAP, "B*", 6, "", 862),
    st(PVIS, "A*", 6, "", 869),
    st(PVIS, "B", 6, "", 868),
    st(CLIP, "A", -1, "", 0),
    st(AMMO, "A", -1, "", 0),
    st(ROCK, "A", -1, "", 0),
    st(BROK, "A", -1, "", 0),
    st(CELL, "A", -1, "", 0),
    st(CELP, "A", -1, "", 0),
    st(SHEL, "A", -1, "", 0),
    st(SBOX, "A", -1, "", 0),
    st(BPAK, "A", -1, "", 0),
    st(BFUG, "A", -1, "", 0),
    st(MGUN, "A", -1, "", 0),
    st(CSAW, "A", -1, "", 0),
    st(LAUN, "A", -1, "", 0),
    st(PLAS, "A", -1, "", 0),
    st(SHOT, "A", -1, "", 0),
    st(SGN2, "A", -1, "", 0),

    // Decorations (886)
    st(COLU, "A*", -1, "", 0),
    st(SMT2, "A", -1, "", 0),
    st(GOR1, "A", 10, "", 889),
    st(GOR1, "B", 15, "", 890),
    st(GOR1, "C", 8, "", 891),
    st(GOR1, "B", 6, "", 888),
    st(PLAY, "N", -1, "", 0),
    st(PLAY, "S", -1, "", 0),
    st(POL2, "A", -1, "", 0),
    st(POL5, "A", -1, "", 0),
    st(POL4, "A", -1, "", 0),
    st(POL3, "A*", 6, "", 898),
    st(POL3, "B*", 6, "", 897),
    st(POL1, "A", -1, "", 0),
    st(POL6, "A", 6, "", 901),
    st(POL6, "B", 8, "", 900),
    st(GOR2, "A", -1, "", 0),
    st(GOR3, "A", -1, "", 0),
    st(GOR4, "A", -1, "", 0),
    st(GOR5, "A", -1, "", 0),
    st(SMIT, "A", -1, "", 0),
    st(COL1, "A", -1, "", 0),
    st(COL2, "A", -1, "", 0),
    st(COL3, "A", -1, "", 0),
    st(COL4, "A", -1, "", 0),
    st(CAND, "A*", -1, "", 0),
    st(CBRA, "A*", -1, "", 0),
    st(COL6, "A", -1, "", 0),
    st(TRE1, "A", -1, "", 0),
    st(TRE2, "A", -1, "", 0),
    st(ELEC, "A", -1, "", 0),
    st(CEYE, "A*", 6, "", 918),
    st(CEYE, "B*", 6, "", 919),
    st(CEYE, "C*", 6, "", 920),
    st(CEYE, "B*", 6, "", 917),
    st(FSKU, "A*", 6, "", 922),
    st(FSKU, "B*", 6, "", 923),
    st(FSKU, "C*", 6, "", 921),
    st(COL5, "A", 14, "", 925),
    st(COL5, "B", 14, "", 924),
    st(TBLU, "A*", 4, "", 927),
    st(TBLU, "B*", 4, "", 928),
    st(TBLU, "C*", 4, "", 929),
    st(TBLU, "D*", 4, "", 926),
    st(TGRN, "A*", 4, "", 931),
    st(TGRN, "B*", 4, "", 932),
    st(TGRN, "C*", 4, "", 933),
    st(TGRN, "D*", 4, "", 930),
    st(TRED, "A*", 4, "", 935),
    st(TRED, "B*", 4, "", 936),
    st(TRED, "C*", 4, "", 937),
    st(TRED, "D*", 4, "", 934),
    st(SMBT, "A*", 4, "", 939),
    st(SMBT, "B*", 4, "", 940),
    st(SMBT, "C*", 4, "", 941),
    st(SMBT, "D*", 4, "", 938),
    st(SMGT, "A*", 4, "", 943),
    st(SMGT, "B*", 4, "", 944),
    st(SMGT, "C*", 4, "", 945),
    st(SMGT, "D*", 4, "", 942),
    st(SMRT, "A*", 4, "", 947),
    st(SMRT, "B*", 4, "", 948),
    st(SMRT, "C*", 4, "", 949),
    st(SMRT, "D*", 4, "", 946),
    st(HDB1, "A", -1, "", 0),
    st(HDB2, "A", -1, "", 0),
    st(HDB3, "A", -1, "", 0),
    st(HDB4, "A", -1, "", 0),
    st(HDB5, "A", -1, "", 0),
    st(HDB6, "A", -1, "", 0),
    st(POB1, "A", -1, "", 0),
    st(POB2, "A", -1, "", 0),
    st(BRS1, "A", -1, "", 0),
    st(TLMP, "A*", 4, "", 960),
    st(TLMP, "B*", 4, "", 961),
    st(TLMP, "C*", 4, "", 962),
    st(TLMP, "D*", 4, "", 959),
    st(TLP2, "A*", 4, "", 964),
    st(TLP2, "B*", 4, "", 965),
    st(TLP2, "C*", 4, "", 966),
    st(TLP2, "D*", 4, "", 963),
];

static BOOM: [StateDef; 1] = [st(TNT1, "A", -1, "", 967)];

static MBF: [StateDef; 31] = [
    // Grenade (968)
    st(MISL, "B*", 1000, "Die", 968),
    st(MISL, "B*", 4, "Scream", 970),
    st(MISL, "C*", 6, "Detonate", 971),
    st(MISL, "D*", 10, "", 0),

    // Helper dog (972)
    st(DOGS, "A", 10, "Look", 973),
    st(DOGS, "B", 10, "Look", 972),
    st(DOGS, "A", 2, "Chase", 975),
    st(DOGS, "A", 2, "Chase", 976),
    st(DOGS, "B", 2, "Chase", 977),
    st(DOGS, "B", 2, "Chase", 978),
    st(DOGS, "C", 2, "Chase", 979),
    st(DOGS, "C", 2, "Chase", 980),
    st(DOGS, "D", 2, "Chase", 981),
    st(DOGS, "D", 2, "Chase", 974),
    st(DOGS, "E", 8, "FaceTarget", 983),
    st(DOGS, "F", 8, "FaceTarget", 984),
    st(DOGS, "G", 8, "SargAttack", 974),
    st(DOGS, "H", 2, "", 986),
    st(DOGS, "H", 2, "Pain", 974),
    st(DOGS, "I", 8, "", 988),
    st(DOGS, "J", 8, "Scream", 989),
    st(DOGS, "K", 4, "", 990),
    st(DOGS, "L", 4, "Fall", 991),
    st(DOGS, "M", 4, "", 992),
    st(DOGS, "N", -1, "", 0),
    st(DOGS, "N", 5, "", 994),
    st(DOGS, "M", 5, "", 995),
    st(DOGS, "L", 5, "", 996),
    st(DOGS, "K", 5, "", 997),
    st(DOGS, "J", 5, "", 998),
    st(DOGS, "I", 5, "", 974),
];

/// State count for `dialect`.
pub(crate) fn count(dialect: Dialect) -> usize {
    match dialect {
        Dialect::Doom19 | Dialect::UltimateDoom19 => VANILLA.len(),
        Dialect::Boom => VANILLA.len() + BOOM.len(),
        Dialect::Mbf => 1089,
        Dialect::Extended => 4000,
    }
}

/// Defined rows for `dialect`, in table order. May be shorter than
/// [`count`].
pub(crate) fn defined(dialect: Dialect) -> impl Iterator<Item = &'static StateDef> {
    let boom: &[StateDef] = if dialect.is_doom19() { &[] } else { &BOOM };
    let mbf: &[StateDef] = match dialect {
        Dialect::Mbf | Dialect::Extended => &MBF,
        _ => &[],
    };
    VANILLA.iter().chain(boom).chain(mbf)
}

/// Sprite index used for blank rows.
pub(crate) const BLANK_SPRITE: Spr = TNT1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_indices_stay_in_table() {
        for dialect in Dialect::ALL {
            let count = count(dialect);
            let defined: Vec<_> = defined(dialect).collect();
            assert!(defined.len() <= count);
            assert!(defined.iter().all(|s| s.next < count));
        }
    }

    #[test]
    fn frame_decoding() {
        assert_eq!(VANILLA[17].frame, BRIGHT_BIT);
        assert_eq!(VANILLA[1].frame, 4);
        assert_eq!(VANILLA[174].action, "Look");
        assert_eq!(MBF[0].frame, 1 | BRIGHT_BIT);
    }
}
