//! Built-in thing rows.

use decohack_foundation::Dialect;

use crate::thing::ThingDef;

// Bits
const SPECIAL: i32 = 0x1;
const SOLID: i32 = 0x2;
const SHOOTABLE: i32 = 0x4;
const NOSECTOR: i32 = 0x8;
const NOBLOCKMAP: i32 = 0x10;
const SPAWNCEILING: i32 = 0x100;
const NOGRAVITY: i32 = 0x200;
const DROPOFF: i32 = 0x400;
const PICKUP: i32 = 0x800;
const NOCLIP: i32 = 0x1000;
const FLOAT: i32 = 0x4000;
const MISSILE: i32 = 0x1_0000;
const SHADOW: i32 = 0x4_0000;
const NOBLOOD: i32 = 0x8_0000;
const COUNTKILL: i32 = 0x40_0000;
const COUNTITEM: i32 = 0x80_0000;
const NOTDMATCH: i32 = 0x200_0000;

const MONSTER: i32 = SOLID | SHOOTABLE | COUNTKILL;
const FLYER: i32 = MONSTER | FLOAT | NOGRAVITY;
const PROJECTILE: i32 = NOBLOCKMAP | MISSILE | DROPOFF | NOGRAVITY;
const EFFECT: i32 = NOBLOCKMAP | NOGRAVITY;
const KEY: i32 = SPECIAL | NOTDMATCH;
const POWERUP: i32 = SPECIAL | COUNTITEM;
const HANGING: i32 = SOLID | SPAWNCEILING | NOGRAVITY;

/// 1-based sound numbers.
mod sfx {
    pub const PISTOL: i32 = 1;
    pub const SHOTGN: i32 = 2;
    pub const PLASMA: i32 = 8;
    pub const RLAUNC: i32 = 14;
    pub const RXPLOD: i32 = 15;
    pub const FIRSHT: i32 = 16;
    pub const FIRXPL: i32 = 17;
    pub const PLPAIN: i32 = 25;
    pub const DMPAIN: i32 = 26;
    pub const POPAIN: i32 = 27;
    pub const VIPAIN: i32 = 28;
    pub const MNPAIN: i32 = 29;
    pub const PEPAIN: i32 = 30;
    pub const POSIT1: i32 = 36;
    pub const POSIT2: i32 = 37;
    pub const BGSIT1: i32 = 39;
    pub const SGTSIT: i32 = 41;
    pub const CACSIT: i32 = 42;
    pub const BRSSIT: i32 = 43;
    pub const CYBSIT: i32 = 44;
    pub const SPISIT: i32 = 45;
    pub const BSPSIT: i32 = 46;
    pub const KNTSIT: i32 = 47;
    pub const VILSIT: i32 = 48;
    pub const MANSIT: i32 = 49;
    pub const PESIT: i32 = 50;
    pub const SKLATK: i32 = 51;
    pub const SGTATK: i32 = 52;
    pub const PLDETH: i32 = 57;
    pub const PODTH1: i32 = 59;
    pub const PODTH2: i32 = 60;
    pub const BGDTH1: i32 = 62;
    pub const SGTDTH: i32 = 64;
    pub const CACDTH: i32 = 65;
    pub const BRSDTH: i32 = 67;
    pub const CYBDTH: i32 = 68;
    pub const SPIDTH: i32 = 69;
    pub const BSPDTH: i32 = 70;
    pub const VILDTH: i32 = 71;
    pub const KNTDTH: i32 = 72;
    pub const PEDTH: i32 = 73;
    pub const SKEDTH: i32 = 74;
    pub const POSACT: i32 = 75;
    pub const BGACT: i32 = 76;
    pub const DMACT: i32 = 77;
    pub const BSPACT: i32 = 78;
    pub const VILACT: i32 = 80;
    pub const BAREXP: i32 = 82;
    pub const BOSPIT: i32 = 94;
    pub const BOSPN: i32 = 97;
    pub const BOSDTH: i32 = 98;
    pub const MANDTH: i32 = 100;
    pub const SSSIT: i32 = 101;
    pub const SSDTH: i32 = 102;
    pub const KEENPN: i32 = 103;
    pub const KEENDT: i32 = 104;
    pub const SKEACT: i32 = 105;
    pub const SKESIT: i32 = 106;
    pub const SKEATK: i32 = 107;
    pub const DGSIT: i32 = 109;
    pub const DGATK: i32 = 110;
    pub const DGACT: i32 = 111;
    pub const DGDTH: i32 = 112;
    pub const DGPAIN: i32 = 113;
}

/// Defaults shared by every row.
pub(crate) const BASE: ThingDef = ThingDef {
    name: "",
    editor_number: -1,
    spawn: 0,
    health: 1000,
    see: 0,
    see_sound: 0,
    reaction_time: 8,
    attack_sound: 0,
    pain: 0,
    pain_chance: 0,
    pain_sound: 0,
    melee: 0,
    missile: 0,
    death: 0,
    xdeath: 0,
    death_sound: 0,
    speed: 0,
    radius: 20,
    height: 16,
    mass: 100,
    damage: 0,
    active_sound: 0,
    flags: 0,
    raise: 0,
};

const DECOR: ThingDef = ThingDef {
    radius: 16,
    flags: SOLID,
    ..BASE
};

const HANGER: ThingDef = ThingDef {
    radius: 16,
    height: 64,
    flags: HANGING,
    ..BASE
};

const CORPSE: ThingDef = BASE;

const ITEM: ThingDef = ThingDef {
    flags: SPECIAL,
    ..BASE
};

static VANILLA: [ThingDef; 137] = [
    ThingDef {
        name: "Player",
        spawn: 149,
        health: 100,
        see: 150,
        pain: 156,
        pain_chance: 255,
        pain_sound: sfx::PLPAIN,
        reaction_time: 0,
        missile: 154,
        death: 158,
        xdeath: 165,
        death_sound: sfx::PLDETH,
        radius: 16,
        height: 56,
        flags: SOLID | SHOOTABLE | DROPOFF | PICKUP | NOTDMATCH,
        ..BASE
    },
    ThingDef {
        name: "Trooper",
        editor_number: 3004,
        spawn: 174,
        health: 20,
        see: 176,
        see_sound: sfx::POSIT1,
        attack_sound: sfx::PISTOL,
        pain: 187,
        pain_chance: 200,
        pain_sound: sfx::POPAIN,
        missile: 184,
        death: 189,
        xdeath: 194,
        death_sound: sfx::PODTH1,
        speed: 8,
        height: 56,
        active_sound: sfx::POSACT,
        flags: MONSTER,
        raise: 203,
        ..BASE
    },
    ThingDef {
        name: "Sargeant",
        editor_number: 9,
        spawn: 207,
        health: 30,
        see: 209,
        see_sound: sfx::POSIT2,
        pain: 220,
        pain_chance: 170,
        pain_sound: sfx::POPAIN,
        missile: 217,
        death: 222,
        xdeath: 227,
        death_sound: sfx::PODTH2,
        speed: 8,
        height: 56,
        active_sound: sfx::POSACT,
        flags: MONSTER,
        raise: 236,
        ..BASE
    },
    ThingDef {
        name: "Archvile",
        editor_number: 64,
        spawn: 241,
        health: 700,
        see: 243,
        see_sound: sfx::VILSIT,
        pain: 269,
        pain_chance: 10,
        pain_sound: sfx::VIPAIN,
        missile: 255,
        death: 271,
        death_sound: sfx::VILDTH,
        speed: 15,
        height: 56,
        mass: 500,
        active_sound: sfx::VILACT,
        flags: MONSTER,
        ..BASE
    },
    ThingDef {
        name: "Archvile Attack",
        spawn: 281,
        flags: EFFECT,
        ..BASE
    },
    ThingDef {
        name: "Revenant",
        editor_number: 66,
        spawn: 321,
        health: 300,
        see: 323,
        see_sound: sfx::SKESIT,
        pain: 343,
        pain_chance: 100,
        pain_sound: sfx::POPAIN,
        melee: 335,
        missile: 339,
        death: 345,
        death_sound: sfx::SKEDTH,
        speed: 10,
        height: 56,
        mass: 500,
        active_sound: sfx::SKEACT,
        flags: MONSTER,
        raise: 351,
        ..BASE
    },
    ThingDef {
        name: "Revenant Fireball",
        spawn: 316,
        see_sound: sfx::SKEATK,
        death: 318,
        death_sound: sfx::BAREXP,
        speed: 10,
        radius: 11,
        height: 8,
        damage: 10,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Fireball Trail",
        spawn: 311,
        flags: EFFECT,
        ..BASE
    },
    ThingDef {
        name: "Mancubus",
        editor_number: 67,
        spawn: 362,
        health: 600,
        see: 364,
        see_sound: sfx::MANSIT,
        pain: 386,
        pain_chance: 80,
        pain_sound: sfx::MNPAIN,
        missile: 376,
        death: 388,
        death_sound: sfx::MANDTH,
        speed: 8,
        radius: 48,
        height: 64,
        mass: 1000,
        active_sound: sfx::POSACT,
        flags: MONSTER,
        raise: 398,
        ..BASE
    },
    ThingDef {
        name: "Mancubus Fireball",
        spawn: 357,
        see_sound: sfx::FIRSHT,
        death: 359,
        death_sound: sfx::FIRXPL,
        speed: 20,
        radius: 6,
        height: 8,
        damage: 8,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Chaingun Sargeant",
        editor_number: 65,
        spawn: 406,
        health: 70,
        see: 408,
        see_sound: sfx::POSIT2,
        pain: 420,
        pain_chance: 170,
        pain_sound: sfx::POPAIN,
        missile: 416,
        death: 422,
        xdeath: 429,
        death_sound: sfx::PODTH2,
        speed: 8,
        height: 56,
        active_sound: sfx::POSACT,
        flags: MONSTER,
        raise: 435,
        ..BASE
    },
    ThingDef {
        name: "Imp",
        editor_number: 3001,
        spawn: 442,
        health: 60,
        see: 444,
        see_sound: sfx::BGSIT1,
        pain: 455,
        pain_chance: 200,
        pain_sound: sfx::POPAIN,
        melee: 452,
        missile: 452,
        death: 457,
        xdeath: 462,
        death_sound: sfx::BGDTH1,
        speed: 8,
        height: 56,
        active_sound: sfx::BGACT,
        flags: MONSTER,
        raise: 470,
        ..BASE
    },
    ThingDef {
        name: "Demon",
        editor_number: 3002,
        spawn: 475,
        health: 150,
        see: 477,
        see_sound: sfx::SGTSIT,
        attack_sound: sfx::SGTATK,
        pain: 488,
        pain_chance: 180,
        pain_sound: sfx::DMPAIN,
        melee: 485,
        death: 490,
        death_sound: sfx::SGTDTH,
        speed: 10,
        radius: 30,
        height: 56,
        mass: 400,
        active_sound: sfx::DMACT,
        flags: MONSTER,
        raise: 496,
        ..BASE
    },
    ThingDef {
        name: "Spectre",
        editor_number: 58,
        spawn: 475,
        health: 150,
        see: 477,
        see_sound: sfx::SGTSIT,
        attack_sound: sfx::SGTATK,
        pain: 488,
        pain_chance: 180,
        pain_sound: sfx::DMPAIN,
        melee: 485,
        death: 490,
        death_sound: sfx::SGTDTH,
        speed: 10,
        radius: 30,
        height: 56,
        mass: 400,
        active_sound: sfx::DMACT,
        flags: MONSTER | SHADOW,
        raise: 496,
        ..BASE
    },
    ThingDef {
        name: "Cacodemon",
        editor_number: 3005,
        spawn: 502,
        health: 400,
        see: 503,
        see_sound: sfx::CACSIT,
        pain: 507,
        pain_chance: 128,
        pain_sound: sfx::DMPAIN,
        missile: 504,
        death: 510,
        death_sound: sfx::CACDTH,
        speed: 8,
        radius: 31,
        height: 56,
        mass: 400,
        active_sound: sfx::DMACT,
        flags: FLYER,
        raise: 516,
        ..BASE
    },
    ThingDef {
        name: "Baron of Hell",
        editor_number: 3003,
        spawn: 527,
        health: 1000,
        see: 529,
        see_sound: sfx::BRSSIT,
        pain: 540,
        pain_chance: 50,
        pain_sound: sfx::DMPAIN,
        melee: 537,
        missile: 537,
        death: 542,
        death_sound: sfx::BRSDTH,
        speed: 8,
        radius: 24,
        height: 64,
        mass: 1000,
        active_sound: sfx::DMACT,
        flags: MONSTER,
        raise: 549,
        ..BASE
    },
    ThingDef {
        name: "Baron Fireball",
        spawn: 522,
        see_sound: sfx::FIRSHT,
        death: 524,
        death_sound: sfx::FIRXPL,
        speed: 15,
        radius: 6,
        height: 16,
        damage: 8,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Hell Knight",
        editor_number: 69,
        spawn: 556,
        health: 500,
        see: 558,
        see_sound: sfx::KNTSIT,
        pain: 569,
        pain_chance: 50,
        pain_sound: sfx::DMPAIN,
        melee: 566,
        missile: 566,
        death: 571,
        death_sound: sfx::KNTDTH,
        speed: 8,
        radius: 24,
        height: 64,
        mass: 1000,
        active_sound: sfx::DMACT,
        flags: MONSTER,
        raise: 578,
        ..BASE
    },
    ThingDef {
        name: "Lost Soul",
        editor_number: 3006,
        spawn: 585,
        health: 100,
        see: 587,
        attack_sound: sfx::SKLATK,
        pain: 593,
        pain_chance: 256,
        pain_sound: sfx::DMPAIN,
        missile: 589,
        death: 595,
        death_sound: sfx::FIRXPL,
        speed: 8,
        radius: 16,
        height: 56,
        mass: 50,
        damage: 3,
        active_sound: sfx::DMACT,
        flags: SOLID | SHOOTABLE | FLOAT | NOGRAVITY,
        ..BASE
    },
    ThingDef {
        name: "Spiderdemon",
        editor_number: 7,
        spawn: 601,
        health: 3000,
        see: 603,
        see_sound: sfx::SPISIT,
        attack_sound: sfx::SHOTGN,
        pain: 619,
        pain_chance: 40,
        pain_sound: sfx::DMPAIN,
        missile: 615,
        death: 621,
        death_sound: sfx::SPIDTH,
        speed: 12,
        radius: 128,
        height: 100,
        mass: 1000,
        active_sound: sfx::DMACT,
        flags: MONSTER,
        ..BASE
    },
    ThingDef {
        name: "Arachnotron",
        editor_number: 68,
        spawn: 632,
        health: 500,
        see: 634,
        see_sound: sfx::BSPSIT,
        pain: 651,
        pain_chance: 128,
        pain_sound: sfx::DMPAIN,
        missile: 647,
        death: 653,
        death_sound: sfx::BSPDTH,
        speed: 12,
        radius: 64,
        height: 64,
        mass: 600,
        active_sound: sfx::BSPACT,
        flags: MONSTER,
        raise: 660,
        ..BASE
    },
    ThingDef {
        name: "Cyberdemon",
        editor_number: 16,
        spawn: 674,
        health: 4000,
        see: 676,
        see_sound: sfx::CYBSIT,
        pain: 690,
        pain_chance: 20,
        pain_sound: sfx::DMPAIN,
        missile: 684,
        death: 691,
        death_sound: sfx::CYBDTH,
        speed: 16,
        radius: 40,
        height: 110,
        mass: 1000,
        active_sound: sfx::DMACT,
        flags: MONSTER,
        ..BASE
    },
    ThingDef {
        name: "Pain Elemental",
        editor_number: 71,
        spawn: 701,
        health: 400,
        see: 702,
        see_sound: sfx::PESIT,
        pain: 712,
        pain_chance: 128,
        pain_sound: sfx::PEPAIN,
        missile: 708,
        death: 714,
        death_sound: sfx::PEDTH,
        speed: 8,
        radius: 31,
        height: 56,
        mass: 400,
        active_sound: sfx::DMACT,
        flags: FLYER,
        raise: 720,
        ..BASE
    },
    ThingDef {
        name: "SS Nazi",
        editor_number: 84,
        spawn: 726,
        health: 50,
        see: 728,
        see_sound: sfx::SSSIT,
        pain: 742,
        pain_chance: 170,
        pain_sound: sfx::POPAIN,
        missile: 736,
        death: 744,
        xdeath: 749,
        death_sound: sfx::SSDTH,
        speed: 8,
        height: 56,
        active_sound: sfx::POSACT,
        flags: MONSTER,
        raise: 758,
        ..BASE
    },
    ThingDef {
        name: "Commander Keen",
        editor_number: 72,
        spawn: 763,
        health: 100,
        pain: 776,
        pain_chance: 256,
        pain_sound: sfx::KEENPN,
        death: 764,
        death_sound: sfx::KEENDT,
        radius: 16,
        height: 72,
        mass: 10_000_000,
        flags: SOLID | SPAWNCEILING | NOGRAVITY | SHOOTABLE | COUNTKILL,
        ..BASE
    },
    ThingDef {
        name: "Big Brain",
        editor_number: 88,
        spawn: 778,
        health: 250,
        pain: 779,
        pain_chance: 255,
        pain_sound: sfx::BOSPN,
        death: 780,
        death_sound: sfx::BOSDTH,
        radius: 16,
        height: 16,
        mass: 10_000_000,
        flags: SOLID | SHOOTABLE,
        ..BASE
    },
    ThingDef {
        name: "Demon Spawner",
        editor_number: 89,
        spawn: 784,
        see: 785,
        height: 32,
        flags: NOBLOCKMAP | NOSECTOR,
        ..BASE
    },
    ThingDef {
        name: "Demon Spawn Spot",
        editor_number: 87,
        spawn: 0,
        height: 32,
        flags: NOBLOCKMAP | NOSECTOR,
        ..BASE
    },
    ThingDef {
        name: "Demon Spawn Cube",
        spawn: 787,
        see_sound: sfx::BOSPIT,
        death_sound: sfx::FIRXPL,
        speed: 10,
        radius: 6,
        height: 32,
        damage: 3,
        flags: MISSILE | DROPOFF | NOGRAVITY | NOCLIP,
        ..BASE
    },
    ThingDef {
        name: "Demon Spawn Fire",
        spawn: 791,
        flags: EFFECT,
        ..BASE
    },
    ThingDef {
        name: "Barrel",
        editor_number: 2035,
        spawn: 806,
        health: 20,
        death: 808,
        death_sound: sfx::BAREXP,
        radius: 10,
        height: 42,
        flags: SOLID | SHOOTABLE | NOBLOOD,
        ..BASE
    },
    ThingDef {
        name: "Imp Fireball",
        spawn: 97,
        see_sound: sfx::FIRSHT,
        death: 99,
        death_sound: sfx::FIRXPL,
        speed: 10,
        radius: 6,
        height: 8,
        damage: 3,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Caco Fireball",
        spawn: 102,
        see_sound: sfx::FIRSHT,
        death: 104,
        death_sound: sfx::FIRXPL,
        speed: 10,
        radius: 6,
        height: 8,
        damage: 5,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Rocket (in flight)",
        spawn: 114,
        see_sound: sfx::RLAUNC,
        death: 127,
        death_sound: sfx::BAREXP,
        speed: 20,
        radius: 11,
        height: 8,
        damage: 20,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Plasma Bullet",
        spawn: 107,
        see_sound: sfx::PLASMA,
        death: 109,
        death_sound: sfx::FIRXPL,
        speed: 25,
        radius: 13,
        height: 8,
        damage: 5,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "BFG Shot",
        spawn: 115,
        death: 117,
        death_sound: sfx::RXPLOD,
        speed: 25,
        radius: 13,
        height: 8,
        damage: 100,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Arach. Fireball",
        spawn: 667,
        see_sound: sfx::PLASMA,
        death: 669,
        death_sound: sfx::FIRXPL,
        speed: 25,
        radius: 13,
        height: 8,
        damage: 5,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Bullet Puff",
        spawn: 93,
        flags: EFFECT,
        ..BASE
    },
    ThingDef {
        name: "Blood Splat",
        spawn: 90,
        flags: NOBLOCKMAP,
        ..BASE
    },
    ThingDef {
        name: "Teleport Flash",
        spawn: 130,
        flags: EFFECT,
        ..BASE
    },
    ThingDef {
        name: "Item Respawn Fog",
        spawn: 142,
        flags: EFFECT,
        ..BASE
    },
    ThingDef {
        name: "Teleport Exit",
        editor_number: 14,
        flags: NOBLOCKMAP | NOSECTOR,
        ..BASE
    },
    ThingDef {
        name: "BFG Hit",
        spawn: 123,
        flags: EFFECT,
        ..BASE
    },
    ThingDef { name: "Green Armor", editor_number: 2018, spawn: 802, ..ITEM },
    ThingDef { name: "Blue Armor", editor_number: 2019, spawn: 804, ..ITEM },
    ThingDef { name: "Health Potion", editor_number: 2014, spawn: 816, flags: POWERUP, ..ITEM },
    ThingDef { name: "Armor Helmet", editor_number: 2015, spawn: 822, flags: POWERUP, ..ITEM },
    ThingDef { name: "Blue Keycard", editor_number: 5, spawn: 828, flags: KEY, ..ITEM },
    ThingDef { name: "Red Keycard", editor_number: 13, spawn: 830, flags: KEY, ..ITEM },
    ThingDef { name: "Yellow Keycard", editor_number: 6, spawn: 832, flags: KEY, ..ITEM },
    ThingDef { name: "Yellow Skull Key", editor_number: 39, spawn: 838, flags: KEY, ..ITEM },
    ThingDef { name: "Red Skull Key", editor_number: 38, spawn: 836, flags: KEY, ..ITEM },
    ThingDef { name: "Blue Skull Key", editor_number: 40, spawn: 834, flags: KEY, ..ITEM },
    ThingDef { name: "Stim Pack", editor_number: 2011, spawn: 840, ..ITEM },
    ThingDef { name: "Medical Kit", editor_number: 2012, spawn: 841, ..ITEM },
    ThingDef { name: "Soul Sphere", editor_number: 2013, spawn: 842, flags: POWERUP, ..ITEM },
    ThingDef { name: "Invulnerability", editor_number: 2022, spawn: 848, flags: POWERUP, ..ITEM },
    ThingDef { name: "Berserk Sphere", editor_number: 2023, spawn: 852, flags: POWERUP, ..ITEM },
    ThingDef { name: "Blur Sphere", editor_number: 2024, spawn: 853, flags: POWERUP, ..ITEM },
    ThingDef { name: "Radiation Suit", editor_number: 2025, spawn: 861, ..ITEM },
    ThingDef { name: "Computer Map", editor_number: 2026, spawn: 862, flags: POWERUP, ..ITEM },
    ThingDef { name: "Light Amp. Visor", editor_number: 2045, spawn: 868, flags: POWERUP, ..ITEM },
    ThingDef { name: "Megasphere", editor_number: 83, spawn: 857, flags: POWERUP, ..ITEM },
    ThingDef { name: "Ammo Clip", editor_number: 2007, spawn: 870, ..ITEM },
    ThingDef { name: "Box of Ammo", editor_number: 2048, spawn: 871, ..ITEM },
    ThingDef { name: "Rocket", editor_number: 2010, spawn: 872, ..ITEM },
    ThingDef { name: "Box of Rockets", editor_number: 2046, spawn: 873, ..ITEM },
    ThingDef { name: "Energy Cell", editor_number: 2047, spawn: 874, ..ITEM },
    ThingDef { name: "Energy Pack", editor_number: 17, spawn: 875, ..ITEM },
    ThingDef { name: "Shells", editor_number: 2008, spawn: 876, ..ITEM },
    ThingDef { name: "Box of Shells", editor_number: 2049, spawn: 877, ..ITEM },
    ThingDef { name: "Backpack", editor_number: 8, spawn: 878, ..ITEM },
    ThingDef { name: "BFG 9000", editor_number: 2006, spawn: 879, ..ITEM },
    ThingDef { name: "Chaingun", editor_number: 2002, spawn: 880, ..ITEM },
    ThingDef { name: "Chainsaw", editor_number: 2005, spawn: 881, ..ITEM },
    ThingDef { name: "Rocket Launcher", editor_number: 2003, spawn: 882, ..ITEM },
    ThingDef { name: "Plasma Gun", editor_number: 2004, spawn: 883, ..ITEM },
    ThingDef { name: "Shotgun", editor_number: 2001, spawn: 884, ..ITEM },
    ThingDef { name: "Super Shotgun", editor_number: 82, spawn: 885, ..ITEM },
    ThingDef { name: "Tall Techno Floor Lamp", editor_number: 85, spawn: 959, ..DECOR },
    ThingDef { name: "Short Techno Floor Lamp", editor_number: 86, spawn: 963, ..DECOR },
    ThingDef { name: "Floor Lamp", editor_number: 2028, spawn: 886, ..DECOR },
    ThingDef { name: "Tall Green Pillar", editor_number: 30, spawn: 907, ..DECOR },
    ThingDef { name: "Short Green Pillar", editor_number: 31, spawn: 908, ..DECOR },
    ThingDef { name: "Tall Red Pillar", editor_number: 32, spawn: 909, ..DECOR },
    ThingDef { name: "Short Red Pillar", editor_number: 33, spawn: 910, ..DECOR },
    ThingDef { name: "Pillar w/Skull", editor_number: 37, spawn: 913, ..DECOR },
    ThingDef { name: "Pillar w/Heart", editor_number: 36, spawn: 924, ..DECOR },
    ThingDef { name: "Eye in Symbol", editor_number: 41, spawn: 917, ..DECOR },
    ThingDef { name: "Flaming Skulls", editor_number: 42, spawn: 921, ..DECOR },
    ThingDef { name: "Grey Tree", editor_number: 43, spawn: 914, ..DECOR },
    ThingDef { name: "Tall Blue Torch", editor_number: 44, spawn: 926, ..DECOR },
    ThingDef { name: "Tall Green Torch", editor_number: 45, spawn: 930, ..DECOR },
    ThingDef { name: "Tall Red Torch", editor_number: 46, spawn: 934, ..DECOR },
    ThingDef { name: "Small Blue Torch", editor_number: 55, spawn: 938, ..DECOR },
    ThingDef { name: "Small Green Torch", editor_number: 56, spawn: 942, ..DECOR },
    ThingDef { name: "Small Red Torch", editor_number: 57, spawn: 946, ..DECOR },
    ThingDef { name: "Brown Stub", editor_number: 47, spawn: 906, ..DECOR },
    ThingDef { name: "Technical Column", editor_number: 48, spawn: 916, ..DECOR },
    ThingDef { name: "Candle", editor_number: 34, spawn: 911, radius: 20, flags: 0, ..DECOR },
    ThingDef { name: "Candelabra", editor_number: 35, spawn: 912, ..DECOR },
    ThingDef { name: "Swaying Body", editor_number: 49, spawn: 888, height: 68, ..HANGER },
    ThingDef { name: "Hanging Arms Out", editor_number: 50, spawn: 902, height: 84, ..HANGER },
    ThingDef { name: "One-legged Body", editor_number: 51, spawn: 903, height: 84, ..HANGER },
    ThingDef { name: "Hanging Torso", editor_number: 52, spawn: 904, height: 68, ..HANGER },
    ThingDef { name: "Hanging Leg", editor_number: 53, spawn: 905, height: 52, ..HANGER },
    ThingDef {
        name: "Hanging Arms Out 2",
        editor_number: 59,
        spawn: 902,
        radius: 20,
        height: 84,
        flags: SPAWNCEILING | NOGRAVITY,
        ..HANGER
    },
    ThingDef {
        name: "Hanging Torso 2",
        editor_number: 60,
        spawn: 904,
        radius: 20,
        height: 68,
        flags: SPAWNCEILING | NOGRAVITY,
        ..HANGER
    },
    ThingDef {
        name: "One-legged Body 2",
        editor_number: 61,
        spawn: 903,
        radius: 20,
        height: 52,
        flags: SPAWNCEILING | NOGRAVITY,
        ..HANGER
    },
    ThingDef {
        name: "Hanging Leg 2",
        editor_number: 62,
        spawn: 905,
        radius: 20,
        height: 52,
        flags: SPAWNCEILING | NOGRAVITY,
        ..HANGER
    },
    ThingDef {
        name: "Swaying Body 2",
        editor_number: 63,
        spawn: 888,
        radius: 20,
        height: 68,
        flags: SPAWNCEILING | NOGRAVITY,
        ..HANGER
    },
    ThingDef { name: "Dead Cacodemon", editor_number: 22, spawn: 515, ..CORPSE },
    ThingDef { name: "Dead Marine", editor_number: 15, spawn: 164, ..CORPSE },
    ThingDef { name: "Dead Trooper", editor_number: 18, spawn: 193, ..CORPSE },
    ThingDef { name: "Dead Demon", editor_number: 21, spawn: 495, ..CORPSE },
    ThingDef { name: "Dead Lost Soul", editor_number: 23, spawn: 600, ..CORPSE },
    ThingDef { name: "Dead Imp", editor_number: 20, spawn: 461, ..CORPSE },
    ThingDef { name: "Dead Sargeant", editor_number: 19, spawn: 226, ..CORPSE },
    ThingDef { name: "Guts and Bones", editor_number: 10, spawn: 173, ..CORPSE },
    ThingDef { name: "Guts and Bones 2", editor_number: 12, spawn: 173, ..CORPSE },
    ThingDef { name: "Skewered Heads", editor_number: 28, spawn: 894, ..DECOR },
    ThingDef { name: "Pool of Blood", editor_number: 24, spawn: 895, ..CORPSE },
    ThingDef { name: "Pole with Skull", editor_number: 27, spawn: 896, ..DECOR },
    ThingDef { name: "Pile of Skulls", editor_number: 29, spawn: 897, ..DECOR },
    ThingDef { name: "Impaled Body", editor_number: 25, spawn: 899, ..DECOR },
    ThingDef { name: "Twitching Body", editor_number: 26, spawn: 900, ..DECOR },
    ThingDef { name: "Large Tree", editor_number: 54, spawn: 915, radius: 32, ..DECOR },
    ThingDef { name: "Flaming Barrel", editor_number: 70, spawn: 813, ..DECOR },
    ThingDef { name: "Hanging Body 1", editor_number: 73, spawn: 950, height: 88, ..HANGER },
    ThingDef { name: "Hanging Body 2", editor_number: 74, spawn: 951, height: 88, ..HANGER },
    ThingDef { name: "Hanging Body 3", editor_number: 75, spawn: 952, ..HANGER },
    ThingDef { name: "Hanging Body 4", editor_number: 76, spawn: 953, ..HANGER },
    ThingDef { name: "Hanging Body 5", editor_number: 77, spawn: 954, ..HANGER },
    ThingDef { name: "Hanging Body 6", editor_number: 78, spawn: 955, ..HANGER },
    ThingDef { name: "Pool Of Blood 1", editor_number: 79, spawn: 956, flags: NOBLOCKMAP, ..CORPSE },
    ThingDef { name: "Pool Of Blood 2", editor_number: 80, spawn: 957, flags: NOBLOCKMAP, ..CORPSE },
    ThingDef { name: "Brains", editor_number: 81, spawn: 958, flags: NOBLOCKMAP, ..CORPSE },
];

const PUSHER: ThingDef = ThingDef {
    spawn: 967,
    radius: 8,
    height: 8,
    mass: 10,
    flags: NOBLOCKMAP,
    ..BASE
};

static BOOM: [ThingDef; 2] = [
    ThingDef { name: "Pusher", editor_number: 5001, ..PUSHER },
    ThingDef { name: "Puller", editor_number: 5002, ..PUSHER },
];

static MBF: [ThingDef; 5] = [
    ThingDef {
        name: "Helper Dog",
        editor_number: 888,
        spawn: 972,
        health: 500,
        see: 974,
        see_sound: sfx::DGSIT,
        attack_sound: sfx::DGATK,
        pain: 985,
        pain_chance: 180,
        pain_sound: sfx::DGPAIN,
        melee: 982,
        death: 987,
        death_sound: sfx::DGDTH,
        speed: 10,
        radius: 12,
        height: 28,
        active_sound: sfx::DGACT,
        flags: MONSTER,
        raise: 993,
        ..BASE
    },
    ThingDef {
        name: "Plasma 1",
        spawn: 967,
        see_sound: sfx::PLASMA,
        death_sound: sfx::RXPLOD,
        speed: 25,
        radius: 13,
        height: 8,
        damage: 4,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Plasma 2",
        spawn: 967,
        see_sound: sfx::PLASMA,
        death_sound: sfx::RXPLOD,
        speed: 25,
        radius: 6,
        height: 8,
        damage: 4,
        flags: PROJECTILE,
        ..BASE
    },
    ThingDef {
        name: "Evil Sceptre",
        editor_number: 2016,
        spawn: 967,
        radius: 10,
        flags: POWERUP,
        ..BASE
    },
    ThingDef {
        name: "Unholy Bible",
        editor_number: 2017,
        spawn: 967,
        radius: 10,
        flags: POWERUP,
        ..BASE
    },
];

/// Thing count for `dialect`.
pub(crate) fn count(dialect: Dialect) -> usize {
    match dialect {
        Dialect::Doom19 | Dialect::UltimateDoom19 => VANILLA.len(),
        Dialect::Boom => VANILLA.len() + BOOM.len(),
        Dialect::Mbf => VANILLA.len() + BOOM.len() + MBF.len(),
        Dialect::Extended => 250,
    }
}

/// Defined rows for `dialect`. May be shorter than [`count`].
pub(crate) fn defined(dialect: Dialect) -> impl Iterator<Item = &'static ThingDef> {
    let boom: &[ThingDef] = if dialect.is_doom19() { &[] } else { &BOOM };
    let mbf: &[ThingDef] = match dialect {
        Dialect::Mbf | Dialect::Extended => &MBF,
        _ => &[],
    };
    VANILLA.iter().chain(boom).chain(mbf)
}
