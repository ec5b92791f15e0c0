//! The action-pointer registry.
//!
//! Every named engine callback a state may carry, built once as a static
//! table and looked up case-insensitively by its `A_`-prefixed name.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use decohack_foundation::FeatureLevel;

/// Where a pointer first appeared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Present in the Doom 1.9 executable.
    Doom19,
    /// Added by MBF.
    Mbf,
}

impl PointerKind {
    /// Lowest feature level that can express pointers of this kind.
    #[must_use]
    pub const fn feature_level(self) -> FeatureLevel {
        match self {
            Self::Doom19 => FeatureLevel::Doom19,
            Self::Mbf => FeatureLevel::Mbf,
        }
    }
}

/// Meaning of one pointer parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamType {
    /// A plain integer.
    Int,
    /// A thing table index.
    Thing,
    /// A state table index.
    State,
    /// A sound table position.
    Sound,
    /// An angle in degrees.
    Angle,
    /// A linedef special number.
    Special,
    /// A sector tag.
    Tag,
}

/// A named callback attachable to a state.
#[derive(Debug, PartialEq, Eq)]
pub struct ActionPointer {
    mnemonic: &'static str,
    frame: Option<usize>,
    weapon: bool,
    params: &'static [ParamType],
    kind: PointerKind,
    usage: &'static [&'static str],
}

impl ActionPointer {
    /// The no-op pointer. Never resolvable by name.
    pub const NULL: ActionPointer = ActionPointer::doom19(0, false, "NULL");

    const fn doom19(frame: usize, weapon: bool, mnemonic: &'static str) -> Self {
        Self {
            mnemonic,
            frame: Some(frame),
            weapon,
            params: &[],
            kind: PointerKind::Doom19,
            usage: &[],
        }
    }

    const fn with_usage(self, usage: &'static [&'static str]) -> Self {
        Self { usage, ..self }
    }

    const fn mbf(mnemonic: &'static str, params: &'static [ParamType]) -> Self {
        Self {
            mnemonic,
            frame: None,
            weapon: false,
            params,
            kind: PointerKind::Mbf,
            usage: &[],
        }
    }

    /// Name without the `A_` prefix.
    #[must_use]
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// The state that carried this pointer in the Doom 1.9 executable.
    #[must_use]
    pub fn frame(&self) -> Option<usize> {
        self.frame
    }

    /// Whether this pointer acts on the player's weapon rather than an actor.
    #[must_use]
    pub fn is_weapon(&self) -> bool {
        self.weapon
    }

    /// Parameter types, in order.
    #[must_use]
    pub fn params(&self) -> &'static [ParamType] {
        self.params
    }

    /// What the pointer does, one line per paragraph. Empty when
    /// undocumented.
    #[must_use]
    pub fn usage(&self) -> &'static [&'static str] {
        self.usage
    }

    /// Origin classification.
    #[must_use]
    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Whether this is a parameterized MBF pointer taking misc1/misc2.
    #[must_use]
    pub fn is_mbf(&self) -> bool {
        self.kind == PointerKind::Mbf && !self.params.is_empty()
    }

    /// Whether this is the no-op pointer.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.mnemonic == "NULL"
    }
}

impl fmt::Display for ActionPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("NULL")
        } else {
            write!(f, "A_{}", self.mnemonic)
        }
    }
}

static NULL_POINTER: ActionPointer = ActionPointer::NULL;

/// Returns the shared no-op pointer.
#[must_use]
pub fn null_pointer() -> &'static ActionPointer {
    &NULL_POINTER
}

use ParamType::{Angle, Int, Sound, Special, State, Tag, Thing};

static POINTERS: &[ActionPointer] = &[
    ActionPointer::doom19(1, true, "Light0").with_usage(&[
        "Resets the player's extra light level to 0.",
        "Ends the flash started by A_Light1 or A_Light2.",
    ]),
    ActionPointer::doom19(2, true, "WeaponReady").with_usage(&[
        "Lets the player fire or switch weapons.",
        "Enters the weapon's FIRE state when fire is held and bobs the weapon with player movement.",
    ]),
    ActionPointer::doom19(3, true, "Lower").with_usage(&[
        "Lowers the weapon one step.",
        "Once off screen, switches to the pending weapon and enters its RAISE state.",
    ]),
    ActionPointer::doom19(4, true, "Raise").with_usage(&[
        "Raises the weapon one step.",
        "Once fully raised, enters the weapon's READY state.",
    ]),
    ActionPointer::doom19(6, true, "Punch").with_usage(&[
        "Melee hitscan from the player for 2 x 1d10 damage, times 10 with Berserk.",
        "Plays PUNCH and turns the player toward the target on a hit. Range is 64 units.",
    ]),
    ActionPointer::doom19(9, true, "ReFire").with_usage(&[
        "Fires again if fire is still held.",
        "Increments the player's refire count, or resets it when the player stops firing.",
    ]),
    ActionPointer::doom19(14, true, "FirePistol").with_usage(&[
        "Fires one pistol bullet for 5 x 1d3 damage and uses 1 ammo.",
        "Perfectly accurate while the refire count is 0.",
    ]),
    ActionPointer::doom19(17, true, "Light1").with_usage(&[
        "Sets the player's extra light level to 1.",
    ]),
    ActionPointer::doom19(22, true, "FireShotgun").with_usage(&[
        "Fires 7 pellets for 5 x 1d3 damage each and uses 1 ammo.",
        "Plays SHOTGN and shows the FLASH state.",
    ]),
    ActionPointer::doom19(31, true, "Light2").with_usage(&[
        "Sets the player's extra light level to 2.",
    ]),
    ActionPointer::doom19(36, true, "FireShotgun2").with_usage(&[
        "Fires 20 spread pellets for 5 x 1d3 damage each and uses 2 ammo.",
        "Plays DSHTGN and shows the FLASH state.",
    ]),
    ActionPointer::doom19(38, true, "CheckReload").with_usage(&[
        "Checks the weapon's ammo, switching weapons if there is not enough to fire.",
    ]),
    ActionPointer::doom19(39, true, "OpenShotgun2").with_usage(&[
        "Plays DBOPN.",
    ]),
    ActionPointer::doom19(41, true, "LoadShotgun2").with_usage(&[
        "Plays DBLOAD.",
    ]),
    ActionPointer::doom19(43, true, "CloseShotgun2").with_usage(&[
        "Plays DBCLS, then performs A_ReFire.",
    ]),
    ActionPointer::doom19(52, true, "FireCGun").with_usage(&[
        "Fires one chaingun bullet for 5 x 1d3 damage and uses 1 ammo.",
        "Shows the first or second FLASH frame, following the current frame.",
    ]),
    ActionPointer::doom19(60, true, "GunFlash").with_usage(&[
        "Shows the weapon's FLASH state and sets the player to the attack frame.",
    ]),
    ActionPointer::doom19(61, true, "FireMissile").with_usage(&[
        "Fires a rocket and uses 1 ammo.",
    ]),
    ActionPointer::doom19(71, true, "Saw").with_usage(&[
        "Melee hitscan from the player for 2 x 1d10 damage.",
        "Plays SAWFUL on a hit and SAWHIT otherwise, and pulls the player toward the target.",
    ]),
    ActionPointer::doom19(77, true, "FirePlasma").with_usage(&[
        "Fires a plasma ball and uses 1 ammo.",
        "Shows a random FLASH frame.",
    ]),
    ActionPointer::doom19(84, true, "BFGsound").with_usage(&[
        "Plays BFG.",
    ]),
    ActionPointer::doom19(86, true, "FireBFG").with_usage(&[
        "Fires a BFG ball and uses the BFG cell cost in ammo.",
    ]),
    ActionPointer::doom19(119, false, "BFGSpray").with_usage(&[
        "Fires 40 tracer rays from the BFG ball's owner, spawning BFG hit effects on targets.",
    ]),
    ActionPointer::doom19(127, false, "Explode").with_usage(&[
        "Deals 128 radius damage around the calling actor, blamed on its target.",
    ]),
    ActionPointer::doom19(157, false, "Pain").with_usage(&[
        "Plays the actor's pain sound.",
    ]),
    ActionPointer::doom19(159, false, "PlayerScream").with_usage(&[
        "Plays the player death sound, or PDIEHI for a gib death.",
    ]),
    ActionPointer::doom19(160, false, "Fall").with_usage(&[
        "Makes the actor non-solid so it can be walked over.",
    ]),
    ActionPointer::doom19(166, false, "XScream").with_usage(&[
        "Plays SLOP.",
    ]),
    ActionPointer::doom19(174, false, "Look").with_usage(&[
        "Waits for a target to appear, then enters the SEE state.",
        "Plays the actor's see sound when it wakes.",
    ]),
    ActionPointer::doom19(176, false, "Chase").with_usage(&[
        "Moves toward the target and attacks when it can.",
        "Enters the MELEE or MISSILE state when an attack is possible.",
    ]),
    ActionPointer::doom19(184, false, "FaceTarget").with_usage(&[
        "Turns the actor to face its target.",
    ]),
    ActionPointer::doom19(185, false, "PosAttack").with_usage(&[
        "Fires one bullet at the target for 3 x 1d5 damage and plays PISTOL.",
    ]),
    ActionPointer::doom19(190, false, "Scream").with_usage(&[
        "Plays the actor's death sound. Boss death sounds play at full volume.",
    ]),
    ActionPointer::doom19(243, false, "VileChase").with_usage(&[
        "Like A_Chase, but first looks for a corpse nearby to resurrect.",
    ]),
    ActionPointer::doom19(255, false, "VileStart").with_usage(&[
        "Plays VILATK.",
    ]),
    ActionPointer::doom19(257, false, "VileTarget").with_usage(&[
        "Spawns the Arch-Vile fire on the target.",
    ]),
    ActionPointer::doom19(264, false, "VileAttack").with_usage(&[
        "Damages the target for 20 and launches it upward if in sight.",
        "The fire then explodes for 70 radius damage.",
    ]),
    ActionPointer::doom19(281, false, "StartFire").with_usage(&[
        "Plays FLAMST and performs A_Fire.",
    ]),
    ActionPointer::doom19(282, false, "Fire").with_usage(&[
        "Keeps the Arch-Vile fire in front of its target.",
    ]),
    ActionPointer::doom19(285, false, "FireCrackle").with_usage(&[
        "Plays FLAME and performs A_Fire.",
    ]),
    ActionPointer::doom19(316, false, "Tracer").with_usage(&[
        "Steers a missile toward its tracer target and leaves a smoke trail.",
        "Only acts on gametics that are a multiple of 4.",
    ]),
    ActionPointer::doom19(336, false, "SkelWhoosh").with_usage(&[
        "Faces the target and plays SKESWG.",
    ]),
    ActionPointer::doom19(338, false, "SkelFist").with_usage(&[
        "Melee attack for 6 x 1d10 damage when the target is in range, playing SKEPCH.",
    ]),
    ActionPointer::doom19(341, false, "SkelMissile"),
    ActionPointer::doom19(376, false, "FatRaise"),
    ActionPointer::doom19(377, false, "FatAttack1"),
    ActionPointer::doom19(380, false, "FatAttack2"),
    ActionPointer::doom19(383, false, "FatAttack3"),
    ActionPointer::doom19(397, false, "BossDeath"),
    ActionPointer::doom19(417, false, "CPosAttack"),
    ActionPointer::doom19(419, false, "CPosRefire"),
    ActionPointer::doom19(454, false, "TroopAttack"),
    ActionPointer::doom19(487, false, "SargAttack"),
    ActionPointer::doom19(506, false, "HeadAttack"),
    ActionPointer::doom19(539, false, "BruisAttack"),
    ActionPointer::doom19(590, false, "SkullAttack"),
    ActionPointer::doom19(603, false, "Metal"),
    ActionPointer::doom19(616, false, "SPosAttack"),
    ActionPointer::doom19(618, false, "SpidRefire"),
    ActionPointer::doom19(635, false, "BabyMetal"),
    ActionPointer::doom19(648, false, "BspiAttack"),
    ActionPointer::doom19(676, false, "Hoof"),
    ActionPointer::doom19(685, false, "CyberAttack"),
    ActionPointer::doom19(711, false, "PainAttack"),
    ActionPointer::doom19(718, false, "PainDie"),
    ActionPointer::doom19(774, false, "KeenDie"),
    ActionPointer::doom19(779, false, "BrainPain"),
    ActionPointer::doom19(780, false, "BrainScream"),
    ActionPointer::doom19(783, false, "BrainDie"),
    ActionPointer::doom19(785, false, "BrainAwake"),
    ActionPointer::doom19(786, false, "BrainSpit"),
    ActionPointer::doom19(787, false, "SpawnSound"),
    ActionPointer::doom19(788, false, "SpawnFly"),
    ActionPointer::doom19(801, false, "BrainExplode"),
    ActionPointer::mbf("Spawn", &[Thing, Int]),
    ActionPointer::mbf("Turn", &[Angle, Int]),
    ActionPointer::mbf("Face", &[Angle, Int]),
    ActionPointer::mbf("Scratch", &[Int, Sound]),
    ActionPointer::mbf("PlaySound", &[Sound, Int]),
    ActionPointer::mbf("RandomJump", &[State, Int]),
    ActionPointer::mbf("LineEffect", &[Special, Tag]),
    ActionPointer::mbf("Die", &[]),
    ActionPointer::mbf("Detonate", &[]),
    ActionPointer::mbf("Mushroom", &[]),
    ActionPointer::mbf("BetaSkullAttack", &[]),
    ActionPointer::mbf("Stop", &[]),
    ActionPointer::mbf("FireOldBFG", &[]),
];

/// Case-insensitive index over every named pointer.
#[derive(Debug)]
pub struct ActionPointerRegistry {
    by_name: HashMap<String, &'static ActionPointer>,
}

impl ActionPointerRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<ActionPointerRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| Self {
            by_name: POINTERS
                .iter()
                .map(|p| (p.mnemonic.to_ascii_lowercase(), p))
                .collect(),
        })
    }

    /// Resolves an `A_`-prefixed name.
    ///
    /// The `A_` prefix is literal; the mnemonic after it matches
    /// case-insensitively. The no-op pointer is never returned.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static ActionPointer> {
        let body = name.strip_prefix("A_")?;
        self.by_name.get(&body.to_ascii_lowercase()).copied()
    }

    /// Resolves a bare mnemonic such as `"Look"`.
    pub(crate) fn by_mnemonic(&self, mnemonic: &str) -> Option<&'static ActionPointer> {
        self.by_name.get(&mnemonic.to_ascii_lowercase()).copied()
    }

    /// Resolves a name, rejecting pointers above `level`.
    #[must_use]
    pub fn lookup_for(&self, name: &str, level: FeatureLevel) -> Option<&'static ActionPointer> {
        self.lookup(name)
            .filter(|p| level.supports(p.kind.feature_level()))
    }

    /// Every named pointer, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ActionPointer> {
        POINTERS.iter()
    }

    /// Finds the Doom 1.9 pointer originally carried by `frame`.
    #[must_use]
    pub fn by_frame(&self, frame: usize) -> Option<&'static ActionPointer> {
        POINTERS.iter().find(|p| p.frame == Some(frame))
    }
}

/// Shorthand for [`ActionPointerRegistry::global`]`().lookup(name)`.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static ActionPointer> {
    ActionPointerRegistry::global().lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_body_is_case_insensitive() {
        let p = lookup("A_LOOK").unwrap();
        assert_eq!(p.mnemonic(), "Look");
        assert_eq!(p.frame(), Some(174));
        assert!(std::ptr::eq(p, lookup("A_look").unwrap()));
    }

    #[test]
    fn usage_is_documented_for_vanilla_pointers() {
        let punch = lookup("A_Punch").unwrap();
        assert!(punch.usage()[0].starts_with("Melee hitscan"));
        assert!(lookup("A_Spawn").unwrap().usage().is_empty());
        assert!(null_pointer().usage().is_empty());
    }

    #[test]
    fn lookup_prefix_is_case_sensitive() {
        assert!(lookup("a_look").is_none());
        assert!(lookup("a_Look").is_none());
        assert!(lookup("A_Look").is_some());
    }

    #[test]
    fn lookup_requires_prefix() {
        assert!(lookup("Look").is_none());
        assert!(lookup("A").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("B_Look").is_none());
    }

    #[test]
    fn null_is_unreachable_by_name() {
        assert!(lookup("A_NULL").is_none());
        assert!(null_pointer().is_null());
        assert_eq!(null_pointer().frame(), Some(0));
    }

    #[test]
    fn weapon_scope() {
        assert!(lookup("A_WeaponReady").unwrap().is_weapon());
        assert!(!lookup("A_Chase").unwrap().is_weapon());
    }

    #[test]
    fn mbf_parameterized_pointers() {
        let spawn = lookup("A_Spawn").unwrap();
        assert!(spawn.is_mbf());
        assert_eq!(spawn.params().len(), 2);
        assert_eq!(spawn.frame(), None);

        let die = lookup("A_Die").unwrap();
        assert!(!die.is_mbf());
        assert!(!lookup("A_Look").unwrap().is_mbf());
    }

    #[test]
    fn dialect_filtering() {
        let reg = ActionPointerRegistry::global();
        assert!(reg.lookup_for("A_Spawn", FeatureLevel::Boom).is_none());
        assert!(reg.lookup_for("A_Spawn", FeatureLevel::Mbf).is_some());
        assert!(reg.lookup_for("A_Look", FeatureLevel::Doom19).is_some());
    }

    #[test]
    fn by_frame_finds_originals() {
        let reg = ActionPointerRegistry::global();
        assert_eq!(reg.by_frame(801).unwrap().mnemonic(), "BrainExplode");
        assert!(reg.by_frame(5).is_none());
    }
}
