//! The full set of engine tables a patch modifies.

use decohack_foundation::{Error, Result, StringAddressing};

use crate::ammo::Ammo;
use crate::misc::Misc;
use crate::pointer::ActionPointer;
use crate::sound::Sound;
use crate::state::State;
use crate::thing::Thing;

fn as_index(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

fn row<'a, T>(rows: &'a [T], table: &'static str, index: usize) -> Result<&'a T> {
    rows.get(index)
        .ok_or_else(|| Error::out_of_range(table, as_index(index), rows.len()))
}

fn row_mut<'a, T>(rows: &'a mut [T], table: &'static str, index: usize) -> Result<&'a mut T> {
    let len = rows.len();
    rows.get_mut(index)
        .ok_or_else(|| Error::out_of_range(table, as_index(index), len))
}

/// One replaceable text string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringEntry {
    mnemonic: String,
    value: String,
}

impl StringEntry {
    /// BEX mnemonic, upper case.
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Text strings, addressed by position or by mnemonic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringTable {
    addressing: StringAddressing,
    entries: Vec<StringEntry>,
}

impl StringTable {
    /// Creates a table from `(mnemonic, text)` rows.
    pub fn new<'a>(
        addressing: StringAddressing,
        rows: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            addressing,
            entries: rows
                .into_iter()
                .map(|(mnemonic, value)| StringEntry {
                    mnemonic: mnemonic.to_ascii_uppercase(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    /// How scripts address entries.
    #[must_use]
    pub fn addressing(&self) -> StringAddressing {
        self.addressing
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &StringEntry> {
        self.entries.iter()
    }

    /// Text at `index`.
    ///
    /// # Errors
    /// Fails if `index` is out of range.
    pub fn get_index(&self, index: usize) -> Result<&str> {
        row(&self.entries, "String", index).map(|e| e.value.as_str())
    }

    /// Replaces the text at `index`.
    ///
    /// # Errors
    /// Fails if `index` is out of range.
    pub fn set_index(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        row_mut(&mut self.entries, "String", index)?.value = value.into();
        Ok(())
    }

    /// Text for `mnemonic`, matched case-insensitively.
    #[must_use]
    pub fn get(&self, mnemonic: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.mnemonic.eq_ignore_ascii_case(mnemonic))
            .map(|e| e.value.as_str())
    }

    /// Sets the text for `mnemonic`, appending a new entry if it is unknown.
    pub fn set(&mut self, mnemonic: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|e| e.mnemonic.eq_ignore_ascii_case(mnemonic))
        {
            Some(entry) => entry.value = value,
            None => self.entries.push(StringEntry {
                mnemonic: mnemonic.to_ascii_uppercase(),
                value,
            }),
        }
    }
}

/// Every table a patch can touch, plus the per-state action pointers.
#[derive(Clone, Debug)]
pub struct Tables {
    pub(crate) states: Vec<State>,
    pub(crate) pointers: Vec<&'static ActionPointer>,
    pub(crate) things: Vec<Thing>,
    pub(crate) ammo: Vec<Ammo>,
    pub(crate) sounds: Vec<Sound>,
    pub(crate) sprites: Vec<String>,
    pub(crate) strings: StringTable,
    pub(crate) misc: Misc,
}

impl Tables {
    /// Number of state rows.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of thing rows.
    #[must_use]
    pub fn thing_count(&self) -> usize {
        self.things.len()
    }

    /// Number of ammo rows.
    #[must_use]
    pub fn ammo_count(&self) -> usize {
        self.ammo.len()
    }

    /// Number of sound rows.
    #[must_use]
    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    /// Number of sprite names.
    #[must_use]
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// State row `index`.
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not a state.
    pub fn state(&self, index: usize) -> Result<&State> {
        row(&self.states, "State", index)
    }

    /// Mutable state row `index`.
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not a state.
    pub fn state_mut(&mut self, index: usize) -> Result<&mut State> {
        row_mut(&mut self.states, "State", index)
    }

    /// All state rows.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The action pointer carried by state `index`.
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not a state.
    pub fn pointer(&self, index: usize) -> Result<&'static ActionPointer> {
        row(&self.pointers, "State", index).copied()
    }

    /// Sets the action pointer carried by state `index`.
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not a state.
    pub fn set_pointer(&mut self, index: usize, pointer: &'static ActionPointer) -> Result<()> {
        *row_mut(&mut self.pointers, "State", index)? = pointer;
        Ok(())
    }

    /// Thing row `index`.
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not a thing.
    pub fn thing(&self, index: usize) -> Result<&Thing> {
        row(&self.things, "Thing", index)
    }

    /// Mutable thing row `index`.
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not a thing.
    pub fn thing_mut(&mut self, index: usize) -> Result<&mut Thing> {
        row_mut(&mut self.things, "Thing", index)
    }

    /// All thing rows.
    #[must_use]
    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    /// Ammo row `index`.
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not an ammo type.
    pub fn ammo(&self, index: usize) -> Result<&Ammo> {
        row(&self.ammo, "Ammo", index)
    }

    /// Mutable ammo row `index`.
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not an ammo type.
    pub fn ammo_mut(&mut self, index: usize) -> Result<&mut Ammo> {
        row_mut(&mut self.ammo, "Ammo", index)
    }

    /// All ammo rows.
    #[must_use]
    pub fn ammo_types(&self) -> &[Ammo] {
        &self.ammo
    }

    /// Sound row `index` (0-based).
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not a sound.
    pub fn sound(&self, index: usize) -> Result<&Sound> {
        row(&self.sounds, "Sound", index)
    }

    /// Mutable sound row `index` (0-based).
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not a sound.
    pub fn sound_mut(&mut self, index: usize) -> Result<&mut Sound> {
        row_mut(&mut self.sounds, "Sound", index)
    }

    /// All sound rows.
    #[must_use]
    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    /// Finds a sound row by lump name, ignoring case and an optional `DS`
    /// prefix.
    #[must_use]
    pub fn sound_index(&self, name: &str) -> Option<usize> {
        let find = |n: &str| {
            self.sounds
                .iter()
                .position(|s| s.name().eq_ignore_ascii_case(n))
        };
        find(name).or_else(|| {
            let prefix = name.get(..2)?;
            if prefix.eq_ignore_ascii_case("ds") {
                find(&name[2..])
            } else {
                None
            }
        })
    }

    /// Sprite name at `index`.
    ///
    /// # Errors
    /// Fails with `OutOfRange` if `index` is not a sprite.
    pub fn sprite_name(&self, index: usize) -> Result<&str> {
        row(&self.sprites, "Sprite", index).map(String::as_str)
    }

    /// Finds a sprite by its four-character name, ignoring case.
    #[must_use]
    pub fn sprite_index(&self, name: &str) -> Option<usize> {
        self.sprites
            .iter()
            .position(|s| s.eq_ignore_ascii_case(name))
    }

    /// The string table.
    #[must_use]
    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    /// The mutable string table.
    pub fn strings_mut(&mut self) -> &mut StringTable {
        &mut self.strings
    }

    /// The global constants.
    #[must_use]
    pub fn misc(&self) -> &Misc {
        &self.misc
    }

    /// The mutable global constants.
    pub fn misc_mut(&mut self) -> &mut Misc {
        &mut self.misc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StringTable {
        StringTable::new(
            StringAddressing::Keyed,
            [("GOTARMOR", "Picked up the armor."), ("GOTMEGA", "Mega!")],
        )
    }

    #[test]
    fn keyed_lookup_ignores_case() {
        let t = table();
        assert_eq!(t.get("gotarmor"), Some("Picked up the armor."));
        assert_eq!(t.get("NOPE"), None);
    }

    #[test]
    fn keyed_set_appends_unknown() {
        let mut t = table();
        t.set("gotmega", "MEGA");
        t.set("custom_1", "hello");
        assert_eq!(t.len(), 3);
        assert_eq!(t.get("GOTMEGA"), Some("MEGA"));
        assert_eq!(t.iter().last().unwrap().mnemonic(), "CUSTOM_1");
    }

    #[test]
    fn indexed_access_is_bounds_checked() {
        let mut t = table();
        assert!(t.set_index(1, "x").is_ok());
        assert_eq!(t.get_index(1).unwrap(), "x");
        assert!(t.get_index(2).is_err());
    }
}
