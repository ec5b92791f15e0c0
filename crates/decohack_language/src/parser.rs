//! Parser for patch scripts.
//!
//! A recursive-descent parser that applies each section to a
//! [`PatchContext`] as it is read. Parsing stops at the first error; there
//! is no resynchronization, so a failed compile reports exactly one
//! diagnostic.

use std::collections::HashMap;

use decohack_foundation::{Dialect, PointerBinding};
use decohack_storage::{
    ActionPointer, ActionPointerRegistry, Misc, PatchContext, State, new_context,
};
use tracing::{debug, trace};

use crate::diagnostic::{CompileError, Diagnostic};
use crate::literal::{IntegerError, decode_frames, parse_integer, parse_map_ref};
use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};

type ParseResult<T> = std::result::Result<T, Diagnostic>;

/// Ammo type keywords and the rows they select. Row 4 has no keyword.
pub const AMMO_KEYWORDS: [(&str, usize); 5] = [
    ("bullets", 0),
    ("shells", 1),
    ("cells", 2),
    ("rockets", 3),
    ("infinite", 5),
];

/// Resolves an ammo type keyword, ignoring case.
#[must_use]
pub fn ammo_keyword_index(word: &str) -> Option<usize> {
    AMMO_KEYWORDS
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
        .map(|&(_, index)| index)
}

type MiscSetter = fn(&mut Misc, i32) -> decohack_foundation::Result<()>;

const MONSTER_INFIGHTING: &str = "monsterInfighting";

const MISC_FIELDS: [(&str, MiscSetter); 15] = [
    ("initialBullets", Misc::set_initial_bullets),
    ("initialHealth", Misc::set_initial_health),
    ("greenArmorClass", Misc::set_green_armor_class),
    ("blueArmorClass", Misc::set_blue_armor_class),
    ("soulsphereHealth", Misc::set_soulsphere_health),
    ("maxSoulsphereHealth", Misc::set_max_soulsphere_health),
    ("megasphereHealth", Misc::set_megasphere_health),
    ("godModeHealth", Misc::set_god_mode_health),
    ("idfaArmor", Misc::set_idfa_armor),
    ("idfaArmorClass", Misc::set_idfa_armor_class),
    ("idkfaArmor", Misc::set_idkfa_armor),
    ("idkfaArmorClass", Misc::set_idkfa_armor_class),
    ("bfgCellsPerShot", Misc::set_bfg_cells_per_shot),
    ("maxHealth", Misc::set_max_health),
    ("maxArmor", Misc::set_max_armor),
];

/// State labels visible to a next-state clause.
///
/// Labels are declared by thing and weapon blocks; plain `state` blocks
/// parse their clauses with no scope at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelScope {
    labels: HashMap<String, usize>,
    last: Option<usize>,
}

impl LabelScope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` at `index`; it becomes the target of `loop`.
    pub fn declare(&mut self, name: impl Into<String>, index: usize) {
        self.labels.insert(name.into(), index);
        self.last = Some(index);
    }

    /// The state index for `name`. Labels are case-sensitive.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    /// The most recently declared label's index.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.last
    }
}

/// One parsed state line, before it is written to any row.
#[derive(Debug)]
struct StateLine {
    sprite: i32,
    frames: Vec<i32>,
    duration: i32,
    bright: bool,
    action: Option<&'static ActionPointer>,
    params: [i32; 2],
}

impl StateLine {
    fn apply(&self, state: &mut State, frame: i32) -> decohack_foundation::Result<()> {
        state.set_sprite_index(self.sprite)?;
        state.set_frame_index(frame)?;
        state.set_duration(self.duration)?;
        state.set_bright(self.bright);
        state.set_misc1(self.params[0]);
        state.set_misc2(self.params[1]);
        Ok(())
    }
}

/// Where a fill sequence has got to.
struct FillCursor {
    /// Scans for the next row start after this index.
    last: usize,
    /// The row written most recently; its next state chains forward.
    written: Option<usize>,
}

/// Parser for patch script source.
pub struct Parser {
    /// Token source, includes already followed.
    stream: TokenStream,
    /// Current token (lookahead).
    current: Token,
}

impl Parser {
    /// Creates a parser reading from `stream`.
    #[must_use]
    pub fn new(mut stream: TokenStream) -> Self {
        let current = stream.next_token();
        Self { stream, current }
    }

    /// Parses a whole script and returns the populated context.
    ///
    /// # Errors
    /// Returns the diagnostic for the first grammar or table error.
    pub fn parse(mut self) -> Result<Box<dyn PatchContext>, CompileError> {
        self.parse_script().map_err(CompileError::single)
    }

    fn parse_script(&mut self) -> ParseResult<Box<dyn PatchContext>> {
        self.check_current()?;
        let dialect = self.parse_using()?;
        debug!(%dialect, "selected patch format");
        let mut context = new_context(dialect);
        while self.current.kind != TokenKind::Eof {
            self.parse_entry(context.as_mut())?;
        }
        Ok(context)
    }

    // =========================================================================
    // Sections
    // =========================================================================

    fn parse_using(&mut self) -> ParseResult<Dialect> {
        if !self.match_keyword("using")? {
            return Err(self.error("Expected \"using\" clause to set the patch format."));
        }
        if let Some(dialect) = self.current.identifier().and_then(Dialect::from_keyword) {
            self.advance()?;
            return Ok(dialect);
        }
        let choices: Vec<_> = Dialect::ALL.iter().map(|d| d.keyword()).collect();
        Err(self.error(format!(
            "Expected valid patch format type ({}).",
            choices.join(", ")
        )))
    }

    fn parse_entry(&mut self, ctx: &mut dyn PatchContext) -> ParseResult<()> {
        let section = self.current.identifier().map(str::to_ascii_lowercase);
        trace!(section = ?section, "entering section");
        match section.as_deref() {
            Some("strings") => {
                self.advance()?;
                self.parse_strings(ctx)
            }
            Some("ammo") => {
                self.advance()?;
                self.parse_ammo(ctx)
            }
            Some("sound") => {
                self.advance()?;
                self.parse_sound(ctx)
            }
            Some("state") => {
                self.advance()?;
                self.parse_state(ctx)
            }
            Some("pars") => {
                self.advance()?;
                self.parse_pars(ctx)
            }
            Some("misc") => {
                self.advance()?;
                self.parse_misc(ctx)
            }
            _ => Err(self.error(format!(
                "Unknown section or command \"{}\".",
                self.current.kind.lexeme()
            ))),
        }
    }

    fn parse_strings(&mut self, ctx: &mut dyn PatchContext) -> ParseResult<()> {
        self.expect(&TokenKind::LBrace, "Expected '{' to start \"strings\" section.")?;

        if ctx.dialect().is_doom19() {
            while let Some(index) = self.match_positive_integer()? {
                let count = ctx.tables().strings().len();
                let index = usize::try_from(index).unwrap_or(usize::MAX);
                if index >= count {
                    return Err(self.error(format!(
                        "String index out of range. Must be from 0 to {}",
                        count.saturating_sub(1)
                    )));
                }
                let Some(text) = self.match_string()? else {
                    return Err(self.error("Expected string after string index."));
                };
                ctx.tables_mut()
                    .strings_mut()
                    .set_index(index, text)
                    .map_err(|e| self.table_error(&e))?;
            }
            self.expect(
                &TokenKind::RBrace,
                "Expected '}' to close \"strings\" section, or string index to start string replacement entry.",
            )
        } else {
            while let Some(key) = self.match_identifier()? {
                let Some(text) = self.match_string()? else {
                    return Err(self.error("Expected string after string key name."));
                };
                ctx.tables_mut().strings_mut().set(&key, text);
            }
            self.expect(
                &TokenKind::RBrace,
                "Expected '}' to close \"strings\" section, or string key name to start string replacement entry.",
            )
        }
    }

    fn parse_ammo(&mut self, ctx: &mut dyn PatchContext) -> ParseResult<()> {
        let count = ctx.tables().ammo_count();
        let expected = format!(
            "Expected ammo type: an integer from 0 to {} or 'bullets', 'shells', 'cells', or 'rockets'.",
            count.saturating_sub(1)
        );

        let index = if let Some(index) = self.match_positive_integer()? {
            usize::try_from(index).unwrap_or(usize::MAX)
        } else if let Some(index) = self.current.identifier().and_then(ammo_keyword_index) {
            self.advance()?;
            index
        } else {
            return Err(self.error(expected));
        };
        if index >= count {
            return Err(self.error(expected));
        }

        if let Some(name) = self.match_string()? {
            ctx.tables_mut()
                .ammo_mut(index)
                .map_err(|e| self.table_error(&e))?
                .set_name(name);
        }

        self.expect(&TokenKind::LBrace, "Expected '{' after \"ammo\" header.")?;
        while self.current.identifier().is_some() {
            if self.match_keyword("max")? {
                let Some(value) = self.match_positive_integer()? else {
                    return Err(self.error("Expected positive integer after \"max\"."));
                };
                ctx.tables_mut()
                    .ammo_mut(index)
                    .and_then(|ammo| ammo.set_max(value))
                    .map_err(|e| self.table_error(&e))?;
            } else if self.match_keyword("pickup")? {
                let Some(value) = self.match_positive_integer()? else {
                    return Err(self.error("Expected positive integer after \"pickup\"."));
                };
                ctx.tables_mut()
                    .ammo_mut(index)
                    .and_then(|ammo| ammo.set_pickup(value))
                    .map_err(|e| self.table_error(&e))?;
            } else {
                return Err(self.error("Expected \"max\" or \"pickup\"."));
            }
        }
        self.expect(&TokenKind::RBrace, "Expected '}' after \"ammo\" section.")
    }

    fn parse_sound(&mut self, ctx: &mut dyn PatchContext) -> ParseResult<()> {
        let count = ctx.tables().sound_count();
        let index = if let Some(index) = self.match_positive_integer()? {
            let row = usize::try_from(index).unwrap_or(usize::MAX);
            if row >= count {
                return Err(self.error(format!(
                    "Invalid sound index: {index}. Max is {}.",
                    count.saturating_sub(1)
                )));
            }
            row
        } else if let Some(row) = self
            .current
            .name_text()
            .and_then(|name| ctx.tables().sound_index(name))
        {
            self.advance()?;
            row
        } else {
            return Err(self.error("Expected sound index or sound name after \"sound\"."));
        };

        self.expect(&TokenKind::LBrace, "Expected '{' after \"sound\" header.")?;
        while self.current.identifier().is_some() {
            if self.match_keyword("priority")? {
                let Some(value) = self.match_positive_integer()? else {
                    return Err(self.error("Expected positive integer after \"priority\"."));
                };
                ctx.tables_mut()
                    .sound_mut(index)
                    .and_then(|sound| sound.set_priority(value))
                    .map_err(|e| self.table_error(&e))?;
            } else if self.match_keyword("singular")? {
                let Some(value) = self.match_boolean()? else {
                    return Err(self.error("Expected boolean after \"singular\"."));
                };
                ctx.tables_mut()
                    .sound_mut(index)
                    .map_err(|e| self.table_error(&e))?
                    .set_singular(value);
            } else {
                return Err(self.error("Expected \"priority\" or \"singular\"."));
            }
        }
        self.expect(&TokenKind::RBrace, "Expected '}' after \"sound\" section.")
    }

    fn parse_pars(&mut self, ctx: &mut dyn PatchContext) -> ParseResult<()> {
        if !ctx.supports_pars() {
            return Err(self.error("Par block not supported in non-Boom type patches."));
        }
        self.expect(&TokenKind::LBrace, "Expected '{' after \"pars\" header.")?;

        while let Some(text) = self.current.name_text() {
            let Some((episode, map)) = parse_map_ref(text) else {
                return Err(self.error("Expected EXMY or MAPXX map entry."));
            };
            self.advance()?;
            let Some(seconds) = self.match_positive_integer()? else {
                return Err(self.error("Expected seconds after map entry."));
            };
            let Some(pars) = ctx.pars_mut() else {
                return Err(self.error("Par block not supported in non-Boom type patches."));
            };
            pars.set(episode, map, seconds.unsigned_abs());
        }
        self.expect(&TokenKind::RBrace, "Expected '}' after \"pars\" section.")
    }

    fn parse_misc(&mut self, ctx: &mut dyn PatchContext) -> ParseResult<()> {
        self.expect(&TokenKind::LBrace, "Expected '{' after \"misc\" header.")?;

        while let Some(word) = self.current.identifier().map(str::to_owned) {
            if word.eq_ignore_ascii_case(MONSTER_INFIGHTING) {
                self.advance()?;
                let Some(value) = self.match_boolean()? else {
                    return Err(self.error(format!(
                        "Expected boolean value after \"{MONSTER_INFIGHTING}\"."
                    )));
                };
                ctx.tables_mut().misc_mut().set_monster_infighting(value);
                continue;
            }

            let Some(&(keyword, setter)) = MISC_FIELDS
                .iter()
                .find(|(keyword, _)| keyword.eq_ignore_ascii_case(&word))
            else {
                return Err(self.error("Expected miscellaneous entry type."));
            };
            self.advance()?;
            let Some(value) = self.match_integer()? else {
                return Err(self.error(format!("Expected integer value after \"{keyword}\".")));
            };
            setter(ctx.tables_mut().misc_mut(), value).map_err(|e| self.table_error(&e))?;
        }
        self.expect(&TokenKind::RBrace, "Expected '}' after \"misc\" section.")
    }

    // =========================================================================
    // States
    // =========================================================================

    fn parse_state(&mut self, ctx: &mut dyn PatchContext) -> ParseResult<()> {
        if let Some(index) = self.match_positive_integer()? {
            let index = self.state_index(ctx, index)?;
            self.expect(&TokenKind::LBrace, "Expected '{' after \"state\" header.")?;
            self.parse_state_body(ctx, index)?;
            self.expect(&TokenKind::RBrace, "Expected '}' after \"state\" definition.")
        } else if self.match_keyword("fill")? {
            let Some(index) = self.match_positive_integer()? else {
                return Err(self.error("Expected state index after \"fill\"."));
            };
            let index = self.state_index(ctx, index)?;
            self.expect(&TokenKind::LBrace, "Expected '{' after \"state fill\" header.")?;
            self.parse_fill_sequence(ctx, index)?;
            self.expect(&TokenKind::RBrace, "Expected '}' after \"state fill\" block.")
        } else if self.match_keyword("free")? {
            self.parse_free(ctx)
        } else {
            Err(self.error("Expected state index or \"fill\" keyword after \"state\"."))
        }
    }

    /// Checks a script-supplied state index against the table.
    fn state_index(&self, ctx: &dyn PatchContext, index: i32) -> ParseResult<usize> {
        let count = ctx.tables().state_count();
        match usize::try_from(index) {
            Ok(i) if i < count => Ok(i),
            _ => Err(self.error(format!(
                "Invalid state index: {index}. Max is {}.",
                count.saturating_sub(1)
            ))),
        }
    }

    /// `state N { ... }`: a next-state clause alone, or one single-frame
    /// state line with an optional next-state clause.
    fn parse_state_body(&mut self, ctx: &mut dyn PatchContext, index: usize) -> ParseResult<()> {
        if let Some(next) = self.parse_next_state(ctx, None, index)? {
            return self.set_next_state(ctx, index, next);
        }

        if !self.current_is_sprite(ctx) {
            return Err(self.error(
                "Expected valid sprite name or next state clause (goto, stop, wait).",
            ));
        }

        let slot = ctx.state_action_pointer_index(index);
        let line = self.parse_state_line(ctx, true, None)?;

        if ctx.pointer_binding() == PointerBinding::Static {
            match (slot, line.action) {
                (None, Some(_)) => {
                    return Err(
                        self.error("Action function specified for state without a function.")
                    );
                }
                (Some(_), None) => {
                    return Err(
                        self.error("Action function not specified for state with a function.")
                    );
                }
                _ => {}
            }
        }

        if let Some(slot) = slot {
            ctx.set_action_pointer(slot, line.action)
                .map_err(|e| self.table_error(&e))?;
        }
        self.write_state(ctx, index, &line, line.frames[0])?;
        ctx.set_free_state(index, false)
            .map_err(|e| self.table_error(&e))?;

        if let Some(next) = self.parse_next_state(ctx, None, index)? {
            self.set_next_state(ctx, index, next)?;
        }
        Ok(())
    }

    /// `state fill N { ... }`: allocates one row per frame letter, chaining
    /// each to the next. `N` must be free but is only the scan origin; the
    /// first frame lands on the first free row after it.
    fn parse_fill_sequence(&mut self, ctx: &mut dyn PatchContext, start: usize) -> ParseResult<()> {
        if !ctx.is_free_state(start).map_err(|e| self.table_error(&e))? {
            return Err(self.error(format!(
                "Starting state index for state fill, {start}, is not a free state."
            )));
        }
        if !self.current_is_sprite(ctx) {
            return Err(self.error("Expected sprite name (for a state description)."));
        }

        let require_action = match ctx.pointer_binding() {
            PointerBinding::Static => Some(ctx.state_action_pointer_index(start).is_some()),
            PointerBinding::Free => None,
        };
        let mut cursor = FillCursor { last: start, written: None };

        let line = self.parse_state_line(ctx, false, require_action)?;
        self.fill_states(ctx, &line, &mut cursor)?;
        while self.current_is_sprite(ctx) {
            let line = self.parse_state_line(ctx, false, None)?;
            self.fill_states(ctx, &line, &mut cursor)?;
        }

        let last = cursor.last;
        let Some(next) = self.parse_next_state(ctx, None, last)? else {
            return Err(self.error("Expected next state clause (stop, wait, goto)."));
        };
        self.set_next_state(ctx, last, next)?;
        debug!(start, last, "filled state sequence");
        Ok(())
    }

    fn fill_states(
        &mut self,
        ctx: &mut dyn PatchContext,
        line: &StateLine,
        cursor: &mut FillCursor,
    ) -> ParseResult<()> {
        for &frame in &line.frames {
            let index = if line.action.is_some() {
                ctx.find_next_free_action_pointer_state(cursor.last)
                    .ok_or_else(|| self.error("No more free states with an action pointer."))?
            } else {
                ctx.find_next_free_state(cursor.last)
                    .ok_or_else(|| self.error("No more free states."))?
            };

            if let Some(previous) = cursor.written {
                self.set_next_state(ctx, previous, index)?;
            }
            self.write_state(ctx, index, line, frame)?;
            if let Some(slot) = ctx.state_action_pointer_index(index) {
                ctx.set_action_pointer(slot, line.action)
                    .map_err(|e| self.table_error(&e))?;
            }
            ctx.set_free_state(index, false)
                .map_err(|e| self.table_error(&e))?;
            trace!(state = index, frame, "filled state");
            cursor.last = index;
            cursor.written = Some(index);
        }
        Ok(())
    }

    /// `state free N` or `state free N to M`.
    fn parse_free(&mut self, ctx: &mut dyn PatchContext) -> ParseResult<()> {
        let Some(first) = self.match_positive_integer()? else {
            return Err(self.error("Expected state index after \"free\"."));
        };
        let first = self.state_index(ctx, first)?;
        let last = if self.match_keyword("to")? {
            let Some(last) = self.match_positive_integer()? else {
                return Err(self.error("Expected state index after \"to\"."));
            };
            let last = self.state_index(ctx, last)?;
            if last < first {
                return Err(self.error(format!(
                    "Ending state index {last} is less than starting index {first}."
                )));
            }
            last
        } else {
            first
        };
        if first == 0 {
            return Err(self.error("State 0 cannot be freed."));
        }

        for index in first..=last {
            ctx.set_free_state(index, true)
                .map_err(|e| self.table_error(&e))?;
        }
        debug!(first, last, "freed states");
        Ok(())
    }

    /// Parses `SPRITE FRAMES DURATION [bright] [ACTION[(p[, p])]]`.
    ///
    /// `require_action` enforces that an action is present (`Some(true)`)
    /// or absent (`Some(false)`).
    fn parse_state_line(
        &mut self,
        ctx: &dyn PatchContext,
        single_frame: bool,
        require_action: Option<bool>,
    ) -> ParseResult<StateLine> {
        let Some(sprite) = self.match_sprite(ctx)? else {
            return Err(self.error("Expected valid sprite name."));
        };
        let Some(frames) = self.match_frames()? else {
            return Err(self.error("Expected valid frame characters after sprite name."));
        };
        if single_frame && frames.len() > 1 {
            return Err(self.error("Expected valid frame characters after sprite name."));
        }
        let Some(duration) = self.match_integer()? else {
            return Err(self.error("Expected valid state duration after frame."));
        };
        let bright = self.match_keyword("bright")?;
        let action = self.match_action(ctx)?;

        match (require_action, action) {
            (Some(true), None) => {
                return Err(self.error("Expected an action pointer for this state."));
            }
            (Some(false), Some(_)) => {
                return Err(self.error(
                    "Expected no action pointer for this state. State definition attempted to set one.",
                ));
            }
            _ => {}
        }

        let mut params = [0; 2];
        if let Some(pointer) = action {
            if self.match_kind(&TokenKind::LParen)? {
                if let Some(first) = self.match_integer()? {
                    if !pointer.is_mbf() {
                        return Err(self.error("Action does not require parameters."));
                    }
                    params[0] = first;
                    if self.match_kind(&TokenKind::Comma)? {
                        let Some(second) = self.match_integer()? else {
                            return Err(self.error("Expected a second parameter after ','."));
                        };
                        params[1] = second;
                    }
                }
                self.expect(&TokenKind::RParen, "Expected a ')' after action parameters.")?;
            }
        }

        Ok(StateLine {
            sprite,
            frames,
            duration,
            bright,
            action,
            params,
        })
    }

    /// Parses `stop`, `wait`, `loop` or `goto ...`. Returns `None` without
    /// consuming anything if no clause is present.
    ///
    /// `current` is the row the clause belongs to (the target of `wait`).
    /// Labels resolve through `scope`; with no scope, `goto LABEL` is an
    /// error.
    ///
    /// # Errors
    /// Fails on an undeclared label, an out-of-range target, or a `goto`
    /// with no target.
    pub fn parse_next_state(
        &mut self,
        ctx: &dyn PatchContext,
        scope: Option<&LabelScope>,
        current: usize,
    ) -> Result<Option<usize>, Diagnostic> {
        let count = ctx.tables().state_count();

        if self.match_keyword("stop")? {
            return Ok(Some(0));
        }
        if self.match_keyword("wait")? {
            return Ok(Some(current));
        }
        if self.match_keyword("loop")? {
            return match scope.and_then(LabelScope::last) {
                Some(index) => Ok(Some(index)),
                None => Err(self.error("Can't use \"loop\" with no declared state labels.")),
            };
        }
        if !self.match_keyword("goto")? {
            return Ok(None);
        }

        if let Some(label) = self.match_identifier()? {
            let Some(scope) = scope else {
                return Err(self.error(
                    "Name of label was unexpected after \"goto\". Only valid in thing or weapon.",
                ));
            };
            let Some(base) = scope.get(&label) else {
                return Err(self.error(format!("Label \"{label}\" is invalid or not declared.")));
            };

            if self.match_kind(&TokenKind::Plus)? {
                let amount = self.goto_offset()?;
                return match base.checked_add(amount).filter(|&i| i < count) {
                    Some(index) => Ok(Some(index)),
                    None => Err(self.error(format!(
                        "Label \"{label}\" plus {amount} would exceed amount of states."
                    ))),
                };
            }
            if self.match_kind(&TokenKind::Minus)? {
                let amount = self.goto_offset()?;
                return match base.checked_sub(amount) {
                    Some(index) => Ok(Some(index)),
                    None => Err(self.error(format!(
                        "Label \"{label}\" minus {amount} would be less than 0."
                    ))),
                };
            }
            return Ok(Some(base));
        }

        let Some(index) = self.match_positive_integer()? else {
            return Err(self.error("Expected state label or state index number after \"goto\"."));
        };
        match usize::try_from(index) {
            Ok(i) if i < count => Ok(Some(i)),
            _ => Err(self.error("Expected valid state index after \"goto\".")),
        }
    }

    fn goto_offset(&mut self) -> ParseResult<usize> {
        match self.match_positive_integer()? {
            Some(amount) => Ok(usize::try_from(amount).unwrap_or(usize::MAX)),
            None => Err(self.error("Expected integer after label name in \"goto\".")),
        }
    }

    fn write_state(
        &self,
        ctx: &mut dyn PatchContext,
        index: usize,
        line: &StateLine,
        frame: i32,
    ) -> ParseResult<()> {
        ctx.tables_mut()
            .state_mut(index)
            .and_then(|state| line.apply(state, frame))
            .map_err(|e| self.table_error(&e))
    }

    fn set_next_state(
        &self,
        ctx: &mut dyn PatchContext,
        index: usize,
        next: usize,
    ) -> ParseResult<()> {
        let next = i32::try_from(next)
            .map_err(|_| self.error(format!("Invalid state index: {next}.")))?;
        ctx.tables_mut()
            .state_mut(index)
            .and_then(|state| state.set_next_state_index(next))
            .map_err(|e| self.table_error(&e))
    }

    // =========================================================================
    // Token matching
    // =========================================================================

    /// Advances to the next token, failing if it is a lexer error.
    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.stream.next_token();
        self.check_current()
    }

    fn check_current(&self) -> ParseResult<()> {
        match &self.current.kind {
            TokenKind::Error(message) => Err(self.error(message.clone())),
            _ => Ok(()),
        }
    }

    fn match_kind(&mut self, kind: &TokenKind) -> ParseResult<bool> {
        if &self.current.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: &TokenKind, message: &str) -> ParseResult<()> {
        if self.match_kind(kind)? {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    fn match_keyword(&mut self, keyword: &str) -> ParseResult<bool> {
        if self.current.is_keyword(keyword) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn match_identifier(&mut self) -> ParseResult<Option<String>> {
        let Some(name) = self.current.identifier().map(str::to_owned) else {
            return Ok(None);
        };
        self.advance()?;
        Ok(Some(name))
    }

    fn match_string(&mut self) -> ParseResult<Option<String>> {
        let TokenKind::String(text) = &self.current.kind else {
            return Ok(None);
        };
        let text = text.clone();
        self.advance()?;
        Ok(Some(text))
    }

    fn match_boolean(&mut self) -> ParseResult<Option<bool>> {
        let value = match self.current.kind {
            TokenKind::True => true,
            TokenKind::False => false,
            _ => return Ok(None),
        };
        self.advance()?;
        Ok(Some(value))
    }

    /// Matches an unsigned number lexeme. A fraction does not match; a bad
    /// hex digit or an oversized value is an error.
    fn match_positive_integer(&mut self) -> ParseResult<Option<i32>> {
        let TokenKind::Number(lexeme) = &self.current.kind else {
            return Ok(None);
        };
        match parse_integer(lexeme) {
            Ok(value) => {
                self.advance()?;
                Ok(Some(value))
            }
            Err(IntegerError::Fraction(_)) => Ok(None),
            Err(e) => Err(self.error(e.to_string())),
        }
    }

    /// Matches an integer with an optional leading `-`.
    fn match_integer(&mut self) -> ParseResult<Option<i32>> {
        if self.match_kind(&TokenKind::Minus)? {
            return Ok(self.match_positive_integer()?.map(|v| -v));
        }
        self.match_positive_integer()
    }

    fn current_is_sprite(&self, ctx: &dyn PatchContext) -> bool {
        self.current
            .name_text()
            .is_some_and(|name| ctx.tables().sprite_index(name).is_some())
    }

    fn match_sprite(&mut self, ctx: &dyn PatchContext) -> ParseResult<Option<i32>> {
        let Some(index) = self
            .current
            .name_text()
            .and_then(|name| ctx.tables().sprite_index(name))
        else {
            return Ok(None);
        };
        let index = i32::try_from(index)
            .map_err(|_| self.error(format!("Invalid sprite index: {index}.")))?;
        self.advance()?;
        Ok(Some(index))
    }

    fn match_frames(&mut self) -> ParseResult<Option<Vec<i32>>> {
        let Some(lexeme) = self.current.identifier() else {
            return Ok(None);
        };
        let frames = decode_frames(lexeme).map_err(|c| {
            self.error(format!(
                "Subframe list contains an invalid character: {c}. Expected A through ]."
            ))
        })?;
        self.advance()?;
        Ok(Some(frames))
    }

    /// Matches an `A_` action name known to the registry. Pointers newer
    /// than the patch format are an error rather than a non-match.
    fn match_action(&mut self, ctx: &dyn PatchContext) -> ParseResult<Option<&'static ActionPointer>> {
        let Some(name) = self.current.identifier() else {
            return Ok(None);
        };
        let Some(pointer) = ActionPointerRegistry::global().lookup(name) else {
            return Ok(None);
        };
        if !ctx.feature_level().supports(pointer.kind().feature_level()) {
            return Err(self.error(format!(
                "Action pointer \"{name}\" is not supported by the \"{}\" patch format.",
                ctx.dialect()
            )));
        }
        self.advance()?;
        Ok(Some(pointer))
    }

    // =========================================================================
    // Errors
    // =========================================================================

    fn error(&self, message: impl Into<String>) -> Diagnostic {
        Diagnostic::at(&self.current, message)
    }

    fn table_error(&self, error: &decohack_foundation::Error) -> Diagnostic {
        self.error(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use decohack_foundation::Dialect;

    use super::*;
    use crate::config::CompilerConfig;

    fn parser(source: &str) -> Parser {
        Parser::new(TokenStream::new(
            "test",
            source,
            None,
            &CompilerConfig::default(),
        ))
    }

    fn compile(source: &str) -> Result<Box<dyn PatchContext>, CompileError> {
        parser(source).parse()
    }

    fn message(source: &str) -> String {
        compile(source)
            .err()
            .and_then(|e| e.first_message().map(str::to_owned))
            .unwrap_or_default()
    }

    #[test]
    fn using_is_required() {
        assert_eq!(
            message("misc { }"),
            "Expected \"using\" clause to set the patch format."
        );
        assert_eq!(
            message("using doom2"),
            "Expected valid patch format type (doom19, udoom19, boom, mbf, extended)."
        );
        assert_eq!(message(""), "Expected \"using\" clause to set the patch format.");
    }

    #[test]
    fn using_selects_dialect() {
        for dialect in Dialect::ALL {
            let ctx = compile(&format!("USING {}", dialect.keyword().to_uppercase())).unwrap();
            assert_eq!(ctx.dialect(), dialect);
        }
    }

    #[test]
    fn diagnostics_carry_position() {
        let err = compile("using boom\n  thing 1 { }").unwrap_err();
        assert_eq!(err.diagnostics.len(), 1);
        let d = &err.diagnostics[0];
        assert_eq!((d.stream.as_str(), d.line, d.column), ("test", 2, 3));
        assert_eq!(d.message, "Unknown section or command \"thing\".");
    }

    #[test]
    fn lexer_errors_halt_the_parse() {
        assert_eq!(message("using boom \"open"), "Unterminated string literal.");
    }

    #[test]
    fn ammo_keywords_map_to_rows() {
        assert_eq!(ammo_keyword_index("bullets"), Some(0));
        assert_eq!(ammo_keyword_index("SHELLS"), Some(1));
        assert_eq!(ammo_keyword_index("cells"), Some(2));
        assert_eq!(ammo_keyword_index("rockets"), Some(3));
        assert_eq!(ammo_keyword_index("infinite"), Some(5));
        assert_eq!(ammo_keyword_index("missiles"), None);
    }

    #[test]
    fn ammo_block() {
        let ctx = compile("using boom ammo 3 \"Grenades\" { max 60 pickup 2 }").unwrap();
        let ammo = ctx.tables().ammo(3).unwrap();
        assert_eq!(ammo.name(), "Grenades");
        assert_eq!((ammo.max(), ammo.pickup()), (60, 2));
    }

    #[test]
    fn infinite_ammo_is_out_of_range() {
        assert_eq!(
            message("using boom ammo infinite { max 1 }"),
            "Expected ammo type: an integer from 0 to 3 or 'bullets', 'shells', 'cells', or 'rockets'."
        );
    }

    #[test]
    fn ammo_errors() {
        assert_eq!(
            message("using boom ammo cells { max }"),
            "Expected positive integer after \"max\"."
        );
        assert_eq!(
            message("using boom ammo cells { ammo 3 }"),
            "Expected \"max\" or \"pickup\"."
        );
        assert_eq!(
            message("using boom ammo cells max"),
            "Expected '{' after \"ammo\" header."
        );
    }

    #[test]
    fn sound_block_by_name_and_index() {
        let ctx = compile(
            "using boom sound \"dspistol\" { priority 100 singular true } sound 1 { priority 5 }",
        )
        .unwrap();
        let pistol = ctx.tables().sound(0).unwrap();
        assert_eq!(pistol.priority(), 100);
        assert!(pistol.is_singular());
        assert_eq!(ctx.tables().sound(1).unwrap().priority(), 5);
    }

    #[test]
    fn sound_errors() {
        assert_eq!(
            message("using boom sound NOTASOUND { }"),
            "Expected sound index or sound name after \"sound\"."
        );
        assert_eq!(
            message("using boom sound pistol { singular 1 }"),
            "Expected boolean after \"singular\"."
        );
        assert_eq!(
            message("using boom sound 500 { }"),
            "Invalid sound index: 500. Max is 107."
        );
    }

    #[test]
    fn strings_doom19_indexed() {
        let ctx = compile("using doom19 strings { 0 \"Hello\" 2 `raw\\text` }").unwrap();
        let strings = ctx.tables().strings();
        assert_eq!(strings.get_index(0).unwrap(), "Hello");
        assert_eq!(strings.get_index(2).unwrap(), "raw\\text");
    }

    #[test]
    fn strings_doom19_rejects_bad_index() {
        assert!(
            message("using doom19 strings { 9999 \"x\" }")
                .starts_with("String index out of range. Must be from 0 to ")
        );
        assert_eq!(
            message("using doom19 strings { 1 2 }"),
            "Expected string after string index."
        );
    }

    #[test]
    fn strings_boom_keyed() {
        let ctx = compile("using boom strings { GOTARMOR \"Got it\" NEWKEY \"new\" }").unwrap();
        let strings = ctx.tables().strings();
        assert_eq!(strings.get("gotarmor"), Some("Got it"));
        assert_eq!(strings.get("NEWKEY"), Some("new"));
        assert_eq!(
            message("using boom strings { GOTARMOR 5 }"),
            "Expected string after string key name."
        );
    }

    #[test]
    fn pars_block() {
        let ctx = compile("using boom pars { E1M1 30 map07 \"90\" }");
        assert_eq!(
            ctx.err().and_then(|e| e.first_message().map(str::to_owned)),
            Some("Expected seconds after map entry.".into())
        );

        let ctx = compile("using mbf pars { E1M1 30 \"MAP07\" 90 }").unwrap();
        let pars = ctx.pars().unwrap();
        assert_eq!(pars.get(1, 1), Some(30));
        assert_eq!(pars.get(0, 7), Some(90));
    }

    #[test]
    fn pars_need_boom() {
        assert_eq!(
            message("using doom19 pars { E1M1 30 }"),
            "Par block not supported in non-Boom type patches."
        );
        assert_eq!(
            message("using boom pars { TROO 30 }"),
            "Expected EXMY or MAPXX map entry."
        );
    }

    #[test]
    fn misc_block() {
        let ctx = compile(
            "using boom misc { maxHealth 250 MONSTERINFIGHTING true megasphereHealth 300 }",
        )
        .unwrap();
        let misc = ctx.tables().misc();
        assert_eq!(misc.max_health(), 250);
        assert_eq!(misc.megasphere_health(), 300);
        assert!(misc.monster_infighting());
    }

    #[test]
    fn misc_errors() {
        assert_eq!(
            message("using boom misc { jumpHeight 5 }"),
            "Expected miscellaneous entry type."
        );
        assert_eq!(
            message("using boom misc { maxArmor true }"),
            "Expected integer value after \"maxArmor\"."
        );
        assert_eq!(
            message("using boom misc { monsterInfighting 1 }"),
            "Expected boolean value after \"monsterInfighting\"."
        );
        assert_eq!(
            message("using boom misc { maxArmor 5"),
            "Expected '}' after \"misc\" section."
        );
        assert!(message("using boom misc { maxArmor -5 }").contains("Max Armor"));
    }

    #[test]
    fn numbers_in_scripts() {
        let ctx = compile("using boom misc { maxHealth 0x1F }").unwrap();
        assert_eq!(ctx.tables().misc().max_health(), 31);
        assert_eq!(
            message("using boom misc { maxHealth 3.5 }"),
            "Expected integer value after \"maxHealth\"."
        );
        assert_eq!(
            message("using boom misc { maxHealth 0x1G }"),
            "1G could not be parsed."
        );
        assert_eq!(
            message("using boom misc { maxHealth 0x100000000 }"),
            "Integer \"0x100000000\" is out of range."
        );
    }

    #[test]
    fn single_state_next_clause_only() {
        let ctx = compile("using boom state 10 { goto 20 } state 11 { wait } state 12 { stop }")
            .unwrap();
        let tables = ctx.tables();
        assert_eq!(tables.state(10).unwrap().next_state_index(), 20);
        assert_eq!(tables.state(11).unwrap().next_state_index(), 11);
        assert_eq!(tables.state(12).unwrap().next_state_index(), 0);
        assert!(ctx.is_free_state(10).unwrap());
    }

    #[test]
    fn single_state_line() {
        let ctx = compile("using boom state 300 { TROO C 7 bright A_Look goto 301 }").unwrap();
        let state = ctx.tables().state(300).unwrap();
        assert_eq!(state.sprite_index(), ctx.tables().sprite_index("TROO").unwrap() as i32);
        assert_eq!(state.frame_index(), 2);
        assert_eq!(state.duration(), 7);
        assert!(state.is_bright());
        assert_eq!(state.next_state_index(), 301);
        assert_eq!(ctx.tables().pointer(300).unwrap().mnemonic(), "Look");
        assert!(!ctx.is_free_state(300).unwrap());
    }

    #[test]
    fn single_state_boom_backfills_null_pointer() {
        // State 174 carries A_Look in the baseline.
        let ctx = compile("using boom state 174 { TROO A 10 }").unwrap();
        assert!(ctx.tables().pointer(174).unwrap().is_null());
    }

    #[test]
    fn single_state_rejects_multiple_frames() {
        assert_eq!(
            message("using boom state 300 { TROO AB 7 }"),
            "Expected valid frame characters after sprite name."
        );
    }

    #[test]
    fn single_state_doom19_pointer_must_match_slot() {
        // State 5 has no pointer; 6 carries A_Punch.
        assert_eq!(
            message("using doom19 state 5 { PUNG A 1 A_Look }"),
            "Action function specified for state without a function."
        );
        assert_eq!(
            message("using doom19 state 6 { PUNG A 1 }"),
            "Action function not specified for state with a function."
        );
        let ctx = compile("using doom19 state 6 { PUNG B 2 A_Saw }").unwrap();
        assert_eq!(ctx.tables().pointer(6).unwrap().mnemonic(), "Saw");
    }

    #[test]
    fn state_errors() {
        assert_eq!(
            message("using boom state 968 { stop }"),
            "Invalid state index: 968. Max is 967."
        );
        assert_eq!(
            message("using boom state 5 stop"),
            "Expected '{' after \"state\" header."
        );
        assert_eq!(
            message("using boom state 5 { 7 }"),
            "Expected valid sprite name or next state clause (goto, stop, wait)."
        );
        assert_eq!(
            message("using boom state protect"),
            "Expected state index or \"fill\" keyword after \"state\"."
        );
        assert_eq!(
            message("using boom state 5 { TROO A }"),
            "Expected valid state duration after frame."
        );
        assert_eq!(
            message("using boom state 5 { TROO a 1 }"),
            "Subframe list contains an invalid character: a. Expected A through ]."
        );
        assert_eq!(
            message("using boom state 5 { TROO A 10000 }"),
            "Duration must be between -1 and 9999, got 10000"
        );
    }

    #[test]
    fn goto_clause_errors() {
        assert_eq!(
            message("using boom state 5 { goto 968 }"),
            "Expected valid state index after \"goto\"."
        );
        assert_eq!(
            message("using boom state 5 { goto See }"),
            "Name of label was unexpected after \"goto\". Only valid in thing or weapon."
        );
        assert_eq!(
            message("using boom state 5 { goto }"),
            "Expected state label or state index number after \"goto\"."
        );
        assert_eq!(
            message("using boom state 5 { loop }"),
            "Can't use \"loop\" with no declared state labels."
        );
    }

    #[test]
    fn label_offsets_are_bounds_checked() {
        let ctx = new_context(Dialect::Boom);
        let mut scope = LabelScope::new();
        scope.declare("Spawn", 3);
        scope.declare("Death", 960);

        let mut p = parser("goto Spawn-5");
        let err = p.parse_next_state(ctx.as_ref(), Some(&scope), 0).unwrap_err();
        assert_eq!(err.message, "Label \"Spawn\" minus 5 would be less than 0.");

        let mut p = parser("goto Death+8");
        let err = p.parse_next_state(ctx.as_ref(), Some(&scope), 0).unwrap_err();
        assert_eq!(err.message, "Label \"Death\" plus 8 would exceed amount of states.");

        let mut p = parser("goto Spawn+2 goto Spawn-3 goto Death loop");
        assert_eq!(p.parse_next_state(ctx.as_ref(), Some(&scope), 0), Ok(Some(5)));
        assert_eq!(p.parse_next_state(ctx.as_ref(), Some(&scope), 0), Ok(Some(0)));
        assert_eq!(p.parse_next_state(ctx.as_ref(), Some(&scope), 0), Ok(Some(960)));
        assert_eq!(p.parse_next_state(ctx.as_ref(), Some(&scope), 0), Ok(Some(960)));

        let mut p = parser("goto Raise");
        let err = p.parse_next_state(ctx.as_ref(), Some(&scope), 0).unwrap_err();
        assert_eq!(err.message, "Label \"Raise\" is invalid or not declared.");
    }

    #[test]
    fn fill_chains_rows_after_start() {
        let ctx = compile("using boom state fill 200 { TROO AB 5 TROO C 6 goto 200 }").unwrap();
        let tables = ctx.tables();
        assert_eq!(tables.state(201).unwrap().next_state_index(), 202);
        assert_eq!(tables.state(202).unwrap().next_state_index(), 203);
        assert_eq!(tables.state(203).unwrap().next_state_index(), 200);
        assert_eq!(tables.state(203).unwrap().frame_index(), 2);
        assert_eq!(tables.state(203).unwrap().duration(), 6);
        assert!(ctx.is_free_state(200).unwrap());
        for i in 201..=203 {
            assert!(!ctx.is_free_state(i).unwrap());
        }
        assert!(ctx.is_free_state(204).unwrap());
    }

    #[test]
    fn fill_skips_claimed_rows() {
        let ctx = compile(
            "using boom state 101 { TROO A 1 } state fill 100 { TROO A 1 TROO B 1 stop }",
        )
        .unwrap();
        assert!(ctx.is_free_state(100).unwrap());
        assert_eq!(ctx.tables().state(102).unwrap().next_state_index(), 103);
        assert_eq!(ctx.tables().state(103).unwrap().next_state_index(), 0);
        assert!(!ctx.is_free_state(103).unwrap());
    }

    #[test]
    fn fill_start_must_be_free() {
        assert_eq!(
            message("using boom state 100 { TROO A 1 } state fill 100 { TROO A 1 stop }"),
            "Starting state index for state fill, 100, is not a free state."
        );
    }

    #[test]
    fn fill_requires_trailing_clause() {
        assert_eq!(
            message("using boom state fill 100 { TROO A 1 }"),
            "Expected next state clause (stop, wait, goto)."
        );
        assert_eq!(
            message("using boom state fill 100 { stop }"),
            "Expected sprite name (for a state description)."
        );
    }

    #[test]
    fn fill_exhaustion() {
        assert_eq!(
            message("using boom state fill 966 { TROO ABC 1 stop }"),
            "No more free states."
        );
    }

    #[test]
    fn fill_pointer_state_exhaustion() {
        // 811 is the last vanilla state with a pointer.
        assert_eq!(
            message("using doom19 state fill 812 { BEXP A 1 BEXP B 1 A_Explode stop }"),
            "No more free states with an action pointer."
        );
    }

    #[test]
    fn lowercase_action_prefix_is_not_an_action() {
        assert_eq!(
            message("using boom\nstate 300 { TROO A 1 a_look }"),
            "Expected '}' after \"state\" definition."
        );
        let ctx = compile("using boom\nstate 300 { TROO A 1 A_LOOK }").unwrap();
        assert_eq!(ctx.tables().pointer(300).unwrap().mnemonic(), "Look");
    }

    #[test]
    fn fill_action_parameters() {
        let ctx = compile(
            "using mbf state fill 1000 { TROO A 1 A_Spawn(12, 0x20) TROO B 1 A_Turn(90) stop }",
        )
        .unwrap();
        let first = ctx.tables().state(1001).unwrap();
        assert_eq!((first.misc1(), first.misc2()), (12, 32));
        assert_eq!(ctx.tables().pointer(1001).unwrap().mnemonic(), "Spawn");
        let second = ctx.tables().state(1002).unwrap();
        assert_eq!((second.misc1(), second.misc2()), (90, 0));
    }

    #[test]
    fn action_parameter_errors() {
        assert_eq!(
            message("using boom state 300 { TROO A 1 A_Look(1) }"),
            "Action does not require parameters."
        );
        assert_eq!(
            message("using mbf state 300 { TROO A 1 A_Spawn(1, ) }"),
            "Expected a second parameter after ','."
        );
        assert_eq!(
            message("using mbf state 300 { TROO A 1 A_Spawn(1 }"),
            "Expected a ')' after action parameters."
        );
        let ctx = compile("using boom state 300 { TROO A 1 A_Look() }").unwrap();
        assert_eq!(ctx.tables().pointer(300).unwrap().mnemonic(), "Look");
    }

    #[test]
    fn mbf_pointers_need_mbf() {
        assert_eq!(
            message("using boom state 300 { TROO A 1 A_Spawn(1, 2) }"),
            "Action pointer \"A_Spawn\" is not supported by the \"boom\" patch format."
        );
    }

    #[test]
    fn fill_doom19_first_line_matches_start_slot() {
        assert_eq!(
            message("using doom19 state fill 6 { PUNG A 1 stop }"),
            "Expected an action pointer for this state."
        );
        assert_eq!(
            message("using doom19 state fill 5 { PUNG A 1 A_Punch stop }"),
            "Expected no action pointer for this state. State definition attempted to set one."
        );
    }

    #[test]
    fn fill_doom19_actions_land_on_pointer_states() {
        let ctx = compile("using doom19 state fill 5 { PUNG A 1 PUNG B 1 A_Saw stop }").unwrap();
        // 6 is the next free row; 7 and 8 own no pointer, so the action lands on 9.
        assert!(ctx.is_free_state(5).unwrap());
        assert_eq!(ctx.tables().state(6).unwrap().next_state_index(), 9);
        assert!(ctx.tables().pointer(6).unwrap().is_null());
        assert_eq!(ctx.tables().pointer(9).unwrap().mnemonic(), "Saw");
        assert!(ctx.is_free_state(7).unwrap());
    }

    #[test]
    fn free_states() {
        let ctx = compile(
            "using boom state fill 100 { TROO ABCD 1 stop } state free 101 to 102 state free 103",
        )
        .unwrap();
        for i in 100..=103 {
            assert!(ctx.is_free_state(i).unwrap());
        }
        assert!(!ctx.is_free_state(104).unwrap());
    }

    #[test]
    fn free_errors() {
        assert_eq!(message("using boom state free 0"), "State 0 cannot be freed.");
        assert_eq!(
            message("using boom state free 10 to 5"),
            "Ending state index 5 is less than starting index 10."
        );
        assert_eq!(
            message("using boom state free 5000"),
            "Invalid state index: 5000. Max is 967."
        );
    }
}
