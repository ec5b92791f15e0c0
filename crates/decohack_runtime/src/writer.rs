//! DeHackEd / BEX patch writer.
//!
//! Walks a [`PatchContext`] against its dialect's baseline and writes only
//! what changed. Row headers follow the numbering DeHackEd uses:
//!
//! | Block     | Header                 | Number           |
//! |-----------|------------------------|------------------|
//! | things    | `Thing N (Name)`       | row + 1          |
//! | states    | `Frame N`              | row              |
//! | pointers  | `Pointer N (Frame F)`  | slot, state      |
//! | sounds    | `Sound N`              | row + 1          |
//! | ammo      | `Ammo N`               | row              |
//! | misc      | `Misc 0`               |                  |
//!
//! Doom 1.9 style patches replace strings with `Text` blocks and pointers
//! with `Pointer` blocks; Boom and later use the BEX `[CODEPTR]`, `[PARS]`
//! and `[STRINGS]` sections instead.

use std::io::Write;

use decohack_foundation::PointerBinding;
use decohack_storage::{ActionPointer, DiffField, Diffable, PatchContext, Tables};
use tracing::debug;

use crate::config::ExportConfig;
use crate::error::Result;

/// First line of every patch.
pub const PATCH_SIGNATURE: &str = "Patch File for DeHackEd v3.0";

/// The `Patch format` value written in the preamble.
pub const PATCH_FORMAT: u32 = 6;

/// Writes `ctx` as a patch to `out`.
///
/// # Errors
/// Fails if `out` fails or a table row is missing.
pub fn write_patch<W: Write>(
    ctx: &dyn PatchContext,
    out: &mut W,
    config: &ExportConfig,
) -> Result<()> {
    let mut writer = PatchWriter::new(ctx, out, config);
    writer.write_all()
}

/// Renders `ctx` as a patch string.
///
/// # Errors
/// Fails if a table row is missing.
pub fn patch_to_string(ctx: &dyn PatchContext, config: &ExportConfig) -> Result<String> {
    let mut bytes = Vec::new();
    write_patch(ctx, &mut bytes, config)?;
    Ok(String::from_utf8(bytes)?)
}

struct PatchWriter<'a, W> {
    ctx: &'a dyn PatchContext,
    baseline: &'static Tables,
    out: &'a mut W,
    config: &'a ExportConfig,
}

impl<'a, W: Write> PatchWriter<'a, W> {
    fn new(ctx: &'a dyn PatchContext, out: &'a mut W, config: &'a ExportConfig) -> Self {
        Self {
            ctx,
            baseline: ctx.baseline(),
            out,
            config,
        }
    }

    fn write_all(&mut self) -> Result<()> {
        if self.config.write_header {
            self.write_preamble()?;
        }
        self.write_things()?;
        self.write_frames()?;
        if self.ctx.pointer_binding() == PointerBinding::Static {
            self.write_pointer_blocks()?;
        }
        self.write_sounds()?;
        self.write_ammo()?;
        self.write_misc()?;

        if self.ctx.dialect().is_doom19() {
            self.write_text_blocks()?;
        }
        if self.ctx.pointer_binding() == PointerBinding::Free {
            self.write_codeptr_section()?;
        }
        self.write_pars_section()?;
        if !self.ctx.dialect().is_doom19() {
            self.write_strings_section()?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_preamble(&mut self) -> Result<()> {
        self.line(PATCH_SIGNATURE)?;
        let config = self.config;
        if let Some(comment) = &config.comment {
            self.line(&format!("# {comment}"))?;
        }
        self.line(&format!("Doom version = {}", self.ctx.dialect().doom_version()))?;
        self.line(&format!("Patch format = {PATCH_FORMAT}"))
    }

    fn write_things(&mut self) -> Result<()> {
        let (ctx, baseline) = (self.ctx, self.baseline);
        let level = ctx.feature_level();
        let things = ctx.tables().things();
        let mut written = 0;
        for (row, (thing, base)) in things.iter().zip(baseline.things()).enumerate() {
            let fields = thing.diff(base, level);
            if !fields.is_empty() {
                self.block(&format!("Thing {} ({})", row + 1, thing.name()), &fields)?;
                written += 1;
            }
        }
        debug!(rows = written, "wrote things");
        Ok(())
    }

    fn write_frames(&mut self) -> Result<()> {
        let (ctx, baseline) = (self.ctx, self.baseline);
        let level = ctx.feature_level();
        let states = ctx.tables().states();
        let mut written = 0;
        for (row, (state, base)) in states.iter().zip(baseline.states()).enumerate() {
            let fields = state.diff(base, level);
            if !fields.is_empty() {
                self.block(&format!("Frame {row}"), &fields)?;
                written += 1;
            }
        }
        debug!(rows = written, "wrote frames");
        Ok(())
    }

    fn write_pointer_blocks(&mut self) -> Result<()> {
        let (ctx, baseline) = (self.ctx, self.baseline);
        let mut written = 0;
        for slot in 0..ctx.action_pointer_count() {
            let Some(state) = ctx.action_pointer_state(slot) else {
                continue;
            };
            let current = ctx.tables().pointer(state)?;
            if same_pointer(current, baseline.pointer(state)?) {
                continue;
            }
            let frame = i64::try_from(current.frame().unwrap_or(0)).unwrap_or_default();
            self.block(
                &format!("Pointer {slot} (Frame {state})"),
                &[DiffField::new("Codep Frame", frame)],
            )?;
            written += 1;
        }
        debug!(rows = written, "wrote pointers");
        Ok(())
    }

    fn write_sounds(&mut self) -> Result<()> {
        let (ctx, baseline) = (self.ctx, self.baseline);
        let level = ctx.feature_level();
        let sounds = ctx.tables().sounds();
        let mut written = 0;
        for (row, (sound, base)) in sounds.iter().zip(baseline.sounds()).enumerate() {
            let fields = sound.diff(base, level);
            if !fields.is_empty() {
                self.block(&format!("Sound {}", row + 1), &fields)?;
                written += 1;
            }
        }
        debug!(rows = written, "wrote sounds");
        Ok(())
    }

    fn write_ammo(&mut self) -> Result<()> {
        let (ctx, baseline) = (self.ctx, self.baseline);
        let level = ctx.feature_level();
        let rows = ctx.tables().ammo_types().iter().zip(baseline.ammo_types());
        for (row, (ammo, base)) in rows.enumerate() {
            let fields = ammo.diff(base, level);
            if !fields.is_empty() {
                self.block(&format!("Ammo {row}"), &fields)?;
            }
        }
        Ok(())
    }

    fn write_misc(&mut self) -> Result<()> {
        let ctx = self.ctx;
        let fields = ctx
            .tables()
            .misc()
            .diff(self.baseline.misc(), ctx.feature_level());
        if fields.is_empty() {
            return Ok(());
        }
        self.block("Misc 0", &fields)
    }

    /// `Text <old length> <new length>` followed by both texts run together.
    fn write_text_blocks(&mut self) -> Result<()> {
        let (ctx, baseline) = (self.ctx, self.baseline);
        let mut written = 0;
        for (index, entry) in ctx.tables().strings().iter().enumerate() {
            let old = baseline.strings().get_index(index)?;
            let new = entry.value();
            if old == new {
                continue;
            }
            self.blank()?;
            self.line(&format!("Text {} {}", old.len(), new.len()))?;
            self.raw(old)?;
            self.raw(new)?;
            self.raw(self.ending())?;
            written += 1;
        }
        debug!(rows = written, "wrote text blocks");
        Ok(())
    }

    fn write_codeptr_section(&mut self) -> Result<()> {
        let states = self.ctx.tables().state_count();
        let mut lines = Vec::new();
        for state in 0..states {
            let current = self.ctx.tables().pointer(state)?;
            if !same_pointer(current, self.baseline.pointer(state)?) {
                lines.push(format!("FRAME {state} = {}", current.mnemonic()));
            }
        }
        debug!(rows = lines.len(), "wrote code pointers");
        self.section("[CODEPTR]", &lines)
    }

    fn write_pars_section(&mut self) -> Result<()> {
        let Some(pars) = self.ctx.pars() else {
            return Ok(());
        };
        let lines: Vec<_> = pars
            .iter()
            .map(|(episode, map, seconds)| {
                if episode == 0 {
                    format!("par {map} {seconds}")
                } else {
                    format!("par {episode} {map} {seconds}")
                }
            })
            .collect();
        self.section("[PARS]", &lines)
    }

    fn write_strings_section(&mut self) -> Result<()> {
        let baseline = self.baseline.strings();
        let lines: Vec<_> = self
            .ctx
            .tables()
            .strings()
            .iter()
            .filter(|entry| baseline.get(entry.mnemonic()) != Some(entry.value()))
            .map(|entry| format!("{} = {}", entry.mnemonic(), escape_bex(entry.value())))
            .collect();
        debug!(rows = lines.len(), "wrote strings");
        self.section("[STRINGS]", &lines)
    }

    fn block(&mut self, header: &str, fields: &[DiffField]) -> Result<()> {
        self.blank()?;
        self.line(header)?;
        for field in fields {
            self.line(&field.to_string())?;
        }
        Ok(())
    }

    /// A BEX section; nothing is written when `lines` is empty.
    fn section(&mut self, header: &str, lines: &[String]) -> Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        self.blank()?;
        self.line(header)?;
        for line in lines {
            self.line(line)?;
        }
        Ok(())
    }

    fn ending(&self) -> &'a str {
        &self.config.line_ending
    }

    fn blank(&mut self) -> Result<()> {
        self.raw(self.ending())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.raw(text)?;
        self.raw(self.ending())
    }

    fn raw(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }
}

fn same_pointer(a: &ActionPointer, b: &ActionPointer) -> bool {
    a.mnemonic().eq_ignore_ascii_case(b.mnemonic())
}

/// Escapes text for a one-line BEX string value.
#[must_use]
pub fn escape_bex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => {}
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out
}
