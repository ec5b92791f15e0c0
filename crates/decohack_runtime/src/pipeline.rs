//! Source-to-patch conversion in one call.

use std::path::Path;

use decohack_language::{CompilerConfig, compile, compile_file};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::writer::patch_to_string;

/// Compiles `source` and renders the resulting patch.
///
/// # Errors
/// Returns [`ExportError::Compile`](crate::ExportError::Compile) when the
/// script fails to compile.
pub fn compile_to_patch(
    stream_name: &str,
    source: &str,
    compiler: &CompilerConfig,
    export: &ExportConfig,
) -> Result<String> {
    let ctx = compile(stream_name, source, compiler)?;
    patch_to_string(ctx.as_ref(), export)
}

/// Compiles the script at `path` and renders the resulting patch.
///
/// # Errors
/// Returns a compile error if the file cannot be read or compiled.
pub fn compile_file_to_patch(
    path: impl AsRef<Path>,
    compiler: &CompilerConfig,
    export: &ExportConfig,
) -> Result<String> {
    let ctx = compile_file(path, compiler)?;
    patch_to_string(ctx.as_ref(), export)
}
