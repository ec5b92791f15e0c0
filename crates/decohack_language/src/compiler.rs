//! Compile entry points.
//!
//! Each call builds a fresh [`PatchContext`] for the dialect the script
//! selects and applies the script to it. Nothing is shared between calls.

use std::fs;
use std::io::Read;
use std::path::Path;

use decohack_storage::PatchContext;
use tracing::debug;

use crate::config::CompilerConfig;
use crate::diagnostic::{CompileError, Diagnostic};
use crate::parser::Parser;
use crate::stream::TokenStream;

/// Compiles `source`, reporting positions against `stream_name`.
///
/// Relative includes resolve against the working directory, then the
/// configured include paths.
///
/// # Errors
/// Returns the diagnostics of a failed compile.
pub fn compile(
    stream_name: &str,
    source: &str,
    config: &CompilerConfig,
) -> Result<Box<dyn PatchContext>, CompileError> {
    debug!(stream = stream_name, bytes = source.len(), "compiling");
    Parser::new(TokenStream::new(stream_name, source, None, config)).parse()
}

/// Compiles in-memory source with the default configuration.
///
/// # Errors
/// Returns the diagnostics of a failed compile.
pub fn compile_str(source: &str) -> Result<Box<dyn PatchContext>, CompileError> {
    let config = CompilerConfig::default();
    compile(&config.stream_name, source, &config)
}

/// Reads all of `reader` and compiles it.
///
/// # Errors
/// Returns a diagnostic if the reader fails or is not UTF-8, otherwise the
/// diagnostics of a failed compile.
pub fn compile_reader(
    stream_name: &str,
    mut reader: impl Read,
    config: &CompilerConfig,
) -> Result<Box<dyn PatchContext>, CompileError> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|e| Diagnostic::new(stream_name, 0, 0, format!("Could not read stream: {e}")))?;
    compile(stream_name, &source, config)
}

/// Compiles the script at `path`. Includes resolve against the script's
/// own directory first.
///
/// # Errors
/// Returns a diagnostic if the file cannot be read, otherwise the
/// diagnostics of a failed compile.
pub fn compile_file(
    path: impl AsRef<Path>,
    config: &CompilerConfig,
) -> Result<Box<dyn PatchContext>, CompileError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let source = fs::read_to_string(path).map_err(|e| {
        Diagnostic::new(name.as_str(), 0, 0, format!("Could not read file \"{name}\": {e}"))
    })?;
    debug!(stream = %name, bytes = source.len(), "compiling file");
    let directory = path.parent().map(Path::to_path_buf);
    Parser::new(TokenStream::new(&name, &source, directory, config)).parse()
}
