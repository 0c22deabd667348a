//! Static export scanner for CommonJS modules.
//!
//! # Responsibilities
//! - Enumerate exported names without executing the module
//! - Handle the two shapes authorizer modules use in practice:
//!   `module.exports = { a, b: localB }` and `exports.name = ...`
//!
//! # Design Decisions
//! - String-aware brace matching, so function bodies and URLs inside the
//!   export object do not confuse the scan
//! - Entries that are not name-like (spreads, computed keys) are skipped
//!   rather than rejected

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::loader::{ExportBinding, LoadedModule, ModuleLoadError, ModuleLoader};

/// Loads modules by scanning their source text for export clauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsExportScanner;

impl ModuleLoader for JsExportScanner {
    fn load(&self, path: &Path) -> Result<LoadedModule, ModuleLoadError> {
        let source = fs::read_to_string(path).map_err(|source| ModuleLoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let exports = scan_exports(&source).ok_or_else(|| ModuleLoadError::Malformed {
            path: path.display().to_string(),
        })?;
        Ok(LoadedModule { exports })
    }
}

/// Returns the export mapping, or `None` when an export object is opened
/// but never closed.
fn scan_exports(source: &str) -> Option<IndexMap<String, ExportBinding>> {
    let mut exports = IndexMap::new();

    if let Some(open) = exports_object_start(source) {
        let block = brace_block(source, open)?;
        for entry in split_entries(block) {
            if let Some((name, binding)) = parse_entry(entry) {
                exports.insert(name, binding);
            }
        }
    }

    for name in assignment_exports(source) {
        let binding = ExportBinding { local: name.clone() };
        exports.entry(name).or_insert(binding);
    }

    Some(exports)
}

/// Byte offset of the `{` in `module.exports = {`, if that form is present.
fn exports_object_start(source: &str) -> Option<usize> {
    let mut search_from = 0;
    while let Some(found) = source[search_from..].find("module.exports") {
        let after = search_from + found + "module.exports".len();
        let rest = source[after..].trim_start();
        if let Some(assigned) = rest.strip_prefix('=') {
            let assigned = assigned.trim_start();
            if assigned.starts_with('{') {
                let offset = assigned.as_ptr() as usize - source.as_ptr() as usize;
                return Some(offset);
            }
        }
        search_from = after;
    }
    None
}

/// Slice between a `{` at `open` and its matching `}`, skipping string
/// literals. `None` when unbalanced.
fn brace_block(source: &str, open: usize) -> Option<&str> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = open;
    while i < bytes.len() {
        let byte = bytes[i];
        if let Some(delimiter) = quote {
            if byte == b'\\' {
                i += 2;
                continue;
            }
            if byte == delimiter {
                quote = None;
            }
        } else {
            match byte {
                b'\'' | b'"' | b'`' => quote = Some(byte),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&source[open + 1..i]);
                    }
                }
                _ => {}
            }
        }
        i += 1;
    }
    None
}

/// Splits an object-literal body on top-level commas.
fn split_entries(block: &str) -> Vec<&str> {
    let bytes = block.as_bytes();
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        let byte = bytes[i];
        if let Some(delimiter) = quote {
            if byte == b'\\' {
                i += 2;
                continue;
            }
            if byte == delimiter {
                quote = None;
            }
        } else {
            match byte {
                b'\'' | b'"' | b'`' => quote = Some(byte),
                b'{' | b'(' | b'[' => depth += 1,
                b'}' | b')' | b']' => depth = depth.saturating_sub(1),
                b',' if depth == 0 => {
                    entries.push(&block[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        i += 1;
    }
    entries.push(&block[start..]);
    entries
}

/// Parses one object-literal entry: `name`, `name: local`, or `'name': fn`.
fn parse_entry(entry: &str) -> Option<(String, ExportBinding)> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }
    let (key, value) = match entry.find(':') {
        Some(colon) => (&entry[..colon], Some(entry[colon + 1..].trim())),
        None => (entry, None),
    };
    let name = unquote(key.trim())?;
    if !is_identifier_like(&name) {
        return None;
    }
    let local = match value {
        Some(local) if is_identifier_like(local) => local.to_owned(),
        _ => name.clone(),
    };
    Some((name, ExportBinding { local }))
}

/// Names assigned via `exports.name = ...` or `module.exports.name = ...`.
fn assignment_exports(source: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in source.lines() {
        let line = line.trim_start();
        let line = line.strip_prefix("module.").unwrap_or(line);
        let Some(rest) = line.strip_prefix("exports.") else {
            continue;
        };
        let name: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
            .collect();
        if name.is_empty() {
            continue;
        }
        let after = rest[name.len()..].trim_start();
        if after.starts_with('=') && !after.starts_with("==") {
            names.push(name);
        }
    }
    names
}

fn unquote(key: &str) -> Option<String> {
    let stripped = key
        .strip_prefix('\'')
        .and_then(|k| k.strip_suffix('\''))
        .or_else(|| key.strip_prefix('"').and_then(|k| k.strip_suffix('"')));
    let name = stripped.unwrap_or(key);
    (!name.is_empty()).then(|| name.to_owned())
}

fn is_identifier_like(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '-')
}
