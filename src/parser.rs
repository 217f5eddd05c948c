//! Struct doc-comment extraction from Rust source.
//!
//! Line-based scanner, not a full parser. Produces one doc group per
//! struct: the struct's own name and doc first, then its fields in
//! declaration order. Recognizes:
//!
//! - `///` doc comments, accumulated until the next struct or field
//! - `pub struct Name {`, with the brace optionally on a following line
//! - named fields at the top level of the struct body
//! - tuple and unit structs (head-only groups, no fields)
//!
//! Attribute lines and blank lines keep accumulated docs; any other code
//! line drops them.

use crate::model::{FieldDoc, StructDocs};
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static RE_DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^///\s?(.*)").unwrap());

static RE_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#!?\[").unwrap());

static RE_STRUCT_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:pub(?:\([^)]*\))?\s+)?struct\s+(\w+)").unwrap());

static RE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:pub(?:\([^)]*\))?\s+)?(?:r#)?(\w+)\s*:").unwrap());

/// Parse all source files named by `src` and concatenate their doc groups
/// in file order.
pub fn parse_documentation(src: &str) -> Result<Vec<StructDocs>> {
    let mut groups = Vec::new();
    for path in resolve_sources(src)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        groups.extend(parse(&content));
    }
    Ok(groups)
}

/// Resolve a source argument into real file paths: a single file, a
/// directory scanned for `.rs` files (non-recursive), or a glob pattern.
/// Sorted for deterministic output.
fn resolve_sources(src: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(src);
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if path.is_dir() {
        let entries = fs::read_dir(path)
            .with_context(|| format!("failed to read directory: {}", path.display()))?;
        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("rs"))
            .collect();
        if files.is_empty() {
            bail!("no .rs files in directory: {}", path.display());
        }
        files.sort();
        return Ok(files);
    }
    let mut matches: Vec<PathBuf> = glob::glob(src)
        .with_context(|| format!("invalid glob pattern: {}", src))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    if matches.is_empty() {
        bail!("no source files matched: {}", src);
    }
    matches.sort();
    matches.dedup();
    Ok(matches)
}

/// Parse one file's content into doc groups.
pub fn parse(input: &str) -> Vec<StructDocs> {
    let mut groups: Vec<StructDocs> = Vec::new();
    let mut current_doc: Vec<String> = Vec::new();

    // Struct body being scanned, with the brace depth inside it
    let mut current: Option<StructDocs> = None;
    let mut depth: i32 = 0;

    // Declaration seen, `{` not yet (brace on a following line)
    let mut pending: Option<StructDocs> = None;

    for raw in input.lines() {
        let line = raw.trim();

        if let Some(ref mut group) = current {
            if let Some(caps) = RE_DOC_COMMENT.captures(line) {
                current_doc.push(caps[1].to_string());
                continue;
            }
            if line.is_empty() || RE_ATTRIBUTE.is_match(line) || line.starts_with("//") {
                continue;
            }

            match RE_FIELD.captures(line) {
                Some(caps) if depth == 1 => {
                    group.fields.push(FieldDoc {
                        name: caps[1].to_string(),
                        doc: take_doc(&mut current_doc),
                    });
                }
                _ => current_doc.clear(),
            }

            depth += brace_delta(line);
            if depth <= 0 {
                groups.push(current.take().unwrap());
                current_doc.clear();
            }
            continue;
        }

        // Waiting for a deferred opening brace
        if pending.is_some() {
            if line.starts_with('{') {
                let group = pending.take().unwrap();
                let delta = brace_delta(line);
                if delta > 0 {
                    current = Some(group);
                    depth = delta;
                } else {
                    groups.push(group);
                }
                continue;
            }
            if line.is_empty() || line.starts_with("where") {
                continue;
            }
            // Not a struct body after all
            pending = None;
        }

        if let Some(caps) = RE_DOC_COMMENT.captures(line) {
            current_doc.push(caps[1].to_string());
            continue;
        }
        if line.is_empty() || RE_ATTRIBUTE.is_match(line) || line.starts_with("//") {
            continue;
        }

        if let Some(caps) = RE_STRUCT_DECL.captures(line) {
            let group = StructDocs {
                name: caps[1].to_string(),
                doc: take_doc(&mut current_doc),
                fields: Vec::new(),
            };
            let rest = &line[caps.get(0).unwrap().end()..];

            match rest.find('{') {
                Some(pos) if rest.find('(').map_or(true, |paren| pos < paren) => {
                    let delta = brace_delta(rest);
                    if delta > 0 {
                        current = Some(group);
                        depth = delta;
                    } else {
                        // `{}` or a single-line body
                        groups.push(group);
                    }
                }
                _ if rest.trim_start().starts_with('(') || rest.trim_end().ends_with(';') => {
                    // Tuple or unit struct: no named fields
                    groups.push(group);
                }
                _ => pending = Some(group),
            }
            continue;
        }

        // Any other code line detaches accumulated docs
        current_doc.clear();
    }

    groups
}

/// Join and take the accumulated doc lines.
fn take_doc(doc_lines: &mut Vec<String>) -> String {
    let doc = doc_lines.join("\n").trim().to_string();
    doc_lines.clear();
    doc
}

/// Net brace count of a line: `{` opens minus `}` closes.
fn brace_delta(line: &str) -> i32 {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}
