//! Field-name / doc-comment casing checks.
//!
//! A field's documentation conventionally starts with the field's own
//! name, optionally back-quoted as a code span. When the leading doc
//! word matches the name case-insensitively but not byte-for-byte, that
//! is a casing mismatch worth flagging. An exact match, an unrelated
//! leading word, or a missing doc stays silent.

use crate::model::StructDocs;
use std::collections::HashMap;
use std::fmt;

/// Which type source a check run draws its doc text from. Selects the
/// package word in the report line; set once per run by the flag path,
/// never per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocSource {
    Api,
    Internal,
}

impl fmt::Display for DocSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocSource::Api => write!(f, "api"),
            DocSource::Internal => write!(f, "internal"),
        }
    }
}

/// A detected casing mismatch. `Display` renders the warning line.
#[derive(Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub source: DocSource,
    pub struct_name: String,
    pub field_name: String,
    pub field_name_in_doc: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In {} struct {}, field name is: {}, but in doc is: {}",
            self.source, self.struct_name, self.field_name, self.field_name_in_doc
        )
    }
}

/// Struct name → lowercased field name → doc comment.
pub type InternalDocIndex = HashMap<String, HashMap<String, String>>;

/// Check every field's own doc against its declared name.
pub fn self_check(docs: &[StructDocs]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for group in docs {
        for field in &group.fields {
            if let Some(m) =
                check_field_name_and_doc(&group.name, &field.name, &field.doc, DocSource::Api)
            {
                mismatches.push(m);
            }
        }
    }
    mismatches
}

/// Build the cross-check lookup table, so struct and field order in the
/// internal source does not have to match the api source. Duplicate
/// names overwrite: last occurrence wins.
pub fn build_index(docs: &[StructDocs]) -> InternalDocIndex {
    let mut index = InternalDocIndex::new();
    for group in docs {
        let fields = group
            .fields
            .iter()
            .map(|f| (f.name.to_lowercase(), f.doc.clone()))
            .collect();
        index.insert(group.name.clone(), fields);
    }
    index
}

/// Check every api field against the doc recorded for the same struct
/// and field in the internal index. Struct names match exactly, field
/// names case-insensitively; a missing entry counts as no doc.
pub fn cross_check(docs: &[StructDocs], index: &InternalDocIndex) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for group in docs {
        for field in &group.fields {
            let doc = index
                .get(&group.name)
                .and_then(|fields| fields.get(&field.name.to_lowercase()))
                .map(String::as_str)
                .unwrap_or("");
            if let Some(m) =
                check_field_name_and_doc(&group.name, &field.name, doc, DocSource::Internal)
            {
                mismatches.push(m);
            }
        }
    }
    mismatches
}

/// The per-field predicate: flag the doc only when its first
/// whitespace-delimited word, less any surrounding backticks, is the
/// field name in a different casing.
fn check_field_name_and_doc(
    struct_name: &str,
    field_name: &str,
    doc: &str,
    source: DocSource,
) -> Option<Mismatch> {
    let field_name_in_doc = doc.split_whitespace().next()?.trim_matches('`');
    if field_name.to_lowercase() == field_name_in_doc.to_lowercase()
        && field_name != field_name_in_doc
    {
        return Some(Mismatch {
            source,
            struct_name: struct_name.to_string(),
            field_name: field_name.to_string(),
            field_name_in_doc: field_name_in_doc.to_string(),
        });
    }
    None
}
