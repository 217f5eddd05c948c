//! Data model for extracted struct documentation.

/// One struct's documentation: the struct's own name and doc comment,
/// followed by its fields in declaration order.
#[derive(Debug, Default)]
pub struct StructDocs {
    pub name: String,
    /// Doc comment on the struct itself. Carried through from extraction;
    /// the field checks never read it.
    #[allow(dead_code)]
    pub doc: String,
    pub fields: Vec<FieldDoc>,
}

/// A single field and the raw doc-comment text attached to it
/// (empty string when the field is undocumented).
#[derive(Debug, Default)]
pub struct FieldDoc {
    pub name: String,
    pub doc: String,
}
