//! # Catalogue Document Model
//!
//! Parses the catalogue source text into an ordered list of record nodes
//! with explicit byte-range boundaries, in one up-front scan. A record's
//! span runs from the line carrying its `name: "<value>"` declaration to
//! the line carrying the next record's declaration (or the end of text).
//! Every later edit is bounds-checked against these spans, so updating one
//! record can never bleed into the next.
//!
//! ## Matching discipline
//!
//! This is deliberately not a TypeScript parser. Two cheap rules give the
//! scoping the grammar would:
//!
//! - A declaration or field key only matches in *key position*: at the
//!   start of a line, after indentation, immediately followed by `:`.
//!   A record name quoted inside another record's description never
//!   matches.
//! - A record's managed fields must sit at the same indentation as its
//!   `name` line. Keys inside nested objects (the `lgpd` block) are at a
//!   deeper indent and are ignored.
//!
//! The per-record field-presence set is computed here, once, and kept in
//! sync by the upserter when it inserts a clause — the replace and insert
//! paths can never reach different presence conclusions.

use std::ops::Range;

use classif_core::{CatalogueField, CATALOGUE_FIELD_COUNT};

/// One record's location in the document.
#[derive(Debug, Clone)]
pub struct RecordNode {
    pub(crate) name: String,
    pub(crate) span: Range<usize>,
    pub(crate) indent: String,
    pub(crate) present: [bool; CATALOGUE_FIELD_COUNT],
}

impl RecordNode {
    /// The record's declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte range of the record in the document text.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Whether the record currently declares `field` at its own indent level.
    pub fn has_field(&self, field: CatalogueField) -> bool {
        self.present[field_index(field)]
    }
}

/// The catalogue source text plus the record nodes scanned out of it.
///
/// Owned exclusively for the duration of one batch run: read once, mutated
/// in memory, written back once by the caller iff [`is_modified`] reports
/// a change.
///
/// [`is_modified`]: CatalogueDocument::is_modified
#[derive(Debug)]
pub struct CatalogueDocument {
    pub(crate) text: String,
    pub(crate) records: Vec<RecordNode>,
    pub(crate) modified: bool,
}

impl CatalogueDocument {
    /// Scan `text` into record nodes. Never fails: text without any
    /// recognizable `name: "..."` declaration simply yields zero records.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();

        // Pass 1: name declarations in key position.
        let mut heads: Vec<(String, usize, String)> = Vec::new();
        for (line_start, line) in lines_with_offsets(&text, 0..text.len()) {
            let Some((indent_len, key, value_off)) = split_key(line) else {
                continue;
            };
            if key != "name" {
                continue;
            }
            let rest = &line[value_off..];
            let vstart = value_off + (rest.len() - rest.trim_start().len());
            if let Some(qlen) = scan_quoted(&line[vstart..]) {
                heads.push((
                    unquote(&line[vstart..vstart + qlen]),
                    line_start,
                    line[..indent_len].to_string(),
                ));
            }
        }

        // Pass 2: span boundaries and field presence per record.
        let mut records = Vec::with_capacity(heads.len());
        for (i, (name, start, indent)) in heads.iter().enumerate() {
            let end = heads.get(i + 1).map_or(text.len(), |next| next.1);
            let span = *start..end;
            let mut present = [false; CATALOGUE_FIELD_COUNT];
            for (_, line) in lines_with_offsets(&text, span.clone()) {
                let Some((indent_len, key, _)) = split_key(line) else {
                    continue;
                };
                if &line[..indent_len] != indent {
                    continue;
                }
                if let Ok(field) = key.parse::<CatalogueField>() {
                    present[field_index(field)] = true;
                }
            }
            records.push(RecordNode {
                name: name.clone(),
                span,
                indent: indent.clone(),
                present,
            });
        }

        Self {
            text,
            records,
            modified: false,
        }
    }

    /// The current document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document, yielding the (possibly mutated) text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Whether any upsert actually changed a byte since parsing.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// All record nodes, in document order.
    pub fn records(&self) -> &[RecordNode] {
        &self.records
    }

    /// Locate a record by its declared name.
    ///
    /// Returns the index of the *first* matching declaration; name
    /// uniqueness in the document is assumed, not enforced.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    /// Shift every span boundary at or after `from` by `delta` bytes.
    pub(crate) fn shift_spans(&mut self, from: usize, delta: isize) {
        let adjust = |off: &mut usize| {
            if *off >= from {
                *off = off.checked_add_signed(delta).unwrap_or(*off);
            }
        };
        for record in &mut self.records {
            let mut start = record.span.start;
            let mut end = record.span.end;
            adjust(&mut start);
            adjust(&mut end);
            record.span = start..end;
        }
    }
}

/// Index of a managed field in the presence array.
pub(crate) fn field_index(field: CatalogueField) -> usize {
    match field {
        CatalogueField::CertificationLevel => 0,
        CatalogueField::DataLocation => 1,
        CatalogueField::PersonalData => 2,
        CatalogueField::UsageNotes => 3,
        CatalogueField::Remarque => 4,
        CatalogueField::ToValidate => 5,
    }
}

/// Iterate lines inside `range`, yielding each line's absolute start offset
/// and its content without the trailing newline.
pub(crate) fn lines_with_offsets(
    text: &str,
    range: Range<usize>,
) -> impl Iterator<Item = (usize, &str)> {
    let base = range.start;
    text[range]
        .split_inclusive('\n')
        .scan(0usize, move |off, raw| {
            let start = base + *off;
            *off += raw.len();
            let line = raw.strip_suffix('\n').unwrap_or(raw);
            let line = line.strip_suffix('\r').unwrap_or(line);
            Some((start, line))
        })
}

/// Split a line into (indent byte count, key, offset just past the `:`),
/// if the line starts with an identifier key in key position.
pub(crate) fn split_key(line: &str) -> Option<(usize, &str, usize)> {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let indent_len = line.len() - trimmed.len();
    let key_end = trimmed
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(trimmed.len());
    if key_end == 0 || trimmed.as_bytes().get(key_end) != Some(&b':') {
        return None;
    }
    Some((indent_len, &trimmed[..key_end], indent_len + key_end + 1))
}

/// Length of a double-quoted token at the start of `s` (including both
/// quotes), honoring backslash escapes. `None` if `s` does not start a
/// complete quoted token.
pub(crate) fn scan_quoted(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Decode a quoted token (as delimited by [`scan_quoted`]) into its string
/// value, resolving backslash escapes.
pub(crate) fn unquote(token: &str) -> String {
    let inner = &token[1..token.len().saturating_sub(1)];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"export const softwareList: Software[] = [
  {
    id: "aaa-1",
    name: "ALPHA",
    shortDescription: "First tool, see name: \"BETA\" for its sibling",
    lgpd: {
      hosting: 2,
      personalData: 1,
      dataCollection: 2
    },
    certificationLevel: 2,
    dataLocation: "Hors UE",
    personalData: false,
    usageNotes: null,
    createdAt: 1672527600000
  },
  {
    id: "bbb-2",
    name: "BETA",
    certificationLevel: 1,
    dataLocation: "Suisse",
    personalData: true,
    usageNotes: "Usage autorisé",
    remarque: "Niveau 1 : hébergement Suisse",
    createdAt: 1672527600000
  }
]
"#;

    #[test]
    fn parse_finds_both_records_in_order() {
        let doc = CatalogueDocument::parse(SAMPLE);
        assert_eq!(doc.records().len(), 2);
        assert_eq!(doc.records()[0].name(), "ALPHA");
        assert_eq!(doc.records()[1].name(), "BETA");
        assert!(doc.records()[0].span().end <= doc.records()[1].span().start);
    }

    #[test]
    fn spans_cover_each_record_exclusively() {
        let doc = CatalogueDocument::parse(SAMPLE);
        let alpha = &doc.text()[doc.records()[0].span()];
        let beta = &doc.text()[doc.records()[1].span()];
        assert!(alpha.contains("dataLocation: \"Hors UE\""));
        assert!(!alpha.contains("dataLocation: \"Suisse\""));
        assert!(beta.contains("dataLocation: \"Suisse\""));
    }

    #[test]
    fn name_inside_free_text_is_not_a_declaration() {
        // ALPHA's description embeds `name: "BETA"`; only the key-position
        // declaration counts, so BETA is found once, after ALPHA.
        let doc = CatalogueDocument::parse(SAMPLE);
        assert_eq!(doc.find("BETA"), Some(1));
    }

    #[test]
    fn find_unknown_name_is_none() {
        let doc = CatalogueDocument::parse(SAMPLE);
        assert_eq!(doc.find("GAMMA"), None);
    }

    #[test]
    fn find_returns_first_of_duplicate_names() {
        let dup = format!("{SAMPLE}  {{\n    name: \"ALPHA\",\n    certificationLevel: 3\n  }}\n");
        let doc = CatalogueDocument::parse(dup);
        assert_eq!(doc.records().len(), 3);
        assert_eq!(doc.find("ALPHA"), Some(0));
    }

    #[test]
    fn presence_reflects_record_level_fields() {
        let doc = CatalogueDocument::parse(SAMPLE);
        let alpha = &doc.records()[0];
        assert!(alpha.has_field(CatalogueField::CertificationLevel));
        assert!(alpha.has_field(CatalogueField::UsageNotes));
        assert!(!alpha.has_field(CatalogueField::Remarque));
        assert!(!alpha.has_field(CatalogueField::ToValidate));

        let beta = &doc.records()[1];
        assert!(beta.has_field(CatalogueField::Remarque));
        assert!(!beta.has_field(CatalogueField::ToValidate));
    }

    #[test]
    fn nested_personal_data_does_not_count_as_presence() {
        // ALPHA's lgpd block declares personalData at a deeper indent; drop
        // the record-level clause and the field must read as absent.
        let text = SAMPLE.replacen("    personalData: false,\n", "", 1);
        let doc = CatalogueDocument::parse(text);
        assert!(!doc.records()[0].has_field(CatalogueField::PersonalData));
        // The nested occurrence is still inside the span, just not counted.
        assert!(doc.text()[doc.records()[0].span()].contains("personalData: 1"));
    }

    #[test]
    fn parse_without_declarations_yields_no_records() {
        let doc = CatalogueDocument::parse("const x = 1\n");
        assert!(doc.records().is_empty());
        assert!(!doc.is_modified());
    }

    #[test]
    fn split_key_requires_key_position() {
        assert_eq!(split_key("    name: \"X\","), Some((4, "name", 9)));
        assert_eq!(split_key("    // name: \"X\""), None);
        assert_eq!(split_key(""), None);
        assert_eq!(split_key("  },"), None);
    }

    #[test]
    fn scan_quoted_handles_escapes() {
        assert_eq!(scan_quoted("\"abc\","), Some(5));
        assert_eq!(scan_quoted("\"a\\\"b\""), Some(6));
        assert_eq!(scan_quoted("\"open"), None);
        assert_eq!(scan_quoted("null"), None);
    }

    #[test]
    fn unquote_resolves_escapes() {
        assert_eq!(unquote("\"abc\""), "abc");
        assert_eq!(unquote("\"a\\\"b\""), "a\"b");
        assert_eq!(unquote("\"a\\\\b\""), "a\\b");
    }

    #[test]
    fn last_record_span_extends_to_end_of_text() {
        let doc = CatalogueDocument::parse(SAMPLE);
        assert_eq!(doc.records()[1].span().end, doc.text().len());
    }
}
