//! Turns an [`OptionSet`] into an `.editorconfig` document.

use std::io::Write;

use tracing::debug;

use crate::error::EmitError;
use crate::ini::{Document, Section};
use crate::options::{Field, OptionSet, Value};

/// Glob of the section that applies to every file
pub const WILDCARD_SECTION: &str = "*";

/// Build the document: an optional `root = true` preamble followed by `[*]`.
pub fn build_document(options: &OptionSet) -> Document<'_> {
    let mut sections = Vec::with_capacity(2);

    if options.root {
        let mut preamble = Section::preamble();
        preamble.push(Field::Root.key(), Value::Bool(true));
        sections.push(preamble);
    }

    let mut wildcard = Section::named(WILDCARD_SECTION);
    for (key, value) in options.wildcard_pairs() {
        wildcard.push(key, value);
    }
    sections.push(wildcard);

    Document { sections }
}

pub fn render(options: &OptionSet) -> String {
    build_document(options).to_string()
}

/// Write the rendered document to `out` and flush it.
pub fn write_to<W: Write>(options: &OptionSet, mut out: W) -> Result<(), EmitError> {
    let text = render(options);
    debug!(bytes = text.len(), root = options.root, "writing editorconfig");
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
