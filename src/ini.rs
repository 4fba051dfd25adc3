//! Minimal INI writer following `.editorconfig` syntax.
//!
//! Keys in the unnamed preamble are written with no header, named sections
//! start with `[name]`, and every entry is written as `key = value`.

use std::fmt;

use crate::options::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    /// `None` for the preamble before the first header
    pub name: Option<&'static str>,
    pub entries: Vec<(&'static str, Value<'a>)>,
}

impl<'a> Section<'a> {
    pub fn preamble() -> Self {
        Self {
            name: None,
            entries: Vec::new(),
        }
    }

    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, key: &'static str, value: Value<'a>) {
        self.entries.push((key, value));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document<'a> {
    pub sections: Vec<Section<'a>>,
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            if let Some(name) = section.name {
                writeln!(f, "[{name}]")?;
            }
            for (key, value) in &section.entries {
                writeln!(f, "{key} = {value}")?;
            }
        }
        Ok(())
    }
}
