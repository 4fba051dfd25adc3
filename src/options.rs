//! Formatting options and their mapping to `.editorconfig` keys.

use std::fmt;

pub const DEFAULT_ROOT: bool = true;
pub const DEFAULT_CHARSET: &str = "UTF-8";
pub const DEFAULT_END_OF_LINE: &str = "lf";
pub const DEFAULT_INDENT_SIZE: i64 = 4;
pub const DEFAULT_INDENT_STYLE: &str = "space";
pub const DEFAULT_INSERT_FINAL_NEWLINE: bool = true;
pub const DEFAULT_TRIM_TRAILING_WHITESPACE: bool = true;

/// The full set of values written to an `.editorconfig` file.
///
/// None of the string fields are validated; whatever the caller passes is
/// written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    /// Emit `root = true` at the top of the file
    pub root: bool,
    pub charset: String,
    pub end_of_line: String,
    pub indent_size: i64,
    pub indent_style: String,
    pub insert_final_newline: bool,
    pub trim_trailing_whitespace: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT,
            charset: DEFAULT_CHARSET.to_string(),
            end_of_line: DEFAULT_END_OF_LINE.to_string(),
            indent_size: DEFAULT_INDENT_SIZE,
            indent_style: DEFAULT_INDENT_STYLE.to_string(),
            insert_final_newline: DEFAULT_INSERT_FINAL_NEWLINE,
            trim_trailing_whitespace: DEFAULT_TRIM_TRAILING_WHITESPACE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Root,
    Charset,
    EndOfLine,
    IndentSize,
    IndentStyle,
    InsertFinalNewline,
    TrimTrailingWhitespace,
}

/// Fields written to the `[*]` section, in output order.
pub const WILDCARD_FIELDS: [Field; 6] = [
    Field::Charset,
    Field::EndOfLine,
    Field::IndentSize,
    Field::IndentStyle,
    Field::InsertFinalNewline,
    Field::TrimTrailingWhitespace,
];

impl Field {
    /// Key name as it appears in `.editorconfig`
    pub fn key(self) -> &'static str {
        match self {
            Field::Root => "root",
            Field::Charset => "charset",
            Field::EndOfLine => "end_of_line",
            Field::IndentSize => "indent_size",
            Field::IndentStyle => "indent_style",
            Field::InsertFinalNewline => "insert_final_newline",
            Field::TrimTrailingWhitespace => "trim_trailing_whitespace",
        }
    }
}

/// A single option value, rendered according to its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Bool(bool),
    Int(i64),
    Str(&'a str),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl OptionSet {
    pub fn value(&self, field: Field) -> Value<'_> {
        match field {
            Field::Root => Value::Bool(self.root),
            Field::Charset => Value::Str(&self.charset),
            Field::EndOfLine => Value::Str(&self.end_of_line),
            Field::IndentSize => Value::Int(self.indent_size),
            Field::IndentStyle => Value::Str(&self.indent_style),
            Field::InsertFinalNewline => Value::Bool(self.insert_final_newline),
            Field::TrimTrailingWhitespace => Value::Bool(self.trim_trailing_whitespace),
        }
    }

    /// (key, value) pairs for the `[*]` section, in [`WILDCARD_FIELDS`] order.
    pub fn wildcard_pairs(&self) -> impl Iterator<Item = (&'static str, Value<'_>)> + '_ {
        WILDCARD_FIELDS
            .iter()
            .map(move |&field| (field.key(), self.value(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = OptionSet::default();
        assert!(options.root);
        assert_eq!(options.charset, "UTF-8");
        assert_eq!(options.end_of_line, "lf");
        assert_eq!(options.indent_size, 4);
        assert_eq!(options.indent_style, "space");
        assert!(options.insert_final_newline);
        assert!(options.trim_trailing_whitespace);
    }

    #[test]
    fn test_bool_renders_literal_tokens() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_int_renders_decimal() {
        assert_eq!(Value::Int(0).to_string(), "0");
        assert_eq!(Value::Int(2).to_string(), "2");
        assert_eq!(Value::Int(120).to_string(), "120");
        assert_eq!(Value::Int(-3).to_string(), "-3");
    }

    #[test]
    fn test_str_renders_verbatim() {
        assert_eq!(Value::Str("utf-8-bom").to_string(), "utf-8-bom");
        assert_eq!(Value::Str("a = b ; c").to_string(), "a = b ; c");
        assert_eq!(Value::Str("").to_string(), "");
    }

    #[test]
    fn test_wildcard_pairs_order_and_count() {
        let options = OptionSet::default();
        let keys: Vec<_> = options.wildcard_pairs().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            [
                "charset",
                "end_of_line",
                "indent_size",
                "indent_style",
                "insert_final_newline",
                "trim_trailing_whitespace",
            ]
        );
    }

    #[test]
    fn test_wildcard_pairs_skip_root() {
        let options = OptionSet::default();
        assert!(options.wildcard_pairs().all(|(k, _)| k != "root"));
    }

    #[test]
    fn test_value_by_field() {
        let options = OptionSet {
            indent_size: 2,
            indent_style: "tab".to_string(),
            trim_trailing_whitespace: false,
            ..Default::default()
        };
        assert_eq!(options.value(Field::IndentSize), Value::Int(2));
        assert_eq!(options.value(Field::IndentStyle), Value::Str("tab"));
        assert_eq!(options.value(Field::TrimTrailingWhitespace), Value::Bool(false));
        assert_eq!(options.value(Field::Root), Value::Bool(true));
    }
}
