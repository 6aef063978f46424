/// Database specific quoting of values into SQL literals.
///
/// This is the escaping capability a connection lends to the interpolator: given the raw text of
/// a value it produces a complete, already quoted literal that the database reads back as exactly
/// that text.
pub trait Quoter: Send + Sync {
    fn as_dyn(&self) -> &dyn Quoter;

    /// Write `value` as a quoted string literal.
    fn write_quoted(&self, out: &mut String, value: &str);

    /// Write `value` as a binary literal.
    fn write_quoted_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("X'");
        out.push_str(&hex::encode_upper(value));
        out.push('\'');
    }

    fn quote(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        self.write_quoted(&mut out, value);
        out
    }

    fn quote_blob(&self, value: &[u8]) -> String {
        let mut out = String::with_capacity(value.len() * 2 + 3);
        self.write_quoted_blob(&mut out, value);
        out
    }
}

/// Write `value` replacing every `search` character with `replace`.
pub fn write_escaped(out: &mut String, value: &str, search: char, replace: &str) {
    let mut position = 0;
    for (i, c) in value.char_indices() {
        if c == search {
            out.push_str(&value[position..i]);
            out.push_str(replace);
            position = i + c.len_utf8();
        }
    }
    out.push_str(&value[position..]);
}

/// Backslash escaping of quotes, backslashes and NUL.
///
/// Ignores the character set and escaping rules of the actual database, the result is only good
/// for reading. Used when no [`Quoter`] is available.
pub fn write_slashed(out: &mut String, value: &str) {
    let mut position = 0;
    for (i, c) in value.char_indices() {
        let replace = match c {
            '\'' => "\\'",
            '"' => "\\\"",
            '\\' => "\\\\",
            '\0' => "\\0",
            _ => continue,
        };
        out.push_str(&value[position..i]);
        out.push_str(replace);
        position = i + 1;
    }
    out.push_str(&value[position..]);
}

/// ANSI string literals: single quotes, embedded quotes doubled.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericQuoter;

impl Quoter for GenericQuoter {
    fn as_dyn(&self) -> &dyn Quoter {
        self
    }
    fn write_quoted(&self, out: &mut String, value: &str) {
        out.push('\'');
        write_escaped(out, value, '\'', "''");
        out.push('\'');
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct SqliteQuoter;

impl Quoter for SqliteQuoter {
    fn as_dyn(&self) -> &dyn Quoter {
        self
    }
    fn write_quoted(&self, out: &mut String, value: &str) {
        GenericQuoter.write_quoted(out, value);
    }
}

/// Assumes `standard_conforming_strings`, backslashes are literal.
#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresQuoter;

impl Quoter for PostgresQuoter {
    fn as_dyn(&self) -> &dyn Quoter {
        self
    }
    fn write_quoted(&self, out: &mut String, value: &str) {
        GenericQuoter.write_quoted(out, value);
    }
    fn write_quoted_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("'\\x");
        out.push_str(&hex::encode_upper(value));
        out.push_str("'::BYTEA");
    }
}

/// Escapes the characters `mysql_real_escape_string` does.
#[derive(Default, Debug, Clone, Copy)]
pub struct MySqlQuoter;

impl Quoter for MySqlQuoter {
    fn as_dyn(&self) -> &dyn Quoter {
        self
    }
    fn write_quoted(&self, out: &mut String, value: &str) {
        out.push('\'');
        let mut position = 0;
        for (i, c) in value.char_indices() {
            let replace = match c {
                '\0' => "\\0",
                '\n' => "\\n",
                '\r' => "\\r",
                '\\' => "\\\\",
                '\'' => "\\'",
                '"' => "\\\"",
                '\x1a' => "\\Z",
                _ => continue,
            };
            out.push_str(&value[position..i]);
            out.push_str(replace);
            position = i + 1;
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }
}
