//! Build-time selection of development or production code paths.
//!
//! The replace stage substitutes the literal token `process.env.NODE_ENV` with a
//! quoted mode string before minification, so the minifier can drop the dead
//! branch. Delimiters are empty: the token is matched as written, not inside a
//! `%{...}`-style template marker.
//!
//! [`EnvironmentReplace::apply`] is the reference behavior for the contract the
//! external replacer is configured with. It rewrites only whole-token
//! occurrences in code. String literals, template literals, regex literals and
//! comments are left alone, as are longer identifiers that merely start with the
//! token.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The expression rewritten by the replace stage.
pub const NODE_ENV_TOKEN: &str = "process.env.NODE_ENV";

/// Build mode injected in place of [`NODE_ENV_TOKEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    Development,
    Production,
}

impl EnvironmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of the environment replace stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentReplace {
    pub mode: EnvironmentMode,
    /// Token that is rewritten, always [`NODE_ENV_TOKEN`].
    pub token: String,
    /// JavaScript source substituted for the token, e.g. `"production"`.
    pub replacement: String,
    /// Opening and closing delimiters around the token. Both empty.
    pub delimiters: (String, String),
}

impl EnvironmentReplace {
    pub fn new(mode: EnvironmentMode) -> Self {
        Self {
            mode,
            token: NODE_ENV_TOKEN.to_string(),
            replacement: format!("\"{}\"", mode.as_str()),
            delimiters: (String::new(), String::new()),
        }
    }

    /// Rewrite every whole-token occurrence of `process.env.NODE_ENV` in code.
    ///
    /// Returns the input unchanged (borrowed) when nothing was replaced.
    pub fn apply<'a>(&self, source: &'a str) -> Cow<'a, str> {
        if !source.contains(self.token.as_str()) {
            return Cow::Borrowed(source);
        }

        let token = self.token.as_bytes();
        let bytes = source.as_bytes();
        let mut out = String::with_capacity(source.len());
        let mut state = Scan::Code;
        let mut copied = 0;
        // Index of the last significant code byte, for telling regex from division.
        let mut last = None;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];
            match state {
                Scan::Code => {
                    if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
                        state = Scan::LineComment;
                        i += 2;
                        continue;
                    }
                    if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
                        state = Scan::BlockComment;
                        i += 2;
                        continue;
                    }
                    if b == b'/' && regex_allowed(bytes, last) {
                        state = Scan::Regex { in_class: false };
                        i += 1;
                        continue;
                    }
                    if matches!(b, b'"' | b'\'' | b'`') {
                        state = Scan::Quoted(b);
                        i += 1;
                        continue;
                    }
                    if bytes[i..].starts_with(token)
                        && (i == 0 || !continues_member(bytes[i - 1]))
                        && bytes
                            .get(i + token.len())
                            .is_none_or(|&next| !is_ident_byte(next))
                    {
                        out.push_str(&source[copied..i]);
                        out.push_str(&self.replacement);
                        i += token.len();
                        copied = i;
                        last = Some(i - 1);
                        continue;
                    }
                    if !b.is_ascii_whitespace() {
                        last = Some(i);
                    }
                    i += 1;
                }
                Scan::Quoted(quote) => {
                    if b == b'\\' {
                        i += 2;
                        continue;
                    }
                    if b == quote {
                        state = Scan::Code;
                        last = Some(i);
                    }
                    i += 1;
                }
                Scan::Regex { in_class } => {
                    match b {
                        b'\\' => {
                            i += 2;
                            continue;
                        }
                        b'[' => state = Scan::Regex { in_class: true },
                        b']' => state = Scan::Regex { in_class: false },
                        b'/' if !in_class => {
                            state = Scan::Code;
                            last = Some(i);
                        }
                        // Not a regex after all; resume as code.
                        b'\n' => state = Scan::Code,
                        _ => {}
                    }
                    i += 1;
                }
                Scan::LineComment => {
                    if b == b'\n' {
                        state = Scan::Code;
                    }
                    i += 1;
                }
                Scan::BlockComment => {
                    if b == b'*' && bytes.get(i + 1) == Some(&b'/') {
                        state = Scan::Code;
                        i += 2;
                        continue;
                    }
                    i += 1;
                }
            }
        }

        if copied == 0 {
            return Cow::Borrowed(source);
        }
        out.push_str(&source[copied..]);
        Cow::Owned(out)
    }
}

#[derive(Clone, Copy)]
enum Scan {
    Code,
    // Template literals are skipped whole, `${...}` included.
    Quoted(u8),
    Regex { in_class: bool },
    LineComment,
    BlockComment,
}

// Non-ASCII bytes count as identifier characters.
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

fn continues_member(b: u8) -> bool {
    is_ident_byte(b) || b == b'.'
}

// Keywords after which `/` starts a regex literal.
const REGEX_KEYWORDS: &[&[u8]] = &[
    b"return", b"typeof", b"instanceof", b"case", b"do", b"else", b"in", b"of", b"new",
    b"delete", b"void", b"throw", b"yield", b"await",
];

/// Whether a `/` following the code byte at `last` begins a regex literal
/// rather than a division.
fn regex_allowed(bytes: &[u8], last: Option<usize>) -> bool {
    let Some(end) = last else {
        return true;
    };
    match bytes[end] {
        b if is_ident_byte(b) => {
            let start = bytes[..end]
                .iter()
                .rposition(|&c| !is_ident_byte(c))
                .map_or(0, |p| p + 1);
            REGEX_KEYWORDS.contains(&&bytes[start..=end])
        }
        // `a++ / 2` and `a-- / 2` divide.
        b @ (b'+' | b'-') => end == 0 || bytes[end - 1] != b,
        b'(' | b',' | b'=' | b':' | b'[' | b'!' | b'&' | b'|' | b'?' | b'{' | b'}' | b';'
        | b'*' | b'%' | b'<' | b'>' | b'~' | b'^' => true,
        _ => false,
    }
}
