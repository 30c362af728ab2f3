//! Typst markup primitives shared by the composers.
//!
//! Everything the engine emits goes through this module: user text is escaped
//! with [`escape_text`], string literals with [`string_literal`], and every
//! container (grid, content block, function call) is produced by a builder
//! that writes its own closing delimiter. Composers never write a bare `(` or
//! `[` themselves, so a composed fragment is balanced by construction.
//! [`is_balanced`] is the independent check used by tests, and by debug builds
//! on the composed header.

use std::fmt;

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Fragment
// ────────────────────────────────────────────────────────────────────────────

/// An already-serialized unit of output markup.
///
/// The engine concatenates fragments but never looks inside them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Wraps markup produced elsewhere (e.g. by a section renderer).
    pub fn raw(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn push(&mut self, other: &Fragment) {
        self.0.push_str(&other.0);
    }

    pub fn push_line(&mut self, line: &str) {
        self.0.push_str(line);
        self.0.push('\n');
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Concatenates fragments in order with no separator.
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Fragment>) -> Fragment {
        let mut out = Fragment::new();
        for part in parts {
            out.push(part);
        }
        out
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Escaping
// ────────────────────────────────────────────────────────────────────────────

/// Characters with structural meaning anywhere in Typst markup mode.
/// `/` is included because `//` and `/*` open comments.
const MARKUP_SPECIALS: &[char] = &[
    '\\', '#', '[', ']', '{', '}', '(', ')', '$', '*', '_', '`', '<', '>', '@', '~', '"', '/',
];

/// Heading and list markers, special only at the start of a line.
const LINE_START_MARKERS: &[char] = &['=', '-', '+'];

/// Escapes free-form text so it is inert inside a markup content block.
///
/// Every content block and every line begins a new markup line, so heading
/// and list markers there are escaped too, including the `.` of `12.`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut line_start = true;

    while let Some(c) = chars.next() {
        if line_start {
            if c == ' ' || c == '\t' {
                out.push(c);
                continue;
            }
            line_start = false;
            if LINE_START_MARKERS.contains(&c) {
                out.push('\\');
                out.push(c);
                continue;
            }
            if c.is_ascii_digit() {
                out.push(c);
                while let Some(d) = chars.next_if(char::is_ascii_digit) {
                    out.push(d);
                }
                if chars.next_if_eq(&'.').is_some() {
                    out.push_str("\\.");
                }
                continue;
            }
        }
        if c == '\n' {
            line_start = true;
        } else if MARKUP_SPECIALS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Quotes a value as a Typst string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

/// A content block holding escaped text, e.g. `[jane\@x.com]`.
pub fn content(text: &str) -> String {
    format!("[{}]", escape_text(text))
}

/// A code-mode call with named arguments and a trailing content body,
/// e.g. `#pad(left: 0.4cm)[...]` or `text(fill: white)[Go]`.
pub fn call_with_body(func: &str, args: &[(&str, &str)], body: &str) -> String {
    format!("{func}({})[{body}]", named_args(args))
}

/// A code-mode call with named arguments followed by positional ones.
pub fn call(func: &str, args: &[(&str, &str)], positional: &[String]) -> String {
    let mut parts: Vec<String> = args.iter().map(|(k, v)| format!("{k}: {v}")).collect();
    parts.extend(positional.iter().cloned());
    format!("{func}({})", parts.join(", "))
}

/// A tuple expression such as `(auto, 1fr)`.
pub fn tuple(items: &[&str]) -> String {
    format!("({})", items.join(", "))
}

fn named_args(args: &[(&str, &str)]) -> String {
    args.iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Multi-line `#grid(...)` with one content block per cell.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: Vec<String>,
    options: Vec<(&'static str, String)>,
    cells: Vec<Fragment>,
}

impl Grid {
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            options: Vec::new(),
            cells: Vec::new(),
        }
    }

    pub fn option(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.options.push((name, value.into()));
        self
    }

    pub fn cell(mut self, content: Fragment) -> Self {
        self.cells.push(content);
        self
    }

    pub fn build(self) -> Fragment {
        let columns: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        let mut out = Fragment::new();
        out.push_line("#grid(");
        out.push_line(&format!("  columns: {},", tuple(&columns)));
        for (name, value) in &self.options {
            out.push_line(&format!("  {name}: {value},"));
        }
        for cell in &self.cells {
            out.push_line("  [");
            out.push(cell);
            if !cell.is_empty() && !cell.as_str().ends_with('\n') {
                out.push_line("");
            }
            out.push_line("  ],");
        }
        out.push_line(")");
        out
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Balance check
// ────────────────────────────────────────────────────────────────────────────

/// Returns true if every `(`, `[` and `{` in `markup` is closed in order.
///
/// Backslash escapes are skipped, and delimiters inside `"..."` string
/// literals are ignored. Escaped text never contains a bare `"`, so every
/// unescaped quote in engine output delimits a literal. Line and block
/// comments are skipped the way Typst skips them, so a comment that hides a
/// closing delimiter makes the markup unbalanced.
pub fn is_balanced(markup: &str) -> bool {
    let mut stack: Vec<char> = Vec::new();
    let mut chars = markup.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
            continue;
        }
        if in_string {
            if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '/' if chars.next_if_eq(&'/').is_some() => {
                while chars.next_if(|&n| n != '\n').is_some() {}
            }
            '/' if chars.next_if_eq(&'*').is_some() => {
                if !skip_block_comment(&mut chars) {
                    return false;
                }
            }
            '"' => in_string = true,
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty() && !in_string
}

/// Consumes a (possibly nested) block comment after its opening `/*`.
/// Returns false if the input ends first.
fn skip_block_comment(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> bool {
    let mut depth = 1usize;
    while let Some(c) = chars.next() {
        match c {
            '/' if chars.next_if_eq(&'*').is_some() => depth += 1,
            '*' if chars.next_if_eq(&'/').is_some() => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
