use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{ParseEvent, Parser};

const NAME_CHARS: &[char] = &['a', 'b', 'z', 'K', '0', '7', '_', '.', '-', '/', 'é', '🥪', '🍞'];
const COMMENT_CHARS: &[char] = &['x', ' ', '=', '[', ']', ';', '\t', '🥪'];
const PADDING: &[&str] = &["", "", " ", "\t", "  ", " \t "];
const LINE_ENDINGS: &[&str] = &["\n", "\n", "\r\n", "\r"];

/// A name with no leading or trailing whitespace and no reserved bytes.
fn name(g: &mut Gen, allow_empty: bool) -> String {
    let words = usize::arbitrary(g) % 3 + usize::from(!allow_empty);
    let mut out = String::new();
    for i in 0..words {
        if i > 0 {
            out.push_str(g.choose(&[" ", "  ", "\t"]).unwrap());
        }
        for _ in 0..=usize::arbitrary(g) % 4 {
            out.push(*g.choose(NAME_CHARS).unwrap());
        }
    }
    out
}

fn text(g: &mut Gen, alphabet: &[char]) -> String {
    (0..usize::arbitrary(g) % 8)
        .map(|_| *g.choose(alphabet).unwrap())
        .collect()
}

fn pad(g: &mut Gen) -> &'static str {
    *g.choose(PADDING).unwrap()
}

#[derive(Debug, Clone)]
enum Line {
    Blank,
    Comment(String),
    Section(String),
    Pair {
        key: String,
        value: String,
        comment: Option<String>,
    },
}

/// A well-formed document and the text it renders to.
#[derive(Debug, Clone)]
struct Document {
    lines: Vec<Line>,
    text: String,
}

impl Document {
    fn new(g: &mut Gen, lines: Vec<Line>) -> Self {
        let mut text = String::new();
        for line in &lines {
            text.push_str(pad(g));
            match line {
                Line::Blank => {}
                Line::Comment(comment) => {
                    text.push(';');
                    text.push_str(comment);
                }
                Line::Section(name) => {
                    text.push('[');
                    text.push_str(pad(g));
                    text.push_str(name);
                    text.push_str(pad(g));
                    text.push(']');
                    text.push_str(pad(g));
                }
                Line::Pair {
                    key,
                    value,
                    comment,
                } => {
                    text.push_str(key);
                    text.push_str(pad(g));
                    text.push('=');
                    text.push_str(pad(g));
                    text.push_str(value);
                    text.push_str(pad(g));
                    if let Some(comment) = comment {
                        text.push(';');
                        text.push_str(comment);
                    }
                }
            }
            let ending = *g.choose(LINE_ENDINGS).unwrap();
            // an empty line after a lone `\r` must not turn it into `\r\n`
            let ending = if text.ends_with('\r') && ending == "\n" {
                "\r\n"
            } else {
                ending
            };
            text.push_str(ending);
        }
        Self { lines, text }
    }

    /// What trimming each line by hand yields, with 1-based line numbers.
    fn expected(&self) -> Vec<Option<(String, String, String, usize)>> {
        let mut section = String::new();
        let mut out = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            match line {
                Line::Blank | Line::Comment(_) => {}
                Line::Section(name) => section.clone_from(name),
                Line::Pair { key, value, .. } => {
                    out.push(Some((section.clone(), key.clone(), value.clone(), i + 1)));
                }
            }
        }
        out
    }
}

impl Arbitrary for Document {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % (g.size() + 1);
        let lines = (0..count)
            .map(|_| match usize::arbitrary(g) % 5 {
                0 => Line::Blank,
                1 => Line::Comment(text(g, COMMENT_CHARS)),
                2 => Line::Section(name(g, false)),
                _ => {
                    let value = name(g, true);
                    // `;` directly after `=` would be read as part of the value
                    let comment = (!value.is_empty() && bool::arbitrary(g))
                        .then(|| text(g, COMMENT_CHARS));
                    Line::Pair {
                        key: name(g, false),
                        value,
                        comment,
                    }
                }
            })
            .collect();
        Self::new(g, lines)
    }
}

/// Property: a well-formed document yields exactly the hand-trimmed
/// `(section, key, value)` triples, on the lines they were written on.
#[test]
fn well_formed_documents_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Document) -> bool {
        let actual: Vec<_> = Parser::new(&doc.text)
            .map(|event| match event {
                ParseEvent::Value(entry) => Some((
                    entry.section.to_string(),
                    entry.key.to_string(),
                    entry.value.to_string(),
                    entry.line,
                )),
                ParseEvent::Error(_) => None,
            })
            .collect();
        let expected = doc.expected();
        if actual != expected {
            std::dbg!(&doc.text, &actual, &expected);
        }
        actual == expected
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Document) -> bool);
}

/// Property: whatever the input, at most one event is produced per line, in
/// line order, and every entry is trimmed.
#[quickcheck_macros::quickcheck]
fn arbitrary_input_is_line_scoped(input: String) -> bool {
    let max_line = input.bytes().filter(|b| matches!(b, b'\n' | b'\r')).count() + 1;
    let mut last_line = 0;
    for event in Parser::new(&input) {
        let line = match event {
            ParseEvent::Value(entry) => {
                let trimmed = |s: &str| s.trim_matches(|c| c == ' ' || c == '\t') == s;
                if !(trimmed(entry.section) && trimmed(entry.key) && trimmed(entry.value)) {
                    return false;
                }
                if entry.key.is_empty() || entry.key.contains(['\n', '\r', '\0', '=']) {
                    return false;
                }
                entry.line
            }
            ParseEvent::Error(err) => err.line,
        };
        if line <= last_line || line > max_line {
            return false;
        }
        last_line = line;
    }
    true
}
