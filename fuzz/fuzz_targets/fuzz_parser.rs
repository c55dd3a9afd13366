#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use panini::{ParseEvent, Parser, ParserOptions, State};

/// Building blocks that steer the fuzzer towards the interesting bytes.
#[derive(Debug, Arbitrary)]
enum Piece {
    Text(String),
    Space,
    Tab,
    Newline,
    CarriageReturn,
    Nul,
    Comment,
    Equals,
    Open,
    Close,
}

#[derive(Debug, Arbitrary)]
struct Input {
    stop_at_first_error: bool,
    pieces: Vec<Piece>,
}

impl Input {
    fn render(&self) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Space => out.push(' '),
                Piece::Tab => out.push('\t'),
                Piece::Newline => out.push('\n'),
                Piece::CarriageReturn => out.push('\r'),
                Piece::Nul => out.push('\0'),
                Piece::Comment => out.push(';'),
                Piece::Equals => out.push('='),
                Piece::Open => out.push('['),
                Piece::Close => out.push(']'),
            }
        }
        out
    }
}

fn is_trimmed(s: &str) -> bool {
    !s.starts_with([' ', '\t']) && !s.ends_with([' ', '\t'])
}

fn check(input: &Input) {
    let text = input.render();
    let options = ParserOptions {
        stop_at_first_error: input.stop_at_first_error,
        panic_on_error: false,
    };

    let events: Vec<_> = Parser::with_options(&text, options).collect();

    let mut last_line = 0;
    let mut errors = 0;
    for event in &events {
        let line = match event {
            ParseEvent::Value(entry) => {
                assert!(!entry.key.is_empty(), "{entry:?}");
                assert!(is_trimmed(entry.section), "{entry:?}");
                assert!(is_trimmed(entry.key), "{entry:?}");
                assert!(is_trimmed(entry.value), "{entry:?}");
                assert!(!entry.key.contains(['=', '\n', '\r', '\0']), "{entry:?}");
                entry.line
            }
            ParseEvent::Error(err) => {
                errors += 1;
                err.line
            }
        };
        assert!(line > last_line, "events out of line order: {events:?}");
        last_line = line;
    }
    if input.stop_at_first_error {
        assert!(errors <= 1);
    }

    let mut calls = 0;
    panini::parse_with(&text, options, &mut |state: State, _: &str, _: &str, _: &str| {
        assert!(matches!(state, State::Value | State::Error));
        calls += 1;
    });
    assert_eq!(calls, events.len());
}

fuzz_target!(|input: Input| check(&input));
