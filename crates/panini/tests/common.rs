#![allow(missing_docs)]
#![allow(dead_code)]

use core::fmt::Write;

use panini::State;

pub const MENU: &str = "; panini menu
[breads]
  ciabatta = crisp crust ; house favourite
focaccia=olive oil
  rye =

[fillings]
mozzarella = 🧀
= orphan value
tomato
[unfinished
basil = fresh
[ drinks ]
espresso = ☕ = double
";

/// One line per sink call, formatted as `state|section|key|value`.
pub fn render(input: &str) -> String {
    let mut out = String::new();
    panini::parse(
        input,
        &mut |state: State, section: &str, key: &str, value: &str| {
            writeln!(out, "{state}|{section}|{key}|{value}").unwrap();
        },
    );
    out
}
