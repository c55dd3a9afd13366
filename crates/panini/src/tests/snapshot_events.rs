//! Snapshot test that pins the exact sequence of `ParseEvent`s for a small
//! document mixing sections, comments and broken lines. Useful to catch
//! unintended behaviour changes in the transition table.

use alloc::vec::Vec;

use insta::assert_yaml_snapshot;

use crate::{ParseEvent, Parser};

#[test]
fn snapshot_mixed_document() {
    let input = "; lunch
[primary]
panini = sandwich ; with cheese
bread
[secondary
crust = thin
[secondary]
= focaccia
topping=olive
";

    let events: Vec<ParseEvent> = Parser::new(input).collect();

    assert_yaml_snapshot!(events, @r#"
    - event: Value
      section: primary
      key: panini
      value: sandwich
      line: 3
    - event: Error
      kind: UnexpectedEndOfKey
      line: 4
    - event: Error
      kind: UnexpectedEndOfSection
      line: 5
    - event: Value
      section: ""
      key: crust
      value: thin
      line: 6
    - event: Error
      kind: ExpectedKey
      line: 8
    - event: Value
      section: secondary
      key: topping
      value: olive
      line: 9
    "#);
}
