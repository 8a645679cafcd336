use rstest::rstest;
use serde_json::{json, Value};

use super::*;

fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(true)
        .try_init();
}

fn convert(markdown: &str) -> Vec<Request> {
    init_tracing();
    MarkdownConverter::default().convert(markdown, 1).unwrap()
}

fn as_json(requests: &[Request]) -> Value {
    serde_json::to_value(requests).unwrap()
}

#[test]
fn simple_bold() {
    let requests = convert("Here is **bold** text");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "Here is bold text\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 9, "endIndex": 13},
                "textStyle": {"bold": true},
                "fields": "bold",
            }},
        ]),
    );
}

#[test]
fn bold_respects_the_start_index() {
    init_tracing();
    let requests = MarkdownConverter::default()
        .convert("Here is **bold** text", 5)
        .unwrap();
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 5}, "text": "Here is bold text\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 13, "endIndex": 17},
                "textStyle": {"bold": true},
                "fields": "bold",
            }},
        ]),
    );
}

#[test]
fn second_list_compensates_for_removed_tabs() {
    let requests = convert("- A\n  - B\n- C\n\n1. X\n   1. Y\n");
    // The first bullet range removes one TAB, so the ordered list's range
    // drops by one on both ends.
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "A\n\tB\nC\nX\n\tY\n"}},
            {"createParagraphBullets": {
                "range": {"startIndex": 1, "endIndex": 8},
                "bulletPreset": "BULLET_DISC_CIRCLE_SQUARE",
            }},
            {"createParagraphBullets": {
                "range": {"startIndex": 7, "endIndex": 12},
                "bulletPreset": "NUMBERED_DECIMAL_ALPHA_ROMAN",
            }},
        ]),
    );
}

#[test]
fn blockquote_with_inline_styles() {
    let requests = convert("> Be *careful*.");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "Be careful.\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 1, "endIndex": 13},
                "textStyle": {"italic": true},
                "fields": "italic",
            }},
            {"updateTextStyle": {
                "range": {"startIndex": 4, "endIndex": 11},
                "textStyle": {"italic": true},
                "fields": "italic",
            }},
            {"updateParagraphStyle": {
                "range": {"startIndex": 1, "endIndex": 13},
                "paragraphStyle": {
                    "indentStart": {"magnitude": 36.0, "unit": "PT"},
                    "indentFirstLine": {"magnitude": 36.0, "unit": "PT"},
                    "borderLeft": {
                        "color": {"color": {"rgbColor": {"red": 0.7, "green": 0.7, "blue": 0.7}}},
                        "width": {"magnitude": 3.0, "unit": "PT"},
                        "padding": {"magnitude": 12.0, "unit": "PT"},
                        "dashStyle": "SOLID",
                    },
                },
                "fields": "indentStart,indentFirstLine,borderLeft",
            }},
        ]),
    );
}

#[test]
fn heading_after_list_clears_inherited_bullets() {
    let requests = convert("- item\n\n# H");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "item\nH\n"}},
            {"updateParagraphStyle": {
                "range": {"startIndex": 6, "endIndex": 7},
                "paragraphStyle": {"namedStyleType": "HEADING_1"},
                "fields": "namedStyleType",
            }},
            {"createParagraphBullets": {
                "range": {"startIndex": 1, "endIndex": 6},
                "bulletPreset": "BULLET_DISC_CIRCLE_SQUARE",
            }},
            {"deleteParagraphBullets": {
                "range": {"startIndex": 6, "endIndex": 7},
            }},
        ]),
    );
}

#[test]
fn two_by_two_table() {
    let requests = convert("| a | b |\n|---|---|\n| 1 | 2 |");
    // Cell insertion indices follow the empty-table layout plus the lengths
    // of cells already inserted: 4, 6+1, 9+2, 11+3.
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertTable": {"location": {"index": 1}, "rows": 2, "columns": 2}},
            {"insertText": {"location": {"index": 4}, "text": "a"}},
            {"insertText": {"location": {"index": 7}, "text": "b"}},
            {"insertText": {"location": {"index": 11}, "text": "1"}},
            {"insertText": {"location": {"index": 14}, "text": "2"}},
            {"updateTextStyle": {
                "range": {"startIndex": 4, "endIndex": 8},
                "textStyle": {"bold": true},
                "fields": "bold",
            }},
        ]),
    );
}

#[test]
fn strikethrough_and_task_list() {
    let requests = convert("- [x] done ~~old~~\n- [ ] todo");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "☑ done old\n☐ todo\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 8, "endIndex": 11},
                "textStyle": {"strikethrough": true},
                "fields": "strikethrough",
            }},
            {"createParagraphBullets": {
                "range": {"startIndex": 1, "endIndex": 19},
                "bulletPreset": "BULLET_DISC_CIRCLE_SQUARE",
            }},
        ]),
    );
}

#[test]
fn empty_input_plans_nothing() {
    assert_eq!(convert(""), vec![]);
    assert_eq!(convert("\n\n"), vec![]);
}

#[test]
fn empty_heading_styles_its_newline() {
    let requests = convert("#");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "\n"}},
            {"updateParagraphStyle": {
                "range": {"startIndex": 1, "endIndex": 2},
                "paragraphStyle": {"namedStyleType": "HEADING_1"},
                "fields": "namedStyleType",
            }},
        ]),
    );
}

#[rstest]
#[case(1, "HEADING_1")]
#[case(2, "HEADING_2")]
#[case(3, "HEADING_3")]
#[case(4, "HEADING_4")]
#[case(5, "HEADING_5")]
#[case(6, "HEADING_6")]
fn heading_levels_map_to_named_styles(#[case] level: usize, #[case] named: &str) {
    let requests = convert(&format!("{} title", "#".repeat(level)));
    let body = as_json(&requests);
    assert_eq!(
        body[1]["updateParagraphStyle"]["paragraphStyle"]["namedStyleType"],
        json!(named),
    );
}

#[test]
fn adjacent_bold_runs_stay_separate() {
    let requests = convert("**a****b**");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "ab\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 1, "endIndex": 2},
                "textStyle": {"bold": true},
                "fields": "bold",
            }},
            {"updateTextStyle": {
                "range": {"startIndex": 2, "endIndex": 3},
                "textStyle": {"bold": true},
                "fields": "bold",
            }},
        ]),
    );
}

#[test]
fn bold_and_italic_over_one_range_collapse() {
    let requests = convert("***x***");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "x\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 1, "endIndex": 2},
                "textStyle": {"bold": true, "italic": true},
                "fields": "bold,italic",
            }},
        ]),
    );
}

#[test]
fn deep_list_drop_back_keeps_one_range() {
    let requests = convert("- a\n  - b\n    - c\n- d");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "a\n\tb\n\t\tc\nd\n"}},
            {"createParagraphBullets": {
                "range": {"startIndex": 1, "endIndex": 12},
                "bulletPreset": "BULLET_DISC_CIRCLE_SQUARE",
            }},
        ]),
    );
}

#[test]
fn paragraph_after_nested_list_shifts_by_removed_tabs() {
    let requests = convert("- a\n  - b\n\ntail");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "a\n\tb\ntail\n"}},
            {"createParagraphBullets": {
                "range": {"startIndex": 1, "endIndex": 6},
                "bulletPreset": "BULLET_DISC_CIRCLE_SQUARE",
            }},
            {"deleteParagraphBullets": {
                "range": {"startIndex": 5, "endIndex": 9},
            }},
        ]),
    );
}

#[test]
fn one_by_one_table() {
    let requests = convert("| x |\n|---|");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertTable": {"location": {"index": 1}, "rows": 1, "columns": 1}},
            {"insertText": {"location": {"index": 4}, "text": "x"}},
            {"updateTextStyle": {
                "range": {"startIndex": 4, "endIndex": 5},
                "textStyle": {"bold": true},
                "fields": "bold",
            }},
        ]),
    );
}

#[test]
fn table_splits_the_single_insert_at_its_seam() {
    let requests = convert("before\n\n| a |\n|---|\n\nafter");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "before\nafter\n"}},
            {"insertTable": {"location": {"index": 8}, "rows": 1, "columns": 1}},
            {"insertText": {"location": {"index": 11}, "text": "a"}},
            {"updateTextStyle": {
                "range": {"startIndex": 11, "endIndex": 12},
                "textStyle": {"bold": true},
                "fields": "bold",
            }},
        ]),
    );
}

#[test]
fn header_bolding_can_be_disabled() {
    init_tracing();
    let requests = MarkdownConverter::with_config(Config {
        bold_header_rows: false,
        ..Default::default()
    })
    .convert("| x |\n|---|", 1)
    .unwrap();
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertTable": {"location": {"index": 1}, "rows": 1, "columns": 1}},
            {"insertText": {"location": {"index": 4}, "text": "x"}},
        ]),
    );
}

#[test]
fn pure_text_is_a_single_insert_with_softbreaks_as_spaces() {
    let requests = convert("hello\nworld");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "hello world\n"}},
        ]),
    );
}

#[test]
fn link_text_is_underlined_blue_and_carries_the_url() {
    let requests = convert("[hi](https://e.com)");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "hi\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 1, "endIndex": 3},
                "textStyle": {
                    "underline": true,
                    "foregroundColor": {
                        "color": {"rgbColor": {"red": 0.0667, "green": 0.3333, "blue": 0.8}},
                    },
                    "link": {"url": "https://e.com"},
                },
                "fields": "underline,foregroundColor,link",
            }},
        ]),
    );
}

#[test]
fn inline_code_is_monospace_on_gray() {
    let requests = convert("a `b` c");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "a b c\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 3, "endIndex": 4},
                "textStyle": {
                    "weightedFontFamily": {"fontFamily": "Consolas", "weight": 400},
                    "backgroundColor": {
                        "color": {"rgbColor": {"red": 0.96, "green": 0.96, "blue": 0.96}},
                    },
                },
                "fields": "weightedFontFamily,backgroundColor",
            }},
        ]),
    );
}

#[test]
fn fenced_code_styles_font_and_shades_the_paragraph() {
    let requests = convert("```\nlet x = 1;\n```\n");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "let x = 1;\n\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 1, "endIndex": 12},
                "textStyle": {
                    "weightedFontFamily": {"fontFamily": "Consolas", "weight": 400},
                },
                "fields": "weightedFontFamily",
            }},
            {"updateParagraphStyle": {
                "range": {"startIndex": 1, "endIndex": 12},
                "paragraphStyle": {
                    "shading": {
                        "backgroundColor": {
                            "color": {"rgbColor": {"red": 0.96, "green": 0.96, "blue": 0.96}},
                        },
                    },
                },
                "fields": "shading",
            }},
        ]),
    );
}

#[test]
fn horizontal_rule_is_an_empty_bordered_paragraph() {
    let requests = convert("a\n\n---\n\nb");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "a\n\nb\n"}},
            {"updateParagraphStyle": {
                "range": {"startIndex": 3, "endIndex": 4},
                "paragraphStyle": {
                    "borderBottom": {
                        "color": {"color": {"rgbColor": {"red": 0.7, "green": 0.7, "blue": 0.7}}},
                        "width": {"magnitude": 1.0, "unit": "PT"},
                        "padding": {"magnitude": 6.0, "unit": "PT"},
                        "dashStyle": "SOLID",
                    },
                },
                "fields": "borderBottom",
            }},
        ]),
    );
}

#[test]
fn nested_blockquote_indents_win_inside_out() {
    let requests = convert(">> deep");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "deep\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 1, "endIndex": 6},
                "textStyle": {"italic": true},
                "fields": "italic",
            }},
            {"updateParagraphStyle": {
                "range": {"startIndex": 1, "endIndex": 6},
                "paragraphStyle": {
                    "indentStart": {"magnitude": 36.0, "unit": "PT"},
                    "indentFirstLine": {"magnitude": 36.0, "unit": "PT"},
                    "borderLeft": {
                        "color": {"color": {"rgbColor": {"red": 0.7, "green": 0.7, "blue": 0.7}}},
                        "width": {"magnitude": 3.0, "unit": "PT"},
                        "padding": {"magnitude": 12.0, "unit": "PT"},
                        "dashStyle": "SOLID",
                    },
                },
                "fields": "indentStart,indentFirstLine,borderLeft",
            }},
            {"updateParagraphStyle": {
                "range": {"startIndex": 1, "endIndex": 6},
                "paragraphStyle": {
                    "indentStart": {"magnitude": 72.0, "unit": "PT"},
                    "indentFirstLine": {"magnitude": 72.0, "unit": "PT"},
                    "borderLeft": {
                        "color": {"color": {"rgbColor": {"red": 0.7, "green": 0.7, "blue": 0.7}}},
                        "width": {"magnitude": 3.0, "unit": "PT"},
                        "padding": {"magnitude": 12.0, "unit": "PT"},
                        "dashStyle": "SOLID",
                    },
                },
                "fields": "indentStart,indentFirstLine,borderLeft",
            }},
        ]),
    );
}

#[test]
fn images_insert_last_and_earlier_ranges_compensate() {
    let requests = convert("![i](https://a.example/b.png)\n\nnext **b**");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "\nnext b\n"}},
            {"updateTextStyle": {
                "range": {"startIndex": 7, "endIndex": 8},
                "textStyle": {"bold": true},
                "fields": "bold",
            }},
            {"insertInlineImage": {
                "location": {"index": 1},
                "uri": "https://a.example/b.png",
            }},
        ]),
    );
}

#[test]
fn unusable_image_uris_are_skipped() {
    let requests = convert("![x]()");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "\n"}},
        ]),
    );
}

#[test]
fn image_alt_text_never_reaches_the_document() {
    let requests = convert("see ![the *alt*](https://a.example/i.png) here");
    assert_eq!(
        as_json(&requests),
        json!([
            {"insertText": {"location": {"index": 1}, "text": "see  here\n"}},
            {"insertInlineImage": {
                "location": {"index": 5},
                "uri": "https://a.example/i.png",
            }},
        ]),
    );
}

#[test]
fn mismatched_close_is_malformed() {
    init_tracing();
    let events = vec![
        Event::Start(Tag::Paragraph),
        Event::End(TagEnd::Heading(HeadingLevel::H1)),
    ];
    let result = converter::ConvertState::new(Config::default(), 1).convert(events.into_iter());
    assert!(matches!(result, Err(ConvertError::MalformedMarkdown(_))));
}

#[test]
fn unclosed_block_is_malformed() {
    init_tracing();
    let events = vec![Event::Start(Tag::Paragraph)];
    let result = converter::ConvertState::new(Config::default(), 1).convert(events.into_iter());
    assert!(matches!(result, Err(ConvertError::MalformedMarkdown(_))));
}

#[test]
fn conversion_is_deterministic() {
    let markdown = "\
# All together

Intro with **bold**, *italic*, ~~gone~~, `code`, and [a link](https://e.com).

> A quote
> over two lines

- one
  - two
- [x] three

| h1 | h2 |
|----|----|
| c1 | c2 |

---

![logo](https://e.com/l.png)
";
    let first = as_json(&convert(markdown));
    let second = as_json(&convert(markdown));
    assert_eq!(first, second);
}

/// Walk every emitted request and check the well-formedness the service
/// demands: 1-based indices and nonempty, forward ranges.
fn assert_well_formed(requests: &[Request]) {
    for request in requests {
        match request {
            Request::InsertText { location, text } => {
                assert!(location.index >= 1);
                assert!(!text.is_empty());
            }
            Request::InsertInlineImage { location, .. }
            | Request::InsertTable { location, .. } => {
                assert!(location.index >= 1);
            }
            Request::UpdateTextStyle { range, fields, .. } => {
                assert!(range.start_index >= 1);
                assert!(range.start_index < range.end_index);
                assert!(!fields.is_empty());
            }
            Request::UpdateParagraphStyle { range, fields, .. } => {
                assert!(range.start_index >= 1);
                assert!(range.start_index < range.end_index);
                assert!(!fields.is_empty());
            }
            Request::CreateParagraphBullets { range, .. }
            | Request::DeleteParagraphBullets { range } => {
                assert!(range.start_index >= 1);
                assert!(range.start_index < range.end_index);
            }
        }
    }
}

#[rstest]
#[case("# h\n\ntext **b** *i*\n")]
#[case("- a\n- b\n\n1. c\n\n> q\n")]
#[case("| a | b |\n|---|---|\n| c | d |\n\nafter\n")]
#[case("```\ncode\n```\n\n---\n\n![i](https://e.com/i.png) tail **b**\n")]
#[case("- [ ] open\n- [x] done\n\n## next\n")]
fn emitted_requests_are_well_formed(#[case] markdown: &str) {
    let requests = convert(markdown);
    assert_well_formed(&requests);
    // Exactly one insert originates from the text buffer; the rest populate
    // table cells and always follow their insertTable.
    let mut seen_table = false;
    let mut buffer_inserts = 0;
    for request in &requests {
        match request {
            Request::InsertTable { .. } => seen_table = true,
            Request::InsertText { .. } if !seen_table => buffer_inserts += 1,
            _ => {}
        }
    }
    assert_eq!(buffer_inserts, 1);
}
