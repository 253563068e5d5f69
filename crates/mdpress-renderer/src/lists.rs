//! List pass: nested ordered/unordered list recognition.
//!
//! Single left-to-right walk driven by an explicit cursor and an explicit
//! stack of open list contexts. Nesting is handled by pushing and popping
//! [`ListContext`] values rather than by call-stack recursion, so arbitrarily
//! deep and long lists cannot exhaust the stack. All walk state lives in a
//! per-call [`ListWalk`]; nothing is shared across conversions.

/// One currently open `<ol>`/`<ul>` element.
///
/// Stack invariant: levels strictly increase from the bottom of the stack to
/// the top, and at most one context is open per level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ListContext {
    /// Indentation level: count of leading whitespace units before the marker.
    level: usize,
    /// True for `<ol>`, false for `<ul>`.
    ordered: bool,
    /// Marker character: `*`, `+` or `-` for unordered items, the `.` or `)`
    /// delimiter for ordered items.
    marker: char,
}

impl ListContext {
    fn open_tag(self) -> &'static str {
        if self.ordered { "<ol>" } else { "<ul>" }
    }

    fn close_tag(self) -> &'static str {
        if self.ordered { "</ol>" } else { "</ul>" }
    }

    fn matches(self, item: &ListItem<'_>) -> bool {
        self.level == item.level && self.ordered == item.ordered && self.marker == item.marker
    }
}

/// A parsed list-item line.
#[derive(Debug, PartialEq, Eq)]
struct ListItem<'a> {
    level: usize,
    ordered: bool,
    marker: char,
    content: &'a str,
}

/// Converts list-item lines into nested `<ol>`/`<ul>`/`<li>` markup.
///
/// Non-list, non-blank lines close any open lists and receive a trailing
/// `<br>` so plain-paragraph line breaks survive in the rendered page.
/// Blank lines pass through without closing an open list.
pub struct ListTransformer;

impl ListTransformer {
    /// Run the list pass.
    #[must_use]
    pub fn transform(lines: &[String]) -> Vec<String> {
        let mut walk = ListWalk::new(lines);
        walk.run();
        walk.output
    }
}

/// Per-call walk state: cursor, open-context stack, output buffer.
struct ListWalk<'a> {
    lines: &'a [String],
    cursor: usize,
    stack: Vec<ListContext>,
    output: Vec<String>,
}

impl<'a> ListWalk<'a> {
    fn new(lines: &'a [String]) -> Self {
        Self {
            lines,
            cursor: 0,
            stack: Vec::new(),
            output: Vec::with_capacity(lines.len()),
        }
    }

    fn run(&mut self) {
        while self.cursor < self.lines.len() {
            let line = &self.lines[self.cursor];
            match parse_item(line) {
                Some(item) => self.list_line(&item),
                None => self.plain_line(line),
            }
            // The cursor strictly advances every step; outdent reprocessing
            // happens inside list_line without consuming further lines.
            self.cursor += 1;
        }
        self.close_all();
    }

    /// Handle one list-item line against the current stack.
    fn list_line(&mut self, item: &ListItem<'_>) {
        loop {
            let Some(top) = self.stack.last().copied() else {
                self.open(item);
                self.push_item(item);
                return;
            };

            if top.matches(item) {
                self.push_item(item);
                return;
            }

            if item.level == top.level {
                // Same level, different marker or order: the whole structure
                // restarts rather than nesting.
                self.close_all();
                self.open(item);
                self.push_item(item);
                return;
            }

            if item.level > top.level {
                // Deeper than anything open: new sublist.
                self.open(item);
                self.push_item(item);
                return;
            }

            // Outdent. If the level matches an open ancestor, close the
            // innermost context and reprocess against the new top. Otherwise
            // the indentation maps to no open context (malformed nesting):
            // treat it as an outdent to the root and start fresh.
            if self.stack.iter().any(|ctx| ctx.level == item.level) {
                self.close_innermost();
            } else {
                self.close_all();
            }
        }
    }

    fn plain_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            // A blank line does not by itself close the list.
            self.output.push(line.to_owned());
        } else {
            self.close_all();
            self.output.push(format!("{line}<br>"));
        }
    }

    fn open(&mut self, item: &ListItem<'_>) {
        let context = ListContext {
            level: item.level,
            ordered: item.ordered,
            marker: item.marker,
        };
        debug_assert!(self.stack.last().is_none_or(|top| top.level < context.level));
        self.output.push(context.open_tag().to_owned());
        self.stack.push(context);
    }

    fn push_item(&mut self, item: &ListItem<'_>) {
        self.output.push(format!("<li>{}</li>", item.content));
    }

    fn close_innermost(&mut self) {
        if let Some(context) = self.stack.pop() {
            self.output.push(context.close_tag().to_owned());
        }
    }

    /// Close every open context, innermost first.
    fn close_all(&mut self) {
        while !self.stack.is_empty() {
            self.close_innermost();
        }
    }
}

/// Parse a list-item line: indentation, marker, required whitespace, and
/// required non-empty content. A marker alone on a line is not a list item.
fn parse_item(line: &str) -> Option<ListItem<'_>> {
    let level = line
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    let rest = &line[level..];

    let (ordered, marker, after_marker) = if let Some(first) = rest.chars().next()
        && matches!(first, '*' | '+' | '-')
    {
        (false, first, &rest[first.len_utf8()..])
    } else {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let delimiter = rest[digits..].chars().next()?;
        if delimiter != '.' && delimiter != ')' {
            return None;
        }
        (true, delimiter, &rest[digits + delimiter.len_utf8()..])
    };

    let content = after_marker.trim_start();
    if content.len() == after_marker.len() {
        // No whitespace after the marker (`-text`, `1.text`).
        return None;
    }
    if content.is_empty() {
        return None;
    }

    Some(ListItem {
        level,
        ordered,
        marker,
        content,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn transform(input: &[&str]) -> Vec<String> {
        let lines: Vec<String> = input.iter().map(|s| (*s).to_owned()).collect();
        ListTransformer::transform(&lines)
    }

    fn tag_balance(output: &[String]) -> (usize, usize) {
        let opens = output
            .iter()
            .filter(|l| *l == "<ul>" || *l == "<ol>")
            .count();
        let closes = output
            .iter()
            .filter(|l| *l == "</ul>" || *l == "</ol>")
            .count();
        (opens, closes)
    }

    #[test]
    fn test_parse_unordered_item() {
        let item = parse_item("- milk").unwrap();
        assert_eq!(
            item,
            ListItem {
                level: 0,
                ordered: false,
                marker: '-',
                content: "milk"
            }
        );
    }

    #[test]
    fn test_parse_ordered_item() {
        let item = parse_item("12) twelve").unwrap();
        assert_eq!(
            item,
            ListItem {
                level: 0,
                ordered: true,
                marker: ')',
                content: "twelve"
            }
        );
    }

    #[test]
    fn test_parse_item_counts_indentation_units() {
        assert_eq!(parse_item("  - a").unwrap().level, 2);
        assert_eq!(parse_item("\t- a").unwrap().level, 1);
        assert_eq!(parse_item(" \t - a").unwrap().level, 3);
    }

    #[test]
    fn test_marker_without_content_is_not_an_item() {
        assert!(parse_item("-").is_none());
        assert!(parse_item("- ").is_none());
        assert!(parse_item("1.   ").is_none());
    }

    #[test]
    fn test_marker_without_whitespace_is_not_an_item() {
        assert!(parse_item("-text").is_none());
        assert!(parse_item("1.text").is_none());
        assert!(parse_item("*bold*").is_none());
    }

    #[test]
    fn test_digits_without_delimiter_are_not_an_item() {
        assert!(parse_item("1985 was a year").is_none());
        assert!(parse_item("12 monkeys").is_none());
    }

    #[test]
    fn test_flat_unordered_list() {
        assert_eq!(
            transform(&["- a", "- b"]),
            vec!["<ul>", "<li>a</li>", "<li>b</li>", "</ul>"]
        );
    }

    #[test]
    fn test_flat_ordered_list() {
        assert_eq!(
            transform(&["1. first", "2. second"]),
            vec!["<ol>", "<li>first</li>", "<li>second</li>", "</ol>"]
        );
    }

    #[test]
    fn test_nested_list_close_on_outdent() {
        assert_eq!(
            transform(&["- a", "  - b", "- c"]),
            vec![
                "<ul>",
                "<li>a</li>",
                "<ul>",
                "<li>b</li>",
                "</ul>",
                "<li>c</li>",
                "</ul>"
            ]
        );
    }

    #[test]
    fn test_outdent_across_multiple_levels() {
        assert_eq!(
            transform(&["- a", "  - b", "    - c", "- d"]),
            vec![
                "<ul>",
                "<li>a</li>",
                "<ul>",
                "<li>b</li>",
                "<ul>",
                "<li>c</li>",
                "</ul>",
                "</ul>",
                "<li>d</li>",
                "</ul>"
            ]
        );
    }

    #[test]
    fn test_marker_switch_closes_list() {
        // Distinct marker at the same level restarts the list even though
        // both markers are unordered.
        assert_eq!(
            transform(&["- a", "* b"]),
            vec!["<ul>", "<li>a</li>", "</ul>", "<ul>", "<li>b</li>", "</ul>"]
        );
    }

    #[test]
    fn test_order_switch_closes_list() {
        assert_eq!(
            transform(&["- a", "1. b"]),
            vec!["<ul>", "<li>a</li>", "</ul>", "<ol>", "<li>b</li>", "</ol>"]
        );
    }

    #[test]
    fn test_ordered_delimiter_switch_closes_list() {
        assert_eq!(
            transform(&["1. a", "2) b"]),
            vec!["<ol>", "<li>a</li>", "</ol>", "<ol>", "<li>b</li>", "</ol>"]
        );
    }

    #[test]
    fn test_marker_switch_in_sublist_closes_everything() {
        // The new context opens at the document root, not inside the outer
        // list.
        assert_eq!(
            transform(&["- a", "  - b", "  * c"]),
            vec![
                "<ul>",
                "<li>a</li>",
                "<ul>",
                "<li>b</li>",
                "</ul>",
                "</ul>",
                "<ul>",
                "<li>c</li>",
                "</ul>"
            ]
        );
    }

    #[test]
    fn test_ordered_and_unordered_nesting() {
        assert_eq!(
            transform(&["1. a", "  - b", "2. c"]),
            vec![
                "<ol>",
                "<li>a</li>",
                "<ul>",
                "<li>b</li>",
                "</ul>",
                "<li>c</li>",
                "</ol>"
            ]
        );
    }

    #[test]
    fn test_blank_line_keeps_list_open() {
        assert_eq!(
            transform(&["- a", "", "- b"]),
            vec!["<ul>", "<li>a</li>", "", "<li>b</li>", "</ul>"]
        );
    }

    #[test]
    fn test_plain_line_closes_all_open_lists() {
        assert_eq!(
            transform(&["- a", "  - b", "done"]),
            vec![
                "<ul>",
                "<li>a</li>",
                "<ul>",
                "<li>b</li>",
                "</ul>",
                "</ul>",
                "done<br>"
            ]
        );
    }

    #[test]
    fn test_paragraph_break_markers() {
        assert_eq!(
            transform(&["line one", "", "line two"]),
            vec!["line one<br>", "", "line two<br>"]
        );
    }

    #[test]
    fn test_pass_without_list_markers_only_adds_breaks() {
        assert_eq!(
            transform(&["<h1>Title</h1>", "", "text"]),
            vec!["<h1>Title</h1><br>", "", "text<br>"]
        );
    }

    #[test]
    fn test_unterminated_list_closes_at_end_of_input() {
        assert_eq!(
            transform(&["- a", "  - b"]),
            vec!["<ul>", "<li>a</li>", "<ul>", "<li>b</li>", "</ul>", "</ul>"]
        );
    }

    #[test]
    fn test_malformed_outdent_below_root_restarts() {
        // The second item's level maps to no open context: everything closes
        // and a fresh list opens at the new level.
        assert_eq!(
            transform(&["  - a", "    - b", " - c"]),
            vec![
                "<ul>",
                "<li>a</li>",
                "<ul>",
                "<li>b</li>",
                "</ul>",
                "</ul>",
                "<ul>",
                "<li>c</li>",
                "</ul>"
            ]
        );
    }

    #[test]
    fn test_outdent_to_intermediate_level_with_different_marker() {
        // Outdent pops back to the ancestor level, where the marker mismatch
        // then restarts the structure.
        assert_eq!(
            transform(&["- a", "  - b", "* c"]),
            vec![
                "<ul>",
                "<li>a</li>",
                "<ul>",
                "<li>b</li>",
                "</ul>",
                "</ul>",
                "<ul>",
                "<li>c</li>",
                "</ul>"
            ]
        );
    }

    #[test]
    fn test_item_content_keeps_leading_digits() {
        assert_eq!(
            transform(&["- 1984 review"]),
            vec!["<ul>", "<li>1984 review</li>", "</ul>"]
        );
    }

    #[test]
    fn test_open_close_tag_balance() {
        let inputs: &[&[&str]] = &[
            &["- a", "* b", "1. c", "2) d"],
            &["- a", "  - b", "    - c", " - d", "text"],
            &["1. a", "  1. b", "- c", "", "- d"],
            &["  - a", "- b", "  - c"],
            &["- a", "  - b", "", "", "end"],
        ];
        for input in inputs {
            let output = transform(input);
            let (opens, closes) = tag_balance(&output);
            assert_eq!(opens, closes, "unbalanced tags for {input:?}");
        }
    }

    #[test]
    fn test_deeply_nested_long_list_terminates() {
        // Stack-driven walk: depth is bounded by the context vector, not by
        // call-stack frames.
        let mut input = Vec::new();
        for depth in 0..500 {
            input.push(format!("{}- item", " ".repeat(depth)));
        }
        let output = ListTransformer::transform(&input);
        let (opens, closes) = tag_balance(&output);
        assert_eq!(opens, 500);
        assert_eq!(closes, 500);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transform(&[]), Vec::<String>::new());
    }
}
