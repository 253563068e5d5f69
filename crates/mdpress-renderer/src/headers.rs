//! Header pass: ATX and Setext header recognition.
//!
//! Single left-to-right pass over the line buffer. ATX lines are rewritten in
//! place; a Setext underline is consumed and promotes the most recently
//! emitted output line by index. Position-based rewriting avoids the classic
//! pitfall of content-based replacement hitting the wrong occurrence when two
//! lines are textually identical.

/// Maximum ATX heading depth; a longer `#` run is not a header.
const MAX_ATX_LEVEL: usize = 6;

/// Minimum length of a Setext underline. A lone `-` would be ambiguous with
/// an unordered list marker, so one repeated character is never an underline.
const MIN_UNDERLINE_LEN: usize = 2;

/// Converts ATX and Setext header lines into `<h1>`..`<h6>` markup.
///
/// All other lines, blank lines included, pass through unchanged.
pub struct HeaderTransformer;

impl HeaderTransformer {
    /// Run the header pass.
    ///
    /// Produces exactly one output line per ATX line and zero output lines
    /// per Setext underline (the underline rewrites its predecessor).
    #[must_use]
    pub fn transform(lines: &[String]) -> Vec<String> {
        let mut output: Vec<String> = Vec::with_capacity(lines.len());

        for (position, line) in lines.iter().enumerate() {
            if let Some((level, content)) = parse_atx(line) {
                output.push(heading(level, content));
                continue;
            }

            // An underline on the first line has nothing to promote and an
            // underline whose predecessor was itself consumed falls through
            // to pass-through.
            if position > 0
                && let Some(level) = underline_level(line)
                && let Some(prior) = output.last_mut()
            {
                let content = std::mem::take(prior);
                *prior = heading(level, &content);
                continue;
            }

            output.push(line.clone());
        }

        output
    }
}

/// Parse an ATX header: after indentation, 1-6 `#` followed by at least one
/// whitespace character and non-empty content.
fn parse_atx(line: &str) -> Option<(usize, &str)> {
    let rest = line.trim_start();
    let run = rest.len() - rest.trim_start_matches('#').len();
    if run == 0 || run > MAX_ATX_LEVEL {
        return None;
    }
    let after = &rest[run..];
    let content = after.trim_start();
    if content.len() == after.len() {
        // `#tag` style: no whitespace after the marker run.
        return None;
    }
    if content.is_empty() {
        return None;
    }
    Some((run, content))
}

/// Classify a Setext underline: a line consisting (after trimming) entirely
/// of `=` (level 1) or `-` (level 2), at least [`MIN_UNDERLINE_LEN`] long.
fn underline_level(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    if trimmed.len() < MIN_UNDERLINE_LEN {
        return None;
    }
    if trimmed.bytes().all(|b| b == b'=') {
        return Some(1);
    }
    if trimmed.bytes().all(|b| b == b'-') {
        return Some(2);
    }
    None
}

fn heading(level: usize, content: &str) -> String {
    format!("<h{level}>{content}</h{level}>")
}
