//! # Line Normalization
//!
//! Every input line passes through here before the resolver or the loader
//! looks at it. Two operations matter:
//!
//! - **Classification** trims whitespace and inspects the first character:
//!   empty lines are `Blank`, lines led by the comment marker are `Comment`,
//!   everything else is `Data`.
//! - **Normalization** cuts a line at the first comment marker and trims what
//!   is left, so `1,alice,10 # note` becomes `1,alice,10`.
//!
//! Normalization is idempotent: after one pass no marker and no edge
//! whitespace remain, so a second pass changes nothing.
//!
//! ## Limitations
//!
//! Fields are split on every delimiter. Quoting is not understood, so a
//! quoted field containing the delimiter splits into two fields.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Data,
}

/// One line of input, trimmed and classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based position in the input.
    pub number: usize,
    pub text: String,
    pub kind: LineKind,
}

impl RawLine {
    /// Decodes `bytes` (invalid UTF-8 is replaced, not rejected), trims it and
    /// classifies it against `comment`.
    pub fn classify(bytes: &[u8], number: usize, comment: char) -> Self {
        let decoded = String::from_utf8_lossy(bytes);
        let trimmed = trim_line(&decoded);

        let kind = match trimmed.chars().next() {
            None => LineKind::Blank,
            Some(c) if c == comment => LineKind::Comment,
            Some(_) => LineKind::Data,
        };

        Self {
            number,
            text: trimmed.to_string(),
            kind,
        }
    }

    pub fn is_data(&self) -> bool {
        self.kind == LineKind::Data
    }
}

/// Strips leading and trailing whitespace, line terminators included.
#[inline]
pub fn trim_line(raw: &str) -> &str {
    raw.trim()
}

/// Cuts `raw` at the first `comment` character and trims the remainder.
///
/// Returns an empty string for blank and all-comment lines.
pub fn normalize(raw: &str, comment: char) -> &str {
    let end = raw.find(comment).unwrap_or(raw.len());
    raw[..end].trim()
}

/// Text of a header comment: leading markers removed, inline comment and
/// surrounding whitespace stripped. `## id, name # note` gives `id, name`.
pub fn strip_comment_markers(line: &str, comment: char) -> &str {
    let body = line.trim_start().trim_start_matches(comment);
    normalize(body, comment)
}

/// Number of fields in `line`: one more than the number of delimiters.
pub fn count_columns(line: &str, delimiter: char) -> usize {
    line.chars().filter(|&c| c == delimiter).count() + 1
}

/// Splits on every delimiter, keeping empty fields and trimming each one.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize("  \t1,alice,10 \r\n", '#'), "1,alice,10");
    }

    #[test]
    fn normalize_strips_inline_comment_and_space_before_it() {
        assert_eq!(normalize("1,alice,10 # trailing note", '#'), "1,alice,10");
    }

    #[test]
    fn normalize_returns_empty_for_comment_and_blank_lines() {
        assert_eq!(normalize("# just a comment", '#'), "");
        assert_eq!(normalize("   \t  ", '#'), "");
        assert_eq!(normalize("", '#'), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "",
            "   ",
            "# comment",
            "  a,b,c  ",
            "a,b # c # d",
            "\t x \u{a0}",
            "##",
            "value#",
            " , , ",
        ];

        for sample in samples {
            let once = normalize(sample, '#');
            let twice = normalize(once, '#');
            assert_eq!(once, twice, "normalize not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn normalize_respects_custom_marker() {
        assert_eq!(normalize("a;b ; trailing", ';'), "a");
        assert_eq!(normalize("a,b % note", '%'), "a,b");
    }

    #[test]
    fn classify_blank_comment_and_data() {
        let blank = RawLine::classify(b"  \n", 1, '#');
        let comment = RawLine::classify(b"  # id,name\n", 2, '#');
        let data = RawLine::classify(b"1,alice # note\n", 3, '#');

        assert_eq!(blank.kind, LineKind::Blank);
        assert_eq!(comment.kind, LineKind::Comment);
        assert_eq!(comment.text, "# id,name");
        assert_eq!(data.kind, LineKind::Data);
        assert_eq!(data.text, "1,alice # note");
        assert_eq!(data.number, 3);
    }

    #[test]
    fn classify_replaces_invalid_utf8() {
        let line = RawLine::classify(b"caf\xe9,1\n", 1, '#');

        assert!(line.is_data());
        assert_eq!(count_columns(&line.text, ','), 2);
    }

    #[test]
    fn strip_comment_markers_handles_repeated_markers() {
        assert_eq!(strip_comment_markers("# id,name,score", '#'), "id,name,score");
        assert_eq!(strip_comment_markers("##  id, name", '#'), "id, name");
        assert_eq!(strip_comment_markers("# id,name # units", '#'), "id,name");
    }

    #[test]
    fn count_columns_is_delimiters_plus_one() {
        assert_eq!(count_columns("a", ','), 1);
        assert_eq!(count_columns("a,b,c", ','), 3);
        assert_eq!(count_columns(",,", ','), 3);
    }

    #[test]
    fn split_fields_keeps_empty_fields() {
        assert_eq!(split_fields("1,,3", ','), vec!["1", "", "3"]);
        assert_eq!(split_fields(" 1 , alice ,10", ','), vec!["1", "alice", "10"]);
    }
}
