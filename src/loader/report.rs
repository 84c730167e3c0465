use std::fmt;

/// Why a data line did not become a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssueKind {
    FieldCount { expected: usize, found: usize },
    Insert(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    pub line: usize,
    pub kind: RowIssueKind,
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RowIssueKind::FieldCount { expected, found } => write!(
                f,
                "line {}: expected {} field{}, found {}",
                self.line,
                expected,
                if *expected == 1 { "" } else { "s" },
                found
            ),
            RowIssueKind::Insert(msg) => write!(f, "line {}: error inserting row: {}", self.line, msg),
        }
    }
}

/// Outcome of a load: how many rows went in and which lines did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub issues: Vec<RowIssue>,
}

impl LoadReport {
    pub fn rejected(&self) -> usize {
        self.issues.len()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub(crate) fn record(&mut self, line: usize, kind: RowIssueKind) {
        self.issues.push(RowIssue { line, kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_count_issue_message() {
        let issue = RowIssue {
            line: 7,
            kind: RowIssueKind::FieldCount { expected: 3, found: 2 },
        };

        assert_eq!(issue.to_string(), "line 7: expected 3 fields, found 2");
    }

    #[test]
    fn report_counts_issues() {
        let mut report = LoadReport::default();
        assert!(report.is_clean());

        report.record(2, RowIssueKind::Insert("disk I/O error".into()));

        assert_eq!(report.rejected(), 1);
        assert!(!report.is_clean());
    }
}
