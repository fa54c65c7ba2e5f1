//! Maps structural keys (workflow, task, attribute) back to source ranges.
//!
//! The line table is built once per document. Each line records its
//! indentation and, when it is a block-mapping entry, the key it declares.
//! Lookups then walk parent -> child blocks by indentation, so a key is only
//! ever matched among the direct children of the block it belongs to and
//! names are compared literally.

use std::sync::LazyLock;

use regex::Regex;

use crate::position::{LineIndex, Position, Range};

static KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:"([^"]*)"|'([^']*)'|([^\s#'"\[\]{},][^#]*?))[ \t]*:(?:[ \t]|$)"#)
        .expect("Invalid regex pattern")
});

/// Width of the fallback highlight at the top of the document.
const DOCUMENT_START_WIDTH: u32 = 10;

#[derive(Debug, Clone)]
struct LineInfo {
    indent: usize,
    /// Blank or comment-only; never terminates a block.
    trivia: bool,
    key: Option<KeySpan>,
}

#[derive(Debug, Clone)]
struct KeySpan {
    text: String,
    start: usize,
    end: usize,
}

/// Inclusive line span of a block (its header line included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: u32,
    pub end: u32,
}

impl LineSpan {
    pub fn contains(&self, line: u32) -> bool {
        line >= self.start && line <= self.end
    }
}

pub struct SourceMap<'a> {
    index: LineIndex<'a>,
    lines: Vec<LineInfo>,
}

impl<'a> SourceMap<'a> {
    pub fn new(text: &'a str) -> Self {
        let index = LineIndex::new(text);
        let lines = (0..index.line_count())
            .map(|n| scan_line(&index, n))
            .collect();
        Self { index, lines }
    }

    pub fn index(&self) -> &LineIndex<'a> {
        &self.index
    }

    /// Highlight for findings with no better anchor.
    pub fn document_start(&self) -> Range {
        let width = self
            .index
            .line_text(0)
            .map(|l| l.encode_utf16().count() as u32)
            .unwrap_or(0)
            .min(DOCUMENT_START_WIDTH);
        Range::new(Position::new(0, 0), Position::new(0, width))
    }

    /// Top-level key, e.g. `version`.
    pub fn root_key(&self, key: &str) -> Range {
        self.find_child(None, key)
            .map(|line| self.key_range(line))
            .unwrap_or_else(|| self.document_start())
    }

    pub fn workflow(&self, workflow: &str) -> Range {
        self.workflow_line(workflow)
            .map(|line| self.key_range(line))
            .unwrap_or_else(|| self.document_start())
    }

    /// Direct child `key` of a workflow; falls back to the workflow name.
    pub fn workflow_key(&self, workflow: &str, key: &str) -> Range {
        self.workflow_line(workflow)
            .and_then(|wf| self.find_child(Some(wf), key))
            .map(|line| self.key_range(line))
            .unwrap_or_else(|| self.workflow(workflow))
    }

    pub fn task(&self, workflow: &str, task: &str) -> Range {
        self.task_line(workflow, task)
            .map(|line| self.key_range(line))
            .unwrap_or_else(|| self.document_start())
    }

    /// Direct child `key` of a task; falls back to the task name.
    pub fn task_key(&self, workflow: &str, task: &str, key: &str) -> Range {
        self.task_line(workflow, task)
            .and_then(|t| self.find_child(Some(t), key))
            .map(|line| self.key_range(line))
            .unwrap_or_else(|| self.task(workflow, task))
    }

    /// Lines covered by a task's block. A task whose header cannot be found
    /// in block style (e.g. a flow-style document) gets the block opened by
    /// the first line at indentation zero.
    pub fn task_block(&self, workflow: &str, task: &str) -> LineSpan {
        match self.task_line(workflow, task) {
            Some(header) => LineSpan {
                start: header as u32,
                end: self.block_end(header) as u32,
            },
            None => LineSpan {
                start: 0,
                end: self.block_end_at(0, 0) as u32,
            },
        }
    }

    fn workflow_line(&self, workflow: &str) -> Option<usize> {
        let section = self.find_child(None, "workflows")?;
        self.find_child(Some(section), workflow)
    }

    fn task_line(&self, workflow: &str, task: &str) -> Option<usize> {
        let wf = self.workflow_line(workflow)?;
        let tasks = self.find_child(Some(wf), "tasks")?;
        let found = self.find_child(Some(tasks), task);
        if found.is_none() {
            tracing::trace!(workflow, task, "task header not found");
        }
        found
    }

    fn key_range(&self, line: usize) -> Range {
        match &self.lines[line].key {
            Some(key) => self.index.range(key.start, key.end),
            None => self.document_start(),
        }
    }

    /// Last line of the block opened by `header`.
    fn block_end(&self, header: usize) -> usize {
        self.block_end_at(header, self.lines[header].indent)
    }

    /// Last line before the first non-trivia line after `header` indented
    /// at most `indent`.
    fn block_end_at(&self, header: usize, indent: usize) -> usize {
        let mut last = self.lines.len().saturating_sub(1);
        for (n, info) in self.lines.iter().enumerate().skip(header + 1) {
            if !info.trivia && info.indent <= indent {
                last = n - 1;
                break;
            }
        }
        last
    }

    /// First direct child of `parent` (or of the document root) whose key
    /// equals `key`.
    fn find_child(&self, parent: Option<usize>, key: &str) -> Option<usize> {
        let (first, last) = match parent {
            Some(header) => (header + 1, self.block_end(header)),
            None => (0, self.lines.len().saturating_sub(1)),
        };
        if first > last {
            return None;
        }

        let child_indent = (first..=last)
            .map(|n| &self.lines[n])
            .find(|info| !info.trivia)?
            .indent;

        (first..=last).find(|&n| {
            let info = &self.lines[n];
            info.indent == child_indent && info.key.as_ref().is_some_and(|k| k.text == key)
        })
    }
}

fn scan_line(index: &LineIndex<'_>, n: usize) -> LineInfo {
    let text = index.line_text(n).unwrap_or("");
    let line_start = index.line_start(n).unwrap_or(0);
    let indent = text.len() - text.trim_start_matches([' ', '\t']).len();
    let rest = &text[indent..];
    let trimmed = rest.trim();
    let trivia = trimmed.is_empty() || trimmed.starts_with('#');

    let is_sequence_item =
        rest.starts_with('-') && rest[1..].chars().next().is_none_or(char::is_whitespace);
    let key = if trivia || is_sequence_item {
        None
    } else {
        KEY_PATTERN.captures(rest).and_then(|caps| {
            let m = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;
            let base = line_start + indent;
            Some(KeySpan {
                text: m.as_str().trim_end().to_string(),
                start: base + m.start(),
                end: base + m.start() + m.as_str().trim_end().len(),
            })
        })
    };

    LineInfo {
        indent,
        trivia,
        key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
version: '2.0'
workflows:
  wf1:
    type: direct
    tasks:
      t1:
        action: std.noop
        publish:
          tasks: nested
      t2:
        action: std.echo

  wf2:
    tasks:
      t1:
        action: std.noop
";

    #[test]
    fn locates_root_keys() {
        let map = SourceMap::new(DOC);
        assert_eq!(map.root_key("workflows"), Range::from_coords(1, 0, 1, 9));
    }

    #[test]
    fn locates_tasks_in_the_right_workflow() {
        let map = SourceMap::new(DOC);
        assert_eq!(map.task("wf1", "t1"), Range::from_coords(5, 6, 5, 8));
        assert_eq!(map.task("wf2", "t1"), Range::from_coords(14, 6, 14, 8));
    }

    #[test]
    fn nested_same_named_key_is_not_confused() {
        let map = SourceMap::new(DOC);
        // `tasks` under publish is deeper than the workflow's direct children
        assert_eq!(map.workflow_key("wf1", "tasks"), Range::from_coords(4, 4, 4, 9));
    }

    #[test]
    fn task_key_falls_back_to_task() {
        let map = SourceMap::new(DOC);
        assert_eq!(map.task_key("wf1", "t2", "action"), Range::from_coords(10, 8, 10, 14));
        assert_eq!(map.task_key("wf1", "t2", "join"), map.task("wf1", "t2"));
    }

    #[test]
    fn task_block_spans_until_dedent() {
        let map = SourceMap::new(DOC);
        assert_eq!(map.task_block("wf1", "t1"), LineSpan { start: 5, end: 8 });
        // trailing blank line stays inside the block
        assert_eq!(map.task_block("wf1", "t2"), LineSpan { start: 9, end: 11 });
    }

    #[test]
    fn unlocated_task_block_starts_at_the_top() {
        let map = SourceMap::new(DOC);
        // `version` and `workflows` are both at indentation zero
        assert_eq!(map.task_block("wf1", "missing"), LineSpan { start: 0, end: 0 });

        let flow = SourceMap::new("{workflows: {wf1: {tasks: {t1: {}}}}}
");
        assert_eq!(flow.task_block("wf1", "t1"), LineSpan { start: 0, end: 1 });
        assert!(flow.task_block("wf1", "t1").contains(0));
    }

    #[test]
    fn unknown_names_fall_back_to_document_start() {
        let map = SourceMap::new(DOC);
        assert_eq!(map.task("wf1", "missing"), Range::from_coords(0, 0, 0, 10));
        assert_eq!(map.workflow_key("nope", "type"), Range::from_coords(0, 0, 0, 10));
    }

    #[test]
    fn metacharacters_in_names_are_literal() {
        let map = SourceMap::new("workflows:\n  a.b(c:\n    tasks: {}\n");
        assert_eq!(map.workflow("a.b(c"), Range::from_coords(1, 2, 1, 7));
    }

    #[test]
    fn quoted_keys_are_unquoted() {
        let map = SourceMap::new("workflows:\n  \"my wf\":\n    tasks: {}\n");
        assert_eq!(map.workflow("my wf"), Range::from_coords(1, 3, 1, 8));
    }
}
