use crate::colors::{Colors, Tone};
use similar::{ChangeTag, TextDiff};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
    Diff,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

pub struct Config {
    pub destination: Destination,
    pub check_only: bool,
    pub force: bool,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
        }
    }
}

/// What happened to the destination.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Document went to stdout
    Printed,
    Created(PathBuf),
    Updated(PathBuf),
    Unchanged(PathBuf),
    /// `--check` found a missing or out-of-date file
    Stale(PathBuf),
}

pub struct RunResult {
    pub outcome: Outcome,
}

impl RunResult {
    pub fn has_problems(&self) -> bool {
        matches!(self.outcome, Outcome::Stale(_))
    }
}

pub fn print_outcome(outcome: &Outcome, ctx: &OutputContext) {
    let (label, tone, path) = match outcome {
        Outcome::Printed => return,
        Outcome::Created(p) => ("Created:", Tone::Written, p),
        Outcome::Updated(p) => ("Updated:", Tone::Written, p),
        Outcome::Unchanged(p) => ("Unchanged:", Tone::UpToDate, p),
        Outcome::Stale(p) => ("Stale:", Tone::Stale, p),
    };

    if ctx.mode == OutputMode::Quiet {
        if !matches!(outcome, Outcome::Unchanged(_)) {
            println!("{}", path.display());
        }
        return;
    }

    println!("{} {}", ctx.colors.paint(tone, label), path.display());
}

pub fn print_diff(label: &str, original: &str, content: &str, colors: &Colors) {
    let diff = TextDiff::from_lines(original, content);

    println!("--- {label}");
    println!("+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let line = change.value().trim_end_matches('\n');
                match change.tag() {
                    ChangeTag::Delete => {
                        println!("{}", colors.paint(Tone::DiffRemoved, format!("-{line}")));
                    }
                    ChangeTag::Insert => {
                        println!("{}", colors.paint(Tone::DiffAdded, format!("+{line}")));
                    }
                    ChangeTag::Equal => println!(" {line}"),
                }
            }
        }
    }
}
