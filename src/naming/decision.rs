//! Decision for one item: pre-filters first, then name assembly and distribution.

use crate::metadata::{FileContext, FilenameDerivedInfo, TrackMetadata};

use super::distribution::distribution_directory;
use super::name::assemble_name;
use super::rules::RuleConfig;

/// What the executor should do with an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameDecision {
    /// Leave the item untouched
    Skip,
    /// Rename in place
    RenameOnly { new_base_name: String },
    /// Rename and move below a distribution directory
    RenameAndMove {
        new_base_name: String,
        new_relative_directory: String,
    },
    /// Move with the current name kept
    MoveOnly { new_relative_directory: String },
}

/// Match condition of a pre-filter.
#[derive(Debug, Clone, Copy)]
enum Match {
    Name(&'static str),
    Suffix(&'static str),
}

/// Outcome of a matching pre-filter.
#[derive(Debug, Clone, Copy)]
enum Outcome {
    Skip,
    MoveTo(&'static str),
}

/// Evaluated in order; the first match wins.
const PRE_FILTERS: &[(Match, Outcome)] = &[
    (Match::Name("desktop.ini"), Outcome::Skip),
    (Match::Suffix("bak"), Outcome::MoveTo("backups")),
    (Match::Suffix("tmp"), Outcome::MoveTo("temp")),
];

fn pre_filter(context: &FileContext) -> Option<RenameDecision> {
    PRE_FILTERS.iter().find_map(|(cond, outcome)| {
        let hit = match cond {
            Match::Name(name) => context.current_name == *name,
            Match::Suffix(suffix) => context.current_suffix == *suffix,
        };
        hit.then(|| match outcome {
            Outcome::Skip => RenameDecision::Skip,
            Outcome::MoveTo(dir) => RenameDecision::MoveOnly {
                new_relative_directory: (*dir).to_string(),
            },
        })
    })
}

/// Decide what happens to one item. Pure: no I/O, inputs untouched.
pub fn decide(
    context: &FileContext,
    meta: &TrackMetadata,
    from_file_name: &FilenameDerivedInfo,
    rules: &RuleConfig,
) -> RenameDecision {
    if context.is_directory() {
        return RenameDecision::Skip;
    }
    if let Some(decision) = pre_filter(context) {
        return decision;
    }

    let new_base_name = assemble_name(context, meta, from_file_name, rules);
    match distribution_directory(meta, rules) {
        Some(new_relative_directory) => RenameDecision::RenameAndMove {
            new_base_name,
            new_relative_directory,
        },
        None => RenameDecision::RenameOnly { new_base_name },
    }
}
