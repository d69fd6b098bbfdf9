use serde::Serialize;
use std::collections::BTreeSet;

use super::comparator::{compare_signatures, MatchResult};
use crate::extraction::{CSignatureTable, TargetSignature};

/// Everything the two declaration sets disagree on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    /// Exported functions with no binding
    pub missing: BTreeSet<String>,
    /// Bindings that match no export, or repeat one already compared
    pub extra: BTreeSet<String>,
    /// Failed comparisons, in binding order
    pub mismatched: Vec<MatchResult>,
    /// Number of bindings compared against an export
    pub checked: usize,
}

impl DiffReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.mismatched.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }

    pub fn matched(&self) -> usize {
        self.checked.saturating_sub(self.mismatched.len())
    }
}

/// Diff the exported header functions against the binding declarations.
///
/// Each export is consumed by the first binding with its name; later
/// bindings of the same name land in `extra`.
pub fn diff_signatures(c_table: &CSignatureTable, targets: &[TargetSignature]) -> DiffReport {
    let mut remaining = c_table.clone();
    let mut report = DiffReport::default();

    for target in targets {
        match remaining.remove(&target.name) {
            Some(c_signature) => {
                report.checked += 1;
                let result = compare_signatures(&c_signature, target);
                if !result.ok {
                    report.mismatched.push(result);
                }
            }
            None => {
                report.extra.insert(target.name.clone());
            }
        }
    }

    report.missing = remaining.into_keys().collect();
    report
}
