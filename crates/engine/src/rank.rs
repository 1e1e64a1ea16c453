use std::cmp::Ordering;

use crate::record::WindowRecord;

/// Report order between two windows.
///
/// 1. Dirty windows come before clean ones.
/// 2. Among dirty windows, those without a file on disk come first, then
///    the most recently modified file first.
/// 3. Among clean windows, the most recently modified file comes first and
///    windows without a file come last.
///
/// Windows equal under these keys compare `Equal`; their relative order is
/// not part of the contract.
pub fn compare(a: &WindowRecord, b: &WindowRecord) -> Ordering {
    match (a.dirty, b.dirty) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => match (a.mod_time, b.mod_time) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(ta), Some(tb)) => tb.cmp(&ta),
        },
        // `None` sorts below every `Some`, so reversing puts it last.
        (false, false) => b.mod_time.cmp(&a.mod_time),
    }
}

pub fn rank(records: &mut [WindowRecord]) {
    records.sort_by(compare);
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
