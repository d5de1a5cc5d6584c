use rustc_hash::FxHashSet;

use crate::expression::Expr;
use crate::solver::constants::NUMBER_COUNT;

/// Order-independent key for a multiset of candidate totals.
///
/// The key is the sorted totals themselves, so two multisets share a key
/// exactly when they hold the same values. Operator history and tree shape
/// play no part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Fingerprint {
    len: u8,
    totals: [i64; NUMBER_COUNT],
}

/// States already expanded during one solve
pub(crate) type FingerprintSet = FxHashSet<Fingerprint>;

impl Fingerprint {
    /// Fingerprint of a candidate multiset, `None` past [`NUMBER_COUNT`] candidates
    pub(crate) fn new(candidates: &[Expr]) -> Option<Self> {
        Self::from_totals(candidates.iter().map(Expr::total))
    }

    /// Fingerprint of at most [`NUMBER_COUNT`] totals, in any order.
    /// Returns `None` when there are more.
    pub(crate) fn from_totals(totals: impl IntoIterator<Item = i64>) -> Option<Self> {
        let mut slots = [0; NUMBER_COUNT];
        let mut len = 0;
        for total in totals {
            *slots.get_mut(len)? = total;
            len += 1;
        }

        // Candidates normally arrive sorted already; sorting here keeps the
        // key canonical for any caller.
        slots[..len].sort_unstable();

        Some(Self {
            len: len as u8,
            totals: slots,
        })
    }

    /// The sorted totals this key was built from
    pub(crate) fn totals(&self) -> &[i64] {
        &self.totals[..usize::from(self.len)]
    }
}
