//! Cart reconciliation.
//!
//! A user's cart is a multiset of product ids held in a join table. Saving a
//! user compares the stored multiset against the incoming one and produces the
//! rows to insert and the rows to delete.

use std::collections::HashMap;

use uuid::Uuid;

/// Difference between a stored cart and an incoming cart.
///
/// Both lists may contain the same product id more than once: a product that
/// appears twice more in the incoming cart than in storage is listed twice in
/// `added`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartDiff {
    /// Product ids to insert, in incoming-cart order.
    pub added: Vec<Uuid>,
    /// Product ids to remove, in stored-cart order.
    pub removed: Vec<Uuid>,
}

impl CartDiff {
    /// Compute the multiset difference between `stored` and `incoming`.
    pub fn between(stored: &[Uuid], incoming: &[Uuid]) -> Self {
        let stored_counts = counts(stored);
        let incoming_counts = counts(incoming);

        let added = surplus(incoming, &incoming_counts, &stored_counts);
        let removed = surplus(stored, &stored_counts, &incoming_counts);

        Self { added, removed }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Pick the stored rows to delete.
    ///
    /// `rows` pairs each stored row id with its product id, in stored order.
    /// For every removed product the first matching rows are chosen.
    pub fn rows_to_remove(&self, rows: &[(Uuid, Uuid)]) -> Vec<Uuid> {
        let mut pending = counts(&self.removed);
        let mut picked = Vec::with_capacity(self.removed.len());

        for (row_id, product_id) in rows {
            if let Some(left) = pending.get_mut(product_id) {
                if *left > 0 {
                    *left -= 1;
                    picked.push(*row_id);
                }
            }
        }

        picked
    }
}

fn counts(ids: &[Uuid]) -> HashMap<Uuid, usize> {
    let mut map = HashMap::new();
    for id in ids {
        *map.entry(*id).or_insert(0) += 1;
    }
    map
}

/// Occurrences of `ids` beyond what `other` holds, walking `ids` in order.
fn surplus(
    ids: &[Uuid],
    own: &HashMap<Uuid, usize>,
    other: &HashMap<Uuid, usize>,
) -> Vec<Uuid> {
    let mut left: HashMap<Uuid, usize> = own
        .iter()
        .filter_map(|(id, count)| {
            let extra = count.saturating_sub(other.get(id).copied().unwrap_or(0));
            (extra > 0).then_some((*id, extra))
        })
        .collect();

    let mut out = Vec::new();
    for id in ids {
        if let Some(extra) = left.get_mut(id) {
            if *extra > 0 {
                *extra -= 1;
                out.push(*id);
            }
        }
    }
    out
}
