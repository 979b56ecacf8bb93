//! Kingdom rosters and the per-turn unit pool.
//!
//! [`Roster`] is a borrowed view of one kingdom's generals with the
//! availability rule spelled out once, in [`is_available`].
//!
//! [`UnitPool`] is the scheduler's working set for a single turn: an arena
//! of general handles where each slot can be taken at most once. Tiers take
//! the pool by value and hand back what is left, so there is no shared
//! "already used" set living across passes.

use crate::ids::KingdomId;
use crate::world::General;

/// Whether a general can receive orders this turn.
///
/// A general is available iff it is not held captive and `hp > 0`.
#[must_use]
pub const fn is_available(general: &General) -> bool {
    general.hp > 0 && !general.is_captured()
}

/// The generals serving one kingdom, in snapshot order.
#[derive(Debug, Clone)]
pub struct Roster<'w> {
    members: Vec<&'w General>,
}

impl<'w> Roster<'w> {
    /// Collect the members of `kingdom` from a general list.
    #[must_use]
    pub fn of(kingdom: &KingdomId, generals: &'w [General]) -> Self {
        Self {
            members: generals.iter().filter(|g| &g.kingdom == kingdom).collect(),
        }
    }

    /// All members, available or not.
    #[must_use]
    pub fn members(&self) -> &[&'w General] {
        &self.members
    }

    /// Members that can receive orders this turn.
    pub fn available(&self) -> impl Iterator<Item = &'w General> + '_ {
        self.members.iter().copied().filter(|g| is_available(g))
    }

    /// Number of members that can receive orders this turn.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available().count()
    }

    /// Build this turn's unit pool from the available members.
    #[must_use]
    pub fn into_pool(self) -> UnitPool<'w> {
        UnitPool::new(self.members.into_iter().filter(|g| is_available(g)).collect())
    }
}

/// Index of a slot in a [`UnitPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitHandle(usize);

/// Generals still free to receive an order this turn.
#[derive(Debug, Clone)]
pub struct UnitPool<'w> {
    slots: Vec<Option<&'w General>>,
    remaining: usize,
}

impl<'w> UnitPool<'w> {
    /// Create a pool where every general starts free.
    #[must_use]
    pub fn new(generals: Vec<&'w General>) -> Self {
        let remaining = generals.len();
        Self {
            slots: generals.into_iter().map(Some).collect(),
            remaining,
        }
    }

    /// Number of generals not yet taken.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Check if every general has been taken.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Find the free general with the highest key.
    ///
    /// Only generals with `hp > 0` qualify. Ties go to the earliest slot.
    pub fn best_by<K, F>(&self, key: F) -> Option<UnitHandle>
    where
        K: Ord,
        F: Fn(&General) -> K,
    {
        let mut best: Option<(UnitHandle, K)> = None;
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(general) = slot else {
                continue;
            };
            if general.hp == 0 {
                continue;
            }
            let value = key(general);
            if best.as_ref().map_or(true, |(_, top)| value > *top) {
                best = Some((UnitHandle(index), value));
            }
        }
        best.map(|(handle, _)| handle)
    }

    /// Take a general out of the pool.
    ///
    /// Returns `None` if the slot was already taken.
    pub fn take(&mut self, handle: UnitHandle) -> Option<&'w General> {
        let general = self.slots.get_mut(handle.0)?.take()?;
        self.remaining -= 1;
        Some(general)
    }

    /// Consume the pool, yielding every general never taken, in slot order.
    pub fn into_remaining(self) -> impl Iterator<Item = &'w General> {
        self.slots.into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generals() -> Vec<General> {
        vec![
            General::new("a", "A", "wei").with_strength(10),
            General::new("b", "B", "wei").with_strength(30),
            General::new("c", "C", "wei").with_strength(30),
            General::new("d", "D", "wei").with_hp(0, 100),
            General::new("e", "E", "wei").captured_by("shu"),
            General::new("f", "F", "shu").with_strength(99),
        ]
    }

    fn by_strength(g: &General) -> u32 {
        g.strength
    }

    #[test]
    fn test_availability_predicate() {
        let list = generals();
        assert!(is_available(&list[0]));
        assert!(!is_available(&list[3]), "zero hp is unavailable");
        assert!(!is_available(&list[4]), "captives are unavailable");
    }

    #[test]
    fn test_roster_filters_by_kingdom() {
        let list = generals();
        let roster = Roster::of(&"wei".into(), &list);
        assert_eq!(roster.members().len(), 5);
        assert_eq!(roster.available_count(), 3);
    }

    #[test]
    fn test_best_by_prefers_earliest_on_tie() {
        let list = generals();
        let mut pool = Roster::of(&"wei".into(), &list).into_pool();
        let best = pool.best_by(by_strength).unwrap();
        assert_eq!(pool.take(best).unwrap().id.as_str(), "b");
        let next = pool.best_by(by_strength).unwrap();
        assert_eq!(pool.take(next).unwrap().id.as_str(), "c");
    }

    #[test]
    fn test_take_is_once_only() {
        let list = generals();
        let mut pool = Roster::of(&"wei".into(), &list).into_pool();
        let handle = pool.best_by(by_strength).unwrap();
        assert!(pool.take(handle).is_some());
        assert!(pool.take(handle).is_none());
        assert_eq!(pool.remaining(), 2);
    }

    #[test]
    fn test_exhausted_pool_has_no_best() {
        let list = generals();
        let mut pool = Roster::of(&"wei".into(), &list).into_pool();
        while let Some(handle) = pool.best_by(by_strength) {
            pool.take(handle);
        }
        assert!(pool.is_exhausted());
        assert_eq!(pool.into_remaining().count(), 0);
    }

    #[test]
    fn test_remaining_keeps_slot_order() {
        let list = generals();
        let mut pool = Roster::of(&"wei".into(), &list).into_pool();
        let handle = pool.best_by(by_strength).unwrap();
        pool.take(handle);
        let left: Vec<_> = pool.into_remaining().map(|g| g.id.as_str()).collect();
        assert_eq!(left, vec!["a", "c"]);
    }
}
