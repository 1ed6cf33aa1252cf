/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;

/**
 * Pending stops of one elevator.
 *
 * A plain set of floors: queuing the same floor twice keeps a single entry. There is no
 * ordering fixed at insertion time, the closest stop is looked up against the elevator's
 * current floor every time `nearest` is called, since "closest" changes as the car moves.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopSet {
    floors: BTreeSet<u8>,
}

impl StopSet {
    pub fn new() -> StopSet {
        StopSet {
            floors: BTreeSet::new(),
        }
    }

    /// Returns `true` if the floor was not already pending.
    pub fn insert(&mut self, floor: u8) -> bool {
        self.floors.insert(floor)
    }

    pub fn remove(&mut self, floor: u8) -> bool {
        self.floors.remove(&floor)
    }

    pub fn contains(&self, floor: u8) -> bool {
        self.floors.contains(&floor)
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    /// Closest pending floor to `current`. Equidistant stops resolve to the lower floor.
    pub fn nearest(&self, current: u8) -> Option<u8> {
        // BTreeSet iterates in ascending order and min_by_key keeps the first minimum
        self.floors
            .iter()
            .copied()
            .min_by_key(|floor| floor.abs_diff(current))
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.floors.iter().copied().collect()
    }
}
