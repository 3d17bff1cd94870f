use crate::SessionRng;
use super::types::Position;

/// Cells not covered by the snake, with O(1) insert, remove and uniform pick.
///
/// `members` holds the open positions in arbitrary order; `slots[idx]` is the
/// offset of grid cell `idx` inside `members`, or `None` when it is occupied.
#[derive(Clone, Debug)]
pub(crate) struct OpenCells {
    cols: usize,
    members: Vec<Position>,
    slots: Vec<Option<usize>>,
}

impl OpenCells {
    pub fn all(rows: usize, cols: usize) -> Self {
        let mut members = Vec::with_capacity(rows * cols);
        let mut slots = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                slots.push(Some(members.len()));
                members.push(Position::new(row, col));
            }
        }
        Self {
            cols,
            members,
            slots,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[cfg(test)]
    pub fn contains(&self, pos: Position) -> bool {
        self.slots[self.slot_index(pos)].is_some()
    }

    pub fn insert(&mut self, pos: Position) {
        let idx = self.slot_index(pos);
        if self.slots[idx].is_none() {
            self.slots[idx] = Some(self.members.len());
            self.members.push(pos);
        }
    }

    pub fn remove(&mut self, pos: Position) {
        let idx = self.slot_index(pos);
        let Some(offset) = self.slots[idx].take() else {
            return;
        };
        self.members.swap_remove(offset);
        if let Some(&moved) = self.members.get(offset) {
            let moved_idx = self.slot_index(moved);
            self.slots[moved_idx] = Some(offset);
        }
    }

    pub fn sample(&self, rng: &mut SessionRng) -> Option<Position> {
        rng.pick_index(self.members.len()).map(|i| self.members[i])
    }

    fn slot_index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}
