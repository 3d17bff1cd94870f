use std::collections::VecDeque;

use super::types::Position;

/// Snake body in growth order: front is the tail, back is the head.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Self { body }
    }

    pub fn head(&self) -> Position {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn push_head(&mut self, pos: Position) {
        self.body.push_back(pos);
    }

    pub fn pop_tail(&mut self) -> Position {
        self.body
            .pop_front()
            .expect("Snake body should never be empty")
    }

    /// Tail to head.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: &[Position]) -> Self {
        assert!(!body.is_empty(), "test snake needs at least one segment");
        Self {
            body: body.iter().copied().collect(),
        }
    }
}
