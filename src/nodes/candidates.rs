//! Max-priority queue of scored node candidates.
//!
//! Ordering is by descending score, ties broken by ascending x then ascending
//! y, so extraction order does not depend on how candidates were gathered.
use crate::graph::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub loc: Point,
    pub score: f64,
}

impl Candidate {
    pub fn new(loc: Point, score: f64) -> Self {
        Self { loc, score }
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.loc.cmp(&self.loc))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct CandidateQueue {
    heap: BinaryHeap<Candidate>,
}

impl CandidateQueue {
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peek(&self) -> Option<&Candidate> {
        self.heap.peek()
    }

    pub fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    /// Replaces the score of the top candidate and restores heap order.
    /// Returns `false` when the queue is empty.
    pub fn rescore_top(&mut self, score: f64) -> bool {
        match self.heap.peek_mut() {
            Some(mut top) => {
                top.score = score;
                // Dropping `PeekMut` sifts the modified element down.
                drop(top);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<Candidate> for CandidateQueue {
    fn from_iter<T: IntoIterator<Item = Candidate>>(iter: T) -> Self {
        Self {
            heap: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_by_score_then_position() {
        let mut queue: CandidateQueue = [
            Candidate::new(Point::new(5, 5), 0.9),
            Candidate::new(Point::new(1, 7), 0.95),
            Candidate::new(Point::new(1, 2), 0.95),
            Candidate::new(Point::new(0, 9), 0.95),
            Candidate::new(Point::new(3, 3), 0.5),
        ]
        .into_iter()
        .collect();

        let order: Vec<Point> = std::iter::from_fn(|| queue.pop().map(|c| c.loc)).collect();
        assert_eq!(
            order,
            vec![
                Point::new(0, 9),
                Point::new(1, 2),
                Point::new(1, 7),
                Point::new(5, 5),
                Point::new(3, 3),
            ]
        );
    }

    #[test]
    fn rescore_top_reorders() {
        let mut queue: CandidateQueue = [
            Candidate::new(Point::new(0, 0), 0.9),
            Candidate::new(Point::new(1, 0), 0.8),
        ]
        .into_iter()
        .collect();
        assert!(queue.rescore_top(0.1));
        let top = queue.peek().copied().unwrap();
        assert_eq!(top.loc, Point::new(1, 0));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn rescore_on_empty_queue_is_noop() {
        let mut queue = CandidateQueue::default();
        assert!(!queue.rescore_top(1.0));
        assert!(queue.is_empty());
    }
}
