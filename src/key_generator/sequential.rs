use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate every key in `0..num` exactly once, in the given order
pub struct SequentialKeys {
    position: usize,
    num: usize,
    order: SequentialOrder,
}

#[derive(Debug, Copy, Clone)]
pub enum SequentialOrder {
    Ascending,
    Descending,
    /// Alternate between the smallest and the largest remaining key: 0, num-1, 1, num-2, ...
    ZigZag,
}

impl SequentialKeys {
    pub fn new(num: usize, order: SequentialOrder) -> SequentialKeys {
        SequentialKeys {
            position: 0,
            num,
            order,
        }
    }
}

impl Iterator for SequentialKeys {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            return None;
        }
        let i = self.position;
        self.position += 1;
        let key = match self.order {
            SequentialOrder::Ascending => i,
            SequentialOrder::Descending => self.num - 1 - i,
            SequentialOrder::ZigZag if i % 2 == 0 => i / 2,
            SequentialOrder::ZigZag => self.num - 1 - i / 2,
        };
        Some(key as u64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialKeys {}

impl ExactSizeIterator for SequentialKeys {}
