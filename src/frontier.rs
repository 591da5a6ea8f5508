use std::collections::VecDeque;

/// Undefined sites adjacent to the growing cluster, waiting for a decision.
///
/// The queue grows as needed; `inserted` counts every push over the lifetime
/// of one growth run.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: VecDeque<(usize, usize)>,
    inserted: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            inserted: 0,
        }
    }

    pub fn push(&mut self, site: (usize, usize)) {
        self.queue.push_back(site);
        self.inserted += 1;
    }

    pub fn pop(&mut self) -> Option<(usize, usize)> {
        self.queue.pop_front()
    }

    /// Entries currently pending.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline(always)]
    pub fn inserted(&self) -> usize {
        self.inserted
    }
}
