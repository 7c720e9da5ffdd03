use core::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Ordered container of not-yet-expanded search entries.
///
/// The three implementations differ only in retrieval order. `priority` is
/// consulted by [`PriorityQueue`] and ignored by [`Stack`] and [`Queue`].
pub trait Frontier<T> {
    fn insert(&mut self, item: T, priority: f64);
    fn remove(&mut self) -> Option<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out frontier.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn insert(&mut self, item: T, _priority: f64) {
        self.push(item);
    }

    fn remove(&mut self) -> Option<T> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in-first-out frontier.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn insert(&mut self, item: T, _priority: f64) {
        self.push(item);
    }

    fn remove(&mut self) -> Option<T> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug)]
struct Keyed<T> {
    priority: f64,
    tie: u64,
    item: T,
}

impl<T> Keyed<T> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.tie.cmp(&other.tie))
    }
}

impl<T> PartialEq for Keyed<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Keyed<T> {}

impl<T> PartialOrd for Keyed<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Keyed<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key_cmp(self)
    }
}

/// Min-priority frontier.
///
/// Entries with equal priority come out in insertion order, so a search that
/// uses it stays deterministic for a fixed successor enumeration order.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Keyed<T>>,
    tie: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie: 0,
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T, priority: f64) {
        self.heap.push(Keyed {
            priority,
            tie: self.tie,
            item,
        });
        self.tie += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|keyed| keyed.item)
    }

    /// Lowest priority currently queued.
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|keyed| keyed.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Frontier<T> for PriorityQueue<T> {
    fn insert(&mut self, item: T, priority: f64) {
        self.push(item, priority);
    }

    fn remove(&mut self) -> Option<T> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
