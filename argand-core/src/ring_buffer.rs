use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Fixed-capacity FIFO history.
///
/// Storage is allocated once; when full, a push overwrites the oldest slot
/// and advances the head. Iteration always runs oldest to newest.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    /// Index of the oldest element once the buffer has wrapped.
    head: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Append, evicting the oldest element when full. A zero-capacity buffer
    /// drops everything.
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.slots.len() < self.capacity {
            self.slots.push(item);
        } else {
            self.slots[self.head] = item;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Both halves in order: `[head..]` then `[..head]`.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (front, back) = self.slots.split_at(self.head);
        (back, front)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (older, newer) = self.as_slices();
        older.iter().chain(newer.iter())
    }

    pub fn oldest(&self) -> Option<&T> {
        self.iter().next()
    }

    pub fn latest(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Owned, ordered copy for handing to a renderer.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let (older, newer) = self.as_slices();
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(older);
        out.extend_from_slice(newer);
        out
    }
}

/// Zero capacity; allocates nothing.
impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Serializes as an ordered sequence.
impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
