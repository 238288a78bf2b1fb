/// Identity of a generated illusion clone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloneId(pub u64);

/// Identity of a rendered slot.
///
/// Real items and clones live in disjoint variants, so a clone can never collide with an item
/// key even while both are mounted during the wrap window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKey<K> {
    Item(K),
    Clone(CloneId),
}

impl<K> SlotKey<K> {
    pub fn is_clone(&self) -> bool {
        matches!(self, Self::Clone(_))
    }

    pub fn item(&self) -> Option<&K> {
        match self {
            Self::Item(k) => Some(k),
            Self::Clone(_) => None,
        }
    }
}

/// Monotonic clone id source. Every regeneration draws new ids, so clones never reuse a key
/// from a previous render.
#[derive(Clone, Copy, Debug, Default)]
pub struct CloneIdGen {
    next: u64,
}

impl CloneIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> CloneId {
        let id = CloneId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
