//! Drop-tracking element types.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

/// A shared tally of [`Tracked`] values created and dropped.
///
/// Every value produced by [`DropCounter::track`], and every clone of such a value,
/// counts as one creation; every drop of one of them counts as one drop.
#[derive(Clone, Default)]
pub struct DropCounter(Rc<Counts>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// Creates a tracked value attached to this counter.
    pub fn track(&self, value: u64) -> Tracked {
        self.0.created.set(self.0.created.get() + 1);
        Tracked {
            value,
            counter: Some(self.clone()),
        }
    }

    /// Number of tracked values created so far, clones included.
    pub fn created(&self) -> usize {
        self.0.created.get()
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.0.dropped.get()
    }

    /// Number of tracked values currently alive.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

impl fmt::Debug for DropCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropCounter")
            .field("created", &self.created())
            .field("dropped", &self.dropped())
            .finish()
    }
}

/// An element that reports its lifetime to a [`DropCounter`].
///
/// `Tracked::default()` is detached from any counter, so default-initialized
/// storage does not show up in the tallies. Equality and ordering look at the
/// value only.
#[derive(Default)]
pub struct Tracked {
    value: u64,
    counter: Option<DropCounter>,
}

impl Tracked {
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_tracked(&self) -> bool {
        self.counter.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        match &self.counter {
            Some(counter) => counter.track(self.value),
            None => Tracked {
                value: self.value,
                counter: None,
            },
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            let dropped = counter.dropped() + 1;
            assert!(
                dropped <= counter.created(),
                "tracked value {} dropped more times than created",
                self.value
            );
            counter.0.dropped.set(dropped);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_and_drop() {
        let counter = DropCounter::new();
        let a = counter.track(1);
        let b = a.clone();
        assert_eq!(counter.created(), 2);
        assert_eq!(counter.live(), 2);
        drop(a);
        assert_eq!(counter.live(), 1);
        assert_eq!(b.value(), 1);
        drop(b);
        assert_eq!(counter.live(), 0);
        assert_eq!(counter.dropped(), 2);
    }

    #[test]
    fn test_default_is_detached() {
        let counter = DropCounter::new();
        let d = Tracked::default();
        assert!(!d.is_tracked());
        drop(d.clone());
        assert_eq!(counter.created(), 0);
        assert_eq!(counter.dropped(), 0);
    }
}
