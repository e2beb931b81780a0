/// Open/closed flags for a group of FAQ items where at most one may be open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Vec<bool>,
}

/// An item whose state changed, and its new state.
pub type Change = (usize, bool);

impl Accordion {
    /// Adopts the flags found in the markup. Call [`Accordion::normalize`]
    /// afterwards; markup may arrive with several items open.
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { open: flags }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|open| **open).count()
    }

    /// Closes every open item after the first one.
    pub fn normalize(&mut self) -> Vec<Change> {
        let mut seen_open = false;
        let mut changes = Vec::new();
        for (index, open) in self.open.iter_mut().enumerate() {
            if *open && seen_open {
                *open = false;
                changes.push((index, false));
            }
            seen_open |= *open;
        }
        changes
    }

    /// Flips `index` and closes every other open item.
    pub fn toggle(&mut self, index: usize) -> Vec<Change> {
        let Some(current) = self.open.get(index).copied() else {
            return Vec::new();
        };
        let mut changes = Vec::new();
        for (other, open) in self.open.iter_mut().enumerate() {
            if other != index && *open {
                *open = false;
                changes.push((other, false));
            }
        }
        self.open[index] = !current;
        changes.push((index, !current));
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let mut accordion = Accordion::from_flags(vec![false; 3]);
        assert_eq!(accordion.toggle(0), vec![(0, true)]);
        assert_eq!(accordion.toggle(2), vec![(0, false), (2, true)]);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let mut accordion = Accordion::from_flags(vec![false; 2]);
        accordion.toggle(1);
        assert_eq!(accordion.toggle(1), vec![(1, false)]);
        assert_eq!(accordion.open_count(), 0);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut accordion = Accordion::from_flags(vec![false; 2]);
        assert!(accordion.toggle(5).is_empty());
    }

    #[test]
    fn normalize_keeps_first_open_item() {
        let mut accordion = Accordion::from_flags(vec![false, true, true, true]);
        assert_eq!(accordion.normalize(), vec![(2, false), (3, false)]);
        assert_eq!(accordion.open_count(), 1);
        assert!(accordion.is_open(1));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn at_most_one_open_for_any_click_sequence(
            flags in prop::collection::vec(any::<bool>(), 1..8),
            clicks in prop::collection::vec(0usize..8, 0..200),
        ) {
            let mut accordion = Accordion::from_flags(flags);
            accordion.normalize();
            prop_assert!(accordion.open_count() <= 1);
            for index in clicks {
                let changes = accordion.toggle(index);
                prop_assert!(accordion.open_count() <= 1);
                for (item, open) in changes {
                    prop_assert_eq!(accordion.is_open(item), open);
                }
            }
        }
    }
}
