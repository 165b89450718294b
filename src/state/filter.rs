//! Gallery Filter
//!
//! Single active selection over a fixed list; the visible subset is derived
//! by a membership test and keeps the list's original order.

/// Membership test for a filter key
pub trait Categorized<K> {
    fn in_category(&self, key: &K) -> bool;
}

/// Active filter value; `All` is the sentinel that disables filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<K> {
    All,
    Only(K),
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Selection::All
    }
}

impl<K: PartialEq> Selection<K> {
    pub fn admits<T: Categorized<K>>(&self, item: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(key) => item.in_category(key),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter<K> {
    active: Selection<K>,
}

impl<K> Default for Filter<K> {
    fn default() -> Self {
        Self { active: Selection::All }
    }
}

impl<K: Copy + PartialEq> Filter<K> {
    pub fn is_active(&self, selection: Selection<K>) -> bool {
        self.active == selection
    }

    /// Replace the active selection
    pub fn set(&mut self, selection: Selection<K>) {
        self.active = selection;
    }

    pub fn visible<'a, T: Categorized<K>>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.active.admits(*item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use crate::models::{Category, Project};

    struct Tagged(u32, &'static [u8]);

    impl Categorized<u8> for Tagged {
        fn in_category(&self, key: &u8) -> bool {
            self.1.contains(key)
        }
    }

    fn ids(items: &[&Tagged]) -> Vec<u32> {
        items.iter().map(|t| t.0).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let items = [Tagged(3, &[1]), Tagged(1, &[2]), Tagged(2, &[])];
        let filter = Filter::<u8>::default();
        assert_eq!(ids(&filter.visible(&items)), vec![3, 1, 2]);
    }

    #[test]
    fn test_only_keeps_members_in_order() {
        let items = [Tagged(1, &[1, 2]), Tagged(2, &[2]), Tagged(3, &[1]), Tagged(4, &[])];
        let mut filter = Filter::default();
        filter.set(Selection::Only(1));
        assert_eq!(ids(&filter.visible(&items)), vec![1, 3]);
        filter.set(Selection::Only(2));
        assert_eq!(ids(&filter.visible(&items)), vec![1, 2]);
        filter.set(Selection::Only(9));
        assert!(filter.visible(&items).is_empty());
    }

    #[test]
    fn test_set_is_idempotent() {
        let items = [Tagged(1, &[1]), Tagged(2, &[2])];
        let mut filter = Filter::default();
        filter.set(Selection::Only(2));
        let first = ids(&filter.visible(&items));
        filter.set(Selection::Only(2));
        assert_eq!(ids(&filter.visible(&items)), first);
        assert!(filter.is_active(Selection::Only(2)));
    }

    #[test]
    fn test_project_categories_match_membership() {
        let mut filter = Filter::default();
        for category in Category::ALL {
            filter.set(Selection::Only(category));
            let expected: Vec<&Project> =
                PROJECTS.iter().filter(|p| p.categories.contains(&category)).collect();
            assert_eq!(filter.visible(PROJECTS), expected);
        }

        filter.set(Selection::All);
        let all: Vec<&Project> = PROJECTS.iter().collect();
        assert_eq!(filter.visible(PROJECTS), all);
    }
}
