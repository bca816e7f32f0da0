use std::cmp::Ordering;

/// Strict weak ordering used to place keys. Two keys are equivalent when
/// neither is less than the other.
pub trait TreeCompare<K: ?Sized> {
    fn less(&self, d0: &K, d1: &K) -> bool;

    fn ordering(&self, d0: &K, d1: &K) -> Ordering {
        if self.less(d0, d1) {
            Ordering::Less
        } else if self.less(d1, d0) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareLess; // ascending
impl<K> TreeCompare<K> for CompareLess
where K: Ord + ?Sized
{
    fn less(&self, d0: &K, d1: &K) -> bool { d0 < d1 }
    fn ordering(&self, d0: &K, d1: &K) -> Ordering { d0.cmp(d1) }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareGreater; // descending
impl<K> TreeCompare<K> for CompareGreater
where K: Ord + ?Sized
{
    fn less(&self, d0: &K, d1: &K) -> bool { d0 > d1 }
    fn ordering(&self, d0: &K, d1: &K) -> Ordering { d1.cmp(d0) }
}

/// Adapts a "less than" closure into a comparator.
#[derive(Clone, Copy)]
pub struct CompareBy<F>(pub F);
impl<K, F> TreeCompare<K> for CompareBy<F>
where K: ?Sized,
      F: Fn(&K, &K) -> bool
{
    fn less(&self, d0: &K, d1: &K) -> bool { (self.0)(d0, d1) }
}

#[cfg(test)]
pub mod tests {
    use super::{ CompareBy, CompareGreater, CompareLess, TreeCompare };
    use std::cmp::Ordering;

    #[test]
    pub fn natural_and_reverse_orders() {
        assert_eq!(CompareLess.ordering(&1, &2), Ordering::Less);
        assert_eq!(CompareGreater.ordering(&1, &2), Ordering::Greater);
        assert!(CompareGreater.less(&5, &3));
        assert_eq!(CompareLess.ordering("b", "b"), Ordering::Equal);
    }

    #[test]
    pub fn closure_order_derives_equivalence() {
        // compare by length only, so "ab" and "cd" are equivalent
        let by_len = CompareBy(|a: &&str, b: &&str| a.len() < b.len());
        assert_eq!(by_len.ordering(&"ab", &"cd"), Ordering::Equal);
        assert_eq!(by_len.ordering(&"a", &"cd"), Ordering::Less);
        assert_eq!(by_len.ordering(&"abc", &"cd"), Ordering::Greater);
    }
}
