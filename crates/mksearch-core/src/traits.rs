/// Collection of discovered-but-not-yet-expanded items.
///
/// Each search algorithm differs only in which frontier it uses: [`Stack`](crate::Stack) gives
/// depth-first order, [`Queue`](crate::Queue) gives breadth-first order, and
/// [`PriorityQueue`](crate::PriorityQueue) gives best-first order.
pub trait Frontier<T> {
    /// Adds a newly discovered item.
    fn push(&mut self, item: T);

    /// Removes the next item, or returns `None` if the frontier is empty.
    fn pop(&mut self) -> Option<T>;

    /// Number of items waiting to be popped.
    fn len(&self) -> usize;

    /// Returns true if nothing is waiting to be popped.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
