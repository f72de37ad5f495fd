/// Picks which canned reply to use out of a category's candidates.
pub trait ReplySelector: Send {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}
