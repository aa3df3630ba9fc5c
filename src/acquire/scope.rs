/// Runs its closure exactly once, when dropped.
pub(crate) struct ScopeCall<F: FnOnce()> {
    c: Option<F>,
}

impl<F: FnOnce()> ScopeCall<F> {
    pub(crate) fn new(c: F) -> Self {
        Self { c: Some(c) }
    }
}

impl<F: FnOnce()> Drop for ScopeCall<F> {
    fn drop(&mut self) {
        if let Some(c) = self.c.take() {
            c()
        }
    }
}
