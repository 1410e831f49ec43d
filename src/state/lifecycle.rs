/// One-shot attach state for a page-wide handler: `Unattached -> Attached`.
pub enum Lifecycle<R> {
    Unattached,
    Attached(R),
}

impl<R> Default for Lifecycle<R> {
    fn default() -> Self {
        Lifecycle::Unattached
    }
}

impl<R> Lifecycle<R> {
    pub fn is_attached(&self) -> bool {
        matches!(self, Lifecycle::Attached(_))
    }

    /// Runs `attach` only when nothing is attached yet. Returns whether a new
    /// handle was stored; a failed attach leaves the state untouched.
    pub fn install<E>(&mut self, attach: impl FnOnce() -> Result<R, E>) -> Result<bool, E> {
        if self.is_attached() {
            return Ok(false);
        }
        *self = Lifecycle::Attached(attach()?);
        Ok(true)
    }

    /// Hands back the attached handle so the caller can drop it.
    pub fn uninstall(&mut self) -> Option<R> {
        match std::mem::take(self) {
            Lifecycle::Attached(r) => Some(r),
            Lifecycle::Unattached => None,
        }
    }
}
