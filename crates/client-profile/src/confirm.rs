//! Interactive confirmation gate for destructive account actions.

/// Synchronous yes/no confirmation before a destructive action proceeds.
///
/// Modal/blocking prompt semantics; the concrete UI mechanism is the
/// embedder's business.
pub trait ConfirmationGate {
    /// Present the prompt and return whether the user confirmed.
    fn confirm(&self, prompt: &str) -> bool;
}
