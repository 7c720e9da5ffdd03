use core::fmt::Debug;

/// A small, enumerable action symbol.
///
/// Search engines never interpret actions beyond cloning them, comparing them,
/// and handing them back. The one exception is the STOP sentinel: tree search
/// returns it when no root action improves on the initial extreme value, and
/// may exclude it from the root's candidates.
pub trait GameAction: Clone + PartialEq + Debug {
    /// The "do nothing" action.
    fn stop() -> Self;

    fn is_stop(&self) -> bool {
        *self == Self::stop()
    }
}
