//! Snapshot and restore for mutable collaborators.

/// State that can be captured before a mutation and put back afterwards.
///
/// Every collaborator the zap mutates (ledger, pool, vault) implements
/// `Checkpoint`.  Restoring a snapshot is the compensating action for all
/// mutations made since it was taken, which is how a failed zap unwinds.
///
/// Implementations must make `restore(checkpoint())` a no-op and must
/// restore state exactly, including any counters or supplies.
///
/// # Examples
///
/// ```
/// use zap_amm::traits::Checkpoint;
///
/// struct Counter(u32);
///
/// impl Checkpoint for Counter {
///     type Snapshot = u32;
///     fn checkpoint(&self) -> u32 {
///         self.0
///     }
///     fn restore(&mut self, snapshot: u32) {
///         self.0 = snapshot;
///     }
/// }
///
/// let mut c = Counter(1);
/// let snap = c.checkpoint();
/// c.0 = 5;
/// c.restore(snap);
/// assert_eq!(c.0, 1);
/// ```
pub trait Checkpoint {
    /// Captured state.
    type Snapshot;

    /// Captures the current state.
    fn checkpoint(&self) -> Self::Snapshot;

    /// Replaces the current state with `snapshot`.
    fn restore(&mut self, snapshot: Self::Snapshot);
}

/// Runs `op` against `state` and restores the prior state if it fails.
///
/// ```
/// use zap_amm::domain::{Address, Amount};
/// use zap_amm::ledger::MemoryLedger;
/// use zap_amm::traits::{transact, Ledger};
///
/// let token = Address::from_low_u64(1);
/// let alice = Address::from_low_u64(2);
/// let mut ledger = MemoryLedger::new(0);
///
/// let result = transact(&mut ledger, |l| {
///     l.mint(token, alice, Amount::new(5))?;
///     l.burn(token, alice, Amount::new(6))
/// });
/// assert!(result.is_err());
/// assert_eq!(ledger.balance_of(&token, &alice), Amount::ZERO);
/// ```
///
/// # Errors
///
/// Returns whatever `op` returns.
pub fn transact<T, R, E>(state: &mut T, op: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
where
    T: Checkpoint,
{
    let snapshot = state.checkpoint();
    let result = op(state);
    if result.is_err() {
        state.restore(snapshot);
    }
    result
}
