//! All-or-nothing execution of the mutating zap stages.
//!
//! A [`UnitOfWork`] borrows the ledger, the pool and (optionally) the
//! vault for the length of one zap.  Before each mutating stage it takes
//! snapshots of the state that stage touches; if any stage fails, or the
//! unit is dropped without [`commit`](UnitOfWork::commit), the snapshots
//! are restored newest first.

use tracing::{trace, warn};

use crate::domain::ZapState;
use crate::error::ZapError;
use crate::traits::{Checkpoint, Ledger, PoolClient, StakingClient};

enum Compensation<L, P, S>
where
    L: Checkpoint,
    P: Checkpoint,
    S: Checkpoint,
{
    Ledger(L::Snapshot),
    Pool(P::Snapshot),
    Vault(S::Snapshot),
}

/// Journal of snapshots over one zap's participants.
pub struct UnitOfWork<'a, L, P, S>
where
    L: Ledger,
    P: PoolClient,
    S: StakingClient,
{
    ledger: &'a mut L,
    pool: &'a mut P,
    vault: Option<&'a mut S>,
    journal: Vec<(ZapState, Compensation<L, P, S>)>,
    state: ZapState,
    committed: bool,
}

impl<'a, L, P, S> UnitOfWork<'a, L, P, S>
where
    L: Ledger,
    P: PoolClient,
    S: StakingClient,
{
    /// Starts a unit in the [`ZapState::Plan`] stage; validation and
    /// planning are expected to be done already.
    pub fn new(ledger: &'a mut L, pool: &'a mut P, vault: Option<&'a mut S>) -> Self {
        Self {
            ledger,
            pool,
            vault,
            journal: Vec::new(),
            state: ZapState::Plan,
            committed: false,
        }
    }

    /// Runs `op` as `stage`.
    ///
    /// Mutating stages journal the ledger, plus the pool for swap and
    /// deposit and the vault for forward.  On failure every journalled
    /// snapshot is restored and the unit moves to
    /// [`ZapState::Aborted`].
    ///
    /// # Errors
    ///
    /// Returns `op`'s error after the rollback.
    pub fn run<R>(
        &mut self,
        stage: ZapState,
        op: impl FnOnce(&mut L, &mut P, Option<&mut S>) -> Result<R, ZapError>,
    ) -> Result<R, ZapError> {
        self.state = stage;
        if stage.is_mutating() {
            self.journal
                .push((stage, Compensation::Ledger(self.ledger.checkpoint())));
            match stage {
                ZapState::Swap | ZapState::Deposit => {
                    self.journal
                        .push((stage, Compensation::Pool(self.pool.checkpoint())));
                }
                _ => {
                    if let Some(vault) = self.vault.as_deref() {
                        self.journal
                            .push((stage, Compensation::Vault(vault.checkpoint())));
                    }
                }
            }
        }
        trace!(stage = %stage, journal = self.journal.len(), "stage started");

        let result = op(&mut *self.ledger, &mut *self.pool, self.vault.as_deref_mut());
        if let Err(err) = &result {
            warn!(stage = %stage, error = %err, "zap stage failed, rolling back");
            self.rollback();
        }
        result
    }

    /// Discards the journal; the changes made so far become final.
    pub fn commit(mut self) {
        self.journal.clear();
        self.state = ZapState::Done;
        self.committed = true;
    }

    fn rollback(&mut self) {
        while let Some((stage, compensation)) = self.journal.pop() {
            trace!(stage = %stage, "restoring snapshot");
            match compensation {
                Compensation::Ledger(snapshot) => self.ledger.restore(snapshot),
                Compensation::Pool(snapshot) => self.pool.restore(snapshot),
                Compensation::Vault(snapshot) => {
                    if let Some(vault) = self.vault.as_deref_mut() {
                        vault.restore(snapshot);
                    }
                }
            }
        }
        self.state = ZapState::Aborted;
    }
}

impl<L, P, S> Drop for UnitOfWork<'_, L, P, S>
where
    L: Ledger,
    P: PoolClient,
    S: StakingClient,
{
    fn drop(&mut self) {
        if !self.committed && !self.journal.is_empty() {
            warn!(stage = %self.state, "unit of work dropped uncommitted, rolling back");
            self.rollback();
        }
    }
}
