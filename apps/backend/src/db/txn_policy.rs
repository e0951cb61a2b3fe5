use std::str::FromStr;
use std::sync::OnceLock;

/// What `with_txn` does with a transaction whose callback returned `Ok`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Commit the transaction when the operation succeeds (default behavior)
    CommitOnOk,
    /// Rollback the transaction when the operation succeeds (for testing)
    RollbackOnOk,
}

impl FromStr for TxnPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "commit" | "commit_on_ok" => Ok(Self::CommitOnOk),
            "rollback" | "rollback_on_ok" => Ok(Self::RollbackOnOk),
            other => Err(format!("unknown txn policy: {other}")),
        }
    }
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// Get the current transaction policy.
///
/// Returns `CommitOnOk` if no policy has been set.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or(TxnPolicy::CommitOnOk)
}

/// Set the transaction policy for the process.
///
/// Only the first call has any effect; later calls are ignored.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}
