#![allow(dead_code)]

// tests/common/mod.rs
use trivia_backend::db::txn_policy::{set_txn_policy, TxnPolicy};

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Policy defaults to rollback but can be flipped per-binary via `TRIVIA_TXN_POLICY=commit`.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = std::env::var("TRIVIA_TXN_POLICY")
        .ok()
        .and_then(|raw| raw.parse::<TxnPolicy>().ok())
        .unwrap_or(TxnPolicy::RollbackOnOk);

    set_txn_policy(policy);
}
