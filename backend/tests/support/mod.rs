//! Embedded PostgreSQL helpers shared by the Diesel integration suites.
//!
//! Each test gets its own temporary database on a process-wide cluster
//! managed by `pg-embed-setup-unpriv`. When the cluster cannot start,
//! `SKIP_TEST_CLUSTER=1` turns the failure into a skip; otherwise the test
//! panics so CI breakage is not masked.

use std::time::Duration;

use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use pg_embedded_setup_unpriv::{BootstrapResult, ClusterHandle, TemporaryDatabase};

const CLUSTER_RETRIES: usize = 5;
const CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true" or "yes".
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip or fail a test whose cluster could not be prepared.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

fn cluster() -> BootstrapResult<&'static ClusterHandle> {
    let mut attempt = 1;
    loop {
        match shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= CLUSTER_RETRIES => return Err(error),
            Err(_) => {
                std::thread::sleep(CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

/// Create an empty temporary database, dropped with the returned handle.
///
/// The schema is left empty so callers exercise the embedded migrations.
pub fn provision_empty_database() -> Result<TemporaryDatabase, String> {
    let cluster = cluster().map_err(|err| format!("cluster: {err:?}"))?;
    cluster
        .create_temporary_database()
        .map_err(|err| format!("create database: {err:?}"))
}
