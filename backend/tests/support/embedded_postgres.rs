//! Throwaway databases on the process-wide embedded cluster.
//!
//! Every test gets its own database so row ids and counts never leak between
//! tests. The schema comes from the same embedded migrations the service
//! applies at startup.

use std::time::Duration;

use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use tokio::runtime::Runtime;
use user_service::outbound::persistence::run_pending_migrations;

const SHARED_CLUSTER_RETRIES: usize = 5;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// The cluster shared by every test in this binary, started on first use.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= SHARED_CLUSTER_RETRIES => {
                return Err(format!("start cluster: {error:?}"));
            }
            Err(_) => {
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

/// Create an empty database and bring its schema up to date.
///
/// The database is dropped when the returned handle goes out of scope.
pub fn provision_migrated_database(
    cluster: &ClusterHandle,
    runtime: &Runtime,
) -> Result<TemporaryDatabase, String> {
    let name = format!("test_{}", uuid::Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(name.as_str())
        .map_err(|error| format!("create database: {error:?}"))?;
    let url = database.url().to_string();
    let applied = runtime
        .block_on(run_pending_migrations(&url))
        .map_err(|error| format!("migrate: {error}"))?;
    if applied == 0 {
        return Err("migrate: no migrations were applied to a fresh database".to_owned());
    }
    Ok(database)
}
