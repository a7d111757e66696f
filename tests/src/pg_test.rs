use crate::db::TestDb;

use std::future::Future;

/// Runs one database test on its own runtime and drops the test's schema
/// afterwards, even when the test panics.
pub struct PgTest {
    runtime: tokio::runtime::Runtime,
    db: Option<TestDb>,
}

impl PgTest {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self { runtime, db: None }
    }

    /// Run a test function against a fresh set of fixture tables. The test
    /// is skipped when the default server is unreachable and fails when an
    /// explicitly configured one is.
    pub fn run_test<F, Fut>(&mut self, test_fn: F)
    where
        F: FnOnce(TestDb) -> Fut,
        Fut: Future<Output = ()>,
    {
        let Some(db) = self.runtime.block_on(TestDb::setup()) else {
            return;
        };

        self.db = Some(db.clone());
        self.runtime.block_on(test_fn(db));
    }
}

impl Default for PgTest {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PgTest {
    fn drop(&mut self) {
        if let Some(db) = self.db.take() {
            self.runtime.block_on(async {
                if let Err(e) = db.cleanup().await {
                    log::warn!("failed to drop test schema: {}", e);
                }
            });
        }
    }
}
