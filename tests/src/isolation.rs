use std::sync::atomic::{AtomicU32, Ordering};

/// Generates unique schema names for test isolation.
///
/// Generated accessors use fixed table names, so each test creates the
/// fixture tables in its own schema, named `test_{process_id}_{test_counter}`,
/// and puts it first on the connection's search path.
#[derive(Clone)]
pub struct TestIsolation {
    process_id: u32,
    test_counter: u32,
}

// Global counter shared across all tests in this process
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

impl TestIsolation {
    /// Create a new test isolation instance with a unique counter.
    pub fn new() -> Self {
        Self {
            process_id: std::process::id(),
            test_counter: TEST_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn schema(&self) -> String {
        format!("test_{}_{}", self.process_id, self.test_counter)
    }
}

impl Default for TestIsolation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_are_unique() {
        let schema1 = TestIsolation::new().schema();
        let schema2 = TestIsolation::new().schema();

        assert_ne!(schema1, schema2);
        assert!(schema1.starts_with("test_"));
    }

    #[test]
    fn schema_format() {
        let schema = TestIsolation::new().schema();

        // Should match format: test_{process_id}_{counter}
        let parts: Vec<&str> = schema.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "test");
        assert!(parts[1].parse::<u32>().is_ok());
        assert!(parts[2].parse::<u32>().is_ok());
    }
}
