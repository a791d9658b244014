use std::time::Instant;

/// Prints bracketed progress lines for multi-step test scenarios.
pub struct TestLogger {
    test_name: String,
    start_time: Instant,
}

impl TestLogger {
    #[must_use]
    pub fn new(test_name: &str) -> Self {
        println!("\n[SCENARIO] {test_name}");
        Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
        }
    }

    pub fn step(&self, description: &str) {
        println!("[STEP +{:?}] {description}", self.start_time.elapsed());
    }

    pub fn log_query<T: serde::Serialize>(&self, label: &str, value: &T) {
        let rendered = serde_json::to_string(value).unwrap_or_else(|err| format!("<{err}>"));
        println!("[{label}] {rendered}");
    }

    pub fn pass(&self) {
        println!(
            "[RESULT] {} passed in {:?}\n",
            self.test_name,
            self.start_time.elapsed()
        );
    }
}
