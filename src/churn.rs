// Deliberate heap churn, called once per scanline by the compositor.
// Nothing reads the strings; they only exist to keep the allocator busy while we draw.

use std::hint::black_box;

#[derive(Debug, Default)]
pub struct AllocationPressure {
    counter: u64,
}

impl AllocationPressure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate one short-lived string from the counter and drop it.
    pub fn generate(&mut self) {
        self.counter += 1;
        // black_box keeps the allocation from being optimized out.
        let garbage = black_box(self.counter.to_string());
        drop(garbage);
    }

    /// How many times `generate` has run.
    pub fn invocations(&self) -> u64 {
        self.counter
    }
}
