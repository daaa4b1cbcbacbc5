//! Cumulative token accounting for one session.

use crate::TokenUsage;

/// Running totals across every API call a session has made.
#[derive(Debug, Default)]
pub struct UsageTotals {
    total: TokenUsage,
    call_count: u64,
}

impl UsageTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from one API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens += usage.input_tokens;
        self.total.output_tokens += usage.output_tokens;
        self.call_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates() {
        let mut totals = UsageTotals::new();
        totals.record(&TokenUsage {
            input_tokens: 10,
            output_tokens: 20,
        });
        totals.record(&TokenUsage {
            input_tokens: 5,
            output_tokens: 7,
        });

        assert_eq!(totals.total().input_tokens, 15);
        assert_eq!(totals.total().output_tokens, 27);
        assert_eq!(totals.total_tokens(), 42);
        assert_eq!(totals.call_count(), 2);
    }

    #[test]
    fn new_totals_are_zero() {
        let totals = UsageTotals::new();
        assert_eq!(totals.total_tokens(), 0);
        assert_eq!(totals.call_count(), 0);
    }
}
