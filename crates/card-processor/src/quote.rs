//! Random quote selection that avoids serving the same quote twice in a row.

use rand::Rng;
use tracing::debug;

/// Remembers the last served quote across captures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteSelector {
    last: Option<String>,
}

impl QuoteSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently returned quote, if any.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Pick a quote using the thread-local RNG.
    pub fn select(&mut self, candidates: &[String]) -> String {
        let mut rng = rand::thread_rng();
        self.select_with_rng(candidates, &mut rng)
    }

    /// Pick a quote, stepping forward from the drawn index when it matches
    /// the previous pick.
    ///
    /// An empty list returns an empty string and leaves the state alone.
    pub fn select_with_rng<R: Rng + ?Sized>(
        &mut self,
        candidates: &[String],
        rng: &mut R,
    ) -> String {
        let len = candidates.len();
        if len == 0 {
            return String::new();
        }

        let mut index = if len == 1 { 0 } else { rng.gen_range(0..len) };

        if let Some(last) = self.last.as_deref() {
            // Duplicates in the corpus may need more than one step.
            for _ in 1..len {
                if candidates[index] != last {
                    break;
                }
                index = (index + 1) % len;
            }
        }

        let picked = candidates[index].clone();
        debug!(index, total = len, "Selected quote");
        self.last = Some(picked.clone());
        picked
    }
}
