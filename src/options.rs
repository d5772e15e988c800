//! Table configuration options.

/// What a round reset does to a player's bust flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ResetPolicy {
    /// Reset clears the hand and the stay flag, and a bust carries over.
    #[default]
    KeepBust,
    /// Reset also clears the bust flag.
    ClearBust,
}

/// Score above which a hand is bust.
pub const DEFAULT_BUST_LIMIT: u32 = 21;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcards::{ResetPolicy, TableOptions};
///
/// let options = TableOptions::default()
///     .with_bust_limit(31)
///     .with_initial_shuffles(3)
///     .with_reset_policy(ResetPolicy::ClearBust);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// A hand scoring strictly above this limit is bust.
    pub bust_limit: u32,
    /// Number of shuffle passes applied to the deck when the game is created.
    pub initial_shuffles: usize,
    /// Bust handling on round reset.
    pub reset_policy: ResetPolicy,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            bust_limit: DEFAULT_BUST_LIMIT,
            initial_shuffles: 1,
            reset_policy: ResetPolicy::KeepBust,
        }
    }
}

impl TableOptions {
    /// Sets the bust limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::TableOptions;
    ///
    /// let options = TableOptions::default().with_bust_limit(31);
    /// assert_eq!(options.bust_limit, 31);
    /// ```
    #[must_use]
    pub const fn with_bust_limit(mut self, limit: u32) -> Self {
        self.bust_limit = limit;
        self
    }

    /// Sets the number of shuffle passes applied at game creation.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::TableOptions;
    ///
    /// let options = TableOptions::default().with_initial_shuffles(0);
    /// assert_eq!(options.initial_shuffles, 0);
    /// ```
    #[must_use]
    pub const fn with_initial_shuffles(mut self, passes: usize) -> Self {
        self.initial_shuffles = passes;
        self
    }

    /// Sets the round reset policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::{ResetPolicy, TableOptions};
    ///
    /// let options = TableOptions::default().with_reset_policy(ResetPolicy::ClearBust);
    /// assert_eq!(options.reset_policy, ResetPolicy::ClearBust);
    /// ```
    #[must_use]
    pub const fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }
}
