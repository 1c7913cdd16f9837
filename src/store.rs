//! Bankroll persistence.
//!
//! The session reads the bankroll once when it is created and writes it back
//! after every change. Where it lives (browser session storage, a file, a
//! database row) is up to the implementor, as is handling write failures.

/// Loads and saves the bankroll between reloads.
pub trait BankrollStore {
    /// Returns the saved bankroll, or `None` on first run.
    fn load_bankroll(&mut self) -> Option<usize>;

    /// Saves the bankroll.
    fn save_bankroll(&mut self, bankroll: usize);
}

impl<S: BankrollStore + ?Sized> BankrollStore for &mut S {
    fn load_bankroll(&mut self) -> Option<usize> {
        (**self).load_bankroll()
    }

    fn save_bankroll(&mut self, bankroll: usize) {
        (**self).save_bankroll(bankroll);
    }
}

/// In-memory store. Lives as long as the session does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    bankroll: Option<usize>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { bankroll: None }
    }

    /// Creates a store that already holds a bankroll.
    #[must_use]
    pub const fn with_bankroll(bankroll: usize) -> Self {
        Self {
            bankroll: Some(bankroll),
        }
    }

    /// Returns the last saved bankroll.
    #[must_use]
    pub const fn saved(&self) -> Option<usize> {
        self.bankroll
    }
}

impl BankrollStore for MemoryStore {
    fn load_bankroll(&mut self) -> Option<usize> {
        self.bankroll
    }

    fn save_bankroll(&mut self, bankroll: usize) {
        self.bankroll = Some(bankroll);
    }
}
