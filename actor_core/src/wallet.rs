//! Wallet - currency ledger

use crate::events::GameEvent;
use serde::{Deserialize, Serialize};

/// Spendable currency. Subtraction clamps at zero: overspending is a
/// silent clamp, never a debt and never an error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Wallet {
    currency: u64,
}

impl Wallet {
    pub fn new(currency: u64) -> Self {
        Wallet { currency }
    }

    pub fn currency(&self) -> u64 {
        self.currency
    }

    pub fn add(&mut self, amount: u64, events: &mut Vec<GameEvent>) {
        self.currency += amount;
        events.push(GameEvent::CurrencyChanged {
            current: self.currency,
        });
    }

    pub fn subtract(&mut self, amount: u64, events: &mut Vec<GameEvent>) {
        self.currency = self.currency.saturating_sub(amount);
        events.push(GameEvent::CurrencyChanged {
            current: self.currency,
        });
    }

    pub fn has_any(&self) -> bool {
        self.currency > 0
    }
}
