//! Session bankroll and statistics.

/// Cumulative statistics for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Rounds settled.
    pub hands_played: usize,
    /// Hands (and insurance bets) that paid out.
    pub hands_won: usize,
    /// Hands that lost their stake.
    pub hands_lost: usize,
    /// Natural blackjacks paid at 3:2.
    pub blackjacks: usize,
    /// Net winnings accumulated over winning outcomes.
    pub money_won: usize,
    /// Stakes forfeited over losing outcomes.
    pub money_lost: usize,
}

/// Session balance plus statistics, in integer currency units.
///
/// The ledger is mutated only by placing a bet (a debit) and by settlement
/// outcomes; the balance can never go negative. It persists across rounds
/// for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: usize,
    stats: Statistics,
}

impl Ledger {
    /// Creates a ledger with the given starting balance.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            stats: Statistics {
                hands_played: 0,
                hands_won: 0,
                hands_lost: 0,
                blackjacks: 0,
                money_won: 0,
                money_lost: 0,
            },
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Debits a stake. Succeeds iff `0 < amount <= balance`.
    #[must_use]
    pub const fn place_bet(&mut self, amount: usize) -> bool {
        if amount == 0 || amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Credits `stake * (1 + multiplier)`, floored to integer currency, and
    /// records the win.
    ///
    /// The multiplier is 1.0 for even money, 1.5 for a natural blackjack,
    /// and 2.0 for a winning insurance side bet.
    pub fn settle_win(&mut self, stake: usize, multiplier: f64) {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let credited = ((stake as f64) * (1.0 + multiplier)).floor() as usize;
        self.balance += credited;
        self.stats.hands_won += 1;
        self.stats.money_won += credited.saturating_sub(stake);
    }

    /// Records a lost stake. The stake was already debited at bet time, so
    /// no further debit happens here.
    pub const fn settle_loss(&mut self, stake: usize) {
        self.stats.hands_lost += 1;
        self.stats.money_lost += stake;
    }

    /// Refunds the stake of a pushed hand. No win/loss statistic changes.
    pub const fn settle_push(&mut self, stake: usize) {
        self.balance += stake;
    }

    /// Records a natural blackjack payout.
    pub const fn record_blackjack(&mut self) {
        self.stats.blackjacks += 1;
    }

    /// Records a settled round.
    pub const fn record_round(&mut self) {
        self.stats.hands_played += 1;
    }
}
