use serde::{Deserialize, Serialize};

use forgeerp_core::{DomainError, DomainResult};
use forgeerp_costing::{CostAmount, CurrencyId};

/// High-level account kind (determines normal balance side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

/// Account a journal line posts to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub code: String, // e.g. "1000"
    pub name: String, // e.g. "Cash"
    pub kind: AccountKind,
}

/// Accounting schema identifier (positive).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcctSchemaId(i32);

impl AcctSchemaId {
    pub fn new(id: i32) -> DomainResult<Self> {
        if id <= 0 {
            return Err(DomainError::validation(format!("acctSchemaId > 0 (got {id})")));
        }
        Ok(Self(id))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for AcctSchemaId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One line of a GL journal as seen by the posting engine.
///
/// The accounting schema and account are assigned while the document is
/// prepared for posting, so both start out unset. Source amounts are always in
/// the journal currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlJournalDocLine {
    line_no: u32,
    currency_id: CurrencyId,
    acct_schema_id: Option<AcctSchemaId>,
    account: Option<Account>,
    amt_source_dr: CostAmount,
    amt_source_cr: CostAmount,
}

impl GlJournalDocLine {
    pub fn new(line_no: u32, currency_id: CurrencyId) -> Self {
        Self {
            line_no,
            currency_id,
            acct_schema_id: None,
            account: None,
            amt_source_dr: CostAmount::zero(currency_id),
            amt_source_cr: CostAmount::zero(currency_id),
        }
    }

    pub fn line_no(&self) -> u32 {
        self.line_no
    }

    pub fn currency_id(&self) -> CurrencyId {
        self.currency_id
    }

    pub fn acct_schema_id(&self) -> Option<AcctSchemaId> {
        self.acct_schema_id
    }

    pub fn set_acct_schema_id(&mut self, acct_schema_id: AcctSchemaId) {
        self.acct_schema_id = Some(acct_schema_id);
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn set_account(&mut self, account: Account) {
        self.account = Some(account);
    }

    pub fn amt_source_dr(&self) -> CostAmount {
        self.amt_source_dr
    }

    pub fn amt_source_cr(&self) -> CostAmount {
        self.amt_source_cr
    }

    /// Both amounts must be in the line currency and not negative.
    pub fn set_amounts(&mut self, dr: CostAmount, cr: CostAmount) -> DomainResult<()> {
        for (side, amt) in [("debit", dr), ("credit", cr)] {
            if amt.currency_id() != self.currency_id {
                tracing::warn!(
                    line_no = self.line_no,
                    expected = %self.currency_id,
                    actual = %amt.currency_id(),
                    "rejected {side} amount in foreign currency"
                );
                return Err(DomainError::invariant(format!(
                    "line {}: {side} amount {amt} is not in currency {}",
                    self.line_no, self.currency_id
                )));
            }
            if amt.signum() < 0 {
                return Err(DomainError::validation(format!(
                    "line {}: {side} amount must not be negative",
                    self.line_no
                )));
            }
        }

        self.amt_source_dr = dr;
        self.amt_source_cr = cr;
        Ok(())
    }

    /// Debit minus credit.
    pub fn balance(&self) -> DomainResult<CostAmount> {
        Ok(self.amt_source_dr.subtract(self.amt_source_cr)?)
    }
}

/// Sum of line balances in `currency_id`; zero for an empty journal.
pub fn journal_balance(
    lines: &[GlJournalDocLine],
    currency_id: CurrencyId,
) -> DomainResult<CostAmount> {
    lines
        .iter()
        .try_fold(CostAmount::zero(currency_id), |total, line| {
            Ok(total.add(line.balance()?)?)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn eur() -> CurrencyId {
        CurrencyId::new(100).unwrap()
    }

    fn eur_amt(value: Decimal) -> CostAmount {
        CostAmount::new(value, eur())
    }

    fn test_account(code: &str, kind: AccountKind) -> Account {
        Account {
            code: code.to_string(),
            name: code.to_string(),
            kind,
        }
    }

    fn line(line_no: u32, dr: Decimal, cr: Decimal) -> GlJournalDocLine {
        let mut line = GlJournalDocLine::new(line_no, eur());
        line.set_amounts(eur_amt(dr), eur_amt(cr)).unwrap();
        line
    }

    #[test]
    fn new_line_has_no_schema_or_account() {
        let line = GlJournalDocLine::new(10, eur());
        assert_eq!(line.acct_schema_id(), None);
        assert_eq!(line.account(), None);
        assert!(line.balance().unwrap().is_zero());
    }

    #[test]
    fn schema_and_account_can_be_assigned() {
        let mut line = GlJournalDocLine::new(10, eur());
        line.set_acct_schema_id(AcctSchemaId::new(1000001).unwrap());
        line.set_account(test_account("1000", AccountKind::Asset));

        assert_eq!(line.acct_schema_id().map(AcctSchemaId::get), Some(1000001));
        assert_eq!(line.account().map(|a| a.code.as_str()), Some("1000"));
    }

    #[test]
    fn acct_schema_id_must_be_positive() {
        assert!(matches!(AcctSchemaId::new(0), Err(DomainError::Validation(_))));
    }

    #[test]
    fn foreign_currency_amounts_are_rejected() {
        let mut line = GlJournalDocLine::new(10, eur());
        let chf = CostAmount::new(dec!(5), CurrencyId::new(318).unwrap());

        let err = line.set_amounts(chf, eur_amt(dec!(0))).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(line.amt_source_dr().is_zero());
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut line = GlJournalDocLine::new(10, eur());
        let err = line
            .set_amounts(eur_amt(dec!(0)), eur_amt(dec!(-1)))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("credit")));
    }

    #[test]
    fn balanced_journal_sums_to_zero() {
        let lines = vec![
            line(10, dec!(100.00), dec!(0)),
            line(20, dec!(0), dec!(60.00)),
            line(30, dec!(0), dec!(40.00)),
        ];

        assert_eq!(lines[0].balance().unwrap(), eur_amt(dec!(100)));
        assert_eq!(lines[1].balance().unwrap(), eur_amt(dec!(-60)));
        assert!(journal_balance(&lines, eur()).unwrap().is_zero());
    }

    #[test]
    fn journal_balance_in_other_currency_fails() {
        let lines = vec![line(10, dec!(1), dec!(0))];
        let chf = CurrencyId::new(318).unwrap();
        assert!(matches!(
            journal_balance(&lines, chf),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: pairing every debit with an equal credit line keeps the journal balanced.
        #[test]
        fn mirrored_lines_balance(cents in prop::collection::vec(1i64..1_000_000i64, 1..10)) {
            let mut lines = Vec::new();
            for (i, c) in cents.iter().enumerate() {
                let amount = Decimal::new(*c, 2);
                lines.push(line(i as u32 * 20 + 10, amount, Decimal::ZERO));
                lines.push(line(i as u32 * 20 + 20, Decimal::ZERO, amount));
            }

            prop_assert!(journal_balance(&lines, eur()).unwrap().is_zero());
        }
    }
}
