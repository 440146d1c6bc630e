//! Transaction domain types.
//!
//! A transaction is a single invoice, payment, or contribution debit as held
//! by the record store. Its status is never stored: it is derived from the
//! two milestone dates every time it is asked for.

use chrono::NaiveDate;
use compta_shared::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_date_fr;

/// Transaction category.
///
/// Serialized with the labels used in the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Teaching engagement.
    #[serde(rename = "École")]
    School,
    /// Software development engagement.
    #[serde(rename = "Développement")]
    Development,
    /// Training engagement.
    #[serde(rename = "Formation")]
    Training,
    /// Mandatory social contribution payment.
    #[serde(rename = "Cotisation")]
    Contribution,
    /// Subsidy received.
    #[serde(rename = "Subvention")]
    Subsidy,
}

impl TransactionType {
    /// Returns the record store label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::School => "École",
            Self::Development => "Développement",
            Self::Training => "Formation",
            Self::Contribution => "Cotisation",
            Self::Subsidy => "Subvention",
        }
    }

    /// Returns true if transactions of this type can be declared as revenue.
    ///
    /// Contribution debits and subsidies are outside the contribution base.
    #[must_use]
    pub const fn is_declarable(&self) -> bool {
        !matches!(self, Self::Contribution | Self::Subsidy)
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "École" => Ok(Self::School),
            "Développement" => Ok(Self::Development),
            "Formation" => Ok(Self::Training),
            "Cotisation" => Ok(Self::Contribution),
            "Subvention" => Ok(Self::Subsidy),
            other => Err(format!("Unknown transaction type: {other}")),
        }
    }
}

/// Status tag without its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Not invoiced yet.
    Draft,
    /// Invoiced, payment pending.
    Waiting,
    /// Paid.
    Done,
}

impl StatusKind {
    /// Returns the lowercase tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Waiting => "waiting",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived transaction status.
///
/// Carries the milestone date that put the transaction in this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Neither invoiced nor paid.
    Draft,
    /// Invoiced, waiting for payment.
    Waiting {
        /// Invoice date.
        invoiced_on: NaiveDate,
    },
    /// Paid.
    Done {
        /// Settlement date.
        paid_on: NaiveDate,
    },
}

impl TransactionStatus {
    /// Derives the status from the two milestone dates.
    ///
    /// A payment date alone is enough for `Done`.
    #[must_use]
    pub const fn from_dates(invoiced_on: Option<NaiveDate>, paid_on: Option<NaiveDate>) -> Self {
        match (paid_on, invoiced_on) {
            (Some(paid_on), _) => Self::Done { paid_on },
            (None, Some(invoiced_on)) => Self::Waiting { invoiced_on },
            (None, None) => Self::Draft,
        }
    }

    /// Returns the status tag.
    #[must_use]
    pub const fn kind(&self) -> StatusKind {
        match self {
            Self::Draft => StatusKind::Draft,
            Self::Waiting { .. } => StatusKind::Waiting,
            Self::Done { .. } => StatusKind::Done,
        }
    }

    /// Returns the display label for a transaction of the given amount.
    ///
    /// Income reads "invoiced/received", outgoing amounts read "settled/debited".
    #[must_use]
    pub fn label(&self, amount: Decimal) -> String {
        let income = amount > Decimal::ZERO;
        match self {
            Self::Draft => "À facturer".to_string(),
            Self::Waiting { invoiced_on } => {
                let verb = if income { "Facturé" } else { "Réglé" };
                format!("{verb} le {}", format_date_fr(*invoiced_on))
            }
            Self::Done { paid_on } => {
                let verb = if income { "Reçu" } else { "Prélevé" };
                format!("{verb} le {}", format_date_fr(*paid_on))
            }
        }
    }
}

/// A financial transaction from the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Record identifier.
    pub id: TransactionId,
    /// Invoice reference.
    pub reference: Option<String>,
    /// Mission description.
    pub mission: Option<String>,
    /// Client name.
    pub client: Option<String>,
    /// Signed amount: positive for income, negative for outgoing.
    pub amount: Decimal,
    /// Category.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Free-text price breakdown.
    pub price: Option<String>,
    /// Date the transaction was invoiced.
    pub invoiced_on: Option<NaiveDate>,
    /// Date the payment cleared.
    pub paid_on: Option<NaiveDate>,
    /// Link to the record in the store's web UI.
    pub url: Option<String>,
}

impl Transaction {
    /// Creates a draft transaction with no descriptive fields.
    #[must_use]
    pub fn new(id: impl Into<TransactionId>, amount: Decimal, kind: TransactionType) -> Self {
        Self {
            id: id.into(),
            reference: None,
            mission: None,
            client: None,
            amount,
            kind,
            price: None,
            invoiced_on: None,
            paid_on: None,
            url: None,
        }
    }

    /// Sets the invoice date.
    #[must_use]
    pub fn invoiced(mut self, date: NaiveDate) -> Self {
        self.invoiced_on = Some(date);
        self
    }

    /// Sets the payment date.
    #[must_use]
    pub fn paid(mut self, date: NaiveDate) -> Self {
        self.paid_on = Some(date);
        self
    }

    /// Returns the derived status.
    #[must_use]
    pub const fn status(&self) -> TransactionStatus {
        TransactionStatus::from_dates(self.invoiced_on, self.paid_on)
    }

    /// Returns true once the payment has cleared.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.paid_on.is_some()
    }

    /// Returns true if the transaction counts toward declarable revenue
    /// (a "versement"): a declarable type with a strictly positive amount.
    #[must_use]
    pub fn is_versement(&self) -> bool {
        self.kind.is_declarable() && self.amount > Decimal::ZERO
    }
}
