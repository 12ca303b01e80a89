//! # Payment Gateways
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart::checkout(&impl PaymentProcessor)                                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  PaymentProcessor::process_payment(total)                               │
//! │        │                                                                │
//! │        ├── PaymentGateway::Yape  ──► confirmation "Yape"                │
//! │        └── PaymentGateway::Plin  ──► confirmation "Plin"                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No money moves anywhere: a gateway always confirms, and the variants only
//! differ in the label on the confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Processor Seam
// =============================================================================

/// Anything that can take a charge.
pub trait PaymentProcessor {
    /// Charges `amount` and confirms it.
    fn process_payment(&self, amount: Money) -> PaymentConfirmation;
}

/// Proof that a charge went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// Reference number (UUID v4).
    pub reference: String,
    /// Name of the gateway that took the charge.
    pub gateway: String,
    pub amount: Money,
    pub processed_at: DateTime<Utc>,
}

impl PaymentConfirmation {
    pub fn new(gateway: impl Into<String>, amount: Money) -> Self {
        PaymentConfirmation {
            reference: Uuid::new_v4().to_string(),
            gateway: gateway.into(),
            amount,
            processed_at: Utc::now(),
        }
    }
}

impl fmt::Display for PaymentConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payment of {} made with {}.", self.amount, self.gateway)
    }
}

// =============================================================================
// Gateways
// =============================================================================

/// The wallet apps the shop accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentGateway {
    Yape,
    Plin,
}

impl PaymentGateway {
    pub const ALL: [PaymentGateway; 2] = [PaymentGateway::Yape, PaymentGateway::Plin];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentGateway::Yape => "Yape",
            PaymentGateway::Plin => "Plin",
        }
    }

    /// Maps the payment prompt answer to a gateway.
    ///
    /// `"1"` is Yape; any other answer falls through to Plin.
    pub fn from_menu_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => PaymentGateway::Yape,
            _ => PaymentGateway::Plin,
        }
    }
}

impl PaymentProcessor for PaymentGateway {
    fn process_payment(&self, amount: Money) -> PaymentConfirmation {
        let confirmation = PaymentConfirmation::new(self.label(), amount);
        info!(
            gateway = self.label(),
            amount = amount.cents(),
            reference = %confirmation.reference,
            "payment processed"
        );
        confirmation
    }
}

impl fmt::Display for PaymentGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentGateway {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yape" => Ok(PaymentGateway::Yape),
            "plin" => Ok(PaymentGateway::Plin),
            other => Err(CoreError::InvalidChoice(format!(
                "unknown payment gateway '{}'. Valid options: yape, plin",
                other
            ))),
        }
    }
}
