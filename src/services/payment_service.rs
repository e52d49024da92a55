//! UPI / manual payment simulation. An external collaborator with a trivial
//! success/failure contract; no real gateway is called.

use chrono::Utc;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaymentMethod {
    Gpay,
    Phonepe,
    Paytm,
    Cash,
}

impl PaymentMethod {
    pub fn upi_id(&self) -> Option<&'static str> {
        match self {
            PaymentMethod::Gpay => Some("smartparking@okaxis"),
            PaymentMethod::Phonepe => Some("smartparking@ybl"),
            PaymentMethod::Paytm => Some("smartparking@paytm"),
            PaymentMethod::Cash => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Gpay => "GPay",
            PaymentMethod::Phonepe => "PhonePe",
            PaymentMethod::Paytm => "Paytm",
            PaymentMethod::Cash => "Cash",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct PaymentIntent {
    pub upi_id: String,
    pub amount: u32,
}

pub fn initiate_payment(amount: u32, method: PaymentMethod) -> Result<PaymentIntent, String> {
    if amount == 0 {
        return Err("Invalid payment amount".to_string());
    }

    let upi_id = method
        .upi_id()
        .ok_or_else(|| "Unsupported payment method".to_string())?;

    Ok(PaymentIntent {
        upi_id: upi_id.to_string(),
        amount,
    })
}

#[derive(Clone, PartialEq, Debug)]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub amount: u32,
    pub paid_at: String,
}

/// Mock verification: any plausible transaction id passes.
pub fn verify_payment(transaction_id: &str, amount: u32) -> Result<PaymentReceipt, String> {
    if transaction_id.len() < 6 {
        return Err("Invalid Transaction ID".to_string());
    }

    Ok(PaymentReceipt {
        transaction_id: transaction_id.to_string(),
        amount,
        paid_at: Utc::now().to_rfc3339(),
    })
}

/// Simulated transaction id for the demo flow.
pub fn mock_transaction_id() -> String {
    format!("TXN{}", Utc::now().timestamp_millis() % 100_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_is_rejected() {
        assert!(initiate_payment(0, PaymentMethod::Gpay).is_err());
    }

    #[test]
    fn cash_has_no_upi_id() {
        assert_eq!(
            initiate_payment(50, PaymentMethod::Cash),
            Err("Unsupported payment method".to_string())
        );
    }

    #[test]
    fn upi_methods_resolve_their_id() {
        let intent = initiate_payment(50, PaymentMethod::Phonepe).expect("intent");
        assert_eq!(intent.upi_id, "smartparking@ybl");
        assert_eq!(intent.amount, 50);
    }

    #[test]
    fn short_transaction_ids_fail_verification() {
        assert!(verify_payment("TXN1", 50).is_err());
        assert!(verify_payment("TXN123456", 50).is_ok());
    }
}
