use serde::{Deserialize, Serialize};

/// Columns every customer file must carry (after header normalization).
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "name",
    "loan_offer",
    "interest_rate",
    "tenure",
    "emi_amount",
    "processing_fee",
    "foreclosure_charges",
    "offer_expiry",
    "purpose",
    "application_link",
];

/// One customer's pre-approved loan offer. Cell text is kept verbatim so the
/// model sees exactly what the bank's sheet says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default)]
    pub customer_id: Option<String>,
    pub name: String,
    pub loan_offer: String,
    pub interest_rate: String,
    pub tenure: String,
    pub emi_amount: String,
    pub processing_fee: String,
    pub foreclosure_charges: String,
    pub offer_expiry: String,
    pub purpose: String,
    pub application_link: String,
}

impl CustomerRecord {
    /// Field name/value pairs in column order.
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("name", self.name.as_str()),
            ("loan_offer", self.loan_offer.as_str()),
            ("interest_rate", self.interest_rate.as_str()),
            ("tenure", self.tenure.as_str()),
            ("emi_amount", self.emi_amount.as_str()),
            ("processing_fee", self.processing_fee.as_str()),
            ("foreclosure_charges", self.foreclosure_charges.as_str()),
            ("offer_expiry", self.offer_expiry.as_str()),
            ("purpose", self.purpose.as_str()),
            ("application_link", self.application_link.as_str()),
        ]
    }

    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "customer"
        } else {
            name
        }
    }
}
