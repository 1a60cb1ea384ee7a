//! Shared fixtures for the workspace integration tests.

use domain::completion::CompletionClient;
use domain::customer::CustomerRecord;
use domain::session::Message;
use shared::error::ApiError;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Completion client that replays scripted results and records every
/// history it was sent.
#[derive(Default)]
pub struct StubClient {
    replies: Mutex<VecDeque<Result<String, ApiError>>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl StubClient {
    pub fn new(replies: Vec<Result<String, ApiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionClient for StubClient {
    async fn complete(&self, history: &[Message]) -> Result<String, ApiError> {
        self.requests.lock().unwrap().push(history.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Malformed("no scripted reply left".into())))
    }
}

impl CompletionClient for &StubClient {
    async fn complete(&self, history: &[Message]) -> Result<String, ApiError> {
        (**self).complete(history).await
    }
}

pub fn asha() -> CustomerRecord {
    CustomerRecord {
        customer_id: Some("CUST001".into()),
        name: "Asha".into(),
        loan_offer: "500000".into(),
        interest_rate: "10.5".into(),
        tenure: "24".into(),
        emi_amount: "23000".into(),
        processing_fee: "2500".into(),
        foreclosure_charges: "1000".into(),
        offer_expiry: "2024-12-31".into(),
        purpose: "Home Renovation".into(),
        application_link: "https://example.com/apply/CUST001".into(),
    }
}

pub const SAMPLE_CSV: &str = "\
customer_id,name,loan_offer,interest_rate,tenure,emi_amount,processing_fee,foreclosure_charges,offer_expiry,purpose,application_link
CUST001,Asha,500000,10.5,24,23000,2500,1000,2024-12-31,Home Renovation,https://example.com/apply/CUST001
CUST002,Rajesh Kumar,1000000,11.2,48,26800,5000,2000,2025-01-15,Education,https://example.com/apply/CUST002
";
