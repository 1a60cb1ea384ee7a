use crate::customer::CustomerRecord;
use shared::utils::{format_currency, format_percentage};

const PLACEHOLDER: &str = "not available";

const PERSONA: &str = "You are a friendly and empathetic assistant from a bank, helping an existing \
customer understand and explore their pre-approved personal loan offer.

## Objective:
Gently nudge the customer to consider taking the loan. If they show interest, help them with \
details like amount, interest rate, tenure, EMI and the application process. If they have \
concerns, listen patiently and resolve them.

## Tone:
- Calm, relatable and helpful, like a trusted bank advisor or friend.
- Speak in natural Hinglish (Hindi written in English script, mixed with English) unless the \
customer clearly prefers pure English or Hindi.
- Be emotionally intelligent; never pushy.

## Behavioral Guidelines:
- Use only the customer context below for offer details; never invent numbers.
- Do not hard-sell. Focus on resolving confusion or hesitation.
- Avoid commands or salesy language.
- Keep replies short (under 26 words) and end with a question when possible.
- Emojis are okay when they add warmth.
- Only answer questions about this loan offer; politely decline anything else.";

/// Build the system message for `customer`: fixed persona instructions plus
/// the offer details. Every non-empty field value appears verbatim.
pub fn compose_system_prompt(customer: &CustomerRecord) -> String {
    let name = value_or_placeholder(&customer.name);
    let loan_offer = money(&customer.loan_offer);
    let interest_rate = rate(&customer.interest_rate);
    let tenure = months(&customer.tenure);
    let emi = money(&customer.emi_amount);
    let expiry = value_or_placeholder(&customer.offer_expiry);

    let overview = format!(
        "{} has a pre-approved personal loan offer of {} at {} interest for {}, \
         with a monthly EMI of {}. The offer is valid until {}.",
        name, loan_offer, interest_rate, tenure, emi, expiry
    );

    let details = [
        ("Name", name.to_string()),
        ("Loan Offer", loan_offer),
        ("Interest Rate", interest_rate),
        ("Tenure", tenure),
        ("Monthly EMI", emi),
        ("Processing Fee", money(&customer.processing_fee)),
        ("Foreclosure Charges", money(&customer.foreclosure_charges)),
        ("Offer Expiry", expiry.to_string()),
        ("Purpose", value_or_placeholder(&customer.purpose).to_string()),
        (
            "Application Link",
            value_or_placeholder(&customer.application_link).to_string(),
        ),
    ]
    .iter()
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect::<Vec<_>>()
    .join("\n");

    format!(
        "{}\n\n## Customer Context:\n{}\n\n{}",
        PERSONA, overview, details
    )
}

/// The stored text unchanged, or the placeholder when it is blank.
fn value_or_placeholder(raw: &str) -> &str {
    if raw.trim().is_empty() {
        PLACEHOLDER
    } else {
        raw
    }
}

/// Raw value, followed by the rendered form when it differs.
fn with_rendering(raw: &str, rendered: Option<String>) -> String {
    let value = value_or_placeholder(raw);
    match rendered {
        Some(pretty) if pretty != value => format!("{} ({})", value, pretty),
        _ => value.to_string(),
    }
}

fn money(raw: &str) -> String {
    with_rendering(raw, format_currency(raw))
}

fn rate(raw: &str) -> String {
    with_rendering(raw, format_percentage(raw))
}

fn months(raw: &str) -> String {
    let value = value_or_placeholder(raw);
    if raw.trim().parse::<f64>().is_err() {
        value.to_string()
    } else {
        format!("{} months", value)
    }
}
