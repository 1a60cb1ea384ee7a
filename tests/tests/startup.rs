use domain::prompt::compose_system_prompt;
use infrastructure::config::AgentConfig;
use infrastructure::customer_loader::{load_customer, RowSelector};
use shared::error::AgentError;
use std::io::Write;
use tempfile::NamedTempFile;
use tests::SAMPLE_CSV;

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
    file
}

#[test]
fn loaded_customer_appears_verbatim_in_prompt() {
    let file = sample_file();
    let customer = load_customer(file.path(), &RowSelector::First).unwrap();
    let prompt = compose_system_prompt(&customer);

    for (field, value) in customer.fields() {
        assert!(prompt.contains(value), "{} = {:?} missing", field, value);
    }
    assert!(prompt.contains("Asha"));
    assert!(!prompt.contains("Rajesh Kumar"));
}

#[test]
fn configured_customer_id_selects_row() {
    let file = sample_file();
    let config = AgentConfig::from_lookup(|key| match key {
        "OPENAI_API_KEY" => Some("sk-test".into()),
        "CUSTOMER_ID" => Some("CUST002".into()),
        _ => None,
    })
    .unwrap();

    let selector = RowSelector::from_customer_id(config.customer_id);
    let customer = load_customer(file.path(), &selector).unwrap();
    assert_eq!(customer.name, "Rajesh Kumar");
    assert!(compose_system_prompt(&customer).contains("26800"));
}

#[test]
fn startup_errors_are_fatal_kinds() {
    let config_err = AgentConfig::from_lookup(|_| None).unwrap_err();
    assert!(matches!(config_err, AgentError::Config(_)));

    let data_err = load_customer(std::path::Path::new("missing.csv"), &RowSelector::First)
        .unwrap_err();
    assert!(matches!(data_err, AgentError::Data(_)));
}
