use paystack_api::types::{Customer, Plan, Transaction, TransactionAccess};
use paystack_api::Response;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_transaction_verify_full() {
    let json = load_fixture("transaction_verify.json");
    let resp: Response<Transaction> = serde_json::from_str(&json).unwrap();
    assert!(resp.status);
    assert_eq!(resp.message, "Verification successful");

    let tx = resp.data.unwrap();
    assert_eq!(tx.id, 1320945231);
    assert_eq!(tx.reference, "ref_8ynz1goqd2");
    assert_eq!(tx.amount, 500000);
    assert_eq!(tx.currency, "NGN");
    assert_eq!(tx.gateway_response.as_deref(), Some("Successful"));
    assert!(tx.paid_at.is_some());
    assert_eq!(tx.fees, Some(7600));
    // The API sends an empty string when metadata is unset.
    assert_eq!(tx.metadata, Some(serde_json::Value::String(String::new())));

    let customer = tx.customer.unwrap();
    assert_eq!(customer.customer_code, "CUS_i5f1z66qdu4r9pq");
    assert_eq!(customer.first_name.as_deref(), Some("Ada"));

    let authorization = tx.authorization.unwrap();
    assert_eq!(authorization.last4.as_deref(), Some("4081"));
    assert_eq!(authorization.reusable, Some(true));
}

#[test]
fn deserialize_transaction_list_with_meta() {
    let json = load_fixture("transaction_list.json");
    let resp: Response<Vec<Transaction>> = serde_json::from_str(&json).unwrap();

    let transactions = resp.data.unwrap();
    assert_eq!(transactions.len(), 2);
    assert!(transactions[0].customer.is_some());
    assert!(transactions[1].customer.is_none());
    assert!(transactions[1].paid_at.is_none());

    let meta = resp.meta.unwrap();
    assert_eq!(meta.total, 2);
    assert_eq!(meta.skipped, 0);
    assert_eq!(meta.per_page, 50);
    assert_eq!(meta.page, 1);
    assert_eq!(meta.page_count, 1);
}

#[test]
fn deserialize_transaction_initialize() {
    let json = load_fixture("transaction_initialize.json");
    let resp: Response<TransactionAccess> = serde_json::from_str(&json).unwrap();

    let access = resp.data.unwrap();
    assert_eq!(access.authorization_url, "https://checkout.paystack.com/0peioxfhpn");
    assert_eq!(access.access_code, "0peioxfhpn");
    assert_eq!(access.reference, "7PVGX8MEk85tgeEpVDtD");
}

#[test]
fn deserialize_customer() {
    let json = load_fixture("customer.json");
    let resp: Response<Customer> = serde_json::from_str(&json).unwrap();

    let customer = resp.data.unwrap();
    assert_eq!(customer.id, 90407781);
    assert_eq!(customer.email, "ada@example.com");
    assert!(customer.metadata.as_ref().unwrap().is_null());
    assert!(customer.created_at.is_some());
}

#[test]
fn deserialize_plan_list_intervals() {
    let json = load_fixture("plan_list.json");
    let resp: Response<Vec<Plan>> = serde_json::from_str(&json).unwrap();

    let plans = resp.data.unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].interval.to_string(), "monthly");
    assert_eq!(plans[1].interval.to_string(), "annually");
    assert_eq!(plans[1].description.as_deref(), Some("Billed once a year"));
}

#[test]
fn deserialize_error_envelope() {
    let json = load_fixture("error_envelope.json");
    let resp: Response<Transaction> = serde_json::from_str(&json).unwrap();

    assert!(!resp.status);
    assert_eq!(resp.message, "Transaction reference not found");
    assert!(resp.data.is_none());
    assert_eq!(resp.error_type.as_deref(), Some("api_error"));
    assert_eq!(resp.code.as_deref(), Some("transaction_not_found"));
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"data": not valid json}"#;
    let result = serde_json::from_str::<Response<Transaction>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    // A transaction without its required `amount` must fail as a whole.
    let json = r#"{"status":true,"message":"ok","data":{"id":1,"domain":"test","status":"success","reference":"r","currency":"NGN"}}"#;
    let result = serde_json::from_str::<Response<Transaction>>(json);
    assert!(result.is_err());
}
