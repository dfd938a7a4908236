//! End-to-end tests driving the engine through its public surface: snapshot
//! loading, derivation, summary printing and edit planning.

use commercial_ledger::{
    entities::{
        movement_id, order_id, sub_order_id, BillingMode, EditRequest, MovementDraft,
        MovementScope, TaskStatus,
    },
    errors::LedgerError,
    util::CommercialLedgerUtil,
};

const ORDERS_CSV: &str = "\
id,order_number,client,quoted_amount,billing_mode,director,executive,observations
o1,2024-001,Acme,\"1,000\",global,Diana,Elena,renewal expected
";

const SUB_ORDERS_CSV: &str = "\
id,order_id,sequence,unit,budgeted_amount,working_amount,status
s1,o1,1,Madrid,600,600,invoiced
s2,o1,2,Lisbon,400,400,invoiced
";

const MOVEMENTS_CSV: &str = "\
id,order_id,sub_order_id,invoice_number,invoice_date,invoice_amount,payment_date,paid_amount
m1,o1,,F-001,2024-03-01,\"1,000\",,
";

const SNAPSHOT_JSON: &str = r#"{
    "orders": [{
        "id": "o1",
        "orderNumber": "2024-001",
        "client": "Acme",
        "quotedAmount": 1000.0,
        "billingMode": "global",
        "director": "Diana",
        "executive": "Elena"
    }],
    "subOrders": [
        {"id": "s1", "orderId": "o1", "sequence": 1, "unit": "Madrid",
         "budgetedAmount": 600.0, "workingAmount": 600.0, "status": "invoiced"},
        {"id": "s2", "orderId": "o1", "sequence": 2, "unit": "Lisbon",
         "budgetedAmount": 400.0, "workingAmount": 400.0, "status": "invoiced"}
    ],
    "movements": [{
        "id": "m1",
        "orderId": "o1",
        "invoiceNumber": "F-001",
        "invoiceDate": "2024-03-01",
        "invoiceAmount": 1000.0,
        "paymentDate": "2024-04-02",
        "paidAmount": 1000.0
    }]
}"#;

#[test]
fn derives_statuses_and_summary_from_csv_strings() {
    let util = CommercialLedgerUtil::new();
    let (snapshot, derived, summary) = util
        .from_csv_strings(ORDERS_CSV, SUB_ORDERS_CSV, MOVEMENTS_CSV)
        .unwrap();

    assert_eq!(snapshot.orders.len(), 1);
    assert_eq!(snapshot.sub_orders.len(), 2);

    let attribution = &derived.attributions[&order_id("o1")];
    assert!((attribution.invoiced_for(&sub_order_id("s1")) - 600.0).abs() < 1e-9);
    assert!((attribution.invoiced_for(&sub_order_id("s2")) - 400.0).abs() < 1e-9);
    assert_eq!(derived.status_of(&sub_order_id("s1")), Some(TaskStatus::Invoiced));
    assert_eq!(derived.status_of(&sub_order_id("s2")), Some(TaskStatus::Invoiced));

    assert!(summary.contains("2024-001 Acme (global billing)"));
    assert!(summary.contains("last invoice F-001 on 2024-03-01"));
    assert!(summary.contains("€"));
}

#[test]
fn derives_collected_statuses_from_json_string() {
    let util = CommercialLedgerUtil::new();
    let (_, derived, summary) = util.from_json_string(SNAPSHOT_JSON).unwrap();

    assert_eq!(derived.status_of(&sub_order_id("s1")), Some(TaskStatus::Collected));
    assert_eq!(derived.status_of(&sub_order_id("s2")), Some(TaskStatus::Collected));
    assert!(summary.contains("last payment on 2024-04-02"));
}

#[tokio::test]
async fn derives_from_csv_files() {
    let dir = std::env::temp_dir().join("commercial-ledger-csv-files");
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let orders = dir.join("orders.csv");
    let sub_orders = dir.join("sub_orders.csv");
    let movements = dir.join("movements.csv");
    tokio::fs::write(&orders, ORDERS_CSV).await.unwrap();
    tokio::fs::write(&sub_orders, SUB_ORDERS_CSV).await.unwrap();
    tokio::fs::write(&movements, MOVEMENTS_CSV).await.unwrap();

    let util = CommercialLedgerUtil::new();
    let (snapshot, derived, _) = util
        .from_csv_files(&orders, &sub_orders, &movements)
        .await
        .unwrap();

    assert_eq!(snapshot.movements.len(), 1);
    assert_eq!(derived.status_of(&sub_order_id("s1")), Some(TaskStatus::Invoiced));
}

#[tokio::test]
async fn derives_from_json_file() {
    let dir = std::env::temp_dir().join("commercial-ledger-json-file");
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let path = dir.join("snapshot.json");
    tokio::fs::write(&path, SNAPSHOT_JSON).await.unwrap();

    let util = CommercialLedgerUtil::new();
    let (_, derived, _) = util.from_json_file(&path).await.unwrap();

    assert_eq!(derived.status_of(&sub_order_id("s2")), Some(TaskStatus::Collected));
}

#[tokio::test]
async fn config_file_switches_summary_currency() {
    let dir = std::env::temp_dir().join("commercial-ledger-config");
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let path = dir.join("engine.ron");
    tokio::fs::write(&path, r#"(currency: Some("USD"))"#)
        .await
        .unwrap();

    let util = CommercialLedgerUtil::from_config_file(&path).await.unwrap();
    let (_, _, summary) = util
        .from_csv_strings(ORDERS_CSV, SUB_ORDERS_CSV, MOVEMENTS_CSV)
        .unwrap();

    assert!(summary.contains("$"));
    assert!(!summary.contains("€"));
}

#[test]
fn noop_edit_plans_an_empty_batch() {
    let util = CommercialLedgerUtil::new();
    let (snapshot, _, _) = util
        .from_csv_strings(ORDERS_CSV, SUB_ORDERS_CSV, MOVEMENTS_CSV)
        .unwrap();

    let (batch, warnings) = util
        .plan(&snapshot, &order_id("o1"), &EditRequest::default())
        .unwrap();

    assert!(batch.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn billing_mode_switch_on_locked_order_is_rejected() {
    let util = CommercialLedgerUtil::new();
    let (snapshot, _, _) = util
        .from_csv_strings(ORDERS_CSV, SUB_ORDERS_CSV, MOVEMENTS_CSV)
        .unwrap();

    let edit = EditRequest {
        billing_mode: Some(BillingMode::PerTask),
        ..EditRequest::default()
    };
    assert!(matches!(
        util.plan(&snapshot, &order_id("o1"), &edit),
        Err(LedgerError::BillingModeLocked { .. })
    ));
}

#[test]
fn recording_a_full_payment_plans_collected_statuses() {
    let util = CommercialLedgerUtil::new();
    let (snapshot, _, _) = util
        .from_csv_strings(ORDERS_CSV, SUB_ORDERS_CSV, MOVEMENTS_CSV)
        .unwrap();

    // Keep the stored invoice row, add a locally-new payment covering it.
    let mut drafts: Vec<MovementDraft> = snapshot
        .movements
        .iter()
        .map(|m| MovementDraft::from(m.clone()))
        .collect();
    drafts.push(MovementDraft {
        id: movement_id("local-1"),
        transient: true,
        scope: MovementScope::Order(order_id("o1")),
        invoice_number: None,
        invoice_date: None,
        invoice_amount: None,
        payment_date: None,
        paid_amount: Some(1000.0),
    });
    let edit = EditRequest {
        movements: Some(drafts),
        ..EditRequest::default()
    };

    let (batch, warnings) = util.plan(&snapshot, &order_id("o1"), &edit).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(batch.movements.create.len(), 1);
    assert!(batch.movements.update.is_empty());
    assert!(batch.movements.delete.is_empty());
    assert_eq!(batch.status_patches.len(), 2);
    assert!(batch
        .status_patches
        .iter()
        .all(|p| p.status == TaskStatus::Collected));
}
