/// Basic Table Example
///
/// This example demonstrates:
/// - Building a store from records and column descriptions
/// - Cycling a column through ascending, descending and natural order
/// - Reading the events a table widget would forward to its host

use tablestore::{record, DataStore, FieldValue, RawColumn, Record};

fn print_rows(rows: &[&Record]) {
    for row in rows {
        println!(
            "   {:<8} age {}",
            row.get("name").map(FieldValue::sort_text).unwrap_or_default(),
            row.get("age").map(FieldValue::sort_text).unwrap_or_else(|| "-".to_string()),
        );
    }
    println!();
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));

    println!("=== TableStore Basic Example ===\n");

    // 1. Describe the columns
    let columns = vec![
        RawColumn::new("name", "Name").sortable(),
        RawColumn::new("age", "Age").sortable().width(80),
        RawColumn::new("email", "Email"),
    ];

    // 2. Load records
    let records = vec![
        record([("name", FieldValue::from("Alice")), ("age", FieldValue::from(30))]),
        record([("name", FieldValue::from("bob")), ("age", FieldValue::from(9))]),
        record([("name", FieldValue::from("Carol")), ("age", FieldValue::from(30))]),
        record([("name", FieldValue::from("dave"))]),
    ];

    let mut store = DataStore::new(records, &columns, None).expect("column keys are unique");
    println!("1. Natural order ({} records):", store.get_total());
    print_rows(&store.get_data());

    // 3. Click the "age" header three times
    for _ in 0..3 {
        let direction = store.sort("age").expect("age is sortable");
        println!("2. Sorted by age, {:?}:", direction);
        print_rows(&store.get_data());
    }

    // 4. Clicking a column that cannot be sorted is reported and ignored
    println!("3. Clicking the email header...");
    if let Err(e) = store.sort("email") {
        println!("   rejected: {}\n", e);
    }

    // 5. Events for the host
    println!("4. Events:");
    for event in store.drain_events() {
        println!("   {}", serde_json::to_string(&event).unwrap());
    }

    println!("\n=== Example Complete ===");
}
