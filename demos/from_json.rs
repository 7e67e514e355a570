/// JSON Configuration Example
///
/// This example demonstrates:
/// - Loading columns and pager settings from JSON
/// - Loading records from JSON
/// - A server-reported total that exceeds the records held locally

use tablestore::{records_from_json, DataStore, TableConfig};

const CONFIG: &str = r#"{
    "columns": [
        {"key": "name", "title": "Name", "titleSlot": "nameHeader", "sortable": true},
        {"key": "age", "title": "Age", "sortable": true, "width": 60},
        {"key": "city", "title": "City", "width": "30%"}
    ],
    "pager": {"limit": 3, "total": 120, "maxShowPage": 7},
    "options": {"resetPageOnSetData": true}
}"#;

const RECORDS: &str = r#"[
    {"name": "张三", "age": 14, "city": "Beijing"},
    {"name": "李四", "age": 16, "city": "Shanghai"},
    {"name": "王五", "age": 15},
    {"name": "赵六", "age": null, "city": "Shenzhen"}
]"#;

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("=== TableStore JSON Example ===\n");

    let config = TableConfig::from_json(CONFIG).expect("valid config");
    let records = records_from_json(RECORDS).expect("valid records");
    let mut store = DataStore::from_config(config, records).expect("valid columns");

    println!("1. Columns:");
    for col in store.columns() {
        println!("   {} ({}), width {}, sortable {}", col.title, col.key, col.width, col.sortable);
    }

    println!("\n2. Total {} across {} pages, {} held locally", store.get_total(), store.page_count(), store.records().len());

    store.sort("age").unwrap();
    println!("\n3. First page by age:");
    for row in store.get_data() {
        println!("   {}", serde_json::to_string(row).unwrap());
    }

    store.jump(2).unwrap();
    println!("\n4. Page 2 holds {} record(s)", store.get_data().len());
    store.jump(10).unwrap();
    println!("   Page 10 holds {} record(s)", store.get_data().len());

    println!("\n=== Example Complete ===");
}
