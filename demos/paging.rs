/// Paging Example
///
/// This example demonstrates:
/// - Splitting a sorted list into pages
/// - The windowed page-number strip with first/last shortcuts
/// - Rejected page jumps leaving the pager where it was

use tablestore::{record, DataStore, FieldValue, PagerConfig, PagerView, RawColumn};

fn render_pager(view: &PagerView) -> String {
    let mut parts = Vec::new();
    if view.show_first {
        parts.push("«".to_string());
    }
    for page in &view.pages {
        if *page == view.current_page {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if view.show_last {
        parts.push("»".to_string());
    }
    parts.join(" ")
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("=== TableStore Paging Example ===\n");

    let records: Vec<_> = (1..=230)
        .map(|i| record([("id", FieldValue::from(i)), ("name", FieldValue::from(format!("item{}", i)))]))
        .collect();

    let mut store = DataStore::new(
        records,
        &[RawColumn::new("id", "ID").sortable(), RawColumn::new("name", "Name").sortable()],
        Some(PagerConfig::new().limit(10).max_show_page(5)),
    )
    .expect("column keys are unique");

    println!("1. {} records, {} per page, {} pages", store.get_total(), store.get_limit(), store.page_count());
    println!("   {}\n", render_pager(&store.pager_view()));

    // Sort by name descending; numeric suffixes compare by value
    store.sort("name").unwrap();
    store.sort("name").unwrap();

    for page in [2, 12, 23] {
        store.jump(page).unwrap();
        let names: Vec<String> = store
            .get_data()
            .iter()
            .map(|r| r.get("name").map(FieldValue::sort_text).unwrap_or_default())
            .collect();
        println!("2. Page {}: {}", page, names.join(", "));
        println!("   {}\n", render_pager(&store.pager_view()));
    }

    println!("3. Jumping to page 99...");
    if store.jump(99).is_err() {
        println!("   still on page {}\n", store.get_current_page());
    }

    store.jump_first().unwrap();
    println!("4. Back to first: {}", render_pager(&store.pager_view()));

    println!("\n=== Example Complete ===");
}
