use std::sync::{Arc, Mutex};

use bistro_stock::{
    Decimal, DiagnosticContext, DiagnosticSink, ItemKind, MaterialItem, Packaging, StockEngine,
    StockPolicy, StockStatus, status_color, status_label,
};
use rust_decimal_macros::dec;
use tracing::Level;

#[derive(Debug, Default)]
struct CollectingSink {
    operations: Mutex<Vec<String>>,
}

impl DiagnosticSink for CollectingSink {
    fn log(&self, _level: Level, _message: &str, context: &DiagnosticContext) {
        if let Ok(mut ops) = self.operations.lock() {
            ops.push(format!("{}:{}", context.operation, context.item_id));
        }
    }
}

fn pantry() -> Vec<MaterialItem> {
    serde_json::from_str(
        r#"[
            {"id":"flour","name":"Harina","kind":"measurable","unit":"kg","stock":42.5,"unit_cost":0.85},
            {"id":"beer","name":"Cerveza","kind":"countable","stock":8,"unit_cost":1.2,
             "packaging":{"package_size":24,"package_unit":"caja"}},
            {"id":"stock-pot","name":"Caldo","kind":"elaborated","stock":2,"unit_cost":3.4},
            {"id":"limes","name":"Limas","kind":"countable","stock":0,"unit_cost":0.15}
        ]"#,
    )
    .unwrap()
}

#[test]
fn dashboard_statistics_for_a_mixed_pantry() {
    let sink = Arc::new(CollectingSink::default());
    let engine = StockEngine::new(StockPolicy::default(), Arc::clone(&sink)).unwrap();
    let items = pantry();

    let statuses: Vec<_> = items.iter().map(|i| engine.stock_status(i)).collect();
    assert_eq!(
        statuses,
        vec![StockStatus::Ok, StockStatus::Low, StockStatus::Critical, StockStatus::Out]
    );

    let stats = engine.statistics(&items);
    assert_eq!(stats.total, 4);
    assert_eq!((stats.ok, stats.low, stats.critical, stats.out), (1, 1, 1, 1));
    // 36.125 + 9.6 + 6.8 + 0 = 52.525
    assert_eq!(stats.total_value, dec!(52.53));
    // 52.5 / 4 = 13.125
    assert_eq!(stats.average_stock, dec!(13.13));

    let colors: Vec<_> = statuses.iter().map(|s| status_color(s.as_str())).collect();
    assert_eq!(colors, vec!["green", "yellow", "orange", "red"]);
    assert_eq!(status_label("out"), "Sin stock");

    assert!(sink.operations.lock().unwrap().is_empty());
}

#[test]
fn reorder_plan_end_to_end() {
    let engine = StockEngine::default();
    let plan = engine.reorder_plan(&pantry());

    let summary: Vec<_> = plan
        .iter()
        .map(|l| (l.item_id.as_str(), l.priority, l.quantity, l.unit.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            // target 20, needed 20 -> 20 (no packaging)
            ("limes", 5, dec!(20), "unidad"),
            // target 10, needed 8 -> 10
            ("stock-pot", 4, dec!(10), "porción"),
            // target 20, needed 12 -> one case of 24
            ("beer", 3, dec!(24), "caja"),
        ]
    );
}

#[test]
fn corrupt_record_is_logged_not_fatal() {
    let sink = Arc::new(CollectingSink::default());
    let engine = StockEngine::default().with_sink(Arc::clone(&sink));

    let mut items = pantry();
    items.push(
        MaterialItem::new("ghost", "Fantasma", ItemKind::Countable)
            .with_stock(f64::NAN)
            .with_unit_cost(2.0)
            .with_packaging(Packaging::new(6.0, "pack")),
    );

    let stats = engine.statistics(&items);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.out, 2);
    assert_eq!(stats.total_value, dec!(52.53));

    let ops = sink.operations.lock().unwrap().clone();
    assert!(ops.contains(&"total_value:ghost".to_string()));
    assert!(ops.contains(&"statistics:ghost".to_string()));
}

#[test]
fn empty_batch() {
    let engine = StockEngine::default();
    let stats = engine.statistics(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.total_value, Decimal::ZERO);
    assert_eq!(stats.average_stock, Decimal::ZERO);
    assert!(engine.reorder_plan(&[]).is_empty());
    assert!(engine.low_stock_items(&[]).is_empty());
}
