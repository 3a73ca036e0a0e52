//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;
use view_router::config::RouteConfig;

#[allow(dead_code)]
/// A four-route table, larger than the application's so permutations are meaningful.
pub fn wide_table() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "editor", "EditorPage"),
        RouteConfig::new("/preview", "preview", "PreviewPage"),
        RouteConfig::new("/settings", "settings", "SettingsPage"),
        RouteConfig::new("/preview/print", "print", "PrintPage"),
    ]
}

#[allow(dead_code)]
/// Every ordering of `items` (Heap's algorithm).
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        for i in 0..k - 1 {
            heap(k - 1, items, out);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
        heap(k - 1, items, out);
    }

    let mut items = items.to_vec();
    let mut out = Vec::new();
    let len = items.len();
    heap(len, &mut items, &mut out);
    out
}

/// Write `content` to a temp file that is removed when dropped.
#[allow(dead_code)]
pub fn write_temp_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("view-router-")
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
