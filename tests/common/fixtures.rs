//! Small tree builders shared by the integration suites.

use wattle::Node;
use wattle::html::{
    anchor, list_item, set_href, table, table_cell_text, table_row, unordered_list, wrap_all,
    wrap_text,
};

/// An anchor with its target set and a text label.
pub fn link(target: &str, label: &str) -> Node {
    let a = anchor();
    set_href(&a, target);
    wrap_text(&a, label)
}

/// A `<ul>` with one `<li>` per label.
pub fn bullet_list(labels: &[&str]) -> Node {
    wrap_all(
        &unordered_list(),
        labels.iter().map(|label| wrap_text(&list_item(), *label)),
    )
}

/// A `<table>` of text cells, one row per inner slice.
pub fn text_table(rows: &[&[&str]]) -> Node {
    wrap_all(
        &table(),
        rows.iter().map(|cells| {
            wrap_all(
                &table_row(),
                cells.iter().map(|cell| table_cell_text(*cell)),
            )
        }),
    )
}
