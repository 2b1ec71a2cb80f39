//! Descriptor merging and schema reconciliation.
//!
//! The two descriptor families are merged into one named map, then projected
//! onto the feature schema the loaded classifier declares. Reconciliation is
//! the load-bearing ordering contract: the output row has exactly one value
//! per schema name, in schema order.

use indexmap::IndexMap;

/// Merge the CTD and physicochemical descriptor subsets into one map.
///
/// CTD is inserted first, so on a name collision the physicochemical value
/// wins. In practice the families are disjoint: every CTD name carries a
/// leading underscore and no physicochemical name does.
pub fn merge(
    global: IndexMap<String, f64>,
    ctd: IndexMap<String, f64>,
) -> IndexMap<String, f64> {
    let mut merged = ctd;
    merged.extend(global);
    merged
}

/// Project a merged descriptor map onto the model's feature schema.
///
/// Schema names absent from the map are filled with 0.0. This is a
/// deliberate silent-recovery path: descriptor/schema drift degrades
/// prediction quality instead of failing the request. Map names outside the
/// schema are dropped. The result always has `schema.len()` values in
/// schema order.
pub fn reconcile(merged: &IndexMap<String, f64>, schema: &[String]) -> Vec<f64> {
    schema
        .iter()
        .map(|name| merged.get(name).copied().unwrap_or(0.0))
        .collect()
}
