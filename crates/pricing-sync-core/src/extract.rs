use serde_json::Value;

use crate::pricing::{PricingList, PricingRecord};

/// Pull each model's `pricing` object out of a `/models` response.
///
/// Output is positionally aligned with `data`: entries without a usable
/// `pricing` object (missing, `null`, or the entry itself not an object)
/// contribute an empty record rather than being dropped. A response with no
/// `data` array yields an empty list.
pub fn extract_pricing(response: &Value) -> PricingList {
    let Some(obj) = response.as_object() else {
        tracing::warn!("models response is not a JSON object; nothing to extract");
        return PricingList::default();
    };
    let entries = match obj.get("data") {
        None => return PricingList::default(),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            tracing::warn!("`data` is not an array; nothing to extract");
            return PricingList::default();
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| entry_pricing(idx, entry))
        .collect()
}

fn entry_pricing(idx: usize, entry: &Value) -> PricingRecord {
    let Some(entry) = entry.as_object() else {
        tracing::warn!(index = idx, "model entry is not an object; using empty pricing");
        return PricingRecord::new();
    };
    match entry.get("pricing") {
        Some(Value::Object(pricing)) => pricing.clone(),
        None => PricingRecord::new(),
        Some(_) => {
            let id = entry.get("id").and_then(|v| v.as_str()).unwrap_or("?");
            tracing::warn!(index = idx, id, "`pricing` is not an object; using empty pricing");
            PricingRecord::new()
        }
    }
}
