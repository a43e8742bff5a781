use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One model's `pricing` object, passed through without interpretation.
pub type PricingRecord = Map<String, Value>;

/// Pricing records in the order the API listed their models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingList(Vec<PricingRecord>);

impl PricingList {
    pub fn new(records: Vec<PricingRecord>) -> Self {
        Self(records)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[PricingRecord] {
        &self.0
    }
}

impl FromIterator<PricingRecord> for PricingList {
    fn from_iter<I: IntoIterator<Item = PricingRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
