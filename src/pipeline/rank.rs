//! Frequency ranking

use crate::core::model::{FrequencyTable, RankedPair};

/// Order every table entry by count descending, then token ascending
pub fn rank(table: &FrequencyTable) -> Vec<RankedPair> {
    let mut ranked: Vec<RankedPair> = table
        .iter()
        .map(|(token, count)| RankedPair::new(token, count))
        .collect();

    ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    ranked
}
