use itertools::Itertools;

use crate::EnrichmentResult;

const UNAVAILABLE: &str = "[unavailable]";

/// Renders the title/summary listing shown next to the translation.
///
/// One block per segment, in order; failed segments keep their block with
/// placeholders so episode positions stay readable.
pub fn render_report(enrichments: &[EnrichmentResult]) -> String {
    enrichments
        .iter()
        .map(|result| {
            format!(
                "{}\n{}\n\n",
                result.title().unwrap_or(UNAVAILABLE),
                result.summary().unwrap_or(UNAVAILABLE)
            )
        })
        .join("")
}
