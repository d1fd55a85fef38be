//! Text summary builder for CLI output.

use crate::registry::NameRegistry;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// One line per name, in the registry's current order.
pub(crate) fn build_text_summary(registry: &NameRegistry) -> TextSummary {
    TextSummary {
        lines: registry.serialize().map(str::to_string).collect(),
    }
}
