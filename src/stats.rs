//! Statistics panel
//!
//! Total entries plus one proportional bar per norma type.

use serde::Serialize;
use std::cmp::Ordering;

use crate::feed::{Desglose, Estadisticas};

/// Official ordering of norma types in the bulletin
pub const TYPE_ORDER: &[&str] = &[
    "DECRETO",
    "DECRETOS (SUPLEMENTO)",
    "DECISION ADMINISTRATIVA",
    "RESOLUCION",
    "DISPOSICION",
    "CONVENCIONES COLECTIVAS DE TRABAJO",
    "LAUDO",
    "AVISOS OFICIALES",
    "CONCURSO",
    "CONCURSOS OFICIALES",
    "AVISOS OFICIALES - ANTERIOR",
];

/// One row of the panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeRow {
    /// Type key as found in the feed
    pub tipo: String,
    /// Human-readable label ("Decisión administrativa" style)
    pub label: String,
    pub count: u64,
    /// Bar width relative to the largest type, 0–100
    pub width_percent: f64,
}

/// View-model of the statistics panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsPanel {
    pub total_normas: u64,
    /// Empty when every type count is zero
    pub rows: Vec<TypeRow>,
}

impl StatsPanel {
    pub fn from_stats(stats: &Estadisticas) -> Self {
        Self {
            total_normas: stats.total_normas,
            rows: type_rows(&stats.desglose_tipos),
        }
    }
}

/// Position of a type in [`TYPE_ORDER`], case-insensitive
fn type_rank(tipo: &str) -> Option<usize> {
    let upper = tipo.to_uppercase();
    TYPE_ORDER.iter().position(|t| *t == upper)
}

/// Type breakdown in display order: official types first, then the rest by
/// count descending and name
pub fn ordered_types(desglose: &Desglose) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = desglose.iter().map(|(k, v)| (k.as_str(), *v)).collect();

    entries.sort_by(|(a, a_count), (b, b_count)| match (type_rank(a), type_rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b_count.cmp(a_count).then_with(|| a.cmp(b)),
    });

    entries
}

/// Rows with widths proportional to the largest count
pub fn type_rows(desglose: &Desglose) -> Vec<TypeRow> {
    let max = desglose.values().copied().max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }

    ordered_types(desglose)
        .into_iter()
        .map(|(tipo, count)| TypeRow {
            tipo: tipo.to_string(),
            label: format_type_label(tipo),
            count,
            width_percent: count as f64 / max as f64 * 100.0,
        })
        .collect()
}

/// `"DECISION_ADMINISTRATIVA"` → `"Decision administrativa"`
pub fn format_type_label(tipo: &str) -> String {
    let lowered = tipo.to_lowercase().replace('_', " ");
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desglose(entries: &[(&str, u64)]) -> Desglose {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_widths_are_proportional() {
        let rows = type_rows(&desglose(&[("DECRETO", 10), ("RESOLUCION", 5)]));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tipo, "DECRETO");
        assert_eq!(rows[0].width_percent, 100.0);
        assert_eq!(rows[1].tipo, "RESOLUCION");
        assert_eq!(rows[1].width_percent, 50.0);
        assert_eq!(rows[1].width_percent / rows[0].width_percent, 0.5);
    }

    #[test]
    fn test_official_order_then_unknown_by_count() {
        let tipos = desglose(&[
            ("RESOLUCION", 40),
            ("OTRO TIPO", 1),
            ("aviso especial", 7),
            ("decreto", 3),
            ("DISPOSICION", 12),
        ]);
        let ordered = ordered_types(&tipos);
        let keys: Vec<_> = ordered.iter().map(|(k, _)| *k).collect();

        assert_eq!(
            keys,
            vec!["decreto", "RESOLUCION", "DISPOSICION", "aviso especial", "OTRO TIPO"]
        );
    }

    #[test]
    fn test_all_zero_counts_yield_no_rows() {
        let stats = Estadisticas {
            total_normas: 0,
            desglose_tipos: desglose(&[("DECRETO", 0)]),
            ..Default::default()
        };
        let panel = StatsPanel::from_stats(&stats);
        assert_eq!(panel.total_normas, 0);
        assert!(panel.rows.is_empty());
    }

    #[test]
    fn test_format_type_label() {
        assert_eq!(format_type_label("DECISION_ADMINISTRATIVA"), "Decision administrativa");
        assert_eq!(format_type_label("RESOLUCIÓN"), "Resolución");
        assert_eq!(format_type_label(""), "");
    }
}
