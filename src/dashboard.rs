//! Dashboard view-models
//!
//! Chart data derived from the feed's precomputed statistics. Nothing is
//! re-aggregated here: the only work is ordering, top-N selection, scaling
//! and percentage rounding. Geometry (treemap tiles, word sizes) is expressed
//! in renderer-neutral units so the static page and the WASM UI draw the
//! same charts.

use serde::Serialize;

use crate::feed::{Desglose, Estadisticas};
use crate::filter::is_selectable;
use crate::stats::ordered_types;
use crate::tags::normalize_tag;

/// Tags shown in the "top tags" chart
pub const TOP_ETIQUETAS: usize = 10;

/// Issuers shown in the "top issuers" chart
pub const TOP_EMISORES: usize = 15;

/// Word cloud font size range, in px
pub const CLOUD_MIN_FONT: f64 = 12.0;
pub const CLOUD_MAX_FONT: f64 = 48.0;

/// Side of the square the treemap is laid out in
pub const TREEMAP_SIDE: f64 = 100.0;

/// Headline number tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: String,
    pub value: u64,
    /// Fill of the tile's radial ring, 0–100
    pub percent: u8,
}

/// One bar of a bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDatum {
    pub label: String,
    pub count: u64,
    /// Length relative to the longest bar, 0–100
    pub ratio_percent: f64,
}

/// One slice of the donut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutSlice {
    pub label: String,
    pub count: u64,
    /// Share of the whole, 0–1
    pub fraction: f64,
    /// Cumulative share before this slice, 0–1
    pub start: f64,
    /// Share rounded to one decimal, for labels
    pub percent: f64,
}

/// One treemap rectangle, in a [`TREEMAP_SIDE`]-sized square
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapTile {
    pub label: String,
    pub count: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One word of the tag cloud
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub label: String,
    /// Filter token, so a word can activate the matching filter
    pub token: String,
    pub count: u64,
    pub font_size: f64,
}

/// Share of normas that carry annexes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub label: String,
    pub percent: u8,
    pub con_anexos: u64,
    pub total: u64,
}

/// Every chart of the dashboard view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub kpis: Vec<Kpi>,
    pub tipo_bars: Vec<BarDatum>,
    pub tipo_donut: Vec<DonutSlice>,
    pub top_etiquetas: Vec<BarDatum>,
    pub top_emisores: Vec<BarDatum>,
    pub treemap: Vec<TreemapTile>,
    pub word_cloud: Vec<CloudWord>,
    pub gauge: Gauge,
}

impl Dashboard {
    pub fn build(stats: &Estadisticas) -> Self {
        let gauge = Gauge {
            label: "Con Anexos".to_string(),
            percent: anexo_percent(stats.total_con_anexos, stats.total_normas),
            con_anexos: stats.total_con_anexos,
            total: stats.total_normas,
        };

        let tipos = ordered_types(&stats.desglose_tipos);

        let dashboard = Self {
            kpis: vec![
                Kpi {
                    label: "Total Normas".to_string(),
                    value: stats.total_normas,
                    percent: 100,
                },
                Kpi {
                    label: "Con Anexos".to_string(),
                    value: stats.total_con_anexos,
                    percent: gauge.percent,
                },
                Kpi {
                    label: "Etiquetas Únicas".to_string(),
                    value: stats.total_etiquetas_unicas,
                    percent: 100,
                },
            ],
            tipo_bars: bars(&tipos),
            tipo_donut: donut(&tipos),
            top_etiquetas: bars(&top_n(&stats.desglose_etiquetas, TOP_ETIQUETAS)),
            top_emisores: bars(&top_n(&stats.desglose_emisores, TOP_EMISORES)),
            treemap: treemap(&stats.desglose_categorias),
            word_cloud: word_cloud(&stats.desglose_etiquetas),
            gauge,
        };

        tracing::debug!(
            tipos = dashboard.tipo_bars.len(),
            categorias = dashboard.treemap.len(),
            palabras = dashboard.word_cloud.len(),
            "dashboard built"
        );
        dashboard
    }
}

/// `round(con_anexos / total * 100)`, 0 without normas, never above 100
pub fn anexo_percent(con_anexos: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (con_anexos as f64 / total as f64 * 100.0).round();
    percent.min(100.0) as u8
}

/// Largest `n` entries, count descending then name
pub fn top_n(desglose: &Desglose, n: usize) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = desglose.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)));
    entries.truncate(n);
    entries
}

/// Bars scaled against the largest entry
pub fn bars(entries: &[(&str, u64)]) -> Vec<BarDatum> {
    let max = entries.iter().map(|(_, c)| *c).max().unwrap_or(0);
    entries
        .iter()
        .map(|(label, count)| BarDatum {
            label: label.to_string(),
            count: *count,
            ratio_percent: if max == 0 {
                0.0
            } else {
                *count as f64 / max as f64 * 100.0
            },
        })
        .collect()
}

/// Donut slices in the given order; empty when the total is zero
pub fn donut(entries: &[(&str, u64)]) -> Vec<DonutSlice> {
    let total: u64 = entries.iter().map(|(_, c)| *c).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    entries
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| {
            let fraction = *count as f64 / total as f64;
            let slice = DonutSlice {
                label: label.to_string(),
                count: *count,
                fraction,
                start,
                percent: (fraction * 1000.0).round() / 10.0,
            };
            start += fraction;
            slice
        })
        .collect()
}

/// Word sizes interpolated linearly between the font bounds.
/// Tags without a usable filter token are left out.
pub fn word_cloud(desglose: &Desglose) -> Vec<CloudWord> {
    let entries: Vec<(&str, u64, String)> = top_n(desglose, desglose.len())
        .into_iter()
        .map(|(label, count)| (label, count, normalize_tag(label)))
        .filter(|(_, _, token)| is_selectable(token))
        .collect();
    let min = entries.iter().map(|(_, c, _)| *c).min().unwrap_or(0);
    let max = entries.iter().map(|(_, c, _)| *c).max().unwrap_or(0);

    entries
        .into_iter()
        .map(|(label, count, token)| {
            let font_size = if max == min {
                (CLOUD_MIN_FONT + CLOUD_MAX_FONT) / 2.0
            } else {
                CLOUD_MIN_FONT
                    + (count - min) as f64 / (max - min) as f64 * (CLOUD_MAX_FONT - CLOUD_MIN_FONT)
            };
            CloudWord {
                label: label.to_string(),
                token,
                count,
                font_size,
            }
        })
        .collect()
}

/// Squarified treemap of the category breakdown, largest first
pub fn treemap(desglose: &Desglose) -> Vec<TreemapTile> {
    let entries: Vec<(&str, u64)> = top_n(desglose, desglose.len())
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    let total: u64 = entries.iter().map(|(_, c)| *c).sum();
    if total == 0 {
        return Vec::new();
    }

    let bounds = Rect {
        x: 0.0,
        y: 0.0,
        width: TREEMAP_SIDE,
        height: TREEMAP_SIDE,
    };
    let scale = bounds.width * bounds.height / total as f64;
    let areas: Vec<f64> = entries.iter().map(|(_, c)| *c as f64 * scale).collect();

    squarify(&areas, bounds)
        .into_iter()
        .zip(entries)
        .map(|(rect, (label, count))| TreemapTile {
            label: label.to_string(),
            count,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    fn short_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Running totals of the row being filled
#[derive(Debug, Clone, Copy)]
struct RowStats {
    sum: f64,
    min: f64,
    max: f64,
}

impl RowStats {
    fn with(self, area: f64) -> Self {
        Self {
            sum: self.sum + area,
            min: self.min.min(area),
            max: self.max.max(area),
        }
    }

    /// Worst aspect ratio of the row laid along a side of length `side`
    fn worst(&self, side: f64) -> f64 {
        if self.sum <= 0.0 || side <= 0.0 {
            return f64::INFINITY;
        }
        let side2 = side * side;
        let sum2 = self.sum * self.sum;
        (side2 * self.max / sum2).max(sum2 / (side2 * self.min))
    }
}

/// Bruls–Huizing–van Wijk squarified layout; `areas` sorted descending and
/// summing to the area of `bounds`
fn squarify(areas: &[f64], bounds: Rect) -> Vec<Rect> {
    let mut out = Vec::with_capacity(areas.len());
    let mut free = bounds;
    let mut row: Vec<f64> = Vec::new();
    let mut stats = RowStats {
        sum: 0.0,
        min: f64::INFINITY,
        max: 0.0,
    };

    for &area in areas {
        let side = free.short_side();
        let candidate = stats.with(area);
        if row.is_empty() || candidate.worst(side) <= stats.worst(side) {
            row.push(area);
            stats = candidate;
        } else {
            free = layout_row(&row, stats.sum, free, &mut out);
            row.clear();
            row.push(area);
            stats = RowStats {
                sum: area,
                min: area,
                max: area,
            };
        }
    }

    if !row.is_empty() {
        layout_row(&row, stats.sum, free, &mut out);
    }
    out
}

/// Place a row along the short side of `free`; returns the space left
fn layout_row(row: &[f64], sum: f64, free: Rect, out: &mut Vec<Rect>) -> Rect {
    if free.width >= free.height {
        // Column on the left
        let column = if free.height > 0.0 { sum / free.height } else { 0.0 };
        let mut y = free.y;
        for &area in row {
            let height = if column > 0.0 { area / column } else { 0.0 };
            out.push(Rect {
                x: free.x,
                y,
                width: column,
                height,
            });
            y += height;
        }
        Rect {
            x: free.x + column,
            width: (free.width - column).max(0.0),
            ..free
        }
    } else {
        // Row along the top
        let band = if free.width > 0.0 { sum / free.width } else { 0.0 };
        let mut x = free.x;
        for &area in row {
            let width = if band > 0.0 { area / band } else { 0.0 };
            out.push(Rect {
                x,
                y: free.y,
                width,
                height: band,
            });
            x += width;
        }
        Rect {
            y: free.y + band,
            height: (free.height - band).max(0.0),
            ..free
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desglose(entries: &[(&str, u64)]) -> Desglose {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn sample_stats() -> Estadisticas {
        Estadisticas {
            total_normas: 40,
            total_con_anexos: 13,
            total_etiquetas_unicas: 4,
            desglose_tipos: desglose(&[("RESOLUCION", 20), ("DECRETO", 10), ("DISPOSICION", 10)]),
            desglose_etiquetas: desglose(&[("Salud", 8), ("Empleo", 2), ("Energía", 5), ("Agro", 2)]),
            desglose_emisores: desglose(&[("MINISTERIO DE ECONOMIA", 12), ("ANMAT", 3)]),
            desglose_categorias: desglose(&[("Economía", 6), ("Salud", 3), ("Trabajo", 2), ("Otros", 1)]),
        }
    }

    #[test]
    fn test_anexo_percent() {
        assert_eq!(anexo_percent(13, 40), 33);
        assert_eq!(anexo_percent(1, 8), 13);
        assert_eq!(anexo_percent(0, 0), 0);
        assert_eq!(anexo_percent(5, 0), 0);
        assert_eq!(anexo_percent(9, 4), 100);
    }

    #[test]
    fn test_top_n_orders_by_count_then_name() {
        let stats = sample_stats();
        let top = top_n(&stats.desglose_etiquetas, 3);
        assert_eq!(top, vec![("Salud", 8), ("Energía", 5), ("Agro", 2)]);
    }

    #[test]
    fn test_top_lists_are_capped() {
        let many: Desglose = (0..30).map(|i| (format!("Emisor {:02}", i), i)).collect();
        let stats = Estadisticas {
            desglose_emisores: many.clone(),
            desglose_etiquetas: many,
            ..Default::default()
        };
        let dashboard = Dashboard::build(&stats);

        assert_eq!(dashboard.top_emisores.len(), TOP_EMISORES);
        assert_eq!(dashboard.top_etiquetas.len(), TOP_ETIQUETAS);
        assert_eq!(dashboard.top_emisores[0].label, "Emisor 29");
        assert_eq!(dashboard.top_emisores[0].ratio_percent, 100.0);
    }

    #[test]
    fn test_type_charts_follow_official_order() {
        let dashboard = Dashboard::build(&sample_stats());
        let labels: Vec<_> = dashboard.tipo_bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["DECRETO", "RESOLUCION", "DISPOSICION"]);
        assert_eq!(dashboard.tipo_bars[0].ratio_percent, 50.0);
        assert_eq!(dashboard.tipo_bars[1].ratio_percent, 100.0);

        let donut = &dashboard.tipo_donut;
        assert_eq!(donut.len(), 3);
        assert_eq!(donut[0].percent, 25.0);
        assert_eq!(donut[1].start, 0.25);
        let sum: f64 = donut.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_kpis_and_gauge() {
        let dashboard = Dashboard::build(&sample_stats());
        assert_eq!(dashboard.kpis.len(), 3);
        assert_eq!(dashboard.kpis[0].value, 40);
        assert_eq!(dashboard.kpis[1].percent, 33);
        assert_eq!(dashboard.kpis[2].value, 4);
        assert_eq!(dashboard.gauge.percent, 33);
    }

    #[test]
    fn test_word_cloud_sizes() {
        let words = word_cloud(&sample_stats().desglose_etiquetas);

        assert_eq!(words[0].label, "Salud");
        assert_eq!(words[0].font_size, CLOUD_MAX_FONT);
        assert_eq!(words.last().unwrap().font_size, CLOUD_MIN_FONT);
        let energia = words.iter().find(|w| w.label == "Energía").unwrap();
        assert_eq!(energia.token, "energia");
        assert_eq!(energia.font_size, 30.0);

        let flat = word_cloud(&desglose(&[("A", 2), ("B", 2)]));
        assert!(flat.iter().all(|w| w.font_size == 30.0));
    }

    #[test]
    fn test_word_cloud_skips_tags_without_token() {
        let words = word_cloud(&desglose(&[("日本", 50), ("All", 40), ("Salud", 4), ("Empleo", 2)]));

        let labels: Vec<_> = words.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["Salud", "Empleo"]);
        assert!(words.iter().all(|w| !w.token.is_empty()));
        assert_eq!(words[0].font_size, CLOUD_MAX_FONT);
        assert_eq!(words[1].font_size, CLOUD_MIN_FONT);
    }

    #[test]
    fn test_treemap_covers_the_square() {
        let tiles = treemap(&sample_stats().desglose_categorias);
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].label, "Economía");

        let area: f64 = tiles.iter().map(|t| t.width * t.height).sum();
        assert!((area - TREEMAP_SIDE * TREEMAP_SIDE).abs() < 1e-6);

        for tile in &tiles {
            assert!(tile.x >= -1e-9 && tile.y >= -1e-9);
            assert!(tile.x + tile.width <= TREEMAP_SIDE + 1e-6);
            assert!(tile.y + tile.height <= TREEMAP_SIDE + 1e-6);
        }

        // Area proportional to count
        let economia = tiles[0].width * tiles[0].height;
        let salud = tiles[1].width * tiles[1].height;
        assert!((economia / salud - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_treemap_single_category_fills_everything() {
        let tiles = treemap(&desglose(&[("Salud", 3), ("Vacía", 0)]));
        assert_eq!(tiles.len(), 1);
        assert!((tiles[0].width - TREEMAP_SIDE).abs() < 1e-9);
        assert!((tiles[0].height - TREEMAP_SIDE).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats_build_empty_charts() {
        let dashboard = Dashboard::build(&Estadisticas::default());
        assert!(dashboard.tipo_bars.is_empty());
        assert!(dashboard.tipo_donut.is_empty());
        assert!(dashboard.treemap.is_empty());
        assert!(dashboard.word_cloud.is_empty());
        assert_eq!(dashboard.gauge.percent, 0);
    }
}
