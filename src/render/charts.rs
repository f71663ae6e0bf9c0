//! Inline SVG charts
//!
//! Every function returns a self-contained fragment; no charting library
//! is loaded by the page.

use std::fmt::Write;

use super::html_escape;
use crate::dashboard::{BarDatum, CloudWord, DonutSlice, Gauge, Kpi, TreemapTile, TREEMAP_SIDE};

/// Series colors, cycled by index
pub const PALETTE: [&str; 8] = [
    "#22d3ee", // Cyan (primary)
    "#818cf8", // Indigo
    "#f472b6", // Pink
    "#34d399", // Emerald
    "#fbbf24", // Amber
    "#f87171", // Red
    "#a78bfa", // Violet
    "#60a5fa", // Blue
];

pub fn color(idx: usize) -> &'static str {
    PALETTE[idx % PALETTE.len()]
}

/// Radius of a circle whose circumference is 100, so dash lengths are percents
const RING_RADIUS: f64 = 15.915_494_309_189_533;

/// Radial KPI tile
pub fn kpi_tile(kpi: &Kpi) -> String {
    format!(
        r#"<div class="kpi glass-card">{ring}<div class="kpi-value">{value}</div><div class="kpi-label">{label}</div></div>"#,
        ring = ring(kpi.percent as f64, color(0), None),
        value = kpi.value,
        label = html_escape(&kpi.label),
    )
}

/// Gauge for the share of normas with annexes
pub fn gauge(gauge: &Gauge) -> String {
    format!(
        r#"<figure class="chart chart-gauge" id="gauge-anexos">{ring}<figcaption>{label} <span>({con} de {total})</span></figcaption></figure>"#,
        ring = ring(gauge.percent as f64, color(0), Some(&format!("{}%", gauge.percent))),
        label = html_escape(&gauge.label),
        con = gauge.con_anexos,
        total = gauge.total,
    )
}

fn ring(percent: f64, stroke: &str, center: Option<&str>) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let mut svg = format!(
        r##"<svg class="ring" viewBox="0 0 42 42" role="img"><circle cx="21" cy="21" r="{r}" fill="none" stroke="#334155" stroke-width="4"/><circle cx="21" cy="21" r="{r}" fill="none" stroke="{stroke}" stroke-width="4" stroke-dasharray="{p:.2} {rest:.2}" stroke-dashoffset="25"/>"##,
        r = RING_RADIUS,
        stroke = stroke,
        p = percent,
        rest = 100.0 - percent,
    );
    if let Some(text) = center {
        let _ = write!(
            svg,
            r#"<text x="21" y="23.5" text-anchor="middle" class="ring-text">{}</text>"#,
            html_escape(text)
        );
    }
    svg.push_str("</svg>");
    svg
}

/// Vertical bar chart (counts by type)
pub fn vertical_bars(id: &str, title: &str, bars: &[BarDatum]) -> String {
    const HEIGHT: f64 = 60.0;
    const SLOT: f64 = 12.0;

    if bars.is_empty() {
        return empty_chart(id, title);
    }

    let width = SLOT * bars.len() as f64;
    let mut body = String::new();
    for (idx, bar) in bars.iter().enumerate() {
        let h = bar.ratio_percent / 100.0 * HEIGHT;
        let x = idx as f64 * SLOT + SLOT * 0.225;
        let _ = write!(
            body,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{fill}" rx="1"><title>{label}: {count}</title></rect><text x="{cx:.2}" y="{ty:.2}" text-anchor="middle" class="bar-value">{count}</text>"#,
            x = x,
            y = HEIGHT - h + 6.0,
            w = SLOT * 0.55,
            h = h,
            fill = color(idx),
            label = html_escape(&bar.label),
            count = bar.count,
            cx = idx as f64 * SLOT + SLOT / 2.0,
            ty = HEIGHT - h + 4.5,
        );
    }

    let legend: String = bars
        .iter()
        .enumerate()
        .map(|(idx, bar)| {
            format!(
                r#"<li><span class="swatch" style="background:{}"></span>{}</li>"#,
                color(idx),
                html_escape(&bar.label)
            )
        })
        .collect();

    format!(
        r#"<figure class="chart" id="{id}"><figcaption>{title}</figcaption><svg viewBox="0 0 {width:.0} {vh:.0}" preserveAspectRatio="none" role="img">{body}</svg><ul class="legend">{legend}</ul></figure>"#,
        id = id,
        title = html_escape(title),
        width = width,
        vh = HEIGHT + 6.0,
        body = body,
        legend = legend,
    )
}

/// Horizontal bar list (top tags, top issuers)
pub fn horizontal_bars(id: &str, title: &str, bars: &[BarDatum]) -> String {
    if bars.is_empty() {
        return empty_chart(id, title);
    }

    let rows: String = bars
        .iter()
        .enumerate()
        .map(|(idx, bar)| {
            format!(
                r#"<div class="hbar-row"><span class="hbar-label">{label}</span><div class="bar-container"><div class="bar" style="width: {w:.2}%; background: {fill};"></div></div><span class="hbar-count">{count}</span></div>"#,
                label = html_escape(&bar.label),
                w = bar.ratio_percent,
                fill = color(idx),
                count = bar.count,
            )
        })
        .collect();

    format!(
        r#"<figure class="chart" id="{}"><figcaption>{}</figcaption><div class="hbars">{}</div></figure>"#,
        id,
        html_escape(title),
        rows
    )
}

/// Donut chart; slices are dash segments of one ring each
pub fn donut(id: &str, title: &str, slices: &[DonutSlice]) -> String {
    if slices.is_empty() {
        return empty_chart(id, title);
    }

    let mut rings = String::new();
    let mut legend = String::new();
    for (idx, slice) in slices.iter().enumerate() {
        let length = slice.fraction * 100.0;
        let _ = write!(
            rings,
            r#"<circle cx="21" cy="21" r="{r}" fill="none" stroke="{fill}" stroke-width="6" stroke-dasharray="{len:.3} {rest:.3}" stroke-dashoffset="{offset:.3}"><title>{label}: {count}</title></circle>"#,
            r = RING_RADIUS,
            fill = color(idx),
            len = length,
            rest = 100.0 - length,
            offset = 25.0 - slice.start * 100.0,
            label = html_escape(&slice.label),
            count = slice.count,
        );
        let _ = write!(
            legend,
            r#"<li><span class="swatch" style="background:{}"></span>{} <span>{}%</span></li>"#,
            color(idx),
            html_escape(&slice.label),
            slice.percent
        );
    }

    format!(
        r#"<figure class="chart" id="{id}"><figcaption>{title}</figcaption><svg class="donut" viewBox="0 0 42 42" role="img">{rings}</svg><ul class="legend">{legend}</ul></figure>"#,
        id = id,
        title = html_escape(title),
        rings = rings,
        legend = legend,
    )
}

/// Category treemap
pub fn treemap(id: &str, title: &str, tiles: &[TreemapTile]) -> String {
    if tiles.is_empty() {
        return empty_chart(id, title);
    }

    let mut body = String::new();
    for (idx, tile) in tiles.iter().enumerate() {
        let _ = write!(
            body,
            r##"<g><rect x="{x:.3}" y="{y:.3}" width="{w:.3}" height="{h:.3}" fill="{fill}" stroke="#0f172a" stroke-width="0.4"><title>{label}: {count}</title></rect>"##,
            x = tile.x,
            y = tile.y,
            w = tile.width,
            h = tile.height,
            fill = color(idx),
            label = html_escape(&tile.label),
            count = tile.count,
        );
        // Labels only where they fit
        if tile.width > 12.0 && tile.height > 6.0 {
            let _ = write!(
                body,
                r#"<text x="{:.3}" y="{:.3}" class="tile-label">{} ({})</text>"#,
                tile.x + 1.5,
                tile.y + 4.5,
                html_escape(&tile.label),
                tile.count
            );
        }
        body.push_str("</g>");
    }

    format!(
        r#"<figure class="chart" id="{id}"><figcaption>{title}</figcaption><svg class="treemap" viewBox="0 0 {side} {side}" preserveAspectRatio="none" role="img">{body}</svg></figure>"#,
        id = id,
        title = html_escape(title),
        side = TREEMAP_SIDE,
        body = body,
    )
}

/// Tag cloud; each word is a filter button
pub fn word_cloud(id: &str, title: &str, words: &[CloudWord]) -> String {
    if words.is_empty() {
        return empty_chart(id, title);
    }

    let body: String = words
        .iter()
        .enumerate()
        .map(|(idx, word)| {
            format!(
                r#"<button class="cloud-word" data-filtro="{token}" style="font-size: {size:.1}px; color: {fill};" title="{count}">{label}</button>"#,
                token = html_escape(&word.token),
                size = word.font_size,
                fill = color(idx),
                count = word.count,
                label = html_escape(&word.label),
            )
        })
        .collect();

    format!(
        r#"<figure class="chart" id="{}"><figcaption>{}</figcaption><div class="cloud">{}</div></figure>"#,
        id,
        html_escape(title),
        body
    )
}

fn empty_chart(id: &str, title: &str) -> String {
    format!(
        r#"<figure class="chart" id="{}"><figcaption>{}</figcaption><p class="chart-empty">Sin datos</p></figure>"#,
        id,
        html_escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{bars, donut as donut_slices};

    #[test]
    fn test_vertical_bars_heights_proportional() {
        let data = bars(&[("DECRETO", 10), ("RESOLUCION", 5)]);
        let svg = vertical_bars("bar-tipo-norma", "Tipos", &data);

        assert!(svg.contains(r#"height="60.00""#));
        assert!(svg.contains(r#"height="30.00""#));
        assert!(svg.contains("DECRETO: 10"));
    }

    #[test]
    fn test_donut_offsets_follow_start() {
        let slices = donut_slices(&[("A", 1), ("B", 3)]);
        let svg = donut("donut", "Tipos", &slices);

        assert!(svg.contains(r#"stroke-dasharray="25.000 75.000" stroke-dashoffset="25.000""#));
        assert!(svg.contains(r#"stroke-dasharray="75.000 25.000" stroke-dashoffset="0.000""#));
        assert!(svg.contains("<span>75%</span>"));
    }

    #[test]
    fn test_empty_chart_placeholder() {
        assert!(treemap("t", "Categorías", &[]).contains("Sin datos"));
        assert!(word_cloud("w", "Nube", &[]).contains("Sin datos"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let data = bars(&[("<script>", 1)]);
        let html = horizontal_bars("top", "Top", &data);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
