//! Page templates

use std::fmt::Write;

use super::assets::{FILTER_ICON, INLINE_CSS, INLINE_JS};
use super::charts;
use super::html_escape;
use crate::dashboard::Dashboard;
use crate::filter::ALL_TOKEN;
use crate::page::{CardModel, HeaderModel, PageModel, EMPTY_LIST_MESSAGE};
use crate::stats::StatsPanel;
use crate::taxonomy::FilterGroup;

/// Render the full page
pub fn render_page(page: &PageModel) -> String {
    shell(
        &page.header.title,
        &render_header(&page.header, true),
        &format!(
            r#"<div id="main-view" class="view active">{sintesis}{stats}{filtros}<hr class="separator"><section id="normas-body">{cards}</section></div><div id="dashboard-view" class="view">{dashboard}</div>"#,
            sintesis = render_sintesis(&page.sintesis),
            stats = render_stats_panel(&page.stats),
            filtros = render_filters(&page.filters),
            cards = render_cards(&page.cards),
            dashboard = render_dashboard(&page.dashboard),
        ),
    )
}

/// Render the page shell with only the load-failure message as content.
///
/// No cards, filters or charts are emitted.
pub fn render_error_page(header: &HeaderModel, message: &str) -> String {
    shell(
        &header.title,
        &render_header(header, false),
        &format!(
            r#"<div id="main-view" class="view active"><section id="normas-body"><p class="loading-message error">{}</p></section></div>"#,
            html_escape(message)
        ),
    )
}

fn shell(title: &str, header: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    {header}
    <main id="page-container">{content}</main>
    <button id="scroll-to-top" aria-label="Volver arriba">&uarr;</button>
    <script>{js}</script>
</body>
</html>"#,
        title = html_escape(title),
        css = INLINE_CSS,
        header = header,
        content = content,
        js = INLINE_JS,
    )
}

fn render_header(header: &HeaderModel, with_nav: bool) -> String {
    let logo = header
        .logo_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<img src="{}" alt="Logo" class="logo-img">"#,
                html_escape(url)
            )
        })
        .unwrap_or_default();

    let nav = if with_nav {
        r#"<nav id="main-nav"><button class="nav-btn active" data-view-target="main">Normas</button><button class="nav-btn" data-view-target="dashboard">Dashboard</button></nav>"#
    } else {
        ""
    };

    format!(
        r#"<header id="page-header"><div class="header-logo">{logo}</div><h1 id="app-title">{title}</h1><time id="header-date" datetime="{iso}">{fecha}</time>{nav}</header>"#,
        logo = logo,
        title = html_escape(&header.title),
        iso = html_escape(&header.fecha_iso),
        fecha = html_escape(&header.fecha),
        nav = nav,
    )
}

fn render_sintesis(sintesis: &str) -> String {
    if sintesis.trim().is_empty() {
        return String::new();
    }
    format!(
        r#"<section id="sintesis" class="glass-card"><h2>Síntesis del día</h2><p id="sintesis-texto">{}</p></section>"#,
        html_escape(sintesis)
    )
}

fn render_stats_panel(panel: &StatsPanel) -> String {
    let rows: String = panel
        .rows
        .iter()
        .map(|row| {
            format!(
                r#"<div class="stat-row"><div class="stat-row-label">{label} <span>({count})</span></div><div class="stat-row-value-bar"><div class="bar-container"><div class="bar" style="width: {width}%;"></div></div></div></div>"#,
                label = html_escape(&row.label),
                count = row.count,
                width = row.width_percent,
            )
        })
        .collect();

    format!(
        r#"<aside id="stats-panel" class="glass-card"><div class="stats-header"><span class="stats-total-label">Total Normas</span><span class="stats-total-value">{}</span></div><div class="stats-body">{}</div></aside>"#,
        panel.total_normas, rows
    )
}

fn render_filters(groups: &[FilterGroup]) -> String {
    let mut body = String::new();
    for group in groups {
        let buttons: String = group
            .buttons
            .iter()
            .map(|b| {
                format!(
                    r#"<button class="etiqueta-btn" data-filtro="{token}" data-label="{label}">{label} <span class="etiqueta-count">{count}</span></button>"#,
                    token = html_escape(&b.token),
                    label = html_escape(&b.label),
                    count = b.count,
                )
            })
            .collect();
        let _ = write!(
            body,
            r#"<details class="filtro-grupo" data-grupo="{slug}"><summary>{name} <span class="grupo-total">{total}</span></summary><div class="etiquetas-container">{buttons}</div></details>"#,
            slug = html_escape(&group.slug),
            name = html_escape(&group.name),
            total = group.total,
            buttons = buttons,
        );
    }

    format!(
        r#"<section id="filtros-section"><div class="filtros-header"><h2>{icon} Filtros</h2><button class="etiqueta-btn" data-filtro="{all}">Limpiar</button></div><div id="filtro-activo" class="filtro-activo" hidden>Filtrando por <strong></strong> <span class="filtro-activo-count"></span></div><div class="filtros-grupos">{body}</div></section>"#,
        icon = FILTER_ICON,
        all = ALL_TOKEN,
        body = body,
    )
}

fn render_cards(cards: &[CardModel]) -> String {
    if cards.is_empty() {
        return format!(r#"<p class="loading-message">{}</p>"#, EMPTY_LIST_MESSAGE);
    }
    cards.iter().map(render_card).collect()
}

fn render_card(card: &CardModel) -> String {
    let link = card
        .link
        .as_deref()
        .map(|url| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener" title="Ver en Boletín Oficial" class="norma-action-btn norma-bo-btn">Ver BO</a>"#,
                html_escape(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="norma-card glass-card" data-etiquetas="{tokens}"><div class="norma-header"><div class="norma-title-group"><h4 class="norma-titulo">{titulo}</h4><p class="norma-emisor">{emisor}</p></div><div class="norma-actions">{link}</div></div><p class="norma-descripcion">{descripcion}</p><div class="norma-resumen">{resumen}</div><div class="norma-etiquetas-container">{hashtags}</div></article>"#,
        tokens = html_escape(&card.tags.data_attribute()),
        titulo = html_escape(&card.titulo),
        emisor = html_escape(&card.emisor),
        link = link,
        descripcion = html_escape(&card.descripcion),
        resumen = html_escape(&card.resumen),
        hashtags = html_escape(&card.tags.hashtags().join(" ")),
    )
}

fn render_dashboard(dashboard: &Dashboard) -> String {
    let kpis: String = dashboard.kpis.iter().map(charts::kpi_tile).collect();

    format!(
        r#"<section class="kpis">{kpis}</section><section class="charts-grid">{gauge}{tipos}{donut}{etiquetas}{emisores}{treemap}{cloud}</section>"#,
        kpis = kpis,
        gauge = charts::gauge(&dashboard.gauge),
        tipos = charts::vertical_bars(
            "bar-tipo-norma",
            "Desglose por Tipo de Norma",
            &dashboard.tipo_bars
        ),
        donut = charts::donut(
            "donut-tipo-norma",
            "Distribución por Tipo de Norma",
            &dashboard.tipo_donut
        ),
        etiquetas = charts::horizontal_bars(
            "bar-top-etiquetas",
            "Top 10 Etiquetas",
            &dashboard.top_etiquetas
        ),
        emisores = charts::horizontal_bars(
            "bar-top-emisores",
            "Top 15 Emisores",
            &dashboard.top_emisores
        ),
        treemap = charts::treemap(
            "treemap-categorias",
            "Distribución por Categorías",
            &dashboard.treemap
        ),
        cloud = charts::word_cloud(
            "wordcloud-etiquetas",
            "Nube de Etiquetas",
            &dashboard.word_cloud
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Feed, LOAD_ERROR_MESSAGE};
    use crate::page::DEFAULT_TITLE;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn page(json: &str) -> PageModel {
        PageModel::from_feed(&Feed::from_json(json).unwrap(), DEFAULT_TITLE, today())
    }

    #[test]
    fn test_cards_carry_normalized_tags() {
        let html = render_page(&page(
            r##"{ "normas": [
                { "titulo": "Decreto 1/2025", "etiquetas": ["Salud Pública", "#Empleo"] },
                { "titulo": "Resolución 2/2025", "etiquetas": ["Empleo"] }
            ] }"##,
        ));

        assert_eq!(html.matches(r#"class="norma-card"#).count(), 2);
        assert!(html.contains(r#"data-etiquetas="salud-publica empleo""#));
        assert!(html.contains("#salud-publica #empleo"));
    }

    #[test]
    fn test_type_bars_are_proportional() {
        let html = render_page(&page(
            r#"{ "estadisticas": { "totalNormas": 15, "desgloseTipos": { "DECRETO": 10, "RESOLUCION": 5 } } }"#,
        ));

        assert!(html.contains(r#"Decreto <span>(10)</span></div><div class="stat-row-value-bar"><div class="bar-container"><div class="bar" style="width: 100%;">"#));
        assert!(html.contains(r#"Resolucion <span>(5)</span></div><div class="stat-row-value-bar"><div class="bar-container"><div class="bar" style="width: 50%;">"#));
    }

    #[test]
    fn test_filter_groups_rendered_as_accordion() {
        let html = render_page(&page(
            r#"{ "estadisticas": { "desgloseEtiquetas": { "Salud": 3, "Impuestos": 1 } } }"#,
        ));

        assert!(html.contains(r#"<details class="filtro-grupo" data-grupo="salud">"#));
        assert!(html.contains(r#"data-filtro="impuestos" data-label="Impuestos""#));
        assert!(html.contains(r#"data-filtro="all">Limpiar"#));
    }

    #[test]
    fn test_empty_feed_shows_empty_message() {
        let html = render_page(&page("{}"));
        assert!(html.contains(EMPTY_LIST_MESSAGE));
        assert!(!html.contains(r#"class="norma-card"#));
    }

    #[test]
    fn test_error_page_has_message_and_no_cards() {
        let header = HeaderModel::from_feed(&Feed::default(), DEFAULT_TITLE, today());
        let html = render_error_page(&header, LOAD_ERROR_MESSAGE);

        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert!(!html.contains(r#"class="norma-card"#));
        assert!(!html.contains(r#"id="filtros-section""#));
        assert!(!html.contains(r#"id="dashboard-view""#));
    }

    #[test]
    fn test_feed_text_is_escaped() {
        let html = render_page(&page(
            r#"{ "sintesisDelDia": "<b>hoy</b>", "normas": [ { "titulo": "A & B" } ] }"#,
        ));
        assert!(html.contains("&lt;b&gt;hoy&lt;/b&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn test_header_date_fallback() {
        let html = render_page(&page("{}"));
        assert!(html.contains(r#"<time id="header-date" datetime="2026-10-19">19 oct 2026</time>"#));
    }
}
