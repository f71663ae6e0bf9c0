//! Inline stylesheet and script of the static page

/// Funnel icon shown next to the filter heading
pub const FILTER_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"></polygon></svg>"##;

pub const INLINE_CSS: &str = r##"
:root { --bg: #0f172a; --card: rgba(30, 41, 59, 0.7); --text: #e2e8f0; --muted: #94a3b8; --accent: #22d3ee; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: var(--bg); color: var(--text); }
#page-header { position: sticky; top: 0; z-index: 10; display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.5rem; background: rgba(15, 23, 42, 0.9); backdrop-filter: blur(8px); border-bottom: 1px solid #1e293b; }
#page-header h1 { font-size: 1.1rem; margin: 0; flex: 1; }
#header-date { color: var(--muted); font-size: 0.9rem; }
.logo-img { height: 32px; }
#main-nav { display: flex; gap: 0.25rem; }
.nav-btn, .etiqueta-btn, .cloud-word { cursor: pointer; border: 1px solid #334155; background: transparent; color: var(--text); border-radius: 999px; padding: 0.3rem 0.8rem; font: inherit; }
.nav-btn.active, .etiqueta-btn.active { background: var(--accent); color: var(--bg); border-color: var(--accent); }
#page-container { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }
.view { display: none; }
.view.active { display: block; }
.glass-card { background: var(--card); border: 1px solid #1e293b; border-radius: 12px; padding: 1rem 1.25rem; margin-bottom: 1rem; }
.stats-header { display: flex; justify-content: space-between; font-weight: 600; margin-bottom: 0.75rem; }
.stats-total-value { color: var(--accent); font-size: 1.5rem; }
.stat-row { display: grid; grid-template-columns: 14rem 1fr; gap: 0.5rem; align-items: center; margin: 0.25rem 0; font-size: 0.9rem; }
.stat-row-label span { color: var(--muted); }
.bar-container { background: #1e293b; border-radius: 4px; height: 10px; overflow: hidden; }
.bar { background: var(--accent); height: 100%; border-radius: 4px; }
.filtros-header { display: flex; justify-content: space-between; align-items: center; }
.filtros-header h2 { display: flex; gap: 0.5rem; align-items: center; font-size: 1.1rem; }
.filtro-activo { margin: 0.5rem 0; color: var(--muted); }
.filtro-activo strong { color: var(--accent); }
.filtro-grupo { border-top: 1px solid #1e293b; padding: 0.5rem 0; }
.filtro-grupo summary { cursor: pointer; font-weight: 600; }
.grupo-total, .etiqueta-count { color: var(--muted); font-size: 0.8em; }
.etiquetas-container { display: flex; flex-wrap: wrap; gap: 0.4rem; margin-top: 0.5rem; }
.separator { border: 0; border-top: 1px solid #334155; margin: 1.5rem 0; }
.norma-card[hidden] { display: none; }
.norma-header { display: flex; justify-content: space-between; gap: 1rem; }
.norma-titulo { margin: 0; font-size: 1rem; }
.norma-emisor { margin: 0.25rem 0 0; color: var(--muted); font-size: 0.85rem; }
.norma-bo-btn { color: var(--accent); text-decoration: none; white-space: nowrap; }
.norma-resumen { font-size: 0.9rem; color: #cbd5e1; }
.norma-etiquetas-container { margin-top: 0.5rem; color: var(--accent); font-size: 0.8rem; }
.loading-message { text-align: center; color: var(--muted); padding: 3rem 0; }
.loading-message.error { color: #f87171; }
.kpis { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.kpi { text-align: center; }
.kpi-value { font-size: 2rem; font-weight: 700; }
.kpi-label { color: var(--muted); }
.ring { width: 96px; height: 96px; transform: none; }
.ring-text { fill: var(--text); font-size: 7px; }
.charts-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1rem; }
.chart { margin: 0; background: var(--card); border-radius: 12px; padding: 1rem; }
.chart figcaption { font-weight: 600; margin-bottom: 0.5rem; text-align: center; }
.chart svg { width: 100%; max-height: 320px; }
.donut { max-width: 240px; display: block; margin: 0 auto; }
.bar-value { fill: var(--text); font-size: 3px; }
.tile-label { fill: #0f172a; font-size: 3.5px; }
.legend { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 0.5rem; font-size: 0.8rem; }
.swatch { display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: 4px; }
.hbar-row { display: grid; grid-template-columns: 12rem 1fr 2.5rem; gap: 0.5rem; align-items: center; font-size: 0.8rem; margin: 0.2rem 0; }
.hbar-count { text-align: right; }
.cloud { display: flex; flex-wrap: wrap; gap: 0.25rem 0.75rem; justify-content: center; align-items: center; }
.cloud-word { border: 0; padding: 0; line-height: 1.1; }
.chart-empty { color: var(--muted); text-align: center; }
#scroll-to-top { position: fixed; right: 1.5rem; bottom: 1.5rem; opacity: 0; pointer-events: none; transition: opacity 0.2s; border-radius: 50%; width: 2.5rem; height: 2.5rem; border: 0; background: var(--accent); color: var(--bg); cursor: pointer; }
#scroll-to-top.visible { opacity: 1; pointer-events: auto; }
"##;

pub const INLINE_JS: &str = r##"
(function () {
  var filtros = document.getElementById('filtros-section');
  var indicator = document.getElementById('filtro-activo');
  var scrollTop = document.getElementById('scroll-to-top');

  function showView(name) {
    document.querySelectorAll('.view').forEach(function (v) {
      v.classList.toggle('active', v.id === name + '-view');
    });
    document.querySelectorAll('.nav-btn').forEach(function (b) {
      b.classList.toggle('active', b.dataset.viewTarget === name);
    });
  }

  function applyFilter(filtro) {
    var visible = 0;
    var cards = document.querySelectorAll('.norma-card');
    document.querySelectorAll('.etiqueta-btn').forEach(function (b) {
      b.classList.toggle('active', filtro !== 'all' && b.dataset.filtro === filtro);
    });
    cards.forEach(function (card) {
      var tags = (card.dataset.etiquetas || '').split(' ').filter(Boolean);
      var show = filtro === 'all' || tags.indexOf(filtro) !== -1;
      card.hidden = !show;
      if (show) { visible++; }
    });
    if (indicator) {
      if (filtro === 'all') {
        indicator.hidden = true;
      } else {
        var btn = document.querySelector('.etiqueta-btn[data-filtro="' + filtro + '"]');
        indicator.querySelector('strong').textContent = btn ? btn.dataset.label : filtro;
        indicator.querySelector('.filtro-activo-count').textContent = '(' + visible + ' de ' + cards.length + ')';
        indicator.hidden = false;
      }
    }
  }

  document.addEventListener('click', function (e) {
    var nav = e.target.closest('[data-view-target]');
    if (nav) { showView(nav.dataset.viewTarget); return; }

    var target = e.target.closest('[data-filtro]');
    if (!target) { return; }
    applyFilter(target.dataset.filtro);
    showView('main');

    var separator = document.querySelector('.separator');
    if (separator) {
      var header = document.getElementById('page-header');
      var offset = header ? header.offsetHeight : 0;
      var top = separator.getBoundingClientRect().top + window.scrollY - offset - 16;
      window.scrollTo({ top: top, behavior: 'smooth' });
    }
  });

  document.querySelectorAll('.filtro-grupo').forEach(function (group) {
    group.addEventListener('toggle', function () {
      if (!group.open) { return; }
      document.querySelectorAll('.filtro-grupo').forEach(function (other) {
        if (other !== group) { other.open = false; }
      });
    });
  });

  if (scrollTop) {
    scrollTop.addEventListener('click', function () {
      window.scrollTo({ top: 0, behavior: 'smooth' });
    });
    window.addEventListener('scroll', function () {
      var limit = filtros ? filtros.offsetTop + filtros.offsetHeight : 400;
      scrollTop.classList.toggle('visible', window.scrollY > limit);
    }, { passive: true });
  }
})();
"##;
