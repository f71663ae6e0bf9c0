//! Norma Card
//!
//! One entry of the day; hidden when it does not carry the active tag.

use boletin::page::CardModel;
use leptos::*;

use crate::state::GlobalState;

#[component]
pub fn NormaCard(card: CardModel) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let tags = card.tags.clone();
    let hidden = move || !state.is_visible(&tags);

    view! {
        <article
            class="norma-card glass-card"
            data-etiquetas=card.tags.data_attribute()
            prop:hidden=hidden
        >
            <div class="norma-header">
                <div class="norma-title-group">
                    <h4 class="norma-titulo">{card.titulo}</h4>
                    <p class="norma-emisor">{card.emisor}</p>
                </div>
                <div class="norma-actions">
                    {card.link.map(|href| view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener"
                            title="Ver en Boletín Oficial"
                            class="norma-action-btn norma-bo-btn"
                        >
                            "Ver BO"
                        </a>
                    })}
                </div>
            </div>
            <p class="norma-descripcion">{card.descripcion}</p>
            <div class="norma-resumen">{card.resumen}</div>
            <div class="norma-etiquetas-container">{card.tags.hashtags().join(" ")}</div>
        </article>
    }
}
