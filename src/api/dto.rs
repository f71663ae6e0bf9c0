//! Data Transfer Objects
//!
//! Response shapes of the JSON endpoints that are not view-model types
//! already.

use serde::{Deserialize, Serialize};

use crate::page::CardModel;

/// Query string of `GET /api/v1/normas`
#[derive(Debug, Default, Deserialize)]
pub struct NormasQuery {
    /// Filter token; missing or `all` selects every entry
    #[serde(default)]
    pub etiqueta: Option<String>,
}

/// One entry with its normalized tag tokens
#[derive(Debug, Serialize)]
pub struct NormaDto {
    pub titulo: String,
    pub emisor: String,
    pub descripcion: String,
    pub resumen: String,
    pub link: Option<String>,
    pub etiquetas: Vec<String>,
}

impl From<&CardModel> for NormaDto {
    fn from(card: &CardModel) -> Self {
        Self {
            titulo: card.titulo.clone(),
            emisor: card.emisor.clone(),
            descripcion: card.descripcion.clone(),
            resumen: card.resumen.clone(),
            link: card.link.clone(),
            etiquetas: card.tags.tokens().to_vec(),
        }
    }
}

/// Filtered entry list
#[derive(Debug, Serialize)]
pub struct NormasResponse {
    /// Active filter token
    pub filtro: String,
    pub total: usize,
    pub visible: usize,
    pub normas: Vec<NormaDto>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub feed_source: String,
    pub uptime_seconds: u64,
    pub version: String,
}
