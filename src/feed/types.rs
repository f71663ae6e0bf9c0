//! Feed data types
//!
//! Wire model of the daily Boletín Oficial document. Every field is optional
//! on the wire, and an explicit `null` counts as missing, so a partial feed
//! still renders.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::error::FeedResult;

/// Ordered breakdown of counts keyed by a dimension value
pub type Desglose = BTreeMap<String, u64>;

/// Read a field that may be absent or `null` as its default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of the daily feed document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    /// Publication date as `YYYY-MM-DD`
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub datos_institucionales: DatosInstitucionales,
    /// Free-text synthesis of the day
    #[serde(default, deserialize_with = "null_as_default")]
    pub sintesis_del_dia: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estadisticas: Estadisticas,
    #[serde(default, deserialize_with = "null_as_default")]
    pub normas: Vec<Norma>,
}

/// Publisher branding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatosInstitucionales {
    #[serde(rename = "logoURL", default)]
    pub logo_url: Option<String>,
}

/// A single regulatory entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Norma {
    #[serde(default, deserialize_with = "null_as_default")]
    pub titulo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emisor: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descripcion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resumen: String,
    /// Link to the entry on the bulletin site
    #[serde(default)]
    pub url_bo: Option<String>,
    /// Raw topical tags, as written by the producer
    #[serde(default, deserialize_with = "null_as_default")]
    pub etiquetas: Vec<String>,
}

/// Precomputed aggregate counts for the day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estadisticas {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_normas: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_con_anexos: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_etiquetas_unicas: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desglose_tipos: Desglose,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desglose_etiquetas: Desglose,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desglose_emisores: Desglose,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desglose_categorias: Desglose,
}

impl Feed {
    /// Decode a feed from its JSON text
    pub fn from_json(text: &str) -> FeedResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a feed from raw bytes
    pub fn from_slice(bytes: &[u8]) -> FeedResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The publication date, ignoring blank values
    pub fn fecha(&self) -> Option<&str> {
        self.fecha
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }

    /// Logo URL, ignoring blank values
    pub fn logo_url(&self) -> Option<&str> {
        self.datos_institucionales
            .logo_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
    }
}

impl Norma {
    /// External link, ignoring blank values
    pub fn link(&self) -> Option<&str> {
        self.url_bo.as_deref().filter(|u| !u.trim().is_empty())
    }
}
