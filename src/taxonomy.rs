//! Filter taxonomy
//!
//! Groups the day's tag breakdown into thematic categories, which the UI
//! renders as an accordion of filter buttons.
//!
//! A token belongs to the first category in [`CATEGORIES`] that has a
//! keyword prefixing one of the token's hyphen-separated segments
//! (`salud-publica` → "Salud", `impuestos-internos` → "Economía y Finanzas").
//! Unmatched tokens land in [`OTHER_CATEGORY`].

use serde::Serialize;
use std::collections::HashMap;

use crate::feed::Desglose;
use crate::filter::is_selectable;
use crate::tags::normalize_tag;

/// Name of the catch-all group, always listed last
pub const OTHER_CATEGORY: &str = "Otros";

/// Category names and the token prefixes that select them, in display order
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Economía y Finanzas",
        &[
            "economi", "finanz", "impuest", "tribut", "fiscal", "comerci", "presupuest", "deuda",
            "banc", "mercado", "aduan", "export", "import", "inversion", "moned", "divisa",
            "precio", "arancel",
        ],
    ),
    (
        "Trabajo y Empleo",
        &[
            "empleo", "trabaj", "laboral", "salari", "convenio", "sindic", "paritari",
            "jubilac", "prevision",
        ],
    ),
    (
        "Salud",
        &["salud", "medic", "hospital", "sanitari", "anmat", "epidemi", "vacun", "farmac"],
    ),
    (
        "Educación y Cultura",
        &["educa", "cultur", "universid", "cienci", "beca", "escuel", "patrimoni", "deporte"],
    ),
    (
        "Justicia y Seguridad",
        &[
            "justicia", "segurid", "penal", "judicial", "polic", "defensa", "fuerza",
            "penitenc", "derechos",
        ],
    ),
    (
        "Ambiente y Energía",
        &[
            "ambient", "energ", "miner", "hidrocarbur", "agua", "electric", "gas", "clima",
            "forestal", "parques",
        ],
    ),
    (
        "Infraestructura y Transporte",
        &[
            "transport", "obra", "infraestruct", "vivienda", "vial", "telecomunic", "ferro",
            "aviac", "puerto",
        ],
    ),
    (
        "Agro y Producción",
        &[
            "agro", "agricult", "ganad", "pesca", "industri", "produc", "senasa", "pyme",
        ],
    ),
    (
        "Administración Pública",
        &[
            "designac", "nombramient", "administrac", "funcionari", "personal", "organism",
            "estructura", "licitac", "contratac", "concurso",
        ],
    ),
    (
        "Desarrollo Social",
        &[
            "social", "desarrollo", "discapacid", "genero", "ninez", "asistencia", "familia",
            "migrac",
        ],
    ),
];

/// One tag filter button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    /// Tag as written by the producer
    pub label: String,
    /// Normalized token used for matching
    pub token: String,
    /// Number of entries carrying the tag
    pub count: u64,
}

/// A category of filter buttons (one accordion section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterGroup {
    pub name: String,
    /// Token-safe identifier of the group
    pub slug: String,
    /// Sum of the buttons' counts
    pub total: u64,
    pub buttons: Vec<FilterButton>,
}

/// Category a normalized token belongs to
pub fn categorize(token: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(_, keywords)| {
            token
                .split('-')
                .any(|segment| keywords.iter().any(|k| segment.starts_with(k)))
        })
        .map(|(name, _)| *name)
        .unwrap_or(OTHER_CATEGORY)
}

/// Turn the tag breakdown into buttons, merging tags whose tokens collide.
///
/// Colliding tags sum their counts and keep the label of the larger count.
/// Tags that normalize to nothing or to the reserved `all` are dropped.
pub fn filter_buttons(desglose: &Desglose) -> Vec<FilterButton> {
    let mut buttons: Vec<FilterButton> = Vec::with_capacity(desglose.len());
    let mut by_token: HashMap<String, (usize, u64)> = HashMap::new();

    for (label, &count) in desglose {
        let token = normalize_tag(label);
        if !is_selectable(&token) {
            continue;
        }
        match by_token.get_mut(&token) {
            Some((idx, best)) => {
                let button = &mut buttons[*idx];
                button.count += count;
                if count > *best {
                    *best = count;
                    button.label = label.clone();
                }
            }
            None => {
                by_token.insert(token.clone(), (buttons.len(), count));
                buttons.push(FilterButton {
                    label: label.clone(),
                    token,
                    count,
                });
            }
        }
    }

    buttons.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    buttons
}

/// Group the tag breakdown into accordion sections
pub fn group_filters(desglose: &Desglose) -> Vec<FilterGroup> {
    let buttons = filter_buttons(desglose);

    let names = CATEGORIES
        .iter()
        .map(|(name, _)| *name)
        .chain(std::iter::once(OTHER_CATEGORY));

    names
        .filter_map(|name| {
            let members: Vec<FilterButton> = buttons
                .iter()
                .filter(|b| categorize(&b.token) == name)
                .cloned()
                .collect();
            if members.is_empty() {
                return None;
            }
            Some(FilterGroup {
                name: name.to_string(),
                slug: normalize_tag(name),
                total: members.iter().map(|b| b.count).sum(),
                buttons: members,
            })
        })
        .collect()
}

/// Label of the button carrying `token`, if any
pub fn label_for<'a>(groups: &'a [FilterGroup], token: &str) -> Option<&'a str> {
    groups
        .iter()
        .flat_map(|g| g.buttons.iter())
        .find(|b| b.token == token)
        .map(|b| b.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desglose(entries: &[(&str, u64)]) -> Desglose {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_categorize() {
        assert_eq!(categorize("salud"), "Salud");
        assert_eq!(categorize("salud-publica"), "Salud");
        assert_eq!(categorize("impuestos-internos"), "Economía y Finanzas");
        assert_eq!(categorize("convenios-colectivos"), "Trabajo y Empleo");
        assert_eq!(categorize("designaciones"), "Administración Pública");
        assert_eq!(categorize("astronomia"), OTHER_CATEGORY);
    }

    #[test]
    fn test_first_matching_category_wins() {
        // "comercio" (Economía) precedes "empleo" (Trabajo) in table order
        assert_eq!(categorize("empleo-comercio"), "Economía y Finanzas");
    }

    #[test]
    fn test_buttons_sorted_by_count_then_label() {
        let buttons = filter_buttons(&desglose(&[("Salud", 3), ("Empleo", 5), ("Ambiente", 3)]));
        let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Empleo", "Ambiente", "Salud"]);
    }

    #[test]
    fn test_colliding_tokens_merge() {
        let buttons = filter_buttons(&desglose(&[("#salud", 1), ("Salud", 4), ("   ", 2)]));

        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].token, "salud");
        assert_eq!(buttons[0].label, "Salud");
        assert_eq!(buttons[0].count, 5);
    }

    #[test]
    fn test_reserved_all_token_gets_no_button() {
        let buttons = filter_buttons(&desglose(&[("All", 9), (" ALL ", 1), ("Salud", 2)]));

        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].token, "salud");
        assert!(group_filters(&desglose(&[("All", 9)])).is_empty());
    }

    #[test]
    fn test_groups_follow_table_order_with_other_last() {
        let groups = group_filters(&desglose(&[
            ("Astronomía", 9),
            ("Salud", 2),
            ("Impuestos", 1),
            ("Vacunas", 4),
        ]));

        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Economía y Finanzas", "Salud", OTHER_CATEGORY]);

        let salud = &groups[1];
        assert_eq!(salud.slug, "salud");
        assert_eq!(salud.total, 6);
        assert_eq!(salud.buttons[0].label, "Vacunas");
    }

    #[test]
    fn test_label_lookup() {
        let groups = group_filters(&desglose(&[("Salud Pública", 2)]));
        assert_eq!(label_for(&groups, "salud-publica"), Some("Salud Pública"));
        assert_eq!(label_for(&groups, "empleo"), None);
    }
}
