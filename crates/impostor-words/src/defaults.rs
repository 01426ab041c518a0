//! Built-in categories used when no collection has been stored yet.

use crate::Category;

const PRESETS: &[(&str, &str, &[&str])] = &[
    (
        "frutas",
        "Frutas",
        &[
            "manzana", "banana", "naranja", "pera", "frutilla",
            "uva", "sandía", "melón", "kiwi", "ciruela",
            "durazno", "mango", "papaya", "ananá", "cereza",
            "arándano", "frambuesa", "mora", "pomelo", "limón",
            "mandarina", "damasco", "higo", "granada", "maracuyá",
            "lichi", "guayaba", "tuna", "coco", "carambola",
            "caqui", "membrillo", "tamarindo", "bergamota", "kumquat",
            "níspero", "grosella", "arándano rojo", "arándano negro", "grosella negra",
            "melocotón", "plátano", "kiwano", "physalis", "pitaya",
            "naranja sanguina", "pomelo rosado", "mamey", "moras blancas", "yacaratiá",
        ],
    ),
    (
        "cocina",
        "Cocina",
        &[
            "sartén", "cuchillo", "olla", "hervir", "horno",
            "sal", "aceite", "receta", "tostadora", "espátula",
            "cucharón", "tabla", "pelapapas", "batidor", "colador",
            "microondas", "licuadora", "cucharita", "tenedor", "plato",
            "cacerola", "soplete", "cuchara", "vaso", "taza",
            "jarra", "cuchillo chef", "mortero", "rodillo", "balanza",
            "rallador", "mandolina", "pinza", "fuente", "rejilla",
            "batidora", "freidora", "plancha", "molde", "termómetro",
            "film", "aluminio", "servilleta", "individual", "posapavas",
            "abrelatas", "sifón", "pimentero", "salero", "paño",
        ],
    ),
    (
        "lugares",
        "Lugares",
        &[
            "biblioteca", "aeropuerto", "playa", "montaña", "hospital",
            "museo", "estadio", "hotel", "teatro", "oficina",
            "plaza", "parque", "restaurante", "bar", "carnicería",
            "panadería", "verdulería", "ferretería", "escuela", "universidad",
            "gimnasio", "piscina", "estación", "subte", "colectora",
            "autopista", "terminal", "zoológico", "acuario", "planetario",
            "banco", "farmacia", "comisaría", "municipalidad", "embajada",
            "consulado", "estudio", "galería", "aula", "cancha",
            "patio", "terraza", "sótano", "ático", "cabaña",
            "hostel", "balneario", "mirador", "muelle", "puente",
        ],
    ),
];

/// The built-in categories, 50 words each.
pub fn default_categories() -> Vec<Category> {
    PRESETS
        .iter()
        .map(|(id, name, words)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            words: words.iter().map(|w| (*w).to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_categories_have_fifty_words_each() {
        let categories = default_categories();
        assert_eq!(categories.len(), 3);
        for c in &categories {
            assert_eq!(c.words.len(), 50, "category {}", c.id);
        }
    }

    #[test]
    fn test_default_category_ids_are_unique() {
        let categories = default_categories();
        let ids: HashSet<_> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), categories.len());
    }
}
