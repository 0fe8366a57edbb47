use salon_core::models::style::{CATEGORY_CHILDREN, CATEGORY_MEN, CATEGORY_WOMEN};

/// Fixed style catalog inserted into an empty `styles` table, in id order.
pub const STYLE_CATALOG: &[(&str, &str)] = &[
    ("Pixie", CATEGORY_WOMEN),
    ("Bob corto", CATEGORY_WOMEN),
    ("Garçon", CATEGORY_WOMEN),
    ("Bob largo (lob)", CATEGORY_WOMEN),
    ("Shag", CATEGORY_WOMEN),
    ("Midi recto", CATEGORY_WOMEN),
    ("Wolf cut", CATEGORY_WOMEN),
    ("Corte en capas medias", CATEGORY_WOMEN),
    ("Recto clásico", CATEGORY_WOMEN),
    ("En capas largas", CATEGORY_WOMEN),
    ("V-cut", CATEGORY_WOMEN),
    ("U-cut", CATEGORY_WOMEN),
    ("Corte desfilado", CATEGORY_WOMEN),
    ("Flequillo recto", CATEGORY_WOMEN),
    ("Flequillo de lado", CATEGORY_WOMEN),
    ("Flequillo cortina", CATEGORY_WOMEN),
    ("Baby bangs", CATEGORY_WOMEN),
    ("Asimétrico", CATEGORY_WOMEN),
    ("Corte point cut", CATEGORY_WOMEN),
    ("Buzz cut", CATEGORY_MEN),
    ("Undercut", CATEGORY_MEN),
    ("Mullet", CATEGORY_MEN),
    ("Corte a navaja", CATEGORY_MEN),
    ("Corte de precisión", CATEGORY_MEN),
    ("Fade bajo", CATEGORY_MEN),
    ("Fade medio", CATEGORY_MEN),
    ("Fade alto", CATEGORY_MEN),
    ("Pompadour", CATEGORY_MEN),
    ("Crew cut", CATEGORY_MEN),
    ("Corte clásico", CATEGORY_MEN),
    ("Corte militar", CATEGORY_MEN),
    ("Side part", CATEGORY_MEN),
    ("French crop", CATEGORY_MEN),
    ("Corte escolar", CATEGORY_CHILDREN),
    ("Corte en capas", CATEGORY_CHILDREN),
    ("Peinado con raya lateral", CATEGORY_CHILDREN),
    ("Degradado infantil", CATEGORY_CHILDREN),
    ("Corte clásico infantil", CATEGORY_CHILDREN),
    ("Spiky hair", CATEGORY_CHILDREN),
];
