//! Translation catalog for user-facing strings.

use serde::{Deserialize, Serialize};

/// Translation keys used by the card and its container.
pub mod keys {
    pub const PLANT_CARD_CHANGE_IMAGE: &str = "plant_card_change_image";
    pub const PLANT_CARD_DELETE: &str = "plant_card_delete";
    pub const INVALID_FILE_TYPE_TITLE: &str = "invalid_file_type_title";
    pub const INVALID_FILE_TYPE_DESCRIPTION: &str = "invalid_file_type_description_image";
    pub const ERROR_READING_FILE_TITLE: &str = "error_reading_file_title";
    pub const ERROR_READING_FILE_DESCRIPTION: &str = "error_reading_file_description";
    pub const CATALOG_TITLE: &str = "plant_catalog_title";
    pub const CATALOG_EMPTY: &str = "plant_catalog_empty";
    pub const DELETE_CONFIRM_TITLE: &str = "delete_plant_confirm_title";
    pub const DELETE_CONFIRM_DESCRIPTION: &str = "delete_plant_confirm_description";
    pub const DELETE_CONFIRM_ACTION: &str = "delete_plant_confirm_action";
    pub const CANCEL: &str = "cancel";
    pub const PLANT_DELETED_TITLE: &str = "plant_deleted_title";
    pub const TOAST_DISMISS: &str = "toast_dismiss";
    pub const LANGUAGE_LABEL: &str = "language_label";
}

/// Lookup capability handed to components that render translated text.
pub trait Translate {
    fn t(&self, key: &str) -> String;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    /// Look up `key`, falling back to English and then to the key itself.
    pub fn translate(self, key: &str) -> String {
        lookup(self, key)
            .or_else(|| lookup(Self::En, key))
            .unwrap_or(key)
            .to_string()
    }
}

impl Translate for Language {
    fn t(&self, key: &str) -> String {
        self.translate(key)
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    use keys::*;

    let text = match (language, key) {
        (Language::En, PLANT_CARD_CHANGE_IMAGE) => "Change Image",
        (Language::En, PLANT_CARD_DELETE) => "Delete",
        (Language::En, INVALID_FILE_TYPE_TITLE) => "Invalid File Type",
        (Language::En, INVALID_FILE_TYPE_DESCRIPTION) => "Please select an image file.",
        (Language::En, ERROR_READING_FILE_TITLE) => "Error Reading File",
        (Language::En, ERROR_READING_FILE_DESCRIPTION) => {
            "There was an error reading the selected file. Please try again."
        }
        (Language::En, CATALOG_TITLE) => "Plant Catalog",
        (Language::En, CATALOG_EMPTY) => "No plants in the catalog yet.",
        (Language::En, DELETE_CONFIRM_TITLE) => "Delete this plant?",
        (Language::En, DELETE_CONFIRM_DESCRIPTION) => {
            "This removes the plant from the catalog. This action cannot be undone."
        }
        (Language::En, DELETE_CONFIRM_ACTION) => "Delete",
        (Language::En, CANCEL) => "Cancel",
        (Language::En, PLANT_DELETED_TITLE) => "Plant deleted",
        (Language::En, TOAST_DISMISS) => "Dismiss",
        (Language::En, LANGUAGE_LABEL) => "Language",

        (Language::Es, PLANT_CARD_CHANGE_IMAGE) => "Cambiar imagen",
        (Language::Es, PLANT_CARD_DELETE) => "Eliminar",
        (Language::Es, INVALID_FILE_TYPE_TITLE) => "Tipo de archivo no válido",
        (Language::Es, INVALID_FILE_TYPE_DESCRIPTION) => "Por favor, selecciona un archivo de imagen.",
        (Language::Es, ERROR_READING_FILE_TITLE) => "Error al leer el archivo",
        (Language::Es, ERROR_READING_FILE_DESCRIPTION) => {
            "Hubo un error al leer el archivo seleccionado. Inténtalo de nuevo."
        }
        (Language::Es, CATALOG_TITLE) => "Catálogo de plantas",
        (Language::Es, CATALOG_EMPTY) => "Todavía no hay plantas en el catálogo.",
        (Language::Es, DELETE_CONFIRM_TITLE) => "¿Eliminar esta planta?",
        (Language::Es, DELETE_CONFIRM_DESCRIPTION) => {
            "La planta se eliminará del catálogo. Esta acción no se puede deshacer."
        }
        (Language::Es, DELETE_CONFIRM_ACTION) => "Eliminar",
        (Language::Es, CANCEL) => "Cancelar",
        (Language::Es, PLANT_DELETED_TITLE) => "Planta eliminada",
        (Language::Es, LANGUAGE_LABEL) => "Idioma",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_card_labels() {
        assert_eq!(Language::En.t(keys::PLANT_CARD_CHANGE_IMAGE), "Change Image");
        assert_eq!(Language::Es.t(keys::PLANT_CARD_DELETE), "Eliminar");
    }

    #[test]
    fn missing_translation_falls_back_to_english_then_key() {
        assert_eq!(Language::Es.t(keys::TOAST_DISMISS), "Dismiss");
        assert_eq!(Language::Es.t("no_such_key"), "no_such_key");
    }

    #[test]
    fn parses_language_codes() {
        assert_eq!(Language::from_code(" ES "), Some(Language::Es));
        assert_eq!(Language::from_code("fr"), None);
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }
}
