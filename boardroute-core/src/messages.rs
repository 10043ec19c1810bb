//! User-visible text, per [`Locale`].

use crate::types::Locale;

/// The strings the bootstrap shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub loading_design: &'static str,
    pub design_file: &'static str,
    pub not_found: &'static str,
    pub nothing_selected: &'static str,
    pub load_rejected: &'static str,
    pub confirm_import_rules: &'static str,
    pub choose_design: &'static str,
}

const ENGLISH: Catalog = Catalog {
    loading_design: "loading design",
    design_file: "design file",
    not_found: "not found",
    nothing_selected: "no design file selected",
    load_rejected: "could not be loaded",
    confirm_import_rules: "Import the saved rules for this design?",
    choose_design: "Select a design file (number or path, empty line cancels):",
};

const GERMAN: Catalog = Catalog {
    loading_design: "lade Design",
    design_file: "Designdatei",
    not_found: "nicht gefunden",
    nothing_selected: "keine Designdatei ausgewählt",
    load_rejected: "konnte nicht geladen werden",
    confirm_import_rules: "Gespeicherte Regeln für dieses Design importieren?",
    choose_design: "Designdatei wählen (Nummer oder Pfad, leere Zeile bricht ab):",
};

impl Catalog {
    pub fn for_locale(locale: Locale) -> &'static Catalog {
        match locale {
            Locale::Default => &ENGLISH,
            Locale::Alternate => &GERMAN,
        }
    }

    /// "loading design <name>"
    pub fn loading(&self, name: &str) -> String {
        format!("{} {name}", self.loading_design)
    }

    /// "design file <path> not found"
    pub fn missing(&self, path: &str) -> String {
        format!("{} {path} {}", self.design_file, self.not_found)
    }

    /// "design file <name> could not be loaded"
    pub fn rejected(&self, name: &str) -> String {
        format!("{} {name} {}", self.design_file, self.load_rejected)
    }
}
