//! Translated labels for the four action buttons.
//!
//! A [`Langpack`] maps locale tags to one label per [`ActionLabel`]. Lookups
//! for a tag without an entry fall back to its language (`fr-CA` to `fr`),
//! then to [`DEFAULT_LOCALE`].
//!
//! ```
//! use horizon_wizard::{ActionLabel, Langpack};
//!
//! let mut langpack = Langpack::new();
//! langpack.add_locale("is", &["Ljúka", "Hætta við", "Til baka", "Áfram"]).unwrap();
//! langpack.set_locale("is-IS");
//!
//! assert_eq!(langpack.label(ActionLabel::Previous), "Til baka");
//! ```

use std::collections::HashMap;
use std::fmt;

use horizon_wizard_core::logging::targets;

use crate::error::LocaleRegistrationError;

/// Locale used when nothing better matches.
pub const DEFAULT_LOCALE: &str = "en";

/// The action buttons, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionLabel {
    /// The finish button.
    Finish,
    /// The cancel button.
    Cancel,
    /// The previous button.
    Previous,
    /// The next button.
    Next,
}

impl ActionLabel {
    /// Every action, in the order labels are registered.
    pub const ALL: [ActionLabel; 4] = [Self::Finish, Self::Cancel, Self::Previous, Self::Next];

    /// The message key of this action.
    pub fn key(self) -> &'static str {
        match self {
            Self::Finish => "Finish",
            Self::Cancel => "Cancel",
            Self::Previous => "Previous",
            Self::Next => "Next",
        }
    }

    /// Parse a message key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolved labels for one locale, as published to the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonLabels {
    pub finish: String,
    pub cancel: String,
    pub previous: String,
    pub next: String,
}

impl ButtonLabels {
    /// The label of one action.
    pub fn get(&self, action: ActionLabel) -> &str {
        match action {
            ActionLabel::Finish => &self.finish,
            ActionLabel::Cancel => &self.cancel,
            ActionLabel::Previous => &self.previous,
            ActionLabel::Next => &self.next,
        }
    }
}

const BUILTIN: &[(&str, [&str; 4])] = &[
    ("en", ["Finish", "Cancel", "Previous", "Next"]),
    ("fr", ["Terminer", "Annuler", "Précédent", "Suivant"]),
    ("de", ["Fertig", "Abbrechen", "Zurück", "Weiter"]),
    ("es", ["Finalizar", "Cancelar", "Anterior", "Siguiente"]),
    ("it", ["Fine", "Annulla", "Indietro", "Avanti"]),
    ("nl", ["Voltooien", "Annuleren", "Vorige", "Volgende"]),
    ("pt", ["Concluir", "Cancelar", "Anterior", "Seguinte"]),
    ("ca", ["Finalitza", "Cancel·la", "Anterior", "Següent"]),
];

/// Button label tables and the selected locale.
#[derive(Debug, Clone)]
pub struct Langpack {
    tables: HashMap<String, [String; 4]>,
    locale: String,
}

impl Default for Langpack {
    fn default() -> Self {
        Self::new()
    }
}

impl Langpack {
    /// Create a langpack holding the built-in tables, with the default
    /// locale selected.
    pub fn new() -> Self {
        let tables = BUILTIN
            .iter()
            .map(|(locale, labels)| (locale.to_string(), labels.map(str::to_string)))
            .collect();
        Self {
            tables,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Register or replace the labels of a locale.
    ///
    /// `labels` must hold exactly four entries, in the order Finish, Cancel,
    /// Previous, Next.
    pub fn add_locale<S>(&mut self, locale: &str, labels: &[S]) -> Result<(), LocaleRegistrationError>
    where
        S: AsRef<str>,
    {
        let key = normalize(locale);
        if key.is_empty() {
            return Err(LocaleRegistrationError::MissingLocale);
        }
        let table: [String; 4] = match labels {
            [] => return Err(LocaleRegistrationError::MissingLabels),
            [finish, cancel, previous, next] => [finish, cancel, previous, next].map(|s| s.as_ref().to_string()),
            _ => {
                return Err(LocaleRegistrationError::WrongLabelCount {
                    expected: ActionLabel::ALL.len(),
                    found: labels.len(),
                });
            }
        };

        tracing::debug!(target: targets::LANGPACK, locale = %key, "locale registered");
        self.tables.insert(key, table);
        Ok(())
    }

    /// Select the locale used for lookups.
    ///
    /// The tag is stored as given; fallback happens at lookup time, so a
    /// table registered later is picked up.
    pub fn set_locale(&mut self, locale: &str) {
        self.locale = normalize(locale);
        tracing::debug!(
            target: targets::LANGPACK,
            requested = %self.locale,
            resolved = self.resolved_locale(),
            "locale selected"
        );
    }

    /// The selected locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The tag whose table answers lookups for the selected locale.
    pub fn resolved_locale(&self) -> &str {
        if self.tables.contains_key(&self.locale) {
            return &self.locale;
        }
        let language = self.locale.split('-').next().unwrap_or_default();
        match self.tables.get_key_value(language) {
            Some((key, _)) => key,
            None => DEFAULT_LOCALE,
        }
    }

    /// Whether a table is registered for exactly this tag.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.tables.contains_key(&normalize(locale))
    }

    /// Registered locale tags, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<_> = self.tables.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// The label of one action in the selected locale.
    pub fn label(&self, action: ActionLabel) -> &str {
        match self.tables.get(self.resolved_locale()) {
            Some(table) => &table[action.index()],
            None => {
                tracing::trace!(target: targets::LANGPACK, locale = %self.locale, "no table, using key");
                action.key()
            }
        }
    }

    /// Look a label up by its message key (`"Finish"`, `"Cancel"`,
    /// `"Previous"` or `"Next"`).
    pub fn message(&self, key: &str) -> Option<&str> {
        ActionLabel::from_key(key).map(|action| self.label(action))
    }

    /// All four labels in the selected locale.
    pub fn labels(&self) -> ButtonLabels {
        ButtonLabels {
            finish: self.label(ActionLabel::Finish).to_string(),
            cancel: self.label(ActionLabel::Cancel).to_string(),
            previous: self.label(ActionLabel::Previous).to_string(),
            next: self.label(ActionLabel::Next).to_string(),
        }
    }
}

/// The operating system's locale tag.
#[cfg(feature = "localization")]
pub fn system_locale() -> String {
    sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string())
}

/// The operating system's locale tag.
#[cfg(not(feature = "localization"))]
pub fn system_locale() -> String {
    "en-US".to_string()
}

fn normalize(locale: &str) -> String {
    locale.trim().replace('_', "-").to_lowercase()
}
