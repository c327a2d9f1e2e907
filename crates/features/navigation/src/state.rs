use crate::error::NavigationError;
use crate::expansion::MenuExpansionState;
use ahub_kernel::domain::config::NavigationConfig;
use ahub_kernel::domain::language::Language;
use ahub_kernel::domain::menu::MenuItem;
use tracing::debug;

/// Local UI state of one rendered sidebar: open groups and the active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    expansion: MenuExpansionState,
    language: Language,
    languages: Vec<Language>,
}

impl NavigationState {
    #[must_use]
    pub fn new(menu: &[MenuItem], config: &NavigationConfig) -> Self {
        let mut languages = config.languages.clone();
        if !languages.contains(&config.default_language) {
            languages.insert(0, config.default_language);
        }

        Self {
            expansion: MenuExpansionState::for_menu(menu),
            language: config.default_language,
            languages,
        }
    }

    #[must_use]
    pub const fn expansion(&self) -> &MenuExpansionState {
        &self.expansion
    }

    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expansion.is_expanded(key)
    }

    /// # Errors
    /// See [`MenuExpansionState::toggle`].
    pub fn toggle(&mut self, key: &str) -> Result<bool, NavigationError> {
        let open = self.expansion.toggle(key)?;
        debug!(key, open, "Submenu toggled");
        Ok(open)
    }

    pub fn reveal(&mut self, menu: &[MenuItem], path: &str) -> bool {
        self.expansion.reveal(menu, path)
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Switches the interface language by code (`fr`, `es-MX`, ...).
    ///
    /// # Errors
    /// Returns [`NavigationError::UnsupportedLanguage`] for codes outside the configured set.
    pub fn set_language(&mut self, code: &str) -> Result<Language, NavigationError> {
        let language = Language::from_code(code)
            .filter(|lang| self.languages.contains(lang))
            .ok_or_else(|| NavigationError::UnsupportedLanguage {
                message: format!("'{code}' is not offered").into(),
                context: Some(format!("available: {:?}", self.languages).into()),
            })?;

        debug!(from = %self.language, to = %language, "Language switched");
        self.language = language;
        Ok(language)
    }
}
