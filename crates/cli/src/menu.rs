//! Menu definition files.
//!
//! The `pick` binary reads its choice list from a YAML menu definition: a
//! prompt message plus an ordered list of entries, each either a choice or
//! a separator. Optional keys override the page size, wrap behaviour,
//! pre-selected default and theme colors.
//!
//! ```yaml
//! message: Deploy to which environment?
//! default: staging
//! entries:
//!   - separator: "── long-lived ──"
//!   - value: production
//!     name: Production
//!     description: Requires a change ticket
//!   - value: staging
//!   - separator: ~
//!   - value: sandbox
//!     disabled: being rebuilt
//! ```

use std::fs::File;

use itertools::Itertools;
use log::warn;
use serde::Deserialize;

use term_pick_core::item::{Choice, Disabled, Item};
use term_pick_core::select::Select;

use crate::error::{Error, Result};
use crate::prompt::colors::{AsTermColor, ColorSpec};
use crate::prompt::theme::Theme;

#[derive(Deserialize, Debug, Clone)]
pub struct MenuDefinition {
    pub message: String,
    pub entries: Vec<EntryDefinition>,
    pub page_size: Option<usize>,
    #[serde(rename = "loop")]
    pub wrap: Option<bool>,
    pub default: Option<String>,
    pub highlight_color: Option<ColorSpec>,
    pub answer_color: Option<ColorSpec>,
}

/// One entry row. Choices are tried first: anything with a `value` key is
/// a choice, a map with only a `separator` key is a separator.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum EntryDefinition {
    Choice(ChoiceDefinition),
    Separator(SeparatorDefinition),
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChoiceDefinition {
    pub value: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub disabled: Option<DisabledFlag>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SeparatorDefinition {
    /// Label text; omit (or `~`) for a plain rule line.
    pub separator: Option<String>,
}

/// `disabled: true` or `disabled: <reason shown instead of "(disabled)">`.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum DisabledFlag {
    Flag(bool),
    Reason(String),
}

impl From<&DisabledFlag> for Disabled {
    fn from(flag: &DisabledFlag) -> Self {
        match flag {
            DisabledFlag::Flag(false) => Disabled::Enabled,
            DisabledFlag::Flag(true) => Disabled::Disabled,
            DisabledFlag::Reason(reason) => Disabled::Reason(reason.clone()),
        }
    }
}

impl EntryDefinition {
    fn to_item(&self) -> Item<String> {
        match self {
            EntryDefinition::Separator(separator) => {
                Item::separator(separator.separator.clone().unwrap_or_default())
            }
            EntryDefinition::Choice(choice) => Item::Choice(Choice {
                value: choice.value.clone(),
                name: choice.name.clone(),
                description: choice.description.clone(),
                disabled: choice
                    .disabled
                    .as_ref()
                    .map(Disabled::from)
                    .unwrap_or_default(),
            }),
        }
    }
}

impl MenuDefinition {
    pub fn items(&self) -> Vec<Item<String>> {
        self.entries.iter().map(EntryDefinition::to_item).collect()
    }

    /// Builds the selection session described by this menu.
    ///
    /// # Errors
    ///
    /// Fails when no entry is a selectable choice.
    pub fn to_select(&self) -> Result<Select<String>> {
        let mut select = Select::new(self.message.clone(), self.items())?;
        if let Some(page_size) = self.page_size {
            select = select.with_page_size(page_size);
        }
        if let Some(wrap) = self.wrap {
            select = select.with_wrap(wrap);
        }
        if let Some(default) = &self.default {
            select = select.with_default(default);
        }
        Ok(select)
    }

    /// The detected theme with this menu's color overrides applied.
    ///
    /// # Errors
    ///
    /// Fails on an unknown color name or an over-specified color.
    pub fn theme(&self) -> Result<Theme> {
        let mut theme = Theme::detect();
        if let Some(spec) = &self.highlight_color {
            if let Some(color) = spec.as_crossterm_color()? {
                theme = theme.with_highlight_color(color);
            }
        }
        if let Some(spec) = &self.answer_color {
            if let Some(color) = spec.as_crossterm_color()? {
                theme = theme.with_answer_color(color);
            }
        }
        Ok(theme)
    }
}

fn get_reader(path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::menu_io_error(path.to_string(), e))
}

/// Loads and checks a menu definition from a YAML file.
///
/// Duplicate choice values are legal (the prompt resolves to a value, not
/// an index, so duplicates are usually a mistake) and logged as warnings.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the YAML does not match
/// the menu structure, or the entry list is empty.
pub fn load_menu(path: &str) -> Result<MenuDefinition> {
    let menu_reader = get_reader(path)?;

    let menu: MenuDefinition = serde_yaml::from_reader(menu_reader)
        .map_err(|e| Error::yaml_error("reading".to_string(), path.to_string(), e))?;

    if menu.entries.is_empty() {
        return Err(Error::EmptyMenu {
            path: path.to_string(),
        });
    }

    warn_on_duplicate_values(&menu);

    Ok(menu)
}

fn warn_on_duplicate_values(menu: &MenuDefinition) {
    let duplicates = menu
        .entries
        .iter()
        .filter_map(|entry| match entry {
            EntryDefinition::Choice(choice) => Some(choice.value.as_str()),
            EntryDefinition::Separator(_) => None,
        })
        .duplicates();

    for value in duplicates {
        warn!("Menu contains more than one choice with value `{value}`");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> MenuDefinition {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_minimal_menu() {
        let menu = parse(
            r#"
message: Pick one
entries:
  - value: a
  - value: b
"#,
        );
        assert_eq!(menu.message, "Pick one");
        assert_eq!(menu.entries.len(), 2);
        assert!(menu.page_size.is_none());
        assert!(menu.wrap.is_none());
    }

    #[test]
    fn test_separator_entries() {
        let menu = parse(
            r#"
message: Pick one
entries:
  - separator: "── section ──"
  - separator: ~
  - value: a
"#,
        );
        let items = menu.items();
        assert!(matches!(&items[0], Item::Separator(label) if label == "── section ──"));
        assert!(matches!(&items[1], Item::Separator(label) if label.is_empty()));
        assert!(items[2].is_selectable());
    }

    #[test]
    fn test_disabled_flag_and_reason() {
        let menu = parse(
            r#"
message: Pick one
entries:
  - value: a
    disabled: true
  - value: b
    disabled: out of season
  - value: c
    disabled: false
"#,
        );
        let items = menu.items();
        assert!(!items[0].is_selectable());
        assert_eq!(
            items[1].as_choice().unwrap().disabled,
            Disabled::Reason("out of season".to_string())
        );
        assert!(items[2].is_selectable());
    }

    #[test]
    fn test_to_select_applies_options() {
        let menu = parse(
            r#"
message: Pick one
page_size: 3
loop: false
default: b
entries:
  - value: a
  - value: b
"#,
        );
        let select = menu.to_select().unwrap();
        assert_eq!(select.page_size(), 3);
        assert!(!select.wraps());
        assert_eq!(select.active_index(), 1);
    }

    #[test]
    fn test_to_select_fails_without_selectable_entry() {
        let menu = parse(
            r#"
message: Pick one
entries:
  - separator: only decoration
  - value: a
    disabled: true
"#,
        );
        assert!(menu.to_select().is_err());
    }

    #[test]
    fn test_unknown_separator_key_is_rejected() {
        let result: std::result::Result<MenuDefinition, _> = serde_yaml::from_str(
            r#"
message: Pick one
entries:
  - separator: x
    extra: boom
"#,
        );
        assert!(result.is_err());
    }
}
