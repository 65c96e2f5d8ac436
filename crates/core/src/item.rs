//! Choice list item model.
//!
//! A prompt is built from an ordered sequence of [`Item`]s. Each item is
//! either a [`Choice`] carrying a value the prompt can resolve to, or a
//! [`Separator`](Item::Separator), a decorative row the cursor can never
//! land on. A choice may additionally be disabled, with an optional custom
//! reason shown in place of the stock `(disabled)` marker.

use std::fmt::{Display, Formatter};

/// Whether a choice can be selected, and if not, why.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Disabled {
    /// The choice is selectable.
    #[default]
    Enabled,
    /// The choice is shown but cannot be selected.
    Disabled,
    /// Disabled, with a custom label shown instead of `(disabled)`.
    Reason(String),
}

impl Disabled {
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        !matches!(self, Disabled::Enabled)
    }

    /// The marker text to render next to a disabled choice.
    /// Returns `None` for an enabled choice.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Disabled::Enabled => None,
            Disabled::Disabled => Some("(disabled)"),
            Disabled::Reason(reason) => Some(reason),
        }
    }
}

/// A selectable entry in the choice list.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    /// The value the prompt resolves to when this choice is submitted.
    pub value: T,
    /// Display name. When absent the value itself is shown.
    pub name: Option<String>,
    /// Longer description, rendered below the list while this choice is active.
    pub description: Option<String>,
    pub disabled: Disabled,
}

impl<T> Choice<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            name: None,
            description: None,
            disabled: Disabled::Enabled,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = Disabled::Disabled;
        self
    }

    #[must_use]
    pub fn disabled_because(mut self, reason: impl Into<String>) -> Self {
        self.disabled = Disabled::Reason(reason.into());
        self
    }
}

impl<T: Display> Display for Choice<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => formatter.write_str(name),
            // No display name, fall back to the value itself
            None => write!(formatter, "{}", self.value),
        }
    }
}

/// One row of the choice list.
#[derive(Debug, Clone)]
pub enum Item<T> {
    /// A decorative row the cursor skips over. The label is the rendered text.
    Separator(String),
    Choice(Choice<T>),
}

impl<T> Item<T> {
    /// Shorthand for a plain enabled choice with no name or description.
    pub fn choice(value: T) -> Self {
        Item::Choice(Choice::new(value))
    }

    pub fn separator(label: impl Into<String>) -> Self {
        Item::Separator(label.into())
    }

    /// True only for a choice that is not disabled. Separators are never
    /// selectable.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        match self {
            Item::Separator(_) => false,
            Item::Choice(choice) => !choice.disabled.is_disabled(),
        }
    }

    #[must_use]
    pub fn as_choice(&self) -> Option<&Choice<T>> {
        match self {
            Item::Choice(choice) => Some(choice),
            Item::Separator(_) => None,
        }
    }
}

impl<T: Display> Item<T> {
    /// The text the item is matched and rendered by: the choice name when
    /// present, the stringified value otherwise, or the separator label.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Item::Separator(label) => label.clone(),
            Item::Choice(choice) => choice.to_string(),
        }
    }
}
