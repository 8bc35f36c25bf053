//! Display options shared by every page of a paginated message.

use derive_getters::Getters;
use derive_setters::Setters;
use quire_core::{Intent, Symbol};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// When the jump affordance is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpVisibility {
    /// Always attach it.
    Always,
    /// Never attach it.
    Never,
    /// Attach it when the owner may manage messages in the channel.
    #[default]
    WithElevatedPermission,
}

/// What Stop does to the paginated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopBehavior {
    /// Strip every affordance and leave the last page visible.
    #[default]
    ClearAffordances,
    /// Strip affordances, then delete the message and the invoking command.
    DeleteMessage,
}

/// Symbol bound to each navigation intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct NavigationSymbols {
    /// Go to page 1.
    first: Symbol,
    /// Go back one page.
    back: Symbol,
    /// Go forward one page.
    next: Symbol,
    /// Go to the last page.
    last: Symbol,
    /// Ask for a page number.
    jump: Symbol,
    /// Show the info text.
    info: Symbol,
    /// End the session.
    stop: Symbol,
}

impl NavigationSymbols {
    /// Symbol that triggers `intent`.
    pub fn symbol_for(&self, intent: Intent) -> &Symbol {
        match intent {
            Intent::First => &self.first,
            Intent::Back => &self.back,
            Intent::Next => &self.next,
            Intent::Last => &self.last,
            Intent::Jump => &self.jump,
            Intent::Info => &self.info,
            Intent::Stop => &self.stop,
        }
    }

    /// Intent triggered by `symbol`, if it is one of ours.
    pub fn intent_for(&self, symbol: &Symbol) -> Option<Intent> {
        [
            Intent::First,
            Intent::Back,
            Intent::Next,
            Intent::Last,
            Intent::Jump,
            Intent::Info,
            Intent::Stop,
        ]
        .into_iter()
        .find(|intent| self.symbol_for(*intent) == symbol)
    }
}

impl Default for NavigationSymbols {
    fn default() -> Self {
        Self {
            first: Symbol::new("⏮"),
            back: Symbol::new("◀"),
            next: Symbol::new("▶"),
            last: Symbol::new("⏭"),
            jump: Symbol::new("🔢"),
            info: Symbol::new("ℹ"),
            stop: Symbol::new("⏹"),
        }
    }
}

/// Appearance and timing of a paginated message.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct DisplayOptions {
    /// Symbol bound to each intent.
    symbols: NavigationSymbols,
    /// Fields grouped onto one page in fielded mode.
    fields_per_page: usize,
    /// When the jump affordance is attached.
    jump_visibility: JumpVisibility,
    /// Whether the info affordance is attached.
    display_info_icon: bool,
    /// Text posted by the info affordance.
    #[setters(into)]
    info_text: String,
    /// How long the info text stays up.
    info_timeout: Duration,
    /// How long the jump prompt waits for a page number.
    jump_timeout: Duration,
    /// How long error hints stay up.
    transient_timeout: Duration,
    /// What Stop does to the message.
    stop_behavior: StopBehavior,
}

impl DisplayOptions {
    /// Footer text for page `index` of `count`.
    pub fn footer(&self, index: usize, count: usize) -> String {
        format!("Page {}/{}", index, count)
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            symbols: NavigationSymbols::default(),
            fields_per_page: 6,
            jump_visibility: JumpVisibility::default(),
            display_info_icon: true,
            info_text: "This is a paginator. React with the respective icons to change page."
                .to_string(),
            info_timeout: Duration::from_secs(30),
            jump_timeout: Duration::from_secs(15),
            transient_timeout: Duration::from_secs(3),
            stop_behavior: StopBehavior::default(),
        }
    }
}
