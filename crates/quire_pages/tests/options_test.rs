//! Tests for display options and navigation symbols.

use quire_core::{Intent, Symbol};
use quire_pages::{DisplayOptions, JumpVisibility, NavigationSymbols, StopBehavior};
use std::time::Duration;

#[test]
fn test_default_options() {
    let options = DisplayOptions::default();
    assert_eq!(*options.fields_per_page(), 6);
    assert_eq!(*options.jump_visibility(), JumpVisibility::WithElevatedPermission);
    assert!(*options.display_info_icon());
    assert_eq!(*options.info_timeout(), Duration::from_secs(30));
    assert_eq!(*options.jump_timeout(), Duration::from_secs(15));
    assert_eq!(*options.transient_timeout(), Duration::from_secs(3));
    assert_eq!(*options.stop_behavior(), StopBehavior::ClearAffordances);
    assert_eq!(options.footer(3, 7), "Page 3/7");
}

#[test]
fn test_symbols_map_both_ways() {
    let symbols = NavigationSymbols::default();
    assert_eq!(symbols.intent_for(&Symbol::new("▶")), Some(Intent::Next));
    assert_eq!(symbols.intent_for(&Symbol::new("⏹")), Some(Intent::Stop));
    assert_eq!(symbols.intent_for(&Symbol::new("👍")), None);
    assert_eq!(symbols.symbol_for(Intent::Jump).as_str(), "🔢");
}

#[test]
fn test_custom_symbols() {
    let symbols = NavigationSymbols::default().with_next("➡");
    assert_eq!(symbols.intent_for(&Symbol::new("➡")), Some(Intent::Next));
    assert_eq!(symbols.intent_for(&Symbol::new("▶")), None);
}

#[test]
fn test_visibility_and_stop_names_in_toml() {
    #[derive(serde::Deserialize)]
    struct Probe {
        visibility: JumpVisibility,
        stop: StopBehavior,
    }

    let probe: Probe = toml::from_str(
        r#"
visibility = "with_elevated_permission"
stop = "delete_message"
"#,
    )
    .expect("Valid TOML");
    assert_eq!(probe.visibility, JumpVisibility::WithElevatedPermission);
    assert_eq!(probe.stop, StopBehavior::DeleteMessage);
}
