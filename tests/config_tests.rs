use dice_core::{ConfigError, RollResult};
use dice_widget::utils::config::WidgetConfig;
use dice_widget::utils::facts::{FactBook, default_facts};

fn roll(value: u8) -> RollResult {
    RollResult::new(value).unwrap()
}

#[test]
fn empty_document_uses_defaults() {
    let (config, book) = WidgetConfig::from_toml_str("").unwrap();
    assert_eq!(config.seed, None);
    assert_eq!(config.facts, default_facts());
    assert_eq!(book, FactBook::default());
    assert_eq!(book.len(), 6);
}

#[test]
fn shipped_asset_parses() {
    let source = include_str!("../assets/dice.toml");
    let (config, book) = WidgetConfig::from_toml_str(source).unwrap();
    assert_eq!(config.dice, dice_core::DiceConfig::default());
    assert_eq!(book, FactBook::default());
}

#[test]
fn seed_and_partial_overrides() {
    let source = r#"
        seed = 7

        [dice.spin]
        damping = 0.9
    "#;
    let (config, _) = WidgetConfig::from_toml_str(source).unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.dice.spin.damping, 0.9);
    assert_eq!(config.dice.spin.cooldown_ms, 1000);
}

#[test]
fn custom_facts_replace_the_defaults() {
    let source = r#"
        [[facts]]
        label = 3
        banner = "TRES"
        title = "Three"
        description = "Only one fact"
    "#;
    let (_, book) = WidgetConfig::from_toml_str(source).unwrap();
    assert_eq!(book.len(), 1);
    assert_eq!(book.get(roll(3)).unwrap().banner, "TRES");
    assert!(book.get(roll(1)).is_none());
}

#[test]
fn fact_label_out_of_range_is_rejected() {
    let source = r#"
        [[facts]]
        label = 7
        banner = "SEVEN"
        title = "Seven"
        description = "Not on a die"
    "#;
    assert!(matches!(
        WidgetConfig::from_toml_str(source),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn duplicate_fact_label_is_rejected() {
    let source = r#"
        [[facts]]
        label = 2
        banner = "A"
        title = "A"
        description = "A"

        [[facts]]
        label = 2
        banner = "B"
        title = "B"
        description = "B"
    "#;
    assert!(matches!(
        WidgetConfig::from_toml_str(source),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn invalid_motion_values_are_rejected() {
    let source = r#"
        [dice.settle]
        lerp_factor = 0.0
    "#;
    assert!(matches!(
        WidgetConfig::from_toml_str(source),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn unknown_top_level_key_is_a_parse_error() {
    assert!(matches!(
        WidgetConfig::from_toml_str("colour = \"red\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn default_facts_follow_the_faces() {
    let book = FactBook::default();
    for value in 1..=6 {
        assert_eq!(book.get(roll(value)).unwrap().label, value);
    }
}

#[test]
fn non_finite_motion_values_are_rejected() {
    for source in [
        "[dice.spin]\nmax_initial_speed = inf",
        "[dice.orbit]\nradius = [0.9, inf]",
        "[dice.orbit]\nidle_speed = nan",
    ] {
        assert!(
            matches!(WidgetConfig::from_toml_str(source), Err(ConfigError::Invalid(_))),
            "{source}"
        );
    }
}
