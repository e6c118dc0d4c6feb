//! Text overlay: background word, prompt bubble and the fact card.
use bevy::prelude::*;

use crate::utils::constants::ui_constants::*;
use crate::utils::objects::{
    BackgroundWord, FactCard, FactDescription, FactTitle, SpinPrompt, WidgetState,
};

/// Spawns the whole overlay. The fact card starts hidden.
pub fn spawn_overlay(commands: &mut Commands) {
    // Background word, centred behind the cube
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            GlobalZIndex(-1),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(BACKGROUND_WORD_IDLE),
                TextFont {
                    font_size: BACKGROUND_WORD_SIZE,
                    ..default()
                },
                TextColor(BACKGROUND_WORD_COLOR),
                BackgroundWord,
            ));
        });

    // Prompt bubble and fact card share the top-centre slot
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            top: Val::Px(24.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            parent
                .spawn((bubble_node(), BackgroundColor(BUBBLE_COLOR), SpinPrompt))
                .with_children(|bubble| {
                    bubble.spawn((
                        Text::new(PROMPT_TEXT),
                        TextFont {
                            font_size: BUBBLE_TEXT_SIZE,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });

            parent
                .spawn((
                    bubble_node(),
                    BackgroundColor(BUBBLE_COLOR.with_alpha(0.0)),
                    Visibility::Hidden,
                    FactCard,
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: BUBBLE_TITLE_SIZE,
                            ..default()
                        },
                        TextColor(Color::WHITE.with_alpha(0.0)),
                        FactTitle,
                    ));
                    card.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: BUBBLE_TEXT_SIZE,
                            ..default()
                        },
                        TextColor(Color::WHITE.with_alpha(0.0)),
                        FactDescription,
                    ));
                });
        });
}

fn bubble_node() -> Node {
    Node {
        max_width: Val::Px(BUBBLE_WIDTH),
        padding: UiRect::all(Val::Px(8.0)),
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(4.0),
        ..default()
    }
}

/// Opacity of the fact card `elapsed_secs` after it was shown.
pub fn card_opacity(elapsed_secs: f32) -> f32 {
    (elapsed_secs / CARD_FADE_SECS).clamp(0.0, 1.0)
}

/// Rewrites the overlay texts after a roll. Runs only when `WidgetState` changed.
pub fn refresh_overlay(
    widget: Res<WidgetState>,
    mut word_query: Query<&mut Text, (With<BackgroundWord>, Without<FactTitle>, Without<FactDescription>)>,
    mut title_query: Query<&mut Text, (With<FactTitle>, Without<BackgroundWord>, Without<FactDescription>)>,
    mut description_query: Query<&mut Text, (With<FactDescription>, Without<BackgroundWord>, Without<FactTitle>)>,
    mut prompt_query: Query<&mut Visibility, (With<SpinPrompt>, Without<FactCard>)>,
    mut card_query: Query<&mut Visibility, (With<FactCard>, Without<SpinPrompt>)>,
) {
    if !widget.is_changed() {
        return;
    }

    let banner = match (&widget.fact, widget.last_roll) {
        (Some(fact), _) => fact.banner.clone(),
        (None, Some(roll)) => roll.to_string(),
        (None, None) => BACKGROUND_WORD_IDLE.to_string(),
    };
    if let Ok(mut word) = word_query.single_mut() {
        word.0 = banner;
    }

    if let Ok(mut prompt) = prompt_query.single_mut() {
        *prompt = if widget.has_spun() {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
    }

    let Some(fact) = &widget.fact else {
        return;
    };
    if let Ok(mut title) = title_query.single_mut() {
        title.0 = fact.title.clone();
    }
    if let Ok(mut description) = description_query.single_mut() {
        description.0 = fact.description.clone();
    }
    if let Ok(mut card) = card_query.single_mut() {
        *card = Visibility::Inherited;
    }
}

/// Fades the fact card in after each roll.
pub fn fade_in_fact_card(
    time: Res<Time>,
    widget: Res<WidgetState>,
    mut card_query: Query<(&mut BackgroundColor, &Children), With<FactCard>>,
    mut text_query: Query<&mut TextColor>,
) {
    let Some(shown_at) = widget.card_shown_at else {
        return;
    };
    let elapsed = time.elapsed().saturating_sub(shown_at).as_secs_f32();
    // Keep writing for one extra frame so the final value lands.
    if elapsed > CARD_FADE_SECS + 0.1 {
        return;
    }
    let alpha = card_opacity(elapsed);

    let Ok((mut background, children)) = card_query.single_mut() else {
        return;
    };
    background.0 = BUBBLE_COLOR.with_alpha(alpha);
    for child in children {
        if let Ok(mut color) = text_query.get_mut(*child) {
            color.0 = color.0.with_alpha(alpha);
        }
    }
}
