use bevy::prelude::*;
use rover_dig_sim::{EpisodePhase, GridCoord};

use super::resources::{
    GameOverScreen, GridLayout, GridTile, HudText, MineralLabel, PlayScreen, RuntimeConfig,
    SessionState, ViewSettings,
};

const WINE: Color = Color::srgb(0.447, 0.184, 0.216);
const ROVER_TILE_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
const TEXT_COLOR: Color = Color::WHITE;

/// What a cell's label should read. X-ray hides empty cells; a scanned
/// cell shows its quantity even when it is zero.
pub fn mineral_label(xray: bool, quantity: Option<u32>) -> Option<String> {
    match quantity {
        Some(0) if xray => None,
        Some(quantity) => Some(quantity.to_string()),
        None => None,
    }
}

pub fn spawn_board(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    layout: Res<GridLayout>,
    mut clear_color: ResMut<ClearColor>,
) {
    clear_color.0 = Color::BLACK;

    for coord in GridCoord::all() {
        let center = layout.cell_center(coord);
        commands.spawn((
            Name::new(format!("Tile({},{})", coord.row, coord.col)),
            Sprite::from_color(WINE, Vec2::splat(layout.cell_size)),
            Transform::from_translation(center),
            GridTile { coord },
            PlayScreen,
        ));
        commands.spawn((
            Name::new(format!("Minerals({},{})", coord.row, coord.col)),
            Text2d::new(""),
            TextFont {
                font_size: config.display.label_font_size,
                ..default()
            },
            TextColor(TEXT_COLOR),
            Transform::from_translation(center + Vec3::Z),
            MineralLabel { coord },
            PlayScreen,
        ));
    }
}

pub fn spawn_hud(mut commands: Commands, config: Res<RuntimeConfig>) {
    commands.spawn((
        Name::new("HudText"),
        HudText,
        PlayScreen,
        Text::new(""),
        TextFont {
            font_size: config.display.hud_font_size,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(2.0),
            bottom: Val::Px(2.0),
            ..default()
        },
    ));
}

pub fn refresh_tiles(session: Res<SessionState>, mut tiles: Query<(&GridTile, &mut Sprite)>) {
    let occupancy = session.session.engine().occupancy();
    for (tile, mut sprite) in &mut tiles {
        sprite.color = if occupancy[tile.coord] == 1 {
            ROVER_TILE_COLOR
        } else {
            WINE
        };
    }
}

pub fn refresh_labels(
    session: Res<SessionState>,
    view: Res<ViewSettings>,
    mut labels: Query<(&MineralLabel, &mut Text2d)>,
) {
    let visible = session.session.engine().visible_minerals(view.xray);
    for (label, mut text) in &mut labels {
        let value = mineral_label(view.xray, visible[label.coord]).unwrap_or_default();
        if text.0 != value {
            text.0 = value;
        }
    }
}

pub fn refresh_hud(session: Res<SessionState>, mut hud_query: Query<&mut Text, With<HudText>>) {
    let Ok(mut hud) = hud_query.get_single_mut() else {
        return;
    };

    let engine = session.session.engine();
    *hud = Text::new(format!(
        "Battery: {}\nMinerals: {}\nReward: {}",
        engine.battery(),
        engine.mineral_count(),
        engine.reward(),
    ));
}

pub fn spawn_game_over(
    mut commands: Commands,
    session: Res<SessionState>,
    mut clear_color: ResMut<ClearColor>,
) {
    clear_color.0 = WINE;

    let minerals_found = match session.session.phase() {
        EpisodePhase::Over { minerals_found } => minerals_found,
        EpisodePhase::Playing => session.session.engine().mineral_count(),
    };

    commands
        .spawn((
            Name::new("GameOver"),
            GameOverScreen,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            for (line, font_size) in [
                ("Battery empty!".to_string(), 24.0),
                ("Press \"enter\" to recharge".to_string(), 14.0),
                (format!("Minerals found: {minerals_found}"), 14.0),
            ] {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            }
        });
}

pub fn despawn_screen<T: Component>(mut commands: Commands, entities: Query<Entity, With<T>>) {
    for entity in &entities {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::mineral_label;

    #[test]
    fn labels_follow_xray_and_fog_rules() {
        assert_eq!(mineral_label(true, Some(3)), Some("3".to_string()));
        assert_eq!(mineral_label(true, Some(0)), None);
        assert_eq!(mineral_label(false, Some(0)), Some("0".to_string()));
        assert_eq!(mineral_label(false, None), None);
    }
}
