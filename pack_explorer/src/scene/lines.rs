//! Wireframe and marker lines: polyline components drawn every frame through gizmos.

use bevy::prelude::*;

use crate::scene::view::{SessionMember, ViewSession};

pub const LINE_WIDTH: f32 = 2.5;
pub const LINE_COLOR: Color = Color::BLACK;

/// Points of a connected line in the owning entity's local frame.
/// Closed loops repeat their first point at the end.
#[derive(Component, Clone, Debug)]
pub struct Polyline {
    pub points: Vec<Vec3>,
}

pub fn line_plugin(app: &mut App) {
    app.add_systems(Startup, configure_line_style)
        .add_systems(Update, draw_polylines_system);
}

fn configure_line_style(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = LINE_WIDTH;
}

fn draw_polylines_system(
    mut gizmos: Gizmos,
    session: Res<ViewSession>,
    lines: Query<(&Polyline, &GlobalTransform, &SessionMember)>,
) {
    for (line, transform, member) in &lines {
        if !session.is_live(member.0) {
            continue;
        }
        gizmos.linestrip(
            line.points.iter().map(|p| transform.transform_point(*p)),
            LINE_COLOR,
        );
    }
}
