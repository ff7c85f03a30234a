use dot_paint::palette::{BLACK, GRAY, GREEN, LARGE, MEDIUM, SMALL, YELLOW};
use dot_paint::{CommandRecorder, DrawCommand, DrawingSurface, PaintPoint, SurfaceEvent};
use egui::Color32;
use std::cell::RefCell;
use std::rc::Rc;

fn render_commands(surface: &DrawingSurface) -> Vec<DrawCommand> {
    let mut recorder = CommandRecorder::new();
    surface.render(&mut recorder);
    recorder.into_commands()
}

#[test]
fn test_default_surface_paints_small_black_dots() {
    let mut surface = DrawingSurface::default();
    surface.add_point(5, 5);

    assert_eq!(surface.len(), 1);
    assert_eq!(surface.points()[0], PaintPoint::new(5, 5, BLACK, 10));
    assert_eq!(surface.points()[0].diameter(), SMALL);
}

#[test]
fn test_points_capture_brush_at_creation() {
    let mut surface = DrawingSurface::new();

    surface.set_active_color(GREEN);
    surface.add_point(1, 1);
    surface.set_active_color(YELLOW);
    surface.add_point(2, 2);

    assert_eq!(surface.len(), 2);
    assert_eq!(surface.points()[0].color(), GREEN);
    assert_eq!(surface.points()[1].color(), YELLOW);
}

#[test]
fn test_nth_point_matches_nth_call() {
    let mut surface = DrawingSurface::new();
    let brushes = [(BLACK, SMALL), (GRAY, LARGE), (GRAY, MEDIUM), (Color32::from_rgb(1, 2, 3), -4)];
    let mut expected = Vec::new();

    for (i, (color, diameter)) in brushes.iter().cycle().take(20).enumerate() {
        surface.set_active_color(*color);
        surface.set_active_diameter(*diameter);

        let (x, y) = (i as i32 * 7 - 30, 1000 - i as i32 * 3);
        surface.add_point(x, y);
        expected.push(PaintPoint::new(x, y, *color, *diameter));

        assert_eq!(surface.len(), i + 1);
    }

    assert_eq!(surface.points(), expected.as_slice());
}

#[test]
fn test_setters_never_touch_existing_points() {
    let mut surface = DrawingSurface::new();
    surface.add_point(0, 0);
    surface.set_active_diameter(MEDIUM);
    surface.add_point(10, 10);
    let before = surface.points().to_vec();

    surface.set_active_color(YELLOW);
    surface.set_active_diameter(LARGE);
    surface.set_active_color(Color32::from_rgb(12, 34, 56));
    surface.set_active_diameter(0);

    assert_eq!(surface.points(), before.as_slice());
}

#[test]
fn test_clear_then_draw_again() {
    let mut surface = DrawingSurface::new();
    surface.set_active_color(GRAY);
    for i in 0..3 {
        surface.add_point(i, i);
    }

    surface.clear();
    assert_eq!(surface.len(), 0);

    surface.add_point(9, 9);
    assert_eq!(surface.len(), 1);
    assert_eq!(surface.points()[0], PaintPoint::new(9, 9, GRAY, SMALL));
}

#[test]
fn test_clear_always_empties() {
    for count in [0, 1, 2, 50] {
        let mut surface = DrawingSurface::new();
        for i in 0..count {
            surface.add_point(i, -i);
        }

        surface.clear();
        assert!(surface.is_empty());
        assert_eq!(render_commands(&surface), Vec::new());
    }
}

#[test]
fn test_render_replays_in_insertion_order() {
    let mut surface = DrawingSurface::new();
    surface.add_point(5, 6);
    surface.set_active_color(GREEN);
    surface.set_active_diameter(LARGE);
    surface.add_point(-20, 700);

    let first = render_commands(&surface);
    assert_eq!(
        first,
        vec![
            DrawCommand::SetFillColor(BLACK),
            DrawCommand::FillEllipse { x: 5, y: 6, width: 10, height: 10 },
            DrawCommand::SetFillColor(GREEN),
            DrawCommand::FillEllipse { x: -20, y: 700, width: 50, height: 50 },
        ]
    );

    assert_eq!(render_commands(&surface), first);
}

#[test]
fn test_brush_change_alone_leaves_render_unchanged() {
    let mut surface = DrawingSurface::new();
    surface.add_point(3, 3);
    let before = render_commands(&surface);

    surface.set_active_diameter(50);

    assert_eq!(render_commands(&surface), before);
    assert_eq!(surface.len(), 1);
}

#[test]
fn test_degenerate_diameters_are_rendered_as_given() {
    let mut surface = DrawingSurface::new();
    surface.set_active_diameter(-3);
    surface.add_point(1, 1);

    assert_eq!(
        render_commands(&surface)[1],
        DrawCommand::FillEllipse { x: 1, y: 1, width: -3, height: -3 }
    );
}

#[test]
fn test_subscribers_see_changes_in_order() {
    let mut surface = DrawingSurface::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    surface
        .events()
        .subscribe(Box::new(move |event: &SurfaceEvent| sink.borrow_mut().push(event.clone())));

    surface.add_point(1, 2);
    surface.set_active_color(YELLOW);
    surface.set_active_diameter(MEDIUM);
    surface.clear();

    assert_eq!(
        *events.borrow(),
        vec![
            SurfaceEvent::PointAdded(PaintPoint::new(1, 2, BLACK, SMALL)),
            SurfaceEvent::ColorChanged { old: BLACK, new: YELLOW },
            SurfaceEvent::DiameterChanged { old: SMALL, new: MEDIUM },
            SurfaceEvent::Cleared { removed: 1 },
        ]
    );
}

#[test]
fn test_redraw_requested_only_by_visible_changes() {
    let mut surface = DrawingSurface::new();

    surface.set_active_color(GREEN);
    assert!(!surface.take_redraw_request());

    surface.add_point(0, 0);
    assert!(surface.take_redraw_request());

    surface.set_active_diameter(LARGE);
    assert!(!surface.take_redraw_request());

    surface.clear();
    assert!(surface.take_redraw_request());
}
