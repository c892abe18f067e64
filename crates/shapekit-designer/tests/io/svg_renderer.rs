use shapekit_core::{BoundingBox, Color, Point};
use shapekit_designer::{
    DesignerState, FillStyle, KeyCommand, LineStyle, Paint, ShapeKind, Surface, SvgSurface,
};

/// Records draw calls for inspection.
#[derive(Default)]
struct RecordingSurface {
    calls: Vec<(&'static str, Paint)>,
}

impl Surface for RecordingSurface {
    fn draw_ellipse(&mut self, _rect: &BoundingBox, paint: &Paint) {
        self.calls.push(("ellipse", *paint));
    }

    fn draw_rect(&mut self, _rect: &BoundingBox, paint: &Paint) {
        self.calls.push(("rect", *paint));
    }

    fn draw_polygon(&mut self, points: &[Point], paint: &Paint) {
        assert_eq!(points.len(), 3);
        self.calls.push(("polygon", *paint));
    }
}

#[test]
fn test_primitives_paint_in_z_order() {
    let mut state = DesignerState::new();
    state.click(Point::new(100, 200), false);
    state.set_tool(ShapeKind::Rectangle);
    state.click(Point::new(200, 200), false);
    state.set_tool(ShapeKind::Triangle);
    state.click(Point::new(300, 200), true);

    let mut surface = RecordingSurface::default();
    state.paint(&mut surface);

    let kinds: Vec<&str> = surface.calls.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, vec!["ellipse", "rect", "polygon"]);

    let (_, plain) = surface.calls[0];
    assert_eq!(plain.fill, Color::BLACK);
    assert_eq!(plain.fill_style, FillStyle::Solid);
    assert_eq!(plain.border, Color::BORDER);
    assert_eq!(plain.line_style, LineStyle::Solid);

    // The triangle was created selected.
    let (_, selected) = surface.calls[2];
    assert_eq!(selected.fill, Color::SELECTED);
}

#[test]
fn test_group_paint() {
    let mut state = DesignerState::new();
    state.set_color(Color::rgb(0, 0, 255));
    state.click(Point::new(100, 200), true);
    state.click(Point::new(200, 200), true);
    state.group_selected().unwrap();

    let mut surface = RecordingSurface::default();
    state.paint(&mut surface);
    let kinds: Vec<&str> = surface.calls.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, vec!["rect", "ellipse", "ellipse"]);

    let (_, outline) = surface.calls[0];
    assert_eq!(outline.line_style, LineStyle::Dashed);
    assert_eq!(outline.fill_style, FillStyle::None);
    assert_eq!(outline.border, Color::BLACK);
    assert_eq!(surface.calls[1].1.fill, Color::rgb(0, 0, 255));

    state.click(Point::new(100, 200), false);
    let mut surface = RecordingSurface::default();
    state.paint(&mut surface);
    let (_, outline) = surface.calls[0];
    assert_eq!(outline.fill_style, FillStyle::Hatched);
    assert_eq!(outline.border, Color::SELECTED);
    assert_eq!(surface.calls[1].1.fill, Color::SELECTED);
}

#[test]
fn test_svg_output_for_session() {
    let mut state = DesignerState::new();
    state.click(Point::new(100, 200), true);
    state.apply_command(KeyCommand::Grow);

    let (w, h) = state.window_size();
    let mut surface = SvgSurface::new(w, h);
    state.paint(&mut surface);
    let svg = surface.to_svg();

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"600\""));
    assert!(svg.contains("<ellipse cx=\"100\" cy=\"200\" rx=\"30\" ry=\"30\" fill=\"#ff0000\""));
}
