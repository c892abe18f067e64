use shapekit_core::{BoundingBox, Color, Point};
use shapekit_designer::{DesignRectangle, DrawingObject, Shape, ShapeKind, ShapeType, Storage};

fn square(x: i32, y: i32, color: Color) -> DrawingObject {
    DrawingObject::new(
        Shape::Rectangle(DesignRectangle::new(BoundingBox::new(x, y, 40, 40))),
        color,
    )
}

fn storage_with(n: i32) -> Storage {
    (0..n)
        .map(|i| square(i * 100, 100, Color::rgb(i as u8, 0, 0)))
        .collect()
}

#[test]
fn test_add_and_get() {
    let mut storage = Storage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.add_item(square(0, 0, Color::BLACK)), 0);
    assert_eq!(storage.add_item(square(100, 0, Color::RED)), 1);
    assert_eq!(storage.len(), 2);
    assert_eq!(storage.get(1).unwrap().stored_color(), Color::RED);
    assert!(storage.get(2).is_none());
}

#[test]
fn test_remove_where() {
    let mut storage = storage_with(4);
    let removed = storage.remove_where(|item| item.bounds().x >= 200);
    assert_eq!(removed, 2);
    assert_eq!(storage.len(), 2);
    assert!(storage.iter().all(|item| item.bounds().x < 200));
}

#[test]
fn test_active_items_is_restartable() {
    let mut storage = storage_with(3);
    storage.get_mut(0).unwrap().toggle_selected();
    storage.get_mut(2).unwrap().toggle_selected();

    assert_eq!(storage.active_items().count(), 2);
    let xs: Vec<i32> = storage.active_items().map(|i| i.bounds().x).collect();
    assert_eq!(xs, vec![0, 200]);
    assert_eq!(storage.active_count(), 2);
}

#[test]
fn test_deactivate_all_cascades_into_groups() {
    let mut storage = storage_with(2);
    for item in storage.iter_mut() {
        item.toggle_selected();
    }
    let index = storage.group_active().unwrap();
    storage.get_mut(index).unwrap().toggle_selected();
    assert!(storage.get(index).unwrap().shape.as_group().unwrap().children()[0].is_selected());

    storage.deactivate_all();
    let group = storage.get(index).unwrap();
    assert!(!group.is_selected());
    assert!(group
        .shape
        .as_group()
        .unwrap()
        .children()
        .iter()
        .all(|c| !c.is_selected()));
}

#[test]
fn test_delete_all_active_removes_adjacent_selections() {
    let mut storage = storage_with(5);
    for index in [1, 2, 4] {
        storage.get_mut(index).unwrap().toggle_selected();
    }
    assert_eq!(storage.delete_all_active(), 3);
    let xs: Vec<i32> = storage.iter().map(|i| i.bounds().x).collect();
    assert_eq!(xs, vec![0, 300]);
}

#[test]
fn test_group_active_keeps_relative_order() {
    let mut storage = storage_with(4);
    storage.get_mut(3).unwrap().toggle_selected();
    storage.get_mut(1).unwrap().toggle_selected();

    let index = storage.group_active().unwrap();
    assert_eq!(storage.len(), 3);
    assert_eq!(index, 2);

    let group = storage.get(index).unwrap();
    assert_eq!(group.shape_type(), ShapeType::Group);
    assert!(!group.is_selected());

    let children = group.shape.as_group().unwrap().children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].bounds().x, 100);
    assert_eq!(children[1].bounds().x, 300);
    assert!(children.iter().all(|c| !c.is_selected()));
    assert_eq!(group.bounds(), BoundingBox::new(100, 100, 240, 40));

    let remaining: Vec<i32> = storage.iter().take(2).map(|i| i.bounds().x).collect();
    assert_eq!(remaining, vec![0, 200]);
}

#[test]
fn test_group_active_with_nothing_selected() {
    let mut storage = storage_with(2);
    assert_eq!(storage.group_active(), None);
    assert_eq!(storage.len(), 2);
}

#[test]
fn test_item_at_prefers_topmost() {
    let mut storage = Storage::new();
    storage.add_item(square(100, 100, Color::BLACK));
    storage.add_item(square(120, 120, Color::RED));
    storage.add_item(DrawingObject::new(
        ShapeKind::Circle.create(Point::new(500, 500), 50).unwrap(),
        Color::WHITE,
    ));

    assert_eq!(storage.item_at(Point::new(130, 130)), Some(1));
    assert_eq!(storage.item_at(Point::new(105, 105)), Some(0));
    assert_eq!(storage.item_at(Point::new(500, 500)), Some(2));
    assert_eq!(storage.item_at(Point::new(700, 100)), None);
}
