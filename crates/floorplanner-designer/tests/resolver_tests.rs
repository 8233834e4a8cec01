//! Item resolution integration tests: rooms own their geometry, furniture
//! instances share a definition.

use floorplanner_core::{
    FloorPlan, FurnitureDefinition, FurnitureInstance, Inventory, Livability, Point, Room,
};
use floorplanner_designer::{hit_test, resolve, resolve_id, ItemKind, ItemRef, ItemResolver};

struct Fixture {
    plan: FloorPlan,
    inventory: Inventory,
    room_id: String,
    sofa_id: String,
}

fn fixture() -> Fixture {
    let room = Room::new("Den", 144.0, 144.0, Livability::Livable).at(0.0, 0.0);
    let sofa = FurnitureDefinition::new("Sofa", "Sofa", 84.0, 36.0, "#8B4513");

    let mut plan = FloorPlan::named("Cottage");
    plan.rooms.push(room.clone());
    plan.furniture_instances
        .push(FurnitureInstance::new(sofa.id.clone(), 12.0, 12.0));
    plan.furniture_instances
        .push(FurnitureInstance::new(sofa.id.clone(), 12.0, 96.0));

    let mut inventory = Inventory::new();
    inventory.insert(sofa.id.clone(), sofa.clone());

    Fixture {
        plan,
        inventory,
        room_id: room.id,
        sofa_id: sofa.id,
    }
}

fn sofa(index: usize, id: &str) -> ItemRef {
    ItemRef::Furniture {
        index,
        furniture_id: id.to_string(),
    }
}

#[test]
fn test_moving_an_instance_leaves_the_definition_alone() {
    let Fixture {
        mut plan,
        mut inventory,
        sofa_id,
        ..
    } = fixture();
    let definition = inventory[&sofa_id].clone();

    assert!(ItemResolver::new(&mut plan, &mut inventory).move_item(&sofa(1, &sofa_id), 60.0, 120.0));

    assert_eq!(inventory[&sofa_id], definition);
    assert_eq!((plan.furniture_instances[0].x, plan.furniture_instances[0].y), (12.0, 12.0));
    assert_eq!((plan.furniture_instances[1].x, plan.furniture_instances[1].y), (60.0, 120.0));
}

#[test]
fn test_resizing_an_instance_resizes_all_of_them() {
    let Fixture {
        mut plan,
        mut inventory,
        sofa_id,
        ..
    } = fixture();

    assert!(ItemResolver::new(&mut plan, &mut inventory).resize_item(&sofa(0, &sofa_id), 96.0, 40.0));

    let widths: Vec<_> = plan
        .visible_furniture(&inventory)
        .map(|placed| (placed.width(), placed.height()))
        .collect();
    assert_eq!(widths, vec![(96.0, 40.0), (96.0, 40.0)]);
}

#[test]
fn test_deleting_an_instance_keeps_the_definition() {
    let Fixture {
        mut plan,
        mut inventory,
        sofa_id,
        ..
    } = fixture();

    let mut items = ItemResolver::new(&mut plan, &mut inventory);
    assert!(items.delete_item(&sofa(0, &sofa_id)));
    assert!(items.delete_item(&sofa(0, &sofa_id)));
    // Nothing left to delete or duplicate, and neither is an error.
    assert!(!items.delete_item(&sofa(0, &sofa_id)));
    assert!(items.duplicate_item(&sofa(0, &sofa_id)).is_none());

    assert!(plan.furniture_instances.is_empty());
    assert!(inventory.contains_key(&sofa_id));
    assert!(resolve(&sofa_id, &plan, &inventory).is_none());
}

#[test]
fn test_duplicate_furniture_reuses_the_definition() {
    let Fixture {
        mut plan,
        mut inventory,
        sofa_id,
        ..
    } = fixture();

    let copy = ItemResolver::new(&mut plan, &mut inventory)
        .duplicate_item(&sofa(1, &sofa_id))
        .unwrap();

    assert_eq!(copy, sofa(2, &sofa_id));
    assert_eq!(inventory.len(), 1);
    let instance = &plan.furniture_instances[2];
    assert_eq!((instance.x, instance.y), (62.0, 146.0));
}

#[test]
fn test_duplicate_room_gets_new_identity() {
    let Fixture {
        mut plan,
        mut inventory,
        room_id,
        ..
    } = fixture();

    let copy = ItemResolver::new(&mut plan, &mut inventory)
        .duplicate_item(&ItemRef::Room(room_id.clone()))
        .unwrap();

    assert_eq!(copy.kind(), ItemKind::Room);
    assert_ne!(copy.id(), room_id);
    let room = plan.room(copy.id()).unwrap();
    assert_eq!(room.name, "Den (Copy)");
    assert_eq!((room.x, room.y), (50.0, 50.0));
    assert_eq!(room.square_footage, 144.0);
}

#[test]
fn test_resolution_order_and_hit_testing() {
    let Fixture {
        plan,
        inventory,
        room_id,
        sofa_id,
    } = fixture();

    assert_eq!(resolve_id(&room_id, &plan, &inventory), Some(ItemRef::Room(room_id.clone())));
    assert_eq!(resolve_id(&sofa_id, &plan, &inventory), Some(sofa(0, &sofa_id)));

    // The second sofa sits on top of the room.
    assert_eq!(hit_test(Point::new(20.0, 100.0), &plan, &inventory), Some(sofa(1, &sofa_id)));
    assert_eq!(
        hit_test(Point::new(130.0, 130.0), &plan, &inventory),
        Some(ItemRef::Room(room_id))
    );
}

#[test]
fn test_swap_furniture_dimensions_edits_definition() {
    let Fixture {
        mut plan,
        mut inventory,
        sofa_id,
        ..
    } = fixture();

    assert!(ItemResolver::new(&mut plan, &mut inventory).swap_dimensions(&sofa(1, &sofa_id)));

    let definition = &inventory[&sofa_id];
    assert_eq!((definition.width, definition.height), (36.0, 84.0));
}
