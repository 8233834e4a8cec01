//! Item resolution
//!
//! Rooms own their geometry while furniture instances only carry a position
//! and borrow their size from a shared [`FurnitureDefinition`]. This module
//! hides that difference behind [`ItemRef`] and [`PlaceableItem`] so that
//! dragging, resizing and deleting go through one code path.
//!
//! Every mutator quietly does nothing when its item no longer resolves.
//! Gesture callbacks routinely race with deletions, so a miss is expected.
//!
//! [`FurnitureDefinition`]: floorplanner_core::FurnitureDefinition

use floorplanner_core::{FloorPlan, FurnitureInstance, Inventory, Point};
use std::fmt;

/// Which storage shape an item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Room,
    Furniture,
}

/// A resolved reference to one item in a floor plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemRef {
    /// A room, by id.
    Room(String),
    /// A furniture instance, by position in `furniture_instances`, along
    /// with the definition it references.
    Furniture { index: usize, furniture_id: String },
}

impl ItemRef {
    /// The public id: the room id or the furniture definition id.
    pub fn id(&self) -> &str {
        match self {
            ItemRef::Room(id) => id,
            ItemRef::Furniture { furniture_id, .. } => furniture_id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ItemRef::Room(_) => ItemKind::Room,
            ItemRef::Furniture { .. } => ItemKind::Furniture,
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Room(id) => write!(f, "room {id}"),
            ItemRef::Furniture {
                index,
                furniture_id,
            } => write!(f, "furniture {furniture_id} #{index}"),
        }
    }
}

/// Position and size of an item, whatever its storage shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceableItem {
    pub item: ItemRef,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlaceableItem {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `point` falls inside the item (edges included).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Find the index of a furniture instance, preferring `index` when it still
/// holds `furniture_id` and otherwise falling back to the first match.
fn instance_index(floor_plan: &FloorPlan, index: usize, furniture_id: &str) -> Option<usize> {
    match floor_plan.furniture_instances.get(index) {
        Some(instance) if instance.furniture_id == furniture_id => Some(index),
        _ => floor_plan.instance_index(furniture_id),
    }
}

/// Resolve an id to an item. Rooms are checked first, then furniture
/// instances whose definition exists; the first match wins.
pub fn resolve_id(id: &str, floor_plan: &FloorPlan, inventory: &Inventory) -> Option<ItemRef> {
    if floor_plan.room(id).is_some() {
        return Some(ItemRef::Room(id.to_string()));
    }
    if !inventory.contains_key(id) {
        return None;
    }
    floor_plan
        .instance_index(id)
        .map(|index| ItemRef::Furniture {
            index,
            furniture_id: id.to_string(),
        })
}

/// The placeable view of `item`, or `None` if it no longer resolves.
///
/// A stale furniture index is re-resolved by id, so the returned
/// [`PlaceableItem::item`] may differ from the one passed in.
pub fn placeable(item: &ItemRef, floor_plan: &FloorPlan, inventory: &Inventory) -> Option<PlaceableItem> {
    match item {
        ItemRef::Room(id) => floor_plan.room(id).map(|room| PlaceableItem {
            item: item.clone(),
            x: room.x,
            y: room.y,
            width: room.width,
            height: room.height,
        }),
        ItemRef::Furniture {
            index,
            furniture_id,
        } => {
            let definition = inventory.get(furniture_id)?;
            let index = instance_index(floor_plan, *index, furniture_id)?;
            let instance = &floor_plan.furniture_instances[index];
            Some(PlaceableItem {
                item: ItemRef::Furniture {
                    index,
                    furniture_id: furniture_id.clone(),
                },
                x: instance.x,
                y: instance.y,
                width: definition.width,
                height: definition.height,
            })
        }
    }
}

/// Resolve an id straight to its placeable view.
pub fn resolve(id: &str, floor_plan: &FloorPlan, inventory: &Inventory) -> Option<PlaceableItem> {
    resolve_id(id, floor_plan, inventory).and_then(|item| placeable(&item, floor_plan, inventory))
}

/// The topmost item under a document point.
///
/// Furniture is drawn above rooms and later items above earlier ones, so
/// furniture is searched first and both lists are searched back to front.
pub fn hit_test(point: Point, floor_plan: &FloorPlan, inventory: &Inventory) -> Option<ItemRef> {
    let furniture: Vec<_> = floor_plan.visible_furniture(inventory).collect();
    let furniture_hit = furniture.into_iter().rev().find_map(|placed| {
        let view = PlaceableItem {
            item: ItemRef::Furniture {
                index: placed.index,
                furniture_id: placed.definition.id.clone(),
            },
            x: placed.x(),
            y: placed.y(),
            width: placed.width(),
            height: placed.height(),
        };
        view.contains(point).then_some(view.item)
    });
    if furniture_hit.is_some() {
        return furniture_hit;
    }

    floor_plan.rooms.iter().rev().find_map(|room| {
        let view = PlaceableItem {
            item: ItemRef::Room(room.id.clone()),
            x: room.x,
            y: room.y,
            width: room.width,
            height: room.height,
        };
        view.contains(point).then_some(view.item)
    })
}

/// Mutable access to a floor plan and its inventory through [`ItemRef`]s.
pub struct ItemResolver<'a> {
    floor_plan: &'a mut FloorPlan,
    inventory: &'a mut Inventory,
}

impl<'a> ItemResolver<'a> {
    pub fn new(floor_plan: &'a mut FloorPlan, inventory: &'a mut Inventory) -> Self {
        Self {
            floor_plan,
            inventory,
        }
    }

    fn furniture_index(&self, index: usize, furniture_id: &str) -> Option<usize> {
        if !self.inventory.contains_key(furniture_id) {
            return None;
        }
        instance_index(self.floor_plan, index, furniture_id)
    }

    /// Move an item. Furniture moves its instance, never the definition.
    pub fn move_item(&mut self, item: &ItemRef, x: f64, y: f64) -> bool {
        match item {
            ItemRef::Room(id) => match self.floor_plan.room_mut(id) {
                Some(room) => {
                    room.set_position(x, y);
                    true
                }
                None => false,
            },
            ItemRef::Furniture {
                index,
                furniture_id,
            } => match self.furniture_index(*index, furniture_id) {
                Some(index) => {
                    let instance = &mut self.floor_plan.furniture_instances[index];
                    instance.x = x;
                    instance.y = y;
                    true
                }
                None => false,
            },
        }
    }

    /// Resize an item. Rooms refresh their square footage; furniture edits
    /// the shared definition, which resizes every instance of it.
    pub fn resize_item(&mut self, item: &ItemRef, width: f64, height: f64) -> bool {
        match item {
            ItemRef::Room(id) => match self.floor_plan.room_mut(id) {
                Some(room) => {
                    room.set_size(width, height);
                    true
                }
                None => false,
            },
            ItemRef::Furniture {
                index,
                furniture_id,
            } => {
                if self.furniture_index(*index, furniture_id).is_none() {
                    return false;
                }
                match self.inventory.get_mut(furniture_id) {
                    Some(definition) => {
                        definition.width = width;
                        definition.height = height;
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Delete an item. A deleted furniture instance leaves its definition
    /// in the inventory.
    pub fn delete_item(&mut self, item: &ItemRef) -> bool {
        match item {
            ItemRef::Room(id) => {
                let before = self.floor_plan.rooms.len();
                self.floor_plan.rooms.retain(|room| &room.id != id);
                self.floor_plan.rooms.len() != before
            }
            ItemRef::Furniture {
                index,
                furniture_id,
            } => match instance_index(self.floor_plan, *index, furniture_id) {
                Some(index) => {
                    self.floor_plan.furniture_instances.remove(index);
                    true
                }
                None => false,
            },
        }
    }

    /// Duplicate an item, offset diagonally. Rooms get a fresh id and a
    /// "(Copy)" name; furniture gets a new instance of the same definition.
    pub fn duplicate_item(&mut self, item: &ItemRef) -> Option<ItemRef> {
        match item {
            ItemRef::Room(id) => {
                let copy = self.floor_plan.room(id)?.duplicate();
                let new_ref = ItemRef::Room(copy.id.clone());
                self.floor_plan.rooms.push(copy);
                Some(new_ref)
            }
            ItemRef::Furniture {
                index,
                furniture_id,
            } => {
                let index = self.furniture_index(*index, furniture_id)?;
                let copy: FurnitureInstance = self.floor_plan.furniture_instances[index].duplicate();
                self.floor_plan.furniture_instances.push(copy);
                Some(ItemRef::Furniture {
                    index: self.floor_plan.furniture_instances.len() - 1,
                    furniture_id: furniture_id.clone(),
                })
            }
        }
    }

    /// Swap width and height.
    pub fn swap_dimensions(&mut self, item: &ItemRef) -> bool {
        match placeable(item, self.floor_plan, self.inventory) {
            Some(view) => self.resize_item(item, view.height, view.width),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplanner_core::{FurnitureDefinition, Livability, Room};

    fn fixture() -> (FloorPlan, Inventory, String, String) {
        let room = Room::new("Living", 120.0, 240.0, Livability::Livable).at(0.0, 0.0);
        let chair = FurnitureDefinition::new("Chair", "Chair", 24.0, 24.0, "#A0522D");
        let mut plan = FloorPlan::default();
        plan.rooms.push(room.clone());
        plan.furniture_instances
            .push(FurnitureInstance::new(chair.id.clone(), 12.0, 12.0));
        let mut inventory = Inventory::new();
        inventory.insert(chair.id.clone(), chair.clone());
        (plan, inventory, room.id, chair.id)
    }

    #[test]
    fn test_resolve_prefers_rooms_then_furniture() {
        let (plan, inventory, room_id, chair_id) = fixture();
        assert_eq!(
            resolve_id(&room_id, &plan, &inventory),
            Some(ItemRef::Room(room_id.clone()))
        );
        let chair = resolve(&chair_id, &plan, &inventory).unwrap();
        assert_eq!(chair.item.kind(), ItemKind::Furniture);
        assert_eq!((chair.x, chair.width), (12.0, 24.0));
        assert!(resolve("nope", &plan, &inventory).is_none());
    }

    #[test]
    fn test_dangling_instance_does_not_resolve() {
        let (mut plan, inventory, _, _) = fixture();
        plan.furniture_instances
            .push(FurnitureInstance::new("ghost", 0.0, 0.0));
        assert!(resolve("ghost", &plan, &inventory).is_none());
    }

    #[test]
    fn test_hit_test_prefers_furniture() {
        let (plan, inventory, room_id, chair_id) = fixture();
        let hit = hit_test(Point::new(20.0, 20.0), &plan, &inventory).unwrap();
        assert_eq!(hit.id(), chair_id);
        let hit = hit_test(Point::new(100.0, 200.0), &plan, &inventory).unwrap();
        assert_eq!(hit, ItemRef::Room(room_id));
        assert!(hit_test(Point::new(500.0, 500.0), &plan, &inventory).is_none());
    }

    #[test]
    fn test_stale_index_falls_back_to_id() {
        let (mut plan, mut inventory, _, chair_id) = fixture();
        let stale = ItemRef::Furniture {
            index: 7,
            furniture_id: chair_id.clone(),
        };
        assert!(ItemResolver::new(&mut plan, &mut inventory).move_item(&stale, 48.0, 60.0));
        assert_eq!(plan.furniture_instances[0].x, 48.0);
    }

    #[test]
    fn test_mutators_ignore_missing_items() {
        let (mut plan, mut inventory, _, _) = fixture();
        let before = plan.clone();
        let missing = ItemRef::Room("gone".to_string());
        let mut resolver = ItemResolver::new(&mut plan, &mut inventory);
        assert!(!resolver.move_item(&missing, 1.0, 1.0));
        assert!(!resolver.resize_item(&missing, 10.0, 10.0));
        assert!(!resolver.delete_item(&missing));
        assert!(resolver.duplicate_item(&missing).is_none());
        assert!(!resolver.swap_dimensions(&missing));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_swap_room_dimensions() {
        let (mut plan, mut inventory, room_id, _) = fixture();
        let item = ItemRef::Room(room_id.clone());
        assert!(ItemResolver::new(&mut plan, &mut inventory).swap_dimensions(&item));
        let room = plan.room(&room_id).unwrap();
        assert_eq!((room.width, room.height), (240.0, 120.0));
        assert_eq!(room.square_footage, 200.0);
    }
}
