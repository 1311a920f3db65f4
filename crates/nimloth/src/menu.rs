//! Context menu for adding relatives to a person node.

use nimloth_core::{ParentSlot, Person, RelativeRequest};
use nimloth_layout::{FamilyGraph, Point};

/// Anything a UI toolkit reports for a pointer interaction on the graph.
pub trait PointerEvent {
    /// Pointer position in graph coordinates.
    fn position(&self) -> Point;
}

impl PointerEvent for Point {
    fn position(&self) -> Point {
        *self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelativeMenu {
    selected: Option<Person>,
    position: Point,
    visible: bool,
}

impl RelativeMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn selected(&self) -> Option<&Person> {
        self.selected.as_ref()
    }

    /// Opens the menu for `person` at the pointer position.
    ///
    /// Persons without an id cannot have relatives attached; the menu stays closed for them.
    pub fn open(&mut self, person: &Person, event: &impl PointerEvent) -> bool {
        if person.id.is_none() {
            return false;
        }
        self.selected = Some(person.clone());
        self.position = event.position();
        self.visible = true;
        true
    }

    /// Opens the menu for the person behind `node_id`; marriage nodes are ignored.
    pub fn open_for_node(
        &mut self,
        graph: &FamilyGraph,
        node_id: &str,
        event: &impl PointerEvent,
    ) -> bool {
        match graph.person_for_node(node_id) {
            Some(person) => self.open(person, event),
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn add_mother(&mut self) -> Option<RelativeRequest> {
        self.take_parent_request(ParentSlot::Mother)
    }

    pub fn add_father(&mut self) -> Option<RelativeRequest> {
        self.take_parent_request(ParentSlot::Father)
    }

    /// Child request linked through the selected person's default parent slot.
    pub fn add_child(&mut self) -> Option<RelativeRequest> {
        let request = RelativeRequest::child_of(self.selected.as_ref()?).ok();
        self.close();
        request
    }

    fn take_parent_request(&mut self, slot: ParentSlot) -> Option<RelativeRequest> {
        let child = self.selected.as_ref()?.id?;
        self.close();
        Some(RelativeRequest::parent_of(child, slot))
    }
}
