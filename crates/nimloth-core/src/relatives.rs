//! "Add mother / father / child" requests raised from a person node.
//!
//! A request is a two-step exchange with the backend: [`RelativeRequest::draft`] produces the
//! unsaved record to show in the create form, and once the collaborator has stored it,
//! [`RelativeRequest::link`] wires the new record into the roster and names the record that
//! has to be written back.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::person::{Gender, ParentSlot, Person, PersonId};
use crate::roster::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "relationship", rename_all = "lowercase")]
pub enum RelativeRequest {
    Mother { child: PersonId },
    Father { child: PersonId },
    Child { parent: PersonId, slot: ParentSlot },
}

impl RelativeRequest {
    pub fn parent_of(child: PersonId, slot: ParentSlot) -> Self {
        match slot {
            ParentSlot::Mother => RelativeRequest::Mother { child },
            ParentSlot::Father => RelativeRequest::Father { child },
        }
    }

    /// A child request for `parent`, linked through the slot implied by their gender.
    pub fn child_of(parent: &Person) -> Result<Self> {
        let id = parent.id.ok_or(Error::Unsaved)?;
        Ok(RelativeRequest::Child {
            parent: id,
            slot: parent.gender.default_parent_slot(),
        })
    }

    /// The person the request was raised from.
    pub fn anchor(&self) -> PersonId {
        match *self {
            RelativeRequest::Mother { child } | RelativeRequest::Father { child } => child,
            RelativeRequest::Child { parent, .. } => parent,
        }
    }

    pub fn draft(&self) -> Person {
        match *self {
            RelativeRequest::Mother { .. } => Person::default().with_gender(Gender::Female),
            RelativeRequest::Father { .. } => Person::default().with_gender(Gender::Male),
            RelativeRequest::Child { parent, slot } => {
                let mut child = Person::default();
                child.set_parent(slot, Some(parent));
                child
            }
        }
    }

    /// Inserts the stored record into `roster` and returns the record to write back.
    ///
    /// For a parent request that is the anchor child with its new parent link; for a child
    /// request it is the created child itself.
    pub fn link(&self, roster: &mut Roster, created: Person) -> Result<Person> {
        let created_id = created.id.ok_or(Error::Unsaved)?;
        match *self {
            RelativeRequest::Mother { child } | RelativeRequest::Father { child } => {
                if !roster.contains(child) {
                    return Err(Error::UnknownPerson { id: child });
                }
                let slot = match self {
                    RelativeRequest::Mother { .. } => ParentSlot::Mother,
                    _ => ParentSlot::Father,
                };
                roster.upsert(created);
                roster.set_parent(child, created_id, slot)
            }
            RelativeRequest::Child { .. } => {
                roster.upsert(created.clone());
                Ok(created)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_of_uses_gender_slot() {
        let father = Person::new(4).with_gender(Gender::Male);
        assert_eq!(
            RelativeRequest::child_of(&father).unwrap(),
            RelativeRequest::Child {
                parent: PersonId(4),
                slot: ParentSlot::Father
            }
        );
        assert!(matches!(
            RelativeRequest::child_of(&Person::default()),
            Err(Error::Unsaved)
        ));
    }

    #[test]
    fn child_draft_is_prelinked() {
        let req = RelativeRequest::Child {
            parent: PersonId(9),
            slot: ParentSlot::Mother,
        };
        let draft = req.draft();
        assert_eq!(draft.id, None);
        assert_eq!(draft.mother, Some(PersonId(9)));
        assert_eq!(draft.father, None);
    }

    #[test]
    fn parent_drafts_preset_gender() {
        let child = PersonId(1);
        assert_eq!(
            RelativeRequest::Mother { child }.draft().gender,
            Gender::Female
        );
        assert_eq!(RelativeRequest::Father { child }.draft().gender, Gender::Male);
    }

    #[test]
    fn serializes_with_relationship_tag() {
        let json = serde_json::to_value(RelativeRequest::Father {
            child: PersonId(5),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"relationship": "father", "child": 5}));
    }
}
