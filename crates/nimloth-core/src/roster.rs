//! The full person list as last fetched from the backend.

use rustc_hash::FxHashMap as HashMap;

use crate::error::{Error, Result};
use crate::person::{ParentSlot, Person, PersonId};

/// Input-ordered person list with an id index.
///
/// Order is significant: the layout places members of a generation left to right in roster
/// order, so the roster never re-sorts.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    persons: Vec<Person>,
    index: HashMap<PersonId, usize>,
}

impl Roster {
    pub fn new(persons: Vec<Person>) -> Self {
        let mut roster = Self {
            persons,
            index: HashMap::default(),
        };
        roster.reindex();
        roster
    }

    /// Parses the person-listing endpoint payload (a JSON array of person objects).
    pub fn from_json(text: &str) -> Result<Self> {
        let persons: Vec<Person> = serde_json::from_str(text)?;
        Ok(Self::new(persons))
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (ix, p) in self.persons.iter().enumerate() {
            let Some(id) = p.id else { continue };
            if self.index.insert(id, ix).is_some() {
                tracing::warn!(%id, "duplicate person id in roster; the later record wins lookups");
            }
        }
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn into_persons(self) -> Vec<Person> {
        self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.index.get(&id).map(|&ix| &self.persons[ix])
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.index.contains_key(&id)
    }

    /// Persons listing `id` as mother or father, in roster order.
    pub fn children_of(&self, id: PersonId) -> impl Iterator<Item = &Person> + '_ {
        self.persons.iter().filter(move |p| p.has_parent(id))
    }

    /// Replaces the record with the same id, or appends it (drafts without an id always append).
    pub fn upsert(&mut self, person: Person) {
        match person.id.and_then(|id| self.index.get(&id).copied()) {
            Some(ix) => self.persons[ix] = person,
            None => {
                if let Some(id) = person.id {
                    self.index.insert(id, self.persons.len());
                }
                self.persons.push(person);
            }
        }
    }

    /// Removes a person and clears every `mother`/`father` reference to them.
    pub fn remove(&mut self, id: PersonId) -> Option<Person> {
        let ix = self.index.get(&id).copied()?;
        let removed = self.persons.remove(ix);
        for p in &mut self.persons {
            for slot in [ParentSlot::Mother, ParentSlot::Father] {
                if p.parent(slot) == Some(id) {
                    p.set_parent(slot, None);
                }
            }
        }
        self.reindex();
        Some(removed)
    }

    /// Points `child`'s `slot` at `parent` and returns the updated child for write-back.
    pub fn set_parent(
        &mut self,
        child: PersonId,
        parent: PersonId,
        slot: ParentSlot,
    ) -> Result<Person> {
        if child == parent {
            return Err(Error::SelfParent { id: child, slot });
        }
        let ix = *self
            .index
            .get(&child)
            .ok_or(Error::UnknownPerson { id: child })?;
        let record = &mut self.persons[ix];
        record.set_parent(slot, Some(parent));
        Ok(record.clone())
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<T: IntoIterator<Item = Person>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Person>> for Roster {
    fn from(value: Vec<Person>) -> Self {
        Self::new(value)
    }
}
