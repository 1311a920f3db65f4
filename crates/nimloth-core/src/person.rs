//! Person records as served by the person-listing endpoint.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::Elapsed;

/// Database id of a persisted person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PersonId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "N")]
    NonBinary,
    #[default]
    #[serde(rename = "U")]
    Unspecified,
}

impl Gender {
    /// Parent field a new child of a person with this gender is linked through.
    ///
    /// Non-binary and unspecified parents default to the mother slot; the user can still move
    /// the link while editing the child.
    pub fn default_parent_slot(self) -> ParentSlot {
        match self {
            Gender::Male => ParentSlot::Father,
            Gender::Female | Gender::NonBinary | Gender::Unspecified => ParentSlot::Mother,
        }
    }
}

/// One of the two parent foreign keys on a [`Person`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentSlot {
    Mother,
    Father,
}

impl ParentSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            ParentSlot::Mother => "mother",
            ParentSlot::Father => "father",
        }
    }
}

impl fmt::Display for ParentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// `None` until the backend has stored the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub birth_name: String,
    pub artist_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: String,
    pub date_of_death: Option<NaiveDate>,
    pub place_of_death: String,
    pub cause_of_death: String,
    pub mother: Option<PersonId>,
    pub father: Option<PersonId>,
    pub gender: Gender,
}

impl Person {
    pub fn new(id: u64) -> Self {
        Self {
            id: Some(PersonId(id)),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, first: &str, last: &str) -> Self {
        self.first_name = first.to_string();
        self.last_name = last.to_string();
        self
    }

    pub fn with_mother(mut self, mother: u64) -> Self {
        self.mother = Some(PersonId(mother));
        self
    }

    pub fn with_father(mut self, father: u64) -> Self {
        self.father = Some(PersonId(father));
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn parent(&self, slot: ParentSlot) -> Option<PersonId> {
        match slot {
            ParentSlot::Mother => self.mother,
            ParentSlot::Father => self.father,
        }
    }

    pub fn set_parent(&mut self, slot: ParentSlot, parent: Option<PersonId>) {
        match slot {
            ParentSlot::Mother => self.mother = parent,
            ParentSlot::Father => self.father = parent,
        }
    }

    /// Recorded parents, mother first.
    pub fn parents(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.mother.into_iter().chain(self.father)
    }

    pub fn has_parent(&self, id: PersonId) -> bool {
        self.mother == Some(id) || self.father == Some(id)
    }

    /// First, middle and last name joined by single spaces; empty parts are skipped.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.date_of_birth.map(|d| d.year())
    }

    pub fn death_year(&self) -> Option<i32> {
        self.date_of_death.map(|d| d.year())
    }

    /// Node label for the graph view.
    ///
    /// `"Ada Lovelace\n(1815 - 1852)"`; the year line is only added when at least one year is
    /// known, with `?` standing in for the missing one.
    pub fn graph_label(&self) -> String {
        let name = self.full_name();
        let mut label = if name.is_empty() {
            "Unknown".to_string()
        } else {
            name
        };

        let birth = self.birth_year();
        let death = self.death_year();
        if birth.is_some() || death.is_some() {
            let year = |y: Option<i32>| y.map_or_else(|| "?".to_string(), |y| y.to_string());
            label.push_str(&format!("\n({} - {})", year(birth), year(death)));
        }
        label
    }

    pub fn time_since_birth(&self, today: NaiveDate) -> Option<Elapsed> {
        Elapsed::between(self.date_of_birth?, today)
    }

    pub fn time_since_death(&self, today: NaiveDate) -> Option<Elapsed> {
        Elapsed::between(self.date_of_death?, today)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.full_name();
        match (name.is_empty(), self.id) {
            (false, _) => f.write_str(&name),
            (true, Some(id)) => write!(f, "Person {id}"),
            (true, None) => f.write_str("Person"),
        }
    }
}
