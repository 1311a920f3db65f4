//! Family-subset selection: everyone reachable from the focal person through parent and child
//! links, transitively.

use nimloth_core::{Person, PersonId};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

/// Parent/child adjacency over a person slice.
///
/// Child lists keep slice order, which makes traversal order (and so generation assignment on
/// ambiguous pedigrees) a function of input order alone.
#[derive(Debug, Clone, Default)]
pub struct Kinship<'a> {
    by_id: HashMap<PersonId, &'a Person>,
    children: HashMap<PersonId, Vec<PersonId>>,
}

impl<'a> Kinship<'a> {
    pub fn new(persons: &'a [Person]) -> Self {
        let mut by_id: HashMap<PersonId, &'a Person> = HashMap::default();
        let mut children: HashMap<PersonId, Vec<PersonId>> = HashMap::default();
        for p in persons {
            let Some(id) = p.id else { continue };
            by_id.entry(id).or_insert(p);
            // A malformed record with mother == father still lists the child once.
            let mut seen: Option<PersonId> = None;
            for parent in p.parents() {
                if seen == Some(parent) {
                    continue;
                }
                seen = Some(parent);
                children.entry(parent).or_default().push(id);
            }
        }
        Self { by_id, children }
    }

    pub fn person(&self, id: PersonId) -> Option<&'a Person> {
        self.by_id.get(&id).copied()
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn children(&self, id: PersonId) -> &[PersonId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Connected family around `focal`, in `all` order.
///
/// Without a focal person (or one that was never persisted) everyone is returned. Parent ids
/// that do not resolve to a person are skipped without error.
pub fn select_family(all: &[Person], focal: Option<&Person>) -> Vec<Person> {
    let Some(focal_id) = focal.and_then(|p| p.id) else {
        tracing::debug!(persons = all.len(), "no focal person; selecting the whole roster");
        return all.to_vec();
    };

    let kin = Kinship::new(all);
    let mut visited: HashSet<PersonId> = HashSet::default();
    let mut pending: Vec<PersonId> = vec![focal_id];

    while let Some(id) = pending.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(person) = kin.person(id) else {
            tracing::trace!(%id, "reference to a person outside the roster");
            continue;
        };

        pending.extend(person.parents().filter(|p| !visited.contains(p)));
        pending.extend(
            kin.children(id)
                .iter()
                .copied()
                .filter(|c| !visited.contains(c)),
        );
    }

    let family: Vec<Person> = all
        .iter()
        .filter(|p| p.id.is_some_and(|id| visited.contains(&id)))
        .cloned()
        .collect();
    tracing::debug!(
        focal = %focal_id,
        selected = family.len(),
        persons = all.len(),
        "selected family subset"
    );
    family
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(persons: &[Person]) -> Vec<u64> {
        persons.iter().filter_map(|p| p.id).map(|id| id.0).collect()
    }

    #[test]
    fn kinship_lists_children_in_input_order() {
        let persons = vec![
            Person::new(5).with_mother(1),
            Person::new(1),
            Person::new(3).with_mother(1).with_father(2),
        ];
        let kin = Kinship::new(&persons);
        assert_eq!(kin.children(PersonId(1)), &[PersonId(5), PersonId(3)]);
        assert_eq!(kin.children(PersonId(2)), &[PersonId(3)]);
        assert!(kin.children(PersonId(5)).is_empty());
    }

    #[test]
    fn kinship_lists_child_once_when_both_slots_match() {
        let persons = vec![Person::new(2).with_mother(1).with_father(1)];
        assert_eq!(Kinship::new(&persons).children(PersonId(1)), &[PersonId(2)]);
    }

    #[test]
    fn no_focal_returns_everyone() {
        let persons = vec![Person::new(1), Person::new(2)];
        assert_eq!(ids(&select_family(&persons, None)), vec![1, 2]);
        assert_eq!(
            ids(&select_family(&persons, Some(&Person::default()))),
            vec![1, 2]
        );
    }

    #[test]
    fn unknown_focal_selects_nobody() {
        let persons = vec![Person::new(1), Person::new(2)];
        assert!(select_family(&persons, Some(&Person::new(9))).is_empty());
    }

    #[test]
    fn skips_persons_without_id() {
        let mut draft = Person::default();
        draft.mother = Some(PersonId(1));
        let persons = vec![Person::new(1), draft];
        assert_eq!(ids(&select_family(&persons, Some(&Person::new(1)))), vec![1]);
    }

    #[test]
    fn cyclic_ancestry_terminates() {
        // 1 is 2's mother and 2 is 1's mother.
        let persons = vec![Person::new(1).with_mother(2), Person::new(2).with_mother(1)];
        let family = select_family(&persons, Some(&persons[0]));
        assert_eq!(ids(&family), vec![1, 2]);
    }
}
