use nimloth_core::{Error, ParentSlot, Person, PersonId, RelativeRequest, Roster};

fn family() -> Roster {
    Roster::new(vec![
        Person::new(1).with_mother(2).with_father(3),
        Person::new(2).with_name("Maria", "Berg"),
        Person::new(3).with_name("Johan", "Berg"),
        Person::new(4).with_mother(2).with_father(3),
    ])
}

#[test]
fn roster_from_json_keeps_input_order() {
    let roster = Roster::from_json(
        r#"[{"id": 5, "first_name": "E"}, {"id": 2, "first_name": "B"}, {"first_name": "draft"}]"#,
    )
    .unwrap();
    let ids: Vec<_> = roster.persons().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(PersonId(5)), Some(PersonId(2)), None]);
    assert_eq!(roster.get(PersonId(2)).unwrap().first_name, "B");
}

#[test]
fn roster_from_json_rejects_malformed_payload() {
    assert!(matches!(
        Roster::from_json(r#"{"id": 1}"#),
        Err(Error::Json(_))
    ));
}

#[test]
fn roster_children_of_follows_both_slots() {
    let roster = family();
    let mother_children: Vec<_> = roster
        .children_of(PersonId(2))
        .filter_map(|p| p.id)
        .collect();
    let father_children: Vec<_> = roster
        .children_of(PersonId(3))
        .filter_map(|p| p.id)
        .collect();
    assert_eq!(mother_children, vec![PersonId(1), PersonId(4)]);
    assert_eq!(father_children, mother_children);
    assert_eq!(roster.children_of(PersonId(1)).count(), 0);
}

#[test]
fn roster_upsert_replaces_or_appends() {
    let mut roster = family();
    roster.upsert(Person::new(2).with_name("Maria", "Lind"));
    assert_eq!(roster.len(), 4);
    assert_eq!(roster.get(PersonId(2)).unwrap().last_name, "Lind");

    roster.upsert(Person::new(9));
    assert_eq!(roster.len(), 5);
    assert!(roster.contains(PersonId(9)));
    assert_eq!(roster.persons().last().unwrap().id, Some(PersonId(9)));
}

#[test]
fn roster_remove_clears_dangling_parent_links() {
    let mut roster = family();
    let removed = roster.remove(PersonId(2)).unwrap();
    assert_eq!(removed.first_name, "Maria");
    assert!(!roster.contains(PersonId(2)));
    for p in roster.persons() {
        assert_ne!(p.mother, Some(PersonId(2)));
    }
    assert_eq!(roster.get(PersonId(1)).unwrap().father, Some(PersonId(3)));
    assert!(roster.remove(PersonId(2)).is_none());
}

#[test]
fn roster_set_parent_returns_updated_child() {
    let mut roster = family();
    let updated = roster
        .set_parent(PersonId(2), PersonId(3), ParentSlot::Father)
        .unwrap();
    assert_eq!(updated.father, Some(PersonId(3)));
    assert_eq!(roster.get(PersonId(2)).unwrap().father, Some(PersonId(3)));

    assert!(matches!(
        roster.set_parent(PersonId(99), PersonId(3), ParentSlot::Mother),
        Err(Error::UnknownPerson { id: PersonId(99) })
    ));
    assert!(matches!(
        roster.set_parent(PersonId(3), PersonId(3), ParentSlot::Father),
        Err(Error::SelfParent { .. })
    ));
}

#[test]
fn relative_request_links_new_mother() {
    let mut roster = Roster::new(vec![Person::new(1)]);
    let request = RelativeRequest::Mother { child: PersonId(1) };
    let mut created = request.draft();
    created.id = Some(PersonId(7));

    let write_back = request.link(&mut roster, created).unwrap();
    assert_eq!(write_back.id, Some(PersonId(1)));
    assert_eq!(write_back.mother, Some(PersonId(7)));
    assert!(roster.contains(PersonId(7)));
}

#[test]
fn relative_request_links_new_child() {
    let mut roster = Roster::new(vec![Person::new(1)]);
    let request = RelativeRequest::Child {
        parent: PersonId(1),
        slot: ParentSlot::Father,
    };
    let mut created = request.draft();
    created.id = Some(PersonId(8));

    let write_back = request.link(&mut roster, created).unwrap();
    assert_eq!(write_back.id, Some(PersonId(8)));
    assert_eq!(roster.get(PersonId(8)).unwrap().father, Some(PersonId(1)));
}

#[test]
fn relative_request_requires_persisted_record() {
    let mut roster = Roster::new(vec![Person::new(1)]);
    let request = RelativeRequest::Father { child: PersonId(1) };
    assert!(matches!(
        request.link(&mut roster, request.draft()),
        Err(Error::Unsaved)
    ));
}
