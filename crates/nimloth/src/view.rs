//! Change-driven family-tree view.
//!
//! Every state change rebuilds the full layout from the current roster and focal person; there
//! is no incremental patching. A newer rebuild simply replaces the previous result.

use futures::channel::mpsc;
use futures::{FutureExt, Stream, StreamExt};
use nimloth_core::{Person, PersonId, Roster};
use nimloth_layout::{FamilyLayout, LayoutConfig, layout_family};

#[derive(Debug, Clone, PartialEq)]
pub enum PersonEvent {
    /// A fresh person list from the listing endpoint.
    Reloaded(Vec<Person>),
    Created(Person),
    Updated(Person),
    Deleted(PersonId),
    /// The person record of the signed-in user, or `None` when it could not be loaded.
    CurrentUser(Option<Person>),
}

/// Fan-out hub for [`PersonEvent`]s.
#[derive(Debug, Default)]
pub struct PersonEvents {
    subscribers: Vec<mpsc::UnboundedSender<PersonEvent>>,
}

impl PersonEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<PersonEvent> {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Sends `event` to every live subscriber and forgets the ones that hung up.
    pub fn publish(&mut self, event: PersonEvent) {
        self.subscribers
            .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[derive(Debug, Clone)]
pub struct FamilyTreeView {
    roster: Roster,
    current_user: Option<Person>,
    config: LayoutConfig,
    layout: FamilyLayout,
    revision: u64,
}

impl Default for FamilyTreeView {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl FamilyTreeView {
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_roster(Roster::default(), None, config)
    }

    pub fn with_roster(roster: Roster, current_user: Option<Person>, config: LayoutConfig) -> Self {
        let mut view = Self {
            roster,
            current_user,
            config,
            layout: FamilyLayout::default(),
            revision: 0,
        };
        view.rebuild();
        view
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn current_user(&self) -> Option<&Person> {
        self.current_user.as_ref()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self) -> &FamilyLayout {
        &self.layout
    }

    /// Number of rebuilds so far; renderers can skip frames whose revision they already drew.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_config(&mut self, config: LayoutConfig) -> &FamilyLayout {
        self.config = config;
        self.rebuild()
    }

    /// Person behind a tapped node; marriage junctions resolve to `None`.
    pub fn person_for_node(&self, node_id: &str) -> Option<&Person> {
        self.layout.graph.person_for_node(node_id)
    }

    pub fn apply(&mut self, event: PersonEvent) -> &FamilyLayout {
        self.absorb(event);
        self.rebuild()
    }

    /// Applies every event that is ready on `events` and rebuilds once.
    ///
    /// Returns the number of events applied; no rebuild happens when nothing was ready.
    pub fn drain<S>(&mut self, events: &mut S) -> usize
    where
        S: Stream<Item = PersonEvent> + Unpin,
    {
        let mut applied = 0;
        while let Some(Some(event)) = events.next().now_or_never() {
            self.absorb(event);
            applied += 1;
        }
        if applied > 0 {
            self.rebuild();
        }
        applied
    }

    /// Rebuilds after each event and hands the new layout to `on_layout`, until the stream ends.
    pub async fn follow<S, F>(&mut self, mut events: S, mut on_layout: F)
    where
        S: Stream<Item = PersonEvent> + Unpin,
        F: FnMut(&FamilyLayout),
    {
        while let Some(event) = events.next().await {
            on_layout(self.apply(event));
        }
    }

    pub fn rebuild(&mut self) -> &FamilyLayout {
        let wanted = self.current_user.as_ref().and_then(|p| p.id);
        let focal = wanted.and_then(|id| self.roster.get(id));
        if let (Some(id), None) = (wanted, focal) {
            tracing::warn!(%id, "current user not in the roster; showing everyone");
        }
        self.layout = layout_family(self.roster.persons(), focal, focal, &self.config);
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            persons = self.roster.len(),
            family = self.layout.family.len(),
            "rebuilt family tree"
        );
        &self.layout
    }

    fn absorb(&mut self, event: PersonEvent) {
        match event {
            PersonEvent::Reloaded(persons) => self.roster = Roster::new(persons),
            PersonEvent::Created(person) | PersonEvent::Updated(person) => {
                if let (Some(current), Some(id)) = (self.current_user.as_mut(), person.id) {
                    if current.id == Some(id) {
                        *current = person.clone();
                    }
                }
                self.roster.upsert(person);
            }
            PersonEvent::Deleted(id) => {
                if self.roster.remove(id).is_none() {
                    tracing::trace!(%id, "delete for a person not in the roster");
                }
                if self.current_user.as_ref().and_then(|p| p.id) == Some(id) {
                    self.current_user = None;
                }
            }
            PersonEvent::CurrentUser(person) => self.current_user = person,
        }
    }
}
