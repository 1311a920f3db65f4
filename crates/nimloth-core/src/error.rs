use crate::person::PersonId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown person: {id}")]
    UnknownPerson { id: PersonId },

    #[error("person has no id yet; persist it before linking relatives")]
    Unsaved,

    #[error("person {id} cannot be their own {slot}")]
    SelfParent { id: PersonId, slot: crate::ParentSlot },

    #[error("person list JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
