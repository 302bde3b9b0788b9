use validator::Validate;

use super::{blank_to_none, optional_url};
use crate::model::actor::{ActorDto, ActorPayload};

#[derive(Debug, Clone, Default, Validate)]
pub struct ActorForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = optional_url, message = "Photo must be a valid URL"))]
    pub photo_url: String,
}

impl ActorForm {
    pub fn from_dto(actor: &ActorDto) -> Self {
        Self {
            name: actor.name.clone(),
            photo_url: actor.photo_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> ActorPayload {
        ActorPayload {
            name: self.name.trim().to_string(),
            photo_url: blank_to_none(&self.photo_url),
        }
    }
}
