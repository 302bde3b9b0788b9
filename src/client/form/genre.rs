use validator::{Validate, ValidationError};

use crate::model::genre::{GenreDto, GenrePayload};

#[derive(Debug, Clone, Default, Validate)]
pub struct GenreForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Slug is required"),
        custom(function = slug_format, message = "Use lowercase letters, digits, and dashes")
    )]
    pub slug: String,
}

impl GenreForm {
    pub fn from_dto(genre: &GenreDto) -> Self {
        Self {
            name: genre.name.clone(),
            slug: genre.slug.clone(),
        }
    }

    pub fn to_payload(&self) -> GenrePayload {
        GenrePayload {
            name: self.name.trim().to_string(),
            slug: self.slug.trim().to_string(),
        }
    }
}

fn slug_format(slug: &str) -> Result<(), ValidationError> {
    let well_formed = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("slug"))
    }
}
