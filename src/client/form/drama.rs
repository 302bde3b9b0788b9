use validator::Validate;

use crate::model::actor::ActorDto;
use crate::model::drama::{CastEntryPayload, CastMemberDto, CastRole, DramaDto, DramaPayload, DramaStatus};

#[derive(Debug, Clone, Validate)]
pub struct DramaForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 10, message = "Synopsis must be at least 10 characters"))]
    pub synopsis: String,
    #[validate(url(message = "Poster must be a valid URL"))]
    pub poster_url: String,
    #[validate(range(min = 1950, max = 2100, message = "Year must be between 1950 and 2100"))]
    pub year: i32,
    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: f32,
    #[validate(range(min = 0, max = 100, message = "Season count must be between 0 and 100"))]
    pub total_seasons: i32,
    pub status: DramaStatus,
    pub genre_ids: Vec<i64>,
    pub cast: Vec<CastMemberDto>,
}

impl Default for DramaForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            synopsis: String::new(),
            poster_url: String::new(),
            year: 2024,
            rating: 0.0,
            total_seasons: 1,
            status: DramaStatus::Ongoing,
            genre_ids: Vec::new(),
            cast: Vec::new(),
        }
    }
}

impl DramaForm {
    pub fn from_dto(drama: &DramaDto) -> Self {
        Self {
            title: drama.title.clone(),
            synopsis: drama.synopsis.clone(),
            poster_url: drama.poster_url.clone(),
            year: drama.year,
            rating: drama.rating,
            total_seasons: drama.total_seasons,
            status: drama.status,
            genre_ids: drama.genres.iter().map(|genre| genre.id).collect(),
            cast: drama.cast.clone(),
        }
    }

    pub fn to_payload(&self) -> DramaPayload {
        DramaPayload {
            title: self.title.trim().to_string(),
            synopsis: self.synopsis.trim().to_string(),
            poster_url: self.poster_url.trim().to_string(),
            year: self.year,
            rating: self.rating,
            total_seasons: self.total_seasons,
            status: self.status,
            genre_ids: self.genre_ids.clone(),
            cast: self
                .cast
                .iter()
                .map(|member| CastEntryPayload {
                    actor_id: member.actor.id,
                    role: member.role,
                })
                .collect(),
        }
    }

    /// Adds an actor to the cast with the given role. An actor already in
    /// the cast is rejected; the caller surfaces the message.
    pub fn add_cast(&mut self, actor: ActorDto, role: CastRole) -> Result<(), &'static str> {
        if self.cast.iter().any(|member| member.actor.id == actor.id) {
            return Err("Already in the cast");
        }
        self.cast.push(CastMemberDto { actor, role });
        Ok(())
    }

    /// Pure client-side removal; the server only hears about it when the
    /// form is submitted with the remaining cast.
    pub fn remove_cast(&mut self, actor_id: i64) {
        self.cast.retain(|member| member.actor.id != actor_id);
    }

    pub fn toggle_genre(&mut self, genre_id: i64) {
        if let Some(index) = self.genre_ids.iter().position(|id| *id == genre_id) {
            self.genre_ids.remove(index);
        } else {
            self.genre_ids.push(genre_id);
        }
    }

    pub fn has_genre(&self, genre_id: i64) -> bool {
        self.genre_ids.contains(&genre_id)
    }
}
