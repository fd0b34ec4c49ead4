//! Dictation domain models and parameters.
//!
//! A dictation is the reference an attempt is scored against. Text dictations carry
//! their reference in `content`; audio dictations point at a recording and may have
//! no text at all.

use std::fmt;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::dictation::{CreateDictationDto, DictationDto},
    server::error::AppError,
};

/// Source type of a dictation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationKind {
    Text,
    Audio,
}

impl DictationKind {
    /// Column value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Audio => "audio",
        }
    }

    /// Parses a kind from its stored or requested representation.
    ///
    /// # Returns
    /// - `Ok(DictationKind)` - `text` or `audio`
    /// - `Err(AppError::BadRequest)` - Any other value
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "text" => Ok(Self::Text),
            "audio" => Ok(Self::Audio),
            other => Err(AppError::BadRequest(format!(
                "type must be 'text' or 'audio', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for DictationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dictation with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictation {
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    pub title: String,
    pub kind: DictationKind,
    pub content: Option<String>,
    pub audio_url: Option<String>,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

impl Dictation {
    /// Text attempts are scored against. Empty when the dictation has no text content.
    pub fn reference_text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Converts the dictation domain model to a DTO for API responses.
    pub fn into_dto(self) -> DictationDto {
        DictationDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            kind: self.kind.to_string(),
            content: self.content,
            audio_url: self.audio_url,
            language: self.language,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a dictation domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Dictation)` - The converted dictation
    /// - `Err(DbErr::Custom)` - Stored kind is not recognized
    pub fn from_entity(entity: entity::dictation::Model) -> Result<Self, DbErr> {
        let kind = DictationKind::parse(&entity.kind).map_err(|_| {
            DbErr::Custom(format!(
                "Dictation {} has unknown kind '{}'",
                entity.id, entity.kind
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            kind,
            content: entity.content,
            audio_url: entity.audio_url,
            language: entity.language,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a dictation.
#[derive(Debug, Clone)]
pub struct CreateDictationParams {
    pub user_id: i32,
    pub title: String,
    pub kind: DictationKind,
    pub content: Option<String>,
    pub audio_url: Option<String>,
    pub language: String,
}

impl CreateDictationParams {
    /// Builds creation parameters for `user_id` from the request body.
    ///
    /// Text dictations require non-empty `content`; audio dictations require `audio_url`.
    ///
    /// # Returns
    /// - `Ok(CreateDictationParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Missing title, unknown type, or missing source
    pub fn from_dto(user_id: i32, dto: CreateDictationDto) -> Result<Self, AppError> {
        let kind = DictationKind::parse(&dto.kind)?;

        if dto.title.trim().is_empty() {
            return Err(AppError::BadRequest("title is required".to_string()));
        }

        let content = dto.content.filter(|c| !c.trim().is_empty());
        let audio_url = dto.audio_url.filter(|u| !u.trim().is_empty());

        match kind {
            DictationKind::Text if content.is_none() => {
                return Err(AppError::BadRequest(
                    "content is required for text dictations".to_string(),
                ))
            }
            DictationKind::Audio if audio_url.is_none() => {
                return Err(AppError::BadRequest(
                    "audio_url is required for audio dictations".to_string(),
                ))
            }
            _ => {}
        }

        Ok(Self {
            user_id,
            title: dto.title,
            kind,
            content,
            audio_url,
            language: dto.language,
        })
    }
}
