//! Tag response DTOs

use serde::Serialize;

use crate::models::Tag;

/// Tag list response
#[derive(Debug, Serialize)]
pub struct TagsListResponse {
    pub tags: Vec<Tag>,
}

/// Single tag envelope
#[derive(Debug, Serialize)]
pub struct TagEnvelope {
    pub tag: Tag,
}

/// Tag delete response
#[derive(Debug, Serialize)]
pub struct DeleteTagResponse {
    pub message: String,
}
