use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract;
use crate::ingest::{self, fetch::FetchedDocument, DocumentFormat};
use crate::models::resume::ParsedResume;
use crate::state::AppState;

/// Decoded text shorter than this counts as "no extractable text". This is
/// a caller-side floor: the extraction engine itself accepts anything.
const MIN_TEXT_LEN: usize = 10;

#[derive(Debug, Deserialize)]
pub struct ResumeUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    #[serde(rename = "parsedData")]
    pub parsed_data: ParsedResume,
}

#[derive(Debug, Serialize)]
pub struct ViewResumeResponse {
    pub text: String,
}

/// POST /parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeUrlRequest>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let text = fetch_and_decode(&state, &req.url).await?;
    if text.len() < MIN_TEXT_LEN {
        return Err(AppError::UnprocessableEntity(
            "Could not extract text from document".to_string(),
        ));
    }

    let parsed = extract::extract(&text);
    info!(
        name = ?parsed.name,
        skills = parsed.skills.len(),
        education = parsed.education.len(),
        experience = parsed.experience.len(),
        projects = parsed.projects.len(),
        "parsed resume"
    );
    Ok(Json(ParseResumeResponse { parsed_data: parsed }))
}

/// POST /view-resume
/// Returns the raw decoded text without running the extraction engine.
pub async fn handle_view_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeUrlRequest>,
) -> Result<Json<ViewResumeResponse>, AppError> {
    let text = fetch_and_decode(&state, &req.url).await?;
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract text from the resume".to_string(),
        ));
    }
    Ok(Json(ViewResumeResponse { text }))
}

/// Downloads the document and decodes it to text. Decoder failures degrade
/// to empty text, which the length floor above turns into a 422.
async fn fetch_and_decode(state: &AppState, url: &str) -> Result<String, AppError> {
    let doc = ingest::fetch::download(&state.http, url).await?;
    let format = resolve_format(&doc)?;
    let text = match ingest::extract_text(&doc.bytes, format) {
        Ok(text) => text,
        Err(e) => {
            warn!("failed to decode document: {e:#}");
            String::new()
        }
    };
    info!(format = ?format, chars = text.len(), "decoded document");
    Ok(text)
}

fn resolve_format(doc: &FetchedDocument) -> Result<DocumentFormat, AppError> {
    ingest::detect_format(&doc.bytes)
        .or_else(|| {
            doc.content_type
                .as_deref()
                .and_then(ingest::format_from_content_type)
        })
        .ok_or_else(|| {
            AppError::UnsupportedMedia(format!(
                "Unsupported file format: {}",
                doc.content_type.as_deref().unwrap_or("unknown")
            ))
        })
}
