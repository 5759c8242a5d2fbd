//! Axum route handlers for the Portfolio extraction API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::pdf_text::decode_pdf;
use crate::extraction::sample::SAMPLE_RESUME;
use crate::extraction::ResumeExtractor;
use crate::models::portfolio::PortfolioData;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub portfolio: PortfolioData,
}

const UPLOAD_FIELD: &str = "file";
const PDF_CONTENT_TYPE: &str = "application/pdf";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/portfolio/extract
///
/// Extracts a portfolio from already-decoded resume text. Blank text is not
/// an error; it yields the all-defaults portfolio.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let portfolio = run_extraction(state.extractor.clone(), request.text).await?;
    Ok(Json(ExtractResponse { portfolio }))
}

/// POST /api/v1/portfolio/upload
///
/// Multipart upload with a `file` part holding a PDF resume.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let pdf = read_pdf_field(&mut multipart).await?;
    info!(bytes = pdf.len(), "Received resume upload");

    let extractor = state.extractor.clone();
    let portfolio = tokio::task::spawn_blocking(move || -> Result<PortfolioData, AppError> {
        let text = decode_pdf(&pdf)?;
        Ok(extractor.extract(&text))
    })
    .await
    .map_err(|e| AppError::Extraction(format!("PDF extraction task failed: {e}")))??;

    Ok(Json(ExtractResponse { portfolio }))
}

/// GET /api/v1/portfolio/sample
///
/// Portfolio extracted from the built-in demo resume.
pub async fn handle_sample(
    State(state): State<AppState>,
) -> Result<Json<ExtractResponse>, AppError> {
    let portfolio = run_extraction(state.extractor.clone(), SAMPLE_RESUME.to_string()).await?;
    Ok(Json(ExtractResponse { portfolio }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn run_extraction(extractor: ResumeExtractor, text: String) -> Result<PortfolioData, AppError> {
    tokio::task::spawn_blocking(move || extractor.extract(&text))
        .await
        .map_err(|e| AppError::Extraction(format!("extraction task failed: {e}")))
}

async fn read_pdf_field(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if !is_pdf_upload(field.content_type(), field.file_name()) {
            return Err(AppError::Validation("Please upload a PDF file.".to_string()));
        }
        return field.bytes().await.map_err(multipart_error);
    }

    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' field in multipart body"
    )))
}

/// Accepts an explicit PDF content type, or a generic/absent one when the
/// file name says `.pdf`.
fn is_pdf_upload(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let named_pdf = file_name.is_some_and(|name| name.to_lowercase().ends_with(".pdf"));
    match content_type.map(|ct| ct.trim().to_lowercase()) {
        Some(ct) if ct == PDF_CONTENT_TYPE => true,
        Some(ct) if ct == "application/octet-stream" => named_pdf,
        Some(_) => false,
        None => named_pdf,
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
    }
}
