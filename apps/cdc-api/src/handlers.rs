//! HTTP handlers for the CDC API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use checklist_engine::{apply_analysis, build_report, update_notes, update_status, AssessmentReport};
use tracing::info;

use crate::error::ApiError;
use crate::models::*;
use crate::state::{AppState, Assessment};

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Start a new assessment with the checklist for the chosen project type.
pub async fn create_assessment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentResponse>), ApiError> {
    let assessment = Assessment::new(req.project_type);
    let response = AssessmentResponse::from_assessment(&assessment);
    info!(id = %assessment.id, project_type = %assessment.project_type, "assessment created");

    state
        .assessments
        .write()
        .await
        .insert(assessment.id.clone(), assessment);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Current checklist state with derived progress and gateway flag.
pub async fn get_assessment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let assessments = state.assessments.read().await;
    let assessment = assessments
        .get(&id)
        .ok_or(ApiError::AssessmentNotFound(id))?;
    Ok(Json(AssessmentResponse::from_assessment(assessment)))
}

/// User edit of one item's status and/or notes.
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path((id, item_id)): Path<(String, String)>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    if req.status.is_none() && req.notes.is_none() {
        return Err(ApiError::InvalidRequest(
            "provide at least one of 'status' or 'notes'".to_string(),
        ));
    }

    let mut assessments = state.assessments.write().await;
    let assessment = assessments
        .get_mut(&id)
        .ok_or(ApiError::AssessmentNotFound(id))?;

    if let Some(status) = req.status {
        if !update_status(&mut assessment.categories, &item_id, status) {
            return Err(ApiError::ItemNotFound(item_id));
        }
    }
    if let Some(notes) = &req.notes {
        if !update_notes(&mut assessment.categories, &item_id, notes) {
            return Err(ApiError::ItemNotFound(item_id));
        }
    }

    Ok(Json(AssessmentResponse::from_assessment(assessment)))
}

/// Analyze uploaded documents and merge the AI's verdicts onto the
/// checklist. One AI call per assessment at a time.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let client = state.gemini.clone().ok_or(ApiError::AiUnavailable)?;
    if req.files.is_empty() {
        return Err(ApiError::InvalidRequest("no files supplied".to_string()));
    }

    // Claim the AI slot and snapshot the visible checklist, then release
    // the map lock for the duration of the upstream call.
    let categories = {
        let mut assessments = state.assessments.write().await;
        let assessment = assessments
            .get_mut(&id)
            .ok_or_else(|| ApiError::AssessmentNotFound(id.clone()))?;
        assessment.begin_ai_call()?;
        assessment.categories.clone()
    };

    let outcome = client.analyze_documents(&req.files, &categories).await;

    let mut assessments = state.assessments.write().await;
    let assessment = assessments
        .get_mut(&id)
        .ok_or_else(|| ApiError::AssessmentNotFound(id.clone()))?;
    assessment.finish_ai_call();

    let analysis = outcome?;
    let applied = apply_analysis(&mut assessment.categories, &analysis.results);
    info!(id = %id, applied, results = analysis.results.len(), "analysis merged");
    assessment.metadata = Some(analysis.metadata);

    Ok(Json(AssessmentResponse::from_assessment(assessment)))
}

/// One chat turn with the compliance assistant.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let client = state.gemini.clone().ok_or(ApiError::AiUnavailable)?;
    if req.message.trim().is_empty() {
        return Err(ApiError::InvalidRequest("empty message".to_string()));
    }

    let mut chat = {
        let mut assessments = state.assessments.write().await;
        let assessment = assessments
            .get_mut(&id)
            .ok_or_else(|| ApiError::AssessmentNotFound(id.clone()))?;
        assessment.begin_ai_call()?;
        assessment.chat.clone()
    };

    let outcome = chat.send(&client, req.message.trim()).await;

    let mut assessments = state.assessments.write().await;
    let assessment = assessments
        .get_mut(&id)
        .ok_or_else(|| ApiError::AssessmentNotFound(id.clone()))?;
    assessment.finish_ai_call();
    // The session records the user turn even when the call failed.
    assessment.chat = chat;

    let reply = outcome?;
    Ok(Json(ChatResponse {
        reply,
        history: assessment.chat.history().to_vec(),
    }))
}

/// Printable assessment report: pass/fail, blocking items, full checklist.
pub async fn report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AssessmentReport>, ApiError> {
    let assessments = state.assessments.read().await;
    let assessment = assessments
        .get(&id)
        .ok_or(ApiError::AssessmentNotFound(id))?;

    Ok(Json(build_report(
        assessment.project_type,
        assessment.metadata.clone(),
        &assessment.categories,
    )))
}

/// JSON download of the current metadata and checklist state.
pub async fn export(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let assessments = state.assessments.read().await;
    let assessment = assessments
        .get(&id)
        .ok_or(ApiError::AssessmentNotFound(id))?;

    let document = ExportDocument {
        metadata: assessment.metadata.clone(),
        categories: assessment.categories.clone(),
    };
    let filename = format!("cdc-checklist-{}.json", assessment.project_type);

    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )],
        Json(document),
    ))
}
