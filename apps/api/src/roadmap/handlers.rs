//! Axum route handlers for the Roadmap API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::roadmap::catalog::{
    find_track, Track, RESPONSIBILITY_OPTIONS, ROLE_OPTIONS, SKILL_OPTIONS, TRACKS,
};
use crate::roadmap::models::{Roadmap, RoadmapInput};
use crate::roadmap::validation::validate_input;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub expert_connect_delay_secs: u64,
    pub roadmap: Roadmap,
}

#[derive(Debug, Serialize)]
pub struct FormOptionsResponse {
    pub roles: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct TrackSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct TrackListResponse {
    pub tracks: Vec<TrackSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roadmap
///
/// Validates the form submission and builds a roadmap with the configured engine.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(input): Json<RoadmapInput>,
) -> Result<Json<RoadmapResponse>, AppError> {
    validate_input(&input)?;

    let roadmap = state.engine.build(&input);
    let roadmap_id = Uuid::new_v4();

    info!(
        %roadmap_id,
        engine = state.engine.name(),
        track = %roadmap.track_id,
        confidence = roadmap.confidence,
        next_likely_role = roadmap.next_likely_role.as_deref().unwrap_or("-"),
        "Roadmap generated"
    );

    Ok(Json(RoadmapResponse {
        roadmap_id,
        generated_at: Utc::now(),
        expert_connect_delay_secs: state.config.expert_connect_delay_secs,
        roadmap,
    }))
}

/// GET /api/v1/roadmap/options
///
/// The enumerated roles, skills and responsibilities offered by the form.
pub async fn handle_form_options() -> Json<FormOptionsResponse> {
    Json(FormOptionsResponse {
        roles: ROLE_OPTIONS,
        skills: SKILL_OPTIONS,
        responsibilities: RESPONSIBILITY_OPTIONS,
    })
}

/// GET /api/v1/tracks
pub async fn handle_list_tracks() -> Json<TrackListResponse> {
    let tracks = TRACKS
        .iter()
        .map(|t| TrackSummary {
            id: t.id,
            name: t.name,
            keywords: t.keywords,
        })
        .collect();
    Json(TrackListResponse { tracks })
}

/// GET /api/v1/tracks/:id
pub async fn handle_get_track(Path(track_id): Path<String>) -> Result<Json<&'static Track>, AppError> {
    find_track(&track_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Track {track_id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::roadmap::models::FreeText;

    fn test_state() -> AppState {
        AppState::new(Config {
            expert_connect_delay_secs: 12,
            ..Config::default()
        })
    }

    fn recruiter_input() -> RoadmapInput {
        RoadmapInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@company.com".to_string(),
            current_role: "Recruiter".to_string(),
            years_experience: 4.0,
            skills: vec![
                "Recruitment".to_string(),
                "Talent Acquisition".to_string(),
                "HR Operations".to_string(),
            ],
            responsibilities: FreeText::List(vec![
                "Sourcing candidates".to_string(),
                "Interview scheduling".to_string(),
                "Onboarding".to_string(),
            ]),
        }
    }

    #[tokio::test]
    async fn test_generate_roadmap_returns_envelope() {
        let Json(response) = handle_generate_roadmap(State(test_state()), Json(recruiter_input()))
            .await
            .unwrap();

        assert_eq!(response.expert_connect_delay_secs, 12);
        assert_eq!(response.roadmap.track_id, "ta");
        assert_eq!(
            response.roadmap.next_likely_role.as_deref(),
            Some("Senior Recruiter")
        );
        assert_eq!(response.roadmap.next_steps.len(), 3);
        assert_eq!(response.roadmap.monthly_plan.len(), 12);
    }

    #[tokio::test]
    async fn test_generate_roadmap_ids_are_unique() {
        let state = test_state();
        let Json(a) = handle_generate_roadmap(State(state.clone()), Json(recruiter_input()))
            .await
            .unwrap();
        let Json(b) = handle_generate_roadmap(State(state), Json(recruiter_input()))
            .await
            .unwrap();
        assert_ne!(a.roadmap_id, b.roadmap_id);
        assert_eq!(a.roadmap, b.roadmap);
    }

    #[tokio::test]
    async fn test_generate_roadmap_rejects_invalid_form() {
        let mut input = recruiter_input();
        input.email = "not-an-email".to_string();
        input.skills.truncate(1);

        let err = handle_generate_roadmap(State(test_state()), Json(input))
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("email"));
                assert!(msg.contains("skills"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_response_serializes_snake_case() {
        let Json(response) = handle_generate_roadmap(State(test_state()), Json(recruiter_input()))
            .await
            .unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["roadmap_id"].is_string());
        assert!(value["generated_at"].is_string());
        assert_eq!(value["roadmap"]["track"], "Talent Acquisition");
        assert!(value["roadmap"]["next_steps"][0]["skills_impacted"].is_array());
    }

    #[tokio::test]
    async fn test_form_options() {
        let Json(options) = handle_form_options().await;
        assert!(options.roles.contains(&"HR Business Partner (HRBP)"));
        assert!(options.skills.contains(&"Payroll"));
        assert!(options.responsibilities.contains(&"Onboarding"));
    }

    #[tokio::test]
    async fn test_list_tracks_keeps_catalog_order() {
        let Json(list) = handle_list_tracks().await;
        let ids: Vec<&str> = list.tracks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["ta", "hrbp", "cb", "ld", "pa", "ops"]);
    }

    #[tokio::test]
    async fn test_get_track() {
        let Json(track) = handle_get_track(Path("ld".to_string())).await.unwrap();
        assert_eq!(track.name, "Learning & Development");

        let err = handle_get_track(Path("finance".to_string())).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
