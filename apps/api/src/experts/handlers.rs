//! Axum route handlers for the Experts API.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::experts::directory::{experts_for, Expert};

#[derive(Debug, Deserialize)]
pub struct ExpertsQuery {
    pub next_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExpertsResponse {
    pub next_role: String,
    pub experts: &'static [Expert],
}

/// GET /api/v1/experts?next_role=<label>
///
/// Experts who can mentor towards the given next role. Unknown labels return an empty list.
pub async fn handle_list_experts(
    Query(query): Query<ExpertsQuery>,
) -> Result<Json<ExpertsResponse>, AppError> {
    let next_role = query
        .next_role
        .filter(|role| !role.trim().is_empty())
        .ok_or_else(|| AppError::Validation("next_role cannot be empty".to_string()))?;

    let experts = experts_for(&next_role);
    info!(next_role = %next_role, count = experts.len(), "Expert lookup");

    Ok(Json(ExpertsResponse { next_role, experts }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(next_role: Option<&str>) -> Query<ExpertsQuery> {
        Query(ExpertsQuery {
            next_role: next_role.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_known_role_lists_experts() {
        let Json(response) = handle_list_experts(query(Some("L&D Manager"))).await.unwrap();
        assert_eq!(response.next_role, "L&D Manager");
        assert_eq!(response.experts.len(), 1);
        assert_eq!(response.experts[0].name, "Meera Reddy");
    }

    #[tokio::test]
    async fn test_unknown_role_is_empty_not_error() {
        let Json(response) = handle_list_experts(query(Some("Group CHRO"))).await.unwrap();
        assert!(response.experts.is_empty());
    }

    #[tokio::test]
    async fn test_missing_or_blank_role_is_rejected() {
        for q in [query(None), query(Some("  "))] {
            let err = handle_list_experts(q).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }
}
