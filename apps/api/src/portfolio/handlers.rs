use axum::Json;
use serde::Serialize;

use crate::portfolio::data::{
    FeaturedApp, FunFact, SkillCategory, SmallProject, FEATURED_APPS, FUN_FACTS, SKILLS,
    SMALL_PROJECTS,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsResponse {
    pub complete_apps: &'static [FeaturedApp],
    pub small_projects: &'static [SmallProject],
}

/// GET /api/portfolio/skills
pub async fn handle_skills() -> Json<&'static [SkillCategory]> {
    Json(SKILLS)
}

/// GET /api/portfolio/fun-facts
pub async fn handle_fun_facts() -> Json<&'static [FunFact]> {
    Json(FUN_FACTS)
}

/// GET /api/portfolio/projects
pub async fn handle_projects() -> Json<ProjectsResponse> {
    Json(ProjectsResponse {
        complete_apps: FEATURED_APPS,
        small_projects: SMALL_PROJECTS,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::ai_tools::gateway::AiGateway;
    use crate::routes::build_router;
    use crate::state::AppState;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = build_router(AppState {
            gateway: Arc::new(AiGateway::new(Vec::new(), true)),
        });
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_skills_endpoint() {
        let (status, body) = get("/api/portfolio/skills").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Frontend");
        assert_eq!(body[0]["items"][0], "React");
    }

    #[tokio::test]
    async fn test_projects_endpoint_groups_by_kind() {
        let (status, body) = get("/api/portfolio/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["completeApps"].as_array().unwrap().len(), 3);
        assert_eq!(body["smallProjects"][0]["icon"], "bx-cloud");
    }

    #[tokio::test]
    async fn test_fun_facts_endpoint() {
        let (status, body) = get("/api/portfolio/fun-facts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
    }
}
