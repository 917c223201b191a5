use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::{RosterLink, ScheduleLink, TeamSeason};

const TEAM_PAGE_BASE: &str = "https://www.basketball-reference.com/teams";

/// GET /v1/nba/{team}/{year} - Full season record for a team
pub async fn get_team_season(
    State(pool): State<SqlitePool>,
    Path((team, year)): Path<(String, String)>,
) -> Result<Json<TeamSeason>, ApiError> {
    let year = parse_year(&year)?;

    let row = db::get_team_season(&pool, &team, year)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.to_team_season()?))
}

/// GET /v1/nba/{team}/{year}/roster - Link to the reference roster page
pub async fn get_roster_link(
    Path((team, year)): Path<(String, String)>,
) -> Result<Json<RosterLink>, ApiError> {
    let parsed = parse_year(&year)?;

    Ok(Json(RosterLink {
        roster: format!("{TEAM_PAGE_BASE}/{team}/{year}.html"),
        team,
        year: parsed,
    }))
}

/// GET /v1/nba/{team}/{year}/schedule - Link to the reference schedule page
pub async fn get_schedule_link(
    Path((team, year)): Path<(String, String)>,
) -> Result<Json<ScheduleLink>, ApiError> {
    let parsed = parse_year(&year)?;

    Ok(Json(ScheduleLink {
        schedule: format!("{TEAM_PAGE_BASE}/{team}/{year}_games.html"),
        team,
        year: parsed,
    }))
}

/// The year segment arrives as text and must parse as an integer. Derived
/// URLs splice in the raw segment, not the parsed value.
fn parse_year(segment: &str) -> Result<i64, ApiError> {
    segment.parse().map_err(|_| ApiError::InvalidYear)
}
