use sqlx::sqlite::SqlitePool;
use crate::models::TeamSeasonRow;

/// Point lookup of one season record by its (team, year) key.
pub async fn get_team_season(
    pool: &SqlitePool,
    team: &str,
    year: i64,
) -> Result<Option<TeamSeasonRow>, sqlx::Error> {
    sqlx::query_as::<_, TeamSeasonRow>(
        r#"SELECT * FROM team_seasons WHERE team = ? AND year = ?"#
    )
    .bind(team)
    .bind(year)
    .fetch_optional(pool)
    .await
}
