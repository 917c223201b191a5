use serde::{Serialize, Deserialize};

/// Per-split counting and efficiency figures for one player.
/// The ingestion pipeline ships these as preformatted text, so they are
/// carried verbatim rather than parsed into numbers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StatSplit {
    #[serde(rename = "G")]
    pub games: String,
    #[serde(rename = "PER")]
    pub per: String,
    #[serde(rename = "TS%")]
    pub true_shooting: String,
    #[serde(rename = "WS")]
    pub win_shares: String,
}

/// One roster entry: a player's regular-season and playoff lines.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerStatLine {
    pub name: String,
    pub regular_season: StatSplit,
    pub playoffs: StatSplit,
}

/// A single team's record for one year, as served to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamSeason {
    pub team: String,
    pub full_name: String,
    pub year: i64,
    pub roster_url: String,
    pub roster: Vec<PlayerStatLine>,
    pub schedule_url: String,
    /// Free-form schedule document; shape varies by season.
    pub schedule: serde_json::Value,
}

/// Row from the team_seasons table. The nested roster and schedule
/// documents are persisted as JSON text columns.
#[derive(Debug, sqlx::FromRow)]
pub struct TeamSeasonRow {
    pub team: String,
    pub full_name: String,
    pub year: i64,
    pub roster_url: String,
    pub roster: String,
    pub schedule_url: String,
    pub schedule: String,
}

impl TeamSeasonRow {
    /// Convert database row to API response format.
    pub fn to_team_season(&self) -> Result<TeamSeason, serde_json::Error> {
        Ok(TeamSeason {
            team: self.team.clone(),
            full_name: self.full_name.clone(),
            year: self.year,
            roster_url: self.roster_url.clone(),
            roster: serde_json::from_str(&self.roster)?,
            schedule_url: self.schedule_url.clone(),
            schedule: serde_json::from_str(&self.schedule)?,
        })
    }
}

/// Response for the roster link endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterLink {
    pub team: String,
    pub year: i64,
    pub roster: String,
}

/// Response for the schedule link endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleLink {
    pub team: String,
    pub year: i64,
    pub schedule: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> TeamSeasonRow {
        TeamSeasonRow {
            team: "CHI".to_string(),
            full_name: "Chicago Bulls".to_string(),
            year: 1996,
            roster_url: "https://www.basketball-reference.com/teams/CHI/1996.html".to_string(),
            roster: r#"[{"name":"Michael Jordan","regular_season":{"G":"82","PER":"29.4","TS%":".582","WS":"20.4"},"playoffs":{"G":"18","PER":"28.5","TS%":".564","WS":"3.9"}}]"#.to_string(),
            schedule_url: "https://www.basketball-reference.com/teams/CHI/1996_games.html"
                .to_string(),
            schedule: r#"{"1995-11-03":{"opponent":"CHH","result":"W 105-91"}}"#.to_string(),
        }
    }

    #[test]
    fn row_decodes_nested_documents() {
        let season = row().to_team_season().unwrap();

        assert_eq!(season.team, "CHI");
        assert_eq!(season.year, 1996);
        assert_eq!(season.roster.len(), 1);
        assert_eq!(season.roster[0].name, "Michael Jordan");
        assert_eq!(season.roster[0].regular_season.true_shooting, ".582");
        assert_eq!(season.roster[0].playoffs.win_shares, "3.9");
        assert!(season.schedule.is_object());
    }

    #[test]
    fn stat_split_keeps_wire_field_names() {
        let season = row().to_team_season().unwrap();
        let encoded = serde_json::to_value(&season.roster[0]).unwrap();

        assert_eq!(encoded["regular_season"]["TS%"], ".582");
        assert_eq!(encoded["regular_season"]["G"], "82");
    }

    #[test]
    fn malformed_roster_column_is_an_error() {
        let mut bad = row();
        bad.roster = "not json".to_string();

        assert!(bad.to_team_season().is_err());
    }
}
