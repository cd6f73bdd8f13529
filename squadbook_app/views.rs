use squadbook_types::player::Player;

/// Returns the snapshot restricted to `team` (all players when `None`),
/// sorted by id descending. Ids are remote-assigned decimal strings compared
/// lexicographically, which puts the newest records first.
pub fn filter_by_team(players: &[Player], team: Option<&str>) -> Vec<Player> {
    let mut filtered: Vec<Player> = match team {
        Some(team) => players.iter().filter(|p| p.team == team).cloned().collect(),
        None => players.to_vec(),
    };

    filtered.sort_by(|a, b| b.id.cmp(&a.id));
    filtered
}

/// Unique team names in first-seen order.
pub fn team_names(players: &[Player]) -> Vec<String> {
    let mut teams: Vec<String> = Vec::new();
    for player in players {
        if !teams.contains(&player.team) {
            teams.push(player.team.clone());
        }
    }
    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tests::player_factory;

    fn squad() -> Vec<Player> {
        let mut a = player_factory("1", "Iker");
        a.team = "Madrid".to_string();
        let mut b = player_factory("2", "Sergio");
        b.team = "Madrid".to_string();
        let mut c = player_factory("3", "Andres");
        c.team = "Barcelona".to_string();
        vec![a, b, c]
    }

    #[test]
    fn test_filter_by_team_keeps_only_that_team_newest_first() {
        let players = squad();

        let madrid = filter_by_team(&players, Some("Madrid"));
        let ids: Vec<_> = madrid.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_filter_without_team_returns_everyone_newest_first() {
        let players = squad();

        let all = filter_by_team(&players, None);
        let ids: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_team_names_are_unique_in_first_seen_order() {
        let players = squad();
        assert_eq!(team_names(&players), vec!["Madrid", "Barcelona"]);
    }
}
