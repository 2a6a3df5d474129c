use serde::Serialize;

use prep_core::model::Profile;

/// One row of a leaderboard, presentation-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub xp: u32,
}

/// Source of ranked standings.
///
/// The session core ships a fabricated implementation; a ranking backend
/// implements the same trait without touching the controller.
pub trait LeaderboardProvider: Send + Sync {
    /// Global standings, best first.
    fn standings(&self) -> Vec<LeaderboardEntry>;

    /// Dashboard podium: the fixed front-runners plus the live profile.
    fn podium(&self, profile: &Profile) -> Vec<LeaderboardEntry>;
}

/// Fabricated standings used until a real ranking service exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLeaderboard;

impl StaticLeaderboard {
    const GLOBAL_SIZE: u32 = 10;
    const TOP_XP: u32 = 800;
    const XP_STEP: u32 = 30;
}

impl LeaderboardProvider for StaticLeaderboard {
    fn standings(&self) -> Vec<LeaderboardEntry> {
        (1..=Self::GLOBAL_SIZE)
            .map(|rank| LeaderboardEntry {
                rank,
                name: format!("User {rank}"),
                xp: Self::TOP_XP - Self::XP_STEP * (rank - 1),
            })
            .collect()
    }

    fn podium(&self, profile: &Profile) -> Vec<LeaderboardEntry> {
        vec![
            LeaderboardEntry {
                rank: 1,
                name: "Ankita".to_string(),
                xp: 1240,
            },
            LeaderboardEntry {
                rank: 2,
                name: "Rohit".to_string(),
                xp: 980,
            },
            LeaderboardEntry {
                rank: 3,
                name: profile.name().to_string(),
                xp: profile.xp(),
            },
        ]
    }
}
