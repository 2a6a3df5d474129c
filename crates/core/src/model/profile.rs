use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("display name cannot be empty")]
    EmptyName,

    #[error("skill percentage must be at most 100, got {value}")]
    SkillOutOfRange { value: u8 },
}

/// Validated display name (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a validated display name.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ProfileError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity and progress metrics for the signed-in learner.
///
/// Session-scoped: seeded at controller construction and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: DisplayName,
    email: String,
    xp: u32,
    streak: u32,
    skills: BTreeMap<String, u8>,
    last_active_on: Option<NaiveDate>,
}

impl Profile {
    /// Create a fresh profile with zeroed progress.
    #[must_use]
    pub fn new(name: DisplayName, email: impl Into<String>) -> Self {
        Self {
            name,
            email: email.into(),
            xp: 0,
            streak: 0,
            skills: BTreeMap::new(),
            last_active_on: None,
        }
    }

    /// Rehydrate a profile from externally held values.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::SkillOutOfRange` if any percentage exceeds 100.
    pub fn from_parts(
        name: DisplayName,
        email: impl Into<String>,
        xp: u32,
        streak: u32,
        skills: &[(&str, u8)],
    ) -> Result<Self, ProfileError> {
        let mut profile = Self::new(name, email);
        profile.xp = xp;
        profile.streak = streak;
        for &(skill, percentage) in skills {
            profile.update_skill(skill, percentage)?;
        }
        Ok(profile)
    }

    #[must_use]
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Skill completion percentages, keyed by skill name.
    #[must_use]
    pub fn skills(&self) -> &BTreeMap<String, u8> {
        &self.skills
    }

    #[must_use]
    pub fn skill(&self, name: &str) -> Option<u8> {
        self.skills.get(name).copied()
    }

    #[must_use]
    pub fn last_active_on(&self) -> Option<NaiveDate> {
        self.last_active_on
    }

    /// Replace the display name.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` if the new name is empty after
    /// trimming.
    pub fn update_name(&mut self, new_name: impl Into<String>) -> Result<(), ProfileError> {
        self.name = DisplayName::new(new_name)?;
        Ok(())
    }

    /// Add earned XP. Saturates instead of wrapping.
    pub fn award_xp(&mut self, amount: u32) {
        self.xp = self.xp.saturating_add(amount);
    }

    /// Insert or overwrite a skill completion percentage.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::SkillOutOfRange` if `percentage` exceeds 100.
    pub fn update_skill(
        &mut self,
        name: impl Into<String>,
        percentage: u8,
    ) -> Result<(), ProfileError> {
        if percentage > 100 {
            return Err(ProfileError::SkillOutOfRange { value: percentage });
        }
        self.skills.insert(name.into(), percentage);
        Ok(())
    }

    /// Record activity for streak upkeep.
    ///
    /// Repeated calls on the same calendar day are no-ops; the day after the
    /// last activity extends the streak; any other gap restarts it at 1.
    pub fn record_activity(&mut self, now: DateTime<Utc>) {
        let today = now.date_naive();
        match self.last_active_on.map(|last| (today - last).num_days()) {
            Some(0) => {}
            Some(1) => self.streak = self.streak.saturating_add(1),
            _ => self.streak = 1,
        }
        self.last_active_on = Some(today);
    }
}
