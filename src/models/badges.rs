use crate::common::error::AppError;
use crate::entities::badges::BadgeRecord;
use crate::models::members::Member;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Achievement trigger tag attached to a badge. Descriptive metadata
/// only; nothing in the service evaluates these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeRule {
    #[default]
    #[serde(rename = "TestDate1Year")]
    TenureYear1,
    #[serde(rename = "TestDateYear2")]
    TenureYear2,
    #[serde(rename = "TestDateYear3")]
    TenureYear3,
    #[serde(rename = "NombrePrimesComplétées1")]
    BountiesCompleted1,
    #[serde(rename = "NombrePrimesComplétées10")]
    BountiesCompleted10,
    #[serde(rename = "NombrePrimesComplétées50")]
    BountiesCompleted50,
    #[serde(rename = "NiveauAtteint5")]
    LevelReached5,
    #[serde(rename = "NiveauAtteint10")]
    LevelReached10,
}

impl BadgeRule {
    pub const ALL: [BadgeRule; 8] = [
        BadgeRule::TenureYear1,
        BadgeRule::TenureYear2,
        BadgeRule::TenureYear3,
        BadgeRule::BountiesCompleted1,
        BadgeRule::BountiesCompleted10,
        BadgeRule::BountiesCompleted50,
        BadgeRule::LevelReached5,
        BadgeRule::LevelReached10,
    ];

    pub const fn tag(&self) -> &'static str {
        match self {
            BadgeRule::TenureYear1 => "TestDate1Year",
            BadgeRule::TenureYear2 => "TestDateYear2",
            BadgeRule::TenureYear3 => "TestDateYear3",
            BadgeRule::BountiesCompleted1 => "NombrePrimesComplétées1",
            BadgeRule::BountiesCompleted10 => "NombrePrimesComplétées10",
            BadgeRule::BountiesCompleted50 => "NombrePrimesComplétées50",
            BadgeRule::LevelReached5 => "NiveauAtteint5",
            BadgeRule::LevelReached10 => "NiveauAtteint10",
        }
    }
}

impl fmt::Display for BadgeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<&str> for BadgeRule {
    type Error = AppError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        match tag {
            "TestDate1Year" => Ok(BadgeRule::TenureYear1),
            "TestDateYear2" => Ok(BadgeRule::TenureYear2),
            "TestDateYear3" => Ok(BadgeRule::TenureYear3),
            "NombrePrimesComplétées1" => Ok(BadgeRule::BountiesCompleted1),
            "NombrePrimesComplétées10" => Ok(BadgeRule::BountiesCompleted10),
            "NombrePrimesComplétées50" => Ok(BadgeRule::BountiesCompleted50),
            "NiveauAtteint5" => Ok(BadgeRule::LevelReached5),
            "NiveauAtteint10" => Ok(BadgeRule::LevelReached10),
            _ => Err(AppError::BadgesInvalidRule),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rule: BadgeRule,
}

impl TryFrom<BadgeRecord> for Badge {
    type Error = AppError;

    fn try_from(record: BadgeRecord) -> Result<Self, Self::Error> {
        let rule = BadgeRule::try_from(record.rule.as_str())?;
        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            image: record.image,
            rule,
        })
    }
}

/// Badge fields as held by a creation or edit dialog, before commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BadgeDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub rule: BadgeRule,
}

#[derive(Debug, Serialize)]
pub struct BadgeWithHolders {
    pub badge: Badge,
    pub holders: usize,
}

/// Read-only snapshot of both collections, for rendering.
#[derive(Debug, Serialize)]
pub struct CatalogOverview {
    pub badges: Vec<BadgeWithHolders>,
    pub members: Vec<Member>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_tag_parses_back() {
        for rule in BadgeRule::ALL {
            assert_eq!(BadgeRule::try_from(rule.tag()).unwrap(), rule);
        }
    }

    #[test]
    fn unknown_rule_tag_is_rejected() {
        assert!(BadgeRule::try_from("TestDate4Year").is_err());
    }

    #[test]
    fn rule_serializes_as_its_tag() {
        let json = serde_json::to_string(&BadgeRule::BountiesCompleted10).unwrap();
        assert_eq!(json, "\"NombrePrimesComplétées10\"");
    }

    #[test]
    fn default_rule_matches_the_dialog_default() {
        assert_eq!(BadgeRule::default(), BadgeRule::TenureYear1);
    }
}
