use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Emoji reactions supported by the GitHub reactions API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ReactionKind {
    #[serde(rename = "+1")]
    PlusOne,
    #[serde(rename = "-1")]
    MinusOne,
    #[serde(rename = "laugh")]
    Laugh,
    #[serde(rename = "confused")]
    Confused,
    #[serde(rename = "heart")]
    Heart,
    #[serde(rename = "hooray")]
    Hooray,
    #[serde(rename = "rocket")]
    Rocket,
    #[default]
    #[serde(rename = "eyes")]
    Eyes,
}

impl ReactionKind {
    /// The `content` value sent to the reactions API.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::PlusOne => "+1",
            ReactionKind::MinusOne => "-1",
            ReactionKind::Laugh => "laugh",
            ReactionKind::Confused => "confused",
            ReactionKind::Heart => "heart",
            ReactionKind::Hooray => "hooray",
            ReactionKind::Rocket => "rocket",
            ReactionKind::Eyes => "eyes",
        }
    }
}

impl Display for ReactionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown reaction `{0}`, expected one of +1, -1, laugh, confused, heart, hooray, rocket, eyes")]
pub struct UnknownReaction(pub String);

impl FromStr for ReactionKind {
    type Err = UnknownReaction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let reaction = match value.trim() {
            "+1" | "thumbsup" => ReactionKind::PlusOne,
            "-1" | "thumbsdown" => ReactionKind::MinusOne,
            "laugh" => ReactionKind::Laugh,
            "confused" => ReactionKind::Confused,
            "heart" => ReactionKind::Heart,
            "hooray" => ReactionKind::Hooray,
            "rocket" => ReactionKind::Rocket,
            "eyes" => ReactionKind::Eyes,
            _ => return Err(UnknownReaction(value.to_string())),
        };
        Ok(reaction)
    }
}
