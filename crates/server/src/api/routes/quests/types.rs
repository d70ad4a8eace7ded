use englishquiz_db::core::definitions::{NewQuest, Quest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{api::routes::errors::ApiError, domain::quests::validate_quest_name};

/// Body accepted when creating or updating a quest. Any `id` sent by the client is ignored.
#[derive(Deserialize, Serialize, Debug, Default, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestPayload {
    pub quest_name: Option<String>,
    pub description: Option<String>,
}

pub trait ToNewQuest {
    fn to_new_quest(&self) -> Result<NewQuest<'_>, ApiError>;
}

pub trait OverwriteQuest {
    /// Replaces name and description of a stored quest, keeping its ID
    fn overwrite(&self, quest: Quest) -> Result<Quest, ApiError>;
}

impl ToNewQuest for QuestPayload {
    fn to_new_quest(&self) -> Result<NewQuest<'_>, ApiError> {
        Ok(NewQuest {
            quest_name: validate_quest_name(self.quest_name.as_deref())?,
            description: self.description.as_deref().unwrap_or_default(),
        })
    }
}

impl OverwriteQuest for QuestPayload {
    fn overwrite(&self, quest: Quest) -> Result<Quest, ApiError> {
        let NewQuest {
            quest_name,
            description,
        } = self.to_new_quest()?;

        Ok(Quest {
            quest_name: quest_name.to_string(),
            description: description.to_string(),
            ..quest
        })
    }
}
