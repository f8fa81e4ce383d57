use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::enums::MemberStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub name_ja: String,
    pub birth_date: NaiveDate,
    pub join_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: MemberStatus,
}
