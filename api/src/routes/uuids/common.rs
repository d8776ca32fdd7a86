use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UuidResponse {
    pub id: String,
    pub version: usize,
    pub nil: bool,
}

impl From<Uuid> for UuidResponse {
    fn from(id: Uuid) -> Self {
        Self {
            id: id.to_string(),
            version: id.get_version_num(),
            nil: id.is_nil(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub id: String,
    pub other_id: String,
    pub equal: bool,
}
