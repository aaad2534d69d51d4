use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: i32,
    pub mass: i32,
}
