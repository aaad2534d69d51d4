use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: i32,
    pub mass: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favorite_character::Entity")]
    UserFavoriteCharacter,
}

impl Related<super::user_favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteCharacter.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_character::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_favorite_character::Relation::Person.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
