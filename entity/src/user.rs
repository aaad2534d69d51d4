use sea_orm::entity::prelude::*;

/// Application user. The `password` column is stored in plaintext and must
/// never leave the data layer in a serialized form.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favorite_character::Entity")]
    UserFavoriteCharacter,
    #[sea_orm(has_many = "super::user_favorite_planet::Entity")]
    UserFavoritePlanet,
}

impl Related<super::user_favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteCharacter.def()
    }
}

impl Related<super::user_favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoritePlanet.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_planet::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_favorite_planet::Relation::User.def().rev())
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_character::Relation::Person.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_favorite_character::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
