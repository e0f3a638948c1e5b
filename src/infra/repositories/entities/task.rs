//! Task database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Task;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Wire form of [`crate::domain::Priority`]
    pub priority: String,
    pub deadline: Date,
    pub finished: bool,
    pub board_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::board::Entity",
        from = "Column::BoardId",
        to = "super::board::Column::Id"
    )]
    Board,
}

impl Related<super::board::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Board.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Task {
            id: model.id,
            title: model.title,
            description: model.description,
            // Stored rows are written through the Priority wire form; an
            // unknown value degrades to the default rather than poisoning
            // every read.
            priority: model.priority.parse().unwrap_or_default(),
            deadline: model.deadline,
            finished: model.finished,
            board_id: model.board_id,
        }
    }
}
