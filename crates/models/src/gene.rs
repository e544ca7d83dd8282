use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait, EntityTrait, QueryOrder};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, transcript};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gene")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub nm_number: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub attributes: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Transcript }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Transcript => Entity::has_many(transcript::Entity).into(),
        }
    }
}

impl Related<transcript::Entity> for Entity {
    fn to() -> RelationDef { Relation::Transcript.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// All genes in insertion order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find().filter(Column::Name.eq(name)).one(db).await?;
    Ok(found)
}

pub async fn find_by_nm_number(db: &DatabaseConnection, nm_number: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::NmNumber.eq(nm_number))
        .order_by_asc(Column::CreatedAt)
        .one(db)
        .await?;
    Ok(found)
}

/// Insert a gene; a duplicate name surfaces as `ModelError::Duplicate` from the unique index.
pub async fn create(db: &DatabaseConnection, name: &str, nm_number: &str, attributes: Json) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        nm_number: Set(nm_number.to_string()),
        attributes: Set(attributes),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite NM number and attributes of the gene called `name`. `None` if absent.
pub async fn update_by_name(
    db: &DatabaseConnection,
    name: &str,
    nm_number: &str,
    attributes: Json,
) -> Result<Option<Model>, ModelError> {
    let Some(existing) = find_by_name(db, name).await? else { return Ok(None); };
    let mut am: ActiveModel = existing.into();
    am.nm_number = Set(nm_number.to_string());
    am.attributes = Set(attributes);
    am.updated_at = Set(Utc::now().into());
    Ok(Some(am.update(db).await?))
}

/// Delete by name; returns true if a row was removed.
pub async fn delete_by_name(db: &DatabaseConnection, name: &str) -> Result<bool, ModelError> {
    let res = Entity::delete_many().filter(Column::Name.eq(name)).exec(db).await?;
    Ok(res.rows_affected > 0)
}
