use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait, EntityTrait};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, gene};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transcript")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub nm_number: String,
    pub gene_name: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub attributes: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Gene }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Gene => Entity::belongs_to(gene::Entity)
                .from(Column::GeneName)
                .to(gene::Column::Name)
                .into(),
        }
    }
}

impl Related<gene::Entity> for Entity {
    fn to() -> RelationDef { Relation::Gene.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find(db: &DatabaseConnection, nm_number: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find_by_id(nm_number.to_string()).one(db).await?;
    Ok(found)
}

/// Insert a transcript; the NM number primary key rejects duplicates as `ModelError::Duplicate`.
pub async fn create(
    db: &DatabaseConnection,
    nm_number: &str,
    gene_name: Option<&str>,
    attributes: Json,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        nm_number: Set(nm_number.to_string()),
        gene_name: Set(gene_name.map(str::to_string)),
        attributes: Set(attributes),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

/// Remove every transcript pointing at `gene_name`; returns the number removed.
pub async fn delete_by_gene(db: &DatabaseConnection, gene_name: &str) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::GeneName.eq(gene_name))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
