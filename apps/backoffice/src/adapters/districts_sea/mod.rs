//! SeaORM adapter for districts.

use sea_orm::sea_query::{Alias, Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::entities::{cities, districts, states};

pub mod dto;

pub use dto::{DistrictCreate, DistrictGridRow};

/// Grid rows for the districts directly under `parent_id`
/// (top-level districts when `None`), ordered by id.
///
/// City and state names are joined in the same statement and
/// `has_district` is an EXISTS probe on nested districts.
pub async fn list_grid_rows<C: ConnectionTrait>(
    conn: &C,
    parent_id: Option<i32>,
) -> Result<Vec<DistrictGridRow>, sea_orm::DbErr> {
    let children = Alias::new("children");
    let nested = Query::select()
        .expr(Expr::val(1))
        .from_as(districts::Entity, children.clone())
        .and_where(
            Expr::col((children, districts::Column::ParentId))
                .equals((districts::Entity, districts::Column::Id)),
        )
        .to_owned();

    let query = districts::Entity::find()
        .select_only()
        .column(districts::Column::Id)
        .column(districts::Column::Name)
        .column_as(cities::Column::Name, "city_name")
        .column_as(states::Column::Name, "state_name")
        .column_as(Expr::exists(nested), "has_district")
        .join(JoinType::InnerJoin, districts::Relation::Cities.def())
        .join(JoinType::InnerJoin, cities::Relation::States.def())
        .order_by_asc(districts::Column::Id);

    let query = match parent_id {
        Some(id) => query.filter(districts::Column::ParentId.eq(id)),
        None => query.filter(districts::Column::ParentId.is_null()),
    };

    query.into_model::<DistrictGridRow>().all(conn).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    district_id: i32,
) -> Result<Option<districts::Model>, sea_orm::DbErr> {
    districts::Entity::find_by_id(district_id).one(conn).await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    dto: DistrictCreate,
) -> Result<districts::Model, sea_orm::DbErr> {
    let active = districts::ActiveModel {
        id: NotSet,
        city_id: Set(dto.city_id),
        parent_id: Set(dto.parent_id),
        name: Set(dto.name),
    };
    active.insert(conn).await
}

/// Deletes one district; nested districts go with it through the FK cascade.
/// Returns the number of rows removed by the statement.
pub async fn delete_by_id<C: ConnectionTrait>(
    conn: &C,
    district_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = districts::Entity::delete_by_id(district_id)
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
