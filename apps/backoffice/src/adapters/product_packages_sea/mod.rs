//! SeaORM adapter for product packages.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder};

use crate::entities::product_packages;

pub async fn list_ids<C: ConnectionTrait>(conn: &C) -> Result<Vec<i32>, sea_orm::DbErr> {
    let rows = product_packages::Entity::find()
        .order_by_asc(product_packages::Column::Id)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|row| row.id).collect())
}

/// Inserts a row made only of its generated key.
pub async fn create<C: ConnectionTrait>(
    conn: &C,
) -> Result<product_packages::Model, sea_orm::DbErr> {
    product_packages::ActiveModel { id: NotSet }.insert(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait>(
    conn: &C,
    package_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = product_packages::Entity::delete_by_id(package_id)
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
