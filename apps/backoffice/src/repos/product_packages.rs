//! Repository layer for product packages.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::product_packages_sea as adapter;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductPackage {
    pub id: i32,
}

pub async fn list_ids<C: ConnectionTrait>(conn: &C) -> Result<Vec<i32>, DomainError> {
    Ok(adapter::list_ids(conn).await?)
}

pub async fn create<C: ConnectionTrait>(conn: &C) -> Result<ProductPackage, DomainError> {
    let model = adapter::create(conn).await?;
    Ok(ProductPackage { id: model.id })
}

pub async fn delete<C: ConnectionTrait>(conn: &C, package_id: i32) -> Result<(), DomainError> {
    match adapter::delete_by_id(conn, package_id).await? {
        0 => Err(DomainError::not_found(
            NotFoundKind::ProductPackage,
            format!("product package {package_id} not found"),
        )),
        _ => Ok(()),
    }
}
