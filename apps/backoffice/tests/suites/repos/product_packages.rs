use backoffice::errors::domain::{DomainError, NotFoundKind};
use backoffice::repos::product_packages;

use crate::support::memory_state;

#[tokio::test]
async fn ids_are_generated_and_listed_in_order() {
    let state = memory_state().await;
    let db = state.db().unwrap();

    assert!(product_packages::list_ids(db).await.unwrap().is_empty());

    let first = product_packages::create(db).await.unwrap();
    let second = product_packages::create(db).await.unwrap();
    assert!(second.id > first.id);

    assert_eq!(
        product_packages::list_ids(db).await.unwrap(),
        vec![first.id, second.id]
    );
}

#[tokio::test]
async fn delete_removes_only_that_package() {
    let state = memory_state().await;
    let db = state.db().unwrap();

    let keep = product_packages::create(db).await.unwrap();
    let gone = product_packages::create(db).await.unwrap();

    product_packages::delete(db, gone.id).await.unwrap();
    assert_eq!(product_packages::list_ids(db).await.unwrap(), vec![keep.id]);

    let err = product_packages::delete(db, gone.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::ProductPackage, _)
    ));
}
