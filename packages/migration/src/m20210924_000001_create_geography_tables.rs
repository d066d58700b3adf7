use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum States {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Cities {
    Table,
    Id,
    StateId,
    Name,
}

#[derive(Iden)]
enum Districts {
    Table,
    Id,
    CityId,
    ParentId,
    Name,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // states
        manager
            .create_table(
                Table::create()
                    .table(States::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(States::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(States::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // cities
        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cities::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Cities::StateId).integer().not_null())
                    .col(ColumnDef::new(Cities::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cities_state_id")
                            .from(Cities::Table, Cities::StateId)
                            .to(States::Table, States::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_cities_state_id")
                    .table(Cities::Table)
                    .col(Cities::StateId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // districts; parent_id points at the enclosing district, if any
        manager
            .create_table(
                Table::create()
                    .table(Districts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Districts::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Districts::CityId).integer().not_null())
                    .col(ColumnDef::new(Districts::ParentId).integer().null())
                    .col(ColumnDef::new(Districts::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_districts_city_id")
                            .from(Districts::Table, Districts::CityId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_districts_parent_id")
                            .from(Districts::Table, Districts::ParentId)
                            .to(Districts::Table, Districts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_districts_city_id")
                    .table(Districts::Table)
                    .col(Districts::CityId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_districts_parent_id")
                    .table(Districts::Table)
                    .col(Districts::ParentId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order; indexes go with their tables
        manager
            .drop_table(Table::drop().table(Districts::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Cities::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(States::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
