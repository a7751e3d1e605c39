use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConfigEntry::Table)
                    .if_not_exists()
                    .col(string(ConfigEntry::Category))
                    .col(string(ConfigEntry::Key))
                    .col(json(ConfigEntry::Data))
                    .primary_key(
                        Index::create()
                            .col(ConfigEntry::Category)
                            .col(ConfigEntry::Key),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConfigEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConfigEntry {
    Table,
    Category,
    Key,
    Data,
}
