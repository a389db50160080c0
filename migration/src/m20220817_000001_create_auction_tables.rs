use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建拍卖表
        manager
            .create_table(
                Table::create()
                    .table(Auction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Auction::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Auction::AuctionDescription).text().null())
                    .to_owned(),
            )
            .await?;

        // 创建报价表，删除拍卖时只清空报价的所属关系
        manager
            .create_table(
                Table::create()
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offer::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Offer::OfferValue).double().null())
                    .col(ColumnDef::new(Offer::OfferNameId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_offer_name_id")
                            .from(Offer::Table, Offer::OfferNameId)
                            .to(Auction::Table, Auction::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 报价表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_offer_offer_name_id")
                    .table(Offer::Table)
                    .col(Offer::OfferNameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Offer::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Auction::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Auction {
    Table,
    Id,
    AuctionDescription,
}

#[derive(DeriveIden)]
enum Offer {
    Table,
    Id,
    OfferValue,
    OfferNameId,
}
