//! 拍卖存储操作

use super::SeaOrmStorage;
use crate::entity::auctions::{ActiveModel, Column, Entity as Auctions};
use crate::entity::offers::{
    ActiveModel as OfferActiveModel, Column as OfferColumn, Entity as Offers,
};
use crate::errors::{AuctionSystemError, Result};
use crate::models::auctions::entities::Auction;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出全部拍卖
    pub async fn list_auctions_impl(&self) -> Result<Vec<Auction>> {
        let rows = Auctions::find()
            .order_by_asc(Column::Id)
            .find_with_related(Offers)
            .order_by_asc(OfferColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("查询拍卖列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(auction, offers)| auction.into_auction_with_offers(offers))
            .collect())
    }

    /// 通过 ID 获取拍卖
    pub async fn get_auction_by_id_impl(&self, id: i64) -> Result<Option<Auction>> {
        let Some(model) = Auctions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("查询拍卖失败: {e}")))?
        else {
            return Ok(None);
        };

        let offers = model
            .find_related(Offers)
            .order_by_asc(OfferColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("查询拍卖报价失败: {e}")))?;

        Ok(Some(model.into_auction_with_offers(offers)))
    }

    /// 检查拍卖是否存在
    pub async fn auction_exists_impl(&self, id: i64) -> Result<bool> {
        let count = Auctions::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("查询拍卖失败: {e}")))?;

        Ok(count > 0)
    }

    /// 保存拍卖
    ///
    /// 有 ID 时直接按 ID 更新；该行已不存在则与无 ID 一样插入，由数据库分配新 ID。
    pub async fn save_auction_impl(&self, auction: Auction) -> Result<Auction> {
        let description = auction.description;

        let updated = match auction.id {
            Some(id) => {
                let result = ActiveModel {
                    id: Set(id),
                    auction_description: Set(description.clone()),
                }
                .update(&self.db)
                .await;

                match result {
                    Ok(model) => Some(model),
                    Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => None,
                    Err(e) => {
                        return Err(AuctionSystemError::database_operation(format!(
                            "更新拍卖失败: {e}"
                        )));
                    }
                }
            }
            None => None,
        };

        let model = match updated {
            Some(model) => model,
            None => ActiveModel {
                auction_description: Set(description),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("新建拍卖失败: {e}")))?,
        };

        self.get_auction_by_id_impl(model.id)
            .await?
            .ok_or_else(|| AuctionSystemError::not_found(format!("拍卖 {} 保存后不存在", model.id)))
    }

    /// 删除拍卖，同一事务内清空其报价的所属关系
    pub async fn delete_auction_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("开启事务失败: {e}")))?;

        Offers::update_many()
            .set(OfferActiveModel {
                offer_name_id: Set(None),
                ..Default::default()
            })
            .filter(OfferColumn::OfferNameId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("解除报价关联失败: {e}")))?;

        let result = Auctions::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("删除拍卖失败: {e}")))?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
