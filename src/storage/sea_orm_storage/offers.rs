//! 报价存储操作

use super::SeaOrmStorage;
use crate::entity::auctions::Entity as Auctions;
use crate::entity::offers::{ActiveModel, Column, Entity as Offers};
use crate::errors::{AuctionSystemError, Result};
use crate::models::offers::entities::Offer;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部报价
    pub async fn list_offers_impl(&self) -> Result<Vec<Offer>> {
        let rows = Offers::find()
            .order_by_asc(Column::Id)
            .find_also_related(Auctions)
            .all(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("查询报价列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(offer, auction)| offer.into_offer(auction))
            .collect())
    }

    /// 通过 ID 获取报价
    pub async fn get_offer_by_id_impl(&self, id: i64) -> Result<Option<Offer>> {
        let result = Offers::find_by_id(id)
            .find_also_related(Auctions)
            .one(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("查询报价失败: {e}")))?;

        Ok(result.map(|(offer, auction)| offer.into_offer(auction)))
    }

    /// 检查报价是否存在
    pub async fn offer_exists_impl(&self, id: i64) -> Result<bool> {
        let count = Offers::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("查询报价失败: {e}")))?;

        Ok(count > 0)
    }

    /// 保存报价，规则同 `save_auction_impl`
    pub async fn save_offer_impl(&self, offer: Offer) -> Result<Offer> {
        let auction_id = offer.auction_id();
        let value = offer.value;

        let updated = match offer.id {
            Some(id) => {
                let result = ActiveModel {
                    id: Set(id),
                    offer_value: Set(value),
                    offer_name_id: Set(auction_id),
                }
                .update(&self.db)
                .await;

                match result {
                    Ok(model) => Some(model),
                    Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => None,
                    Err(e) => {
                        return Err(AuctionSystemError::database_operation(format!(
                            "更新报价失败: {e}"
                        )));
                    }
                }
            }
            None => None,
        };

        let model = match updated {
            Some(model) => model,
            None => ActiveModel {
                offer_value: Set(value),
                offer_name_id: Set(auction_id),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("新建报价失败: {e}")))?,
        };

        self.get_offer_by_id_impl(model.id)
            .await?
            .ok_or_else(|| AuctionSystemError::not_found(format!("报价 {} 保存后不存在", model.id)))
    }

    /// 删除报价
    pub async fn delete_offer_impl(&self, id: i64) -> Result<bool> {
        let result = Offers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AuctionSystemError::database_operation(format!("删除报价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
