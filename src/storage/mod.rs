use std::sync::Arc;

use crate::models::{auctions::entities::Auction, offers::entities::Offer};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 持久化网关
///
/// 每个实体提供同一组操作：全表扫描、按 ID 查询、存在性检查、按 ID upsert、按 ID 删除。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 拍卖管理方法
    // 列出全部拍卖（含报价），按 ID 升序
    async fn list_auctions(&self) -> Result<Vec<Auction>>;
    // 通过ID获取拍卖（含报价）
    async fn get_auction_by_id(&self, id: i64) -> Result<Option<Auction>>;
    // 拍卖是否存在
    async fn auction_exists(&self, id: i64) -> Result<bool>;
    // 保存拍卖：id 为空或该行已不存在时新建（分配新 id），否则按 id 覆盖；报价集合不在此持久化
    async fn save_auction(&self, auction: Auction) -> Result<Auction>;
    // 删除拍卖，并清空其报价的所属关系
    async fn delete_auction(&self, id: i64) -> Result<bool>;

    /// 报价管理方法
    // 列出全部报价，按 ID 升序
    async fn list_offers(&self) -> Result<Vec<Offer>>;
    // 通过ID获取报价
    async fn get_offer_by_id(&self, id: i64) -> Result<Option<Offer>>;
    // 报价是否存在
    async fn offer_exists(&self, id: i64) -> Result<bool>;
    // 保存报价：规则同 save_auction
    async fn save_offer(&self, offer: Offer) -> Result<Offer>;
    // 删除报价
    async fn delete_offer(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
