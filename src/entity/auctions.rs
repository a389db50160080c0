//! 拍卖实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "auction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub auction_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::offers::Entity")]
    Offers,
}

impl Related<super::offers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_auction(self) -> crate::models::auctions::entities::Auction {
        crate::models::auctions::entities::Auction::new(Some(self.id), self.auction_description)
    }

    /// 转换为拍卖并挂上已加载的报价
    pub fn into_auction_with_offers(
        self,
        offers: Vec<super::offers::Model>,
    ) -> crate::models::auctions::entities::Auction {
        let mut auction = self.into_auction();
        auction.set_offers(offers.into_iter().map(|o| o.into_offer(None)).collect());
        auction
    }
}
