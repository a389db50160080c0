//! 报价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "offer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub offer_value: Option<f64>,
    pub offer_name_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auctions::Entity",
        from = "Column::OfferNameId",
        to = "super::auctions::Column::Id",
        on_delete = "SetNull"
    )]
    Auction,
}

impl Related<super::auctions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    /// `auction` 为联表查到的所属拍卖；为空时仅保留外键 ID
    pub fn into_offer(
        self,
        auction: Option<super::auctions::Model>,
    ) -> crate::models::offers::entities::Offer {
        use crate::models::auctions::entities::AuctionRef;
        use crate::models::offers::entities::Offer;

        let auction = match auction {
            Some(a) => Some(AuctionRef {
                id: Some(a.id),
                description: a.auction_description,
            }),
            None => self.offer_name_id.map(|id| AuctionRef {
                id: Some(id),
                description: None,
            }),
        };

        Offer::new(Some(self.id), self.offer_value, auction)
    }
}
