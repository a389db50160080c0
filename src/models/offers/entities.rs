use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::auctions::entities::AuctionRef;

/// 报价
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/offer.ts")]
pub struct Offer {
    // 报价ID，首次保存时由数据库分配
    pub id: Option<i64>,
    // 报价金额
    #[serde(rename = "offerValue")]
    pub value: Option<f64>,
    // 所属拍卖
    #[serde(rename = "offerName")]
    pub auction: Option<AuctionRef>,
}

impl Offer {
    pub fn new(id: Option<i64>, value: Option<f64>, auction: Option<AuctionRef>) -> Self {
        Self { id, value, auction }
    }

    /// 所属拍卖的 ID（外键值）
    pub fn auction_id(&self) -> Option<i64> {
        self.auction.as_ref().and_then(|a| a.id)
    }
}

// 仅当双方 ID 均非空且相等时视为同一报价
impl PartialEq for Offer {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}
