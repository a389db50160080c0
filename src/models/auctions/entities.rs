use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::offers::entities::Offer;

/// 拍卖
///
/// `offers` 只是反向集合：外键由报价一侧持有，写请求中的集合会被忽略。
/// 修改集合必须通过 [`Auction::set_offers`]、[`Auction::add_offer`]、
/// [`Auction::remove_offer`]，以保证每个报价的所属关系与集合一致。
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auction.ts")]
pub struct Auction {
    // 拍卖ID，首次保存时由数据库分配
    pub id: Option<i64>,
    // 拍卖描述
    #[serde(rename = "auctionDescription")]
    pub description: Option<String>,
    // 属于该拍卖的报价
    #[serde(rename = "auctionNames", default)]
    offers: Vec<Offer>,
}

/// 报价指向所属拍卖的引用（不含报价集合）
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auction.ts")]
pub struct AuctionRef {
    pub id: Option<i64>,
    #[serde(rename = "auctionDescription")]
    pub description: Option<String>,
}

impl Auction {
    pub fn new(id: Option<i64>, description: Option<String>) -> Self {
        Self {
            id,
            description,
            offers: Vec::new(),
        }
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// 当前拍卖的引用快照，用于报价的所属关系
    pub fn to_ref(&self) -> AuctionRef {
        AuctionRef {
            id: self.id,
            description: self.description.clone(),
        }
    }

    /// 替换报价集合
    ///
    /// 新集合中的每个报价都指向当前拍卖；原集合中不再出现的报价清空所属关系后返回给调用方。
    pub fn set_offers(&mut self, offers: Vec<Offer>) -> Vec<Offer> {
        let owner = self.to_ref();
        let previous = std::mem::take(&mut self.offers);

        self.offers = offers
            .into_iter()
            .map(|mut offer| {
                offer.auction = Some(owner.clone());
                offer
            })
            .collect();

        previous
            .into_iter()
            .filter(|old| !self.offers.iter().any(|kept| kept == old))
            .map(|mut old| {
                old.auction = None;
                old
            })
            .collect()
    }

    /// 追加报价并指向当前拍卖
    pub fn add_offer(&mut self, mut offer: Offer) -> &mut Self {
        offer.auction = Some(self.to_ref());
        self.offers.push(offer);
        self
    }

    /// 移除报价，返回清空所属关系后的报价
    pub fn remove_offer(&mut self, offer: &Offer) -> Option<Offer> {
        let index = self.offers.iter().position(|o| o == offer)?;
        let mut removed = self.offers.remove(index);
        removed.auction = None;
        Some(removed)
    }
}

// 仅当双方 ID 均非空且相等时视为同一拍卖
impl PartialEq for Auction {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}
