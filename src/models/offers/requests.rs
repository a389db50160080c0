use serde::Deserialize;
use ts_rs::TS;

use super::entities::Offer;
use crate::models::auctions::entities::AuctionRef;

// 报价请求体（创建、整体更新、部分更新共用）
//
// `offerName` 只读取其中的 `id`，其余字段忽略
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/offer.ts")]
pub struct OfferRequest {
    pub id: Option<i64>,
    #[serde(rename = "offerValue")]
    pub value: Option<f64>,
    #[serde(rename = "offerName")]
    pub auction: Option<AuctionIdRef>,
}

// 报价所属拍卖的引用
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/offer.ts")]
pub struct AuctionIdRef {
    pub id: i64,
}

impl OfferRequest {
    /// 请求中引用的拍卖 ID
    pub fn auction_id(&self) -> Option<i64> {
        self.auction.as_ref().map(|a| a.id)
    }

    pub fn into_offer(self) -> Offer {
        let auction = self.auction.map(|a| AuctionRef {
            id: Some(a.id),
            description: None,
        });
        Offer::new(self.id, self.value, auction)
    }

    /// 将非空字段合并到已有报价上
    pub fn merge_into(self, existing: &mut Offer) {
        if let Some(value) = self.value {
            existing.value = Some(value);
        }
        if let Some(auction) = self.auction {
            existing.auction = Some(AuctionRef {
                id: Some(auction.id),
                description: None,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_payload() {
        // 前端会回传完整的拍卖对象
        let req: OfferRequest = serde_json::from_str(
            r#"{"id":null,"offerValue":12.5,"offerName":{"id":4,"auctionDescription":"x","auctionNames":null}}"#,
        )
        .unwrap();

        assert_eq!(req.id, None);
        assert_eq!(req.value, Some(12.5));
        assert_eq!(req.auction_id(), Some(4));
    }

    #[test]
    fn test_merge_keeps_omitted_fields() {
        let mut existing = Offer::new(
            Some(1),
            Some(10.0),
            Some(AuctionRef {
                id: Some(2),
                description: Some("lamp".to_string()),
            }),
        );

        let patch: OfferRequest = serde_json::from_str(r#"{"id":1,"offerValue":null}"#).unwrap();
        patch.merge_into(&mut existing);
        assert_eq!(existing.value, Some(10.0));
        assert_eq!(existing.auction_id(), Some(2));

        let patch: OfferRequest = serde_json::from_str(r#"{"id":1,"offerValue":11.0}"#).unwrap();
        patch.merge_into(&mut existing);
        assert_eq!(existing.value, Some(11.0));
        assert_eq!(existing.auction_id(), Some(2));
    }

    #[test]
    fn test_into_offer_replaces_everything() {
        let req: OfferRequest = serde_json::from_str(r#"{"id":8}"#).unwrap();
        let offer = req.into_offer();
        assert_eq!(offer.id, Some(8));
        assert_eq!(offer.value, None);
        assert_eq!(offer.auction_id(), None);
    }
}
