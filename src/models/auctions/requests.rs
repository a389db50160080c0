use serde::Deserialize;
use ts_rs::TS;

use super::entities::Auction;

// 拍卖请求体（创建、整体更新、部分更新共用）
//
// - 创建：`id` 必须为空
// - 更新：`id` 必须与路径中的 ID 一致
// - 部分更新：为 null 或缺省的字段保持原值
//
// 请求中的 `auctionNames` 会被忽略，报价归属通过报价接口维护
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auction.ts")]
pub struct AuctionRequest {
    pub id: Option<i64>,
    #[serde(rename = "auctionDescription")]
    pub description: Option<String>,
}

impl AuctionRequest {
    pub fn into_auction(self) -> Auction {
        Auction::new(self.id, self.description)
    }

    /// 将非空字段合并到已有拍卖上
    pub fn merge_into(self, existing: &mut Auction) {
        if let Some(description) = self.description {
            existing.description = Some(description);
        }
    }
}
