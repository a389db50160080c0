pub mod auctions;
pub mod common;
pub mod offers;

pub use common::ErrorResponse;

// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用请求错误 1xxx
    BadRequest = 1000,
    IdExists = 1001,
    IdNull = 1002,
    IdInvalid = 1003,
    IdNotFound = 1004,
    UnsupportedMediaType = 1415,

    // 拍卖 2xxx
    AuctionNotFound = 2001,

    // 报价 3xxx
    OfferNotFound = 3001,
    OfferAuctionNotFound = 3002,

    // 服务端错误 5xxx
    InternalServerError = 5000,
}

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
