//! 预导入模块，方便使用

pub use super::auctions::{
    ActiveModel as AuctionActiveModel, Entity as Auctions, Model as AuctionModel,
};
pub use super::offers::{ActiveModel as OfferActiveModel, Entity as Offers, Model as OfferModel};
