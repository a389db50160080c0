pub mod auctions;
pub mod offers;

pub use auctions::AuctionService;
pub use offers::OfferService;
