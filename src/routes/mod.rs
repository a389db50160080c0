pub mod auctions;

pub mod offers;

pub use auctions::configure_auction_routes;
pub use offers::configure_offer_routes;
