use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub listing_fee: Uint128,
    pub denom: String,
}

#[cw_serde]
pub struct Collection {
    pub collection_id: u64,
    pub image: String,
    pub name: String,
    pub description: String,
    pub creator: Addr,
}

#[cw_serde]
pub enum ItemStatus {
    NotForSale,
    ForSale,
    Sold,
}

#[cw_serde]
pub struct MarketItem {
    pub item_id: u64,
    pub name: String,
    pub description: String,
    pub price: Uint128,
    pub collection_id: u64,
    pub created_on: Timestamp,
    pub status: ItemStatus,
    pub creator: Addr,
}

#[cw_serde]
pub enum BidStatus {
    Idle,
    Accepted,
    Rejected,
}

#[cw_serde]
pub struct Bid {
    pub bid_id: u64,
    pub item_id: u64,
    pub amount: Uint128,
    pub bidder: Addr,
    pub status: BidStatus,
}

#[cw_serde]
#[derive(Default)]
pub struct CreatorProfile {
    pub name: String,
    pub image: String,
}

pub const CONFIG: Item<Config> = Item::new("config");
// Written by the instantiate reply once the token contract exists.
pub const NFT_ADDRESS: Item<Addr> = Item::new("nft_address");
pub const COLLECTED_LISTING_FEE: Item<Uint128> = Item::new("collected_listing_fee");
pub const COLLECTIONS: Map<u64, Collection> = Map::new("collections"); // (collection_id)
pub const COLLECTION_COUNT: Item<u64> = Item::new("collection_count");
pub const MARKET_ITEMS: Map<u64, MarketItem> = Map::new("market_items"); // (item_id)
pub const MARKET_ITEM_COUNT: Item<u64> = Item::new("market_item_count");
pub const BIDS: Map<u64, Bid> = Map::new("bids"); // (bid_id)
pub const BID_COUNT: Item<u64> = Item::new("bid_count");
pub const CREATORS: Map<&Addr, CreatorProfile> = Map::new("creators");
