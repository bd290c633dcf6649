#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Empty, Env,
    MessageInfo, Order, QuerierWrapper, Reply, Response, StdResult, Storage, SubMsg, Uint128,
    WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw721::{Cw721ExecuteMsg, Cw721QueryMsg, NftInfoResponse, OwnerOfResponse};
use cw721_base::Extension;
use cw_utils::{may_pay, must_pay, nonpayable, parse_reply_instantiate_data};
use semver::Version;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MarketItemResponse, MigrateMsg, QueryMsg,
};
use crate::state::{
    Bid, BidStatus, Collection, Config, CreatorProfile, ItemStatus, MarketItem, BIDS, BID_COUNT,
    COLLECTED_LISTING_FEE, COLLECTIONS, COLLECTION_COUNT, CONFIG, CREATORS, MARKET_ITEMS,
    MARKET_ITEM_COUNT, NFT_ADDRESS,
};

pub const CONTRACT_NAME: &str = "nft-marketplace";
pub const CONTRACT_VERSION: &str = "0.1.0";

pub const INSTANTIATE_TOKEN_REPLY: u64 = 1;
pub const MINT_REPLY: u64 = 2;
pub const SALE_REPLY: u64 = 3;
pub const BID_REPLY: u64 = 4;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.listing_fee.is_zero() {
        return Err(ContractError::ZeroListingFee {});
    }

    let config = Config {
        owner: info.sender,
        listing_fee: msg.listing_fee,
        denom: msg.denom,
    };
    CONFIG.save(deps.storage, &config)?;
    COLLECTED_LISTING_FEE.save(deps.storage, &Uint128::zero())?;
    COLLECTION_COUNT.save(deps.storage, &0u64)?;
    MARKET_ITEM_COUNT.save(deps.storage, &0u64)?;
    BID_COUNT.save(deps.storage, &0u64)?;

    // The token contract is owned by the marketplace: items can only be
    // minted through mint_token.
    let submsg = SubMsg::reply_on_success(
        WasmMsg::Instantiate {
            admin: None,
            code_id: msg.cw721_code_id,
            msg: to_json_binary(&cw721_base::InstantiateMsg {
                name: msg.token_name,
                symbol: msg.token_symbol,
                minter: env.contract.address.to_string(),
            })?,
            funds: vec![],
            label: "marketplace-items".to_string(),
        },
        INSTANTIATE_TOKEN_REPLY,
    );

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("listing_fee", config.listing_fee.to_string())
        .add_submessage(submsg))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateCollection {
            image,
            name,
            description,
        } => execute_create_collection(deps, info, image, name, description),
        ExecuteMsg::MintToken {
            token_uri,
            name,
            description,
            collection_id,
        } => execute_mint_token(deps, env, info, token_uri, name, description, collection_id),
        ExecuteMsg::CreateSale { item_id, price } => {
            execute_create_sale(deps, info, item_id, price)
        }
        ExecuteMsg::CancelSale { item_id } => execute_cancel_sale(deps, info, item_id),
        ExecuteMsg::BuyMarketItem { item_id } => execute_buy_market_item(deps, info, item_id),
        ExecuteMsg::BidMarketItem { item_id } => execute_bid_market_item(deps, info, item_id),
        ExecuteMsg::AcceptBid { item_id, bid_id } => {
            execute_accept_bid(deps, info, item_id, bid_id)
        }
        ExecuteMsg::RejectBid { item_id, bid_id } => {
            execute_reject_bid(deps, info, item_id, bid_id)
        }
        ExecuteMsg::TransferListingFee {} => execute_transfer_listing_fee(deps, info),
        ExecuteMsg::ChangeCreatorName { name } => execute_change_creator_name(deps, info, name),
        ExecuteMsg::ChangeCreatorImage { image } => {
            execute_change_creator_image(deps, info, image)
        }
    }
}

pub fn execute_create_collection(
    deps: DepsMut,
    info: MessageInfo,
    image: String,
    name: String,
    description: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    if name.trim().is_empty() {
        return Err(ContractError::EmptyName {});
    }

    let collection_id =
        COLLECTION_COUNT.update(deps.storage, |count: u64| -> StdResult<u64> { Ok(count + 1) })?;

    let collection = Collection {
        collection_id,
        image,
        name,
        description,
        creator: info.sender,
    };
    COLLECTIONS.save(deps.storage, collection_id, &collection)?;

    Ok(Response::new()
        .add_attribute("action", "create_collection")
        .add_attribute("collection_id", collection_id.to_string())
        .add_attribute("name", collection.name)
        .add_attribute("creator", collection.creator))
}

pub fn execute_mint_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_uri: String,
    name: String,
    description: String,
    collection_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    if name.trim().is_empty() {
        return Err(ContractError::EmptyName {});
    }

    let collection = COLLECTIONS
        .may_load(deps.storage, collection_id)?
        .ok_or(ContractError::CollectionNotOwned {})?;
    if collection.creator != info.sender {
        return Err(ContractError::CollectionNotOwned {});
    }

    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let item_id =
        MARKET_ITEM_COUNT.update(deps.storage, |count: u64| -> StdResult<u64> { Ok(count + 1) })?;

    let item = MarketItem {
        item_id,
        name,
        description,
        price: Uint128::zero(),
        collection_id,
        created_on: env.block.time,
        status: ItemStatus::NotForSale,
        creator: info.sender.clone(),
    };
    MARKET_ITEMS.save(deps.storage, item_id, &item)?;

    // The market item id doubles as the cw721 token id.
    let submsg = SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: nft_address.to_string(),
            msg: to_json_binary(&cw721_base::ExecuteMsg::<Extension, Empty>::Mint {
                token_id: item_id.to_string(),
                owner: info.sender.to_string(),
                token_uri: Some(token_uri),
                extension: None,
            })?,
            funds: vec![],
        },
        MINT_REPLY,
    );

    Ok(Response::new()
        .add_attribute("action", "mint_token")
        .add_attribute("item_id", item_id.to_string())
        .add_attribute("collection_id", collection_id.to_string())
        .add_attribute("owner", info.sender)
        .add_submessage(submsg))
}

pub fn execute_create_sale(
    deps: DepsMut,
    info: MessageInfo,
    item_id: u64,
    price: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut item = MARKET_ITEMS
        .may_load(deps.storage, item_id)?
        .ok_or(ContractError::NoSuchToken {})?;

    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let token_owner = query_token_owner(&deps.querier, &nft_address, item_id)?;
    if token_owner.owner != info.sender {
        return Err(ContractError::TokenNotOwned {});
    }

    match item.status {
        ItemStatus::ForSale => return Err(ContractError::AlreadyForSale {}),
        ItemStatus::Sold => return Err(ContractError::AlreadySold {}),
        ItemStatus::NotForSale => {}
    }

    let paid = must_pay(&info, &config.denom)?;
    if paid != config.listing_fee {
        return Err(ContractError::ListingFeeMismatch {
            fee: config.listing_fee,
        });
    }
    COLLECTED_LISTING_FEE.update(deps.storage, |collected| -> StdResult<_> {
        Ok(collected.checked_add(paid)?)
    })?;

    item.price = price;
    item.status = ItemStatus::ForSale;
    MARKET_ITEMS.save(deps.storage, item_id, &item)?;

    Ok(Response::new()
        .add_attribute("action", "create_sale")
        .add_attribute("item_id", item_id.to_string())
        .add_attribute("price", price.to_string())
        .add_attribute("seller", info.sender))
}

pub fn execute_cancel_sale(
    deps: DepsMut,
    info: MessageInfo,
    item_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut item = MARKET_ITEMS
        .may_load(deps.storage, item_id)?
        .ok_or(ContractError::NoSuchToken {})?;

    if item.status != ItemStatus::ForSale {
        return Err(ContractError::ItemNotForSale {});
    }

    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let token_owner = query_token_owner(&deps.querier, &nft_address, item_id)?;
    if token_owner.owner != info.sender {
        return Err(ContractError::TokenNotOwned {});
    }

    item.status = ItemStatus::NotForSale;
    MARKET_ITEMS.save(deps.storage, item_id, &item)?;

    Ok(Response::new()
        .add_attribute("action", "cancel_sale")
        .add_attribute("item_id", item_id.to_string())
        .add_attribute("seller", info.sender))
}

pub fn execute_buy_market_item(
    deps: DepsMut,
    info: MessageInfo,
    item_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut item = MARKET_ITEMS
        .may_load(deps.storage, item_id)?
        .ok_or(ContractError::NoSuchToken {})?;

    if item.status != ItemStatus::ForSale {
        return Err(ContractError::ItemNotForSale {});
    }
    if item.creator == info.sender {
        return Err(ContractError::OwnItemPurchase {});
    }

    let paid = must_pay(&info, &config.denom)?;
    if paid != item.price {
        return Err(ContractError::PriceMismatch { price: item.price });
    }

    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let token_owner = query_token_owner(&deps.querier, &nft_address, item_id)?;

    // The seller must have approved the marketplace on the token contract;
    // an unapproved transfer aborts the whole purchase.
    let transfer = SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: nft_address.to_string(),
            msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
                recipient: info.sender.to_string(),
                token_id: item_id.to_string(),
            })?,
            funds: vec![],
        },
        SALE_REPLY,
    );

    let payment = CosmosMsg::Bank(BankMsg::Send {
        to_address: token_owner.owner.clone(),
        amount: vec![Coin {
            denom: config.denom,
            amount: paid,
        }],
    });

    item.status = ItemStatus::Sold;
    MARKET_ITEMS.save(deps.storage, item_id, &item)?;

    Ok(Response::new()
        .add_attribute("action", "buy_market_item")
        .add_attribute("item_id", item_id.to_string())
        .add_attribute("seller", token_owner.owner)
        .add_attribute("buyer", info.sender)
        .add_attribute("price", paid.to_string())
        .add_submessage(transfer)
        .add_message(payment))
}

pub fn execute_bid_market_item(
    deps: DepsMut,
    info: MessageInfo,
    item_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let item = MARKET_ITEMS
        .may_load(deps.storage, item_id)?
        .ok_or(ContractError::NoSuchToken {})?;

    if item.creator == info.sender {
        return Err(ContractError::OwnItemBid {});
    }

    let amount = may_pay(&info, &config.denom)?;
    if amount.is_zero() {
        return Err(ContractError::BidTooLow {
            denom: config.denom,
        });
    }

    let bid_id = BID_COUNT.update(deps.storage, |count: u64| -> StdResult<u64> { Ok(count + 1) })?;

    // Funds stay escrowed on the contract until the bid is accepted or
    // rejected.
    let bid = Bid {
        bid_id,
        item_id,
        amount,
        bidder: info.sender.clone(),
        status: BidStatus::Idle,
    };
    BIDS.save(deps.storage, bid_id, &bid)?;

    Ok(Response::new()
        .add_attribute("action", "bid_market_item")
        .add_attribute("item_id", item_id.to_string())
        .add_attribute("bid_id", bid_id.to_string())
        .add_attribute("bidder", info.sender)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_accept_bid(
    deps: DepsMut,
    info: MessageInfo,
    item_id: u64,
    bid_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    let mut item = MARKET_ITEMS
        .may_load(deps.storage, item_id)?
        .ok_or(ContractError::NoSuchToken {})?;
    let mut bid = load_item_bid(deps.storage, item_id, bid_id)?;

    if bid.status != BidStatus::Idle {
        return Err(ContractError::BidSettled {});
    }

    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let token_owner = query_token_owner(&deps.querier, &nft_address, item_id)?;
    ensure_owner_or_approved(&token_owner, &info.sender)?;

    let transfer = SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: nft_address.to_string(),
            msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
                recipient: bid.bidder.to_string(),
                token_id: item_id.to_string(),
            })?,
            funds: vec![],
        },
        BID_REPLY,
    );

    let proceeds = CosmosMsg::Bank(BankMsg::Send {
        to_address: token_owner.owner,
        amount: vec![Coin {
            denom: config.denom,
            amount: bid.amount,
        }],
    });

    bid.status = BidStatus::Accepted;
    BIDS.save(deps.storage, bid_id, &bid)?;
    item.status = ItemStatus::Sold;
    MARKET_ITEMS.save(deps.storage, item_id, &item)?;

    Ok(Response::new()
        .add_attribute("action", "accept_bid")
        .add_attribute("item_id", item_id.to_string())
        .add_attribute("bid_id", bid_id.to_string())
        .add_attribute("bidder", bid.bidder)
        .add_attribute("amount", bid.amount.to_string())
        .add_submessage(transfer)
        .add_message(proceeds))
}

pub fn execute_reject_bid(
    deps: DepsMut,
    info: MessageInfo,
    item_id: u64,
    bid_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    let mut bid = load_item_bid(deps.storage, item_id, bid_id)?;

    if bid.status != BidStatus::Idle {
        return Err(ContractError::BidSettled {});
    }

    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let token_owner = query_token_owner(&deps.querier, &nft_address, item_id)?;
    ensure_owner_or_approved(&token_owner, &info.sender)?;

    let refund = CosmosMsg::Bank(BankMsg::Send {
        to_address: bid.bidder.to_string(),
        amount: vec![Coin {
            denom: config.denom,
            amount: bid.amount,
        }],
    });

    bid.status = BidStatus::Rejected;
    BIDS.save(deps.storage, bid_id, &bid)?;

    Ok(Response::new()
        .add_attribute("action", "reject_bid")
        .add_attribute("item_id", item_id.to_string())
        .add_attribute("bid_id", bid_id.to_string())
        .add_attribute("bidder", bid.bidder)
        .add_message(refund))
}

pub fn execute_transfer_listing_fee(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    let collected = COLLECTED_LISTING_FEE.load(deps.storage)?;
    if collected.is_zero() {
        return Err(ContractError::NoCollectedFee {});
    }
    COLLECTED_LISTING_FEE.save(deps.storage, &Uint128::zero())?;

    let payout = CosmosMsg::Bank(BankMsg::Send {
        to_address: config.owner.to_string(),
        amount: vec![Coin {
            denom: config.denom,
            amount: collected,
        }],
    });

    Ok(Response::new()
        .add_attribute("action", "transfer_listing_fee")
        .add_attribute("amount", collected.to_string())
        .add_message(payout))
}

pub fn execute_change_creator_name(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    if name.trim().is_empty() {
        return Err(ContractError::EmptyName {});
    }

    let mut profile = CREATORS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    profile.name = name.clone();
    CREATORS.save(deps.storage, &info.sender, &profile)?;

    Ok(Response::new()
        .add_attribute("action", "change_creator_name")
        .add_attribute("creator", info.sender)
        .add_attribute("name", name))
}

pub fn execute_change_creator_image(
    deps: DepsMut,
    info: MessageInfo,
    image: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let mut profile = CREATORS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    profile.image = image.clone();
    CREATORS.save(deps.storage, &info.sender, &profile)?;

    Ok(Response::new()
        .add_attribute("action", "change_creator_image")
        .add_attribute("creator", info.sender)
        .add_attribute("image", image))
}

fn load_item_bid(
    storage: &dyn Storage,
    item_id: u64,
    bid_id: u64,
) -> Result<Bid, ContractError> {
    let bid = BIDS
        .may_load(storage, bid_id)?
        .ok_or(ContractError::NoSuchBid {})?;
    if bid.item_id != item_id {
        return Err(ContractError::NoSuchBid {});
    }
    Ok(bid)
}

fn query_token_owner(
    querier: &QuerierWrapper,
    nft_address: &Addr,
    item_id: u64,
) -> StdResult<OwnerOfResponse> {
    querier.query_wasm_smart(
        nft_address,
        &Cw721QueryMsg::OwnerOf {
            token_id: item_id.to_string(),
            include_expired: Some(false),
        },
    )
}

fn ensure_owner_or_approved(
    token_owner: &OwnerOfResponse,
    sender: &Addr,
) -> Result<(), ContractError> {
    if token_owner.owner == sender.as_str()
        || token_owner
            .approvals
            .iter()
            .any(|approval| approval.spender == sender.as_str())
    {
        return Ok(());
    }
    Err(ContractError::Unauthorized {})
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        INSTANTIATE_TOKEN_REPLY => {
            let res = parse_reply_instantiate_data(reply)?;
            let nft_address = deps.api.addr_validate(&res.contract_address)?;
            NFT_ADDRESS.save(deps.storage, &nft_address)?;
            Ok(Response::new()
                .add_attribute("operation", "token_instantiated")
                .add_attribute("nft_address", nft_address))
        }
        MINT_REPLY => Ok(Response::new().add_attribute("operation", "token_minted")),
        SALE_REPLY => Ok(Response::new().add_attribute("operation", "item_sold")),
        BID_REPLY => Ok(Response::new().add_attribute("operation", "bid_settled")),
        _ => Err(ContractError::UnrecognizedReply {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            stored: stored.contract,
            requested: CONTRACT_NAME.to_string(),
        });
    }

    let stored_version: Version = stored.version.parse()?;
    let new_version: Version = CONTRACT_VERSION.parse()?;
    if stored_version >= new_version {
        return Err(ContractError::CannotMigrate {
            stored: stored.version,
            requested: CONTRACT_VERSION.to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ListingFee {} => to_json_binary(&CONFIG.load(deps.storage)?.listing_fee),
        QueryMsg::CollectedListingFee {} => {
            to_json_binary(&COLLECTED_LISTING_FEE.load(deps.storage)?)
        }
        QueryMsg::Balance {} => to_json_binary(&query_balance(deps, env)?),
        QueryMsg::Collection { collection_id } => {
            to_json_binary(&COLLECTIONS.load(deps.storage, collection_id)?)
        }
        QueryMsg::Collections { from_index, limit } => {
            to_json_binary(&query_collections(deps, from_index, limit)?)
        }
        QueryMsg::CollectionCount {} => to_json_binary(&COLLECTION_COUNT.load(deps.storage)?),
        QueryMsg::MarketItem { item_id } => to_json_binary(&query_market_item(deps, item_id)?),
        QueryMsg::MarketItems { from_index, limit } => {
            to_json_binary(&query_market_items(deps, from_index, limit)?)
        }
        QueryMsg::MarketItemCount {} => to_json_binary(&MARKET_ITEM_COUNT.load(deps.storage)?),
        QueryMsg::Bid { bid_id } => to_json_binary(&BIDS.load(deps.storage, bid_id)?),
        QueryMsg::ItemBids {
            item_id,
            from_index,
            limit,
        } => to_json_binary(&query_item_bids(deps, item_id, from_index, limit)?),
        QueryMsg::BidCount {} => to_json_binary(&BID_COUNT.load(deps.storage)?),
        QueryMsg::Creator { address } => to_json_binary(&query_creator(deps, address)?),
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        nft_address,
        listing_fee: config.listing_fee,
        denom: config.denom,
    })
}

pub fn query_balance(deps: Deps, env: Env) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address, config.denom)?;
    Ok(balance.amount)
}

pub fn query_collections(
    deps: Deps,
    from_index: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Vec<Collection>> {
    let from_index = from_index.unwrap_or(0);
    let limit = limit.unwrap_or(10);

    COLLECTIONS
        .range(deps.storage, None, None, Order::Ascending)
        .skip(from_index as usize)
        .take(limit as usize)
        .map(|entry| entry.map(|(_, collection)| collection))
        .collect()
}

pub fn query_market_item(deps: Deps, item_id: u64) -> StdResult<MarketItemResponse> {
    let item = MARKET_ITEMS.load(deps.storage, item_id)?;
    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let token_uri = query_token_uri(&deps.querier, &nft_address, item_id)?;
    Ok(MarketItemResponse { item, token_uri })
}

pub fn query_market_items(
    deps: Deps,
    from_index: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Vec<MarketItemResponse>> {
    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let from_index = from_index.unwrap_or(0);
    let limit = limit.unwrap_or(10);

    MARKET_ITEMS
        .range(deps.storage, None, None, Order::Ascending)
        .skip(from_index as usize)
        .take(limit as usize)
        .map(|entry| {
            let (_, item) = entry?;
            let token_uri = query_token_uri(&deps.querier, &nft_address, item.item_id)?;
            Ok(MarketItemResponse { item, token_uri })
        })
        .collect()
}

fn query_token_uri(
    querier: &QuerierWrapper,
    nft_address: &Addr,
    item_id: u64,
) -> StdResult<Option<String>> {
    let info: NftInfoResponse<Extension> = querier.query_wasm_smart(
        nft_address,
        &Cw721QueryMsg::NftInfo {
            token_id: item_id.to_string(),
        },
    )?;
    Ok(info.token_uri)
}

pub fn query_item_bids(
    deps: Deps,
    item_id: u64,
    from_index: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Vec<Bid>> {
    let from_index = from_index.unwrap_or(0);
    let limit = limit.unwrap_or(10);

    BIDS.range(deps.storage, None, None, Order::Ascending)
        .filter(|entry| {
            entry
                .as_ref()
                .map_or(true, |(_, bid)| bid.item_id == item_id)
        })
        .skip(from_index as usize)
        .take(limit as usize)
        .map(|entry| entry.map(|(_, bid)| bid))
        .collect()
}

pub fn query_creator(deps: Deps, address: String) -> StdResult<CreatorProfile> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(CREATORS.may_load(deps.storage, &addr)?.unwrap_or_default())
}
