//! Response normalization
//!
//! Maps the loosely-typed tree produced by [`super::xml::parse_document`] into
//! [`CatalogSearchResult`] and [`CatalogItemDetail`]. The tree itself never
//! leaves this module.

use serde_json::Value;

use super::records::{CatalogItemDetail, CatalogSearchResult};
use super::xml::TEXT_KEY;
use crate::error::{CatalogError, Result};

/// Item type kept by search; expansions and accessories are dropped.
pub const BOARD_GAME_TYPE: &str = "boardgame";

const PRIMARY_NAME_TYPE: &str = "primary";

// == To List ==
/// Reads a field that the upstream emits as either one value or an array.
///
/// Absent → empty, bare value → one element, array → its elements.
pub fn to_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    }
}

fn first(value: Option<&Value>) -> Option<&Value> {
    to_list(value).into_iter().next()
}

/// Element text: a collapsed string, or the text key of an object.
fn text_of(value: &Value) -> Option<&str> {
    match value {
        Value::String(text) => Some(text.as_str()),
        Value::Object(object) => object.get(TEXT_KEY).and_then(Value::as_str),
        _ => None,
    }
}

fn attribute<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Reads `<field value="..."/>`, also accepting `<field>...</field>`.
fn value_of<'a>(item: &'a Value, field: &str) -> Option<&'a str> {
    let node = first(item.get(field))?;
    attribute(node, "value").or_else(|| text_of(node))
}

fn parse_number<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|text| text.trim().parse().ok())
}

fn non_blank_text(item: &Value, field: &str) -> Option<String> {
    first(item.get(field))
        .and_then(text_of)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn parse_id(raw: Option<&str>) -> Result<u64> {
    parse_number(raw).ok_or_else(|| {
        CatalogError::Upstream(format!("item has no usable id: {:?}", raw.unwrap_or("")))
    })
}

/// The `<items>` element every catalog response is wrapped in.
fn items_root(document: &Value) -> Result<&Value> {
    document
        .get("items")
        .ok_or_else(|| CatalogError::Upstream("response has no <items> root".to_string()))
}

// == Name Records ==
struct NameRecord {
    is_primary: bool,
    value: String,
}

impl NameRecord {
    fn from_raw(raw: &Value) -> Self {
        let value = attribute(raw, "value")
            .or_else(|| text_of(raw))
            .unwrap_or_default()
            .to_string();
        Self {
            is_primary: attribute(raw, "type") == Some(PRIMARY_NAME_TYPE),
            value,
        }
    }
}

/// Splits name records into the canonical title and the remaining names.
///
/// The record tagged primary wins, otherwise the first record. No records
/// yields an empty title.
fn split_names(raw_names: Option<&Value>) -> (String, Vec<String>) {
    let records: Vec<NameRecord> = to_list(raw_names)
        .into_iter()
        .map(NameRecord::from_raw)
        .collect();

    let chosen = records
        .iter()
        .position(|record| record.is_primary)
        .or(if records.is_empty() { None } else { Some(0) });

    let mut title = String::new();
    let mut alternates = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        if Some(index) == chosen {
            title = record.value;
        } else {
            alternates.push(record.value);
        }
    }
    (title, alternates)
}

// == Search ==
/// Normalizes a parsed search response into results, keeping only board games.
pub fn search_results(document: &Value) -> Result<Vec<CatalogSearchResult>> {
    let items = items_root(document)?;

    to_list(items.get("item"))
        .into_iter()
        .filter(|raw| attribute(raw, "type") == Some(BOARD_GAME_TYPE))
        .map(search_result)
        .collect()
}

fn search_result(raw: &Value) -> Result<CatalogSearchResult> {
    let (name, _) = split_names(raw.get("name"));

    Ok(CatalogSearchResult {
        id: parse_id(attribute(raw, "id"))?,
        name,
        year: parse_number(value_of(raw, "yearpublished")),
        rank: parse_number(value_of(raw, "rank")),
        image_url: non_blank_text(raw, "thumbnail").or_else(|| non_blank_text(raw, "image")),
    })
}

// == Detail ==
/// Normalizes a parsed thing response for `requested_id`.
///
/// Fails with `NotFound` when the response carries no item.
pub fn item_detail(document: &Value, requested_id: &str) -> Result<CatalogItemDetail> {
    let items = items_root(document)?;
    let item = first(items.get("item")).ok_or_else(|| {
        CatalogError::NotFound(format!("No catalog item with id {}", requested_id))
    })?;

    let (name, alternate_names) = split_names(item.get("name"));

    let ratings = first(item.get("statistics")).and_then(|stats| first(stats.get("ratings")));
    let complexity_weight = ratings
        .and_then(|ratings| value_of(ratings, "averageweight"))
        .or_else(|| value_of(item, "averageweight"));

    Ok(CatalogItemDetail {
        id: parse_id(attribute(item, "id").or(Some(requested_id)))?,
        name,
        alternate_names,
        description: first(item.get("description"))
            .and_then(text_of)
            .unwrap_or_default()
            .to_string(),
        year: parse_number(value_of(item, "yearpublished")),
        min_players: parse_number(value_of(item, "minplayers")).unwrap_or(0),
        max_players: parse_number(value_of(item, "maxplayers")).unwrap_or(0),
        playing_time_minutes: parse_number(value_of(item, "playingtime")).unwrap_or(0),
        image_url: non_blank_text(item, "image"),
        thumbnail_url: non_blank_text(item, "thumbnail"),
        complexity_weight: parse_number(complexity_weight).unwrap_or(0.0),
    })
}
