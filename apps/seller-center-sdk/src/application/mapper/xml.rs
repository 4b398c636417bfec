//! Structural access to response documents.
//!
//! A child element that is absent reads as `None`; one that is present but
//! empty reads as `Some("")`. Typed fields (numbers, flags, times) treat an
//! empty element as absent since there is no value to parse.
//!
//! Element text is every text node under the element joined in order, with
//! comments skipped and surrounding whitespace trimmed. Text and typed fields
//! follow the same rule, so a whitespace-only element reads as empty.

use chrono::{DateTime, NaiveDateTime};
use roxmltree::{Document, Node};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::application::error::SellerCenterError;
use crate::application::ports::ResponseBody;

const RESPONSE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub(super) fn parse(body: &ResponseBody) -> Result<Document<'_>, SellerCenterError> {
    Document::parse(body.as_str())
        .map_err(|e| SellerCenterError::mapping(format!("malformed XML: {e}")))
}

/// The `Body` element under the document root.
pub(super) fn body<'a, 'input>(
    doc: &'a Document<'input>,
) -> Result<Node<'a, 'input>, SellerCenterError> {
    let root = doc.root_element();
    child(root, "Body").ok_or_else(|| {
        SellerCenterError::mapping(format!(
            "missing Body under {}",
            root.tag_name().name()
        ))
    })
}

pub(super) fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

pub(super) fn required_child<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Result<Node<'a, 'input>, SellerCenterError> {
    child(node, name).ok_or_else(|| {
        SellerCenterError::mapping(format!(
            "missing {name} under {}",
            node.tag_name().name()
        ))
    })
}

/// Element children of `node` named `name`, in document order.
pub(super) fn elements<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

pub(super) fn text(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name).map(content)
}

/// All text under `node`, comments skipped, surrounding whitespace trimmed.
pub(super) fn content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|t| t.text())
        .collect::<String>()
        .trim()
        .to_string()
}

pub(super) fn required_text(node: Node<'_, '_>, name: &str) -> Result<String, SellerCenterError> {
    text(node, name).ok_or_else(|| {
        SellerCenterError::mapping(format!(
            "missing {name} under {}",
            node.tag_name().name()
        ))
    })
}

fn non_empty(node: Node<'_, '_>, name: &str) -> Option<String> {
    text(node, name).filter(|s| !s.is_empty())
}

pub(super) fn parsed<T: FromStr>(
    node: Node<'_, '_>,
    name: &str,
) -> Result<Option<T>, SellerCenterError> {
    non_empty(node, name)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| SellerCenterError::mapping(format!("unreadable {name}: '{raw}'")))
        })
        .transpose()
}

pub(super) fn required_parsed<T: FromStr>(
    node: Node<'_, '_>,
    name: &str,
) -> Result<T, SellerCenterError> {
    parsed(node, name)?.ok_or_else(|| {
        SellerCenterError::mapping(format!(
            "missing {name} under {}",
            node.tag_name().name()
        ))
    })
}

pub(super) fn decimal(node: Node<'_, '_>, name: &str) -> Result<Option<Decimal>, SellerCenterError> {
    parsed::<Decimal>(node, name)
}

pub(super) fn flag(node: Node<'_, '_>, name: &str) -> Result<Option<bool>, SellerCenterError> {
    non_empty(node, name)
        .map(|raw| match raw.as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            _ => Err(SellerCenterError::mapping(format!(
                "unreadable {name}: '{raw}'"
            ))),
        })
        .transpose()
}

pub(super) fn datetime(
    node: Node<'_, '_>,
    name: &str,
) -> Result<Option<NaiveDateTime>, SellerCenterError> {
    non_empty(node, name)
        .map(|raw| {
            parse_response_time(&raw)
                .ok_or_else(|| SellerCenterError::mapping(format!("unreadable {name}: '{raw}'")))
        })
        .transpose()
}

pub(super) fn required_datetime(
    node: Node<'_, '_>,
    name: &str,
) -> Result<NaiveDateTime, SellerCenterError> {
    datetime(node, name)?.ok_or_else(|| {
        SellerCenterError::mapping(format!(
            "missing {name} under {}",
            node.tag_name().name()
        ))
    })
}

fn parse_response_time(raw: &str) -> Option<NaiveDateTime> {
    RESPONSE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}
