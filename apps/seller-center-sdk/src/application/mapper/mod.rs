//! Response Mapper
//!
//! Converts a response document into domain records. Each remote action
//! nests its records differently, so mapping is selected by [`ResponseShape`]
//! rather than by probing the document:
//!
//! | Shape | Path under `Body` |
//! |---|---|
//! | `SingleOrder` | `Orders/Order` (exactly one) |
//! | `Orders` | `Orders/Order*` |
//! | `OrderItems` | `OrderItems/OrderItem*` |
//! | `MultipleOrderItems` | `Orders/Order*/OrderItems/OrderItem*` |
//! | `StatusChange` | `OrderItems/OrderItem*` (no owning order) |
//! | `FailureReasons` | `Reasons/Reason*` |
//! | `Empty` | nothing |
//!
//! Records come back in document order; an empty container yields an empty
//! list.

mod failure_reasons;
mod order_items;
mod orders;
mod xml;

use crate::application::error::SellerCenterError;
use crate::application::ports::ResponseBody;
use crate::domain::{FailureReason, Order, OrderId, OrderItem, OrderItemStatusUpdate};

/// Nesting shape of a response `Body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    /// Exactly one order.
    SingleOrder,
    /// A collection of orders.
    Orders,
    /// A collection of items of one order.
    OrderItems,
    /// Orders, each nesting its own items.
    MultipleOrderItems,
    /// Items echoed back by a status change.
    StatusChange,
    /// A collection of failure reasons.
    FailureReasons,
    /// No records.
    Empty,
}

/// Records mapped from one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappedResponse {
    /// One order.
    Order(Box<Order>),
    /// Orders in document order.
    Orders(Vec<Order>),
    /// Order items in document order.
    OrderItems(Vec<OrderItem>),
    /// Status-change acknowledgements in document order.
    StatusChanges(Vec<OrderItemStatusUpdate>),
    /// Failure reasons in document order.
    FailureReasons(Vec<FailureReason>),
    /// Nothing to map.
    Empty,
}

impl MappedResponse {
    /// Number of records mapped.
    #[must_use]
    pub fn record_count(&self) -> usize {
        match self {
            Self::Order(_) => 1,
            Self::Orders(orders) => orders.len(),
            Self::OrderItems(items) => items.len(),
            Self::StatusChanges(updates) => updates.len(),
            Self::FailureReasons(reasons) => reasons.len(),
            Self::Empty => 0,
        }
    }

    /// Human-readable summary for the call log.
    #[must_use]
    pub fn summary(&self) -> String {
        let n = self.record_count();
        match self {
            Self::Order(order) => format!("order {}", order.order_id),
            Self::Orders(_) => plural(n, "order"),
            Self::OrderItems(_) => plural(n, "order item"),
            Self::StatusChanges(_) => format!("{} updated", plural(n, "item")),
            Self::FailureReasons(_) => plural(n, "failure reason"),
            Self::Empty => "status changed".to_string(),
        }
    }

    /// The single order, if this is one.
    pub fn into_order(self) -> Result<Order, SellerCenterError> {
        match self {
            Self::Order(order) => Ok(*order),
            other => Err(other.unexpected("a single order")),
        }
    }

    /// The orders, if these are orders.
    pub fn into_orders(self) -> Result<Vec<Order>, SellerCenterError> {
        match self {
            Self::Orders(orders) => Ok(orders),
            other => Err(other.unexpected("orders")),
        }
    }

    /// The order items, if these are order items.
    pub fn into_order_items(self) -> Result<Vec<OrderItem>, SellerCenterError> {
        match self {
            Self::OrderItems(items) => Ok(items),
            other => Err(other.unexpected("order items")),
        }
    }

    /// The status-change acknowledgements, if these are those.
    pub fn into_status_changes(self) -> Result<Vec<OrderItemStatusUpdate>, SellerCenterError> {
        match self {
            Self::StatusChanges(updates) => Ok(updates),
            other => Err(other.unexpected("status changes")),
        }
    }

    /// The failure reasons, if these are failure reasons.
    pub fn into_failure_reasons(self) -> Result<Vec<FailureReason>, SellerCenterError> {
        match self {
            Self::FailureReasons(reasons) => Ok(reasons),
            other => Err(other.unexpected("failure reasons")),
        }
    }

    fn unexpected(&self, expected: &str) -> SellerCenterError {
        SellerCenterError::mapping(format!("expected {expected}, mapped {}", self.summary()))
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Map `body` according to `shape`.
pub fn map_response(
    shape: ResponseShape,
    body: &ResponseBody,
) -> Result<MappedResponse, SellerCenterError> {
    Ok(match shape {
        ResponseShape::SingleOrder => MappedResponse::Order(Box::new(map_single_order(body)?)),
        ResponseShape::Orders => MappedResponse::Orders(map_orders(body)?),
        ResponseShape::OrderItems => MappedResponse::OrderItems(map_order_items(body)?),
        ResponseShape::MultipleOrderItems => {
            MappedResponse::OrderItems(map_multiple_order_items(body)?)
        }
        ResponseShape::StatusChange => MappedResponse::StatusChanges(map_status_changes(body)?),
        ResponseShape::FailureReasons => {
            MappedResponse::FailureReasons(map_failure_reasons(body)?)
        }
        ResponseShape::Empty => {
            let doc = xml::parse(body)?;
            xml::body(&doc)?;
            MappedResponse::Empty
        }
    })
}

/// Map a response holding exactly one `Order`.
pub fn map_single_order(body: &ResponseBody) -> Result<Order, SellerCenterError> {
    let doc = xml::parse(body)?;
    let container = xml::required_child(xml::body(&doc)?, "Orders")?;
    let mut nodes = xml::elements(container, "Order");
    let node = nodes
        .next()
        .ok_or_else(|| SellerCenterError::mapping("missing Order under Orders"))?;
    if nodes.next().is_some() {
        return Err(SellerCenterError::mapping(
            "expected exactly one Order under Orders",
        ));
    }
    orders::order(node)
}

/// Map a response holding zero or more `Order` nodes.
pub fn map_orders(body: &ResponseBody) -> Result<Vec<Order>, SellerCenterError> {
    let doc = xml::parse(body)?;
    let container = xml::required_child(xml::body(&doc)?, "Orders")?;
    xml::elements(container, "Order").map(orders::order).collect()
}

/// Map a response holding the items of one order.
pub fn map_order_items(body: &ResponseBody) -> Result<Vec<OrderItem>, SellerCenterError> {
    let doc = xml::parse(body)?;
    let container = xml::required_child(xml::body(&doc)?, "OrderItems")?;
    xml::elements(container, "OrderItem")
        .map(|node| order_items::order_item(node, None))
        .collect()
}

/// Map a response nesting items per order, flattened in document order.
///
/// Each item is attributed to the order it is nested under.
pub fn map_multiple_order_items(body: &ResponseBody) -> Result<Vec<OrderItem>, SellerCenterError> {
    let doc = xml::parse(body)?;
    let container = xml::required_child(xml::body(&doc)?, "Orders")?;

    let mut items = Vec::new();
    for order in xml::elements(container, "Order") {
        let owner: OrderId = xml::required_parsed(order, "OrderId")?;
        let nested = xml::required_child(order, "OrderItems")?;
        for node in xml::elements(nested, "OrderItem") {
            items.push(order_items::order_item(node, Some(owner))?);
        }
    }
    Ok(items)
}

/// Map the items echoed back by a status change.
pub fn map_status_changes(
    body: &ResponseBody,
) -> Result<Vec<OrderItemStatusUpdate>, SellerCenterError> {
    let doc = xml::parse(body)?;
    let container = xml::required_child(xml::body(&doc)?, "OrderItems")?;
    xml::elements(container, "OrderItem")
        .map(order_items::status_update)
        .collect()
}

/// Map a `GetFailureReasons` response.
pub fn map_failure_reasons(body: &ResponseBody) -> Result<Vec<FailureReason>, SellerCenterError> {
    let doc = xml::parse(body)?;
    let container = xml::required_child(xml::body(&doc)?, "Reasons")?;
    xml::elements(container, "Reason")
        .map(failure_reasons::failure_reason)
        .collect()
}
