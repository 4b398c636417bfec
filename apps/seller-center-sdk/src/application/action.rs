//! Remote action identifiers.

use std::fmt;

use super::mapper::ResponseShape;
use super::ports::HttpMethod;

/// One named remote operation.
///
/// The action selects the wire name, the HTTP method and the response
/// shape the mapper expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Fetch a single order.
    GetOrder,
    /// Fetch orders matching filters.
    GetOrders,
    /// Fetch the items of one order.
    GetOrderItems,
    /// Fetch the items of several orders at once.
    GetMultipleOrderItems,
    /// Cancel an order item.
    SetStatusToCanceled,
    /// Mark order items as packed by the marketplace.
    SetStatusToPackedByMarketplace,
    /// Mark order items as ready to ship.
    SetStatusToReadyToShip,
    /// List reasons a status change may fail.
    GetFailureReasons,
}

impl Action {
    /// Name sent as the `Action` parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetOrder => "GetOrder",
            Self::GetOrders => "GetOrders",
            Self::GetOrderItems => "GetOrderItems",
            Self::GetMultipleOrderItems => "GetMultipleOrderItems",
            Self::SetStatusToCanceled => "SetStatusToCanceled",
            Self::SetStatusToPackedByMarketplace => "SetStatusToPackedByMarketplace",
            Self::SetStatusToReadyToShip => "SetStatusToReadyToShip",
            Self::GetFailureReasons => "GetFailureReasons",
        }
    }

    /// HTTP method the action is sent with.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::SetStatusToCanceled
            | Self::SetStatusToPackedByMarketplace
            | Self::SetStatusToReadyToShip => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    /// Shape of the `Body` node returned for this action.
    #[must_use]
    pub const fn response_shape(&self) -> ResponseShape {
        match self {
            Self::GetOrder => ResponseShape::SingleOrder,
            Self::GetOrders => ResponseShape::Orders,
            Self::GetOrderItems => ResponseShape::OrderItems,
            Self::GetMultipleOrderItems => ResponseShape::MultipleOrderItems,
            Self::SetStatusToCanceled => ResponseShape::Empty,
            Self::SetStatusToPackedByMarketplace | Self::SetStatusToReadyToShip => {
                ResponseShape::StatusChange
            }
            Self::GetFailureReasons => ResponseShape::FailureReasons,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_changes_are_posted() {
        assert_eq!(Action::SetStatusToCanceled.http_method(), HttpMethod::Post);
        assert_eq!(
            Action::SetStatusToReadyToShip.http_method(),
            HttpMethod::Post
        );
        assert_eq!(Action::GetOrders.http_method(), HttpMethod::Get);
        assert_eq!(Action::GetFailureReasons.http_method(), HttpMethod::Get);
    }

    #[test]
    fn shapes_follow_action() {
        assert_eq!(Action::GetOrder.response_shape(), ResponseShape::SingleOrder);
        assert_eq!(
            Action::GetMultipleOrderItems.response_shape(),
            ResponseShape::MultipleOrderItems
        );
        assert_eq!(
            Action::SetStatusToPackedByMarketplace.response_shape(),
            ResponseShape::StatusChange
        );
        assert_eq!(
            Action::SetStatusToCanceled.response_shape(),
            ResponseShape::Empty
        );
    }

    #[test]
    fn display_is_wire_name() {
        assert_eq!(
            Action::SetStatusToPackedByMarketplace.to_string(),
            "SetStatusToPackedByMarketplace"
        );
    }
}
