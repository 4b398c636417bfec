//! Order Client
//!
//! High-level operations on the seller center order API. Each operation
//! builds its call parameters from scratch, executes one action through the
//! transport and maps the response. Nothing is retained between calls.

use std::sync::Arc;

use chrono::NaiveDateTime;

use super::action::Action;
use super::error::SellerCenterError;
use super::mapper::{MappedResponse, map_response};
use super::params::{DateFacet, ListOptions, OrderFilters, ParameterSet};
use super::ports::{CallLogPort, RequestIdPort, TracingCallLog, TransportPort, UuidRequestIds};
use crate::domain::{
    DeliveryType, FailureReason, Order, OrderId, OrderItem, OrderItemId, OrderItemStatusUpdate,
};

/// Client for order actions.
pub struct OrderClient<T, R = UuidRequestIds, L = TracingCallLog>
where
    T: TransportPort,
    R: RequestIdPort,
    L: CallLogPort,
{
    transport: Arc<T>,
    request_ids: Arc<R>,
    call_log: Arc<L>,
}

impl<T: TransportPort> OrderClient<T> {
    /// Create a client with UUID request ids and `tracing` call logging.
    #[must_use]
    pub fn new(transport: Arc<T>) -> Self {
        Self::with_ports(
            transport,
            Arc::new(UuidRequestIds),
            Arc::new(TracingCallLog),
        )
    }
}

impl<T, R, L> OrderClient<T, R, L>
where
    T: TransportPort,
    R: RequestIdPort,
    L: CallLogPort,
{
    /// Create a client with explicit request id and call log ports.
    pub const fn with_ports(transport: Arc<T>, request_ids: Arc<R>, call_log: Arc<L>) -> Self {
        Self {
            transport,
            request_ids,
            call_log,
        }
    }

    /// Fetch one order.
    pub async fn get_order(&self, order_id: OrderId) -> Result<Order, SellerCenterError> {
        let params = ParameterSet::new().with("OrderId", order_id.value());
        self.call(Action::GetOrder, &params).await?.into_order()
    }

    /// Fetch orders matching `filters`.
    ///
    /// An unknown status in `filters` is ignored rather than rejected; use
    /// [`OrderClient::get_orders_with_status`] for strict validation.
    pub async fn get_orders(
        &self,
        filters: &OrderFilters,
        options: &ListOptions,
    ) -> Result<Vec<Order>, SellerCenterError> {
        let params = ParameterSet::new()
            .with_filters(filters)
            .with_list_options(options);
        self.list_orders(&params).await
    }

    /// Fetch orders created in `[after, before]`.
    pub async fn get_orders_created_between(
        &self,
        after: NaiveDateTime,
        before: NaiveDateTime,
        options: &ListOptions,
    ) -> Result<Vec<Order>, SellerCenterError> {
        self.orders_in_range(DateFacet::Created, Some(after), Some(before), options)
            .await
    }

    /// Fetch orders created after `after`.
    pub async fn get_orders_created_after(
        &self,
        after: NaiveDateTime,
        options: &ListOptions,
    ) -> Result<Vec<Order>, SellerCenterError> {
        self.orders_in_range(DateFacet::Created, Some(after), None, options)
            .await
    }

    /// Fetch orders created before `before`.
    pub async fn get_orders_created_before(
        &self,
        before: NaiveDateTime,
        options: &ListOptions,
    ) -> Result<Vec<Order>, SellerCenterError> {
        self.orders_in_range(DateFacet::Created, None, Some(before), options)
            .await
    }

    /// Fetch orders updated in `[after, before]`.
    pub async fn get_orders_updated_between(
        &self,
        after: NaiveDateTime,
        before: NaiveDateTime,
        options: &ListOptions,
    ) -> Result<Vec<Order>, SellerCenterError> {
        self.orders_in_range(DateFacet::Updated, Some(after), Some(before), options)
            .await
    }

    /// Fetch orders updated after `after`.
    pub async fn get_orders_updated_after(
        &self,
        after: NaiveDateTime,
        options: &ListOptions,
    ) -> Result<Vec<Order>, SellerCenterError> {
        self.orders_in_range(DateFacet::Updated, Some(after), None, options)
            .await
    }

    /// Fetch orders updated before `before`.
    pub async fn get_orders_updated_before(
        &self,
        before: NaiveDateTime,
        options: &ListOptions,
    ) -> Result<Vec<Order>, SellerCenterError> {
        self.orders_in_range(DateFacet::Updated, None, Some(before), options)
            .await
    }

    /// Fetch orders with `status`, failing on an unknown status.
    pub async fn get_orders_with_status(
        &self,
        status: &str,
        options: &ListOptions,
    ) -> Result<Vec<Order>, SellerCenterError> {
        let params = ParameterSet::new()
            .with_status(status)?
            .with_list_options(options);
        self.list_orders(&params).await
    }

    /// Fetch the items of one order.
    pub async fn get_order_items(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderItem>, SellerCenterError> {
        let params = ParameterSet::new().with("OrderId", order_id.value());
        self.call(Action::GetOrderItems, &params)
            .await?
            .into_order_items()
    }

    /// Fetch the items of several orders, grouped by order in response order.
    pub async fn get_multiple_order_items(
        &self,
        order_ids: &[OrderId],
    ) -> Result<Vec<OrderItem>, SellerCenterError> {
        let params =
            ParameterSet::new().with_item_id_list("OrderIdList", order_ids.iter().copied())?;
        self.call(Action::GetMultipleOrderItems, &params)
            .await?
            .into_order_items()
    }

    /// Cancel one order item.
    pub async fn set_status_to_canceled(
        &self,
        order_item_id: OrderItemId,
        reason: &str,
        reason_detail: Option<&str>,
    ) -> Result<(), SellerCenterError> {
        let mut params = ParameterSet::new()
            .with("OrderItemId", order_item_id.value())
            .with("Reason", reason);
        if let Some(detail) = reason_detail {
            params.insert("ReasonDetail", detail);
        }
        self.call(Action::SetStatusToCanceled, &params).await?;
        Ok(())
    }

    /// Mark items as packed by the marketplace.
    pub async fn set_status_to_packed_by_marketplace(
        &self,
        order_item_ids: &[OrderItemId],
        delivery_type: DeliveryType,
        shipping_provider: Option<&str>,
    ) -> Result<Vec<OrderItemStatusUpdate>, SellerCenterError> {
        let params = Self::shipment_params(order_item_ids, delivery_type, shipping_provider)?;
        self.call(Action::SetStatusToPackedByMarketplace, &params)
            .await?
            .into_status_changes()
    }

    /// Mark items as ready to ship.
    pub async fn set_status_to_ready_to_ship(
        &self,
        order_item_ids: &[OrderItemId],
        delivery_type: DeliveryType,
        shipping_provider: Option<&str>,
        tracking_number: Option<&str>,
    ) -> Result<Vec<OrderItemStatusUpdate>, SellerCenterError> {
        let mut params = Self::shipment_params(order_item_ids, delivery_type, shipping_provider)?;
        if let Some(tracking) = tracking_number {
            params.insert("TrackingNumber", tracking);
        }
        self.call(Action::SetStatusToReadyToShip, &params)
            .await?
            .into_status_changes()
    }

    /// List the reasons a status change may be rejected.
    pub async fn get_failure_reasons(&self) -> Result<Vec<FailureReason>, SellerCenterError> {
        self.call(Action::GetFailureReasons, &ParameterSet::new())
            .await?
            .into_failure_reasons()
    }

    fn shipment_params(
        order_item_ids: &[OrderItemId],
        delivery_type: DeliveryType,
        shipping_provider: Option<&str>,
    ) -> Result<ParameterSet, SellerCenterError> {
        let mut params = ParameterSet::new()
            .with_item_id_list("OrderItemIds", order_item_ids.iter().copied())?
            .with("DeliveryType", delivery_type.as_str());
        if let Some(provider) = shipping_provider {
            params.insert("ShippingProvider", provider);
        }
        Ok(params)
    }

    async fn orders_in_range(
        &self,
        facet: DateFacet,
        after: Option<NaiveDateTime>,
        before: Option<NaiveDateTime>,
        options: &ListOptions,
    ) -> Result<Vec<Order>, SellerCenterError> {
        let params = ParameterSet::new()
            .with_date_range(facet, after, before)
            .with_list_options(options);
        self.list_orders(&params).await
    }

    async fn list_orders(&self, params: &ParameterSet) -> Result<Vec<Order>, SellerCenterError> {
        self.call(Action::GetOrders, params).await?.into_orders()
    }

    /// Execute `action` and map its response. Logs only on success.
    async fn call(
        &self,
        action: Action,
        params: &ParameterSet,
    ) -> Result<MappedResponse, SellerCenterError> {
        let request_id = self.request_ids.next_id();
        let body = self
            .transport
            .execute(action, &request_id, params, action.http_method())
            .await?;
        let mapped = map_response(action.response_shape(), &body)?;
        self.call_log
            .call_completed(&request_id, action, &mapped.summary());
        Ok(mapped)
    }
}
