//! `OrderItem` nodes, both the full item and the status-change echo.

use roxmltree::Node;

use super::xml;
use crate::application::error::SellerCenterError;
use crate::domain::{OrderId, OrderItem, OrderItemStatusUpdate};

/// Map an item. `owner` is the enclosing order when items are nested per order.
pub(super) fn order_item(
    node: Node<'_, '_>,
    owner: Option<OrderId>,
) -> Result<OrderItem, SellerCenterError> {
    let order_id = match owner {
        Some(id) => id,
        None => xml::required_parsed(node, "OrderId")?,
    };

    Ok(OrderItem {
        order_item_id: xml::required_parsed(node, "OrderItemId")?,
        order_id,
        shop_id: xml::text(node, "ShopId"),
        name: xml::text(node, "Name"),
        sku: xml::text(node, "Sku"),
        shop_sku: xml::text(node, "ShopSku"),
        shipping_type: xml::text(node, "ShippingType"),
        item_price: xml::decimal(node, "ItemPrice")?,
        paid_price: xml::decimal(node, "PaidPrice")?,
        currency: xml::text(node, "Currency"),
        tax_amount: xml::decimal(node, "TaxAmount")?,
        shipping_amount: xml::decimal(node, "ShippingAmount")?,
        voucher_amount: xml::decimal(node, "VoucherAmount")?,
        voucher_code: xml::text(node, "VoucherCode"),
        status: xml::required_text(node, "Status")?,
        shipment_provider: xml::text(node, "ShipmentProvider"),
        is_digital: xml::flag(node, "IsDigital")?,
        tracking_code: xml::text(node, "TrackingCode"),
        reason: xml::text(node, "Reason"),
        reason_detail: xml::text(node, "ReasonDetail"),
        purchase_order_id: xml::text(node, "PurchaseOrderId"),
        purchase_order_number: xml::text(node, "PurchaseOrderNumber"),
        package_id: xml::text(node, "PackageId"),
        promised_shipping_time: xml::text(node, "PromisedShippingTime"),
        created_at: xml::datetime(node, "CreatedAt")?,
        updated_at: xml::datetime(node, "UpdatedAt")?,
    })
}

pub(super) fn status_update(node: Node<'_, '_>) -> Result<OrderItemStatusUpdate, SellerCenterError> {
    Ok(OrderItemStatusUpdate {
        order_item_id: xml::parsed(node, "OrderItemId")?,
        purchase_order_id: xml::text(node, "PurchaseOrderId"),
        purchase_order_number: xml::text(node, "PurchaseOrderNumber"),
        package_id: xml::text(node, "PackageId"),
    })
}
