//! `Order` nodes.

use roxmltree::Node;

use super::xml;
use crate::application::error::SellerCenterError;
use crate::domain::{Address, Order, OrderStatus};

pub(super) fn order(node: Node<'_, '_>) -> Result<Order, SellerCenterError> {
    Ok(Order {
        order_id: xml::required_parsed(node, "OrderId")?,
        order_number: xml::required_text(node, "OrderNumber")?,
        customer_first_name: xml::text(node, "CustomerFirstName"),
        customer_last_name: xml::text(node, "CustomerLastName"),
        payment_method: xml::text(node, "PaymentMethod"),
        remarks: xml::text(node, "Remarks"),
        delivery_info: xml::text(node, "DeliveryInfo"),
        price: xml::decimal(node, "Price")?,
        gift_option: xml::flag(node, "GiftOption")?,
        gift_message: xml::text(node, "GiftMessage"),
        voucher_code: xml::text(node, "VoucherCode"),
        created_at: xml::required_datetime(node, "CreatedAt")?,
        updated_at: xml::required_datetime(node, "UpdatedAt")?,
        address_billing: xml::child(node, "AddressBilling").map(address),
        address_shipping: xml::child(node, "AddressShipping").map(address),
        national_registration_number: xml::text(node, "NationalRegistrationNumber"),
        items_count: xml::parsed(node, "ItemsCount")?,
        promised_shipping_time: xml::text(node, "PromisedShippingTime"),
        statuses: statuses(node)?,
    })
}

fn address(node: Node<'_, '_>) -> Address {
    Address {
        first_name: xml::text(node, "FirstName"),
        last_name: xml::text(node, "LastName"),
        phone: xml::text(node, "Phone"),
        phone2: xml::text(node, "Phone2"),
        address1: xml::text(node, "Address1"),
        address2: xml::text(node, "Address2"),
        address3: xml::text(node, "Address3"),
        address4: xml::text(node, "Address4"),
        address5: xml::text(node, "Address5"),
        city: xml::text(node, "City"),
        post_code: xml::text(node, "PostCode"),
        country: xml::text(node, "Country"),
    }
}

fn statuses(node: Node<'_, '_>) -> Result<Vec<OrderStatus>, SellerCenterError> {
    let Some(container) = xml::child(node, "Statuses") else {
        return Ok(Vec::new());
    };
    xml::elements(container, "Status")
        .map(|status| {
            xml::content(status)
                .parse::<OrderStatus>()
                .map_err(|e| SellerCenterError::mapping(e.to_string()))
        })
        .collect()
}
