//! `Reason` nodes.

use roxmltree::Node;

use super::xml;
use crate::application::error::SellerCenterError;
use crate::domain::FailureReason;

pub(super) fn failure_reason(node: Node<'_, '_>) -> Result<FailureReason, SellerCenterError> {
    Ok(FailureReason {
        code: xml::required_text(node, "Type")?,
        description: xml::required_text(node, "Name")?,
    })
}
