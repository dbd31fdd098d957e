//! OpenAPI-compliant types for the receipt API
//!
//! Request types are deliberately lenient when deserialising: every field
//! defaults to empty so that `{}` parses, and presence is then checked by
//! [`ProcessReceiptRequest::into_receipt`], which reports every missing field
//! at once instead of failing on the first one serde happens to notice.

use receipt_core::{Item, Receipt};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};

/// A purchased line item
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiItem {
    #[schema(example = "Mountain Dew 12PK")]
    pub short_description: String,

    #[schema(example = "6.49")]
    pub price: String,
}

/// A receipt submitted for processing
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    #[schema(example = "Target")]
    pub retailer: String,

    #[schema(example = "2022-01-01")]
    pub purchase_date: String,

    #[schema(example = "13:01")]
    pub purchase_time: String,

    pub items: Vec<ApiItem>,

    #[schema(example = "35.35")]
    pub total: String,
}

impl ProcessReceiptRequest {
    /// Names of required fields that are absent or empty, in wire form
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.retailer.is_empty() {
            missing.push("retailer");
        }
        if self.purchase_date.is_empty() {
            missing.push("purchaseDate");
        }
        if self.purchase_time.is_empty() {
            missing.push("purchaseTime");
        }
        if self.items.is_empty() {
            missing.push("items");
        }
        if self.total.is_empty() {
            missing.push("total");
        }
        missing
    }

    /// Check presence of the required fields and convert to a core receipt
    pub fn into_receipt(self) -> ApiResult<Receipt> {
        let missing = self.missing_fields();
        if let Some(first) = missing.first() {
            return Err(ApiError::Validation {
                message: format!("Missing required receipt fields: {}", missing.join(", ")),
                field: Some(first.to_string()),
                details: Some(serde_json::json!({ "missing_fields": missing })),
            });
        }
        Ok(self.into())
    }
}

impl From<ApiItem> for Item {
    fn from(item: ApiItem) -> Self {
        Item { short_description: item.short_description, price: item.price }
    }
}

impl From<ProcessReceiptRequest> for Receipt {
    fn from(request: ProcessReceiptRequest) -> Self {
        Receipt {
            retailer: request.retailer,
            purchase_date: request.purchase_date,
            purchase_time: request.purchase_time,
            items: request.items.into_iter().map(Item::from).collect(),
            total: request.total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessReceiptResponse {
    #[schema(example = "7fb1377b-b223-49d9-a31a-5a02701dd310")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    #[schema(example = 28)]
    pub points: i64,
}

/// Liveness report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "up")]
    pub status: String,

    /// Time since start-up, rounded to whole seconds
    #[schema(example = "1h 2m 5s")]
    pub uptime: String,
}
