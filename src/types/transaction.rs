//! Transaction input data and categorical encodings

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Product category purchased in the transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Books,
    #[serde(rename = "Home & Kitchen")]
    HomeAndKitchen,
    Other,
}

impl ProductCategory {
    /// Integer code the classifier was fitted with
    pub fn code(self) -> f32 {
        match self {
            ProductCategory::Electronics => 0.0,
            ProductCategory::Clothing => 1.0,
            ProductCategory::Books => 2.0,
            ProductCategory::HomeAndKitchen => 3.0,
            ProductCategory::Other => 4.0,
        }
    }

    /// Human-readable label as shown on the form
    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Books => "Books",
            ProductCategory::HomeAndKitchen => "Home & Kitchen",
            ProductCategory::Other => "Other",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "Electronics" => Ok(ProductCategory::Electronics),
            "Clothing" => Ok(ProductCategory::Clothing),
            "Books" => Ok(ProductCategory::Books),
            "Home & Kitchen" => Ok(ProductCategory::HomeAndKitchen),
            "Other" => Ok(ProductCategory::Other),
            _ => Err(Error::InvalidInput {
                field: "product_category",
                message: format!("unrecognized category {s:?}"),
            }),
        }
    }
}

/// Customer age band.
///
/// Feeds both the `Customer Age` and `AgeGroup` feature slots with the same
/// code; the fitted model expects the duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-24")]
    Age18To24,
    #[serde(rename = "25-34")]
    Age25To34,
    #[serde(rename = "35-44")]
    Age35To44,
    #[serde(rename = "45-54")]
    Age45To54,
    #[serde(rename = "55-64")]
    Age55To64,
    #[serde(rename = "65+")]
    Age65Plus,
}

impl AgeGroup {
    /// Integer code the classifier was fitted with
    pub fn code(self) -> f32 {
        match self {
            AgeGroup::Age18To24 => 0.0,
            AgeGroup::Age25To34 => 1.0,
            AgeGroup::Age35To44 => 2.0,
            AgeGroup::Age45To54 => 3.0,
            AgeGroup::Age55To64 => 4.0,
            AgeGroup::Age65Plus => 5.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Age18To24 => "18-24",
            AgeGroup::Age25To34 => "25-34",
            AgeGroup::Age35To44 => "35-44",
            AgeGroup::Age45To54 => "45-54",
            AgeGroup::Age55To64 => "55-64",
            AgeGroup::Age65Plus => "65+",
        }
    }
}

impl FromStr for AgeGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "18-24" => Ok(AgeGroup::Age18To24),
            "25-34" => Ok(AgeGroup::Age25To34),
            "35-44" => Ok(AgeGroup::Age35To44),
            "45-54" => Ok(AgeGroup::Age45To54),
            "55-64" => Ok(AgeGroup::Age55To64),
            "65+" => Ok(AgeGroup::Age65Plus),
            _ => Err(Error::InvalidInput {
                field: "age_group",
                message: format!("unrecognized age group {s:?}"),
            }),
        }
    }
}

/// Customer region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerLocation {
    North,
    South,
    East,
    West,
}

impl CustomerLocation {
    /// Integer code the classifier was fitted with
    pub fn code(self) -> f32 {
        match self {
            CustomerLocation::North => 0.0,
            CustomerLocation::South => 1.0,
            CustomerLocation::East => 2.0,
            CustomerLocation::West => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CustomerLocation::North => "North",
            CustomerLocation::South => "South",
            CustomerLocation::East => "East",
            CustomerLocation::West => "West",
        }
    }
}

impl FromStr for CustomerLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "North" => Ok(CustomerLocation::North),
            "South" => Ok(CustomerLocation::South),
            "East" => Ok(CustomerLocation::East),
            "West" => Ok(CustomerLocation::West),
            _ => Err(Error::InvalidInput {
                field: "location",
                message: format!("unrecognized location {s:?}"),
            }),
        }
    }
}

/// Device the transaction was placed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Device {
    Mobile,
    Desktop,
    Tablet,
}

impl Device {
    /// Integer code the classifier was fitted with
    pub fn code(self) -> f32 {
        match self {
            Device::Mobile => 0.0,
            Device::Desktop => 1.0,
            Device::Tablet => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Device::Mobile => "Mobile",
            Device::Desktop => "Desktop",
            Device::Tablet => "Tablet",
        }
    }
}

impl FromStr for Device {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "Mobile" => Ok(Device::Mobile),
            "Desktop" => Ok(Device::Desktop),
            "Tablet" => Ok(Device::Tablet),
            _ => Err(Error::InvalidInput {
                field: "device",
                message: format!("unrecognized device {s:?}"),
            }),
        }
    }
}

/// Payment method, one-hot encoded in the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "bank transfer")]
    BankTransfer,
    #[serde(rename = "credit card")]
    CreditCard,
    #[serde(rename = "debit card")]
    DebitCard,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "bank transfer",
            PaymentMethod::CreditCard => "credit card",
            PaymentMethod::DebitCard => "debit card",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "bank transfer" => Ok(PaymentMethod::BankTransfer),
            "credit card" => Ok(PaymentMethod::CreditCard),
            "debit card" => Ok(PaymentMethod::DebitCard),
            _ => Err(Error::InvalidInput {
                field: "payment_method",
                message: format!("unrecognized payment method {s:?}"),
            }),
        }
    }
}

/// A single e-commerce transaction awaiting a fraud verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Transaction amount, non-negative
    pub amount: f64,

    /// Number of items purchased, at least 1
    pub quantity: u32,

    /// Hour of day the transaction occurred (0-23)
    pub hour: u32,

    /// Product category purchased
    pub product_category: ProductCategory,

    /// Customer age band
    pub age_group: AgeGroup,

    /// Customer region
    pub location: CustomerLocation,

    /// Device the transaction was placed from
    pub device: Device,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Payment method used
    pub payment_method: PaymentMethod,
}

impl TransactionInput {
    /// Build a transaction from raw form values.
    ///
    /// Any out-of-set categorical string or unparseable date is rejected
    /// before the transaction exists, naming the offending field.
    #[allow(clippy::too_many_arguments)]
    pub fn from_form(
        amount: f64,
        quantity: u32,
        hour: u32,
        product_category: &str,
        age_group: &str,
        location: &str,
        device: &str,
        date: &str,
        payment_method: &str,
    ) -> crate::error::Result<Self> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| Error::InvalidInput {
            field: "date",
            message: format!("expected YYYY-MM-DD: {e}"),
        })?;

        Ok(Self {
            amount,
            quantity,
            hour,
            product_category: product_category.parse()?,
            age_group: age_group.parse()?,
            location: location.parse()?,
            device: device.parse()?,
            date,
            payment_method: payment_method.parse()?,
        })
    }
}
