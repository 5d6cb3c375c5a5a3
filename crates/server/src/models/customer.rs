//! Customer domain model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cartwheel_core::{CustomerId, CustomerName};

/// A registered customer.
///
/// The password hash is deliberately not part of this model; repositories
/// return it separately where verification needs it, so it can never leak
/// into a response by accident.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: CustomerName,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
}
