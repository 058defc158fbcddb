//! Record types for the client/sales store.
//!
//! Both types are plain data holders mapped straight from query rows.
//! A `Sale` has no identity of its own; a `Client` gains its `id` from
//! the store on insert.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One sale event, tied to a client by foreign identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub product: i64,
    pub volume: i64,
    pub date: String,
}

/// A client record.
///
/// `id` is assigned by the store: it is zero before insertion and
/// populated only by a successful insert or a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub fio: String,
    pub login: String,
    /// 8-digit date, YYYYMMDD
    pub birthday: String,
    pub email: String,
}

/// Field set for a client that does not exist in the store yet.
///
/// Insert takes this instead of a `Client` so an unassigned `id` can
/// never leak into an insert statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub fio: String,
    pub login: String,
    pub birthday: String,
    pub email: String,
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {} Volume: {} Date:{}",
            self.product, self.volume, self.date
        )
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} FIO: {} Login: {} Birthday: {} Email: {}",
            self.id, self.fio, self.login, self.birthday, self.email
        )
    }
}
