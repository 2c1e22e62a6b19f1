//! MySQL implementations of the booking store ports.
//!
//! All queries bind their inputs; location, country and booking id text is
//! never formatted into SQL.

use sqlx::MySqlPool;
use std::sync::Arc;

mod connection;
mod helpers;
mod package_repo;
mod ticket_repo;
mod trip_repo;

pub use connection::connect;
pub use package_repo::MySqlPackageRepo;
pub use ticket_repo::MySqlTicketRepo;
pub use trip_repo::MySqlTripRepo;

/// Create all MySQL repositories from a connection pool.
pub struct MySqlRepositories {
    pub trip: Arc<MySqlTripRepo>,
    pub package: Arc<MySqlPackageRepo>,
    pub ticket: Arc<MySqlTicketRepo>,
}

impl MySqlRepositories {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            trip: Arc::new(MySqlTripRepo::new(pool.clone())),
            package: Arc::new(MySqlPackageRepo::new(pool.clone())),
            ticket: Arc::new(MySqlTicketRepo::new(pool)),
        }
    }
}
