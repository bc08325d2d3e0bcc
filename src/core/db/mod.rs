/// Database Access Module
///
/// Groups the connection provider and the query executor. Screens and
/// forms never hold a connection themselves; they ask the provider for
/// one per operation and let it drop when the operation's scope ends.

pub mod connection;
pub mod query;

pub use connection::ConnectionProvider;
pub use query::{execute, fetch, QueryResult};
