//! Connection Descriptor
//!
//! The key=value string handed to the database driver.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Parameters identifying the target database
///
/// No validation is applied; values are rendered as given. Fields are wiped
/// from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ConnectionDescriptor {
    pub host: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub port: u16,
}

impl ConnectionDescriptor {
    /// Transport encryption is never negotiated
    pub const SSL_MODE: &'static str = "disable";
}

impl fmt::Display for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host={} user={} password={} dbname={} port={} sslmode={}",
            self.host,
            self.user,
            self.password,
            self.dbname,
            self.port,
            Self::SSL_MODE
        )
    }
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("dbname", &self.dbname)
            .field("port", &self.port)
            .finish()
    }
}
