pub mod cache;
pub mod doh;
pub mod server;

pub use cache::IpCache;
pub use doh::DohClient;
pub use server::DnsServerHandler;
