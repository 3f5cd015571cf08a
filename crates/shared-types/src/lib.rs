pub mod cart;
pub mod config;
pub mod error;
pub mod modal;
pub mod models;
pub mod navigation;
pub mod requests;
pub mod search;

pub use cart::*;
pub use config::*;
pub use error::*;
pub use modal::*;
pub use models::*;
pub use navigation::*;
pub use requests::*;
pub use search::*;
