pub mod chart;
pub mod enums;
pub mod facts;
pub mod masters;
pub mod staff;

pub use chart::*;
pub use facts::*;
pub use masters::*;
pub use staff::*;
