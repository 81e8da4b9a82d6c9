pub mod showcase;

pub use crate::domain::model::{CustomerTier, Rectangle, Report, Square};
pub use crate::domain::ports::{
    ConfigProvider, DiscountStrategy, Eatable, LogSink, Shape, Workable,
};
pub use crate::utils::error::Result;
