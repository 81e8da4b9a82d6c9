use crate::utils::error::Result;

/// One discount rule per customer tier. Pure: same amount in, same amount
/// out, no side effects.
pub trait DiscountStrategy {
    fn apply_discount(&self, amount: f64) -> f64;
}

impl<S: DiscountStrategy + ?Sized> DiscountStrategy for Box<S> {
    fn apply_discount(&self, amount: f64) -> f64 {
        (**self).apply_discount(amount)
    }
}

/// Shared area capability. Callers depend on this, never on the concrete
/// shape type.
pub trait Shape {
    fn area(&self) -> u64;
}

/// Work and Eat are deliberately separate traits so that a variant which
/// cannot eat never has to stub the operation out. The status line is
/// returned rather than printed; the caller owns the console.
pub trait Workable {
    fn work(&self) -> &'static str;
}

pub trait Eatable {
    fn eat(&self) -> &'static str;
}

/// A log sink accepts a message and delivers it somewhere. No payload comes
/// back, but append failures surface to the caller immediately. Messages
/// from a single caller reach a single sink in call order.
pub trait LogSink {
    fn log(&mut self, message: &str) -> Result<()>;
}

/// Read-only view of the runtime configuration, so the showcase never
/// depends on how the config was produced.
pub trait ConfigProvider {
    fn report_path(&self) -> &str;
    fn log_path(&self) -> &str;
    fn username(&self) -> &str;
}
