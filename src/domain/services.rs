use crate::domain::model::{CustomerTier, Rectangle, Square};
use crate::domain::ports::{DiscountStrategy, Eatable, LogSink, Shape, Workable};
use crate::utils::error::Result;

pub struct RegularDiscount;

impl DiscountStrategy for RegularDiscount {
    fn apply_discount(&self, amount: f64) -> f64 {
        amount * 0.9
    }
}

pub struct PremiumDiscount;

impl DiscountStrategy for PremiumDiscount {
    fn apply_discount(&self, amount: f64) -> f64 {
        amount * 0.8
    }
}

pub struct VipDiscount;

impl DiscountStrategy for VipDiscount {
    fn apply_discount(&self, amount: f64) -> f64 {
        amount * 0.7
    }
}

impl CustomerTier {
    /// Exhaustive match; adding a tier fails to compile until it gets a
    /// strategy, which is the point.
    pub fn strategy(&self) -> Box<dyn DiscountStrategy> {
        match self {
            CustomerTier::Regular => Box::new(RegularDiscount),
            CustomerTier::Premium => Box::new(PremiumDiscount),
            CustomerTier::Vip => Box::new(VipDiscount),
        }
    }
}

/// Holds exactly one strategy, supplied at construction, and delegates.
/// New tiers mean new strategy impls; this type never changes for them.
pub struct DiscountCalculator<S: DiscountStrategy> {
    strategy: S,
}

impl<S: DiscountStrategy> DiscountCalculator<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn calculate(&self, amount: f64) -> f64 {
        self.strategy.apply_discount(amount)
    }
}

impl Shape for Rectangle {
    fn area(&self) -> u64 {
        self.width() * self.height()
    }
}

impl Shape for Square {
    fn area(&self) -> u64 {
        self.side() * self.side()
    }
}

pub struct HumanWorker;

impl Workable for HumanWorker {
    fn work(&self) -> &'static str {
        "Working..."
    }
}

impl Eatable for HumanWorker {
    fn eat(&self) -> &'static str {
        "Eating lunch..."
    }
}

/// Implements `Workable` only. There is no `eat` to call, so there is no
/// "not supported" failure to raise.
pub struct RobotWorker;

impl Workable for RobotWorker {
    fn work(&self) -> &'static str {
        "Working..."
    }
}

/// Registers users and reports the fact to whatever sink it was given.
pub struct UserService<L: LogSink> {
    logger: L,
}

impl<L: LogSink> UserService<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn register_user(&mut self, username: &str) -> Result<()> {
        tracing::debug!("registering user {username}");
        self.logger.log(&format!("User registered: {username}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MemorySink {
        messages: Vec<String>,
    }

    impl MemorySink {
        fn new() -> Self {
            Self { messages: Vec::new() }
        }
    }

    impl LogSink for MemorySink {
        fn log(&mut self, message: &str) -> Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_discount_strategies() {
        assert_eq!(RegularDiscount.apply_discount(100.0), 90.0);
        assert_eq!(PremiumDiscount.apply_discount(100.0), 80.0);
        assert_eq!(VipDiscount.apply_discount(100.0), 70.0);
    }

    #[test]
    fn test_calculator_delegates_to_its_strategy() {
        let calculator = DiscountCalculator::new(PremiumDiscount);
        assert_eq!(calculator.calculate(100.0), 80.0);
        assert_eq!(calculator.calculate(50.0), 40.0);
    }

    #[test]
    fn test_calculator_accepts_tier_selected_strategy() {
        for (tag, expected) in [("Regular", 90.0), ("Premium", 80.0), ("VIP", 70.0)] {
            let tier: CustomerTier = tag.parse().unwrap();
            let calculator = DiscountCalculator::new(tier.strategy());
            assert_eq!(calculator.calculate(100.0), expected);
        }
    }

    #[test]
    fn test_shapes_share_the_area_capability() {
        let rectangle = Rectangle::new(10, 20);
        let square = Square::new(10);
        let shapes: [&dyn Shape; 2] = [&rectangle, &square];

        let areas: Vec<u64> = shapes.iter().map(|s| s.area()).collect();
        assert_eq!(areas, vec![200, 100]);
    }

    #[test]
    fn test_human_works_and_eats() {
        let human = HumanWorker;
        assert_eq!(human.work(), "Working...");
        assert_eq!(human.eat(), "Eating lunch...");
    }

    #[test]
    fn test_robot_works() {
        let robot = RobotWorker;
        assert_eq!(robot.work(), "Working...");
        // RobotWorker has no eat(); that call does not exist to get wrong.
    }

    #[test]
    fn test_user_service_logs_registration() {
        let mut service = UserService::new(MemorySink::new());
        service.register_user("John").unwrap();
        assert_eq!(service.logger.messages, vec!["User registered: John"]);
    }
}
