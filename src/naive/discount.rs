/// Tier selection by sequential string comparison. Adding a tier means
/// editing this method, and a mistyped tag falls through to the full
/// amount with no error.
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn calculate(&self, customer_type: &str, total: f64) -> f64 {
        if customer_type == "Regular" {
            total * 0.9
        } else if customer_type == "Premium" {
            total * 0.8
        } else if customer_type == "VIP" {
            total * 0.7
        } else {
            total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_get_their_multiplier() {
        let calculator = DiscountCalculator;
        assert_eq!(calculator.calculate("Regular", 100.0), 90.0);
        assert_eq!(calculator.calculate("Premium", 100.0), 80.0);
        assert_eq!(calculator.calculate("VIP", 100.0), 70.0);
    }

    #[test]
    fn test_unknown_tag_silently_charges_full_price() {
        // The latent defect: a typo is indistinguishable from "no discount".
        let calculator = DiscountCalculator;
        assert_eq!(calculator.calculate("Gold", 100.0), 100.0);
        assert_eq!(calculator.calculate("vip", 100.0), 100.0);
        assert_eq!(calculator.calculate("", 100.0), 100.0);
    }
}
