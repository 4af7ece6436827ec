use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{validate_non_negative, validate_range};
use std::fmt;
use std::str::FromStr;

pub const FAVOURITE_RATE: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct DiscountModifier {
    label: String,
    factor: f64,
}

impl DiscountModifier {
    pub fn new(label: impl Into<String>, factor: f64) -> Result<Self> {
        let label = label.into();
        validate_non_negative(&format!("modifier.{}", label), factor)?;
        Ok(Self { label, factor })
    }

    /// 雙倍折扣
    pub fn double(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            factor: 2.0,
        }
    }
}

/// A base rate followed by multiplicative modifiers.
///
/// New customer tiers are new chains, not subclasses: VIP is the
/// favourite chain plus a doubling modifier, super VIP adds another.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountChain {
    base_rate: f64,
    modifiers: Vec<DiscountModifier>,
}

impl DiscountChain {
    pub fn new(base_rate: f64) -> Result<Self> {
        validate_range("discount.base_rate", base_rate, 0.0, 1.0)?;
        Ok(Self {
            base_rate,
            modifiers: Vec::new(),
        })
    }

    pub fn then(mut self, modifier: DiscountModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn rate(&self) -> f64 {
        self.modifiers
            .iter()
            .fold(self.base_rate, |rate, modifier| rate * modifier.factor)
    }

    pub fn discount(&self, price: f64) -> Result<f64> {
        validate_non_negative("price", price)?;
        let rate = self.rate();
        // 折扣率必須落在 [0, 1]，NaN 也在這裡被擋下
        validate_range("discount.rate", rate, 0.0, 1.0)?;
        let discount = price * rate;
        let labels: Vec<&str> = self.modifiers.iter().map(|m| m.label.as_str()).collect();
        tracing::debug!(
            "Discount {:.2} on price {:.2} (rate {:.2}, modifiers [{}])",
            discount,
            price,
            rate,
            labels.join(", ")
        );
        Ok(discount)
    }

    pub fn for_tier(tier: CustomerTier) -> Self {
        let favourite = Self {
            base_rate: FAVOURITE_RATE,
            modifiers: Vec::new(),
        };
        match tier {
            CustomerTier::Favourite => favourite,
            CustomerTier::Vip => favourite.then(DiscountModifier::double("vip")),
            CustomerTier::SuperVip => favourite
                .then(DiscountModifier::double("vip"))
                .then(DiscountModifier::double("super-vip")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerTier {
    Favourite,
    Vip,
    SuperVip,
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favourite => f.write_str("fav"),
            Self::Vip => f.write_str("vip"),
            Self::SuperVip => f.write_str("super-vip"),
        }
    }
}

impl FromStr for CustomerTier {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fav" | "favourite" | "favorite" => Ok(Self::Favourite),
            "vip" => Ok(Self::Vip),
            "super-vip" | "supervip" | "super_vip" => Ok(Self::SuperVip),
            other => Err(SolidError::validation(
                "tier",
                other,
                "Expected one of: fav, vip, super-vip",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_tier_rates() {
        assert!(close(DiscountChain::for_tier(CustomerTier::Favourite).rate(), 0.2));
        assert!(close(DiscountChain::for_tier(CustomerTier::Vip).rate(), 0.4));
        assert!(close(DiscountChain::for_tier(CustomerTier::SuperVip).rate(), 0.8));
    }

    #[test]
    fn test_discount_on_price() {
        let vip = DiscountChain::for_tier(CustomerTier::Vip);
        assert!(close(vip.discount(100.0).unwrap(), 40.0));
        assert!(close(vip.discount(0.0).unwrap(), 0.0));
    }

    #[test]
    fn test_discount_rejects_bad_input() {
        let fav = DiscountChain::for_tier(CustomerTier::Favourite);
        assert!(fav.discount(-5.0).is_err());
        assert!(fav.discount(f64::NAN).is_err());
        assert!(DiscountChain::new(1.5).is_err());
        assert!(DiscountModifier::new("broken", -1.0).is_err());
    }

    #[test]
    fn test_discount_never_exceeds_price() {
        let greedy = DiscountChain::for_tier(CustomerTier::SuperVip)
            .then(DiscountModifier::double("mega"));
        assert!(greedy.discount(10.0).is_err());
    }

    #[test]
    fn test_discount_rejects_nan_and_negative_factors() {
        let nan = DiscountChain::for_tier(CustomerTier::Favourite).then(DiscountModifier {
            label: "nan".to_string(),
            factor: f64::NAN,
        });
        assert!(nan.discount(100.0).is_err());

        let negative = DiscountChain::for_tier(CustomerTier::Favourite).then(DiscountModifier {
            label: "negative".to_string(),
            factor: -1.0,
        });
        assert!(negative.discount(100.0).is_err());

        let negative_base = DiscountChain {
            base_rate: -0.5,
            modifiers: Vec::new(),
        };
        assert!(negative_base.discount(100.0).is_err());

        assert!(DiscountModifier::new("nan", f64::NAN).is_err());
    }

    #[test]
    fn test_parse_tier() {
        assert_eq!("VIP".parse::<CustomerTier>().unwrap(), CustomerTier::Vip);
        assert_eq!(
            "super-vip".parse::<CustomerTier>().unwrap(),
            CustomerTier::SuperVip
        );
        assert!("gold".parse::<CustomerTier>().is_err());
    }
}
