//! Subscription Plan Model

use serde::{Deserialize, Serialize};

/// Monthly subscription plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: u32,
    pub name: String,
    /// Price per billing period, in rupees
    pub price: f64,
    /// Billing period label ("month")
    pub period: String,
    pub features: Vec<String>,
}

/// The fixed plan catalog
pub fn default_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            id: 1,
            name: "Basic".to_string(),
            price: 599.0,
            period: "month".to_string(),
            features: vec![
                "2 Aquavita 20L cans per month".to_string(),
                "Free delivery".to_string(),
                "Scheduled delivery".to_string(),
                "Email support".to_string(),
            ],
        },
        SubscriptionPlan {
            id: 2,
            name: "Standard".to_string(),
            price: 999.0,
            period: "month".to_string(),
            features: vec![
                "4 Aquavita 20L cans per month".to_string(),
                "Free delivery".to_string(),
                "Scheduled delivery".to_string(),
                "Priority email & phone support".to_string(),
                "Flexible rescheduling".to_string(),
            ],
        },
        SubscriptionPlan {
            id: 3,
            name: "Premium".to_string(),
            price: 1499.0,
            period: "month".to_string(),
            features: vec![
                "6 Aquavita 20L cans per month".to_string(),
                "Free delivery".to_string(),
                "Scheduled delivery".to_string(),
                "24/7 priority support".to_string(),
                "Flexible rescheduling".to_string(),
                "Emergency delivery".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plans_ordered_by_price() {
        let plans = default_plans();
        assert_eq!(plans.len(), 3);
        assert!(plans.windows(2).all(|w| w[0].price < w[1].price));
    }
}
