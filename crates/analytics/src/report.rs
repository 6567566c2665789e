use chrono::{DateTime, NaiveDate, Utc};
use core_types::AgeBracket;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The date with the highest summed revenue, and that sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakDay {
    pub date: NaiveDate,
    pub revenue: Decimal,
}

/// Revenue summed over one product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: Decimal,
}

/// Revenue summed over one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: Decimal,
}

/// Revenue summed over one payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodRevenue {
    pub payment_method: String,
    pub revenue: Decimal,
}

/// Revenue summed over one age bracket. The report always carries all
/// five brackets in display order; a bracket no row falls into keeps
/// `revenue: None` (absent, not zero — reindex semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBracketRevenue {
    pub bracket: AgeBracket,
    pub revenue: Option<Decimal>,
}

/// One country's percentage share of total revenue, computed from
/// un-rounded sums and then rounded to 2 decimals. `None` when total
/// revenue is zero, where the share is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryShare {
    pub country: String,
    pub revenue_percentage: Option<Decimal>,
}

/// Revenue summed over one calendar month, keyed by its month-end date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: NaiveDate,
    pub revenue: Decimal,
}

/// Mean purchase amount for one calendar day, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub day: NaiveDate,
    pub average_sales: Decimal,
}

/// Month-over-month revenue growth for one month, as a percentage of the
/// previous month. `None` when the previous month's revenue was zero.
/// The first month of the data has no entry at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyGrowth {
    pub month: NaiveDate,
    pub growth_pct: Option<Decimal>,
}

/// Total spending of one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSpend {
    pub user_name: String,
    pub total_spent: Decimal,
}

/// Transaction count of one customer (rendered as `Order_Count`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOrders {
    pub user_name: String,
    pub order_count: usize,
}

/// One (country, category) revenue sum with its rank inside the country.
/// Only ranks 1..=5 are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCategoryRank {
    pub country: String,
    pub category: String,
    pub revenue: Decimal,
    pub rank: u32,
}

/// Transaction count for one product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub transaction_count: usize,
}

/// Customer lifetime value for one country: revenue divided by the
/// number of distinct customers. `None` when that count is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryClv {
    pub country: String,
    pub total_revenue: Decimal,
    pub unique_customers: usize,
    pub clv: Option<Decimal>,
}

/// A comprehensive, standardized report over one transaction dataset.
///
/// This struct is the final output of the `AnalyticsEngine` and the data
/// transfer object the presentation layer binds to. Every table keeps a
/// stable row type so no further transformation is needed to display it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    // I. Key performance indicators
    pub total_revenue: Decimal,
    pub average_purchase_value: Option<Decimal>, // Option<> because a mean over zero rows is undefined
    pub transaction_count: usize,
    pub average_customer_age: Option<Decimal>, // Option<> because every age may be missing
    pub peak_shopping_day: Option<PeakDay>,

    // II. Revenue breakdowns
    pub revenue_by_category: Vec<CategoryRevenue>,
    pub top_countries_by_revenue: Vec<CountryRevenue>,
    pub revenue_by_payment_method: Vec<PaymentMethodRevenue>,
    pub revenue_by_age_bracket: Vec<AgeBracketRevenue>,
    pub country_revenue_share: Vec<CountryShare>,

    // III. Time series
    pub monthly_revenue_trend: Vec<MonthlyRevenue>,
    pub daily_average_sales: Vec<DailyAverage>,
    pub monthly_growth_rate: Vec<MonthlyGrowth>,

    // IV. Customer insights
    pub top_customers_by_spending: Vec<CustomerSpend>,
    pub most_frequent_shoppers: Vec<CustomerOrders>,

    // V. Product and market
    pub top_categories_per_country: Vec<CountryCategoryRank>,
    pub most_popular_categories: Vec<CategoryCount>,
    pub clv_by_country: Vec<CountryClv>,
}

impl SalesReport {
    /// Creates a new, empty SalesReport: zero sums, undefined means, no
    /// table rows. This is also the correct report for a zero-row dataset.
    pub fn new() -> Self {
        Self {
            total_revenue: Decimal::ZERO,
            average_purchase_value: None,
            transaction_count: 0,
            average_customer_age: None,
            peak_shopping_day: None,
            revenue_by_category: Vec::new(),
            top_countries_by_revenue: Vec::new(),
            revenue_by_payment_method: Vec::new(),
            revenue_by_age_bracket: AgeBracket::ALL
                .iter()
                .map(|&bracket| AgeBracketRevenue {
                    bracket,
                    revenue: None,
                })
                .collect(),
            country_revenue_share: Vec::new(),
            monthly_revenue_trend: Vec::new(),
            daily_average_sales: Vec::new(),
            monthly_growth_rate: Vec::new(),
            top_customers_by_spending: Vec::new(),
            most_frequent_shoppers: Vec::new(),
            top_categories_per_country: Vec::new(),
            most_popular_categories: Vec::new(),
            clv_by_country: Vec::new(),
        }
    }
}

impl Default for SalesReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a report with the identity and provenance of the run that
/// produced it, so exported output and log lines can be correlated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub report: SalesReport,
}

impl ReportEnvelope {
    pub fn new(source: impl Into<String>, report: SalesReport) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            source: source.into(),
            report,
        }
    }
}
