use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use core_types::{AgeBracket, Transaction};
use rust_decimal::Decimal;

use crate::report::{
    AgeBracketRevenue, CategoryCount, CategoryRevenue, CountryCategoryRank, CountryClv,
    CountryRevenue, CountryShare, CustomerOrders, CustomerSpend, DailyAverage, MonthlyGrowth,
    MonthlyRevenue, PaymentMethodRevenue, PeakDay, SalesReport,
};

/// How many rows the ranked tables keep.
const TOP_COUNTRIES: usize = 5;
const TOP_CUSTOMERS: usize = 10;
const TOP_CATEGORIES: usize = 5;
const CATEGORIES_PER_COUNTRY: usize = 5;

/// A stateless calculator for deriving sales metrics from transaction data.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating sales metrics.
    ///
    /// # Arguments
    ///
    /// * `transactions` - A slice of every parsed `Transaction` in the dataset.
    ///
    /// # Returns
    ///
    /// A fully populated `SalesReport`. The calculation cannot fail: metrics
    /// that are undefined for the given data (a mean over zero rows, a share
    /// of a zero total) are carried as `None` instead of an error.
    pub fn analyze(&self, transactions: &[Transaction]) -> SalesReport {
        let mut report = SalesReport::new();

        if transactions.is_empty() {
            // With no rows every sum is zero and every mean is undefined,
            // which is exactly what the default report encodes.
            return report;
        }

        self.calculate_kpis(transactions, &mut report);
        self.calculate_revenue_breakdowns(transactions, &mut report);
        self.calculate_time_series(transactions, &mut report);
        self.calculate_customer_insights(transactions, &mut report);
        self.calculate_market_insights(transactions, &mut report);

        tracing::info!(rows = transactions.len(), "computed sales report");
        report
    }

    /// Calculates the headline totals and means.
    fn calculate_kpis(&self, transactions: &[Transaction], report: &mut SalesReport) {
        report.transaction_count = transactions.len();
        report.total_revenue = transactions.iter().map(|tx| tx.amount).sum();

        if report.transaction_count > 0 {
            report.average_purchase_value =
                Some(report.total_revenue / Decimal::from(report.transaction_count));
        }

        // The mean age only covers rows where an age was recorded at all.
        let ages: Vec<u32> = transactions.iter().filter_map(|tx| tx.age).collect();
        if !ages.is_empty() {
            let age_sum: Decimal = ages.iter().map(|&age| Decimal::from(age)).sum();
            report.average_customer_age = Some(age_sum / Decimal::from(ages.len()));
        }
    }

    /// Calculates every revenue-by-dimension table.
    fn calculate_revenue_breakdowns(&self, transactions: &[Transaction], report: &mut SalesReport) {
        // --- Product categories ---
        let mut categories = sum_by(transactions, |tx| tx.category.as_str());
        categories.sort_by(|a, b| b.1.cmp(&a.1));
        report.revenue_by_category = categories
            .into_iter()
            .map(|(category, revenue)| CategoryRevenue {
                category: category.to_string(),
                revenue,
            })
            .collect();

        // --- Payment methods ---
        let mut methods = sum_by(transactions, |tx| tx.payment_method.as_str());
        methods.sort_by(|a, b| b.1.cmp(&a.1));
        report.revenue_by_payment_method = methods
            .into_iter()
            .map(|(payment_method, revenue)| PaymentMethodRevenue {
                payment_method: payment_method.to_string(),
                revenue,
            })
            .collect();

        // --- Countries: share of the total, then the top earners ---
        let mut countries = sum_by(transactions, |tx| tx.country.as_str());

        // Shares divide the un-rounded per-country sums by the un-rounded
        // grand total; only the final percentage is rounded.
        let mut shares: Vec<CountryShare> = countries
            .iter()
            .map(|&(country, revenue)| {
                let revenue_percentage = if report.total_revenue == Decimal::ZERO {
                    None
                } else {
                    Some((revenue / report.total_revenue * Decimal::from(100)).round_dp(2))
                };
                CountryShare {
                    country: country.to_string(),
                    revenue_percentage,
                }
            })
            .collect();
        shares.sort_by(|a, b| a.country.cmp(&b.country));
        report.country_revenue_share = shares;

        countries.sort_by(|a, b| b.1.cmp(&a.1));
        countries.truncate(TOP_COUNTRIES);
        report.top_countries_by_revenue = countries
            .into_iter()
            .map(|(country, revenue)| CountryRevenue {
                country: country.to_string(),
                revenue,
            })
            .collect();

        // --- Age brackets ---
        // Rows without a recorded age belong to no bracket and are skipped.
        // A bracket nobody falls into stays `None` rather than becoming zero.
        let mut bracket_sums: [Option<Decimal>; 5] = [None; 5];
        for tx in transactions {
            if let Some(bracket) = tx.age_bracket() {
                let slot = &mut bracket_sums[bracket as usize];
                *slot = Some(slot.unwrap_or(Decimal::ZERO) + tx.amount);
            }
        }
        report.revenue_by_age_bracket = AgeBracket::ALL
            .iter()
            .zip(bracket_sums)
            .map(|(&bracket, revenue)| AgeBracketRevenue { bracket, revenue })
            .collect();
    }

    /// Calculates the daily and monthly time series.
    fn calculate_time_series(&self, transactions: &[Transaction], report: &mut SalesReport) {
        // --- Daily revenue: per-day averages and the peak day ---
        let mut daily: BTreeMap<NaiveDate, (Decimal, usize)> = BTreeMap::new();
        for tx in transactions {
            let entry = daily.entry(tx.date).or_insert((Decimal::ZERO, 0));
            entry.0 += tx.amount;
            entry.1 += 1;
        }

        report.daily_average_sales = daily
            .iter()
            .map(|(&day, &(revenue, count))| DailyAverage {
                day,
                average_sales: (revenue / Decimal::from(count)).round_dp(2),
            })
            .collect();

        // An ascending scan with a strict comparison: the earliest day wins a tie.
        let mut peak: Option<PeakDay> = None;
        for (&date, &(revenue, _)) in &daily {
            let is_new_peak = match &peak {
                Some(current) => revenue > current.revenue,
                None => true,
            };
            if is_new_peak {
                peak = Some(PeakDay { date, revenue });
            }
        }
        report.peak_shopping_day = peak;

        // --- Monthly revenue: trend and month-over-month growth ---
        // Only months that actually appear in the data form the trend; a gap
        // between two recorded months does not insert an empty bucket.
        let mut monthly: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for tx in transactions {
            *monthly.entry(tx.month_bucket()).or_insert(Decimal::ZERO) += tx.amount;
        }
        let trend: Vec<MonthlyRevenue> = monthly
            .into_iter()
            .map(|(month, revenue)| MonthlyRevenue { month, revenue })
            .collect();

        // The first month has no predecessor, so growth starts at the second.
        report.monthly_growth_rate = trend
            .windows(2)
            .map(|pair| {
                let growth_pct = if pair[0].revenue == Decimal::ZERO {
                    None
                } else {
                    Some((pair[1].revenue - pair[0].revenue) / pair[0].revenue * Decimal::from(100))
                };
                MonthlyGrowth {
                    month: pair[1].month,
                    growth_pct,
                }
            })
            .collect();
        report.monthly_revenue_trend = trend;
    }

    /// Calculates the per-customer leaderboards.
    fn calculate_customer_insights(&self, transactions: &[Transaction], report: &mut SalesReport) {
        let mut spenders = sum_by(transactions, |tx| tx.user_name.as_str());
        spenders.sort_by(|a, b| b.1.cmp(&a.1));
        spenders.truncate(TOP_CUSTOMERS);
        report.top_customers_by_spending = spenders
            .into_iter()
            .map(|(user_name, total_spent)| CustomerSpend {
                user_name: user_name.to_string(),
                total_spent,
            })
            .collect();

        let mut shoppers = count_by(transactions, |tx| tx.user_name.as_str());
        shoppers.sort_by(|a, b| b.1.cmp(&a.1));
        shoppers.truncate(TOP_CUSTOMERS);
        report.most_frequent_shoppers = shoppers
            .into_iter()
            .map(|(user_name, order_count)| CustomerOrders {
                user_name: user_name.to_string(),
                order_count,
            })
            .collect();
    }

    /// Calculates the product and market tables.
    fn calculate_market_insights(&self, transactions: &[Transaction], report: &mut SalesReport) {
        // --- Top categories inside each country ---
        let mut pair_index: HashMap<(&str, &str), usize> = HashMap::new();
        let mut pair_sums: Vec<((&str, &str), Decimal)> = Vec::new();
        for tx in transactions {
            let key = (tx.country.as_str(), tx.category.as_str());
            match pair_index.get(&key) {
                Some(&i) => pair_sums[i].1 += tx.amount,
                None => {
                    pair_index.insert(key, pair_sums.len());
                    pair_sums.push((key, tx.amount));
                }
            }
        }

        // Regrouping in accumulation order keeps each country's categories in
        // first-appearance order, which is the tie-break for equal revenue.
        let mut per_country: BTreeMap<&str, Vec<(&str, Decimal)>> = BTreeMap::new();
        for ((country, category), revenue) in pair_sums {
            per_country.entry(country).or_default().push((category, revenue));
        }

        let mut ranked = Vec::new();
        for (country, mut rows) in per_country {
            rows.sort_by(|a, b| b.1.cmp(&a.1));
            rows.truncate(CATEGORIES_PER_COUNTRY);
            for (position, (category, revenue)) in rows.into_iter().enumerate() {
                ranked.push(CountryCategoryRank {
                    country: country.to_string(),
                    category: category.to_string(),
                    revenue,
                    rank: position as u32 + 1,
                });
            }
        }
        report.top_categories_per_country = ranked;

        // --- Most popular categories by transaction count ---
        let mut popular = count_by(transactions, |tx| tx.category.as_str());
        popular.sort_by(|a, b| b.1.cmp(&a.1));
        popular.truncate(TOP_CATEGORIES);
        report.most_popular_categories = popular
            .into_iter()
            .map(|(category, transaction_count)| CategoryCount {
                category: category.to_string(),
                transaction_count,
            })
            .collect();

        // --- Customer lifetime value per country ---
        let mut order: Vec<&str> = Vec::new();
        let mut revenue_totals: HashMap<&str, Decimal> = HashMap::new();
        let mut customer_sets: HashMap<&str, HashSet<&str>> = HashMap::new();
        for tx in transactions {
            let country = tx.country.as_str();
            if !revenue_totals.contains_key(country) {
                order.push(country);
            }
            *revenue_totals.entry(country).or_insert(Decimal::ZERO) += tx.amount;
            customer_sets
                .entry(country)
                .or_default()
                .insert(tx.user_name.as_str());
        }

        let mut clv_rows: Vec<CountryClv> = order
            .into_iter()
            .map(|country| {
                let total_revenue = revenue_totals[country];
                let unique_customers = customer_sets[country].len();
                let clv = if unique_customers > 0 {
                    Some(total_revenue / Decimal::from(unique_customers))
                } else {
                    None
                };
                CountryClv {
                    country: country.to_string(),
                    total_revenue,
                    unique_customers,
                    clv,
                }
            })
            .collect();
        // `None` orders below every defined value, so undefined rows land last.
        clv_rows.sort_by(|a, b| b.clv.cmp(&a.clv));
        report.clv_by_country = clv_rows;
    }
}

/// Sums `amount` per key, keeping keys in first-appearance order so that a
/// later stable sort breaks ties the same way every run.
fn sum_by<'a>(
    transactions: &'a [Transaction],
    key: impl Fn(&'a Transaction) -> &'a str,
) -> Vec<(&'a str, Decimal)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut rows: Vec<(&'a str, Decimal)> = Vec::new();
    for tx in transactions {
        let k = key(tx);
        match index.get(k) {
            Some(&i) => rows[i].1 += tx.amount,
            None => {
                index.insert(k, rows.len());
                rows.push((k, tx.amount));
            }
        }
    }
    rows
}

/// Counts rows per key, keeping keys in first-appearance order.
fn count_by<'a>(
    transactions: &'a [Transaction],
    key: impl Fn(&'a Transaction) -> &'a str,
) -> Vec<(&'a str, usize)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut rows: Vec<(&'a str, usize)> = Vec::new();
    for tx in transactions {
        let k = key(tx);
        match index.get(k) {
            Some(&i) => rows[i].1 += 1,
            None => {
                index.insert(k, rows.len());
                rows.push((k, 1));
            }
        }
    }
    rows
}
