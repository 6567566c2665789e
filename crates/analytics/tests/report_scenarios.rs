use analytics::AnalyticsEngine;
use chrono::NaiveDate;
use core_types::Transaction;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tx(
    date: &str,
    amount: Decimal,
    category: &str,
    country: &str,
    user: &str,
    age: Option<u32>,
    method: &str,
) -> Transaction {
    Transaction {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount,
        category: category.to_string(),
        country: country.to_string(),
        user_name: user.to_string(),
        age,
        payment_method: method.to_string(),
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Three purchases over two months, two countries and two categories,
/// with one customer shopping in both countries.
fn three_purchases() -> Vec<Transaction> {
    vec![
        tx("2024-01-05", dec!(100), "Books", "US", "alice", Some(25), "card"),
        tx("2024-01-20", dec!(50), "Toys", "US", "bob", Some(35), "cash"),
        tx("2024-02-01", dec!(200), "Books", "UK", "alice", Some(25), "card"),
    ]
}

/// A deterministic spread of purchases across six months, five countries,
/// four categories and a rotating roster of customers.
fn generated_purchases() -> Vec<Transaction> {
    let categories = ["Books", "Toys", "Games", "Garden"];
    let countries = ["US", "UK", "Brazil", "Japan", "India"];
    let methods = ["card", "cash", "wallet"];
    let users = ["ann", "bob", "cyd", "dot", "eli", "fay", "gus"];

    (0..240usize)
        .map(|i| {
            let day = format!("2024-{:02}-{:02}", 1 + i % 6, 1 + i % 28);
            let age = if i % 7 == 0 {
                None
            } else {
                Some((16 + (i * 3) % 60) as u32)
            };
            tx(
                &day,
                Decimal::new(((i * 137) % 9973 + 1) as i64, 2),
                categories[i % categories.len()],
                countries[i % countries.len()],
                users[i % users.len()],
                age,
                methods[i % methods.len()],
            )
        })
        .collect()
}

#[test]
fn three_purchases_produce_the_expected_headline_numbers() {
    let report = AnalyticsEngine::new().analyze(&three_purchases());

    assert_eq!(report.total_revenue, dec!(350));
    assert_eq!(report.transaction_count, 3);
    assert_eq!(report.average_purchase_value.unwrap().round_dp(2), dec!(116.67));
    assert_eq!(report.average_customer_age.unwrap().round_dp(2), dec!(28.33));

    let peak = report.peak_shopping_day.unwrap();
    assert_eq!(peak.date, date("2024-02-01"));
    assert_eq!(peak.revenue, dec!(200));
}

#[test]
fn three_purchases_produce_the_expected_time_series() {
    let report = AnalyticsEngine::new().analyze(&three_purchases());

    let trend = &report.monthly_revenue_trend;
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].month, date("2024-01-31"));
    assert_eq!(trend[0].revenue, dec!(150));
    assert_eq!(trend[1].month, date("2024-02-29"));
    assert_eq!(trend[1].revenue, dec!(200));

    let growth = &report.monthly_growth_rate;
    assert_eq!(growth.len(), 1);
    assert_eq!(growth[0].month, date("2024-02-29"));
    assert_eq!(growth[0].growth_pct.unwrap().round_dp(2), dec!(33.33));

    let daily = &report.daily_average_sales;
    assert_eq!(daily.len(), 3);
    assert_eq!(daily[0].day, date("2024-01-05"));
    assert_eq!(daily[0].average_sales, dec!(100.00));
}

#[test]
fn three_purchases_produce_the_expected_breakdowns() {
    let report = AnalyticsEngine::new().analyze(&three_purchases());

    let categories = &report.revenue_by_category;
    assert_eq!(categories[0].category, "Books");
    assert_eq!(categories[0].revenue, dec!(300));
    assert_eq!(categories[1].category, "Toys");
    assert_eq!(categories[1].revenue, dec!(50));

    let countries = &report.top_countries_by_revenue;
    assert_eq!(countries[0].country, "UK");
    assert_eq!(countries[0].revenue, dec!(200));
    assert_eq!(countries[1].country, "US");
    assert_eq!(countries[1].revenue, dec!(150));

    let methods = &report.revenue_by_payment_method;
    assert_eq!(methods[0].payment_method, "card");
    assert_eq!(methods[0].revenue, dec!(300));
    assert_eq!(methods[1].payment_method, "cash");
    assert_eq!(methods[1].revenue, dec!(50));

    // Ages 25, 35 and 25: everything lands in the 20s and 30s brackets.
    let brackets = &report.revenue_by_age_bracket;
    assert_eq!(brackets[0].revenue, None);
    assert_eq!(brackets[1].revenue, Some(dec!(300)));
    assert_eq!(brackets[2].revenue, Some(dec!(50)));
    assert_eq!(brackets[3].revenue, None);
    assert_eq!(brackets[4].revenue, None);

    let shares = &report.country_revenue_share;
    assert_eq!(shares[0].country, "UK");
    assert_eq!(shares[0].revenue_percentage, Some(dec!(57.14)));
    assert_eq!(shares[1].country, "US");
    assert_eq!(shares[1].revenue_percentage, Some(dec!(42.86)));
}

#[test]
fn three_purchases_produce_the_expected_customer_and_market_tables() {
    let report = AnalyticsEngine::new().analyze(&three_purchases());

    assert_eq!(report.top_customers_by_spending[0].user_name, "alice");
    assert_eq!(report.top_customers_by_spending[0].total_spent, dec!(300));
    assert_eq!(report.most_frequent_shoppers[0].user_name, "alice");
    assert_eq!(report.most_frequent_shoppers[0].order_count, 2);

    let ranked = &report.top_categories_per_country;
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].country, "UK");
    assert_eq!(ranked[0].category, "Books");
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].country, "US");
    assert_eq!(ranked[1].category, "Books");
    assert_eq!(ranked[1].rank, 1);
    assert_eq!(ranked[2].country, "US");
    assert_eq!(ranked[2].category, "Toys");
    assert_eq!(ranked[2].rank, 2);

    assert_eq!(report.most_popular_categories[0].category, "Books");
    assert_eq!(report.most_popular_categories[0].transaction_count, 2);

    // alice bought in both countries but counts once per country.
    let clv = &report.clv_by_country;
    assert_eq!(clv[0].country, "UK");
    assert_eq!(clv[0].unique_customers, 1);
    assert_eq!(clv[0].clv, Some(dec!(200)));
    assert_eq!(clv[1].country, "US");
    assert_eq!(clv[1].unique_customers, 2);
    assert_eq!(clv[1].clv, Some(dec!(75)));
}

#[test]
fn per_category_sums_reconstruct_total_revenue() {
    let report = AnalyticsEngine::new().analyze(&generated_purchases());
    let recombined: Decimal = report.revenue_by_category.iter().map(|row| row.revenue).sum();
    assert_eq!(recombined, report.total_revenue);
}

#[test]
fn country_shares_sum_to_one_hundred_within_rounding() {
    let report = AnalyticsEngine::new().analyze(&generated_purchases());
    let summed: Decimal = report
        .country_revenue_share
        .iter()
        .filter_map(|row| row.revenue_percentage)
        .sum();
    let tolerance = dec!(0.1) * Decimal::from(report.country_revenue_share.len());
    assert!(
        (summed - dec!(100)).abs() <= tolerance,
        "shares summed to {summed}"
    );
}

#[test]
fn ranked_tables_are_descending_and_capped() {
    let report = AnalyticsEngine::new().analyze(&generated_purchases());

    assert!(report
        .revenue_by_category
        .windows(2)
        .all(|pair| pair[0].revenue >= pair[1].revenue));
    assert!(report.top_countries_by_revenue.len() <= 5);
    assert!(report.top_customers_by_spending.len() <= 10);
    assert!(report.most_frequent_shoppers.len() <= 10);
    assert!(report.most_popular_categories.len() <= 5);

    for country in ["US", "UK", "Brazil", "Japan", "India"] {
        let rows: Vec<_> = report
            .top_categories_per_country
            .iter()
            .filter(|row| row.country == country)
            .collect();
        assert!(rows.len() <= 5);
        assert!(rows.windows(2).all(|pair| pair[0].revenue >= pair[1].revenue));
        for (position, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, position as u32 + 1);
        }
    }
}

#[test]
fn growth_series_covers_every_month_after_the_first() {
    let report = AnalyticsEngine::new().analyze(&generated_purchases());

    assert!(report.monthly_revenue_trend.len() >= 2);
    assert_eq!(
        report.monthly_growth_rate.len(),
        report.monthly_revenue_trend.len() - 1
    );
    for (growth, month) in report
        .monthly_growth_rate
        .iter()
        .zip(report.monthly_revenue_trend.iter().skip(1))
    {
        assert_eq!(growth.month, month.month);
    }
}

#[test]
fn time_series_are_chronological() {
    let report = AnalyticsEngine::new().analyze(&generated_purchases());

    assert!(report
        .daily_average_sales
        .windows(2)
        .all(|pair| pair[0].day < pair[1].day));
    assert!(report
        .monthly_revenue_trend
        .windows(2)
        .all(|pair| pair[0].month < pair[1].month));
}
