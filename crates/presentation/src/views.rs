use analytics::{ReportEnvelope, SalesReport};
use rust_decimal::Decimal;

use crate::format;
use crate::surface::{ChartKind, ChartPoint, Surface};

/// Lays the full report out on a surface: the headline indicators first,
/// the revenue overview charts next, then the detailed sections.
pub fn render_report(envelope: &ReportEnvelope, currency: &str, surface: &mut impl Surface) {
    tracing::debug!(run_id = %envelope.run_id, source = %envelope.source, "rendering report");
    let report = &envelope.report;

    surface.section("E-Commerce Sales Report");
    surface.metric("Source", &envelope.source);
    surface.metric(
        "Generated",
        &envelope.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );

    render_kpis(report, currency, surface);
    render_overview(report, surface);
    render_customer_insights(report, currency, surface);
    render_revenue_metrics(report, currency, surface);
    render_product_and_market(report, currency, surface);
    render_advanced_analytics(report, currency, surface);
}

fn render_kpis(report: &SalesReport, currency: &str, surface: &mut impl Surface) {
    surface.section("Key Performance Indicators");
    surface.metric("Total Revenue", &format::money(currency, report.total_revenue));
    surface.metric(
        "Average Purchase Value",
        &or_undefined(
            report
                .average_purchase_value
                .map(|value| format::money(currency, value)),
        ),
    );
    surface.metric("Total Transactions", &format::count(report.transaction_count));
}

fn render_overview(report: &SalesReport, surface: &mut impl Surface) {
    surface.section("Revenue Overview");

    let category_points: Vec<ChartPoint> = report
        .revenue_by_category
        .iter()
        .map(|row| ChartPoint {
            x: row.category.clone(),
            y: row.revenue,
        })
        .collect();
    surface.chart("Revenue by Product Category", ChartKind::Bar, &category_points);

    let country_points: Vec<ChartPoint> = report
        .top_countries_by_revenue
        .iter()
        .map(|row| ChartPoint {
            x: row.country.clone(),
            y: row.revenue,
        })
        .collect();
    surface.chart("Top 5 Countries by Revenue", ChartKind::Bar, &country_points);

    let trend_points: Vec<ChartPoint> = report
        .monthly_revenue_trend
        .iter()
        .map(|row| ChartPoint {
            x: row.month.format("%b %Y").to_string(),
            y: row.revenue,
        })
        .collect();
    surface.chart("Monthly Revenue Trend", ChartKind::Line, &trend_points);

    // Brackets nobody falls into are absent from the chart, not zero bars.
    let age_points: Vec<ChartPoint> = report
        .revenue_by_age_bracket
        .iter()
        .filter_map(|row| {
            row.revenue.map(|revenue| ChartPoint {
                x: row.bracket.to_string(),
                y: revenue,
            })
        })
        .collect();
    surface.chart("Revenue by Age Group", ChartKind::Bar, &age_points);
}

fn render_customer_insights(report: &SalesReport, currency: &str, surface: &mut impl Surface) {
    surface.section("Customer Insights");

    let spender_rows: Vec<Vec<String>> = report
        .top_customers_by_spending
        .iter()
        .map(|row| vec![row.user_name.clone(), format::money(currency, row.total_spent)])
        .collect();
    surface.table(
        "Top 10 Customers by Spending",
        &["User_Name", "Total_Spent"],
        &spender_rows,
    );

    let shopper_rows: Vec<Vec<String>> = report
        .most_frequent_shoppers
        .iter()
        .map(|row| vec![row.user_name.clone(), format::count(row.order_count)])
        .collect();
    surface.table(
        "Most Frequent Shoppers",
        &["User_Name", "Order_Count"],
        &shopper_rows,
    );

    surface.metric(
        "Average Customer Age",
        &or_undefined(report.average_customer_age.map(format::years)),
    );
}

fn render_revenue_metrics(report: &SalesReport, currency: &str, surface: &mut impl Surface) {
    surface.section("Revenue Metrics");

    let daily_points: Vec<ChartPoint> = report
        .daily_average_sales
        .iter()
        .map(|row| ChartPoint {
            x: row.day.format("%Y-%m-%d").to_string(),
            y: row.average_sales,
        })
        .collect();
    surface.chart("Daily Average Sales", ChartKind::Line, &daily_points);

    let method_points: Vec<ChartPoint> = report
        .revenue_by_payment_method
        .iter()
        .map(|row| ChartPoint {
            x: row.payment_method.clone(),
            y: row.revenue,
        })
        .collect();
    surface.chart("Revenue by Payment Method", ChartKind::Bar, &method_points);

    match &report.peak_shopping_day {
        Some(peak) => {
            surface.metric("Date with Highest Revenue", &format::long_date(peak.date));
            surface.metric("Revenue on Peak Day", &format::money(currency, peak.revenue));
        }
        None => surface.metric("Date with Highest Revenue", "undefined"),
    }
}

fn render_product_and_market(report: &SalesReport, currency: &str, surface: &mut impl Surface) {
    surface.section("Product & Market");

    let share_points: Vec<ChartPoint> = report
        .country_revenue_share
        .iter()
        .filter_map(|row| {
            row.revenue_percentage.map(|pct| ChartPoint {
                x: row.country.clone(),
                y: pct,
            })
        })
        .collect();
    surface.chart(
        "Percentage Share of Each Country in Revenue",
        ChartKind::Pie,
        &share_points,
    );

    let ranked_rows: Vec<Vec<String>> = report
        .top_categories_per_country
        .iter()
        .map(|row| {
            vec![
                row.country.clone(),
                row.category.clone(),
                format::money(currency, row.revenue),
                row.rank.to_string(),
            ]
        })
        .collect();
    surface.table(
        "Top 5 Product Categories per Country",
        &["Country", "Product_Category", "Revenue", "Rank"],
        &ranked_rows,
    );
}

fn render_advanced_analytics(report: &SalesReport, currency: &str, surface: &mut impl Surface) {
    surface.section("Advanced Analytics");

    // Months whose growth is undefined are left off the chart entirely.
    let growth_points: Vec<ChartPoint> = report
        .monthly_growth_rate
        .iter()
        .filter_map(|row| {
            row.growth_pct.map(|pct| ChartPoint {
                x: row.month.format("%b %Y").to_string(),
                y: pct,
            })
        })
        .collect();
    surface.chart("Monthly Revenue Growth Rate (%)", ChartKind::Line, &growth_points);

    let popular_points: Vec<ChartPoint> = report
        .most_popular_categories
        .iter()
        .map(|row| ChartPoint {
            x: row.category.clone(),
            y: Decimal::from(row.transaction_count),
        })
        .collect();
    surface.chart(
        "Most Popular Product Categories by Transaction Count",
        ChartKind::Bar,
        &popular_points,
    );

    let clv_rows: Vec<Vec<String>> = report
        .clv_by_country
        .iter()
        .map(|row| {
            vec![
                row.country.clone(),
                format::money(currency, row.total_revenue),
                format::count(row.unique_customers),
                or_undefined(row.clv.map(|value| format::money(currency, value))),
            ]
        })
        .collect();
    surface.table(
        "Customer Lifetime Value (CLV) by Country",
        &["Country", "Total_Revenue", "Unique_Customers", "CLV"],
        &clv_rows,
    );
}

/// The display form of a metric whose value does not exist for this data.
fn or_undefined(value: Option<String>) -> String {
    value.unwrap_or_else(|| "undefined".to_string())
}
