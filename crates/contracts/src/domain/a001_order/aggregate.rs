use crate::shared::list_view::{compare_f64, locale_compare, Searchable, Sortable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Order number as shown in the first column of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl OrderId {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Print order placed by a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub job_type: String,
    pub price: f64,
    /// Display date, e.g. `May 24, 2024` for seed data or `6/1/2024` for new orders
    pub date: String,
    pub customer_name: String,
    pub is_finished: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_copies: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl Order {
    fn seed(id: u32, job_type: &str, price: f64, date: &str, customer: &str, finished: bool) -> Self {
        Self {
            id: OrderId(id),
            job_type: job_type.to_string(),
            price,
            date: date.to_string(),
            customer_name: customer.to_string(),
            is_finished: finished,
            paper_size: None,
            number_of_copies: None,
            color_option: None,
            additional_note: None,
            file_path: None,
        }
    }

    /// Placeholder order produced by the notification bell.
    pub fn placeholder(id: OrderId, today: NaiveDate) -> Self {
        Self {
            id,
            job_type: "New Order".to_string(),
            price: 600.0,
            date: today.format("%-m/%-d/%Y").to_string(),
            customer_name: "New Customer".to_string(),
            is_finished: false,
            paper_size: Some("A4".to_string()),
            number_of_copies: Some(10),
            color_option: Some("Full Color".to_string()),
            additional_note: Some(String::new()),
            file_path: Some("/path/to/newfile.pdf".to_string()),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_finished {
            "Finished"
        } else {
            "In Progress"
        }
    }

    pub fn formatted_price(&self) -> String {
        format!("₱{:.2}", self.price)
    }

    /// Display date parsed back into a calendar date, if it has a known shape.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_display_date(&self.date)
    }
}

/// Accepts `May 24, 2024` and `5/24/2024`.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%B %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .ok()
}

/// Orders shown on a fresh dashboard, newest id first.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::seed(7, "Business Card Printing", 300.0, "May 24, 2024", "Bob Brown", false),
        Order::seed(6, "Flyer Printing", 600.0, "May 25, 2024", "Charlie White", false),
        Order::seed(5, "Brochure Printing", 1200.0, "May 26, 2024", "Dave Black", false),
        Order::seed(4, "Poster Printing", 800.0, "May 27, 2024", "Eva Green", true),
        Order::seed(3, "Sticker Printing", 450.0, "May 28, 2024", "Frank Blue", false),
        Order::seed(2, "Canvas Printing", 2000.0, "May 29, 2024", "Grace Red", false),
        Order::seed(1, "Mug Printing", 900.0, "May 30, 2024", "Hank Yellow", false),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    CustomerName,
    JobType,
    Price,
    Date,
    Status,
}

impl OrderField {
    pub const ALL: [OrderField; 6] = [
        OrderField::Id,
        OrderField::CustomerName,
        OrderField::JobType,
        OrderField::Price,
        OrderField::Date,
        OrderField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderField::Id => "Order ID",
            OrderField::CustomerName => "Customer Name",
            OrderField::JobType => "Job Type",
            OrderField::Price => "Price",
            OrderField::Date => "Date",
            OrderField::Status => "Status",
        }
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.job_type.as_str(), self.customer_name.as_str()]
    }
}

impl Sortable for Order {
    type Field = OrderField;

    fn compare_by_field(&self, other: &Self, field: OrderField) -> Ordering {
        match field {
            OrderField::Id => self.id.cmp(&other.id),
            OrderField::CustomerName => locale_compare(&self.customer_name, &other.customer_name),
            OrderField::JobType => locale_compare(&self.job_type, &other.job_type),
            OrderField::Price => compare_f64(self.price, other.price),
            OrderField::Date => match (self.parsed_date(), other.parsed_date()) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => self.date.cmp(&other.date),
            },
            OrderField::Status => self.is_finished.cmp(&other.is_finished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let orders = sample_orders();
        let mut ids: Vec<u32> = orders.iter().map(|o| o.id.value()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn search_covers_job_type_and_customer() {
        let order = &sample_orders()[1];
        assert!(order.matches_filter("flyer"));
        assert!(order.matches_filter("charlie"));
        assert!(!order.matches_filter("mug"));
    }

    #[test]
    fn placeholder_uses_us_short_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let order = Order::placeholder(OrderId(8), today);
        assert_eq!(order.date, "6/1/2024");
        assert_eq!(order.number_of_copies, Some(10));
        assert!(!order.is_finished);
    }

    #[test]
    fn display_dates_parse_in_both_shapes() {
        assert_eq!(
            parse_display_date("May 24, 2024"),
            NaiveDate::from_ymd_opt(2024, 5, 24)
        );
        assert_eq!(
            parse_display_date("6/1/2024"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(parse_display_date("soon"), None);
    }

    #[test]
    fn date_sort_is_chronological_across_formats() {
        let seed = &sample_orders()[6];
        let newer = Order::placeholder(OrderId(8), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(seed.compare_by_field(&newer, OrderField::Date), Ordering::Less);
    }

    #[test]
    fn unreadable_dates_sort_after_readable_ones() {
        let june = Order::placeholder(OrderId(8), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let mut unreadable = june.clone();
        unreadable.id = OrderId(9);
        unreadable.date = "soon".to_string();
        let mut may = june.clone();
        may.id = OrderId(10);
        may.date = "May 24, 2024".to_string();

        let mut orders = vec![unreadable.clone(), june.clone(), may.clone()];
        orders.sort_by(|a, b| a.compare_by_field(b, OrderField::Date));
        let dates: Vec<&str> = orders.iter().map(|o| o.date.as_str()).collect();
        assert_eq!(dates, ["May 24, 2024", "6/1/2024", "soon"]);

        assert_eq!(unreadable.compare_by_field(&may, OrderField::Date), Ordering::Greater);
        assert_eq!(may.compare_by_field(&unreadable, OrderField::Date), Ordering::Less);
    }

    #[test]
    fn camel_case_wire_format() {
        let json = serde_json::to_value(&sample_orders()[0]).unwrap();
        assert_eq!(json["jobType"], "Business Card Printing");
        assert_eq!(json["isFinished"], false);
        assert_eq!(json["id"], 7);
        assert!(json.get("paperSize").is_none());
    }

    #[test]
    fn price_formatting() {
        assert_eq!(sample_orders()[0].formatted_price(), "₱300.00");
    }
}
