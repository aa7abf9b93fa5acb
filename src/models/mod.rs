mod category;
mod expense;

pub use category::Category;
pub use expense::{parse_amount, parse_date, round_cents, Expense, DATE_FORMAT, MAX_AMOUNT};
