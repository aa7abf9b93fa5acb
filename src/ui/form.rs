use anyhow::Result;
use chrono::NaiveDate;

use crate::models::{parse_amount, parse_date, Category, Expense, DATE_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Date,
    Amount,
    Category,
    Description,
    Submit,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Date,
            Self::Amount,
            Self::Category,
            Self::Description,
            Self::Submit,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Description => "Description (Optional)",
            Self::Submit => "Add Expense",
        }
    }

    /// Fields edited by typing, as opposed to cycled or pressed.
    pub(crate) fn is_text(&self) -> bool {
        matches!(self, Self::Date | Self::Amount | Self::Description)
    }

    pub(crate) fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1).min(all.len() - 1)]
    }

    pub(crate) fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[idx.saturating_sub(1)]
    }
}

/// Input state for the Add Expense screen. Values stay as typed text until
/// submit, where they are parsed and validated together.
#[derive(Debug, Clone)]
pub(crate) struct ExpenseForm {
    pub(crate) date: String,
    pub(crate) amount: String,
    pub(crate) category: Category,
    pub(crate) description: String,
    pub(crate) field: FormField,
}

impl ExpenseForm {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            amount: String::new(),
            category: Category::all()[0],
            description: String::new(),
            field: FormField::Date,
        }
    }

    pub(crate) fn value(&self, field: FormField) -> String {
        match field {
            FormField::Date => self.date.clone(),
            FormField::Amount => self.amount.clone(),
            FormField::Category => self.category.to_string(),
            FormField::Description => self.description.clone(),
            FormField::Submit => String::new(),
        }
    }

    /// Store typed text into a text field. Other fields are left alone.
    pub(crate) fn set_text(&mut self, field: FormField, text: String) {
        match field {
            FormField::Date => self.date = text,
            FormField::Amount => self.amount = text,
            FormField::Description => self.description = text,
            FormField::Category | FormField::Submit => {}
        }
    }

    pub(crate) fn adjust(&mut self, delta: i32) {
        if self.field == FormField::Category {
            self.category = self.category.cycle(delta);
        }
    }

    pub(crate) fn to_expense(&self, today: NaiveDate) -> Result<Expense> {
        let date = parse_date(&self.date, today)?;
        let amount = parse_amount(&self.amount)?;
        Expense::new(date, amount, self.category, self.description.clone(), today)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_new_form_defaults() {
        let form = ExpenseForm::new(today());
        assert_eq!(form.date, "2024-06-01");
        assert!(form.amount.is_empty());
        assert_eq!(form.category, Category::FoodAndDining);
        assert_eq!(form.field, FormField::Date);
    }

    #[test]
    fn test_field_navigation_clamps() {
        assert_eq!(FormField::Date.prev(), FormField::Date);
        assert_eq!(FormField::Date.next(), FormField::Amount);
        assert_eq!(FormField::Description.next(), FormField::Submit);
        assert_eq!(FormField::Submit.next(), FormField::Submit);
    }

    #[test]
    fn test_adjust_only_on_category() {
        let mut form = ExpenseForm::new(today());
        form.adjust(1);
        assert_eq!(form.category, Category::FoodAndDining);
        form.field = FormField::Category;
        form.adjust(1);
        assert_eq!(form.category, Category::Shopping);
        form.adjust(-2);
        assert_eq!(form.category, Category::Other);
    }

    #[test]
    fn test_set_text_ignores_non_text_fields() {
        let mut form = ExpenseForm::new(today());
        form.set_text(FormField::Category, "Travel".into());
        assert_eq!(form.category, Category::FoodAndDining);
        form.set_text(FormField::Amount, "9.99".into());
        assert_eq!(form.value(FormField::Amount), "9.99");
    }

    #[test]
    fn test_to_expense() {
        let mut form = ExpenseForm::new(today());
        form.amount = "$1,000".into();
        form.description = "Rent".into();
        form.category = Category::Housing;
        let e = form.to_expense(today()).unwrap();
        assert_eq!(e.amount, dec!(1000));
        assert_eq!(e.date, today());
        assert_eq!(e.category, Category::Housing);
        assert_eq!(e.description, "Rent");
    }

    #[test]
    fn test_to_expense_validation_errors() {
        let mut form = ExpenseForm::new(today());
        assert!(form.to_expense(today()).is_err());
        form.amount = "0".into();
        assert!(form.to_expense(today()).is_err());
        form.amount = "5".into();
        form.date = "2024-06-02".into();
        assert!(form.to_expense(today()).is_err());
        form.date = "June 1".into();
        assert!(form.to_expense(today()).is_err());
    }
}
