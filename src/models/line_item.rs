//! Line items: the editable rows of a budget
//!
//! Incomes and fixed expenses share the `{name, amount}` shape. Variable
//! expenses track a prediction and the amount actually spent so far.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::BudgetError;

/// The three row collections of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Income,
    Fixed,
    Variable,
}

impl Section {
    /// Tag used in the first CSV column
    pub const fn csv_tag(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Fixed => "Fixed",
            Self::Variable => "Variable",
        }
    }

    /// Look up a section from its CSV tag (exact match)
    pub fn from_csv_tag(tag: &str) -> Option<Self> {
        match tag {
            "Income" => Some(Self::Income),
            "Fixed" => Some(Self::Fixed),
            "Variable" => Some(Self::Variable),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.csv_tag())
    }
}

/// Editable field of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Amount,
    Predicted,
    Spent,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Amount => "amount",
            Self::Predicted => "predicted",
            Self::Spent => "spent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "amount" => Ok(Self::Amount),
            "predicted" => Ok(Self::Predicted),
            "spent" => Ok(Self::Spent),
            other => Err(BudgetError::Validation(format!("Unknown field: {}", other))),
        }
    }
}

/// Behaviour shared by every row type so collections can be edited generically
pub trait BudgetLine: Default + Clone {
    /// Set a field from raw user input. Numeric fields never fail to parse;
    /// a field the row type does not have is handed back as the error.
    fn set_field(&mut self, field: Field, raw: &str) -> Result<(), Field>;
}

/// An income or fixed-expense row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub name: String,
    pub amount: Money,
}

impl LineItem {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

impl BudgetLine for LineItem {
    fn set_field(&mut self, field: Field, raw: &str) -> Result<(), Field> {
        match field {
            Field::Name => self.name = raw.to_string(),
            Field::Amount => self.amount = Money::parse_or_zero(raw),
            Field::Predicted | Field::Spent => return Err(field),
        }
        Ok(())
    }
}

/// A variable expense: what was predicted and what has been spent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableItem {
    pub name: String,
    pub predicted: Money,
    pub spent: Money,
}

impl VariableItem {
    pub fn new(name: impl Into<String>, predicted: Money, spent: Money) -> Self {
        Self {
            name: name.into(),
            predicted,
            spent,
        }
    }

    /// Accumulate spending onto this category
    pub fn add_spent(&mut self, amount: Money) {
        self.spent += amount;
    }

    /// Predicted minus spent; negative once the category is overspent
    pub fn remaining(&self) -> Money {
        self.predicted - self.spent
    }

    pub fn is_overspent(&self) -> bool {
        self.spent > self.predicted
    }
}

impl BudgetLine for VariableItem {
    fn set_field(&mut self, field: Field, raw: &str) -> Result<(), Field> {
        match field {
            Field::Name => self.name = raw.to_string(),
            Field::Predicted => self.predicted = Money::parse_or_zero(raw),
            Field::Spent => self.spent = Money::parse_or_zero(raw),
            Field::Amount => return Err(field),
        }
        Ok(())
    }
}
