//! Amount formatting collaborator handed to the presentation layer.
//!
//! Totals are computed unrounded; rounding to minor units only happens here.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Number separators used when rendering amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
}

/// Turns a raw amount into display text.
pub trait AmountFormatter {
    fn format_amount(&self, amount: f64) -> String;
}

/// Currency-aware formatter driven by locale separators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyFormatter {
    pub code: CurrencyCode,
    pub locale: LocaleConfig,
    pub negative_style: NegativeStyle,
    pub display: CurrencyDisplay,
}

impl CurrencyFormatter {
    pub fn new(code: CurrencyCode) -> Self {
        Self {
            code,
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: LocaleConfig) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_negative_style(mut self, style: NegativeStyle) -> Self {
        self.negative_style = style;
        self
    }

    pub fn with_display(mut self, display: CurrencyDisplay) -> Self {
        self.display = display;
        self
    }
}

impl AmountFormatter for CurrencyFormatter {
    fn format_amount(&self, amount: f64) -> String {
        format_currency_value(
            amount,
            &self.code,
            &self.locale,
            self.negative_style,
            self.display,
        )
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "BRL" => "R$".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let mut rendered = format!("{}{}", sign, group_digits(digits, locale.grouping_separator));
    if let Some(frac) = frac_part {
        rendered.push(locale.decimal_separator);
        rendered.push_str(frac);
    }
    rendered
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    negative_style: NegativeStyle,
    display: CurrencyDisplay,
) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let prefixed = match display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol_for(code.as_str()), body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
    };
    // -0.004 rounds to zero and must not print a sign.
    let is_negative = amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    if !is_negative {
        return prefixed;
    }
    match negative_style {
        NegativeStyle::Sign => format!("-{}", prefixed),
        NegativeStyle::Parentheses => format!("({})", prefixed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_rounds_to_minor_units() {
        let formatter = CurrencyFormatter::default();
        assert_eq!(formatter.format_amount(1234567.891), "$1,234,567.89");
        assert_eq!(formatter.format_amount(15.5), "$15.50");
        assert_eq!(formatter.format_amount(0.0), "$0.00");
    }

    #[test]
    fn honours_locale_separators() {
        let formatter = CurrencyFormatter::new(CurrencyCode::new("eur")).with_locale(LocaleConfig {
            decimal_separator: ',',
            grouping_separator: '.',
        });
        assert_eq!(formatter.format_amount(1234.5), "€1.234,50");
    }

    #[test]
    fn negative_styles() {
        let sign = CurrencyFormatter::default();
        assert_eq!(sign.format_amount(-30.0), "-$30.00");
        let parens = CurrencyFormatter::default().with_negative_style(NegativeStyle::Parentheses);
        assert_eq!(parens.format_amount(-30.0), "($30.00)");
        assert_eq!(sign.format_amount(-0.001), "$0.00");
    }

    #[test]
    fn zero_decimal_currencies_and_code_display() {
        let yen = CurrencyFormatter::new(CurrencyCode::new("JPY")).with_display(CurrencyDisplay::Code);
        assert_eq!(yen.format_amount(1500.4), "JPY 1,500");
    }
}
