// src/common/currency.rs

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::common::error::AppError;

// Os registros guardam o valor como string de exibição ("$15,000"), igual ao
// que a tela mostra. Para somar (totais do funil, cards do dashboard) fazemos
// o parse ad hoc tirando "$" e ",".

/// Converte uma string de exibição ("$15,000") em Decimal.
pub fn parse_currency(display: &str) -> Result<Decimal, AppError> {
    let cleaned: String = display
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(AppError::InvalidCurrency(display.to_string()));
    }

    Decimal::from_str(&cleaned).map_err(|_| AppError::InvalidCurrency(display.to_string()))
}

/// Formata um Decimal de volta para a string de exibição ("$15,000").
/// Centavos só aparecem quando existem.
pub fn format_currency(value: Decimal) -> String {
    let negative = value.is_sign_negative();
    let abs = value.abs().normalize();

    let as_text = abs.to_string();
    let (whole, frac) = match as_text.split_once('.') {
        Some((w, f)) => (w.to_string(), Some(f.to_string())),
        None => (as_text, None),
    };

    // Separador de milhar a cada 3 dígitos
    let mut grouped = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    match frac {
        Some(f) => format!("{sign}${grouped}.{f}"),
        None => format!("{sign}${grouped}"),
    }
}
