use rust_decimal::{Decimal, RoundingStrategy};

/// Money as shown on cards, table rows and status messages: `"$8,675.00"`,
/// `"-$2,325.00"`. Cents round half away from zero.
pub(crate) fn format_amount(val: Decimal) -> String {
    let cents = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", cents.abs());
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("{}${}.{frac}", sign(cents), group_thousands(whole))
}

/// Whole-dollar bar labels, e.g. `"$2,000"`.
pub(crate) fn format_whole(val: Decimal) -> String {
    let dollars = val.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.0}", dollars.abs());
    format!("{}${}", sign(dollars), group_thousands(&digits))
}

/// Savings progress label, one decimal. Anything past 9999% is capped.
pub(crate) fn format_percent(val: Decimal) -> String {
    if val >= PERCENT_CAP {
        return format!(">{PERCENT_CAP}%");
    }
    format!("{:.1}%", val.round_dp(1))
}

const PERCENT_CAP: Decimal = Decimal::from_parts(9999, 0, 0, false, 0);

fn sign(val: Decimal) -> &'static str {
    if val.is_sign_negative() && !val.is_zero() {
        "-"
    } else {
        ""
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
