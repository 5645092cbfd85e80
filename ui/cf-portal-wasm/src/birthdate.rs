//! Birth-date select population.
//!
//! Generates the day/month/year option entries and applies them to the
//! three select controls. Entry generation is pure so ranges and labels can
//! be unit tested; the current year is injected by the caller rather than
//! read from the clock here. Population clears a select before appending,
//! so a repeat call repopulates instead of doubling the options.

use crate::dom::{self, Elements};
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

/// Fixed English month names, calendar order. Option values are the
/// 1-based position in this list.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Oldest selectable birth year.
pub const FIRST_YEAR: u32 = 1900;

/// A (value, label) pair destined for a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

impl OptionEntry {
    /// Entry whose value and label are both the decimal form of `n`.
    fn numeric(n: u32) -> Self {
        let text = n.to_string();
        OptionEntry {
            value: text.clone(),
            label: text,
        }
    }
}

/// Days 1 through 31, in order. Always 31 regardless of month and year;
/// the backend owns calendar validity.
pub fn day_entries() -> Vec<OptionEntry> {
    (1..=31).map(OptionEntry::numeric).collect()
}

/// The twelve months in calendar order, valued 1 through 12.
pub fn month_entries() -> Vec<OptionEntry> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| OptionEntry {
            value: (index + 1).to_string(),
            label: (*name).to_string(),
        })
        .collect()
}

/// Years from `current_year` down to 1900 inclusive, descending.
pub fn year_entries(current_year: u32) -> Vec<OptionEntry> {
    (FIRST_YEAR..=current_year)
        .rev()
        .map(OptionEntry::numeric)
        .collect()
}

/// Populate the three birth-date selects. Safe to call again: each select
/// is cleared first.
pub fn populate(els: &Elements, current_year: u32) {
    fill_select(&els.day_select, &day_entries());
    fill_select(&els.month_select, &month_entries());
    fill_select(&els.year_select, &year_entries(current_year));
}

fn fill_select(sel: &HtmlSelectElement, entries: &[OptionEntry]) {
    dom::set_inner_html(sel.unchecked_ref(), "");
    for entry in entries {
        let opt = dom::create_option(&entry.value, &entry.label);
        sel.append_child(&opt).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_entries_cover_1_through_31_in_order() {
        let entries = day_entries();
        assert_eq!(entries.len(), 31);
        for (index, entry) in entries.iter().enumerate() {
            let expected = (index + 1).to_string();
            assert_eq!(entry.value, expected);
            assert_eq!(entry.label, expected);
        }
    }

    #[test]
    fn month_entries_pair_1_based_values_with_fixed_names() {
        let entries = month_entries();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].value, "1");
        assert_eq!(entries[0].label, "January");
        assert_eq!(entries[11].value, "12");
        assert_eq!(entries[11].label, "December");
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.value, (index + 1).to_string());
            assert_eq!(entry.label, MONTH_NAMES[index]);
        }
    }

    #[test]
    fn year_entries_descend_from_current_year_to_1900() {
        let entries = year_entries(2026);
        assert_eq!(entries.len(), (2026 - 1900 + 1) as usize);
        assert_eq!(entries.first().unwrap().value, "2026");
        assert_eq!(entries.last().unwrap().value, "1900");
        for pair in entries.windows(2) {
            let a: u32 = pair[0].value.parse().unwrap();
            let b: u32 = pair[1].value.parse().unwrap();
            assert_eq!(a, b + 1, "years must be contiguous and descending");
        }
    }

    #[test]
    fn year_entries_value_equals_label() {
        for entry in year_entries(1903) {
            assert_eq!(entry.value, entry.label);
        }
    }

    #[test]
    fn entry_generation_is_deterministic() {
        // Population applies a clear-then-append, so a second invocation
        // must produce the very same entries, never an appended duplicate
        // set.
        assert_eq!(day_entries(), day_entries());
        assert_eq!(month_entries(), month_entries());
        assert_eq!(year_entries(2026), year_entries(2026));
    }
}
