//! Selectable years for the dashboard.

/// Lists every year from `start_year` through `current_year`, most recent first.
#[must_use]
pub fn years_to_fetch(start_year: i32, current_year: i32) -> Vec<i32> {
    (start_year..=current_year).rev().collect()
}

/// Returns true if `year` is offered by the year selector.
#[must_use]
pub fn is_selectable_year(year: i32, start_year: i32, current_year: i32) -> bool {
    (start_year..=current_year).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_to_fetch_descending() {
        assert_eq!(years_to_fetch(2018, 2021), vec![2021, 2020, 2019, 2018]);
    }

    #[test]
    fn test_years_to_fetch_single_year() {
        assert_eq!(years_to_fetch(2024, 2024), vec![2024]);
    }

    #[test]
    fn test_years_to_fetch_empty_when_start_after_current() {
        assert!(years_to_fetch(2030, 2024).is_empty());
    }

    #[test]
    fn test_is_selectable_year() {
        assert!(is_selectable_year(2018, 2018, 2024));
        assert!(is_selectable_year(2024, 2018, 2024));
        assert!(!is_selectable_year(2017, 2018, 2024));
        assert!(!is_selectable_year(2025, 2018, 2024));
    }
}
