//! The recurring expense engine
//!
//! Walks the active templates and, for each one that is due, materializes a
//! concrete expense and advances the template by exactly one period. A
//! template several periods behind therefore catches up one period per run,
//! not all at once. One-time templates never advance and never fire again
//! once their schedule has no next period.

use chrono::NaiveDate;

use crate::models::{Expense, RecurringExpense};

/// Result of one engine run: the updated templates plus the expenses created
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub templates: Vec<RecurringExpense>,
    pub generated: Vec<Expense>,
}

/// Process all templates against the given day
pub fn process_due(templates: &[RecurringExpense], today: NaiveDate) -> ProcessOutcome {
    let mut updated = Vec::with_capacity(templates.len());
    let mut generated = Vec::new();

    for template in templates {
        if !template.is_due(today) {
            updated.push(template.clone());
            continue;
        }

        // A schedule with no next period produces nothing and stays put.
        let Some(next_due) = template.frequency.advance(template.next_due_date) else {
            updated.push(template.clone());
            continue;
        };

        generated.push(Expense::from_template(template));

        let mut advanced = template.clone();
        advanced.next_due_date = next_due;
        advanced.last_generated_date = Some(today);
        updated.push(advanced);
    }

    ProcessOutcome {
        templates: updated,
        generated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, Money};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn template(frequency: Frequency, start: NaiveDate) -> RecurringExpense {
        RecurringExpense::new("Gym", Money::from_cents(3500), "Health", frequency, start)
    }

    #[test]
    fn test_due_template_fires_and_advances() {
        let templates = vec![template(Frequency::Monthly, date(2024, 1, 1))];
        let outcome = process_due(&templates, date(2024, 1, 15));

        assert_eq!(outcome.generated.len(), 1);
        assert_eq!(outcome.generated[0].date, date(2024, 1, 1));
        assert_eq!(outcome.templates[0].next_due_date, date(2024, 2, 1));
        assert_eq!(outcome.templates[0].last_generated_date, Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_not_due_template_untouched() {
        let templates = vec![template(Frequency::Monthly, date(2024, 2, 1))];
        let outcome = process_due(&templates, date(2024, 1, 15));

        assert!(outcome.generated.is_empty());
        assert_eq!(outcome.templates, templates);
    }

    #[test]
    fn test_paused_template_does_not_fire() {
        let mut t = template(Frequency::Monthly, date(2024, 1, 1));
        t.is_active = false;
        let outcome = process_due(&[t.clone()], date(2024, 1, 15));

        assert!(outcome.generated.is_empty());
        assert_eq!(outcome.templates[0], t);
    }

    #[test]
    fn test_lagging_template_advances_one_period_per_run() {
        // Three months behind. Each run catches up a single period.
        let templates = vec![template(Frequency::Monthly, date(2024, 1, 1))];
        let today = date(2024, 3, 20);

        let first = process_due(&templates, today);
        assert_eq!(first.generated.len(), 1);
        assert_eq!(first.templates[0].next_due_date, date(2024, 2, 1));

        let second = process_due(&first.templates, today);
        assert_eq!(second.generated.len(), 1);
        assert_eq!(second.generated[0].date, date(2024, 2, 1));
        assert_eq!(second.templates[0].next_due_date, date(2024, 3, 1));
    }

    #[test]
    fn test_one_time_template_is_a_no_op() {
        let templates = vec![template(Frequency::OneTime, date(2024, 1, 1))];
        let outcome = process_due(&templates, date(2024, 1, 15));

        assert!(outcome.generated.is_empty());
        assert_eq!(outcome.templates, templates);
    }

    #[test]
    fn test_weekly_advances_seven_days() {
        let templates = vec![template(Frequency::Weekly, date(2024, 1, 1))];
        let outcome = process_due(&templates, date(2024, 1, 1));
        assert_eq!(outcome.templates[0].next_due_date, date(2024, 1, 8));
    }

    #[test]
    fn test_generated_expense_links_back_to_template() {
        let templates = vec![template(Frequency::Monthly, date(2024, 1, 1))];
        let outcome = process_due(&templates, date(2024, 1, 1));
        assert_eq!(
            outcome.generated[0].recurring_expense_id,
            Some(templates[0].id)
        );
    }
}
