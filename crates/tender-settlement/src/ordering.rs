//! Payment normalization: coupons before cash.
//!
//! Coupons reduce what is owed, so every coupon must be applied before
//! cash sufficiency is judged. The reorder is a stable two-bucket
//! partition: two payments of the same kind keep their input order.

use tender_types::Payment;

/// Return a new sequence with every coupon ahead of every cash payment.
///
/// The caller's slice is left untouched.
#[must_use]
pub fn coupons_first(payments: &[Payment]) -> Vec<Payment> {
    let (mut ordered, cash): (Vec<Payment>, Vec<Payment>) =
        payments.iter().copied().partition(Payment::is_coupon);
    ordered.extend(cash);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stays_empty() {
        assert!(coupons_first(&[]).is_empty());
    }

    #[test]
    fn coupons_move_ahead_of_cash() {
        let input = [Payment::cash(100), Payment::percent(10), Payment::cash(200)];
        let ordered = coupons_first(&input);
        assert_eq!(
            ordered,
            vec![Payment::percent(10), Payment::cash(100), Payment::cash(200)]
        );
    }

    #[test]
    fn same_kind_order_preserved() {
        let input = [
            Payment::cash(3),
            Payment::fixed(1),
            Payment::cash(1),
            Payment::percent(5),
            Payment::cash(2),
            Payment::fixed(2),
        ];
        let ordered = coupons_first(&input);
        assert_eq!(
            ordered,
            vec![
                Payment::fixed(1),
                Payment::percent(5),
                Payment::fixed(2),
                Payment::cash(3),
                Payment::cash(1),
                Payment::cash(2),
            ]
        );
    }

    #[test]
    fn input_not_mutated() {
        let input = vec![Payment::cash(1), Payment::fixed(1)];
        let before = input.clone();
        let _ = coupons_first(&input);
        assert_eq!(input, before);
    }
}
