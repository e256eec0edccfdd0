use crate::{generate_fibonacci, Calculator, CalculatorError};
use proptest::prelude::*;

fn any_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::ANY
}

fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1e12_f64..1e12, min_len..=max_len)
}

/// Equality under IEEE 754 which also treats two NaNs as equal.
fn same_f64(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn arithmetic_matches_operators(a in any_f64(), b in any_f64()) {
        let calc = Calculator::default();
        prop_assert!(same_f64(calc.add(a, b), a + b));
        prop_assert!(same_f64(calc.subtract(a, b), a - b));
        prop_assert!(same_f64(calc.multiply(a, b), a * b));
    }

    #[test]
    fn divide_matches_operator_unless_zero(a in any_f64(), b in any_f64()) {
        let calc = Calculator::default();
        match calc.divide(a, b) {
            Ok(v) => {
                prop_assert!(b != 0.0);
                prop_assert!(same_f64(v, a / b));
            }
            Err(e) => {
                prop_assert_eq!(b, 0.0);
                prop_assert_eq!(e, CalculatorError::DivisionByZero);
            }
        }
    }

    #[test]
    fn divide_by_signed_zero_fails(a in any_f64(), negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        prop_assert_eq!(
            Calculator::default().divide(a, zero),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn average_is_sum_over_len(data in finite_vec(1, 100)) {
        let calc = Calculator::default();
        let expected = calc.sum(&data) / data.len() as f64;
        prop_assert_eq!(calc.average(&data).unwrap(), expected);
    }

    #[test]
    fn set_then_get(values in proptest::collection::vec(any_f64(), 1..20)) {
        let mut calc = Calculator::default();
        for v in values {
            calc.set_value(v);
            prop_assert!(same_f64(calc.get_value(), v));
            prop_assert!(same_f64(calc.get_value(), v));
        }
    }

    #[test]
    fn fibonacci_length(n in -50_i64..200) {
        prop_assert_eq!(generate_fibonacci(n).len() as i64, n.max(0));
    }

    #[test]
    fn fibonacci_recurrence(n in 3_i64..93) {
        let fib = generate_fibonacci(n);
        prop_assert_eq!(fib[0], 0);
        prop_assert_eq!(fib[1], 1);
        for i in 2..fib.len() {
            prop_assert_eq!(fib[i], fib[i - 1] + fib[i - 2]);
        }
    }
}
