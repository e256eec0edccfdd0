use calculator::{compute_area, generate_fibonacci, Calculator, CalculatorError, PI, VERSION};
use tracing_subscriber::EnvFilter;

fn section(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn main() -> Result<(), CalculatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut calc = Calculator::default();

    section("Arithmetic");
    println!("2 + 3 = {}", calc.add(2.0, 3.0));
    println!("10 - 4 = {}", calc.subtract(10.0, 4.0));
    println!("6 * 7 = {}", calc.multiply(6.0, 7.0));
    println!("15 / 3 = {}", calc.divide(15.0, 3.0)?);

    section("Held value");
    println!("initial value: {}", calc.get_value());
    calc.set_value(42.5);
    println!("after set_value: {}", calc.get_value());
    println!("constructed value: {}", Calculator::new(100.0).get_value());

    section("Aggregates");
    let numbers = [1.5, 2.5, 3.5, 4.5, 5.5];
    println!("numbers: {:?}", numbers);
    println!("sum: {}", calc.sum(&numbers));
    println!("average: {}", calc.average(&numbers)?);

    section("Power");
    println!("2^8 = {}", Calculator::power(2.0, 8.0));

    section("Standalone functions");
    println!("area of circle with radius 10: {}", compute_area(10.0));
    println!("first 15 fibonacci numbers: {:?}", generate_fibonacci(15));

    section("Greeting");
    println!("{}", calc.greet("Developer"));

    section("Constants");
    println!("PI = {}", PI);
    println!("VERSION = {}", VERSION);

    section("Errors");
    if let Err(e) = calc.divide(10.0, 0.0) {
        println!("caught: {}", e);
    }
    if let Err(e) = calc.average(&[]) {
        println!("caught: {}", e);
    }
    Ok(())
}
